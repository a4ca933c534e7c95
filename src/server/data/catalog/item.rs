use std::marker::PhantomData;

use rust_decimal::Decimal;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, SimpleExpr},
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    IntoActiveModel, QueryFilter, QuerySelect,
};

use crate::{
    model::catalog::ItemKind,
    server::{data::lookup, error::catalog::CatalogError},
};

/// Case-insensitive exact match on a text column. Null columns never match.
pub(crate) fn text_eq<C: ColumnTrait>(column: C, value: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).eq(value.trim().to_lowercase())
}

/// Case-insensitive substring match on a text column.
pub(crate) fn text_contains<C: ColumnTrait>(column: C, value: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(format!("%{}%", value.trim().to_lowercase()))
}

/// Filter fields are only constraints when present and non-blank.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Schema descriptor implemented by each item category's entity type.
///
/// The generic [`ItemRepository`] works entirely through this trait: column
/// accessors for the fields every category shares, payload-to-active-model
/// conversion, and the per-category pieces of attribute filtering. Lookup
/// names resolve through `IN (SELECT id ...)` subqueries built by
/// [`lookup::ids_by_name`], which keeps every method here synchronous.
pub trait CatalogEntity: EntityTrait {
    /// Active model used for inserts and overwrites.
    type Active: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send + 'static;
    /// Mutable-field payload accepted by create and update.
    type Payload: Send + Sync;
    /// Structured search filter.
    type Filter: Send + Sync;

    const KIND: ItemKind;

    fn id_column() -> Self::Column;
    fn name_column() -> Self::Column;
    fn price_column() -> Self::Column;
    fn photo_url_column() -> Self::Column;
    fn storage_area_column() -> Self::Column;

    /// Shared optional attribute columns. Categories without the attribute
    /// return `None`; their filter endpoints are simply not routed.
    fn origin_column() -> Option<Self::Column> {
        None
    }
    fn era_column() -> Option<Self::Column> {
        None
    }
    fn material_column() -> Option<Self::Column> {
        None
    }

    /// Condition matching items whose required type lookup carries `name`.
    fn type_condition(name: &str) -> SimpleExpr;

    /// Name/title carried by a payload, checked for uniqueness on create.
    fn payload_name(payload: &Self::Payload) -> &str;

    /// Additional uniqueness check on create beyond the name (literature's
    /// ISBN). Returns the match condition and the conflict message.
    fn conflict_condition(_payload: &Self::Payload) -> Option<(SimpleExpr, String)> {
        None
    }

    /// Active model inserting a new row. The id stays unset and the photo
    /// URL starts empty.
    fn insert_model(payload: &Self::Payload) -> Self::Active;

    /// Active model overwriting every payload field of row `id`,
    /// last-write-wins. The photo URL is left untouched; it only changes
    /// through the upload path.
    fn overwrite_model(id: i32, payload: &Self::Payload) -> Self::Active;

    /// Conjunction of whichever filter fields are populated.
    fn filter_condition(filter: &Self::Filter) -> Condition;
}

/// Implemented by the categories that support series grouping.
pub trait SeriesBoundEntity: CatalogEntity {
    type Series: crate::server::data::series::SeriesEntity;

    fn series_column() -> Self::Column;
}

/// Generic repository covering the per-category item contract.
///
/// Instantiated once per category through the `XxxRepository` aliases in the
/// sibling modules.
pub struct ItemRepository<'a, C: ConnectionTrait, E: CatalogEntity> {
    pub(crate) db: &'a C,
    entity: PhantomData<E>,
}

impl<'a, C, E> ItemRepository<'a, C, E>
where
    C: ConnectionTrait,
    E: CatalogEntity,
    E::Model: IntoActiveModel<E::Active>,
{
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    pub async fn get(&self, id: i32) -> Result<E::Model, CatalogError> {
        E::find()
            .filter(E::id_column().eq(id))
            .one(self.db)
            .await?
            .ok_or(CatalogError::ItemNotFound { kind: E::KIND, id })
    }

    /// Offset pagination over the whole category. Row order is whatever the
    /// store returns; callers must not rely on it.
    pub async fn list(
        &self,
        page_number: u64,
        page_size: u64,
    ) -> Result<Vec<E::Model>, CatalogError> {
        let items = E::find()
            .offset(page_number.saturating_sub(1) * page_size)
            .limit(page_size)
            .all(self.db)
            .await?;

        Ok(items)
    }

    /// Inserts a new item after checking that no item of this category
    /// already carries the payload's name, compared case-insensitively.
    pub async fn create(&self, payload: &E::Payload) -> Result<E::Model, CatalogError> {
        let name = E::payload_name(payload);
        let taken = E::find()
            .filter(text_eq(E::name_column(), name))
            .one(self.db)
            .await?
            .is_some();

        if taken {
            return Err(CatalogError::Conflict(format!(
                "A {} named '{}' already exists.",
                E::KIND,
                name
            )));
        }

        if let Some((condition, message)) = E::conflict_condition(payload) {
            let conflicting = E::find().filter(condition).one(self.db).await?.is_some();
            if conflicting {
                return Err(CatalogError::Conflict(message));
            }
        }

        let created = E::insert_model(payload).insert(self.db).await?;

        Ok(created)
    }

    /// Overwrites every payload field of an existing item. The path id wins
    /// over anything the payload claims; name uniqueness is not re-checked.
    pub async fn update(&self, id: i32, payload: &E::Payload) -> Result<E::Model, CatalogError> {
        let exists = E::find()
            .filter(E::id_column().eq(id))
            .one(self.db)
            .await?
            .is_some();

        if !exists {
            return Err(CatalogError::ItemNotFound { kind: E::KIND, id });
        }

        let updated = E::overwrite_model(id, payload).update(self.db).await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), CatalogError> {
        let result = E::delete_many()
            .filter(E::id_column().eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(CatalogError::ItemNotFound { kind: E::KIND, id });
        }

        Ok(())
    }

    /// Persists the storage path of an uploaded photo. Called by the upload
    /// collaborator, never by the category's own controller.
    pub async fn update_photo_url(&self, id: i32, photo_url: &str) -> Result<(), CatalogError> {
        let result = E::update_many()
            .col_expr(
                E::photo_url_column(),
                Expr::value(Some(photo_url.to_string())),
            )
            .filter(E::id_column().eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(CatalogError::ItemNotFound { kind: E::KIND, id });
        }

        Ok(())
    }

    /// Inclusive price-bound filter. Range sanity (`min <= max`) is the
    /// caller's responsibility; an unsatisfiable range yields no rows.
    pub async fn by_price_range(
        &self,
        min_price: Decimal,
        max_price: Decimal,
    ) -> Result<Vec<E::Model>, CatalogError> {
        let items = E::find()
            .filter(E::price_column().between(min_price, max_price))
            .all(self.db)
            .await?;

        Ok(items)
    }

    pub async fn by_type(&self, type_name: &str) -> Result<Vec<E::Model>, CatalogError> {
        let items = E::find()
            .filter(E::type_condition(type_name))
            .all(self.db)
            .await?;

        Ok(items)
    }

    pub async fn by_origin(&self, origin: &str) -> Result<Vec<E::Model>, CatalogError> {
        let Some(column) = E::origin_column() else {
            return Ok(Vec::new());
        };

        let items = E::find()
            .filter(column.in_subquery(lookup::ids_by_name::<entity::lookups::origin::Entity>(
                origin,
            )))
            .all(self.db)
            .await?;

        Ok(items)
    }

    pub async fn by_era(&self, era: &str) -> Result<Vec<E::Model>, CatalogError> {
        let Some(column) = E::era_column() else {
            return Ok(Vec::new());
        };

        let items = E::find()
            .filter(column.in_subquery(lookup::ids_by_name::<entity::lookups::era::Entity>(era)))
            .all(self.db)
            .await?;

        Ok(items)
    }

    pub async fn by_material(&self, material: &str) -> Result<Vec<E::Model>, CatalogError> {
        let Some(column) = E::material_column() else {
            return Ok(Vec::new());
        };

        let items = E::find()
            .filter(
                column.in_subquery(lookup::ids_by_name::<entity::lookups::material::Entity>(
                    material,
                )),
            )
            .all(self.db)
            .await?;

        Ok(items)
    }

    /// Members of a storage area; the area itself must exist.
    pub async fn by_storage_area(
        &self,
        storage_area_id: i32,
    ) -> Result<Vec<E::Model>, CatalogError> {
        if !self.storage_area_exists(storage_area_id).await? {
            return Err(CatalogError::StorageAreaNotFound(storage_area_id));
        }

        let items = E::find()
            .filter(E::storage_area_column().eq(storage_area_id))
            .all(self.db)
            .await?;

        Ok(items)
    }

    pub async fn assign_to_storage_area(
        &self,
        id: i32,
        storage_area_id: i32,
    ) -> Result<(), CatalogError> {
        if !self.storage_area_exists(storage_area_id).await? {
            return Err(CatalogError::StorageAreaNotFound(storage_area_id));
        }

        let result = E::update_many()
            .col_expr(E::storage_area_column(), Expr::value(Some(storage_area_id)))
            .filter(E::id_column().eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(CatalogError::ItemNotFound { kind: E::KIND, id });
        }

        Ok(())
    }

    /// Nulls out membership for every item in the given storage area.
    /// Deleting an area does not cascade; the caller decides when members
    /// are released.
    pub async fn clear_storage_area(&self, storage_area_id: i32) -> Result<u64, CatalogError> {
        let result = E::update_many()
            .col_expr(E::storage_area_column(), Expr::value(Option::<i32>::None))
            .filter(E::storage_area_column().eq(storage_area_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Conjunctive structured search; unset filter fields impose no
    /// constraint and an all-empty filter returns the whole category.
    pub async fn search(&self, filter: &E::Filter) -> Result<Vec<E::Model>, CatalogError> {
        let items = E::find()
            .filter(E::filter_condition(filter))
            .all(self.db)
            .await?;

        Ok(items)
    }

    /// Case-insensitive substring match against the name/title field only.
    /// Blank queries return nothing rather than everything.
    pub async fn simple_search(&self, query: &str) -> Result<Vec<E::Model>, CatalogError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items = E::find()
            .filter(text_contains(E::name_column(), query))
            .all(self.db)
            .await?;

        Ok(items)
    }

    async fn storage_area_exists(&self, storage_area_id: i32) -> Result<bool, CatalogError> {
        let area = entity::prelude::StorageArea::find()
            .filter(entity::storage_area::Column::Id.eq(storage_area_id))
            .one(self.db)
            .await?;

        Ok(area.is_some())
    }
}

impl<'a, C, E> ItemRepository<'a, C, E>
where
    C: ConnectionTrait,
    E: SeriesBoundEntity,
    E::Model: IntoActiveModel<E::Active>,
{
    /// Members of a series; the series itself must exist.
    pub async fn by_series(&self, series_id: i32) -> Result<Vec<E::Model>, CatalogError> {
        if !self.series_exists(series_id).await? {
            return Err(CatalogError::SeriesNotFound {
                kind: E::KIND,
                id: series_id,
            });
        }

        let items = E::find()
            .filter(E::series_column().eq(series_id))
            .all(self.db)
            .await?;

        Ok(items)
    }

    pub async fn assign_to_series(&self, id: i32, series_id: i32) -> Result<(), CatalogError> {
        if !self.series_exists(series_id).await? {
            return Err(CatalogError::SeriesNotFound {
                kind: E::KIND,
                id: series_id,
            });
        }

        let result = E::update_many()
            .col_expr(E::series_column(), Expr::value(Some(series_id)))
            .filter(E::id_column().eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(CatalogError::ItemNotFound { kind: E::KIND, id });
        }

        Ok(())
    }

    /// Nulls out membership for every item in the given series. Series
    /// deletion never cascades to items; the caller owns this decision.
    pub async fn clear_series(&self, series_id: i32) -> Result<u64, CatalogError> {
        let result = E::update_many()
            .col_expr(E::series_column(), Expr::value(Option::<i32>::None))
            .filter(E::series_column().eq(series_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    async fn series_exists(&self, series_id: i32) -> Result<bool, CatalogError> {
        use crate::server::data::series::SeriesEntity;

        let series = <E::Series as EntityTrait>::find()
            .filter(<E::Series as SeriesEntity>::id_column().eq(series_id))
            .one(self.db)
            .await?;

        Ok(series.is_some())
    }
}
