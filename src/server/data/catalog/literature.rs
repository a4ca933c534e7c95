use entity::literature::{ActiveModel, Column, Entity, Model};
use entity::lookups::{author, binding_type, literature_type, publisher};
use sea_orm::{
    sea_query::SimpleExpr, ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    QueryFilter,
};

use crate::{
    model::{
        catalog::ItemKind,
        literature::{LiteraturePayload, LiteratureSearchFilterDto},
    },
    server::{
        data::{
            catalog::item::{
                non_empty, text_contains, text_eq, CatalogEntity, ItemRepository, SeriesBoundEntity,
            },
            lookup,
        },
        error::catalog::CatalogError,
    },
};

pub type LiteratureRepository<'a, C> = ItemRepository<'a, C, Entity>;

impl CatalogEntity for Entity {
    type Active = ActiveModel;
    type Payload = LiteraturePayload;
    type Filter = LiteratureSearchFilterDto;

    const KIND: ItemKind = ItemKind::Literature;

    fn id_column() -> Column {
        Column::Id
    }

    fn name_column() -> Column {
        Column::Title
    }

    fn price_column() -> Column {
        Column::Price
    }

    fn photo_url_column() -> Column {
        Column::PhotoUrl
    }

    fn storage_area_column() -> Column {
        Column::StorageAreaId
    }

    fn type_condition(name: &str) -> SimpleExpr {
        Column::LiteratureTypeId.in_subquery(lookup::ids_by_name::<literature_type::Entity>(name))
    }

    fn payload_name(payload: &LiteraturePayload) -> &str {
        &payload.title
    }

    fn conflict_condition(payload: &LiteraturePayload) -> Option<(SimpleExpr, String)> {
        let isbn = payload.isbn.as_deref().map(str::trim).filter(|v| !v.is_empty())?;

        Some((
            text_eq(Column::Isbn, isbn),
            format!("A literature record with ISBN '{isbn}' already exists."),
        ))
    }

    fn insert_model(payload: &LiteraturePayload) -> ActiveModel {
        ActiveModel {
            title: ActiveValue::Set(payload.title.clone()),
            availability: ActiveValue::Set(payload.availability),
            price: ActiveValue::Set(payload.price),
            author_id: ActiveValue::Set(payload.author_id),
            publication_year: ActiveValue::Set(payload.publication_year),
            publisher_id: ActiveValue::Set(payload.publisher_id),
            isbn: ActiveValue::Set(payload.isbn.clone()),
            literature_type_id: ActiveValue::Set(payload.literature_type_id),
            binding_type_id: ActiveValue::Set(payload.binding_type_id),
            description: ActiveValue::Set(payload.description.clone()),
            storage_area_id: ActiveValue::Set(payload.storage_area_id),
            series_id: ActiveValue::Set(payload.series_id),
            ..Default::default()
        }
    }

    fn overwrite_model(id: i32, payload: &LiteraturePayload) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Set(id),
            ..Self::insert_model(payload)
        }
    }

    fn filter_condition(filter: &LiteratureSearchFilterDto) -> Condition {
        let mut condition = Condition::all();

        if let Some(title) = non_empty(&filter.title) {
            condition = condition.add(text_contains(Column::Title, title));
        }
        if let Some(author) = non_empty(&filter.author) {
            condition = condition
                .add(Column::AuthorId.in_subquery(lookup::ids_by_name::<author::Entity>(author)));
        }
        if let Some(min_price) = filter.min_price {
            condition = condition.add(Column::Price.gte(min_price));
        }
        if let Some(max_price) = filter.max_price {
            condition = condition.add(Column::Price.lte(max_price));
        }
        if let Some(year_published) = filter.year_published {
            condition = condition.add(Column::PublicationYear.eq(year_published));
        }
        if let Some(publication_year_from) = filter.publication_year_from {
            condition = condition.add(Column::PublicationYear.gte(publication_year_from));
        }
        if let Some(publication_year_to) = filter.publication_year_to {
            condition = condition.add(Column::PublicationYear.lte(publication_year_to));
        }
        if let Some(publisher) = non_empty(&filter.publisher) {
            condition = condition.add(
                Column::PublisherId.in_subquery(lookup::ids_by_name::<publisher::Entity>(publisher)),
            );
        }
        if let Some(isbn) = non_empty(&filter.isbn) {
            condition = condition.add(text_eq(Column::Isbn, isbn));
        }
        if let Some(literature_type) = non_empty(&filter.literature_type) {
            condition = condition.add(Self::type_condition(literature_type));
        }
        if let Some(binding_type) = non_empty(&filter.binding_type) {
            condition = condition.add(
                Column::BindingTypeId
                    .in_subquery(lookup::ids_by_name::<binding_type::Entity>(binding_type)),
            );
        }

        condition
    }
}

impl SeriesBoundEntity for Entity {
    type Series = entity::literature_series::Entity;

    fn series_column() -> Column {
        Column::SeriesId
    }
}

/// Literature-only attribute filters on top of the shared contract.
impl<'a, C: ConnectionTrait> LiteratureRepository<'a, C> {
    pub async fn by_author(&self, author: &str) -> Result<Vec<Model>, CatalogError> {
        let items = Entity::find()
            .filter(Column::AuthorId.in_subquery(lookup::ids_by_name::<author::Entity>(author)))
            .all(self.db)
            .await?;

        Ok(items)
    }

    pub async fn by_publisher(&self, publisher: &str) -> Result<Vec<Model>, CatalogError> {
        let items = Entity::find()
            .filter(
                Column::PublisherId.in_subquery(lookup::ids_by_name::<publisher::Entity>(publisher)),
            )
            .all(self.db)
            .await?;

        Ok(items)
    }

    pub async fn by_isbn(&self, isbn: &str) -> Result<Vec<Model>, CatalogError> {
        let items = Entity::find()
            .filter(text_eq(Column::Isbn, isbn))
            .all(self.db)
            .await?;

        Ok(items)
    }

    pub async fn by_binding_type(&self, binding_type: &str) -> Result<Vec<Model>, CatalogError> {
        let items = Entity::find()
            .filter(
                Column::BindingTypeId
                    .in_subquery(lookup::ids_by_name::<binding_type::Entity>(binding_type)),
            )
            .all(self.db)
            .await?;

        Ok(items)
    }

    pub async fn by_publication_year(&self, year: i32) -> Result<Vec<Model>, CatalogError> {
        let items = Entity::find()
            .filter(Column::PublicationYear.eq(year))
            .all(self.db)
            .await?;

        Ok(items)
    }

    /// Inclusive year-bound filter; range sanity is the caller's job.
    pub async fn by_publication_year_range(
        &self,
        start_year: i32,
        end_year: i32,
    ) -> Result<Vec<Model>, CatalogError> {
        let items = Entity::find()
            .filter(Column::PublicationYear.between(start_year, end_year))
            .all(self.db)
            .await?;

        Ok(items)
    }
}
