//! Series repositories.
//!
//! Literature, insignia, and artifact series share one wire shape and one
//! generic repository; [`SeriesEntity`] describes the per-kind entity.
//! Deleting a series has no cascading side effects here; releasing member
//! items is the caller's decision (see the series controllers).

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    IntoActiveModel, QueryFilter, QuerySelect,
};

use crate::{
    model::{
        catalog::ItemKind,
        series::{SeriesDto, SeriesPayload},
    },
    server::{data::catalog::item::text_eq, error::catalog::CatalogError},
};

/// Descriptor implemented by the three series entity types.
pub trait SeriesEntity: EntityTrait {
    type Active: ActiveModelTrait<Entity = Self> + ActiveModelBehavior + Send + 'static;

    /// Item category this series kind groups.
    const KIND: ItemKind;

    fn id_column() -> Self::Column;
    fn name_column() -> Self::Column;
    fn insert_model(payload: &SeriesPayload) -> Self::Active;
    fn overwrite_model(id: i32, payload: &SeriesPayload) -> Self::Active;
    fn into_dto(model: Self::Model) -> SeriesDto;
}

macro_rules! impl_series_entity {
    ($module:ident, $kind:expr) => {
        impl SeriesEntity for entity::$module::Entity {
            type Active = entity::$module::ActiveModel;

            const KIND: ItemKind = $kind;

            fn id_column() -> entity::$module::Column {
                entity::$module::Column::Id
            }

            fn name_column() -> entity::$module::Column {
                entity::$module::Column::SeriesName
            }

            fn insert_model(payload: &SeriesPayload) -> entity::$module::ActiveModel {
                entity::$module::ActiveModel {
                    series_name: ActiveValue::Set(payload.series_name.clone()),
                    description: ActiveValue::Set(payload.description.clone()),
                    ..Default::default()
                }
            }

            fn overwrite_model(id: i32, payload: &SeriesPayload) -> entity::$module::ActiveModel {
                entity::$module::ActiveModel {
                    id: ActiveValue::Set(id),
                    ..Self::insert_model(payload)
                }
            }

            fn into_dto(model: entity::$module::Model) -> SeriesDto {
                SeriesDto {
                    id: model.id,
                    series_name: model.series_name,
                    description: model.description,
                }
            }
        }
    };
}

impl_series_entity!(literature_series, ItemKind::Literature);
impl_series_entity!(insignia_series, ItemKind::Insignia);
impl_series_entity!(artifact_series, ItemKind::Artifact);

pub type LiteratureSeriesRepository<'a, C> =
    SeriesRepository<'a, C, entity::literature_series::Entity>;
pub type InsigniaSeriesRepository<'a, C> = SeriesRepository<'a, C, entity::insignia_series::Entity>;
pub type ArtifactSeriesRepository<'a, C> = SeriesRepository<'a, C, entity::artifact_series::Entity>;

pub struct SeriesRepository<'a, C: ConnectionTrait, E: SeriesEntity> {
    db: &'a C,
    entity: PhantomData<E>,
}

impl<'a, C, E> SeriesRepository<'a, C, E>
where
    C: ConnectionTrait,
    E: SeriesEntity,
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
            .ok_or(CatalogError::SeriesNotFound { kind: E::KIND, id })
    }

    pub async fn list(
        &self,
        page_number: u64,
        page_size: u64,
    ) -> Result<Vec<E::Model>, CatalogError> {
        let series = E::find()
            .offset(page_number.saturating_sub(1) * page_size)
            .limit(page_size)
            .all(self.db)
            .await?;

        Ok(series)
    }

    /// Inserts a new series after checking the name is not already taken,
    /// compared case-insensitively.
    pub async fn create(&self, payload: &SeriesPayload) -> Result<E::Model, CatalogError> {
        let taken = E::find()
            .filter(text_eq(E::name_column(), &payload.series_name))
            .one(self.db)
            .await?
            .is_some();

        if taken {
            return Err(CatalogError::Conflict(format!(
                "A {} series named '{}' already exists.",
                E::KIND,
                payload.series_name
            )));
        }

        let created = E::insert_model(payload).insert(self.db).await?;

        Ok(created)
    }

    /// Overwrites the series fields; the path id wins over the payload.
    pub async fn update(&self, id: i32, payload: &SeriesPayload) -> Result<E::Model, CatalogError> {
        let exists = E::find()
            .filter(E::id_column().eq(id))
            .one(self.db)
            .await?
            .is_some();

        if !exists {
            return Err(CatalogError::SeriesNotFound { kind: E::KIND, id });
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
            return Err(CatalogError::SeriesNotFound { kind: E::KIND, id });
        }

        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, CatalogError> {
        let series = E::find()
            .filter(E::id_column().eq(id))
            .one(self.db)
            .await?;

        Ok(series.is_some())
    }
}

#[cfg(test)]
mod tests {
    use homebase_test_utils::prelude::*;

    use crate::{
        model::series::SeriesPayload,
        server::{
            data::series::{InsigniaSeriesRepository, LiteratureSeriesRepository},
            error::catalog::CatalogError,
        },
    };

    fn series_payload(name: &str) -> SeriesPayload {
        SeriesPayload {
            series_name: name.to_string(),
            description: Some("Wartime printings only".to_string()),
        }
    }

    mod create {
        use super::*;

        /// Expect Ok with a generated id when creating a series
        #[tokio::test]
        async fn creates_series() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::LiteratureSeries)?;

            let repository = LiteratureSeriesRepository::new(&test.state.db);
            let result = repository.create(&series_payload("Osprey Men-at-Arms")).await;

            assert!(result.is_ok(), "Error: {:?}", result);
            let created = result.unwrap();
            assert!(created.id > 0);
            assert_eq!(created.series_name, "Osprey Men-at-Arms");

            Ok(())
        }

        /// Series names are unique, compared case-insensitively
        #[tokio::test]
        async fn rejects_duplicate_name() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::LiteratureSeries)?;

            let repository = LiteratureSeriesRepository::new(&test.state.db);
            repository.create(&series_payload("Osprey Men-at-Arms")).await?;

            let duplicate = repository.create(&series_payload("osprey men-at-arms")).await;
            assert!(matches!(duplicate, Err(CatalogError::Conflict(_))));

            Ok(())
        }

        /// The two series kinds keep separate namespaces
        #[tokio::test]
        async fn name_uniqueness_is_per_kind() -> Result<(), TestError> {
            let test = test_setup_with_tables!(
                entity::prelude::LiteratureSeries,
                entity::prelude::InsigniaSeries
            )?;

            LiteratureSeriesRepository::new(&test.state.db)
                .create(&series_payload("Campaign Collection"))
                .await?;
            let result = InsigniaSeriesRepository::new(&test.state.db)
                .create(&series_payload("Campaign Collection"))
                .await;

            assert!(result.is_ok());

            Ok(())
        }
    }

    mod get {
        use super::*;

        /// A created series reads back by id
        #[tokio::test]
        async fn finds_existing_series() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::LiteratureSeries)?;

            let repository = LiteratureSeriesRepository::new(&test.state.db);
            let created = repository.create(&series_payload("Osprey Men-at-Arms")).await?;

            let fetched = repository.get(created.id).await?;
            assert_eq!(fetched, created);

            Ok(())
        }

        /// Expect SeriesNotFound for an id that was never created
        #[tokio::test]
        async fn returns_not_found_for_nonexistent_series() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::LiteratureSeries)?;

            let repository = LiteratureSeriesRepository::new(&test.state.db);
            let result = repository.get(1).await;

            assert!(matches!(
                result,
                Err(CatalogError::SeriesNotFound { id: 1, .. })
            ));

            Ok(())
        }
    }

    mod update {
        use super::*;

        /// Update overwrites the series fields and keeps the path id
        #[tokio::test]
        async fn overwrites_series_fields() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::LiteratureSeries)?;

            let repository = LiteratureSeriesRepository::new(&test.state.db);
            let created = repository.create(&series_payload("Osprey Men-at-Arms")).await?;

            let updated = repository
                .update(created.id, &series_payload("Osprey Campaign"))
                .await?;

            assert_eq!(updated.id, created.id);
            assert_eq!(updated.series_name, "Osprey Campaign");

            Ok(())
        }

        /// Expect SeriesNotFound when updating an absent id
        #[tokio::test]
        async fn returns_not_found_for_nonexistent_series() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::LiteratureSeries)?;

            let repository = LiteratureSeriesRepository::new(&test.state.db);
            let result = repository.update(1, &series_payload("Osprey Campaign")).await;

            assert!(matches!(
                result,
                Err(CatalogError::SeriesNotFound { id: 1, .. })
            ));

            Ok(())
        }
    }

    mod delete {
        use super::*;

        /// A deleted series is gone on the next read
        #[tokio::test]
        async fn deletes_existing_series() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::LiteratureSeries)?;

            let repository = LiteratureSeriesRepository::new(&test.state.db);
            let created = repository.create(&series_payload("Osprey Men-at-Arms")).await?;

            repository.delete(created.id).await?;

            assert!(!repository.exists(created.id).await?);

            Ok(())
        }

        /// Deleting an absent id reports SeriesNotFound
        #[tokio::test]
        async fn returns_not_found_for_nonexistent_series() -> Result<(), TestError> {
            let test = test_setup_with_tables!(entity::prelude::LiteratureSeries)?;

            let repository = LiteratureSeriesRepository::new(&test.state.db);
            let result = repository.delete(1).await;

            assert!(matches!(
                result,
                Err(CatalogError::SeriesNotFound { id: 1, .. })
            ));

            Ok(())
        }
    }
}
