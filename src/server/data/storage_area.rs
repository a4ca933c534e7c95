//! Storage area repository.
//!
//! Physical storage locations every item category can be assigned to.
//! Deleting an area has no cascading side effects here; releasing member
//! items is the caller's decision (see the storage-area controller).

use entity::storage_area::{ActiveModel, Column, Entity, Model};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::{
    model::storage_area::StorageAreaPayload,
    server::{data::catalog::item::text_eq, error::catalog::CatalogError},
};

pub struct StorageAreaRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StorageAreaRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(&self, id: i32) -> Result<Model, CatalogError> {
        Entity::find()
            .filter(Column::Id.eq(id))
            .one(self.db)
            .await?
            .ok_or(CatalogError::StorageAreaNotFound(id))
    }

    pub async fn list(&self, page_number: u64, page_size: u64) -> Result<Vec<Model>, CatalogError> {
        let areas = Entity::find()
            .offset(page_number.saturating_sub(1) * page_size)
            .limit(page_size)
            .all(self.db)
            .await?;

        Ok(areas)
    }

    /// Inserts a new storage area after checking the name is not already
    /// taken, compared case-insensitively.
    pub async fn create(&self, payload: &StorageAreaPayload) -> Result<Model, CatalogError> {
        let taken = Entity::find()
            .filter(text_eq(Column::StorageAreaName, &payload.storage_area_name))
            .one(self.db)
            .await?
            .is_some();

        if taken {
            return Err(CatalogError::Conflict(format!(
                "A storage area named '{}' already exists.",
                payload.storage_area_name
            )));
        }

        let created = Self::insert_model(payload).insert(self.db).await?;

        Ok(created)
    }

    /// Overwrites the storage-area fields; the path id wins over the payload.
    pub async fn update(
        &self,
        id: i32,
        payload: &StorageAreaPayload,
    ) -> Result<Model, CatalogError> {
        let exists = Entity::find()
            .filter(Column::Id.eq(id))
            .one(self.db)
            .await?
            .is_some();

        if !exists {
            return Err(CatalogError::StorageAreaNotFound(id));
        }

        let model = ActiveModel {
            id: ActiveValue::Set(id),
            ..Self::insert_model(payload)
        };
        let updated = model.update(self.db).await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), CatalogError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(id))
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(CatalogError::StorageAreaNotFound(id));
        }

        Ok(())
    }

    pub async fn exists(&self, id: i32) -> Result<bool, CatalogError> {
        let area = Entity::find()
            .filter(Column::Id.eq(id))
            .one(self.db)
            .await?;

        Ok(area.is_some())
    }

    fn insert_model(payload: &StorageAreaPayload) -> ActiveModel {
        ActiveModel {
            storage_area_name: ActiveValue::Set(payload.storage_area_name.clone()),
            storage_area_notes: ActiveValue::Set(payload.storage_area_notes.clone()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use homebase_test_utils::prelude::*;

    use crate::{
        model::storage_area::StorageAreaPayload,
        server::{data::storage_area::StorageAreaRepository, error::catalog::CatalogError},
    };

    fn storage_area_payload(name: &str) -> StorageAreaPayload {
        StorageAreaPayload {
            storage_area_name: name.to_string(),
            storage_area_notes: Some("Climate controlled".to_string()),
        }
    }

    /// Expect Ok with a generated id when creating a storage area
    #[tokio::test]
    async fn creates_storage_area() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::StorageArea)?;

        let repository = StorageAreaRepository::new(&test.state.db);
        let result = repository.create(&storage_area_payload("Shelf A")).await;

        assert!(result.is_ok(), "Error: {:?}", result);
        let created = result.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.storage_area_name, "Shelf A");

        Ok(())
    }

    /// A second "Shelf A" is a conflict, not a second row
    #[tokio::test]
    async fn rejects_duplicate_name() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::StorageArea)?;

        let repository = StorageAreaRepository::new(&test.state.db);
        repository.create(&storage_area_payload("Shelf A")).await?;

        let duplicate = repository.create(&storage_area_payload("Shelf A")).await;
        assert!(matches!(duplicate, Err(CatalogError::Conflict(_))));

        let lowercase = repository.create(&storage_area_payload("shelf a")).await;
        assert!(matches!(lowercase, Err(CatalogError::Conflict(_))));

        Ok(())
    }

    /// Update overwrites the fields and keeps the path id
    #[tokio::test]
    async fn overwrites_storage_area_fields() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::StorageArea)?;

        let repository = StorageAreaRepository::new(&test.state.db);
        let created = repository.create(&storage_area_payload("Shelf A")).await?;

        let updated = repository
            .update(created.id, &storage_area_payload("Shelf A (annex)"))
            .await?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.storage_area_name, "Shelf A (annex)");

        Ok(())
    }

    /// Expect StorageAreaNotFound on get/update/delete of an absent id
    #[tokio::test]
    async fn reports_not_found_for_nonexistent_area() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::StorageArea)?;

        let repository = StorageAreaRepository::new(&test.state.db);

        assert!(matches!(
            repository.get(1).await,
            Err(CatalogError::StorageAreaNotFound(1))
        ));
        assert!(matches!(
            repository.update(1, &storage_area_payload("Shelf A")).await,
            Err(CatalogError::StorageAreaNotFound(1))
        ));
        assert!(matches!(
            repository.delete(1).await,
            Err(CatalogError::StorageAreaNotFound(1))
        ));

        Ok(())
    }

    /// A deleted area is gone on the next read
    #[tokio::test]
    async fn deletes_existing_area() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::StorageArea)?;

        let repository = StorageAreaRepository::new(&test.state.db);
        let created = repository.create(&storage_area_payload("Shelf A")).await?;

        repository.delete(created.id).await?;

        assert!(!repository.exists(created.id).await?);

        Ok(())
    }
}
