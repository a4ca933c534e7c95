use sea_orm::DatabaseConnection;

use crate::{
    model::catalog::ItemKind,
    server::{
        data::catalog::{
            artifact::ArtifactRepository, equipment::EquipmentRepository,
            insignia::InsigniaRepository, literature::LiteratureRepository,
            mechanical_equipment::MechanicalEquipmentRepository,
        },
        error::catalog::CatalogError,
    },
};

/// Persists uploaded photo paths onto the matching item row.
///
/// Dispatch is keyed by [`ItemKind`]; the upload controller parses the wire
/// tag up front, so an unknown tag never reaches this far. No file I/O
/// happens here, only the stored path lands on the item.
pub struct PhotoUpdater<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PhotoUpdater<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn update_photo_url(
        &self,
        kind: ItemKind,
        id: i32,
        photo_url: &str,
    ) -> Result<(), CatalogError> {
        match kind {
            ItemKind::Literature => {
                LiteratureRepository::new(self.db)
                    .update_photo_url(id, photo_url)
                    .await
            }
            ItemKind::Insignia => {
                InsigniaRepository::new(self.db)
                    .update_photo_url(id, photo_url)
                    .await
            }
            ItemKind::Artifact => {
                ArtifactRepository::new(self.db)
                    .update_photo_url(id, photo_url)
                    .await
            }
            ItemKind::Equipment => {
                EquipmentRepository::new(self.db)
                    .update_photo_url(id, photo_url)
                    .await
            }
            ItemKind::MechanicalEquipment => {
                MechanicalEquipmentRepository::new(self.db)
                    .update_photo_url(id, photo_url)
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use homebase_test_utils::prelude::*;
    use rust_decimal::Decimal;

    use crate::{
        model::{
            artifact::ArtifactPayload, catalog::ItemKind, equipment::EquipmentPayload,
        },
        server::{
            data::catalog::{artifact::ArtifactRepository, equipment::EquipmentRepository},
            error::catalog::CatalogError,
            service::photo::PhotoUpdater,
        },
    };

    /// Dispatching on the artifact kind lands the path on the artifact row
    #[tokio::test]
    async fn updates_artifact_photo() -> Result<(), TestError> {
        let test = test_setup_with_catalog_tables!()?;
        let artifact_type = test.catalog().insert_artifact_type("Document").await?;

        let repository = ArtifactRepository::new(&test.state.db);
        let created = repository
            .create(&ArtifactPayload {
                name: "Trench Knife".to_string(),
                availability: true,
                price: Decimal::new(4250, 2),
                artifact_type_id: artifact_type.id,
                origin_id: None,
                era_id: None,
                description: "Field-worn example".to_string(),
                storage_area_id: None,
                series_id: None,
            })
            .await?;

        PhotoUpdater::new(&test.state.db)
            .update_photo_url(ItemKind::Artifact, created.id, "artifactimages/1/1_knife.jpg")
            .await?;

        let fetched = repository.get(created.id).await?;
        assert_eq!(
            fetched.photo_url.as_deref(),
            Some("artifactimages/1/1_knife.jpg")
        );

        Ok(())
    }

    /// A different kind routes to a different table
    #[tokio::test]
    async fn updates_equipment_photo() -> Result<(), TestError> {
        let test = test_setup_with_catalog_tables!()?;
        let equipment_type = test.catalog().insert_equipment_type("Field Gear").await?;

        let repository = EquipmentRepository::new(&test.state.db);
        let created = repository
            .create(&EquipmentPayload {
                name: "Mess Kit".to_string(),
                availability: true,
                price: Decimal::new(3500, 2),
                equipment_type_id: equipment_type.id,
                origin_id: None,
                era_id: None,
                material_id: None,
                description: "Complete with original straps".to_string(),
                storage_area_id: None,
            })
            .await?;

        PhotoUpdater::new(&test.state.db)
            .update_photo_url(
                ItemKind::Equipment,
                created.id,
                "equipmentimages/1/1_kit.jpg",
            )
            .await?;

        let fetched = repository.get(created.id).await?;
        assert_eq!(
            fetched.photo_url.as_deref(),
            Some("equipmentimages/1/1_kit.jpg")
        );

        Ok(())
    }

    /// The repository's not-found signal passes straight through
    #[tokio::test]
    async fn reports_not_found_for_nonexistent_item() -> Result<(), TestError> {
        let test = test_setup_with_catalog_tables!()?;

        let result = PhotoUpdater::new(&test.state.db)
            .update_photo_url(ItemKind::Literature, 1, "literatureimages/1/1_cover.jpg")
            .await;

        assert!(matches!(
            result,
            Err(CatalogError::ItemNotFound {
                kind: ItemKind::Literature,
                id: 1
            })
        ));

        Ok(())
    }
}
