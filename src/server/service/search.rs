use sea_orm::DatabaseConnection;

use crate::{
    model::{
        artifact::{ArtifactDto, ArtifactSearchFilterDto},
        equipment::{EquipmentDto, EquipmentSearchFilterDto},
        insignia::{InsigniaDto, InsigniaSearchFilterDto},
        literature::{LiteratureDto, LiteratureSearchFilterDto},
        mechanical_equipment::{MechanicalEquipmentDto, MechanicalEquipmentSearchFilterDto},
        search::SimpleSearchResultsDto,
    },
    server::{
        data::catalog::{
            artifact::ArtifactRepository, equipment::EquipmentRepository,
            insignia::InsigniaRepository, literature::LiteratureRepository,
            mechanical_equipment::MechanicalEquipmentRepository,
        },
        error::catalog::CatalogError,
    },
};

/// Search over the whole catalog.
///
/// Free-text queries fan out to every category's `simple_search`
/// independently; a category with no matches contributes an empty list.
/// Structured searches delegate to the matching category's repository.
pub struct SearchService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn simple_search_all(
        &self,
        query: &str,
    ) -> Result<SimpleSearchResultsDto, CatalogError> {
        let literatures = LiteratureRepository::new(self.db).simple_search(query).await?;
        let artifacts = ArtifactRepository::new(self.db).simple_search(query).await?;
        let insignias = InsigniaRepository::new(self.db).simple_search(query).await?;
        let equipment = EquipmentRepository::new(self.db).simple_search(query).await?;
        let mechanical_equipment = MechanicalEquipmentRepository::new(self.db)
            .simple_search(query)
            .await?;

        Ok(SimpleSearchResultsDto {
            literatures: literatures.into_iter().map(Into::into).collect(),
            artifacts: artifacts.into_iter().map(Into::into).collect(),
            insignias: insignias.into_iter().map(Into::into).collect(),
            equipment: equipment.into_iter().map(Into::into).collect(),
            mechanical_equipment: mechanical_equipment.into_iter().map(Into::into).collect(),
        })
    }

    pub async fn search_literatures(
        &self,
        filter: &LiteratureSearchFilterDto,
    ) -> Result<Vec<LiteratureDto>, CatalogError> {
        let items = LiteratureRepository::new(self.db).search(filter).await?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn search_artifacts(
        &self,
        filter: &ArtifactSearchFilterDto,
    ) -> Result<Vec<ArtifactDto>, CatalogError> {
        let items = ArtifactRepository::new(self.db).search(filter).await?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn search_insignias(
        &self,
        filter: &InsigniaSearchFilterDto,
    ) -> Result<Vec<InsigniaDto>, CatalogError> {
        let items = InsigniaRepository::new(self.db).search(filter).await?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn search_equipment(
        &self,
        filter: &EquipmentSearchFilterDto,
    ) -> Result<Vec<EquipmentDto>, CatalogError> {
        let items = EquipmentRepository::new(self.db).search(filter).await?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn search_mechanical_equipment(
        &self,
        filter: &MechanicalEquipmentSearchFilterDto,
    ) -> Result<Vec<MechanicalEquipmentDto>, CatalogError> {
        let items = MechanicalEquipmentRepository::new(self.db).search(filter).await?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use homebase_test_utils::prelude::*;
    use rust_decimal::Decimal;

    use crate::{
        model::{artifact::ArtifactPayload, literature::LiteraturePayload},
        server::{
            data::catalog::{artifact::ArtifactRepository, literature::LiteratureRepository},
            service::search::SearchService,
        },
    };

    async fn seed_trench_items(test: &TestSetup) -> Result<(), TestError> {
        let artifact_type = test.catalog().insert_artifact_type("Edged Weapon").await?;
        let literature_type = test.catalog().insert_literature_type("History").await?;
        let binding_type = test.catalog().insert_binding_type("Hardcover").await?;

        ArtifactRepository::new(&test.state.db)
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

        LiteratureRepository::new(&test.state.db)
            .create(&LiteraturePayload {
                title: "Trench Warfare 1914-1918".to_string(),
                availability: true,
                price: Decimal::new(2999, 2),
                author_id: None,
                publication_year: Some(1980),
                publisher_id: None,
                isbn: None,
                literature_type_id: literature_type.id,
                binding_type_id: binding_type.id,
                description: "Study of static-front tactics".to_string(),
                storage_area_id: None,
                series_id: None,
            })
            .await?;

        Ok(())
    }

    /// The fan-out tags matches per category and leaves the rest empty
    #[tokio::test]
    async fn fans_query_out_across_categories() -> Result<(), TestError> {
        let test = test_setup_with_catalog_tables!()?;
        seed_trench_items(&test).await?;

        let results = SearchService::new(&test.state.db)
            .simple_search_all("trench")
            .await?;

        assert_eq!(results.artifacts.len(), 1);
        assert_eq!(results.literatures.len(), 1);
        assert!(results.insignias.is_empty());
        assert!(results.equipment.is_empty());
        assert!(results.mechanical_equipment.is_empty());

        Ok(())
    }

    /// A blank query produces an all-empty composite, not an error
    #[tokio::test]
    async fn blank_query_yields_empty_composite() -> Result<(), TestError> {
        let test = test_setup_with_catalog_tables!()?;
        seed_trench_items(&test).await?;

        let results = SearchService::new(&test.state.db).simple_search_all("   ").await?;

        assert!(results.artifacts.is_empty());
        assert!(results.literatures.is_empty());
        assert!(results.insignias.is_empty());
        assert!(results.equipment.is_empty());
        assert!(results.mechanical_equipment.is_empty());

        Ok(())
    }
}
