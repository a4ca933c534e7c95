use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{error::TestError, fixtures::catalog::CatalogFixtures};

pub struct TestAppState {
    pub db: DatabaseConnection,
}

pub struct TestSetup {
    pub state: TestAppState,
}

impl TestSetup {
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestSetup {
            state: TestAppState { db },
        })
    }

    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.state.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Fixture helpers bound to this setup's database.
    pub fn catalog(&self) -> CatalogFixtures<'_> {
        CatalogFixtures::new(&self.state.db)
    }
}

#[macro_export]
macro_rules! test_setup_with_tables {
    // Pattern 1: No entities provided
    () => {{
        TestSetup::new().await
    }};

    // Pattern 2: Entities provided
    ($($entity:expr),+ $(,)?) => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                $(schema.create_table_from_entity($entity),)+
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}

/// Creates every catalog table: the thirteen lookup tables, storage areas,
/// the three series tables, and the five item tables, in dependency order.
#[macro_export]
macro_rules! test_setup_with_catalog_tables {
    () => {{
        async {
            let setup = TestSetup::new().await?;

            let schema = sea_orm::Schema::new(sea_orm::DbBackend::Sqlite);
            let stmts = vec![
                schema.create_table_from_entity(entity::prelude::Origin),
                schema.create_table_from_entity(entity::prelude::Era),
                schema.create_table_from_entity(entity::prelude::Material),
                schema.create_table_from_entity(entity::prelude::Author),
                schema.create_table_from_entity(entity::prelude::Publisher),
                schema.create_table_from_entity(entity::prelude::CaliberSpec),
                schema.create_table_from_entity(entity::prelude::Manufacturer),
                schema.create_table_from_entity(entity::prelude::ArtifactType),
                schema.create_table_from_entity(entity::prelude::EquipmentType),
                schema.create_table_from_entity(entity::prelude::InsigniaType),
                schema.create_table_from_entity(entity::prelude::LiteratureType),
                schema.create_table_from_entity(entity::prelude::BindingType),
                schema.create_table_from_entity(entity::prelude::MechanicalEquipmentType),
                schema.create_table_from_entity(entity::prelude::StorageArea),
                schema.create_table_from_entity(entity::prelude::LiteratureSeries),
                schema.create_table_from_entity(entity::prelude::InsigniaSeries),
                schema.create_table_from_entity(entity::prelude::ArtifactSeries),
                schema.create_table_from_entity(entity::prelude::Literature),
                schema.create_table_from_entity(entity::prelude::Insignia),
                schema.create_table_from_entity(entity::prelude::Artifact),
                schema.create_table_from_entity(entity::prelude::Equipment),
                schema.create_table_from_entity(entity::prelude::MechanicalEquipment),
            ];
            setup.with_tables(stmts).await?;

            Ok::<_, $crate::error::TestError>(setup)
        }.await
    }};
}
