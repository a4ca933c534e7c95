pub use sea_orm_migration::prelude::*;

mod m20260115_000001_create_lookup_tables;
mod m20260115_000002_create_storage_area_table;
mod m20260115_000003_create_series_tables;
mod m20260115_000004_create_literature_table;
mod m20260115_000005_create_insignia_table;
mod m20260115_000006_create_artifact_table;
mod m20260115_000007_create_equipment_table;
mod m20260115_000008_create_mechanical_equipment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260115_000001_create_lookup_tables::Migration),
            Box::new(m20260115_000002_create_storage_area_table::Migration),
            Box::new(m20260115_000003_create_series_tables::Migration),
            Box::new(m20260115_000004_create_literature_table::Migration),
            Box::new(m20260115_000005_create_insignia_table::Migration),
            Box::new(m20260115_000006_create_artifact_table::Migration),
            Box::new(m20260115_000007_create_equipment_table::Migration),
            Box::new(m20260115_000008_create_mechanical_equipment_table::Migration),
        ]
    }
}
