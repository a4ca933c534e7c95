use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

/// All lookup tables share the same shape: an auto primary key and a bounded
/// name column. Category type tables cap names at 75 characters, the rest at
/// 100, matching the catalog's reference data.
fn lookup_table(
    table: impl IntoIden,
    id: impl IntoIden,
    name: impl IntoIden,
    name_len: u32,
) -> TableCreateStatement {
    Table::create()
        .table(table.into_iden())
        .if_not_exists()
        .col(pk_auto(id))
        .col(string_len(name, name_len))
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let tables = vec![
            lookup_table(Origin::Table, Origin::Id, Origin::Name, 100),
            lookup_table(Era::Table, Era::Id, Era::Name, 100),
            lookup_table(Material::Table, Material::Id, Material::Name, 100),
            lookup_table(Author::Table, Author::Id, Author::Name, 100),
            lookup_table(Publisher::Table, Publisher::Id, Publisher::Name, 100),
            lookup_table(CaliberSpec::Table, CaliberSpec::Id, CaliberSpec::Name, 100),
            lookup_table(
                Manufacturer::Table,
                Manufacturer::Id,
                Manufacturer::Name,
                100,
            ),
            lookup_table(
                ArtifactType::Table,
                ArtifactType::Id,
                ArtifactType::Name,
                75,
            ),
            lookup_table(
                EquipmentType::Table,
                EquipmentType::Id,
                EquipmentType::Name,
                75,
            ),
            lookup_table(
                InsigniaType::Table,
                InsigniaType::Id,
                InsigniaType::Name,
                75,
            ),
            lookup_table(
                LiteratureType::Table,
                LiteratureType::Id,
                LiteratureType::Name,
                75,
            ),
            lookup_table(BindingType::Table, BindingType::Id, BindingType::Name, 75),
            lookup_table(
                MechanicalEquipmentType::Table,
                MechanicalEquipmentType::Id,
                MechanicalEquipmentType::Name,
                75,
            ),
        ];

        for table in tables {
            manager.create_table(table).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let tables: Vec<TableRef> = vec![
            MechanicalEquipmentType::Table.into_table_ref(),
            BindingType::Table.into_table_ref(),
            LiteratureType::Table.into_table_ref(),
            InsigniaType::Table.into_table_ref(),
            EquipmentType::Table.into_table_ref(),
            ArtifactType::Table.into_table_ref(),
            Manufacturer::Table.into_table_ref(),
            CaliberSpec::Table.into_table_ref(),
            Publisher::Table.into_table_ref(),
            Author::Table.into_table_ref(),
            Material::Table.into_table_ref(),
            Era::Table.into_table_ref(),
            Origin::Table.into_table_ref(),
        ];

        for table in tables {
            manager
                .drop_table(Table::drop().table(table).to_owned())
                .await?;
        }

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Origin {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Era {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Material {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Author {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Publisher {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum CaliberSpec {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum Manufacturer {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum ArtifactType {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum EquipmentType {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum InsigniaType {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum LiteratureType {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum BindingType {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum MechanicalEquipmentType {
    Table,
    Id,
    Name,
}
