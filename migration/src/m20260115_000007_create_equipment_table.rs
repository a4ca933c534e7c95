use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_create_lookup_tables::{EquipmentType, Era, Material, Origin},
    m20260115_000002_create_storage_area_table::StorageArea,
};

static IDX_EQUIPMENT_EQUIPMENT_TYPE_ID: &str = "idx_equipment_equipment_type_id";
static IDX_EQUIPMENT_STORAGE_AREA_ID: &str = "idx_equipment_storage_area_id";
static FK_EQUIPMENT_EQUIPMENT_TYPE_ID: &str = "fk_equipment_equipment_type_id";
static FK_EQUIPMENT_ORIGIN_ID: &str = "fk_equipment_origin_id";
static FK_EQUIPMENT_ERA_ID: &str = "fk_equipment_era_id";
static FK_EQUIPMENT_MATERIAL_ID: &str = "fk_equipment_material_id";
static FK_EQUIPMENT_STORAGE_AREA_ID: &str = "fk_equipment_storage_area_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(pk_auto(Equipment::Id))
                    .col(string_len(Equipment::Name, 100))
                    .col(boolean(Equipment::Availability))
                    .col(decimal_len(Equipment::Price, 10, 2))
                    .col(integer(Equipment::EquipmentTypeId))
                    .col(integer_null(Equipment::OriginId))
                    .col(integer_null(Equipment::EraId))
                    .col(integer_null(Equipment::MaterialId))
                    .col(string_len(Equipment::Description, 500))
                    .col(string_len_null(Equipment::PhotoUrl, 500))
                    .col(integer_null(Equipment::StorageAreaId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EQUIPMENT_EQUIPMENT_TYPE_ID)
                    .table(Equipment::Table)
                    .col(Equipment::EquipmentTypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EQUIPMENT_STORAGE_AREA_ID)
                    .table(Equipment::Table)
                    .col(Equipment::StorageAreaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EQUIPMENT_EQUIPMENT_TYPE_ID)
                    .from_tbl(Equipment::Table)
                    .from_col(Equipment::EquipmentTypeId)
                    .to_tbl(EquipmentType::Table)
                    .to_col(EquipmentType::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EQUIPMENT_ORIGIN_ID)
                    .from_tbl(Equipment::Table)
                    .from_col(Equipment::OriginId)
                    .to_tbl(Origin::Table)
                    .to_col(Origin::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EQUIPMENT_ERA_ID)
                    .from_tbl(Equipment::Table)
                    .from_col(Equipment::EraId)
                    .to_tbl(Era::Table)
                    .to_col(Era::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EQUIPMENT_MATERIAL_ID)
                    .from_tbl(Equipment::Table)
                    .from_col(Equipment::MaterialId)
                    .to_tbl(Material::Table)
                    .to_col(Material::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_EQUIPMENT_STORAGE_AREA_ID)
                    .from_tbl(Equipment::Table)
                    .from_col(Equipment::StorageAreaId)
                    .to_tbl(StorageArea::Table)
                    .to_col(StorageArea::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_EQUIPMENT_STORAGE_AREA_ID,
            FK_EQUIPMENT_MATERIAL_ID,
            FK_EQUIPMENT_ERA_ID,
            FK_EQUIPMENT_ORIGIN_ID,
            FK_EQUIPMENT_EQUIPMENT_TYPE_ID,
        ] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(fk).table(Equipment::Table).to_owned())
                .await?;
        }

        for idx in [IDX_EQUIPMENT_STORAGE_AREA_ID, IDX_EQUIPMENT_EQUIPMENT_TYPE_ID] {
            manager
                .drop_index(Index::drop().name(idx).table(Equipment::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Equipment {
    Table,
    Id,
    Name,
    Availability,
    Price,
    EquipmentTypeId,
    OriginId,
    EraId,
    MaterialId,
    Description,
    PhotoUrl,
    StorageAreaId,
}
