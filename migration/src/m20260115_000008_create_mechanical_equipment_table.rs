use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_create_lookup_tables::{
        CaliberSpec, Era, Manufacturer, Material, MechanicalEquipmentType, Origin,
    },
    m20260115_000002_create_storage_area_table::StorageArea,
};

static IDX_MECHANICAL_EQUIPMENT_TYPE_ID: &str = "idx_mechanical_equipment_type_id";
static IDX_MECHANICAL_EQUIPMENT_STORAGE_AREA_ID: &str = "idx_mechanical_equipment_storage_area_id";
static FK_MECHANICAL_EQUIPMENT_TYPE_ID: &str = "fk_mechanical_equipment_type_id";
static FK_MECHANICAL_EQUIPMENT_CALIBER_SPEC_ID: &str = "fk_mechanical_equipment_caliber_spec_id";
static FK_MECHANICAL_EQUIPMENT_MANUFACTURER_ID: &str = "fk_mechanical_equipment_manufacturer_id";
static FK_MECHANICAL_EQUIPMENT_ERA_ID: &str = "fk_mechanical_equipment_era_id";
static FK_MECHANICAL_EQUIPMENT_ORIGIN_ID: &str = "fk_mechanical_equipment_origin_id";
static FK_MECHANICAL_EQUIPMENT_MATERIAL_ID: &str = "fk_mechanical_equipment_material_id";
static FK_MECHANICAL_EQUIPMENT_STORAGE_AREA_ID: &str = "fk_mechanical_equipment_storage_area_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MechanicalEquipment::Table)
                    .if_not_exists()
                    .col(pk_auto(MechanicalEquipment::Id))
                    .col(string_len(MechanicalEquipment::Name, 100))
                    .col(boolean(MechanicalEquipment::Availability))
                    .col(decimal_len(MechanicalEquipment::Price, 10, 2))
                    .col(integer(MechanicalEquipment::MechanicalEquipmentTypeId))
                    .col(integer_null(MechanicalEquipment::CaliberSpecId))
                    .col(string_len_null(MechanicalEquipment::VehicleModel, 100))
                    .col(string_len_null(MechanicalEquipment::SerialNumber, 100))
                    .col(integer_null(MechanicalEquipment::ManufacturerId))
                    .col(integer_null(MechanicalEquipment::EraId))
                    .col(integer_null(MechanicalEquipment::OriginId))
                    .col(integer_null(MechanicalEquipment::MaterialId))
                    .col(string_len(MechanicalEquipment::Description, 500))
                    .col(string_len_null(MechanicalEquipment::PhotoUrl, 500))
                    .col(integer_null(MechanicalEquipment::StorageAreaId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MECHANICAL_EQUIPMENT_TYPE_ID)
                    .table(MechanicalEquipment::Table)
                    .col(MechanicalEquipment::MechanicalEquipmentTypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MECHANICAL_EQUIPMENT_STORAGE_AREA_ID)
                    .table(MechanicalEquipment::Table)
                    .col(MechanicalEquipment::StorageAreaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MECHANICAL_EQUIPMENT_TYPE_ID)
                    .from_tbl(MechanicalEquipment::Table)
                    .from_col(MechanicalEquipment::MechanicalEquipmentTypeId)
                    .to_tbl(MechanicalEquipmentType::Table)
                    .to_col(MechanicalEquipmentType::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MECHANICAL_EQUIPMENT_CALIBER_SPEC_ID)
                    .from_tbl(MechanicalEquipment::Table)
                    .from_col(MechanicalEquipment::CaliberSpecId)
                    .to_tbl(CaliberSpec::Table)
                    .to_col(CaliberSpec::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MECHANICAL_EQUIPMENT_MANUFACTURER_ID)
                    .from_tbl(MechanicalEquipment::Table)
                    .from_col(MechanicalEquipment::ManufacturerId)
                    .to_tbl(Manufacturer::Table)
                    .to_col(Manufacturer::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MECHANICAL_EQUIPMENT_ERA_ID)
                    .from_tbl(MechanicalEquipment::Table)
                    .from_col(MechanicalEquipment::EraId)
                    .to_tbl(Era::Table)
                    .to_col(Era::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MECHANICAL_EQUIPMENT_ORIGIN_ID)
                    .from_tbl(MechanicalEquipment::Table)
                    .from_col(MechanicalEquipment::OriginId)
                    .to_tbl(Origin::Table)
                    .to_col(Origin::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MECHANICAL_EQUIPMENT_MATERIAL_ID)
                    .from_tbl(MechanicalEquipment::Table)
                    .from_col(MechanicalEquipment::MaterialId)
                    .to_tbl(Material::Table)
                    .to_col(Material::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_MECHANICAL_EQUIPMENT_STORAGE_AREA_ID)
                    .from_tbl(MechanicalEquipment::Table)
                    .from_col(MechanicalEquipment::StorageAreaId)
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
            FK_MECHANICAL_EQUIPMENT_STORAGE_AREA_ID,
            FK_MECHANICAL_EQUIPMENT_MATERIAL_ID,
            FK_MECHANICAL_EQUIPMENT_ORIGIN_ID,
            FK_MECHANICAL_EQUIPMENT_ERA_ID,
            FK_MECHANICAL_EQUIPMENT_MANUFACTURER_ID,
            FK_MECHANICAL_EQUIPMENT_CALIBER_SPEC_ID,
            FK_MECHANICAL_EQUIPMENT_TYPE_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(MechanicalEquipment::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [
            IDX_MECHANICAL_EQUIPMENT_STORAGE_AREA_ID,
            IDX_MECHANICAL_EQUIPMENT_TYPE_ID,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(idx)
                        .table(MechanicalEquipment::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(MechanicalEquipment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum MechanicalEquipment {
    Table,
    Id,
    Name,
    Availability,
    Price,
    MechanicalEquipmentTypeId,
    CaliberSpecId,
    VehicleModel,
    SerialNumber,
    ManufacturerId,
    EraId,
    OriginId,
    MaterialId,
    Description,
    PhotoUrl,
    StorageAreaId,
}
