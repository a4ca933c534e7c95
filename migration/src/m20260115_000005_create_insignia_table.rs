use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_create_lookup_tables::{Era, InsigniaType, Material, Origin},
    m20260115_000002_create_storage_area_table::StorageArea,
    m20260115_000003_create_series_tables::InsigniaSeries,
};

static IDX_INSIGNIA_INSIGNIA_TYPE_ID: &str = "idx_insignia_insignia_type_id";
static IDX_INSIGNIA_SERIES_ID: &str = "idx_insignia_series_id";
static IDX_INSIGNIA_STORAGE_AREA_ID: &str = "idx_insignia_storage_area_id";
static FK_INSIGNIA_INSIGNIA_TYPE_ID: &str = "fk_insignia_insignia_type_id";
static FK_INSIGNIA_ORIGIN_ID: &str = "fk_insignia_origin_id";
static FK_INSIGNIA_ERA_ID: &str = "fk_insignia_era_id";
static FK_INSIGNIA_MATERIAL_ID: &str = "fk_insignia_material_id";
static FK_INSIGNIA_SERIES_ID: &str = "fk_insignia_series_id";
static FK_INSIGNIA_STORAGE_AREA_ID: &str = "fk_insignia_storage_area_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Insignia::Table)
                    .if_not_exists()
                    .col(pk_auto(Insignia::Id))
                    .col(string_len(Insignia::Name, 200))
                    .col(boolean(Insignia::Availability))
                    .col(decimal_len(Insignia::Price, 10, 2))
                    .col(integer(Insignia::InsigniaTypeId))
                    .col(boolean(Insignia::PartOfSet))
                    .col(integer_null(Insignia::OriginId))
                    .col(integer_null(Insignia::EraId))
                    .col(integer_null(Insignia::MaterialId))
                    .col(string_len(Insignia::Description, 500))
                    .col(string_len_null(Insignia::PhotoUrl, 500))
                    .col(integer_null(Insignia::StorageAreaId))
                    .col(integer_null(Insignia::SeriesId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INSIGNIA_INSIGNIA_TYPE_ID)
                    .table(Insignia::Table)
                    .col(Insignia::InsigniaTypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INSIGNIA_SERIES_ID)
                    .table(Insignia::Table)
                    .col(Insignia::SeriesId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INSIGNIA_STORAGE_AREA_ID)
                    .table(Insignia::Table)
                    .col(Insignia::StorageAreaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INSIGNIA_INSIGNIA_TYPE_ID)
                    .from_tbl(Insignia::Table)
                    .from_col(Insignia::InsigniaTypeId)
                    .to_tbl(InsigniaType::Table)
                    .to_col(InsigniaType::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INSIGNIA_ORIGIN_ID)
                    .from_tbl(Insignia::Table)
                    .from_col(Insignia::OriginId)
                    .to_tbl(Origin::Table)
                    .to_col(Origin::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INSIGNIA_ERA_ID)
                    .from_tbl(Insignia::Table)
                    .from_col(Insignia::EraId)
                    .to_tbl(Era::Table)
                    .to_col(Era::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INSIGNIA_MATERIAL_ID)
                    .from_tbl(Insignia::Table)
                    .from_col(Insignia::MaterialId)
                    .to_tbl(Material::Table)
                    .to_col(Material::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INSIGNIA_SERIES_ID)
                    .from_tbl(Insignia::Table)
                    .from_col(Insignia::SeriesId)
                    .to_tbl(InsigniaSeries::Table)
                    .to_col(InsigniaSeries::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_INSIGNIA_STORAGE_AREA_ID)
                    .from_tbl(Insignia::Table)
                    .from_col(Insignia::StorageAreaId)
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
            FK_INSIGNIA_STORAGE_AREA_ID,
            FK_INSIGNIA_SERIES_ID,
            FK_INSIGNIA_MATERIAL_ID,
            FK_INSIGNIA_ERA_ID,
            FK_INSIGNIA_ORIGIN_ID,
            FK_INSIGNIA_INSIGNIA_TYPE_ID,
        ] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(fk).table(Insignia::Table).to_owned())
                .await?;
        }

        for idx in [
            IDX_INSIGNIA_STORAGE_AREA_ID,
            IDX_INSIGNIA_SERIES_ID,
            IDX_INSIGNIA_INSIGNIA_TYPE_ID,
        ] {
            manager
                .drop_index(Index::drop().name(idx).table(Insignia::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Insignia::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Insignia {
    Table,
    Id,
    Name,
    Availability,
    Price,
    InsigniaTypeId,
    PartOfSet,
    OriginId,
    EraId,
    MaterialId,
    Description,
    PhotoUrl,
    StorageAreaId,
    SeriesId,
}
