use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_create_lookup_tables::{ArtifactType, Era, Origin},
    m20260115_000002_create_storage_area_table::StorageArea,
    m20260115_000003_create_series_tables::ArtifactSeries,
};

static IDX_ARTIFACT_ARTIFACT_TYPE_ID: &str = "idx_artifact_artifact_type_id";
static IDX_ARTIFACT_SERIES_ID: &str = "idx_artifact_series_id";
static IDX_ARTIFACT_STORAGE_AREA_ID: &str = "idx_artifact_storage_area_id";
static FK_ARTIFACT_ARTIFACT_TYPE_ID: &str = "fk_artifact_artifact_type_id";
static FK_ARTIFACT_ORIGIN_ID: &str = "fk_artifact_origin_id";
static FK_ARTIFACT_ERA_ID: &str = "fk_artifact_era_id";
static FK_ARTIFACT_SERIES_ID: &str = "fk_artifact_series_id";
static FK_ARTIFACT_STORAGE_AREA_ID: &str = "fk_artifact_storage_area_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artifact::Table)
                    .if_not_exists()
                    .col(pk_auto(Artifact::Id))
                    .col(string_len(Artifact::Name, 200))
                    .col(boolean(Artifact::Availability))
                    .col(decimal_len(Artifact::Price, 10, 2))
                    .col(integer(Artifact::ArtifactTypeId))
                    .col(integer_null(Artifact::OriginId))
                    .col(integer_null(Artifact::EraId))
                    .col(string_len(Artifact::Description, 500))
                    .col(string_len_null(Artifact::PhotoUrl, 500))
                    .col(integer_null(Artifact::StorageAreaId))
                    .col(integer_null(Artifact::SeriesId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARTIFACT_ARTIFACT_TYPE_ID)
                    .table(Artifact::Table)
                    .col(Artifact::ArtifactTypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARTIFACT_SERIES_ID)
                    .table(Artifact::Table)
                    .col(Artifact::SeriesId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_ARTIFACT_STORAGE_AREA_ID)
                    .table(Artifact::Table)
                    .col(Artifact::StorageAreaId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIFACT_ARTIFACT_TYPE_ID)
                    .from_tbl(Artifact::Table)
                    .from_col(Artifact::ArtifactTypeId)
                    .to_tbl(ArtifactType::Table)
                    .to_col(ArtifactType::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIFACT_ORIGIN_ID)
                    .from_tbl(Artifact::Table)
                    .from_col(Artifact::OriginId)
                    .to_tbl(Origin::Table)
                    .to_col(Origin::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIFACT_ERA_ID)
                    .from_tbl(Artifact::Table)
                    .from_col(Artifact::EraId)
                    .to_tbl(Era::Table)
                    .to_col(Era::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIFACT_SERIES_ID)
                    .from_tbl(Artifact::Table)
                    .from_col(Artifact::SeriesId)
                    .to_tbl(ArtifactSeries::Table)
                    .to_col(ArtifactSeries::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_ARTIFACT_STORAGE_AREA_ID)
                    .from_tbl(Artifact::Table)
                    .from_col(Artifact::StorageAreaId)
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
            FK_ARTIFACT_STORAGE_AREA_ID,
            FK_ARTIFACT_SERIES_ID,
            FK_ARTIFACT_ERA_ID,
            FK_ARTIFACT_ORIGIN_ID,
            FK_ARTIFACT_ARTIFACT_TYPE_ID,
        ] {
            manager
                .drop_foreign_key(ForeignKey::drop().name(fk).table(Artifact::Table).to_owned())
                .await?;
        }

        for idx in [
            IDX_ARTIFACT_STORAGE_AREA_ID,
            IDX_ARTIFACT_SERIES_ID,
            IDX_ARTIFACT_ARTIFACT_TYPE_ID,
        ] {
            manager
                .drop_index(Index::drop().name(idx).table(Artifact::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Artifact::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Artifact {
    Table,
    Id,
    Name,
    Availability,
    Price,
    ArtifactTypeId,
    OriginId,
    EraId,
    Description,
    PhotoUrl,
    StorageAreaId,
    SeriesId,
}
