use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260115_000001_create_lookup_tables::{Author, BindingType, LiteratureType, Publisher},
    m20260115_000002_create_storage_area_table::StorageArea,
    m20260115_000003_create_series_tables::LiteratureSeries,
};

static IDX_LITERATURE_LITERATURE_TYPE_ID: &str = "idx_literature_literature_type_id";
static IDX_LITERATURE_SERIES_ID: &str = "idx_literature_series_id";
static IDX_LITERATURE_STORAGE_AREA_ID: &str = "idx_literature_storage_area_id";
static IDX_LITERATURE_ISBN: &str = "idx_literature_isbn";
static FK_LITERATURE_AUTHOR_ID: &str = "fk_literature_author_id";
static FK_LITERATURE_PUBLISHER_ID: &str = "fk_literature_publisher_id";
static FK_LITERATURE_LITERATURE_TYPE_ID: &str = "fk_literature_literature_type_id";
static FK_LITERATURE_BINDING_TYPE_ID: &str = "fk_literature_binding_type_id";
static FK_LITERATURE_SERIES_ID: &str = "fk_literature_series_id";
static FK_LITERATURE_STORAGE_AREA_ID: &str = "fk_literature_storage_area_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Literature::Table)
                    .if_not_exists()
                    .col(pk_auto(Literature::Id))
                    .col(string_len(Literature::Title, 200))
                    .col(boolean(Literature::Availability))
                    .col(decimal_len(Literature::Price, 10, 2))
                    .col(integer_null(Literature::AuthorId))
                    .col(integer_null(Literature::PublicationYear))
                    .col(integer_null(Literature::PublisherId))
                    .col(string_len_null(Literature::Isbn, 200))
                    .col(integer(Literature::LiteratureTypeId))
                    .col(integer(Literature::BindingTypeId))
                    .col(string_len(Literature::Description, 500))
                    .col(string_len_null(Literature::PhotoUrl, 500))
                    .col(integer_null(Literature::StorageAreaId))
                    .col(integer_null(Literature::SeriesId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LITERATURE_LITERATURE_TYPE_ID)
                    .table(Literature::Table)
                    .col(Literature::LiteratureTypeId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LITERATURE_SERIES_ID)
                    .table(Literature::Table)
                    .col(Literature::SeriesId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_LITERATURE_STORAGE_AREA_ID)
                    .table(Literature::Table)
                    .col(Literature::StorageAreaId)
                    .to_owned(),
            )
            .await?;

        // Nullable-safe uniqueness: multiple rows without an ISBN are fine,
        // assigned ISBNs must not repeat.
        manager
            .create_index(
                Index::create()
                    .name(IDX_LITERATURE_ISBN)
                    .table(Literature::Table)
                    .col(Literature::Isbn)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LITERATURE_AUTHOR_ID)
                    .from_tbl(Literature::Table)
                    .from_col(Literature::AuthorId)
                    .to_tbl(Author::Table)
                    .to_col(Author::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LITERATURE_PUBLISHER_ID)
                    .from_tbl(Literature::Table)
                    .from_col(Literature::PublisherId)
                    .to_tbl(Publisher::Table)
                    .to_col(Publisher::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LITERATURE_LITERATURE_TYPE_ID)
                    .from_tbl(Literature::Table)
                    .from_col(Literature::LiteratureTypeId)
                    .to_tbl(LiteratureType::Table)
                    .to_col(LiteratureType::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LITERATURE_BINDING_TYPE_ID)
                    .from_tbl(Literature::Table)
                    .from_col(Literature::BindingTypeId)
                    .to_tbl(BindingType::Table)
                    .to_col(BindingType::Id)
                    .on_delete(ForeignKeyAction::Restrict)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LITERATURE_SERIES_ID)
                    .from_tbl(Literature::Table)
                    .from_col(Literature::SeriesId)
                    .to_tbl(LiteratureSeries::Table)
                    .to_col(LiteratureSeries::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_LITERATURE_STORAGE_AREA_ID)
                    .from_tbl(Literature::Table)
                    .from_col(Literature::StorageAreaId)
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
            FK_LITERATURE_STORAGE_AREA_ID,
            FK_LITERATURE_SERIES_ID,
            FK_LITERATURE_BINDING_TYPE_ID,
            FK_LITERATURE_LITERATURE_TYPE_ID,
            FK_LITERATURE_PUBLISHER_ID,
            FK_LITERATURE_AUTHOR_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop().name(fk).table(Literature::Table).to_owned(),
                )
                .await?;
        }

        for idx in [
            IDX_LITERATURE_ISBN,
            IDX_LITERATURE_STORAGE_AREA_ID,
            IDX_LITERATURE_SERIES_ID,
            IDX_LITERATURE_LITERATURE_TYPE_ID,
        ] {
            manager
                .drop_index(Index::drop().name(idx).table(Literature::Table).to_owned())
                .await?;
        }

        manager
            .drop_table(Table::drop().table(Literature::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Literature {
    Table,
    Id,
    Title,
    Availability,
    Price,
    AuthorId,
    PublicationYear,
    PublisherId,
    Isbn,
    LiteratureTypeId,
    BindingTypeId,
    Description,
    PhotoUrl,
    StorageAreaId,
    SeriesId,
}
