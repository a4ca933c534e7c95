use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StorageArea::Table)
                    .if_not_exists()
                    .col(pk_auto(StorageArea::Id))
                    .col(string_len(StorageArea::StorageAreaName, 50))
                    .col(string_len_null(StorageArea::StorageAreaNotes, 100))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StorageArea::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum StorageArea {
    Table,
    Id,
    StorageAreaName,
    StorageAreaNotes,
}
