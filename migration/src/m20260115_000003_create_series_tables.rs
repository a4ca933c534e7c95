use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

fn series_table(
    table: impl IntoIden,
    id: impl IntoIden,
    name: impl IntoIden,
    description: impl IntoIden,
) -> TableCreateStatement {
    Table::create()
        .table(table.into_iden())
        .if_not_exists()
        .col(pk_auto(id))
        .col(string_len(name, 100))
        .col(string_len_null(description, 500))
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(series_table(
                LiteratureSeries::Table,
                LiteratureSeries::Id,
                LiteratureSeries::SeriesName,
                LiteratureSeries::Description,
            ))
            .await?;

        manager
            .create_table(series_table(
                InsigniaSeries::Table,
                InsigniaSeries::Id,
                InsigniaSeries::SeriesName,
                InsigniaSeries::Description,
            ))
            .await?;

        manager
            .create_table(series_table(
                ArtifactSeries::Table,
                ArtifactSeries::Id,
                ArtifactSeries::SeriesName,
                ArtifactSeries::Description,
            ))
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArtifactSeries::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(InsigniaSeries::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(LiteratureSeries::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum LiteratureSeries {
    Table,
    Id,
    SeriesName,
    Description,
}

#[derive(DeriveIden)]
pub enum InsigniaSeries {
    Table,
    Id,
    SeriesName,
    Description,
}

#[derive(DeriveIden)]
pub enum ArtifactSeries {
    Table,
    Id,
    SeriesName,
    Description,
}
