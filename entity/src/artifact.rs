//! Artifact item entity (documents, personal effects, trench art).

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "artifact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub availability: bool,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub artifact_type_id: i32,
    pub origin_id: Option<i32>,
    pub era_id: Option<i32>,
    pub description: String,
    pub photo_url: Option<String>,
    pub storage_area_id: Option<i32>,
    pub series_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lookups::artifact_type::Entity",
        from = "Column::ArtifactTypeId",
        to = "super::lookups::artifact_type::Column::Id",
        on_delete = "Restrict"
    )]
    ArtifactType,
    #[sea_orm(
        belongs_to = "super::lookups::origin::Entity",
        from = "Column::OriginId",
        to = "super::lookups::origin::Column::Id",
        on_delete = "SetNull"
    )]
    Origin,
    #[sea_orm(
        belongs_to = "super::lookups::era::Entity",
        from = "Column::EraId",
        to = "super::lookups::era::Column::Id",
        on_delete = "SetNull"
    )]
    Era,
    #[sea_orm(
        belongs_to = "super::artifact_series::Entity",
        from = "Column::SeriesId",
        to = "super::artifact_series::Column::Id",
        on_delete = "SetNull"
    )]
    Series,
    #[sea_orm(
        belongs_to = "super::storage_area::Entity",
        from = "Column::StorageAreaId",
        to = "super::storage_area::Column::Id",
        on_delete = "SetNull"
    )]
    StorageArea,
}

impl Related<super::artifact_series::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Series.def()
    }
}

impl Related<super::storage_area::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StorageArea.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
