//! Insignia item entity (badges, patches, medals).

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "insignia")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub availability: bool,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub insignia_type_id: i32,
    pub part_of_set: bool,
    pub origin_id: Option<i32>,
    pub era_id: Option<i32>,
    pub material_id: Option<i32>,
    pub description: String,
    pub photo_url: Option<String>,
    pub storage_area_id: Option<i32>,
    pub series_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lookups::insignia_type::Entity",
        from = "Column::InsigniaTypeId",
        to = "super::lookups::insignia_type::Column::Id",
        on_delete = "Restrict"
    )]
    InsigniaType,
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
        belongs_to = "super::lookups::material::Entity",
        from = "Column::MaterialId",
        to = "super::lookups::material::Column::Id",
        on_delete = "SetNull"
    )]
    Material,
    #[sea_orm(
        belongs_to = "super::insignia_series::Entity",
        from = "Column::SeriesId",
        to = "super::insignia_series::Column::Id",
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

impl Related<super::insignia_series::Entity> for Entity {
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
