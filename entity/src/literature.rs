//! Literature item entity (books, manuals, field guides).

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "literature")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub availability: bool,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub price: Decimal,
    pub author_id: Option<i32>,
    pub publication_year: Option<i32>,
    pub publisher_id: Option<i32>,
    #[sea_orm(unique)]
    pub isbn: Option<String>,
    pub literature_type_id: i32,
    pub binding_type_id: i32,
    pub description: String,
    pub photo_url: Option<String>,
    pub storage_area_id: Option<i32>,
    pub series_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lookups::author::Entity",
        from = "Column::AuthorId",
        to = "super::lookups::author::Column::Id",
        on_delete = "SetNull"
    )]
    Author,
    #[sea_orm(
        belongs_to = "super::lookups::publisher::Entity",
        from = "Column::PublisherId",
        to = "super::lookups::publisher::Column::Id",
        on_delete = "SetNull"
    )]
    Publisher,
    #[sea_orm(
        belongs_to = "super::lookups::literature_type::Entity",
        from = "Column::LiteratureTypeId",
        to = "super::lookups::literature_type::Column::Id",
        on_delete = "Restrict"
    )]
    LiteratureType,
    #[sea_orm(
        belongs_to = "super::lookups::binding_type::Entity",
        from = "Column::BindingTypeId",
        to = "super::lookups::binding_type::Column::Id",
        on_delete = "Restrict"
    )]
    BindingType,
    #[sea_orm(
        belongs_to = "super::literature_series::Entity",
        from = "Column::SeriesId",
        to = "super::literature_series::Column::Id",
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

impl Related<super::literature_series::Entity> for Entity {
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
