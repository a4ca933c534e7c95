//! Physical storage location items can be assigned to.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "storage_area")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub storage_area_name: String,
    pub storage_area_notes: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::artifact::Entity")]
    Artifact,
    #[sea_orm(has_many = "super::equipment::Entity")]
    Equipment,
    #[sea_orm(has_many = "super::insignia::Entity")]
    Insignia,
    #[sea_orm(has_many = "super::literature::Entity")]
    Literature,
    #[sea_orm(has_many = "super::mechanical_equipment::Entity")]
    MechanicalEquipment,
}

impl ActiveModelBehavior for ActiveModel {}
