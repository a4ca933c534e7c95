//! Named grouping of insignia items (e.g. a medal set across campaigns).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "insignia_series")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub series_name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::insignia::Entity")]
    Insignia,
}

impl Related<super::insignia::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Insignia.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
