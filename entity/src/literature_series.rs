//! Named grouping of literature items (e.g. a book series).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "literature_series")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub series_name: String,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::literature::Entity")]
    Literature,
}

impl Related<super::literature::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Literature.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
