//! Attribute lookup tables.
//!
//! Small closed reference sets joined against by the item tables: shared
//! attributes (origin, era, material), literature credits (author,
//! publisher), mechanical-equipment specifics (caliber spec, manufacturer),
//! and the per-category required type tables. Lookup values are static
//! reference data; the catalog API exposes no create/update/delete surface
//! for them.

macro_rules! lookup_entity {
    ($module:ident, $table:literal) => {
        pub mod $module {
            use sea_orm::entity::prelude::*;

            #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
            #[sea_orm(table_name = $table)]
            pub struct Model {
                #[sea_orm(primary_key)]
                pub id: i32,
                pub name: String,
            }

            #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
            pub enum Relation {}

            impl ActiveModelBehavior for ActiveModel {}
        }
    };
}

lookup_entity!(origin, "origin");
lookup_entity!(era, "era");
lookup_entity!(material, "material");
lookup_entity!(author, "author");
lookup_entity!(publisher, "publisher");
lookup_entity!(caliber_spec, "caliber_spec");
lookup_entity!(manufacturer, "manufacturer");
lookup_entity!(artifact_type, "artifact_type");
lookup_entity!(equipment_type, "equipment_type");
lookup_entity!(insignia_type, "insignia_type");
lookup_entity!(literature_type, "literature_type");
lookup_entity!(binding_type, "binding_type");
lookup_entity!(mechanical_equipment_type, "mechanical_equipment_type");
