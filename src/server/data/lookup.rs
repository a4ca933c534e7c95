//! Lookup/attribute name resolution.
//!
//! Attribute filters take human-readable names ("WWII", "brass") and match
//! them against the lookup tables case-insensitively. Resolution happens in
//! SQL: [`ids_by_name`] builds the `IN (SELECT id ...)` subquery the item
//! repositories embed in their filter conditions, so a name that resolves to
//! nothing simply yields no rows. Lookup values themselves are static
//! reference data with no mutation surface in the catalog API.

use sea_orm::{
    sea_query::{Query, SelectStatement},
    ConnectionTrait, EntityTrait, QueryFilter,
};

use crate::server::{data::catalog::item::text_eq, error::catalog::CatalogError};

/// Descriptor implemented by every lookup/attribute entity.
pub trait LookupEntity: EntityTrait {
    fn id_column() -> Self::Column;
    fn name_column() -> Self::Column;
}

macro_rules! impl_lookup_entity {
    ($($module:ident),+ $(,)?) => {
        $(
            impl LookupEntity for entity::lookups::$module::Entity {
                fn id_column() -> entity::lookups::$module::Column {
                    entity::lookups::$module::Column::Id
                }

                fn name_column() -> entity::lookups::$module::Column {
                    entity::lookups::$module::Column::Name
                }
            }
        )+
    };
}

impl_lookup_entity!(
    origin,
    era,
    material,
    author,
    publisher,
    caliber_spec,
    manufacturer,
    artifact_type,
    equipment_type,
    insignia_type,
    literature_type,
    binding_type,
    mechanical_equipment_type,
);

/// Subquery selecting the ids of lookup rows whose name matches `name`
/// case-insensitively.
pub fn ids_by_name<L: LookupEntity>(name: &str) -> SelectStatement {
    Query::select()
        .column(L::id_column())
        .from(L::default())
        .and_where(text_eq(L::name_column(), name))
        .to_owned()
}

/// Point resolution of a lookup name to its row, if any.
pub async fn resolve<L, C>(db: &C, name: &str) -> Result<Option<L::Model>, CatalogError>
where
    L: LookupEntity,
    C: ConnectionTrait,
{
    let row = L::find()
        .filter(text_eq(L::name_column(), name))
        .one(db)
        .await?;

    Ok(row)
}

/// Full reference listing of one lookup table.
pub async fn list_all<L, C>(db: &C) -> Result<Vec<L::Model>, CatalogError>
where
    L: LookupEntity,
    C: ConnectionTrait,
{
    let rows = L::find().all(db).await?;

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use homebase_test_utils::prelude::*;

    use crate::server::data::lookup;

    /// Resolution ignores case and surrounding whitespace
    #[tokio::test]
    async fn resolves_names_case_insensitively() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Era)?;
        let era = test.catalog().insert_era("WWII").await?;

        let resolved =
            lookup::resolve::<entity::lookups::era::Entity, _>(&test.state.db, " wwii ").await?;

        assert_eq!(resolved.map(|m| m.id), Some(era.id));

        Ok(())
    }

    /// An unknown name resolves to nothing rather than an error
    #[tokio::test]
    async fn resolves_unknown_name_to_none() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Era)?;
        test.catalog().insert_era("WWII").await?;

        let resolved =
            lookup::resolve::<entity::lookups::era::Entity, _>(&test.state.db, "Napoleonic").await?;

        assert!(resolved.is_none());

        Ok(())
    }

    /// The full reference listing returns every row
    #[tokio::test]
    async fn lists_all_rows() -> Result<(), TestError> {
        let test = test_setup_with_tables!(entity::prelude::Origin)?;
        test.catalog().insert_origin("Germany").await?;
        test.catalog().insert_origin("United Kingdom").await?;

        let rows = lookup::list_all::<entity::lookups::origin::Entity, _>(&test.state.db).await?;

        assert_eq!(rows.len(), 2);

        Ok(())
    }
}
