//! Row-level fixture inserts for catalog reference data.
//!
//! These write lookup, series, and storage-area rows directly through the
//! entity active models, bypassing the repositories under test.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection};

use crate::error::TestError;

pub struct CatalogFixtures<'a> {
    db: &'a DatabaseConnection,
}

macro_rules! lookup_fixture {
    ($fn_name:ident, $module:ident) => {
        pub async fn $fn_name(
            &self,
            name: &str,
        ) -> Result<entity::lookups::$module::Model, TestError> {
            let model = entity::lookups::$module::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            };

            Ok(model.insert(self.db).await?)
        }
    };
}

macro_rules! series_fixture {
    ($fn_name:ident, $module:ident) => {
        pub async fn $fn_name(&self, name: &str) -> Result<entity::$module::Model, TestError> {
            let model = entity::$module::ActiveModel {
                series_name: ActiveValue::Set(name.to_string()),
                description: ActiveValue::Set(None),
                ..Default::default()
            };

            Ok(model.insert(self.db).await?)
        }
    };
}

impl<'a> CatalogFixtures<'a> {
    pub(crate) fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    lookup_fixture!(insert_origin, origin);
    lookup_fixture!(insert_era, era);
    lookup_fixture!(insert_material, material);
    lookup_fixture!(insert_author, author);
    lookup_fixture!(insert_publisher, publisher);
    lookup_fixture!(insert_caliber_spec, caliber_spec);
    lookup_fixture!(insert_manufacturer, manufacturer);
    lookup_fixture!(insert_artifact_type, artifact_type);
    lookup_fixture!(insert_equipment_type, equipment_type);
    lookup_fixture!(insert_insignia_type, insignia_type);
    lookup_fixture!(insert_literature_type, literature_type);
    lookup_fixture!(insert_binding_type, binding_type);
    lookup_fixture!(insert_mechanical_equipment_type, mechanical_equipment_type);

    series_fixture!(insert_literature_series, literature_series);
    series_fixture!(insert_insignia_series, insignia_series);
    series_fixture!(insert_artifact_series, artifact_series);

    pub async fn insert_storage_area(
        &self,
        name: &str,
    ) -> Result<entity::storage_area::Model, TestError> {
        let model = entity::storage_area::ActiveModel {
            storage_area_name: ActiveValue::Set(name.to_string()),
            storage_area_notes: ActiveValue::Set(None),
            ..Default::default()
        };

        Ok(model.insert(self.db).await?)
    }
}
