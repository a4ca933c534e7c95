use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StorageAreaDto {
    pub id: i32,
    pub storage_area_name: String,
    pub storage_area_notes: Option<String>,
}

impl From<entity::storage_area::Model> for StorageAreaDto {
    fn from(model: entity::storage_area::Model) -> Self {
        Self {
            id: model.id,
            storage_area_name: model.storage_area_name,
            storage_area_notes: model.storage_area_notes,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct StorageAreaPayload {
    pub storage_area_name: String,
    pub storage_area_notes: Option<String>,
}
