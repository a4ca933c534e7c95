use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EquipmentDto {
    pub id: i32,
    pub name: String,
    pub availability: bool,
    pub price: Decimal,
    pub equipment_type_id: i32,
    pub origin_id: Option<i32>,
    pub era_id: Option<i32>,
    pub material_id: Option<i32>,
    pub description: String,
    pub photo_url: Option<String>,
    pub storage_area_id: Option<i32>,
}

impl From<entity::equipment::Model> for EquipmentDto {
    fn from(model: entity::equipment::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            availability: model.availability,
            price: model.price,
            equipment_type_id: model.equipment_type_id,
            origin_id: model.origin_id,
            era_id: model.era_id,
            material_id: model.material_id,
            description: model.description,
            photo_url: model.photo_url,
            storage_area_id: model.storage_area_id,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EquipmentPayload {
    pub name: String,
    pub availability: bool,
    pub price: Decimal,
    pub equipment_type_id: i32,
    pub origin_id: Option<i32>,
    pub era_id: Option<i32>,
    pub material_id: Option<i32>,
    pub description: String,
    pub storage_area_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EquipmentSearchFilterDto {
    pub name: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub equipment_type: Option<String>,
    pub origin: Option<String>,
    pub era: Option<String>,
    pub material: Option<String>,
}
