use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MechanicalEquipmentDto {
    pub id: i32,
    pub name: String,
    pub availability: bool,
    pub price: Decimal,
    pub mechanical_equipment_type_id: i32,
    pub caliber_spec_id: Option<i32>,
    pub vehicle_model: Option<String>,
    pub serial_number: Option<String>,
    pub manufacturer_id: Option<i32>,
    pub era_id: Option<i32>,
    pub origin_id: Option<i32>,
    pub material_id: Option<i32>,
    pub description: String,
    pub photo_url: Option<String>,
    pub storage_area_id: Option<i32>,
}

impl From<entity::mechanical_equipment::Model> for MechanicalEquipmentDto {
    fn from(model: entity::mechanical_equipment::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            availability: model.availability,
            price: model.price,
            mechanical_equipment_type_id: model.mechanical_equipment_type_id,
            caliber_spec_id: model.caliber_spec_id,
            vehicle_model: model.vehicle_model,
            serial_number: model.serial_number,
            manufacturer_id: model.manufacturer_id,
            era_id: model.era_id,
            origin_id: model.origin_id,
            material_id: model.material_id,
            description: model.description,
            photo_url: model.photo_url,
            storage_area_id: model.storage_area_id,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MechanicalEquipmentPayload {
    pub name: String,
    pub availability: bool,
    pub price: Decimal,
    pub mechanical_equipment_type_id: i32,
    pub caliber_spec_id: Option<i32>,
    pub vehicle_model: Option<String>,
    pub serial_number: Option<String>,
    pub manufacturer_id: Option<i32>,
    pub era_id: Option<i32>,
    pub origin_id: Option<i32>,
    pub material_id: Option<i32>,
    pub description: String,
    pub storage_area_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MechanicalEquipmentSearchFilterDto {
    pub name: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub mechanical_equipment_type: Option<String>,
    pub caliber_spec: Option<String>,
    pub vehicle_model: Option<String>,
    pub serial_number: Option<String>,
    pub manufacturer: Option<String>,
    pub origin: Option<String>,
    pub era: Option<String>,
    pub material: Option<String>,
}
