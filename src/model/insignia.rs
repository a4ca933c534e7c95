use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InsigniaDto {
    pub id: i32,
    pub name: String,
    pub availability: bool,
    pub price: Decimal,
    pub insignia_type_id: i32,
    pub part_of_set: bool,
    pub origin_id: Option<i32>,
    pub era_id: Option<i32>,
    pub material_id: Option<i32>,
    pub description: String,
    pub photo_url: Option<String>,
    pub storage_area_id: Option<i32>,
    pub series_id: Option<i32>,
}

impl From<entity::insignia::Model> for InsigniaDto {
    fn from(model: entity::insignia::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            availability: model.availability,
            price: model.price,
            insignia_type_id: model.insignia_type_id,
            part_of_set: model.part_of_set,
            origin_id: model.origin_id,
            era_id: model.era_id,
            material_id: model.material_id,
            description: model.description,
            photo_url: model.photo_url,
            storage_area_id: model.storage_area_id,
            series_id: model.series_id,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InsigniaPayload {
    pub name: String,
    pub availability: bool,
    pub price: Decimal,
    pub insignia_type_id: i32,
    pub part_of_set: bool,
    pub origin_id: Option<i32>,
    pub era_id: Option<i32>,
    pub material_id: Option<i32>,
    pub description: String,
    pub storage_area_id: Option<i32>,
    pub series_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct InsigniaSearchFilterDto {
    pub name: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub insignia_type: Option<String>,
    pub part_of_set: Option<bool>,
    pub origin: Option<String>,
    pub era: Option<String>,
    pub material: Option<String>,
}
