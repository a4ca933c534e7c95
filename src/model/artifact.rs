use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ArtifactDto {
    pub id: i32,
    pub name: String,
    pub availability: bool,
    pub price: Decimal,
    pub artifact_type_id: i32,
    pub origin_id: Option<i32>,
    pub era_id: Option<i32>,
    pub description: String,
    pub photo_url: Option<String>,
    pub storage_area_id: Option<i32>,
    pub series_id: Option<i32>,
}

impl From<entity::artifact::Model> for ArtifactDto {
    fn from(model: entity::artifact::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            availability: model.availability,
            price: model.price,
            artifact_type_id: model.artifact_type_id,
            origin_id: model.origin_id,
            era_id: model.era_id,
            description: model.description,
            photo_url: model.photo_url,
            storage_area_id: model.storage_area_id,
            series_id: model.series_id,
        }
    }
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ArtifactPayload {
    pub name: String,
    pub availability: bool,
    pub price: Decimal,
    pub artifact_type_id: i32,
    pub origin_id: Option<i32>,
    pub era_id: Option<i32>,
    pub description: String,
    pub storage_area_id: Option<i32>,
    pub series_id: Option<i32>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ArtifactSearchFilterDto {
    pub name: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub artifact_type: Option<String>,
    pub origin: Option<String>,
    pub era: Option<String>,
}
