use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LiteratureDto {
    pub id: i32,
    pub title: String,
    pub availability: bool,
    pub price: Decimal,
    pub author_id: Option<i32>,
    pub publication_year: Option<i32>,
    pub publisher_id: Option<i32>,
    pub isbn: Option<String>,
    pub literature_type_id: i32,
    pub binding_type_id: i32,
    pub description: String,
    pub photo_url: Option<String>,
    pub storage_area_id: Option<i32>,
    pub series_id: Option<i32>,
}

impl From<entity::literature::Model> for LiteratureDto {
    fn from(model: entity::literature::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            availability: model.availability,
            price: model.price,
            author_id: model.author_id,
            publication_year: model.publication_year,
            publisher_id: model.publisher_id,
            isbn: model.isbn,
            literature_type_id: model.literature_type_id,
            binding_type_id: model.binding_type_id,
            description: model.description,
            photo_url: model.photo_url,
            storage_area_id: model.storage_area_id,
            series_id: model.series_id,
        }
    }
}

/// Mutable fields accepted on create and update. The photo URL is absent on
/// purpose; it is only ever set through the upload path.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LiteraturePayload {
    pub title: String,
    pub availability: bool,
    pub price: Decimal,
    pub author_id: Option<i32>,
    pub publication_year: Option<i32>,
    pub publisher_id: Option<i32>,
    pub isbn: Option<String>,
    pub literature_type_id: i32,
    pub binding_type_id: i32,
    pub description: String,
    pub storage_area_id: Option<i32>,
    pub series_id: Option<i32>,
}

/// Structured search criteria; unset fields impose no constraint.
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LiteratureSearchFilterDto {
    pub title: Option<String>,
    pub author: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub year_published: Option<i32>,
    pub publication_year_from: Option<i32>,
    pub publication_year_to: Option<i32>,
    pub publisher: Option<String>,
    pub isbn: Option<String>,
    pub literature_type: Option<String>,
    pub binding_type: Option<String>,
}
