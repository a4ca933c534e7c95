use serde::{Deserialize, Serialize};

/// A named grouping of items within one category. The same wire shape serves
/// all three series kinds.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SeriesDto {
    pub id: i32,
    pub series_name: String,
    pub description: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SeriesPayload {
    pub series_name: String,
    pub description: Option<String>,
}
