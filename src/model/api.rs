use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response after a successful photo upload
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UploadDto {
    pub message: String,
    /// Path the uploaded file was stored under, as persisted on the item
    pub path: String,
}
