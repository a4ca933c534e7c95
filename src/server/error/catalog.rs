use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{api::ErrorDto, catalog::ItemKind},
    server::error::InternalServerError,
};

/// Failures surfaced by the catalog data-access layer.
///
/// A miss on a secondary reference (series, storage area) is a distinct
/// variant from a miss on the primary item id so callers can tell the two
/// apart, even though all of them map to 404 at the HTTP boundary.
/// Uniqueness violations are conflicts, pre-store input rejections are
/// validation failures, and anything the store itself reports is opaque.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{kind} with ID {id} not found")]
    ItemNotFound { kind: ItemKind, id: i32 },
    #[error("{kind} series with ID {id} not found")]
    SeriesNotFound { kind: ItemKind, id: i32 },
    #[error("Storage area with ID {0} not found")]
    StorageAreaNotFound(i32),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

#[cfg(test)]
impl From<CatalogError> for homebase_test_utils::TestError {
    fn from(err: CatalogError) -> Self {
        homebase_test_utils::TestError::Catalog(err.to_string())
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::ItemNotFound { .. }
            | Self::SeriesNotFound { .. }
            | Self::StorageAreaNotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Db(_) => return InternalServerError(self).into_response(),
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
