//! Error types for the homebase server application.
//!
//! The data-access layer reports typed failures through [`CatalogError`] so
//! the HTTP boundary can pick the right status code; everything else funnels
//! into the aggregate [`Error`]. All error types implement `IntoResponse`
//! and use `thiserror` for their `Display`/`Error` implementations.

pub mod catalog;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{catalog::CatalogError, config::ConfigError},
};

/// Main error type for the homebase server application.
///
/// Aggregates the domain-specific error types and external library errors
/// into a single type so handlers can use `?` throughout. The
/// `IntoResponse` implementation delegates to the domain errors' own
/// response mappings and treats everything else as an internal server error.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Catalog data-access error (not-found, conflict, validation, store).
    #[error(transparent)]
    CatalogError(#[from] CatalogError),
    /// Database error outside the catalog repositories.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Filesystem error while storing an uploaded photo.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    /// Malformed multipart body on the upload endpoint.
    #[error(transparent)]
    MultipartError(#[from] axum::extract::multipart::MultipartError),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::CatalogError(err) => err.into_response(),
            Self::MultipartError(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: format!("Malformed multipart request: {err}"),
                }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper converting any displayable error into a 500 response.
///
/// Logs the full error for debugging but returns a generic message to the
/// client so internal details never leak.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
