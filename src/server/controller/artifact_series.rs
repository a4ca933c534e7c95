use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        catalog::ItemKind,
        series::{SeriesDto, SeriesPayload},
    },
    server::{
        controller::util::{validate_series_fields, PageParams},
        data::{
            catalog::artifact::ArtifactRepository,
            series::{ArtifactSeriesRepository, SeriesEntity},
        },
        error::{catalog::CatalogError, Error},
        model::app::AppState,
    },
};

use entity::artifact_series::Entity as ArtifactSeries;

pub static ARTIFACT_SERIES_TAG: &str = "artifact-series";

/// Get a single artifact series by ID
#[utoipa::path(
    get,
    path = "/api/artifact-series/get-artifact-series/{id}",
    tag = ARTIFACT_SERIES_TAG,
    params(("id" = i32, Path, description = "Series ID")),
    responses(
        (status = 200, description = "Series found", body = SeriesDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artifact_series(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let series = ArtifactSeriesRepository::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(ArtifactSeries::into_dto(series))))
}

/// Page through all artifact series
#[utoipa::path(
    get,
    path = "/api/artifact-series/get-all-artifact-series",
    tag = ARTIFACT_SERIES_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of series", body = Vec<SeriesDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_artifact_series(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    page.validate()?;

    let series = ArtifactSeriesRepository::new(&state.db)
        .list(page.page_number, page.page_size)
        .await?;

    let dtos: Vec<SeriesDto> = series.into_iter().map(ArtifactSeries::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new artifact series
#[utoipa::path(
    post,
    path = "/api/artifact-series/create-artifact-series",
    tag = ARTIFACT_SERIES_TAG,
    request_body = SeriesPayload,
    responses(
        (status = 201, description = "Series created", body = SeriesDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 409, description = "Series name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_artifact_series(
    State(state): State<AppState>,
    Json(payload): Json<SeriesPayload>,
) -> Result<impl IntoResponse, Error> {
    validate_series_fields(&payload.series_name, &payload.description)?;

    let created = ArtifactSeriesRepository::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(ArtifactSeries::into_dto(created))))
}

/// Overwrite an existing artifact series
#[utoipa::path(
    put,
    path = "/api/artifact-series/update-artifact-series/{id}",
    tag = ARTIFACT_SERIES_TAG,
    params(("id" = i32, Path, description = "Series ID")),
    request_body = SeriesPayload,
    responses(
        (status = 200, description = "Series updated", body = SeriesDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_artifact_series(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SeriesPayload>,
) -> Result<impl IntoResponse, Error> {
    validate_series_fields(&payload.series_name, &payload.description)?;

    let updated = ArtifactSeriesRepository::new(&state.db)
        .update(id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(ArtifactSeries::into_dto(updated))))
}

/// Delete an artifact series, releasing its members first
#[utoipa::path(
    delete,
    path = "/api/artifact-series/delete-artifact-series/{id}",
    tag = ARTIFACT_SERIES_TAG,
    params(("id" = i32, Path, description = "Series ID")),
    responses(
        (status = 204, description = "Series deleted"),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_artifact_series(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let repository = ArtifactSeriesRepository::new(&state.db);

    if !repository.exists(id).await? {
        return Err(CatalogError::SeriesNotFound {
            kind: ItemKind::Artifact,
            id,
        }
        .into());
    }

    // Membership is cleared here, not by a schema cascade; deleting the
    // grouping never deletes the items.
    ArtifactRepository::new(&state.db).clear_series(id).await?;
    repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
