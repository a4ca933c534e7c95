use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        artifact::{ArtifactDto, ArtifactPayload},
    },
    server::{
        controller::util::{
            validate_available_at_creation, validate_item_fields, PageParams, PriceRangeParams,
        },
        data::catalog::artifact::ArtifactRepository,
        error::Error,
        model::app::AppState,
    },
};

pub static ARTIFACT_TAG: &str = "artifact";

/// Get a single artifact by ID
#[utoipa::path(
    get,
    path = "/api/artifact/get-artifact/{id}",
    tag = ARTIFACT_TAG,
    params(("id" = i32, Path, description = "Artifact ID")),
    responses(
        (status = 200, description = "Artifact found", body = ArtifactDto),
        (status = 404, description = "Artifact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artifact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let artifact = ArtifactRepository::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(ArtifactDto::from(artifact))))
}

/// Page through all artifacts
#[utoipa::path(
    get,
    path = "/api/artifact/get-artifacts",
    tag = ARTIFACT_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of artifacts", body = Vec<ArtifactDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artifacts(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    page.validate()?;

    let artifacts = ArtifactRepository::new(&state.db)
        .list(page.page_number, page.page_size)
        .await?;

    let dtos: Vec<ArtifactDto> = artifacts.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new artifact
#[utoipa::path(
    post,
    path = "/api/artifact/create-artifact",
    tag = ARTIFACT_TAG,
    request_body = ArtifactPayload,
    responses(
        (status = 201, description = "Artifact created", body = ArtifactDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_artifact(
    State(state): State<AppState>,
    Json(payload): Json<ArtifactPayload>,
) -> Result<impl IntoResponse, Error> {
    validate_item_fields(&payload.name, &payload.description, payload.price)?;
    validate_available_at_creation(payload.availability)?;

    let created = ArtifactRepository::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(ArtifactDto::from(created))))
}

/// Overwrite an existing artifact
#[utoipa::path(
    put,
    path = "/api/artifact/update-artifact/{id}",
    tag = ARTIFACT_TAG,
    params(("id" = i32, Path, description = "Artifact ID")),
    request_body = ArtifactPayload,
    responses(
        (status = 200, description = "Artifact updated", body = ArtifactDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Artifact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_artifact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<ArtifactPayload>,
) -> Result<impl IntoResponse, Error> {
    validate_item_fields(&payload.name, &payload.description, payload.price)?;

    let updated = ArtifactRepository::new(&state.db).update(id, &payload).await?;

    Ok((StatusCode::OK, Json(ArtifactDto::from(updated))))
}

/// Delete an artifact
#[utoipa::path(
    delete,
    path = "/api/artifact/delete-artifact/{id}",
    tag = ARTIFACT_TAG,
    params(("id" = i32, Path, description = "Artifact ID")),
    responses(
        (status = 204, description = "Artifact deleted"),
        (status = 404, description = "Artifact not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_artifact(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    ArtifactRepository::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Artifacts within an inclusive price range
#[utoipa::path(
    get,
    path = "/api/artifact/get-artifact-by-price-range",
    tag = ARTIFACT_TAG,
    params(PriceRangeParams),
    responses(
        (status = 200, description = "Matching artifacts", body = Vec<ArtifactDto>),
        (status = 400, description = "Invalid price range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artifact_by_price_range(
    State(state): State<AppState>,
    Query(range): Query<PriceRangeParams>,
) -> Result<impl IntoResponse, Error> {
    range.validate()?;

    let artifacts = ArtifactRepository::new(&state.db)
        .by_price_range(range.min_price, range.max_price)
        .await?;

    let dtos: Vec<ArtifactDto> = artifacts.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Artifacts of a given type, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/artifact/get-artifact-by-type/{type_name}",
    tag = ARTIFACT_TAG,
    params(("type_name" = String, Path, description = "Artifact type name")),
    responses(
        (status = 200, description = "Matching artifacts", body = Vec<ArtifactDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artifact_by_type(
    State(state): State<AppState>,
    Path(type_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let artifacts = ArtifactRepository::new(&state.db).by_type(&type_name).await?;

    let dtos: Vec<ArtifactDto> = artifacts.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Artifacts from a given origin, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/artifact/get-artifact-by-origin/{origin}",
    tag = ARTIFACT_TAG,
    params(("origin" = String, Path, description = "Origin name")),
    responses(
        (status = 200, description = "Matching artifacts", body = Vec<ArtifactDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artifact_by_origin(
    State(state): State<AppState>,
    Path(origin): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let artifacts = ArtifactRepository::new(&state.db).by_origin(&origin).await?;

    let dtos: Vec<ArtifactDto> = artifacts.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Artifacts from a given era, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/artifact/get-artifact-by-era/{era}",
    tag = ARTIFACT_TAG,
    params(("era" = String, Path, description = "Era name")),
    responses(
        (status = 200, description = "Matching artifacts", body = Vec<ArtifactDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artifact_by_era(
    State(state): State<AppState>,
    Path(era): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let artifacts = ArtifactRepository::new(&state.db).by_era(&era).await?;

    let dtos: Vec<ArtifactDto> = artifacts.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Members of an artifact series
#[utoipa::path(
    get,
    path = "/api/artifact/get-series-artifacts/{series_id}",
    tag = ARTIFACT_TAG,
    params(("series_id" = i32, Path, description = "Artifact series ID")),
    responses(
        (status = 200, description = "Artifacts in the series", body = Vec<ArtifactDto>),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_series_artifacts(
    State(state): State<AppState>,
    Path(series_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let artifacts = ArtifactRepository::new(&state.db).by_series(series_id).await?;

    let dtos: Vec<ArtifactDto> = artifacts.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Artifacts assigned to a storage area
#[utoipa::path(
    get,
    path = "/api/artifact/get-artifacts-by-storage-area/{storage_area_id}",
    tag = ARTIFACT_TAG,
    params(("storage_area_id" = i32, Path, description = "Storage area ID")),
    responses(
        (status = 200, description = "Artifacts in the storage area", body = Vec<ArtifactDto>),
        (status = 404, description = "Storage area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_artifacts_by_storage_area(
    State(state): State<AppState>,
    Path(storage_area_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let artifacts = ArtifactRepository::new(&state.db)
        .by_storage_area(storage_area_id)
        .await?;

    let dtos: Vec<ArtifactDto> = artifacts.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Assign an artifact to an artifact series
#[utoipa::path(
    put,
    path = "/api/artifact/assign-artifact-to-series/{id}/{series_id}",
    tag = ARTIFACT_TAG,
    params(
        ("id" = i32, Path, description = "Artifact ID"),
        ("series_id" = i32, Path, description = "Artifact series ID")
    ),
    responses(
        (status = 204, description = "Artifact assigned"),
        (status = 404, description = "Artifact or series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_artifact_to_series(
    State(state): State<AppState>,
    Path((id, series_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    ArtifactRepository::new(&state.db)
        .assign_to_series(id, series_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Assign an artifact to a storage area
#[utoipa::path(
    put,
    path = "/api/artifact/assign-artifact-to-storage-area/{id}/{storage_area_id}",
    tag = ARTIFACT_TAG,
    params(
        ("id" = i32, Path, description = "Artifact ID"),
        ("storage_area_id" = i32, Path, description = "Storage area ID")
    ),
    responses(
        (status = 204, description = "Artifact assigned"),
        (status = 404, description = "Artifact or storage area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_artifact_to_storage_area(
    State(state): State<AppState>,
    Path((id, storage_area_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    ArtifactRepository::new(&state.db)
        .assign_to_storage_area(id, storage_area_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
