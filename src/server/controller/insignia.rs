use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        insignia::{InsigniaDto, InsigniaPayload},
    },
    server::{
        controller::util::{
            validate_available_at_creation, validate_item_fields, PageParams, PriceRangeParams,
        },
        data::catalog::insignia::InsigniaRepository,
        error::Error,
        model::app::AppState,
    },
};

pub static INSIGNIA_TAG: &str = "insignia";

/// Get a single insignia by ID
#[utoipa::path(
    get,
    path = "/api/insignia/get-insignia/{id}",
    tag = INSIGNIA_TAG,
    params(("id" = i32, Path, description = "Insignia ID")),
    responses(
        (status = 200, description = "Insignia found", body = InsigniaDto),
        (status = 404, description = "Insignia not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insignia(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let insignia = InsigniaRepository::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(InsigniaDto::from(insignia))))
}

/// Page through all insignias
#[utoipa::path(
    get,
    path = "/api/insignia/get-insignias",
    tag = INSIGNIA_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of insignias", body = Vec<InsigniaDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insignias(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    page.validate()?;

    let insignias = InsigniaRepository::new(&state.db)
        .list(page.page_number, page.page_size)
        .await?;

    let dtos: Vec<InsigniaDto> = insignias.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new insignia
#[utoipa::path(
    post,
    path = "/api/insignia/create-insignia",
    tag = INSIGNIA_TAG,
    request_body = InsigniaPayload,
    responses(
        (status = 201, description = "Insignia created", body = InsigniaDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_insignia(
    State(state): State<AppState>,
    Json(payload): Json<InsigniaPayload>,
) -> Result<impl IntoResponse, Error> {
    validate_item_fields(&payload.name, &payload.description, payload.price)?;
    validate_available_at_creation(payload.availability)?;

    let created = InsigniaRepository::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(InsigniaDto::from(created))))
}

/// Overwrite an existing insignia
#[utoipa::path(
    put,
    path = "/api/insignia/update-insignia/{id}",
    tag = INSIGNIA_TAG,
    params(("id" = i32, Path, description = "Insignia ID")),
    request_body = InsigniaPayload,
    responses(
        (status = 200, description = "Insignia updated", body = InsigniaDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Insignia not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_insignia(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<InsigniaPayload>,
) -> Result<impl IntoResponse, Error> {
    validate_item_fields(&payload.name, &payload.description, payload.price)?;

    let updated = InsigniaRepository::new(&state.db).update(id, &payload).await?;

    Ok((StatusCode::OK, Json(InsigniaDto::from(updated))))
}

/// Delete an insignia
#[utoipa::path(
    delete,
    path = "/api/insignia/delete-insignia/{id}",
    tag = INSIGNIA_TAG,
    params(("id" = i32, Path, description = "Insignia ID")),
    responses(
        (status = 204, description = "Insignia deleted"),
        (status = 404, description = "Insignia not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_insignia(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    InsigniaRepository::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Insignias within an inclusive price range
#[utoipa::path(
    get,
    path = "/api/insignia/get-insignia-by-price-range",
    tag = INSIGNIA_TAG,
    params(PriceRangeParams),
    responses(
        (status = 200, description = "Matching insignias", body = Vec<InsigniaDto>),
        (status = 400, description = "Invalid price range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insignia_by_price_range(
    State(state): State<AppState>,
    Query(range): Query<PriceRangeParams>,
) -> Result<impl IntoResponse, Error> {
    range.validate()?;

    let insignias = InsigniaRepository::new(&state.db)
        .by_price_range(range.min_price, range.max_price)
        .await?;

    let dtos: Vec<InsigniaDto> = insignias.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Insignias of a given type, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/insignia/get-insignia-by-type/{type_name}",
    tag = INSIGNIA_TAG,
    params(("type_name" = String, Path, description = "Insignia type name")),
    responses(
        (status = 200, description = "Matching insignias", body = Vec<InsigniaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insignia_by_type(
    State(state): State<AppState>,
    Path(type_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let insignias = InsigniaRepository::new(&state.db).by_type(&type_name).await?;

    let dtos: Vec<InsigniaDto> = insignias.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Insignias from a given origin, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/insignia/get-insignia-by-origin/{origin}",
    tag = INSIGNIA_TAG,
    params(("origin" = String, Path, description = "Origin name")),
    responses(
        (status = 200, description = "Matching insignias", body = Vec<InsigniaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insignia_by_origin(
    State(state): State<AppState>,
    Path(origin): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let insignias = InsigniaRepository::new(&state.db).by_origin(&origin).await?;

    let dtos: Vec<InsigniaDto> = insignias.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Insignias from a given era, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/insignia/get-insignia-by-era/{era}",
    tag = INSIGNIA_TAG,
    params(("era" = String, Path, description = "Era name")),
    responses(
        (status = 200, description = "Matching insignias", body = Vec<InsigniaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insignia_by_era(
    State(state): State<AppState>,
    Path(era): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let insignias = InsigniaRepository::new(&state.db).by_era(&era).await?;

    let dtos: Vec<InsigniaDto> = insignias.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Insignias made of a given material, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/insignia/get-insignia-by-material/{material}",
    tag = INSIGNIA_TAG,
    params(("material" = String, Path, description = "Material name")),
    responses(
        (status = 200, description = "Matching insignias", body = Vec<InsigniaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insignia_by_material(
    State(state): State<AppState>,
    Path(material): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let insignias = InsigniaRepository::new(&state.db).by_material(&material).await?;

    let dtos: Vec<InsigniaDto> = insignias.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Members of an insignia series
#[utoipa::path(
    get,
    path = "/api/insignia/get-series-insignias/{series_id}",
    tag = INSIGNIA_TAG,
    params(("series_id" = i32, Path, description = "Insignia series ID")),
    responses(
        (status = 200, description = "Insignias in the series", body = Vec<InsigniaDto>),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_series_insignias(
    State(state): State<AppState>,
    Path(series_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let insignias = InsigniaRepository::new(&state.db).by_series(series_id).await?;

    let dtos: Vec<InsigniaDto> = insignias.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Insignias assigned to a storage area
#[utoipa::path(
    get,
    path = "/api/insignia/get-insignias-by-storage-area/{storage_area_id}",
    tag = INSIGNIA_TAG,
    params(("storage_area_id" = i32, Path, description = "Storage area ID")),
    responses(
        (status = 200, description = "Insignias in the storage area", body = Vec<InsigniaDto>),
        (status = 404, description = "Storage area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_insignias_by_storage_area(
    State(state): State<AppState>,
    Path(storage_area_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let insignias = InsigniaRepository::new(&state.db)
        .by_storage_area(storage_area_id)
        .await?;

    let dtos: Vec<InsigniaDto> = insignias.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Assign an insignia to an insignia series
#[utoipa::path(
    put,
    path = "/api/insignia/assign-insignia-to-series/{id}/{series_id}",
    tag = INSIGNIA_TAG,
    params(
        ("id" = i32, Path, description = "Insignia ID"),
        ("series_id" = i32, Path, description = "Insignia series ID")
    ),
    responses(
        (status = 204, description = "Insignia assigned"),
        (status = 404, description = "Insignia or series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_insignia_to_series(
    State(state): State<AppState>,
    Path((id, series_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    InsigniaRepository::new(&state.db)
        .assign_to_series(id, series_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Assign an insignia to a storage area
#[utoipa::path(
    put,
    path = "/api/insignia/assign-insignia-to-storage-area/{id}/{storage_area_id}",
    tag = INSIGNIA_TAG,
    params(
        ("id" = i32, Path, description = "Insignia ID"),
        ("storage_area_id" = i32, Path, description = "Storage area ID")
    ),
    responses(
        (status = 204, description = "Insignia assigned"),
        (status = 404, description = "Insignia or storage area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_insignia_to_storage_area(
    State(state): State<AppState>,
    Path((id, storage_area_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    InsigniaRepository::new(&state.db)
        .assign_to_storage_area(id, storage_area_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
