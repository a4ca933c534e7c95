use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        literature::{LiteratureDto, LiteraturePayload},
    },
    server::{
        controller::util::{
            validate_available_at_creation, validate_item_fields, validate_year,
            validate_year_order, PageParams, PriceRangeParams,
        },
        data::catalog::literature::LiteratureRepository,
        error::Error,
        model::app::AppState,
    },
};

pub static LITERATURE_TAG: &str = "literature";

/// Inclusive publication-year bounds.
#[derive(Debug, Deserialize, IntoParams)]
pub struct YearRangeParams {
    pub start_year: i32,
    pub end_year: i32,
}

impl YearRangeParams {
    fn validate(&self) -> Result<(), Error> {
        validate_year(Some(self.start_year), "start_year")?;
        validate_year(Some(self.end_year), "end_year")?;
        validate_year_order(Some(self.start_year), Some(self.end_year))?;

        Ok(())
    }
}

/// Get a single literature record by ID
#[utoipa::path(
    get,
    path = "/api/literature/get-literature/{id}",
    tag = LITERATURE_TAG,
    params(("id" = i32, Path, description = "Literature ID")),
    responses(
        (status = 200, description = "Literature found", body = LiteratureDto),
        (status = 404, description = "Literature not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_literature(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let literature = LiteratureRepository::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(LiteratureDto::from(literature))))
}

/// Page through all literature records
#[utoipa::path(
    get,
    path = "/api/literature/get-literatures",
    tag = LITERATURE_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of literature records", body = Vec<LiteratureDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_literatures(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    page.validate()?;

    let literatures = LiteratureRepository::new(&state.db)
        .list(page.page_number, page.page_size)
        .await?;

    let dtos: Vec<LiteratureDto> = literatures.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new literature record
#[utoipa::path(
    post,
    path = "/api/literature/create-literature",
    tag = LITERATURE_TAG,
    request_body = LiteraturePayload,
    responses(
        (status = 201, description = "Literature created", body = LiteratureDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 409, description = "Title already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_literature(
    State(state): State<AppState>,
    Json(payload): Json<LiteraturePayload>,
) -> Result<impl IntoResponse, Error> {
    validate_item_fields(&payload.title, &payload.description, payload.price)?;
    validate_available_at_creation(payload.availability)?;
    validate_year(payload.publication_year, "publication_year")?;

    let created = LiteratureRepository::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(LiteratureDto::from(created))))
}

/// Overwrite an existing literature record
#[utoipa::path(
    put,
    path = "/api/literature/update-literature/{id}",
    tag = LITERATURE_TAG,
    params(("id" = i32, Path, description = "Literature ID")),
    request_body = LiteraturePayload,
    responses(
        (status = 200, description = "Literature updated", body = LiteratureDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Literature not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_literature(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<LiteraturePayload>,
) -> Result<impl IntoResponse, Error> {
    validate_item_fields(&payload.title, &payload.description, payload.price)?;
    validate_year(payload.publication_year, "publication_year")?;

    let updated = LiteratureRepository::new(&state.db).update(id, &payload).await?;

    Ok((StatusCode::OK, Json(LiteratureDto::from(updated))))
}

/// Delete a literature record
#[utoipa::path(
    delete,
    path = "/api/literature/delete-literature/{id}",
    tag = LITERATURE_TAG,
    params(("id" = i32, Path, description = "Literature ID")),
    responses(
        (status = 204, description = "Literature deleted"),
        (status = 404, description = "Literature not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_literature(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    LiteratureRepository::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Literature within an inclusive price range
#[utoipa::path(
    get,
    path = "/api/literature/get-literature-by-price-range",
    tag = LITERATURE_TAG,
    params(PriceRangeParams),
    responses(
        (status = 200, description = "Matching literature", body = Vec<LiteratureDto>),
        (status = 400, description = "Invalid price range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_literature_by_price_range(
    State(state): State<AppState>,
    Query(range): Query<PriceRangeParams>,
) -> Result<impl IntoResponse, Error> {
    range.validate()?;

    let literatures = LiteratureRepository::new(&state.db)
        .by_price_range(range.min_price, range.max_price)
        .await?;

    let dtos: Vec<LiteratureDto> = literatures.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Literature by a given author, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/literature/get-literature-by-author/{author}",
    tag = LITERATURE_TAG,
    params(("author" = String, Path, description = "Author name")),
    responses(
        (status = 200, description = "Matching literature", body = Vec<LiteratureDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_literature_by_author(
    State(state): State<AppState>,
    Path(author): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let literatures = LiteratureRepository::new(&state.db).by_author(&author).await?;

    let dtos: Vec<LiteratureDto> = literatures.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Literature published in a given year
#[utoipa::path(
    get,
    path = "/api/literature/get-literature-by-publication-year/{year}",
    tag = LITERATURE_TAG,
    params(("year" = i32, Path, description = "Publication year")),
    responses(
        (status = 200, description = "Matching literature", body = Vec<LiteratureDto>),
        (status = 400, description = "Year out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_literature_by_publication_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    validate_year(Some(year), "year")?;

    let literatures = LiteratureRepository::new(&state.db)
        .by_publication_year(year)
        .await?;

    let dtos: Vec<LiteratureDto> = literatures.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Literature published within an inclusive year range
#[utoipa::path(
    get,
    path = "/api/literature/get-literature-by-publication-year-range",
    tag = LITERATURE_TAG,
    params(YearRangeParams),
    responses(
        (status = 200, description = "Matching literature", body = Vec<LiteratureDto>),
        (status = 400, description = "Invalid year range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_literature_by_publication_year_range(
    State(state): State<AppState>,
    Query(range): Query<YearRangeParams>,
) -> Result<impl IntoResponse, Error> {
    range.validate()?;

    let literatures = LiteratureRepository::new(&state.db)
        .by_publication_year_range(range.start_year, range.end_year)
        .await?;

    let dtos: Vec<LiteratureDto> = literatures.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Literature from a given publisher, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/literature/get-literature-by-publisher/{publisher}",
    tag = LITERATURE_TAG,
    params(("publisher" = String, Path, description = "Publisher name")),
    responses(
        (status = 200, description = "Matching literature", body = Vec<LiteratureDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_literature_by_publisher(
    State(state): State<AppState>,
    Path(publisher): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let literatures = LiteratureRepository::new(&state.db)
        .by_publisher(&publisher)
        .await?;

    let dtos: Vec<LiteratureDto> = literatures.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Literature with a given ISBN, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/literature/get-literature-by-isbn/{isbn}",
    tag = LITERATURE_TAG,
    params(("isbn" = String, Path, description = "ISBN, dashes included")),
    responses(
        (status = 200, description = "Matching literature", body = Vec<LiteratureDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_literature_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let literatures = LiteratureRepository::new(&state.db).by_isbn(&isbn).await?;

    let dtos: Vec<LiteratureDto> = literatures.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Literature of a given type, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/literature/get-literature-by-type/{type_name}",
    tag = LITERATURE_TAG,
    params(("type_name" = String, Path, description = "Literature type name")),
    responses(
        (status = 200, description = "Matching literature", body = Vec<LiteratureDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_literature_by_type(
    State(state): State<AppState>,
    Path(type_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let literatures = LiteratureRepository::new(&state.db).by_type(&type_name).await?;

    let dtos: Vec<LiteratureDto> = literatures.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Literature with a given binding, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/literature/get-literature-by-binding-type/{binding_type}",
    tag = LITERATURE_TAG,
    params(("binding_type" = String, Path, description = "Binding type name")),
    responses(
        (status = 200, description = "Matching literature", body = Vec<LiteratureDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_literature_by_binding_type(
    State(state): State<AppState>,
    Path(binding_type): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let literatures = LiteratureRepository::new(&state.db)
        .by_binding_type(&binding_type)
        .await?;

    let dtos: Vec<LiteratureDto> = literatures.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Members of a literature series
#[utoipa::path(
    get,
    path = "/api/literature/get-series-literatures/{series_id}",
    tag = LITERATURE_TAG,
    params(("series_id" = i32, Path, description = "Literature series ID")),
    responses(
        (status = 200, description = "Literature in the series", body = Vec<LiteratureDto>),
        (status = 404, description = "Series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_series_literatures(
    State(state): State<AppState>,
    Path(series_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let literatures = LiteratureRepository::new(&state.db).by_series(series_id).await?;

    let dtos: Vec<LiteratureDto> = literatures.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Literature assigned to a storage area
#[utoipa::path(
    get,
    path = "/api/literature/get-literatures-by-storage-area/{storage_area_id}",
    tag = LITERATURE_TAG,
    params(("storage_area_id" = i32, Path, description = "Storage area ID")),
    responses(
        (status = 200, description = "Literature in the storage area", body = Vec<LiteratureDto>),
        (status = 404, description = "Storage area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_literatures_by_storage_area(
    State(state): State<AppState>,
    Path(storage_area_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let literatures = LiteratureRepository::new(&state.db)
        .by_storage_area(storage_area_id)
        .await?;

    let dtos: Vec<LiteratureDto> = literatures.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Assign a literature record to a literature series
#[utoipa::path(
    put,
    path = "/api/literature/assign-literature-to-series/{id}/{series_id}",
    tag = LITERATURE_TAG,
    params(
        ("id" = i32, Path, description = "Literature ID"),
        ("series_id" = i32, Path, description = "Literature series ID")
    ),
    responses(
        (status = 204, description = "Literature assigned"),
        (status = 404, description = "Literature or series not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_literature_to_series(
    State(state): State<AppState>,
    Path((id, series_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    LiteratureRepository::new(&state.db)
        .assign_to_series(id, series_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Assign a literature record to a storage area
#[utoipa::path(
    put,
    path = "/api/literature/assign-literature-to-storage-area/{id}/{storage_area_id}",
    tag = LITERATURE_TAG,
    params(
        ("id" = i32, Path, description = "Literature ID"),
        ("storage_area_id" = i32, Path, description = "Storage area ID")
    ),
    responses(
        (status = 204, description = "Literature assigned"),
        (status = 404, description = "Literature or storage area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_literature_to_storage_area(
    State(state): State<AppState>,
    Path((id, storage_area_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    LiteratureRepository::new(&state.db)
        .assign_to_storage_area(id, storage_area_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
