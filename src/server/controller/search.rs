use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        artifact::{ArtifactDto, ArtifactSearchFilterDto},
        equipment::{EquipmentDto, EquipmentSearchFilterDto},
        insignia::{InsigniaDto, InsigniaSearchFilterDto},
        literature::{LiteratureDto, LiteratureSearchFilterDto},
        mechanical_equipment::{MechanicalEquipmentDto, MechanicalEquipmentSearchFilterDto},
        search::SimpleSearchResultsDto,
    },
    server::{
        controller::util::{validate_price_bounds, validate_year, validate_year_order},
        error::{catalog::CatalogError, Error},
        model::app::AppState,
        service::search::SearchService,
    },
};

pub static SEARCH_TAG: &str = "search";

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchBarParams {
    /// Free-text query matched against item names/titles
    pub query: String,
}

/// Structured literature search; populated fields are AND-combined
#[utoipa::path(
    post,
    path = "/api/search/search-literatures",
    tag = SEARCH_TAG,
    request_body = LiteratureSearchFilterDto,
    responses(
        (status = 200, description = "Matching literature", body = Vec<LiteratureDto>),
        (status = 400, description = "Invalid filter ranges", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_literatures(
    State(state): State<AppState>,
    Json(filter): Json<LiteratureSearchFilterDto>,
) -> Result<impl IntoResponse, Error> {
    validate_price_bounds(filter.min_price, filter.max_price)?;
    validate_year(filter.year_published, "year_published")?;
    validate_year(filter.publication_year_from, "publication_year_from")?;
    validate_year(filter.publication_year_to, "publication_year_to")?;
    validate_year_order(filter.publication_year_from, filter.publication_year_to)?;

    let results = SearchService::new(&state.db).search_literatures(&filter).await?;

    Ok((StatusCode::OK, Json(results)))
}

/// Structured artifact search; populated fields are AND-combined
#[utoipa::path(
    post,
    path = "/api/search/search-artifacts",
    tag = SEARCH_TAG,
    request_body = ArtifactSearchFilterDto,
    responses(
        (status = 200, description = "Matching artifacts", body = Vec<ArtifactDto>),
        (status = 400, description = "Invalid filter ranges", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_artifacts(
    State(state): State<AppState>,
    Json(filter): Json<ArtifactSearchFilterDto>,
) -> Result<impl IntoResponse, Error> {
    validate_price_bounds(filter.min_price, filter.max_price)?;

    let results = SearchService::new(&state.db).search_artifacts(&filter).await?;

    Ok((StatusCode::OK, Json(results)))
}

/// Structured insignia search; populated fields are AND-combined
#[utoipa::path(
    post,
    path = "/api/search/search-insignias",
    tag = SEARCH_TAG,
    request_body = InsigniaSearchFilterDto,
    responses(
        (status = 200, description = "Matching insignias", body = Vec<InsigniaDto>),
        (status = 400, description = "Invalid filter ranges", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_insignias(
    State(state): State<AppState>,
    Json(filter): Json<InsigniaSearchFilterDto>,
) -> Result<impl IntoResponse, Error> {
    validate_price_bounds(filter.min_price, filter.max_price)?;

    let results = SearchService::new(&state.db).search_insignias(&filter).await?;

    Ok((StatusCode::OK, Json(results)))
}

/// Structured equipment search; populated fields are AND-combined
#[utoipa::path(
    post,
    path = "/api/search/search-equipment",
    tag = SEARCH_TAG,
    request_body = EquipmentSearchFilterDto,
    responses(
        (status = 200, description = "Matching equipment", body = Vec<EquipmentDto>),
        (status = 400, description = "Invalid filter ranges", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_equipment(
    State(state): State<AppState>,
    Json(filter): Json<EquipmentSearchFilterDto>,
) -> Result<impl IntoResponse, Error> {
    validate_price_bounds(filter.min_price, filter.max_price)?;

    let results = SearchService::new(&state.db).search_equipment(&filter).await?;

    Ok((StatusCode::OK, Json(results)))
}

/// Structured mechanical-equipment search; populated fields are AND-combined
#[utoipa::path(
    post,
    path = "/api/search/search-mechanical-equipment",
    tag = SEARCH_TAG,
    request_body = MechanicalEquipmentSearchFilterDto,
    responses(
        (status = 200, description = "Matching mechanical equipment", body = Vec<MechanicalEquipmentDto>),
        (status = 400, description = "Invalid filter ranges", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_mechanical_equipment(
    State(state): State<AppState>,
    Json(filter): Json<MechanicalEquipmentSearchFilterDto>,
) -> Result<impl IntoResponse, Error> {
    validate_price_bounds(filter.min_price, filter.max_price)?;

    let results = SearchService::new(&state.db)
        .search_mechanical_equipment(&filter)
        .await?;

    Ok((StatusCode::OK, Json(results)))
}

/// Free-text search fanned out across every item category
#[utoipa::path(
    get,
    path = "/api/search/search",
    tag = SEARCH_TAG,
    params(SearchBarParams),
    responses(
        (status = 200, description = "Tagged per-category results", body = SimpleSearchResultsDto),
        (status = 400, description = "Blank query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_bar(
    State(state): State<AppState>,
    Query(params): Query<SearchBarParams>,
) -> Result<impl IntoResponse, Error> {
    if params.query.trim().is_empty() {
        return Err(CatalogError::Validation("Query must be provided.".to_string()).into());
    }

    let results = SearchService::new(&state.db).simple_search_all(&params.query).await?;

    Ok((StatusCode::OK, Json(results)))
}
