//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their OpenAPI specifications
//! via utoipa, and Swagger UI serves the collected document at `/api/docs`
//! (JSON at `/api/docs/openapi.json`).

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Homebase", description = "Military collectibles catalog API"), tags(
        (name = controller::literature::LITERATURE_TAG, description = "Literature catalog routes"),
        (name = controller::insignia::INSIGNIA_TAG, description = "Insignia catalog routes"),
        (name = controller::artifact::ARTIFACT_TAG, description = "Artifact catalog routes"),
        (name = controller::equipment::EQUIPMENT_TAG, description = "Equipment catalog routes"),
        (name = controller::mechanical_equipment::MECHANICAL_EQUIPMENT_TAG, description = "Mechanical equipment catalog routes"),
        (name = controller::literature_series::LITERATURE_SERIES_TAG, description = "Literature series routes"),
        (name = controller::insignia_series::INSIGNIA_SERIES_TAG, description = "Insignia series routes"),
        (name = controller::artifact_series::ARTIFACT_SERIES_TAG, description = "Artifact series routes"),
        (name = controller::storage_area::STORAGE_AREA_TAG, description = "Storage area routes"),
        (name = controller::search::SEARCH_TAG, description = "Catalog search routes"),
        (name = controller::utilities::UTILITIES_TAG, description = "Photo upload routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // literature
        .routes(routes!(controller::literature::get_literature))
        .routes(routes!(controller::literature::get_literatures))
        .routes(routes!(controller::literature::create_literature))
        .routes(routes!(controller::literature::update_literature))
        .routes(routes!(controller::literature::delete_literature))
        .routes(routes!(controller::literature::get_literature_by_price_range))
        .routes(routes!(controller::literature::get_literature_by_author))
        .routes(routes!(controller::literature::get_literature_by_publication_year))
        .routes(routes!(controller::literature::get_literature_by_publication_year_range))
        .routes(routes!(controller::literature::get_literature_by_publisher))
        .routes(routes!(controller::literature::get_literature_by_isbn))
        .routes(routes!(controller::literature::get_literature_by_type))
        .routes(routes!(controller::literature::get_literature_by_binding_type))
        .routes(routes!(controller::literature::get_series_literatures))
        .routes(routes!(controller::literature::get_literatures_by_storage_area))
        .routes(routes!(controller::literature::assign_literature_to_series))
        .routes(routes!(controller::literature::assign_literature_to_storage_area))
        // insignia
        .routes(routes!(controller::insignia::get_insignia))
        .routes(routes!(controller::insignia::get_insignias))
        .routes(routes!(controller::insignia::create_insignia))
        .routes(routes!(controller::insignia::update_insignia))
        .routes(routes!(controller::insignia::delete_insignia))
        .routes(routes!(controller::insignia::get_insignia_by_price_range))
        .routes(routes!(controller::insignia::get_insignia_by_type))
        .routes(routes!(controller::insignia::get_insignia_by_origin))
        .routes(routes!(controller::insignia::get_insignia_by_era))
        .routes(routes!(controller::insignia::get_insignia_by_material))
        .routes(routes!(controller::insignia::get_series_insignias))
        .routes(routes!(controller::insignia::get_insignias_by_storage_area))
        .routes(routes!(controller::insignia::assign_insignia_to_series))
        .routes(routes!(controller::insignia::assign_insignia_to_storage_area))
        // artifact
        .routes(routes!(controller::artifact::get_artifact))
        .routes(routes!(controller::artifact::get_artifacts))
        .routes(routes!(controller::artifact::create_artifact))
        .routes(routes!(controller::artifact::update_artifact))
        .routes(routes!(controller::artifact::delete_artifact))
        .routes(routes!(controller::artifact::get_artifact_by_price_range))
        .routes(routes!(controller::artifact::get_artifact_by_type))
        .routes(routes!(controller::artifact::get_artifact_by_origin))
        .routes(routes!(controller::artifact::get_artifact_by_era))
        .routes(routes!(controller::artifact::get_series_artifacts))
        .routes(routes!(controller::artifact::get_artifacts_by_storage_area))
        .routes(routes!(controller::artifact::assign_artifact_to_series))
        .routes(routes!(controller::artifact::assign_artifact_to_storage_area))
        // equipment
        .routes(routes!(controller::equipment::get_equipment))
        .routes(routes!(controller::equipment::get_all_equipment))
        .routes(routes!(controller::equipment::create_equipment))
        .routes(routes!(controller::equipment::update_equipment))
        .routes(routes!(controller::equipment::delete_equipment))
        .routes(routes!(controller::equipment::get_equipment_by_price_range))
        .routes(routes!(controller::equipment::get_equipment_by_type))
        .routes(routes!(controller::equipment::get_equipment_by_origin))
        .routes(routes!(controller::equipment::get_equipment_by_era))
        .routes(routes!(controller::equipment::get_equipment_by_material))
        .routes(routes!(controller::equipment::get_equipment_by_storage_area))
        .routes(routes!(controller::equipment::assign_equipment_to_storage_area))
        // mechanical equipment
        .routes(routes!(controller::mechanical_equipment::get_mechanical_equipment))
        .routes(routes!(controller::mechanical_equipment::get_all_mechanical_equipment))
        .routes(routes!(controller::mechanical_equipment::create_mechanical_equipment))
        .routes(routes!(controller::mechanical_equipment::update_mechanical_equipment))
        .routes(routes!(controller::mechanical_equipment::delete_mechanical_equipment))
        .routes(routes!(controller::mechanical_equipment::get_mechanical_equipment_by_price_range))
        .routes(routes!(controller::mechanical_equipment::get_mechanical_equipment_by_type))
        .routes(routes!(controller::mechanical_equipment::get_mechanical_equipment_by_origin))
        .routes(routes!(controller::mechanical_equipment::get_mechanical_equipment_by_era))
        .routes(routes!(controller::mechanical_equipment::get_mechanical_equipment_by_material))
        .routes(routes!(
            controller::mechanical_equipment::get_mechanical_equipment_by_storage_area
        ))
        .routes(routes!(
            controller::mechanical_equipment::assign_mechanical_equipment_to_storage_area
        ))
        // series
        .routes(routes!(controller::literature_series::get_literature_series))
        .routes(routes!(controller::literature_series::get_all_literature_series))
        .routes(routes!(controller::literature_series::create_literature_series))
        .routes(routes!(controller::literature_series::update_literature_series))
        .routes(routes!(controller::literature_series::delete_literature_series))
        .routes(routes!(controller::insignia_series::get_insignia_series))
        .routes(routes!(controller::insignia_series::get_all_insignia_series))
        .routes(routes!(controller::insignia_series::create_insignia_series))
        .routes(routes!(controller::insignia_series::update_insignia_series))
        .routes(routes!(controller::insignia_series::delete_insignia_series))
        .routes(routes!(controller::artifact_series::get_artifact_series))
        .routes(routes!(controller::artifact_series::get_all_artifact_series))
        .routes(routes!(controller::artifact_series::create_artifact_series))
        .routes(routes!(controller::artifact_series::update_artifact_series))
        .routes(routes!(controller::artifact_series::delete_artifact_series))
        // storage areas
        .routes(routes!(controller::storage_area::get_storage_area))
        .routes(routes!(controller::storage_area::get_storage_areas))
        .routes(routes!(controller::storage_area::create_storage_area))
        .routes(routes!(controller::storage_area::update_storage_area))
        .routes(routes!(controller::storage_area::delete_storage_area))
        // search
        .routes(routes!(controller::search::search_literatures))
        .routes(routes!(controller::search::search_artifacts))
        .routes(routes!(controller::search::search_insignias))
        .routes(routes!(controller::search::search_equipment))
        .routes(routes!(controller::search::search_mechanical_equipment))
        .routes(routes!(controller::search::search_bar))
        // utilities
        .routes(routes!(controller::utilities::upload_file))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
