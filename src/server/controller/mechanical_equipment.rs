use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        mechanical_equipment::{MechanicalEquipmentDto, MechanicalEquipmentPayload},
    },
    server::{
        controller::util::{
            validate_available_at_creation, validate_item_fields, PageParams, PriceRangeParams,
        },
        data::catalog::mechanical_equipment::MechanicalEquipmentRepository,
        error::Error,
        model::app::AppState,
    },
};

pub static MECHANICAL_EQUIPMENT_TAG: &str = "mechanical-equipment";

/// Get a single piece of mechanical equipment by ID
#[utoipa::path(
    get,
    path = "/api/mechanical-equipment/get-mechanical-equipment/{id}",
    tag = MECHANICAL_EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Mechanical equipment ID")),
    responses(
        (status = 200, description = "Mechanical equipment found", body = MechanicalEquipmentDto),
        (status = 404, description = "Mechanical equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mechanical_equipment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let item = MechanicalEquipmentRepository::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(MechanicalEquipmentDto::from(item))))
}

/// Page through all mechanical equipment
#[utoipa::path(
    get,
    path = "/api/mechanical-equipment/get-all-mechanical-equipment",
    tag = MECHANICAL_EQUIPMENT_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of mechanical equipment", body = Vec<MechanicalEquipmentDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_mechanical_equipment(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    page.validate()?;

    let items = MechanicalEquipmentRepository::new(&state.db)
        .list(page.page_number, page.page_size)
        .await?;

    let dtos: Vec<MechanicalEquipmentDto> = items.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new piece of mechanical equipment
#[utoipa::path(
    post,
    path = "/api/mechanical-equipment/create-mechanical-equipment",
    tag = MECHANICAL_EQUIPMENT_TAG,
    request_body = MechanicalEquipmentPayload,
    responses(
        (status = 201, description = "Mechanical equipment created", body = MechanicalEquipmentDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mechanical_equipment(
    State(state): State<AppState>,
    Json(payload): Json<MechanicalEquipmentPayload>,
) -> Result<impl IntoResponse, Error> {
    validate_item_fields(&payload.name, &payload.description, payload.price)?;
    validate_available_at_creation(payload.availability)?;

    let created = MechanicalEquipmentRepository::new(&state.db)
        .create(&payload)
        .await?;

    Ok((StatusCode::CREATED, Json(MechanicalEquipmentDto::from(created))))
}

/// Overwrite an existing piece of mechanical equipment
#[utoipa::path(
    put,
    path = "/api/mechanical-equipment/update-mechanical-equipment/{id}",
    tag = MECHANICAL_EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Mechanical equipment ID")),
    request_body = MechanicalEquipmentPayload,
    responses(
        (status = 200, description = "Mechanical equipment updated", body = MechanicalEquipmentDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Mechanical equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_mechanical_equipment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MechanicalEquipmentPayload>,
) -> Result<impl IntoResponse, Error> {
    validate_item_fields(&payload.name, &payload.description, payload.price)?;

    let updated = MechanicalEquipmentRepository::new(&state.db)
        .update(id, &payload)
        .await?;

    Ok((StatusCode::OK, Json(MechanicalEquipmentDto::from(updated))))
}

/// Delete a piece of mechanical equipment
#[utoipa::path(
    delete,
    path = "/api/mechanical-equipment/delete-mechanical-equipment/{id}",
    tag = MECHANICAL_EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Mechanical equipment ID")),
    responses(
        (status = 204, description = "Mechanical equipment deleted"),
        (status = 404, description = "Mechanical equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_mechanical_equipment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    MechanicalEquipmentRepository::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Mechanical equipment within an inclusive price range
#[utoipa::path(
    get,
    path = "/api/mechanical-equipment/get-mechanical-equipment-by-price-range",
    tag = MECHANICAL_EQUIPMENT_TAG,
    params(PriceRangeParams),
    responses(
        (status = 200, description = "Matching mechanical equipment", body = Vec<MechanicalEquipmentDto>),
        (status = 400, description = "Invalid price range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mechanical_equipment_by_price_range(
    State(state): State<AppState>,
    Query(range): Query<PriceRangeParams>,
) -> Result<impl IntoResponse, Error> {
    range.validate()?;

    let items = MechanicalEquipmentRepository::new(&state.db)
        .by_price_range(range.min_price, range.max_price)
        .await?;

    let dtos: Vec<MechanicalEquipmentDto> = items.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Mechanical equipment of a given type, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/mechanical-equipment/get-mechanical-equipment-by-type/{type_name}",
    tag = MECHANICAL_EQUIPMENT_TAG,
    params(("type_name" = String, Path, description = "Mechanical equipment type name")),
    responses(
        (status = 200, description = "Matching mechanical equipment", body = Vec<MechanicalEquipmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mechanical_equipment_by_type(
    State(state): State<AppState>,
    Path(type_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let items = MechanicalEquipmentRepository::new(&state.db)
        .by_type(&type_name)
        .await?;

    let dtos: Vec<MechanicalEquipmentDto> = items.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Mechanical equipment from a given origin, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/mechanical-equipment/get-mechanical-equipment-by-origin/{origin}",
    tag = MECHANICAL_EQUIPMENT_TAG,
    params(("origin" = String, Path, description = "Origin name")),
    responses(
        (status = 200, description = "Matching mechanical equipment", body = Vec<MechanicalEquipmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mechanical_equipment_by_origin(
    State(state): State<AppState>,
    Path(origin): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let items = MechanicalEquipmentRepository::new(&state.db)
        .by_origin(&origin)
        .await?;

    let dtos: Vec<MechanicalEquipmentDto> = items.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Mechanical equipment from a given era, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/mechanical-equipment/get-mechanical-equipment-by-era/{era}",
    tag = MECHANICAL_EQUIPMENT_TAG,
    params(("era" = String, Path, description = "Era name")),
    responses(
        (status = 200, description = "Matching mechanical equipment", body = Vec<MechanicalEquipmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mechanical_equipment_by_era(
    State(state): State<AppState>,
    Path(era): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let items = MechanicalEquipmentRepository::new(&state.db).by_era(&era).await?;

    let dtos: Vec<MechanicalEquipmentDto> = items.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Mechanical equipment made of a given material, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/mechanical-equipment/get-mechanical-equipment-by-material/{material}",
    tag = MECHANICAL_EQUIPMENT_TAG,
    params(("material" = String, Path, description = "Material name")),
    responses(
        (status = 200, description = "Matching mechanical equipment", body = Vec<MechanicalEquipmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mechanical_equipment_by_material(
    State(state): State<AppState>,
    Path(material): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let items = MechanicalEquipmentRepository::new(&state.db)
        .by_material(&material)
        .await?;

    let dtos: Vec<MechanicalEquipmentDto> = items.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Mechanical equipment assigned to a storage area
#[utoipa::path(
    get,
    path = "/api/mechanical-equipment/get-mechanical-equipment-by-storage-area/{storage_area_id}",
    tag = MECHANICAL_EQUIPMENT_TAG,
    params(("storage_area_id" = i32, Path, description = "Storage area ID")),
    responses(
        (status = 200, description = "Mechanical equipment in the storage area", body = Vec<MechanicalEquipmentDto>),
        (status = 404, description = "Storage area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mechanical_equipment_by_storage_area(
    State(state): State<AppState>,
    Path(storage_area_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let items = MechanicalEquipmentRepository::new(&state.db)
        .by_storage_area(storage_area_id)
        .await?;

    let dtos: Vec<MechanicalEquipmentDto> = items.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Assign a piece of mechanical equipment to a storage area
#[utoipa::path(
    put,
    path = "/api/mechanical-equipment/assign-mechanical-equipment-to-storage-area/{id}/{storage_area_id}",
    tag = MECHANICAL_EQUIPMENT_TAG,
    params(
        ("id" = i32, Path, description = "Mechanical equipment ID"),
        ("storage_area_id" = i32, Path, description = "Storage area ID")
    ),
    responses(
        (status = 204, description = "Mechanical equipment assigned"),
        (status = 404, description = "Mechanical equipment or storage area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_mechanical_equipment_to_storage_area(
    State(state): State<AppState>,
    Path((id, storage_area_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    MechanicalEquipmentRepository::new(&state.db)
        .assign_to_storage_area(id, storage_area_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
