use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        equipment::{EquipmentDto, EquipmentPayload},
    },
    server::{
        controller::util::{
            validate_available_at_creation, validate_item_fields, PageParams, PriceRangeParams,
        },
        data::catalog::equipment::EquipmentRepository,
        error::Error,
        model::app::AppState,
    },
};

pub static EQUIPMENT_TAG: &str = "equipment";

/// Get a single piece of equipment by ID
#[utoipa::path(
    get,
    path = "/api/equipment/get-equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 200, description = "Equipment found", body = EquipmentDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let equipment = EquipmentRepository::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(EquipmentDto::from(equipment))))
}

/// Page through all equipment
#[utoipa::path(
    get,
    path = "/api/equipment/get-all-equipment",
    tag = EQUIPMENT_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of equipment", body = Vec<EquipmentDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_equipment(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    page.validate()?;

    let equipment = EquipmentRepository::new(&state.db)
        .list(page.page_number, page.page_size)
        .await?;

    let dtos: Vec<EquipmentDto> = equipment.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new piece of equipment
#[utoipa::path(
    post,
    path = "/api/equipment/create-equipment",
    tag = EQUIPMENT_TAG,
    request_body = EquipmentPayload,
    responses(
        (status = 201, description = "Equipment created", body = EquipmentDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 409, description = "Name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    Json(payload): Json<EquipmentPayload>,
) -> Result<impl IntoResponse, Error> {
    validate_item_fields(&payload.name, &payload.description, payload.price)?;
    validate_available_at_creation(payload.availability)?;

    let created = EquipmentRepository::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(EquipmentDto::from(created))))
}

/// Overwrite an existing piece of equipment
#[utoipa::path(
    put,
    path = "/api/equipment/update-equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    request_body = EquipmentPayload,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<EquipmentPayload>,
) -> Result<impl IntoResponse, Error> {
    validate_item_fields(&payload.name, &payload.description, payload.price)?;

    let updated = EquipmentRepository::new(&state.db).update(id, &payload).await?;

    Ok((StatusCode::OK, Json(EquipmentDto::from(updated))))
}

/// Delete a piece of equipment
#[utoipa::path(
    delete,
    path = "/api/equipment/delete-equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(("id" = i32, Path, description = "Equipment ID")),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    EquipmentRepository::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Equipment within an inclusive price range
#[utoipa::path(
    get,
    path = "/api/equipment/get-equipment-by-price-range",
    tag = EQUIPMENT_TAG,
    params(PriceRangeParams),
    responses(
        (status = 200, description = "Matching equipment", body = Vec<EquipmentDto>),
        (status = 400, description = "Invalid price range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipment_by_price_range(
    State(state): State<AppState>,
    Query(range): Query<PriceRangeParams>,
) -> Result<impl IntoResponse, Error> {
    range.validate()?;

    let equipment = EquipmentRepository::new(&state.db)
        .by_price_range(range.min_price, range.max_price)
        .await?;

    let dtos: Vec<EquipmentDto> = equipment.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Equipment of a given type, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/equipment/get-equipment-by-type/{type_name}",
    tag = EQUIPMENT_TAG,
    params(("type_name" = String, Path, description = "Equipment type name")),
    responses(
        (status = 200, description = "Matching equipment", body = Vec<EquipmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipment_by_type(
    State(state): State<AppState>,
    Path(type_name): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let equipment = EquipmentRepository::new(&state.db).by_type(&type_name).await?;

    let dtos: Vec<EquipmentDto> = equipment.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Equipment from a given origin, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/equipment/get-equipment-by-origin/{origin}",
    tag = EQUIPMENT_TAG,
    params(("origin" = String, Path, description = "Origin name")),
    responses(
        (status = 200, description = "Matching equipment", body = Vec<EquipmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipment_by_origin(
    State(state): State<AppState>,
    Path(origin): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let equipment = EquipmentRepository::new(&state.db).by_origin(&origin).await?;

    let dtos: Vec<EquipmentDto> = equipment.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Equipment from a given era, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/equipment/get-equipment-by-era/{era}",
    tag = EQUIPMENT_TAG,
    params(("era" = String, Path, description = "Era name")),
    responses(
        (status = 200, description = "Matching equipment", body = Vec<EquipmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipment_by_era(
    State(state): State<AppState>,
    Path(era): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let equipment = EquipmentRepository::new(&state.db).by_era(&era).await?;

    let dtos: Vec<EquipmentDto> = equipment.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Equipment made of a given material, matched case-insensitively
#[utoipa::path(
    get,
    path = "/api/equipment/get-equipment-by-material/{material}",
    tag = EQUIPMENT_TAG,
    params(("material" = String, Path, description = "Material name")),
    responses(
        (status = 200, description = "Matching equipment", body = Vec<EquipmentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipment_by_material(
    State(state): State<AppState>,
    Path(material): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let equipment = EquipmentRepository::new(&state.db).by_material(&material).await?;

    let dtos: Vec<EquipmentDto> = equipment.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Equipment assigned to a storage area
#[utoipa::path(
    get,
    path = "/api/equipment/get-equipment-by-storage-area/{storage_area_id}",
    tag = EQUIPMENT_TAG,
    params(("storage_area_id" = i32, Path, description = "Storage area ID")),
    responses(
        (status = 200, description = "Equipment in the storage area", body = Vec<EquipmentDto>),
        (status = 404, description = "Storage area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_equipment_by_storage_area(
    State(state): State<AppState>,
    Path(storage_area_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let equipment = EquipmentRepository::new(&state.db)
        .by_storage_area(storage_area_id)
        .await?;

    let dtos: Vec<EquipmentDto> = equipment.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Assign a piece of equipment to a storage area
#[utoipa::path(
    put,
    path = "/api/equipment/assign-equipment-to-storage-area/{id}/{storage_area_id}",
    tag = EQUIPMENT_TAG,
    params(
        ("id" = i32, Path, description = "Equipment ID"),
        ("storage_area_id" = i32, Path, description = "Storage area ID")
    ),
    responses(
        (status = 204, description = "Equipment assigned"),
        (status = 404, description = "Equipment or storage area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_equipment_to_storage_area(
    State(state): State<AppState>,
    Path((id, storage_area_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, Error> {
    EquipmentRepository::new(&state.db)
        .assign_to_storage_area(id, storage_area_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
