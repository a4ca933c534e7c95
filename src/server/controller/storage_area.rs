use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        storage_area::{StorageAreaDto, StorageAreaPayload},
    },
    server::{
        controller::util::{validate_storage_area_fields, PageParams},
        data::{
            catalog::{
                artifact::ArtifactRepository, equipment::EquipmentRepository,
                insignia::InsigniaRepository, literature::LiteratureRepository,
                mechanical_equipment::MechanicalEquipmentRepository,
            },
            storage_area::StorageAreaRepository,
        },
        error::{catalog::CatalogError, Error},
        model::app::AppState,
    },
};

pub static STORAGE_AREA_TAG: &str = "storage-area";

/// Get a single storage area by ID
#[utoipa::path(
    get,
    path = "/api/storage-area/get-storage-area/{id}",
    tag = STORAGE_AREA_TAG,
    params(("id" = i32, Path, description = "Storage area ID")),
    responses(
        (status = 200, description = "Storage area found", body = StorageAreaDto),
        (status = 404, description = "Storage area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_storage_area(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let area = StorageAreaRepository::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(StorageAreaDto::from(area))))
}

/// Page through all storage areas
#[utoipa::path(
    get,
    path = "/api/storage-area/get-storage-areas",
    tag = STORAGE_AREA_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Page of storage areas", body = Vec<StorageAreaDto>),
        (status = 400, description = "Invalid pagination", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_storage_areas(
    State(state): State<AppState>,
    Query(page): Query<PageParams>,
) -> Result<impl IntoResponse, Error> {
    page.validate()?;

    let areas = StorageAreaRepository::new(&state.db)
        .list(page.page_number, page.page_size)
        .await?;

    let dtos: Vec<StorageAreaDto> = areas.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a new storage area
#[utoipa::path(
    post,
    path = "/api/storage-area/create-storage-area",
    tag = STORAGE_AREA_TAG,
    request_body = StorageAreaPayload,
    responses(
        (status = 201, description = "Storage area created", body = StorageAreaDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 409, description = "Storage area name already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_storage_area(
    State(state): State<AppState>,
    Json(payload): Json<StorageAreaPayload>,
) -> Result<impl IntoResponse, Error> {
    validate_storage_area_fields(&payload.storage_area_name, &payload.storage_area_notes)?;

    let created = StorageAreaRepository::new(&state.db).create(&payload).await?;

    Ok((StatusCode::CREATED, Json(StorageAreaDto::from(created))))
}

/// Overwrite an existing storage area
#[utoipa::path(
    put,
    path = "/api/storage-area/update-storage-area/{id}",
    tag = STORAGE_AREA_TAG,
    params(("id" = i32, Path, description = "Storage area ID")),
    request_body = StorageAreaPayload,
    responses(
        (status = 200, description = "Storage area updated", body = StorageAreaDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 404, description = "Storage area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_storage_area(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StorageAreaPayload>,
) -> Result<impl IntoResponse, Error> {
    validate_storage_area_fields(&payload.storage_area_name, &payload.storage_area_notes)?;

    let updated = StorageAreaRepository::new(&state.db).update(id, &payload).await?;

    Ok((StatusCode::OK, Json(StorageAreaDto::from(updated))))
}

/// Delete a storage area, releasing items from every category first
#[utoipa::path(
    delete,
    path = "/api/storage-area/delete-storage-area/{id}",
    tag = STORAGE_AREA_TAG,
    params(("id" = i32, Path, description = "Storage area ID")),
    responses(
        (status = 204, description = "Storage area deleted"),
        (status = 404, description = "Storage area not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_storage_area(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let repository = StorageAreaRepository::new(&state.db);

    if !repository.exists(id).await? {
        return Err(CatalogError::StorageAreaNotFound(id).into());
    }

    // Membership is cleared across every category here, not by a schema
    // cascade; deleting the location never deletes the items.
    LiteratureRepository::new(&state.db).clear_storage_area(id).await?;
    InsigniaRepository::new(&state.db).clear_storage_area(id).await?;
    ArtifactRepository::new(&state.db).clear_storage_area(id).await?;
    EquipmentRepository::new(&state.db).clear_storage_area(id).await?;
    MechanicalEquipmentRepository::new(&state.db)
        .clear_storage_area(id)
        .await?;

    repository.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
