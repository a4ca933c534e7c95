use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, UploadDto},
        catalog::ItemKind,
    },
    server::{
        error::{catalog::CatalogError, Error},
        model::app::AppState,
        service::photo::PhotoUpdater,
    },
};

pub static UTILITIES_TAG: &str = "utilities";

static ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Upload an item photo and persist its storage path on the item.
///
/// Multipart fields: `file` (the image), `entityType` (category wire tag),
/// `entityId`. The file lands under
/// `<photo root>/<entityType>images/<entityId>/<entityId>_<filename>` and
/// the resulting path is written to the item's photo URL.
#[utoipa::path(
    post,
    path = "/api/utilities/upload",
    tag = UTILITIES_TAG,
    request_body(content = Vec<u8>, content_type = "multipart/form-data",
        description = "Fields: file, entityType, entityId"),
    responses(
        (status = 200, description = "File stored and photo URL updated", body = UploadDto),
        (status = 400, description = "Missing or invalid upload fields", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_file(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, Error> {
    let mut file_name: Option<String> = None;
    let mut file_bytes: Option<axum::body::Bytes> = None;
    let mut entity_type: Option<String> = None;
    let mut entity_id: Option<i32> = None;

    while let Some(field) = multipart.next_field().await? {
        let field_name = field.name().map(|name| name.to_string());
        match field_name.as_deref() {
            Some("file") => {
                file_name = field.file_name().map(|name| name.to_string());
                file_bytes = Some(field.bytes().await?);
            }
            Some("entityType") => entity_type = Some(field.text().await?),
            Some("entityId") => {
                let text = field.text().await?;
                let id = text.trim().parse().map_err(|_| {
                    CatalogError::Validation(format!("entityId must be an integer, got '{text}'."))
                })?;
                entity_id = Some(id);
            }
            _ => {}
        }
    }

    let entity_type = entity_type
        .ok_or_else(|| CatalogError::Validation("entityType is required.".to_string()))?;
    let entity_id =
        entity_id.ok_or_else(|| CatalogError::Validation("entityId is required.".to_string()))?;
    let (file_name, file_bytes) = match (file_name, file_bytes) {
        (Some(name), Some(bytes)) if !bytes.is_empty() => (name, bytes),
        _ => {
            return Err(
                CatalogError::Validation("A photo file must be attached.".to_string()).into(),
            );
        }
    };

    let kind: ItemKind = entity_type
        .parse()
        .map_err(|err: crate::model::catalog::UnknownItemKind| {
            CatalogError::Validation(err.to_string())
        })?;

    let extension = std::path::Path::new(&file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());
    if !extension
        .as_deref()
        .is_some_and(|ext| ALLOWED_EXTENSIONS.contains(&ext))
    {
        return Err(CatalogError::Validation(
            "Only JPG and PNG files are allowed.".to_string(),
        )
        .into());
    }

    // Strip any path components a client may have smuggled into the name.
    let base_name = std::path::Path::new(&file_name)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("photo");

    let folder = state
        .photo_dir
        .join(format!("{}images", kind.as_str()))
        .join(entity_id.to_string());
    tokio::fs::create_dir_all(&folder).await?;

    let full_path = folder.join(format!("{entity_id}_{base_name}"));
    tokio::fs::write(&full_path, &file_bytes).await?;

    let stored_path = full_path.to_string_lossy().to_string();

    PhotoUpdater::new(&state.db)
        .update_photo_url(kind, entity_id, &stored_path)
        .await?;

    Ok((
        StatusCode::OK,
        Json(UploadDto {
            message: "File uploaded successfully".to_string(),
            path: stored_path,
        }),
    ))
}
