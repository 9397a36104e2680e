use std::sync::Arc;

use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::model::AdminContext;
use crate::features::gallery::dtos::{
    BulkInsertGalleryDto, GalleryAssetResponseDto, GalleryForm, ListGalleryQuery,
};
use crate::features::gallery::models::AssetStatus;
use crate::features::gallery::services::GalleryService;
use crate::modules::storage::{UploadedImage, ALLOWED_IMAGE_TYPES, MAX_IMAGE_SIZE};
use crate::shared::types::{ApiResponse, Meta, ReorderDto};

/// List gallery assets
#[utoipa::path(
    get,
    path = "/api/gallery",
    params(ListGalleryQuery),
    responses(
        (status = 200, description = "List of gallery assets", body = ApiResponse<Vec<GalleryAssetResponseDto>>),
    ),
    tag = "gallery"
)]
pub async fn list_gallery_assets(
    State(service): State<Arc<GalleryService>>,
    Query(query): Query<ListGalleryQuery>,
) -> Result<Json<ApiResponse<Vec<GalleryAssetResponseDto>>>> {
    let assets = service.list(&query).await?;
    let total = assets.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(assets),
        None,
        Some(Meta { total }),
    )))
}

/// Get a gallery asset by id
#[utoipa::path(
    get,
    path = "/api/gallery/{id}",
    params(("id" = Uuid, Path, description = "Asset id")),
    responses(
        (status = 200, description = "Asset found", body = ApiResponse<GalleryAssetResponseDto>),
        (status = 404, description = "Asset not found")
    ),
    tag = "gallery"
)]
pub async fn get_gallery_asset(
    State(service): State<Arc<GalleryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<GalleryAssetResponseDto>>> {
    let asset = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(asset), None, None)))
}

/// Create a gallery asset
///
/// Accepts multipart/form-data with `title`, `gallery`, `status`,
/// optional `hint` and a required `image` file.
#[utoipa::path(
    post,
    path = "/api/gallery",
    responses(
        (status = 201, description = "Asset created", body = ApiResponse<GalleryAssetResponseDto>),
        (status = 400, description = "Invalid form data"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "gallery"
)]
pub async fn create_gallery_asset(
    admin: AdminContext,
    State(service): State<Arc<GalleryService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<GalleryAssetResponseDto>>)> {
    let (form, image) = parse_gallery_multipart(multipart).await?;
    let image = image.ok_or_else(|| AppError::BadRequest("Image file is required".to_string()))?;

    debug!("Gallery upload requested by admin {}", admin.token_fingerprint);

    let asset = service.create(form, image).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(asset), None, None)),
    ))
}

/// Update a gallery asset
#[utoipa::path(
    put,
    path = "/api/gallery/{id}",
    params(("id" = Uuid, Path, description = "Asset id")),
    responses(
        (status = 200, description = "Asset updated", body = ApiResponse<GalleryAssetResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Asset not found")
    ),
    security(("bearer_auth" = [])),
    tag = "gallery"
)]
pub async fn update_gallery_asset(
    State(service): State<Arc<GalleryService>>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<GalleryAssetResponseDto>>> {
    let (form, image) = parse_gallery_multipart(multipart).await?;

    let asset = service.update(id, form, image).await?;
    Ok(Json(ApiResponse::success(Some(asset), None, None)))
}

/// Delete a gallery asset
#[utoipa::path(
    delete,
    path = "/api/gallery/{id}",
    params(("id" = Uuid, Path, description = "Asset id")),
    responses(
        (status = 200, description = "Asset deleted"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Asset not found")
    ),
    security(("bearer_auth" = [])),
    tag = "gallery"
)]
pub async fn delete_gallery_asset(
    State(service): State<Arc<GalleryService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Gallery asset deleted".to_string()),
        None,
    )))
}

/// Bulk-insert gallery assets
///
/// Rejects an empty array before anything reaches the store.
#[utoipa::path(
    post,
    path = "/api/gallery/bulk",
    request_body = BulkInsertGalleryDto,
    responses(
        (status = 201, description = "Assets inserted", body = ApiResponse<Vec<GalleryAssetResponseDto>>),
        (status = 400, description = "Empty or invalid batch"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "gallery"
)]
pub async fn bulk_insert_gallery_assets(
    State(service): State<Arc<GalleryService>>,
    AppJson(dto): AppJson<BulkInsertGalleryDto>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<GalleryAssetResponseDto>>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let inserted = service.bulk_insert(dto.items).await?;
    let total = inserted.len() as i64;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(inserted),
            None,
            Some(Meta { total }),
        )),
    ))
}

/// Reorder gallery assets
///
/// Rewrites each referenced asset's order field to its array position.
#[utoipa::path(
    post,
    path = "/api/gallery/reorder",
    request_body = ReorderDto,
    responses(
        (status = 200, description = "Assets reordered"),
        (status = 400, description = "Empty id list"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "gallery"
)]
pub async fn reorder_gallery_assets(
    State(service): State<Arc<GalleryService>>,
    AppJson(dto): AppJson<ReorderDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.reorder(&dto.ids).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Gallery reordered".to_string()),
        None,
    )))
}

/// Pull the asset form and optional image out of a multipart body.
async fn parse_gallery_multipart(
    mut multipart: Multipart,
) -> Result<(GalleryForm, Option<UploadedImage>)> {
    let mut form = GalleryForm::default();
    let mut image: Option<UploadedImage> = None;

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "title" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read title field: {}", e))
                })?;
                form.title = Some(text);
            }
            "gallery" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read gallery field: {}", e))
                })?;
                form.gallery = Some(text);
            }
            "status" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read status field: {}", e))
                })?;
                form.status = AssetStatus::from_str(&text);
            }
            "hint" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read hint field: {}", e))
                })?;
                if !text.is_empty() {
                    form.hint = Some(text);
                }
            }
            "image" => {
                let content_type = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
                    return Err(AppError::BadRequest(format!(
                        "Unsupported image type '{}'",
                        content_type
                    )));
                }

                let filename = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read image data: {}", e))
                })?;

                if data.len() > MAX_IMAGE_SIZE {
                    return Err(AppError::BadRequest(format!(
                        "Image exceeds the {}MB limit",
                        MAX_IMAGE_SIZE / (1024 * 1024)
                    )));
                }

                image = Some(UploadedImage {
                    filename,
                    content_type,
                    data: data.to_vec(),
                });
            }
            _ => {
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    Ok((form, image))
}
