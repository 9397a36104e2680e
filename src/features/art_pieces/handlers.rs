use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::art_pieces::dtos::{
    ArtPieceResponseDto, BulkInsertArtPiecesDto, UpsertArtPieceDto,
};
use crate::features::art_pieces::ArtPieceService;
use crate::shared::types::{ApiResponse, Meta, ReorderDto};

/// List art pieces
#[utoipa::path(
    get,
    path = "/api/art-pieces",
    responses(
        (status = 200, description = "List of art pieces", body = ApiResponse<Vec<ArtPieceResponseDto>>),
    ),
    tag = "art-pieces"
)]
pub async fn list_art_pieces(
    State(service): State<Arc<ArtPieceService>>,
) -> Result<Json<ApiResponse<Vec<ArtPieceResponseDto>>>> {
    let pieces = service.list().await?;
    let total = pieces.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(pieces),
        None,
        Some(Meta { total }),
    )))
}

/// Get an art piece by id
#[utoipa::path(
    get,
    path = "/api/art-pieces/{id}",
    params(("id" = Uuid, Path, description = "Art piece id")),
    responses(
        (status = 200, description = "Art piece found", body = ApiResponse<ArtPieceResponseDto>),
        (status = 404, description = "Art piece not found")
    ),
    tag = "art-pieces"
)]
pub async fn get_art_piece(
    State(service): State<Arc<ArtPieceService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ArtPieceResponseDto>>> {
    let piece = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(piece), None, None)))
}

/// Create an art piece
#[utoipa::path(
    post,
    path = "/api/art-pieces",
    request_body = UpsertArtPieceDto,
    responses(
        (status = 201, description = "Art piece created", body = ApiResponse<ArtPieceResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "art-pieces"
)]
pub async fn create_art_piece(
    State(service): State<Arc<ArtPieceService>>,
    AppJson(dto): AppJson<UpsertArtPieceDto>,
) -> Result<(StatusCode, Json<ApiResponse<ArtPieceResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let piece = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(piece), None, None)),
    ))
}

/// Update an art piece
#[utoipa::path(
    put,
    path = "/api/art-pieces/{id}",
    params(("id" = Uuid, Path, description = "Art piece id")),
    request_body = UpsertArtPieceDto,
    responses(
        (status = 200, description = "Art piece updated", body = ApiResponse<ArtPieceResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Art piece not found")
    ),
    security(("bearer_auth" = [])),
    tag = "art-pieces"
)]
pub async fn update_art_piece(
    State(service): State<Arc<ArtPieceService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertArtPieceDto>,
) -> Result<Json<ApiResponse<ArtPieceResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let piece = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(piece), None, None)))
}

/// Delete an art piece
#[utoipa::path(
    delete,
    path = "/api/art-pieces/{id}",
    params(("id" = Uuid, Path, description = "Art piece id")),
    responses(
        (status = 200, description = "Art piece deleted"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Art piece not found")
    ),
    security(("bearer_auth" = [])),
    tag = "art-pieces"
)]
pub async fn delete_art_piece(
    State(service): State<Arc<ArtPieceService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Art piece deleted".to_string()),
        None,
    )))
}

/// Bulk-insert art pieces
#[utoipa::path(
    post,
    path = "/api/art-pieces/bulk",
    request_body = BulkInsertArtPiecesDto,
    responses(
        (status = 201, description = "Art pieces inserted", body = ApiResponse<Vec<ArtPieceResponseDto>>),
        (status = 400, description = "Empty or invalid batch"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "art-pieces"
)]
pub async fn bulk_insert_art_pieces(
    State(service): State<Arc<ArtPieceService>>,
    AppJson(dto): AppJson<BulkInsertArtPiecesDto>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<ArtPieceResponseDto>>>)> {
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

/// Reorder art pieces
#[utoipa::path(
    post,
    path = "/api/art-pieces/reorder",
    request_body = ReorderDto,
    responses(
        (status = 200, description = "Art pieces reordered"),
        (status = 400, description = "Empty id list"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "art-pieces"
)]
pub async fn reorder_art_pieces(
    State(service): State<Arc<ArtPieceService>>,
    AppJson(dto): AppJson<ReorderDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.reorder(&dto.ids).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Art pieces reordered".to_string()),
        None,
    )))
}
