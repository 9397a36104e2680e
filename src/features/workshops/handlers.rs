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
use crate::features::workshops::dtos::{UpsertWorkshopDto, WorkshopResponseDto};
use crate::features::workshops::WorkshopService;
use crate::shared::types::{ApiResponse, Meta};

/// List workshops
#[utoipa::path(
    get,
    path = "/api/workshops",
    responses(
        (status = 200, description = "List of workshops", body = ApiResponse<Vec<WorkshopResponseDto>>),
    ),
    tag = "workshops"
)]
pub async fn list_workshops(
    State(service): State<Arc<WorkshopService>>,
) -> Result<Json<ApiResponse<Vec<WorkshopResponseDto>>>> {
    let workshops = service.list().await?;
    let total = workshops.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(workshops),
        None,
        Some(Meta { total }),
    )))
}

/// Get a workshop by id
#[utoipa::path(
    get,
    path = "/api/workshops/{id}",
    params(("id" = Uuid, Path, description = "Workshop id")),
    responses(
        (status = 200, description = "Workshop found", body = ApiResponse<WorkshopResponseDto>),
        (status = 404, description = "Workshop not found")
    ),
    tag = "workshops"
)]
pub async fn get_workshop(
    State(service): State<Arc<WorkshopService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<WorkshopResponseDto>>> {
    let workshop = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(workshop), None, None)))
}

/// Create a workshop
#[utoipa::path(
    post,
    path = "/api/workshops",
    request_body = UpsertWorkshopDto,
    responses(
        (status = 201, description = "Workshop created", body = ApiResponse<WorkshopResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "workshops"
)]
pub async fn create_workshop(
    State(service): State<Arc<WorkshopService>>,
    AppJson(dto): AppJson<UpsertWorkshopDto>,
) -> Result<(StatusCode, Json<ApiResponse<WorkshopResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let workshop = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(workshop), None, None)),
    ))
}

/// Update a workshop
#[utoipa::path(
    put,
    path = "/api/workshops/{id}",
    params(("id" = Uuid, Path, description = "Workshop id")),
    request_body = UpsertWorkshopDto,
    responses(
        (status = 200, description = "Workshop updated", body = ApiResponse<WorkshopResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Workshop not found")
    ),
    security(("bearer_auth" = [])),
    tag = "workshops"
)]
pub async fn update_workshop(
    State(service): State<Arc<WorkshopService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertWorkshopDto>,
) -> Result<Json<ApiResponse<WorkshopResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let workshop = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(workshop), None, None)))
}

/// Delete a workshop
#[utoipa::path(
    delete,
    path = "/api/workshops/{id}",
    params(("id" = Uuid, Path, description = "Workshop id")),
    responses(
        (status = 200, description = "Workshop deleted"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Workshop not found")
    ),
    security(("bearer_auth" = [])),
    tag = "workshops"
)]
pub async fn delete_workshop(
    State(service): State<Arc<WorkshopService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Workshop deleted".to_string()),
        None,
    )))
}
