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
use crate::features::faqs::dtos::{BulkInsertFaqsDto, FaqResponseDto, UpsertFaqDto};
use crate::features::faqs::FaqService;
use crate::shared::types::{ApiResponse, Meta};

/// List FAQs
#[utoipa::path(
    get,
    path = "/api/faqs",
    responses(
        (status = 200, description = "List of FAQs", body = ApiResponse<Vec<FaqResponseDto>>),
    ),
    tag = "faqs"
)]
pub async fn list_faqs(
    State(service): State<Arc<FaqService>>,
) -> Result<Json<ApiResponse<Vec<FaqResponseDto>>>> {
    let faqs = service.list().await?;
    let total = faqs.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(faqs),
        None,
        Some(Meta { total }),
    )))
}

/// Get a FAQ by id
#[utoipa::path(
    get,
    path = "/api/faqs/{id}",
    params(("id" = Uuid, Path, description = "FAQ id")),
    responses(
        (status = 200, description = "FAQ found", body = ApiResponse<FaqResponseDto>),
        (status = 404, description = "FAQ not found")
    ),
    tag = "faqs"
)]
pub async fn get_faq(
    State(service): State<Arc<FaqService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FaqResponseDto>>> {
    let faq = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(faq), None, None)))
}

/// Create a FAQ
#[utoipa::path(
    post,
    path = "/api/faqs",
    request_body = UpsertFaqDto,
    responses(
        (status = 201, description = "FAQ created", body = ApiResponse<FaqResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "faqs"
)]
pub async fn create_faq(
    State(service): State<Arc<FaqService>>,
    AppJson(dto): AppJson<UpsertFaqDto>,
) -> Result<(StatusCode, Json<ApiResponse<FaqResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let faq = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(faq), None, None)),
    ))
}

/// Update a FAQ
#[utoipa::path(
    put,
    path = "/api/faqs/{id}",
    params(("id" = Uuid, Path, description = "FAQ id")),
    request_body = UpsertFaqDto,
    responses(
        (status = 200, description = "FAQ updated", body = ApiResponse<FaqResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "FAQ not found")
    ),
    security(("bearer_auth" = [])),
    tag = "faqs"
)]
pub async fn update_faq(
    State(service): State<Arc<FaqService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertFaqDto>,
) -> Result<Json<ApiResponse<FaqResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let faq = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(faq), None, None)))
}

/// Delete a FAQ
#[utoipa::path(
    delete,
    path = "/api/faqs/{id}",
    params(("id" = Uuid, Path, description = "FAQ id")),
    responses(
        (status = 200, description = "FAQ deleted"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "FAQ not found")
    ),
    security(("bearer_auth" = [])),
    tag = "faqs"
)]
pub async fn delete_faq(
    State(service): State<Arc<FaqService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("FAQ deleted".to_string()),
        None,
    )))
}

/// Bulk-insert FAQs
#[utoipa::path(
    post,
    path = "/api/faqs/bulk",
    request_body = BulkInsertFaqsDto,
    responses(
        (status = 201, description = "FAQs inserted", body = ApiResponse<Vec<FaqResponseDto>>),
        (status = 400, description = "Empty or invalid batch"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "faqs"
)]
pub async fn bulk_insert_faqs(
    State(service): State<Arc<FaqService>>,
    AppJson(dto): AppJson<BulkInsertFaqsDto>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<FaqResponseDto>>>)> {
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
