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
use crate::features::testimonials::dtos::{
    BulkInsertTestimonialsDto, TestimonialResponseDto, UpsertTestimonialDto,
};
use crate::features::testimonials::TestimonialService;
use crate::shared::types::{ApiResponse, Meta, ReorderDto};

/// List testimonials
#[utoipa::path(
    get,
    path = "/api/testimonials",
    responses(
        (status = 200, description = "List of testimonials", body = ApiResponse<Vec<TestimonialResponseDto>>),
    ),
    tag = "testimonials"
)]
pub async fn list_testimonials(
    State(service): State<Arc<TestimonialService>>,
) -> Result<Json<ApiResponse<Vec<TestimonialResponseDto>>>> {
    let testimonials = service.list().await?;
    let total = testimonials.len() as i64;
    Ok(Json(ApiResponse::success(
        Some(testimonials),
        None,
        Some(Meta { total }),
    )))
}

/// Get a testimonial by id
#[utoipa::path(
    get,
    path = "/api/testimonials/{id}",
    params(("id" = Uuid, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Testimonial found", body = ApiResponse<TestimonialResponseDto>),
        (status = 404, description = "Testimonial not found")
    ),
    tag = "testimonials"
)]
pub async fn get_testimonial(
    State(service): State<Arc<TestimonialService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TestimonialResponseDto>>> {
    let testimonial = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(testimonial), None, None)))
}

/// Create a testimonial
#[utoipa::path(
    post,
    path = "/api/testimonials",
    request_body = UpsertTestimonialDto,
    responses(
        (status = 201, description = "Testimonial created", body = ApiResponse<TestimonialResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "testimonials"
)]
pub async fn create_testimonial(
    State(service): State<Arc<TestimonialService>>,
    AppJson(dto): AppJson<UpsertTestimonialDto>,
) -> Result<(StatusCode, Json<ApiResponse<TestimonialResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let testimonial = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(testimonial), None, None)),
    ))
}

/// Update a testimonial
#[utoipa::path(
    put,
    path = "/api/testimonials/{id}",
    params(("id" = Uuid, Path, description = "Testimonial id")),
    request_body = UpsertTestimonialDto,
    responses(
        (status = 200, description = "Testimonial updated", body = ApiResponse<TestimonialResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Testimonial not found")
    ),
    security(("bearer_auth" = [])),
    tag = "testimonials"
)]
pub async fn update_testimonial(
    State(service): State<Arc<TestimonialService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertTestimonialDto>,
) -> Result<Json<ApiResponse<TestimonialResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let testimonial = service.update(id, dto).await?;
    Ok(Json(ApiResponse::success(Some(testimonial), None, None)))
}

/// Delete a testimonial
#[utoipa::path(
    delete,
    path = "/api/testimonials/{id}",
    params(("id" = Uuid, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Testimonial deleted"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Testimonial not found")
    ),
    security(("bearer_auth" = [])),
    tag = "testimonials"
)]
pub async fn delete_testimonial(
    State(service): State<Arc<TestimonialService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Testimonial deleted".to_string()),
        None,
    )))
}

/// Bulk-insert testimonials
#[utoipa::path(
    post,
    path = "/api/testimonials/bulk",
    request_body = BulkInsertTestimonialsDto,
    responses(
        (status = 201, description = "Testimonials inserted", body = ApiResponse<Vec<TestimonialResponseDto>>),
        (status = 400, description = "Empty or invalid batch"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "testimonials"
)]
pub async fn bulk_insert_testimonials(
    State(service): State<Arc<TestimonialService>>,
    AppJson(dto): AppJson<BulkInsertTestimonialsDto>,
) -> Result<(StatusCode, Json<ApiResponse<Vec<TestimonialResponseDto>>>)> {
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

/// Reorder testimonials
#[utoipa::path(
    post,
    path = "/api/testimonials/reorder",
    request_body = ReorderDto,
    responses(
        (status = 200, description = "Testimonials reordered"),
        (status = 400, description = "Empty id list"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = [])),
    tag = "testimonials"
)]
pub async fn reorder_testimonials(
    State(service): State<Arc<TestimonialService>>,
    AppJson(dto): AppJson<ReorderDto>,
) -> Result<Json<ApiResponse<()>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.reorder(&dto.ids).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Testimonials reordered".to_string()),
        None,
    )))
}
