use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::recommendations::dtos::{RecommendationDto, RecommendationRequestDto};
use crate::features::recommendations::RecommendationService;
use crate::shared::types::ApiResponse;

/// Generate a style recommendation
///
/// Public endpoint backing the "what should I book?" widget on the
/// marketing pages.
#[utoipa::path(
    post,
    path = "/api/recommendations",
    request_body = RecommendationRequestDto,
    responses(
        (status = 200, description = "Recommendation generated", body = ApiResponse<RecommendationDto>),
        (status = 400, description = "Validation error"),
        (status = 502, description = "Model unavailable or unparseable reply")
    ),
    tag = "recommendations"
)]
pub async fn create_recommendation(
    State(service): State<Arc<RecommendationService>>,
    AppJson(dto): AppJson<RecommendationRequestDto>,
) -> Result<Json<ApiResponse<RecommendationDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let recommendation = service.suggest(dto).await?;
    Ok(Json(ApiResponse::success(Some(recommendation), None, None)))
}
