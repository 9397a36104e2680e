use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::bookings::dtos::{
    BookingResponseDto, CreateBookingDto, ListBookingsQuery, UpdateBookingStatusDto,
};
use crate::features::bookings::services::BookingService;
use crate::shared::types::{ApiResponse, Meta, PaginationQuery};

/// Submit a booking from the funnel
///
/// Public endpoint; the funnel's final step posts here. Validation
/// mirrors the wizard steps and failures carry field detail.
#[utoipa::path(
    post,
    path = "/api/bookings",
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking submitted", body = ApiResponse<BookingResponseDto>),
        (status = 400, description = "Validation error")
    ),
    tag = "bookings"
)]
pub async fn create_booking(
    State(service): State<Arc<BookingService>>,
    AppJson(dto): AppJson<CreateBookingDto>,
) -> Result<(StatusCode, Json<ApiResponse<BookingResponseDto>>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (booking, confirmation) = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(booking), Some(confirmation), None)),
    ))
}

/// List bookings
#[utoipa::path(
    get,
    path = "/api/bookings",
    params(ListBookingsQuery, PaginationQuery),
    responses(
        (status = 200, description = "List of bookings", body = ApiResponse<Vec<BookingResponseDto>>),
    ),
    tag = "bookings"
)]
pub async fn list_bookings(
    State(service): State<Arc<BookingService>>,
    Query(query): Query<ListBookingsQuery>,
    Query(pagination): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<Vec<BookingResponseDto>>>> {
    let (bookings, total) = service.list(&query, &pagination).await?;
    Ok(Json(ApiResponse::success(
        Some(bookings),
        None,
        Some(Meta { total }),
    )))
}

/// Get a booking by id
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking found", body = ApiResponse<BookingResponseDto>),
        (status = 404, description = "Booking not found")
    ),
    tag = "bookings"
)]
pub async fn get_booking(
    State(service): State<Arc<BookingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<BookingResponseDto>>> {
    let booking = service.get(id).await?;
    Ok(Json(ApiResponse::success(Some(booking), None, None)))
}

/// Update a booking's status
#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    params(("id" = Uuid, Path, description = "Booking id")),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Booking updated", body = ApiResponse<BookingResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Booking not found")
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn update_booking_status(
    State(service): State<Arc<BookingService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateBookingStatusDto>,
) -> Result<Json<ApiResponse<BookingResponseDto>>> {
    let booking = service.update_status(id, dto.status).await?;
    Ok(Json(ApiResponse::success(Some(booking), None, None)))
}

/// Delete a booking
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking deleted"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Booking not found")
    ),
    security(("bearer_auth" = [])),
    tag = "bookings"
)]
pub async fn delete_booking(
    State(service): State<Arc<BookingService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(id).await?;
    Ok(Json(ApiResponse::success(
        None,
        Some("Booking deleted".to_string()),
        None,
    )))
}
