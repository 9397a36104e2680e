use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::bookings::models::{Booking, BookingStatus};
use crate::features::bookings::wizard::BookingDraft;

/// Request DTO for the booking funnel submit
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    /// Service to book ("mehndi", "rangoli", "nail-art", "jewelry")
    #[validate(length(min = 1, message = "Service is required"))]
    pub service_type: String,

    /// Requested date, today or later
    pub booking_date: NaiveDate,

    /// One of the offered slot labels (e.g. "10:00 AM")
    #[validate(length(min = 1, message = "Time slot is required"))]
    pub booking_time: String,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(max = 32, message = "Phone must not exceed 32 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 2000, message = "Notes must not exceed 2000 characters"))]
    pub notes: Option<String>,
}

impl From<CreateBookingDto> for BookingDraft {
    fn from(dto: CreateBookingDto) -> Self {
        BookingDraft {
            service_type: Some(dto.service_type),
            booking_date: Some(dto.booking_date),
            booking_time: Some(dto.booking_time),
            name: dto.name,
            email: dto.email,
            phone: dto.phone.filter(|p| !p.trim().is_empty()),
            notes: dto.notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

/// Request DTO for the admin status update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatus,
}

/// Query params for listing bookings
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ListBookingsQuery {
    /// Filter by status ("pending", "confirmed", "cancelled")
    pub status: Option<String>,
}

/// Response DTO for a booking
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponseDto {
    pub id: Uuid,
    pub service_type: String,
    pub booking_date: NaiveDate,
    pub booking_time: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponseDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            service_type: b.service_type,
            booking_date: b.booking_date,
            booking_time: b.booking_time,
            name: b.name,
            email: b.email,
            phone: b.phone,
            notes: b.notes,
            status: BookingStatus::from_str(&b.status),
            created_at: b.created_at,
        }
    }
}
