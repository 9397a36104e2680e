use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::bookings::dtos::{
    BookingResponseDto, CreateBookingDto, ListBookingsQuery,
};
use crate::features::bookings::models::{Booking, BookingStatus};
use crate::features::bookings::wizard::BookingWizard;
use crate::shared::types::PaginationQuery;

/// Service for booking-funnel submissions and the admin booking surface
pub struct BookingService {
    pool: PgPool,
}

impl BookingService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a funnel submission.
    ///
    /// The submission is driven through the wizard's two validation steps,
    /// so the endpoint enforces exactly what the funnel UI enforces. Slot
    /// availability is deliberately not consulted; overlapping bookings
    /// for the same slot are accepted.
    ///
    /// Returns the stored booking together with the wizard's confirmation
    /// message (it references the entered email).
    pub async fn create(&self, dto: CreateBookingDto) -> Result<(BookingResponseDto, String)> {
        let mut wizard = BookingWizard::new();
        *wizard.draft_mut() = dto.into();

        let today = Utc::now().date_naive();
        if !wizard.advance(today) {
            return Err(field_errors(&wizard));
        }

        let record = wizard.submit().ok_or_else(|| field_errors(&wizard))?;

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (service_type, booking_date, booking_time, name, email, phone, notes, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&record.service_type)
        .bind(record.booking_date)
        .bind(&record.booking_time)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.phone)
        .bind(&record.notes)
        .bind(BookingStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create booking: {:?}", e);
            AppError::Database(e)
        })?;

        let confirmation = wizard.complete(true).unwrap_or_default();

        tracing::info!(
            "Booking created: id={}, service={}, date={}",
            booking.id,
            booking.service_type,
            booking.booking_date
        );

        Ok((booking.into(), confirmation))
    }

    pub async fn list(
        &self,
        query: &ListBookingsQuery,
        pagination: &PaginationQuery,
    ) -> Result<(Vec<BookingResponseDto>, i64)> {
        let status_filter = query.status.as_deref();

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM bookings
            WHERE ($1::text IS NULL OR status = $1)
            "#,
        )
        .bind(status_filter)
        .fetch_one(&self.pool)
        .await?;

        let bookings = sqlx::query_as::<_, Booking>(
            r#"
            SELECT * FROM bookings
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY booking_date DESC, created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(status_filter)
        .bind(pagination.limit())
        .bind(pagination.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list bookings: {:?}", e);
            AppError::Database(e)
        })?;

        Ok((bookings.into_iter().map(|b| b.into()).collect(), total))
    }

    pub async fn get(&self, id: Uuid) -> Result<BookingResponseDto> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        booking
            .map(|b| b.into())
            .ok_or_else(|| AppError::NotFound(format!("Booking '{}' not found", id)))
    }

    pub async fn update_status(
        &self,
        id: Uuid,
        status: BookingStatus,
    ) -> Result<BookingResponseDto> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await?;

        let booking =
            booking.ok_or_else(|| AppError::NotFound(format!("Booking '{}' not found", id)))?;

        tracing::info!("Booking status updated: id={}, status={}", id, booking.status);

        Ok(booking.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM bookings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Booking '{}' not found", id)));
        }

        tracing::info!("Booking deleted: id={}", id);
        Ok(())
    }
}

fn field_errors(wizard: &BookingWizard) -> AppError {
    let detail = wizard
        .errors()
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");
    AppError::Validation(detail)
}
