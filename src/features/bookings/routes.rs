use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::bookings::handlers;
use crate::features::bookings::services::BookingService;

/// Booking routes. The funnel submit and reads are public; the status
/// update and delete are gated by the admin token middleware at the API
/// boundary.
pub fn routes(service: Arc<BookingService>) -> Router {
    Router::new()
        .route(
            "/api/bookings",
            get(handlers::list_bookings).post(handlers::create_booking),
        )
        .route(
            "/api/bookings/{id}",
            get(handlers::get_booking)
                .put(handlers::update_booking_status)
                .delete(handlers::delete_booking),
        )
        .with_state(service)
}
