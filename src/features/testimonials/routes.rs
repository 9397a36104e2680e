use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::testimonials::{handlers, TestimonialService};

/// Testimonial routes. Reads are public; writes are gated by the admin
/// token middleware at the API boundary.
pub fn routes(service: Arc<TestimonialService>) -> Router {
    Router::new()
        .route(
            "/api/testimonials",
            get(handlers::list_testimonials).post(handlers::create_testimonial),
        )
        .route(
            "/api/testimonials/bulk",
            post(handlers::bulk_insert_testimonials),
        )
        .route(
            "/api/testimonials/reorder",
            post(handlers::reorder_testimonials),
        )
        .route(
            "/api/testimonials/{id}",
            get(handlers::get_testimonial)
                .put(handlers::update_testimonial)
                .delete(handlers::delete_testimonial),
        )
        .with_state(service)
}
