use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::faqs::{handlers, FaqService};

/// FAQ routes. Reads are public; writes are gated by the admin token
/// middleware at the API boundary.
pub fn routes(service: Arc<FaqService>) -> Router {
    Router::new()
        .route(
            "/api/faqs",
            get(handlers::list_faqs).post(handlers::create_faq),
        )
        .route("/api/faqs/bulk", post(handlers::bulk_insert_faqs))
        .route(
            "/api/faqs/{id}",
            get(handlers::get_faq)
                .put(handlers::update_faq)
                .delete(handlers::delete_faq),
        )
        .with_state(service)
}
