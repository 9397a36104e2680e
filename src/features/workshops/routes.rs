use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::workshops::{handlers, WorkshopService};

/// Workshop routes. Reads are public; writes are gated by the admin
/// token middleware at the API boundary.
pub fn routes(service: Arc<WorkshopService>) -> Router {
    Router::new()
        .route(
            "/api/workshops",
            get(handlers::list_workshops).post(handlers::create_workshop),
        )
        .route(
            "/api/workshops/{id}",
            get(handlers::get_workshop)
                .put(handlers::update_workshop)
                .delete(handlers::delete_workshop),
        )
        .with_state(service)
}
