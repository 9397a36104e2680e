use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::categories::handlers;
use crate::features::categories::services::CategoryService;

/// Category routes. Reads are public; the multipart writes are gated by
/// the admin token middleware at the API boundary.
pub fn routes(service: Arc<CategoryService>) -> Router {
    Router::new()
        .route(
            "/api/categories",
            get(handlers::list_categories).post(handlers::create_category),
        )
        .route(
            "/api/categories/{href}",
            get(handlers::get_category)
                .put(handlers::update_category)
                .delete(handlers::delete_category),
        )
        .route(
            "/api/categories/{href}/page",
            get(handlers::get_category_page),
        )
        .route(
            "/api/categories/{href}/gallery",
            get(handlers::get_category_gallery),
        )
        .with_state(service)
}
