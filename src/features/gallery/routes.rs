use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::gallery::handlers;
use crate::features::gallery::services::GalleryService;

/// Gallery asset routes. Reads are public; writes are gated by the admin
/// token middleware at the API boundary.
pub fn routes(service: Arc<GalleryService>) -> Router {
    Router::new()
        .route(
            "/api/gallery",
            get(handlers::list_gallery_assets).post(handlers::create_gallery_asset),
        )
        .route("/api/gallery/bulk", post(handlers::bulk_insert_gallery_assets))
        .route(
            "/api/gallery/reorder",
            post(handlers::reorder_gallery_assets),
        )
        .route(
            "/api/gallery/{id}",
            get(handlers::get_gallery_asset)
                .put(handlers::update_gallery_asset)
                .delete(handlers::delete_gallery_asset),
        )
        .with_state(service)
}
