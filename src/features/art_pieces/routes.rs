use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::art_pieces::{handlers, ArtPieceService};

/// Art piece routes. Reads are public; writes are gated by the admin
/// token middleware at the API boundary.
pub fn routes(service: Arc<ArtPieceService>) -> Router {
    Router::new()
        .route(
            "/api/art-pieces",
            get(handlers::list_art_pieces).post(handlers::create_art_piece),
        )
        .route("/api/art-pieces/bulk", post(handlers::bulk_insert_art_pieces))
        .route(
            "/api/art-pieces/reorder",
            post(handlers::reorder_art_pieces),
        )
        .route(
            "/api/art-pieces/{id}",
            get(handlers::get_art_piece)
                .put(handlers::update_art_piece)
                .delete(handlers::delete_art_piece),
        )
        .with_state(service)
}
