use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::recommendations::{handlers, RecommendationService};

/// Public recommendation route.
pub fn routes(service: Arc<RecommendationService>) -> Router {
    Router::new()
        .route("/api/recommendations", post(handlers::create_recommendation))
        .with_state(service)
}
