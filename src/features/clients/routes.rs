use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::clients::{handlers, ClientService};

/// Client routes. Reads are public; writes are gated by the admin token
/// middleware at the API boundary.
pub fn routes(service: Arc<ClientService>) -> Router {
    Router::new()
        .route(
            "/api/clients",
            get(handlers::list_clients).post(handlers::create_client),
        )
        .route(
            "/api/clients/{id}",
            get(handlers::get_client)
                .put(handlers::update_client)
                .delete(handlers::delete_client),
        )
        .with_state(service)
}
