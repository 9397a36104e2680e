#[cfg(test)]
use crate::features::auth::model::AdminContext;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
#[allow(dead_code)]
pub fn create_admin_context() -> AdminContext {
    AdminContext {
        token_fingerprint: "test-token".to_string(),
    }
}

#[cfg(test)]
#[allow(dead_code)]
async fn inject_admin_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(create_admin_context());
    next.run(request).await
}

/// Wrap a router so every request carries an admin context, bypassing
/// the bearer-token middleware in handler tests.
#[cfg(test)]
#[allow(dead_code)]
pub fn with_admin_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_middleware))
}
