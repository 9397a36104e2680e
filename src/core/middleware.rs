use crate::core::error::AppError;
use crate::features::auth::ApiTokenValidator;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::Response,
};
use base64::prelude::*;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::Span;
use uuid::Uuid;

/// Request ID generator using UUID v7 (time-ordered)
#[derive(Clone, Copy)]
pub struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string();
        Some(RequestId::new(HeaderValue::from_str(&id).unwrap()))
    }
}

/// Custom MakeSpan that includes request_id in the tracing span
#[derive(Clone, Debug)]
pub struct MakeSpanWithRequestId;

impl<B> tower_http::trace::MakeSpan<B> for MakeSpanWithRequestId {
    fn make_span(&mut self, request: &axum::http::Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("-");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = %request_id,
        )
    }
}

pub fn cors_layer(allowed_origins: Vec<String>) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    // If origins list contains "*", allow any origin
    if allowed_origins.iter().any(|o| o == "*") {
        cors.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    }
}

pub fn basic_auth_middleware(
    valid_credentials: Arc<String>,
) -> impl Fn(
    Request,
    Next,
)
    -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<Response, Response>> + Send>>
       + Clone {
    move |req: Request, next: Next| {
        let credentials = valid_credentials.clone();
        Box::pin(async move {
            let auth_header = req
                .headers()
                .get(header::AUTHORIZATION)
                .and_then(|header| header.to_str().ok());

            if let Some(auth_header) = auth_header {
                if let Some(encoded) = auth_header.strip_prefix("Basic ") {
                    if let Ok(decoded) = BASE64_STANDARD.decode(encoded) {
                        if let Ok(creds) = String::from_utf8(decoded) {
                            if creds == *credentials {
                                return Ok(next.run(req).await);
                            }
                        }
                    }
                }
            }

            let response = Response::builder()
                .status(StatusCode::UNAUTHORIZED)
                .header(header::WWW_AUTHENTICATE, "Basic realm=\"Swagger UI\"")
                .body(Body::from("Unauthorized"))
                .unwrap();

            Err(response)
        })
    }
}

/// Write endpoints that stay public: the booking funnel submit and the
/// recommendation widget.
const PUBLIC_WRITE_ROUTES: &[&str] = &["/api/bookings", "/api/recommendations"];

/// Bearer-token gate for the entity API.
///
/// Reads are public; every other method must present the configured
/// admin API token, except for the funnel/widget submits listed above.
pub async fn admin_write_guard(
    State(validator): State<Arc<ApiTokenValidator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    if matches!(*req.method(), Method::GET | Method::HEAD | Method::OPTIONS) {
        return Ok(next.run(req).await);
    }

    if PUBLIC_WRITE_ROUTES.contains(&req.uri().path()) {
        return Ok(next.run(req).await);
    }

    // Extract Authorization header
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    // Validate Bearer format
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        AppError::Unauthorized("Invalid authorization header format".to_string())
    })?;

    // Validate token
    let admin = validator.validate_token(token)?;

    // Insert admin context into request extensions
    req.extensions_mut().insert(admin);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        middleware::from_fn_with_state,
        routing::{get, post},
        Router,
    };
    use axum_test::TestServer;

    async fn probe() -> &'static str {
        "ok"
    }

    fn guarded_router(token: &str) -> Router {
        let validator = Arc::new(ApiTokenValidator::new(token.to_string()));
        Router::new()
            .route("/api/faqs", get(probe).post(probe))
            .route("/api/bookings", post(probe))
            .layer(from_fn_with_state(validator, admin_write_guard))
    }

    #[tokio::test]
    async fn reads_pass_without_a_token() {
        let server = TestServer::new(guarded_router("studio-secret")).unwrap();

        server.get("/api/faqs").await.assert_status_ok();
    }

    #[tokio::test]
    async fn writes_without_a_token_are_rejected_with_envelope() {
        let server = TestServer::new(guarded_router("studio-secret")).unwrap();

        let response = server.post("/api/faqs").await;
        response.assert_status(StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], false);
        assert!(body["message"].as_str().unwrap().contains("authorization"));
    }

    #[tokio::test]
    async fn wrong_scheme_is_rejected() {
        let server = TestServer::new(guarded_router("studio-secret")).unwrap();

        let response = server
            .post("/api/faqs")
            .add_header("authorization", "Basic c3R1ZGlv")
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn wrong_token_is_rejected() {
        let server = TestServer::new(guarded_router("studio-secret")).unwrap();

        let response = server
            .post("/api/faqs")
            .add_header("authorization", "Bearer nope")
            .await;
        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_token_passes_through() {
        let server = TestServer::new(guarded_router("studio-secret")).unwrap();

        let response = server
            .post("/api/faqs")
            .add_header("authorization", "Bearer studio-secret")
            .await;
        response.assert_status_ok();
    }

    #[tokio::test]
    async fn funnel_submit_stays_public() {
        let server = TestServer::new(guarded_router("studio-secret")).unwrap();

        server.post("/api/bookings").await.assert_status_ok();
    }
}
