mod core;
mod features;
mod modules;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::art_pieces::{routes as art_pieces_routes, ArtPieceService};
use crate::features::auth::ApiTokenValidator;
use crate::features::bookings::{routes as bookings_routes, BookingService};
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::clients::{routes as clients_routes, ClientService};
use crate::features::faqs::{routes as faqs_routes, FaqService};
use crate::features::gallery::{routes as gallery_routes, GalleryService};
use crate::features::recommendations::{routes as recommendations_routes, RecommendationService};
use crate::features::testimonials::{routes as testimonials_routes, TestimonialService};
use crate::features::workshops::{routes as workshops_routes, WorkshopService};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    let available_cpus = std::thread::available_parallelism()
        .map(|p| p.get())
        .unwrap_or(1);
    tracing::info!(
        "System info: available_cpus={}, tokio_worker_threads={}, pid={}",
        available_cpus,
        worker_threads,
        std::process::id()
    );

    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations automatically
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Initialize the admin token gate
    let token_validator = Arc::new(ApiTokenValidator::new(config.auth.admin_api_token.clone()));
    tracing::info!("Admin API token gate initialized");

    // Initialize image storage (cloud bucket or local directory)
    let image_host = modules::storage::build_image_host(&config.storage)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to initialize image storage: {}", e))?;

    // Initialize services
    let booking_service = Arc::new(BookingService::new(pool.clone()));
    let category_service = Arc::new(CategoryService::new(pool.clone(), Arc::clone(&image_host)));
    let gallery_service = Arc::new(GalleryService::new(pool.clone(), Arc::clone(&image_host)));
    let art_piece_service = Arc::new(ArtPieceService::new(pool.clone()));
    let client_service = Arc::new(ClientService::new(pool.clone()));
    let faq_service = Arc::new(FaqService::new(pool.clone()));
    let testimonial_service = Arc::new(TestimonialService::new(pool.clone()));
    let workshop_service = Arc::new(WorkshopService::new(pool.clone()));
    tracing::info!("Entity services initialized");

    let recommendation_service = Arc::new(
        RecommendationService::new(config.ai.clone())
            .map_err(|e| anyhow::anyhow!("Failed to initialize recommendation service: {}", e))?,
    );
    if config.ai.api_key.is_some() {
        tracing::info!("Recommendation service initialized (model: {})", config.ai.model);
    } else {
        tracing::warn!("AI_API_KEY not set; recommendation requests will fail");
    }

    // Build swagger router with dynamic info
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Entity API. Reads are public; the admin_write_guard demands the
    // bearer token for every other method, apart from the funnel and
    // recommendation submits.
    let api_routes = Router::new()
        .merge(bookings_routes::routes(booking_service))
        .merge(categories_routes::routes(category_service))
        .merge(gallery_routes::routes(gallery_service))
        .merge(art_pieces_routes::routes(art_piece_service))
        .merge(clients_routes::routes(client_service))
        .merge(faqs_routes::routes(faq_service))
        .merge(testimonials_routes::routes(testimonial_service))
        .merge(workshops_routes::routes(workshop_service))
        .merge(recommendations_routes::routes(recommendation_service))
        .layer(axum::middleware::from_fn_with_state(
            token_validator.clone(),
            middleware::admin_write_guard,
        ))
        // Multipart image uploads exceed axum's default body limit
        .layer(axum::extract::DefaultBodyLimit::max(
            config.app.max_request_body_size,
        ));

    // Simple health check endpoint (no auth required)
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    let app = Router::new()
        .merge(swagger)
        .merge(api_routes)
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    // Use socket2 for TCP listener configuration
    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    socket.set_recv_buffer_size(256 * 1024)?;
    socket.set_send_buffer_size(256 * 1024)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(65535)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on {}", format!("http://{}", addr));
    tracing::info!(
        "Swagger UI available at {}",
        format!("http://{}/swagger-ui/", addr)
    );

    axum::serve(listener, app).await?;

    Ok(())
}
