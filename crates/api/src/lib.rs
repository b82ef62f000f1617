//! # Roombook API
//!
//! HTTP surface for the special-room booking core. It exposes the weekly
//! grid with eligibility previews, the transactional reservation
//! operations, the administrative block registry, and the settings and
//! assignment configuration.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Provide admin authentication and error mapping
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework. Storage is reached only through
//! the `DocumentStore` abstraction, so the server runs identically against
//! Postgres or the in-memory store.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for admin authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use roombook_core::calendar::Clock;
use roombook_db::repositories::block::BlockRepository;
use roombook_db::repositories::config::ConfigRepository;
use roombook_db::repositories::reservation::ReservationRepository;
use roombook_db::DocumentStore;

/// Shared application state accessible to all request handlers.
///
/// Repositories are explicitly constructed service objects over one shared
/// store handle; nothing here is a process-wide global, which is what lets
/// tests run against the in-memory store with an injected clock.
pub struct ApiState {
    pub reservations: ReservationRepository,
    pub blocks: BlockRepository,
    pub config: ConfigRepository,
    pub clock: Box<dyn Clock>,
    pub admin_password: String,
}

impl ApiState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        clock: Box<dyn Clock>,
        admin_password: String,
    ) -> Self {
        Self {
            reservations: ReservationRepository::new(store.clone()),
            blocks: BlockRepository::new(store.clone()),
            config: ConfigRepository::new(store),
            clock,
            admin_password,
        }
    }
}

/// Builds the application router. Split out of [`start_server`] so tests
/// can drive the full HTTP surface without binding a socket.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Weekly grid with eligibility preview
        .merge(routes::week::routes())
        // Reservation operations
        .merge(routes::reservation::routes())
        // Administrative block registry
        .merge(routes::block::routes())
        // Settings and weekly assignment administration
        .merge(routes::admin::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server with the provided configuration and store.
pub async fn start_server(
    config: config::ApiConfig,
    store: Arc<dyn DocumentStore>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let clock = Box::new(roombook_core::calendar::SystemClock::new(config.timezone));
    let state = Arc::new(ApiState::new(store, clock, config.admin_password.clone()));

    let app = app(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
                axum::http::HeaderName::from_static(
                    middleware::auth::ADMIN_PASSWORD_HEADER,
                ),
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
