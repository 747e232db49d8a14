//! Bloom REST API
//!
//! HTTP API layer for Bloom, built with Axum.
//!
//! # Endpoints
//!
//! ## Site
//! - `GET /api/v1/site/navigation?path=` - Navigation bar
//! - `GET /api/v1/site/home` - Home page copy
//! - `GET /api/v1/site/pages/:route` - Page intro copy
//!
//! ## Forums
//! - `GET /api/v1/forums/topics?search=&category=` - Filter topics
//! - `GET /api/v1/forums/categories` - Category tabs
//! - `GET /api/v1/forums/post` - Post with comments
//! - `POST /api/v1/forums/post/comments` - Add a comment
//! - `POST /api/v1/forums/post/comments/:id/like` - Toggle a comment like
//!
//! ## Tracker
//! - `GET /api/v1/tracker` - Selected date and draft
//! - `POST /api/v1/tracker/select` - Select a date
//! - `PUT /api/v1/tracker/draft` - Edit the draft
//! - `POST /api/v1/tracker/save` - Upsert the draft
//! - `GET /api/v1/tracker/calendar?year=&month=` - Month calendar
//! - `GET /api/v1/tracker/trends` - Trend strip
//!
//! ## Journal
//! - `GET /api/v1/journal` - Journal view
//! - `POST /api/v1/journal/category` - Switch category
//! - `POST /api/v1/journal/prompt` - Draw a prompt
//! - `POST /api/v1/journal/entries` - Save an entry
//! - `POST /api/v1/journal/entries/:id/select` - Open an entry
//! - `POST /api/v1/journal/pane` - Switch pane
//!
//! ## Resources
//! - `GET /api/v1/resources?search=&types=&categories=` - Filter resources
//! - `GET /api/v1/resources/facets` - Filter facets
//! - `POST /api/v1/resources/:id/like` - Toggle a like
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use bloom::api::{serve, ApiConfig, AppState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ApiConfig::default();
//!     let state = AppState::seeded(config.clone());
//!     serve(state, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{ApiConfig, AppState};

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Site routes
        .route("/site/navigation", get(routes::site::get_navigation))
        .route("/site/home", get(routes::site::get_home))
        .route("/site/pages/:route", get(routes::site::get_page))
        // Forum routes
        .route("/forums/topics", get(routes::forums::list_topics))
        .route("/forums/categories", get(routes::forums::list_categories))
        .route("/forums/post", get(routes::forums::get_thread))
        .route("/forums/post/comments", post(routes::forums::submit_comment))
        .route(
            "/forums/post/comments/:id/like",
            post(routes::forums::toggle_comment_like),
        )
        // Tracker routes
        .route("/tracker", get(routes::tracker::get_tracker))
        .route("/tracker/select", post(routes::tracker::select_date))
        .route("/tracker/draft", put(routes::tracker::update_draft))
        .route("/tracker/save", post(routes::tracker::save_entry))
        .route("/tracker/calendar", get(routes::tracker::get_calendar))
        .route("/tracker/trends", get(routes::tracker::get_trends))
        // Journal routes
        .route("/journal", get(routes::journal::get_journal))
        .route("/journal/category", post(routes::journal::set_category))
        .route("/journal/prompt", post(routes::journal::next_prompt))
        .route("/journal/entries", post(routes::journal::save_entry))
        .route(
            "/journal/entries/:id/select",
            post(routes::journal::select_entry),
        )
        .route("/journal/pane", post(routes::journal::set_pane))
        // Resource routes
        .route("/resources", get(routes::resources::list_resources))
        .route("/resources/facets", get(routes::resources::get_facets))
        .route("/resources/:id/like", post(routes::resources::toggle_like))
        .layer(DefaultBodyLimit::max(state.config.max_body_size));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.cors_origins);

    // Create shared state
    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// CORS for the configured origins; an empty list allows any origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if allowed.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(allowed)
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Bloom API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Bloom API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
