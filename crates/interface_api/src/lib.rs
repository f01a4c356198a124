//! HTTP API Layer
//!
//! This crate exposes scanline generation and validation as a REST API
//! using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for health and scanline operations
//! - **Middleware**: Request IDs, tracing, audit logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(config)?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use ::config::ConfigError;
use domain_scanline::{CenturyWindow, ScanlineEncoder};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, scanline};
use crate::middleware::audit_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub window: CenturyWindow,
    pub encoder: ScanlineEncoder,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `config` - API configuration; its century start drives date encoding
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
///
/// # Errors
///
/// Returns an error if the configured century window is not representable
pub fn create_router(config: ApiConfig) -> Result<Router, ConfigError> {
    let window = config.century_window()?;
    let encoder = ScanlineEncoder::new(window);
    let state = AppState {
        config,
        window,
        encoder,
    };

    let public_routes = Router::new().route("/health", get(health::health_check));

    let scanline_routes = Router::new()
        .route("/", post(scanline::generate))
        .route("/batch", post(scanline::generate_batch))
        .route("/validate", post(scanline::validate));

    let api_routes = Router::new()
        .nest("/scanlines", scanline_routes)
        .layer(axum_middleware::from_fn(audit_middleware));

    let router = Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state);

    Ok(router)
}
