//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /{id}`    - Short URL redirect
//! - `GET  /health`  - Health check
//! - `/v1/*`         - Short URL management API
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on redirect and API routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler};
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Rate limit settings are taken from `config`. The health check is not
/// rate limited so probes never receive `429`.
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let limited = Router::new()
        .route("/{id}", get(redirect_handler))
        .nest("/v1", api::routes::v1_routes())
        .layer(rate_limit::layer(
            config.rate_limit_replenish_seconds,
            config.rate_limit_burst,
        ));

    let router = Router::new()
        .route("/health", get(health_handler))
        .merge(limited)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
