//! HTTP route handlers.
//!
//! The service exposes exactly two routes: the root greeting and the health
//! check. Everything else falls through to the framework default (404 for
//! unknown paths, 405 for known paths with the wrong method).
//!
//! Request tracing is enabled via middleware that generates a unique request ID
//! for each incoming request, allowing correlation of all logs within a request.

pub mod health;
pub mod home;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Cache-Control for probe responses: liveness checks must never be served stale.
const CACHE_CONTROL_NO_STORE: &str = "no-store";

/// Creates the Axum router with both routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Root - service identification, safe to respond from intermediary caches
    // but kept uncached since the port field reflects live configuration
    let home_routes = Router::new().route("/", get(home::index));

    // Health check - no caching, always fresh for liveness probes
    let health_routes = Router::new().route("/health", get(health::health)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ),
    );

    Router::new()
        .merge(home_routes)
        .merge(health_routes)
        .with_state(state)
        // Request ID middleware - creates root span with request_id for correlation
        .layer(middleware::from_fn(request_id_layer))
}
