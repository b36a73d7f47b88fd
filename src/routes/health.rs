//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe that returns 200 OK when the process is running.
//! Used by load balancers (ALB target group health checks) and orchestrators
//! to verify the service is alive.

use axum::Json;
use serde_json::{json, Value};

/// Health check handler.
///
/// Returns `{"status":"healthy"}` to indicate the service is running.
/// This is a liveness probe - it only checks that the process can respond
/// to HTTPS requests.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
