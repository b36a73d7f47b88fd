//! Root endpoint returning service identification.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

/// Greeting message returned by the root endpoint.
pub const GREETING: &str = "Hello from ECS Node.js App with HTTPS";

/// Root handler.
///
/// Returns a fixed greeting along with the effective listen port, so a caller
/// (or an operator with curl) can confirm which configuration the process
/// actually picked up.
pub async fn index(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": GREETING,
        "port": state.config.http.port,
        "protocol": "HTTPS",
    }))
}
