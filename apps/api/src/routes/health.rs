use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Liveness probe; touches nothing but the process.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
