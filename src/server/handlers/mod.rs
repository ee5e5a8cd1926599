//! Request handlers grouped by audience

pub mod public;
pub mod staff;

use axum::Json;
use serde_json::{Value, json};

/// Liveness probe
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "barbershop"
    }))
}
