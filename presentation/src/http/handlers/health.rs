//! Health check.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};

pub async fn health() -> Json<Value> {
    Json(json!({
        "ok": true,
        "time": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}
