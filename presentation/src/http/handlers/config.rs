//! Config document endpoints.

use crate::http::dto::StatusBody;
use crate::http::guard::authorized;
use crate::http::router::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::error;
use vox_domain::ConfigKind;

/// `GET /config/:kind` — always succeeds for a known kind.
pub async fn get_config(State(state): State<AppState>, Path(kind): Path<String>) -> Response {
    let kind = match kind.parse::<ConfigKind>() {
        Ok(kind) => kind,
        Err(e) => {
            return (StatusCode::NOT_FOUND, Json(StatusBody::error(e.to_string())))
                .into_response();
        }
    };
    let document = state.fetch_config.execute(kind).await;
    Json(Value::Object(document)).into_response()
}

/// `PUT /config/:kind` — admin-gated whole-document replace.
pub async fn put_config(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    if !authorized(&headers, state.admin_write_key.as_deref()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(StatusBody::error("unauthorized")),
        )
            .into_response();
    }
    let kind = match kind.parse::<ConfigKind>() {
        Ok(kind) => kind,
        Err(e) => {
            return (StatusCode::NOT_FOUND, Json(StatusBody::error(e.to_string())))
                .into_response();
        }
    };
    match state.save_config.execute(kind, payload).await {
        Ok(()) => Json(StatusBody::ok()).into_response(),
        Err(e) => {
            error!(%kind, error = %e, "config write failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusBody::error("config write failed")),
            )
                .into_response()
        }
    }
}
