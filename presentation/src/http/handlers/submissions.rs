//! Submission log endpoints.

use crate::http::dto::{AnnotationBody, ListParams, StatusBody, SubmissionPageBody};
use crate::http::router::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tracing::error;
use vox_application::{AnnotateSubmissionInput, RecordSubmissionInput, SubmissionStoreError};

/// `POST /log/submission` — append one telemetry record.
pub async fn post_submission(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    let input = RecordSubmissionInput {
        payload,
        client_ip: forwarded_ip(&headers),
    };
    match state.record_submission.execute(input).await {
        Ok(()) => Json(StatusBody::ok_file("log.csv")).into_response(),
        Err(e) => submission_error(e),
    }
}

/// `GET /log/submissions?limit=` — most-recent rows, annotations merged.
pub async fn list_submissions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Response {
    match state.list_submissions.execute(params.limit).await {
        Ok(page) => Json(SubmissionPageBody::from(page)).into_response(),
        Err(e) => submission_error(e),
    }
}

/// `PUT /log/submissions/:id` — partial update of one row.
pub async fn update_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Response {
    let id = match id.parse::<usize>() {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(StatusBody::error("row id must be a non-negative integer")),
            )
                .into_response();
        }
    };
    match state.amend_submission.execute(id, payload).await {
        Ok(()) => Json(StatusBody::ok()).into_response(),
        Err(e) => submission_error(e),
    }
}

/// `POST /log/annotation` — upsert a reviewer note by row identity.
pub async fn post_annotation(
    State(state): State<AppState>,
    Json(body): Json<AnnotationBody>,
) -> Response {
    let input = AnnotateSubmissionInput {
        id: body.id,
        note: body.note,
        teacher: body.teacher,
    };
    match state.annotate_submission.execute(input).await {
        Ok(()) => Json(StatusBody::ok()).into_response(),
        Err(e) => submission_error(e),
    }
}

/// `GET /log/export` — the raw CSV file.
pub async fn export_log(State(state): State<AppState>) -> Response {
    match state.export_log.execute().await {
        Ok(Some(text)) => {
            ([(header::CONTENT_TYPE, "text/csv; charset=utf-8")], text).into_response()
        }
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(StatusBody::error("no submissions logged yet")),
        )
            .into_response(),
        Err(e) => submission_error(e),
    }
}

/// First hop of `X-Forwarded-For`, when present and non-empty.
fn forwarded_ip(headers: &HeaderMap) -> Option<String> {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|hop| hop.trim().to_string())
        .filter(|hop| !hop.is_empty())
}

/// Map store errors onto the response taxonomy: missing log → 404, bad
/// input → 400, I/O → 500.
fn submission_error(err: SubmissionStoreError) -> Response {
    let status = match &err {
        SubmissionStoreError::LogMissing => StatusCode::NOT_FOUND,
        SubmissionStoreError::RowOutOfRange(_) | SubmissionStoreError::EmptyAnnotationId => {
            StatusCode::BAD_REQUEST
        }
        SubmissionStoreError::Io(_) | SubmissionStoreError::Serialize(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    if status.is_server_error() {
        error!(error = %err, "submission operation failed");
    }
    (status, Json(StatusBody::error(err.to_string()))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_forwarded_ip_takes_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        assert_eq!(forwarded_ip(&headers), Some("203.0.113.7".to_string()));
    }

    #[test]
    fn test_forwarded_ip_absent_or_empty() {
        assert_eq!(forwarded_ip(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(""));
        assert_eq!(forwarded_ip(&headers), None);
    }
}
