//! Wire types for the HTTP surface.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use vox_application::SubmissionPage;
use vox_domain::MergedSubmission;

/// Uniform `{ok, ...}` status body used by all write endpoints.
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StatusBody {
    pub fn ok() -> Self {
        Self {
            ok: true,
            file: None,
            error: None,
        }
    }

    pub fn ok_file(file: impl Into<String>) -> Self {
        Self {
            ok: true,
            file: Some(file.into()),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            file: None,
            error: Some(message.into()),
        }
    }
}

/// Query parameters for `GET /log/submissions`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
}

/// Body of `POST /log/annotation`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnnotationBody {
    pub id: String,
    pub note: String,
    pub teacher: String,
}

/// Response body of `GET /log/submissions`.
#[derive(Debug, Serialize)]
pub struct SubmissionPageBody {
    /// Column order of the underlying file; the `rows` objects are keyed
    /// by these names.
    pub header: Vec<String>,
    pub rows: Vec<Value>,
}

impl From<SubmissionPage> for SubmissionPageBody {
    fn from(page: SubmissionPage) -> Self {
        Self {
            header: page.header,
            rows: page.rows.iter().map(row_to_json).collect(),
        }
    }
}

/// Flatten one merged row into a response object: `id`, every field by
/// name, and the annotation's `note`/`teacher`.
fn row_to_json(row: &MergedSubmission) -> Value {
    let mut map = Map::new();
    map.insert("id".to_string(), Value::from(row.id));
    for (name, value) in &row.fields {
        map.insert(name.clone(), Value::String(value.clone()));
    }
    map.insert("note".to_string(), Value::String(row.annotation.note.clone()));
    map.insert(
        "teacher".to_string(),
        Value::String(row.annotation.teacher.clone()),
    );
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use vox_domain::Annotation;

    #[test]
    fn test_row_flattening() {
        let page = SubmissionPage {
            header: vec!["timestamp".to_string(), "toefl".to_string()],
            rows: vec![MergedSubmission {
                id: 4,
                fields: vec![
                    ("timestamp".to_string(), "2025-01-01".to_string()),
                    ("toefl".to_string(), "95".to_string()),
                ],
                annotation: Annotation {
                    note: "solid".to_string(),
                    teacher: "ms-lee".to_string(),
                    updated_at: "2025-01-02T00:00:00.000Z".to_string(),
                },
            }],
        };

        let body = SubmissionPageBody::from(page);
        assert_eq!(body.header, vec!["timestamp", "toefl"]);
        assert_eq!(body.rows[0]["id"], json!(4));
        assert_eq!(body.rows[0]["toefl"], json!("95"));
        assert_eq!(body.rows[0]["note"], json!("solid"));
        assert_eq!(body.rows[0]["teacher"], json!("ms-lee"));
    }

    #[test]
    fn test_status_body_shapes() {
        let ok = serde_json::to_value(StatusBody::ok()).unwrap();
        assert_eq!(ok, json!({"ok": true}));

        let with_file = serde_json::to_value(StatusBody::ok_file("log.csv")).unwrap();
        assert_eq!(with_file, json!({"ok": true, "file": "log.csv"}));

        let err = serde_json::to_value(StatusBody::error("nope")).unwrap();
        assert_eq!(err, json!({"ok": false, "error": "nope"}));
    }
}
