//! Submission records and their annotations.

mod annotation;
mod record;

pub use annotation::Annotation;
pub use record::MergedSubmission;

use serde_json::Value;

/// The canonical submission field list, in header order.
///
/// New log files are created with exactly this header. Reads and updates
/// always map columns through the *file's own* header row instead, so a log
/// written before a schema change keeps working.
pub const SUBMISSION_FIELDS: [&str; 13] = [
    "timestamp",
    "ip",
    "userId",
    "fileName",
    "lengthSec",
    "submitTime",
    "toefl",
    "ielts",
    "pte",
    "cefr",
    "question",
    "transcript",
    "wpm",
];

/// Render a scalar JSON value the way it is stored in the log.
///
/// Null (and missing) fields become the empty string; numbers and booleans
/// are stringified. Nested structures are not expected in submissions but
/// serialize compactly rather than failing.
pub fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
