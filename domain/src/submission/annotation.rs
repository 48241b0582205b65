//! Reviewer annotations, stored separately from the log rows.

use serde::{Deserialize, Serialize};

/// A reviewer note attached to one submission row by its identity.
///
/// Annotations live in their own keyed store and are left-joined onto rows
/// at read time; a row without one gets the empty default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Annotation {
    /// Free-text reviewer note.
    pub note: String,
    /// Name or handle of the reviewing teacher.
    pub teacher: String,
    /// UTC timestamp of the last upsert, RFC 3339.
    pub updated_at: String,
}

impl Annotation {
    pub fn is_empty(&self) -> bool {
        self.note.is_empty() && self.teacher.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_with_camel_case_timestamp() {
        let annotation = Annotation {
            note: "good pacing".to_string(),
            teacher: "ms-lee".to_string(),
            updated_at: "2025-06-01T10:00:00.000Z".to_string(),
        };
        let json = serde_json::to_value(&annotation).unwrap();
        assert_eq!(json["updatedAt"], "2025-06-01T10:00:00.000Z");
        assert_eq!(json["note"], "good pacing");
    }

    #[test]
    fn test_default_is_empty() {
        assert!(Annotation::default().is_empty());
    }
}
