//! Decoded log rows.

use super::Annotation;

/// One decoded submission row with its annotation merged in.
///
/// `id` is the row's 0-based index over the file's data lines. It is stable
/// for the life of the file: rows are never deleted, and appends only add
/// higher indices.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedSubmission {
    /// Position of the row in the full file, independent of any list limit.
    pub id: usize,
    /// Field name/value pairs in the file's own header order.
    pub fields: Vec<(String, String)>,
    /// Reviewer annotation; the empty default when none was stored.
    pub annotation: Annotation,
}

impl MergedSubmission {
    /// Look up a field value by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_lookup() {
        let row = MergedSubmission {
            id: 3,
            fields: vec![
                ("timestamp".to_string(), "2025-01-01".to_string()),
                ("toefl".to_string(), "95".to_string()),
            ],
            annotation: Annotation::default(),
        };
        assert_eq!(row.field("toefl"), Some("95"));
        assert_eq!(row.field("ielts"), None);
    }
}
