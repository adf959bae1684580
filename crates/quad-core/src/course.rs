//! The opaque course row returned by the search backend.
//!
//! The backend has shipped two row shapes over time: a positional tuple
//! (`["CS", "225", "Data Structures", "...", 4]`) and an object keyed by
//! column name. The search client validates only the response envelope and
//! never the rows themselves, so the row is stored as raw JSON. Renderers
//! use the accessors below to pull fields out of either shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One course record from the backend, held as uninterpreted JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseRow(pub Value);

impl CourseRow {
    /// Field at position `index` for tuple-shaped rows, or under `key` for
    /// object-shaped rows.
    #[must_use]
    pub fn field(&self, index: usize, key: &str) -> Option<&Value> {
        match &self.0 {
            Value::Array(fields) => fields.get(index),
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// String form of a field, rendering non-string scalars as they appear
    /// on the wire. Missing fields and nulls yield `None`.
    #[must_use]
    pub fn field_text(&self, index: usize, key: &str) -> Option<String> {
        match self.field(index, key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn tuple_row_positional_access() {
        let row = CourseRow(json!(["CS", "225", "Data Structures", "Lists and trees.", 4]));
        assert_eq!(row.field(4, "credit_hours"), Some(&json!(4)));
        assert_eq!(row.field_text(0, "subject").as_deref(), Some("CS"));
        assert_eq!(row.field_text(2, "name").as_deref(), Some("Data Structures"));
        assert_eq!(row.field_text(4, "credit_hours").as_deref(), Some("4"));
        assert_eq!(row.field_text(9, "nope"), None);
    }

    #[test]
    fn object_row_keyed_access() {
        let row = CourseRow(json!({
            "school": "UIUC",
            "subject": "CS",
            "number": "225",
            "name": "Data Structures",
            "description": "Lists and trees.",
            "credit_hours": 4
        }));
        assert_eq!(row.field_text(0, "subject").as_deref(), Some("CS"));
        assert_eq!(row.field_text(4, "credit_hours").as_deref(), Some("4"));
    }

    #[test]
    fn scalar_row_has_no_fields() {
        let row = CourseRow(json!("not a row"));
        assert_eq!(row.field(0, "subject"), None);
        assert_eq!(row.field_text(0, "subject"), None);
    }

    #[test]
    fn transparent_serde() {
        let row: CourseRow = serde_json::from_str(r#"["CS","225","DS","desc",4]"#).unwrap();
        assert_eq!(serde_json::to_string(&row).unwrap(), r#"["CS","225","DS","desc",4]"#);
    }

    #[test]
    fn null_field_yields_none() {
        let row = CourseRow(json!([null, "225"]));
        assert_eq!(row.field_text(0, "subject"), None);
        assert_eq!(row.field_text(1, "number").as_deref(), Some("225"));
    }
}
