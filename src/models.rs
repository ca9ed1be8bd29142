//! Widget Models
//!
//! Item records, normalization, and widget configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use thiserror::Error;

/// Externally supplied item record: an `id` member plus arbitrary display fields.
pub type Record = Map<String, Value>;

/// Configuration faults surfaced at normalization time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransferError {
    #[error("record at index {index} has no usable `id` field")]
    MissingId { index: usize },
    #[error("duplicate item key `{key}`")]
    DuplicateKey { key: String },
}

/// Normalized item: key derived from the record's `id`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferItem {
    pub key: String,
    pub fields: Record,
}

impl TransferItem {
    pub fn from_record(index: usize, record: Record) -> Result<Self, TransferError> {
        let key = match record.get("id") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return Err(TransferError::MissingId { index }),
        };
        Ok(Self { key, fields: record })
    }

    /// Text value of a field, for search matching. Only string fields match.
    pub fn field_text(&self, name: &str) -> Option<&str> {
        match self.fields.get(name) {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Display form of a field for table cells. Absent fields render blank.
    pub fn display_text(&self, name: &str) -> String {
        match self.fields.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }
}

/// Normalize raw records into keyed items, rejecting missing and duplicate keys
pub fn normalize_records(data: &[Record]) -> Result<Vec<TransferItem>, TransferError> {
    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(data.len());
    for (index, record) in data.iter().enumerate() {
        let item = TransferItem::from_record(index, record.clone())?;
        if !seen.insert(item.key.clone()) {
            return Err(TransferError::DuplicateKey { key: item.key });
        }
        items.push(item);
    }
    Ok(items)
}

/// Pane side of the dual-list widget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Named shortcut resolving to a set of item keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredefinedGroup {
    pub id: String,
    pub name: String,
}

/// One table column: which field to show under which header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub field: String,
    pub title: String,
}

/// Build column specs from a pane's (field, title) list
pub fn table_columns(titles: &[(String, String)]) -> Vec<ColumnSpec> {
    titles
        .iter()
        .map(|(field, title)| ColumnSpec {
            field: field.clone(),
            title: title.clone(),
        })
        .collect()
}

/// Passthrough configuration forwarded to the transfer primitive.
///
/// Named fields only; `class`/`style` are the open styling extension points.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferOptions {
    /// Pane header titles, `[left, right]`
    pub titles: Option<[String; 2]>,
    /// Move button labels, `[to-right, to-left]`
    pub operations: [String; 2],
    pub disabled: bool,
    /// Extra class on the primitive's root element
    pub class: Option<String>,
    /// Inline style on the primitive's root element
    pub style: Option<String>,
}

impl Default for TransferOptions {
    fn default() -> Self {
        Self {
            titles: None,
            operations: [">".to_string(), "<".to_string()],
            disabled: false,
            class: None,
            style: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_key_from_numeric_id() {
        let items = normalize_records(&[
            record(json!({"id": 1, "name": "A"})),
            record(json!({"id": 2, "name": "B"})),
            record(json!({"id": 3, "name": "C"})),
        ])
        .unwrap();

        let keys: Vec<&str> = items.iter().map(|i| i.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_key_from_string_id() {
        let items = normalize_records(&[record(json!({"id": "abc", "name": "A"}))]).unwrap();
        assert_eq!(items[0].key, "abc");
    }

    #[test]
    fn test_keys_are_unique() {
        let items = normalize_records(&[
            record(json!({"id": 1})),
            record(json!({"id": 2})),
            record(json!({"id": 3})),
        ])
        .unwrap();
        let mut keys: Vec<&str> = items.iter().map(|i| i.key.as_str()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), items.len());
    }

    #[test]
    fn test_missing_id_is_config_error() {
        let err = normalize_records(&[record(json!({"name": "no id"}))]).unwrap_err();
        assert_eq!(err, TransferError::MissingId { index: 0 });

        let err = normalize_records(&[record(json!({"id": null}))]).unwrap_err();
        assert_eq!(err, TransferError::MissingId { index: 0 });
    }

    #[test]
    fn test_duplicate_key_is_config_error() {
        let err = normalize_records(&[
            record(json!({"id": 1})),
            record(json!({"id": "1"})),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            TransferError::DuplicateKey {
                key: "1".to_string()
            }
        );
    }

    #[test]
    fn test_field_text_only_matches_strings() {
        let item =
            TransferItem::from_record(0, record(json!({"id": 1, "name": "A", "age": 30}))).unwrap();
        assert_eq!(item.field_text("name"), Some("A"));
        assert_eq!(item.field_text("age"), None);
        assert_eq!(item.field_text("missing"), None);
    }

    #[test]
    fn test_display_text() {
        let item = TransferItem::from_record(
            0,
            record(json!({"id": 1, "name": "A", "age": 30, "active": true})),
        )
        .unwrap();
        assert_eq!(item.display_text("name"), "A");
        assert_eq!(item.display_text("age"), "30");
        assert_eq!(item.display_text("active"), "true");
        assert_eq!(item.display_text("missing"), "");
    }

    #[test]
    fn test_table_columns() {
        let cols = table_columns(&[
            ("name".to_string(), "Name".to_string()),
            ("role".to_string(), "Role".to_string()),
        ]);
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[0].field, "name");
        assert_eq!(cols[0].title, "Name");
        assert_eq!(cols[1].field, "role");
    }
}
