//! Search Predicate
//!
//! Case-sensitive substring matching over configured search columns.

use crate::models::TransferItem;

/// True iff `query` is a substring of at least one configured column value on
/// `item`. Absent or non-string fields never match. With no configured
/// columns, search is disabled and nothing matches.
pub fn matches(search_columns: &[String], query: &str, item: &TransferItem) -> bool {
    search_columns.iter().any(|column| {
        item.field_text(column)
            .map(|value| value.contains(query))
            .unwrap_or(false)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransferItem;
    use serde_json::json;

    fn make_item(value: serde_json::Value) -> TransferItem {
        let record = match value {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        TransferItem::from_record(0, record).unwrap()
    }

    fn cols(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_substring_match() {
        let item = make_item(json!({"id": 1, "name": "Alice", "role": "admin"}));
        assert!(matches(&cols(&["name"]), "lic", &item));
        assert!(matches(&cols(&["name"]), "Alice", &item));
        assert!(!matches(&cols(&["name"]), "bob", &item));
    }

    #[test]
    fn test_case_sensitive() {
        let item = make_item(json!({"id": 1, "name": "Alice"}));
        assert!(!matches(&cols(&["name"]), "alice", &item));
    }

    #[test]
    fn test_any_configured_column_suffices() {
        let item = make_item(json!({"id": 1, "name": "Alice", "role": "admin"}));
        assert!(matches(&cols(&["name", "role"]), "adm", &item));
        assert!(matches(&cols(&["role", "name"]), "Ali", &item));
    }

    #[test]
    fn test_absent_field_never_matches() {
        let item = make_item(json!({"id": 1, "name": "Alice"}));
        assert!(!matches(&cols(&["nickname"]), "Ali", &item));
        // non-string fields are treated as absent
        let numeric = make_item(json!({"id": 1, "age": 30}));
        assert!(!matches(&cols(&["age"]), "30", &numeric));
    }

    #[test]
    fn test_no_columns_disables_search() {
        let item = make_item(json!({"id": 1, "name": "Alice"}));
        assert!(!matches(&[], "Ali", &item));
    }
}
