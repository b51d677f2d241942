//! Table rows: opaque accessor-key -> value mappings keyed by an id
//!
//! Fixture rows arrive as plain JSON objects. Identity is assigned once at
//! load time so selection and deletion can key on it.

use std::collections::HashSet;

use serde_json::{Map, Value};

/// One record of a table's data set
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: String,
    pub values: Map<String, Value>,
}

impl TableRow {
    pub fn new(id: impl Into<String>, values: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            values,
        }
    }

    /// Display/search text of one cell; missing and null read as empty
    pub fn cell_text(&self, accessor_key: &str) -> String {
        match self.values.get(accessor_key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }

    /// Numeric view of a cell, used by the sort comparator
    pub fn cell_number(&self, accessor_key: &str) -> Option<f64> {
        match self.values.get(accessor_key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Key raw fixture objects: an existing `id` value is kept, otherwise the
/// sequential load index is assigned. Deterministic for a given input order.
pub fn assign_row_ids(raw_rows: Vec<Map<String, Value>>) -> Vec<TableRow> {
    raw_rows
        .into_iter()
        .enumerate()
        .map(|(index, values)| {
            let id = match values.get("id") {
                Some(Value::String(s)) if !s.is_empty() => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => index.to_string(),
            };
            TableRow::new(id, values)
        })
        .collect()
}

/// Remove one row by id. Deletion is always the caller's mutation on its
/// own array; the table renderer never deletes anything itself.
pub fn delete_row(rows: &mut Vec<TableRow>, id: &str) {
    rows.retain(|row| row.id != id);
}

/// Remove every row whose id is in the selection
pub fn delete_rows(rows: &mut Vec<TableRow>, ids: &HashSet<String>) {
    rows.retain(|row| !ids.contains(&row.id));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn existing_ids_are_kept_and_gaps_filled_by_index() {
        let rows = assign_row_ids(vec![
            obj(json!({"id": "RR-7", "lane": "HAM-RTM"})),
            obj(json!({"lane": "RTM-ANR"})),
            obj(json!({"id": 42, "lane": "ANR-HAM"})),
        ]);

        assert_eq!(rows[0].id, "RR-7");
        assert_eq!(rows[1].id, "1");
        assert_eq!(rows[2].id, "42");
    }

    #[test]
    fn missing_and_null_cells_render_empty() {
        let rows = assign_row_ids(vec![obj(json!({"lane": "HAM-RTM", "notes": null}))]);
        assert_eq!(rows[0].cell_text("notes"), "");
        assert_eq!(rows[0].cell_text("carrier"), "");
        assert_eq!(rows[0].cell_text("lane"), "HAM-RTM");
    }

    #[test]
    fn delete_removes_only_the_named_row_and_keeps_order() {
        let rows = assign_row_ids(vec![
            obj(json!({"id": "1", "lane": "HAM-RTM"})),
            obj(json!({"id": "2", "lane": "RTM-ANR"})),
            obj(json!({"id": "3", "lane": "ANR-HAM"})),
        ]);

        // The caller mutates its own copy; the source set stays intact
        let mut working = rows.clone();
        delete_row(&mut working, "2");
        let ids: Vec<&str> = working.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(rows.len(), 3);

        delete_row(&mut working, "missing");
        assert_eq!(working.len(), 2);
    }

    #[test]
    fn bulk_delete_removes_the_whole_selection() {
        let mut rows = assign_row_ids(vec![
            obj(json!({"id": "1"})),
            obj(json!({"id": "2"})),
            obj(json!({"id": "3"})),
            obj(json!({"id": "4"})),
        ]);
        let selection = HashSet::from(["1".to_string(), "3".to_string()]);

        delete_rows(&mut rows, &selection);
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);

        delete_rows(&mut rows, &HashSet::new());
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn cell_number_parses_numbers_and_numeric_strings() {
        let rows = assign_row_ids(vec![obj(json!({"rate": 1250.5, "distance": "480"}))]);
        assert_eq!(rows[0].cell_number("rate"), Some(1250.5));
        assert_eq!(rows[0].cell_number("distance"), Some(480.0));
        assert_eq!(rows[0].cell_number("missing"), None);
    }
}
