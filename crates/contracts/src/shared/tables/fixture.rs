//! Fixture envelope for tabular pages
//!
//! List pages fetch a static JSON document shaped as
//! `{ "headers": [{accessorKey, header}], "rows": [...] }`; simpler pages
//! fetch a bare array and declare columns in code.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::descriptor::ColumnDescriptor;
use super::rows::{assign_row_ids, TableRow};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableFixture {
    pub headers: Vec<ColumnDescriptor>,
    pub rows: Vec<Map<String, Value>>,
}

impl TableFixture {
    /// Split into columns and keyed rows (ids assigned at load time)
    pub fn into_parts(self) -> (Vec<ColumnDescriptor>, Vec<TableRow>) {
        (self.headers, assign_row_ids(self.rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_envelope_and_assigns_ids() {
        let fixture: TableFixture = serde_json::from_str(
            r#"{
                "headers": [
                    {"accessorKey": "lane", "header": "Lane"},
                    {"accessorKey": "rate", "header": "Rate", "sortable": true}
                ],
                "rows": [
                    {"lane": "HAM-RTM", "rate": 1250},
                    {"id": "RR-9", "lane": "RTM-ANR", "rate": 480}
                ]
            }"#,
        )
        .unwrap();

        let (columns, rows) = fixture.into_parts();
        assert_eq!(columns.len(), 2);
        assert_eq!(columns[0].accessor_key, "lane");
        assert_eq!(rows[0].id, "0");
        assert_eq!(rows[1].id, "RR-9");
    }
}
