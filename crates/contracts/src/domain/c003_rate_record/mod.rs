//! Lane rate records
//!
//! Served as a tabular fixture envelope (`/fixtures/rate_records.json`).
//! The list page works on raw rows from the envelope; this struct backs
//! rows the user adds in the browser.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::tables::rows::TableRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub origin: String,
    pub destination: String,
    pub mode: String,
    pub rate: f64,
    pub currency: String,
    #[serde(rename = "validFrom", default)]
    pub valid_from: Option<chrono::NaiveDate>,
}

impl From<RateRecord> for TableRow {
    fn from(record: RateRecord) -> Self {
        let id = record.id.unwrap_or_default();
        let mut values = Map::new();
        values.insert("origin".into(), Value::String(record.origin));
        values.insert("destination".into(), Value::String(record.destination));
        values.insert("mode".into(), Value::String(record.mode));
        values.insert("rate".into(), Value::from(record.rate));
        values.insert("currency".into(), Value::String(record.currency));
        values.insert(
            "validFrom".into(),
            Value::String(
                record
                    .valid_from
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default(),
            ),
        );
        TableRow::new(id, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_to_row_with_numeric_rate() {
        let record = RateRecord {
            id: Some("r-1".into()),
            origin: "Rotterdam".into(),
            destination: "Shanghai".into(),
            mode: "Ocean".into(),
            rate: 1450.0,
            currency: "USD".into(),
            valid_from: None,
        };
        let row: TableRow = record.into();
        assert_eq!(row.id, "r-1");
        assert_eq!(row.cell_number("rate"), Some(1450.0));
        assert_eq!(row.cell_text("validFrom"), "");
    }
}
