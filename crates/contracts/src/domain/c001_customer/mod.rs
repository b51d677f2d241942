//! Customer reference data
//!
//! Served as a bare array fixture (`/fixtures/customers.json`); used by the
//! customer list page and the booking form's modal picker.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::shared::tables::rows::TableRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(rename = "paymentTerms", default)]
    pub payment_terms: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::NaiveDate>,
}

impl Customer {
    /// Key for selection and picker confirmation; falls back to the
    /// customer code when the fixture carries no id.
    pub fn key(&self) -> String {
        self.id.clone().unwrap_or_else(|| self.code.clone())
    }
}

impl From<Customer> for TableRow {
    fn from(customer: Customer) -> Self {
        let id = customer.key();
        let mut values = Map::new();
        values.insert("code".into(), Value::String(customer.code));
        values.insert("name".into(), Value::String(customer.name));
        values.insert("city".into(), Value::String(customer.city));
        values.insert("country".into(), Value::String(customer.country));
        values.insert(
            "paymentTerms".into(),
            Value::String(customer.payment_terms),
        );
        values.insert(
            "createdAt".into(),
            Value::String(
                customer
                    .created_at
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
    fn key_falls_back_to_code() {
        let json = r#"{"code": "CUST-014", "name": "Hanse Trading GmbH", "city": "Hamburg"}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.key(), "CUST-014");

        let row: TableRow = customer.into();
        assert_eq!(row.cell_text("name"), "Hanse Trading GmbH");
        assert_eq!(row.cell_text("country"), "");
    }
}
