//! Form state: one string-keyed value map per form section
//!
//! Owned exclusively by the section that created it. Pages share nothing
//! across sections except explicit auto-fill callbacks they wire themselves.

use serde_json::{Map, Value};

use super::descriptor::{FieldDescriptor, FieldKind};

/// Mutable value store backing one form section
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: Map<String, Value>,
}

impl FormState {
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Seed state with one key per descriptor: `false` for checkboxes,
    /// empty string for everything else (plus the unit key of composite
    /// fields, defaulted to the first unit option).
    pub fn for_fields(fields: &[FieldDescriptor]) -> Self {
        let mut state = Self::new();
        for field in fields {
            match field.kind {
                FieldKind::Checkbox => state.set(&field.name, Value::Bool(false)),
                FieldKind::CompositeUnit => {
                    state.set(&field.name, Value::String(String::new()));
                    if let Some(unit_key) = &field.unit_name {
                        let unit = field
                            .unit_options
                            .first()
                            .map(|o| o.value.clone())
                            .unwrap_or_default();
                        state.set(unit_key, Value::String(unit));
                    }
                }
                _ => state.set(&field.name, Value::String(String::new())),
            }
        }
        state
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn set(&mut self, name: &str, value: Value) {
        self.values.insert(name.to_string(), value);
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.set(name, Value::String(value.into()));
    }

    pub fn set_flag(&mut self, name: &str, value: bool) {
        self.set(name, Value::Bool(value));
    }

    /// String view of a value; missing/null read as empty
    pub fn text(&self, name: &str) -> String {
        match self.values.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            _ => String::new(),
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.values.get(name)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(Value::Bool(true)))
    }

    /// Snapshot for submit handlers and logging
    pub fn to_value(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::descriptor::SelectOption;

    #[test]
    fn seeds_defaults_per_kind() {
        let fields = vec![
            FieldDescriptor::text("origin", "Origin"),
            FieldDescriptor::checkbox("hazmat", "Hazardous"),
            FieldDescriptor::composite_unit(
                "weight",
                "Weight",
                "weight_unit",
                vec![SelectOption::plain("kg"), SelectOption::plain("lb")],
            ),
        ];
        let state = FormState::for_fields(&fields);

        assert_eq!(state.text("origin"), "");
        assert!(!state.flag("hazmat"));
        assert_eq!(state.text("weight_unit"), "kg");
    }

    #[test]
    fn typed_accessors_coerce() {
        let mut state = FormState::new();
        state.set_text("weight", "450.5");
        state.set_flag("hazmat", true);

        assert_eq!(state.number("weight"), Some(450.5));
        assert!(state.flag("hazmat"));
        assert_eq!(state.text("missing"), "");
        assert_eq!(state.number("hazmat"), None);
    }

    #[test]
    fn composite_unit_keys_update_independently() {
        let fields = vec![FieldDescriptor::composite_unit(
            "weight",
            "Weight",
            "weight_unit",
            vec![SelectOption::plain("kg"), SelectOption::plain("lb")],
        )];
        let mut state = FormState::for_fields(&fields);

        state.set_text("weight", "1200");
        assert_eq!(state.text("weight_unit"), "kg");

        state.set_text("weight_unit", "lb");
        assert_eq!(state.text("weight"), "1200");
        assert_eq!(state.text("weight_unit"), "lb");
    }
}
