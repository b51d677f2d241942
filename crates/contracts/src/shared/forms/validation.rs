//! Validation rules for form fields
//!
//! Errors never block editing, only submit: the section composer runs
//! [`validate_form`] on submit and renders the returned messages inline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::descriptor::{FieldDescriptor, FieldKind};
use super::state::FormState;

/// Field name -> message, ordered for stable display
pub type FormErrors = BTreeMap<String, String>;

/// Validation constraints of a single field
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ValidationRules {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub min_length: Option<usize>,
    #[serde(default)]
    pub max_length: Option<usize>,
}

impl ValidationRules {
    /// No constraints
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
        }
    }

    pub const fn range(min: f64, max: f64) -> Self {
        Self {
            required: false,
            min: Some(min),
            max: Some(max),
            min_length: None,
            max_length: None,
        }
    }

    pub const fn with_max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    fn check_string(&self, value: &str, label: &str) -> Result<(), String> {
        if self.required && value.trim().is_empty() {
            return Err(format!("{} is required", label));
        }
        if value.is_empty() {
            return Ok(());
        }
        if let Some(min) = self.min_length {
            if value.chars().count() < min {
                return Err(format!("{} must be at least {} characters", label, min));
            }
        }
        if let Some(max) = self.max_length {
            if value.chars().count() > max {
                return Err(format!("{} must be at most {} characters", label, max));
            }
        }
        Ok(())
    }

    fn check_number(&self, value: f64, label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{} must be at least {}", label, min));
            }
        }
        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{} must be at most {}", label, max));
            }
        }
        Ok(())
    }
}

/// Validate one field's current value against its descriptor
pub fn validate_field(field: &FieldDescriptor, value: Option<&Value>) -> Result<(), String> {
    let rules = &field.rules;
    let label = field.label.as_str();

    match field.kind {
        FieldKind::Checkbox => {
            let checked = matches!(value, Some(Value::Bool(true)));
            if rules.required && !checked {
                return Err(format!("{} must be checked", label));
            }
            Ok(())
        }
        FieldKind::Number | FieldKind::CompositeUnit => {
            let text = value_as_text(value);
            if text.trim().is_empty() {
                if rules.required {
                    return Err(format!("{} is required", label));
                }
                return Ok(());
            }
            let parsed: f64 = match value {
                Some(Value::Number(n)) => n.as_f64().unwrap_or(f64::NAN),
                _ => text.trim().parse().unwrap_or(f64::NAN),
            };
            if parsed.is_nan() {
                return Err(format!("{} must be a number", label));
            }
            rules.check_number(parsed, label)
        }
        FieldKind::Text
        | FieldKind::Textarea
        | FieldKind::Date
        | FieldKind::Select
        | FieldKind::Radio
        | FieldKind::File => rules.check_string(&value_as_text(value), label),
    }
}

/// Validate a whole section's fields against its form state
///
/// Returns all failures at once so the renderer can show every message
/// inline. Disabled fields are skipped; they cannot be edited to a valid
/// value anyway.
pub fn validate_form(fields: &[FieldDescriptor], state: &FormState) -> Result<(), FormErrors> {
    let mut errors = FormErrors::new();

    for field in fields {
        if field.disabled {
            continue;
        }
        if let Err(message) = validate_field(field, state.get(&field.name)) {
            errors.insert(field.name.clone(), message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn value_as_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn state_with(pairs: &[(&str, Value)]) -> FormState {
        let mut state = FormState::new();
        for (key, value) in pairs {
            state.set(key, value.clone());
        }
        state
    }

    #[test]
    fn required_text_rejects_blank() {
        let field = FieldDescriptor::text("origin", "Origin").required();
        assert!(validate_field(&field, Some(&json!(""))).is_err());
        assert!(validate_field(&field, Some(&json!("  "))).is_err());
        assert!(validate_field(&field, None).is_err());
        assert!(validate_field(&field, Some(&json!("Rotterdam"))).is_ok());
    }

    #[test]
    fn optional_empty_number_passes() {
        let field = FieldDescriptor::number("pallets", "Pallets");
        assert!(validate_field(&field, None).is_ok());
        assert!(validate_field(&field, Some(&json!(""))).is_ok());
    }

    #[test]
    fn number_rejects_garbage_and_range() {
        let field = FieldDescriptor::number("weight", "Weight")
            .with_rules(ValidationRules::range(0.0, 30000.0));
        assert!(validate_field(&field, Some(&json!("heavy"))).is_err());
        assert!(validate_field(&field, Some(&json!("-5"))).is_err());
        assert!(validate_field(&field, Some(&json!("30001"))).is_err());
        assert!(validate_field(&field, Some(&json!("450.5"))).is_ok());
        assert!(validate_field(&field, Some(&json!(450.5))).is_ok());
    }

    #[test]
    fn required_checkbox_must_be_checked() {
        let field = FieldDescriptor::checkbox("terms", "Accept terms").required();
        assert!(validate_field(&field, Some(&json!(false))).is_err());
        assert!(validate_field(&field, Some(&json!(true))).is_ok());
    }

    #[test]
    fn validate_form_collects_all_errors_and_skips_disabled() {
        let fields = vec![
            FieldDescriptor::text("origin", "Origin").required(),
            FieldDescriptor::text("destination", "Destination").required(),
            FieldDescriptor::text("internal_ref", "Internal ref")
                .required()
                .readonly(),
        ];
        let state = state_with(&[("origin", json!(""))]);

        let errors = validate_form(&fields, &state).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_key("origin"));
        assert!(errors.contains_key("destination"));
        assert!(!errors.contains_key("internal_ref"));
    }

    #[test]
    fn required_select_goes_from_placeholder_to_valid() {
        use crate::shared::forms::descriptor::SelectOption;

        let fields = vec![FieldDescriptor::select(
            "mode",
            "Transport mode",
            vec![SelectOption::plain("ocean"), SelectOption::plain("air")],
        )
        .required()];
        let mut state = FormState::for_fields(&fields);

        // Seeded state holds the empty placeholder value
        let errors = validate_form(&fields, &state).unwrap_err();
        assert!(errors.contains_key("mode"));

        state.set_text("mode", "ocean");
        assert!(validate_form(&fields, &state).is_ok());
    }

    #[test]
    fn valid_form_passes() {
        let fields = vec![
            FieldDescriptor::text("origin", "Origin").required(),
            FieldDescriptor::number("weight", "Weight"),
        ];
        let state = state_with(&[("origin", json!("Hamburg")), ("weight", json!("1200"))]);
        assert!(validate_form(&fields, &state).is_ok());
    }
}
