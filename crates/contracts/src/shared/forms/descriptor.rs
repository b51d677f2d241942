//! Declarative field descriptors for metadata-driven forms
//!
//! A page declares its inputs as an array of [`FieldDescriptor`]s and hands
//! them to the frontend field renderer. The renderer dispatches on
//! [`FieldKind`] with an exhaustive match, so adding a kind here forces every
//! renderer to handle it.

use serde::{Deserialize, Serialize};

use super::validation::ValidationRules;

/// Kind of input control a field renders as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Textarea,
    Number,
    Date,
    Select,
    Checkbox,
    Radio,
    File,
    /// Numeric input paired with an adjacent unit selector.
    /// The number is written under `name`, the unit under `unit_name`.
    CompositeUnit,
}

impl FieldKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Number => "number",
            Self::Date => "date",
            Self::Select => "select",
            Self::Checkbox => "checkbox",
            Self::Radio => "radio",
            Self::File => "file",
            Self::CompositeUnit => "composite_unit",
        }
    }

    /// Select and radio controls need a fixed option set
    pub fn needs_options(&self) -> bool {
        matches!(self, Self::Select | Self::Radio)
    }
}

/// One entry of a select/radio option set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label equals its value (the common fixture case)
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Static configuration describing one input control of a form
///
/// `name` must match a key in the bound form state. Option order is
/// preserved exactly as declared; the renderer never sorts it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    #[serde(default)]
    pub options: Vec<SelectOption>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub rules: ValidationRules,
    /// Form-state key of the unit part of a composite-unit field
    #[serde(default)]
    pub unit_name: Option<String>,
    #[serde(default)]
    pub unit_options: Vec<SelectOption>,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            options: Vec::new(),
            disabled: false,
            placeholder: None,
            rules: ValidationRules::none(),
            unit_name: None,
            unit_options: Vec::new(),
        }
    }

    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn textarea(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Textarea)
    }

    pub fn number(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub fn date(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Checkbox)
    }

    pub fn file(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::File)
    }

    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        let mut field = Self::new(name, label, FieldKind::Select);
        field.options = options;
        field
    }

    pub fn radio(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Self {
        let mut field = Self::new(name, label, FieldKind::Radio);
        field.options = options;
        field
    }

    /// Composite numeric value + unit selector, e.g. weight in kg/lb
    pub fn composite_unit(
        name: impl Into<String>,
        label: impl Into<String>,
        unit_name: impl Into<String>,
        unit_options: Vec<SelectOption>,
    ) -> Self {
        let mut field = Self::new(name, label, FieldKind::CompositeUnit);
        field.unit_name = Some(unit_name.into());
        field.unit_options = unit_options;
        field
    }

    pub fn required(mut self) -> Self {
        self.rules.required = true;
        self
    }

    pub fn with_rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn readonly(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Options as (value, label) pairs for select-style UI components
    pub fn option_pairs(&self) -> Vec<(String, String)> {
        self.options
            .iter()
            .map(|o| (o.value.clone(), o.label.clone()))
            .collect()
    }

    pub fn unit_option_pairs(&self) -> Vec<(String, String)> {
        self.unit_options
            .iter()
            .map(|o| (o.value.clone(), o.label.clone()))
            .collect()
    }
}

/// Check structural invariants of a descriptor set
///
/// Returns one message per violation: duplicate names, select/radio without
/// options, composite-unit without a unit key.
pub fn validate_descriptors(fields: &[FieldDescriptor]) -> Vec<String> {
    let mut problems = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for field in fields {
        if !seen.insert(field.name.as_str()) {
            problems.push(format!("duplicate field name '{}'", field.name));
        }
        if field.kind.needs_options() && field.options.is_empty() {
            problems.push(format!(
                "field '{}' is a {} but has no options",
                field.name,
                field.kind.as_str()
            ));
        }
        if field.kind == FieldKind::CompositeUnit {
            if field.unit_name.is_none() {
                problems.push(format!("field '{}' has no unit key", field.name));
            }
            if field.unit_options.is_empty() {
                problems.push(format!("field '{}' has no unit options", field.name));
            }
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_order_is_preserved() {
        let field = FieldDescriptor::select(
            "status",
            "Status",
            vec![
                SelectOption::plain("Active"),
                SelectOption::plain("Inactive"),
                SelectOption::plain("Archived"),
            ],
        );
        let values: Vec<String> = field.option_pairs().into_iter().map(|(v, _)| v).collect();
        assert_eq!(values, vec!["Active", "Inactive", "Archived"]);
    }

    #[test]
    fn select_without_options_is_reported() {
        let fields = vec![FieldDescriptor::new("mode", "Mode", FieldKind::Select)];
        let problems = validate_descriptors(&fields);
        assert_eq!(problems.len(), 1);
        assert!(problems[0].contains("mode"));
    }

    #[test]
    fn duplicate_names_are_reported() {
        let fields = vec![
            FieldDescriptor::text("origin", "Origin"),
            FieldDescriptor::text("origin", "Origin city"),
        ];
        let problems = validate_descriptors(&fields);
        assert_eq!(problems.len(), 1);
    }

    #[test]
    fn composite_unit_needs_unit_key_and_options() {
        let mut field = FieldDescriptor::new("weight", "Weight", FieldKind::CompositeUnit);
        field.unit_options.clear();
        let problems = validate_descriptors(std::slice::from_ref(&field));
        assert_eq!(problems.len(), 2);
    }
}
