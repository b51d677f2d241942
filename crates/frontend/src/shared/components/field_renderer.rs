//! Declarative field-to-widget renderer
//!
//! Maps a [`FieldDescriptor`] to a concrete input control bound to the
//! section's form state. Dispatch is an exhaustive match over
//! [`FieldKind`], one arm per kind; adding a kind fails compilation here
//! until it gets a renderer.
//!
//! Controlled-component discipline throughout: the displayed value is
//! derived from form state, and every change writes back through the state
//! signal. Editing a field clears that field's validation error; errors
//! only ever block submit, never typing.

use std::collections::HashSet;

use contracts::shared::forms::{FieldDescriptor, FieldKind, FormErrors, FormState};
use leptos::prelude::*;
use serde_json::Value;

use super::ui::file_input::FileMeta;
use super::ui::{Checkbox, FileInput, Input, RadioGroup, Select, Textarea};

#[component]
pub fn FieldRenderer(
    /// Descriptor of the control to render
    field: FieldDescriptor,
    /// Form state owned by the enclosing section
    state: RwSignal<FormState>,
    /// Per-field validation errors of the enclosing section
    errors: RwSignal<FormErrors>,
    /// Computed disable set, re-evaluated whenever sibling fields change.
    /// Pages derive this from a pure `state -> set` function.
    #[prop(optional, into)]
    disabled_fields: Option<Signal<HashSet<String>>>,
) -> impl IntoView {
    let name = field.name.clone();

    let text_value = {
        let name = name.clone();
        Signal::derive(move || state.with(|s| s.text(&name)))
    };

    let error = {
        let name = name.clone();
        Signal::derive(move || errors.with(|e| e.get(&name).cloned()))
    };

    let statically_disabled = field.disabled;
    let disabled = {
        let name = name.clone();
        Signal::derive(move || {
            statically_disabled
                || disabled_fields
                    .map(|set| set.with(|s| s.contains(&name)))
                    .unwrap_or(false)
        })
    };

    let write_text = {
        let name = name.clone();
        Callback::new(move |value: String| {
            state.update(|s| s.set_text(&name, value));
            errors.update(|e| {
                e.remove(&name);
            });
        })
    };

    match field.kind {
        FieldKind::Text | FieldKind::Number | FieldKind::Date => {
            let input_type = match field.kind {
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                _ => "text",
            };
            view! {
                <Input
                    label=field.label
                    value=text_value
                    on_input=write_text
                    input_type=input_type.to_string()
                    placeholder=field.placeholder.unwrap_or_default()
                    disabled=disabled
                    required=field.rules.required
                    error=error
                />
            }
            .into_any()
        }
        FieldKind::Textarea => view! {
            <Textarea
                label=field.label
                value=text_value
                on_input=write_text
                placeholder=field.placeholder.unwrap_or_default()
                disabled=disabled
                error=error
            />
        }
        .into_any(),
        FieldKind::Select => {
            let pairs = field.option_pairs();
            view! {
                <Select
                    label=field.label
                    value=text_value
                    on_change=write_text
                    options=Signal::derive(move || pairs.clone())
                    placeholder=field.placeholder.unwrap_or_default()
                    disabled=disabled
                    error=error
                />
            }
            .into_any()
        }
        FieldKind::Radio => {
            let pairs = field.option_pairs();
            view! {
                <RadioGroup
                    label=field.label
                    value=text_value
                    on_change=write_text
                    name=field.name
                    options=Signal::derive(move || pairs.clone())
                    disabled=disabled
                    error=error
                />
            }
            .into_any()
        }
        FieldKind::Checkbox => {
            let checked = {
                let name = name.clone();
                Signal::derive(move || state.with(|s| s.flag(&name)))
            };
            let write_flag = {
                let name = name.clone();
                Callback::new(move |value: bool| {
                    state.update(|s| s.set_flag(&name, value));
                    errors.update(|e| {
                        e.remove(&name);
                    });
                })
            };
            view! {
                <Checkbox
                    label=field.label
                    checked=checked
                    on_change=write_flag
                    disabled=disabled
                    error=error
                />
            }
            .into_any()
        }
        FieldKind::File => {
            let selected = {
                let name = name.clone();
                Signal::derive(move || {
                    state.with(|s| {
                        s.get(&name)
                            .and_then(|v| serde_json::from_value::<FileMeta>(v.clone()).ok())
                    })
                })
            };
            let write_meta = {
                let name = name.clone();
                Callback::new(move |meta: Option<FileMeta>| {
                    let value = meta
                        .and_then(|m| serde_json::to_value(m).ok())
                        .unwrap_or(Value::Null);
                    state.update(|s| s.set(&name, value));
                    errors.update(|e| {
                        e.remove(&name);
                    });
                })
            };
            view! {
                <FileInput
                    label=field.label
                    value=selected
                    on_select=write_meta
                    disabled=disabled
                    error=error
                />
            }
            .into_any()
        }
        FieldKind::CompositeUnit => {
            let unit_key = field
                .unit_name
                .clone()
                .unwrap_or_else(|| format!("{}_unit", field.name));
            let unit_value = {
                let unit_key = unit_key.clone();
                Signal::derive(move || state.with(|s| s.text(&unit_key)))
            };
            // The unit selector writes its own key and leaves the numeric
            // value (and its error) alone.
            let write_unit = Callback::new(move |value: String| {
                state.update(|s| s.set_text(&unit_key, value));
            });
            let unit_pairs = field.unit_option_pairs();
            view! {
                <div class="form__composite">
                    <Input
                        label=field.label
                        value=text_value
                        on_input=write_text
                        input_type="number".to_string()
                        placeholder=field.placeholder.unwrap_or_default()
                        disabled=disabled
                        required=field.rules.required
                        error=error
                        class="form__composite-value".to_string()
                    />
                    <Select
                        value=unit_value
                        on_change=write_unit
                        options=Signal::derive(move || unit_pairs.clone())
                        disabled=disabled
                    />
                </div>
            }
            .into_any()
        }
    }
}
