//! Section composer: titled, independently collapsible form panels
//!
//! Accordion semantics: any subset of sections can be open at once. Each
//! form section owns exactly one form state and one submit scope; submit
//! validates that section's fields only and never touches a sibling.

use std::collections::HashSet;
use std::sync::Arc;

use contracts::shared::forms::{
    validate_form, FieldDescriptor, FormErrors, FormState, SectionKind, SectionMeta,
};
use leptos::prelude::*;

use super::field_renderer::FieldRenderer;
use super::ui::Button;
use crate::shared::icons::icon;

/// Custom body renderer for sections that opt out of the default grid.
/// Receives the section's fields, state and errors so the override can
/// still delegate individual controls to [`FieldRenderer`].
pub type SectionRender = Arc<
    dyn Fn(Vec<FieldDescriptor>, RwSignal<FormState>, RwSignal<FormErrors>) -> AnyView
        + Send
        + Sync,
>;

/// One section of a page: declarative metadata plus the page-owned state
/// and submit wiring.
#[derive(Clone)]
pub struct FormSection {
    pub meta: SectionMeta,
    pub fields: Vec<FieldDescriptor>,
    pub state: RwSignal<FormState>,
    pub errors: RwSignal<FormErrors>,
    /// Called with the section's state after successful validation
    pub on_submit: Callback<FormState>,
    /// Called with the collected errors when validation fails
    pub on_invalid: Option<Callback<FormErrors>>,
    /// Computed disable set passed through to every field
    pub disabled_fields: Option<Signal<HashSet<String>>>,
    /// Full layout override; the default two-column grid otherwise
    pub render_override: Option<SectionRender>,
    /// Label of the submit button ("Save" when empty)
    pub submit_label: String,
}

impl FormSection {
    pub fn new(
        meta: SectionMeta,
        fields: Vec<FieldDescriptor>,
        state: RwSignal<FormState>,
        errors: RwSignal<FormErrors>,
        on_submit: Callback<FormState>,
    ) -> Self {
        Self {
            meta,
            fields,
            state,
            errors,
            on_submit,
            on_invalid: None,
            disabled_fields: None,
            render_override: None,
            submit_label: "Save".to_string(),
        }
    }

    pub fn with_on_invalid(mut self, on_invalid: Callback<FormErrors>) -> Self {
        self.on_invalid = Some(on_invalid);
        self
    }

    pub fn with_disabled_fields(mut self, disabled_fields: Signal<HashSet<String>>) -> Self {
        self.disabled_fields = Some(disabled_fields);
        self
    }

    pub fn with_render_override(mut self, render: SectionRender) -> Self {
        self.render_override = Some(render);
        self
    }

    pub fn with_submit_label(mut self, label: impl Into<String>) -> Self {
        self.submit_label = label.into();
        self
    }
}

#[component]
pub fn SectionComposer(sections: Vec<FormSection>) -> impl IntoView {
    view! {
        <div class="sections">
            {sections
                .into_iter()
                .map(|section| view! { <SectionPanel section=section /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn SectionPanel(section: FormSection) -> impl IntoView {
    let open = RwSignal::new(section.meta.open_by_default);
    let title = section.meta.title.clone();

    let fields_for_submit = section.fields.clone();
    let state = section.state;
    let errors = section.errors;
    let on_submit = section.on_submit;
    let on_invalid = section.on_invalid;

    let handle_submit = Callback::new(move |_ev: leptos::ev::MouseEvent| {
        let snapshot = state.get();
        match validate_form(&fields_for_submit, &snapshot) {
            Ok(()) => {
                errors.set(FormErrors::new());
                on_submit.run(snapshot);
            }
            Err(collected) => {
                errors.set(collected.clone());
                if let Some(handler) = on_invalid {
                    handler.run(collected);
                }
            }
        }
    });

    // Rebuilt on every open toggle; the override closure is shared, not
    // the rendered views.
    let render_override = section.render_override.clone();
    let fields_for_body = section.fields.clone();
    let disabled_fields = section.disabled_fields;
    let make_body = move || match &render_override {
        Some(render) => render(fields_for_body.clone(), state, errors),
        None => fields_for_body
            .iter()
            .cloned()
            .map(|field| match disabled_fields {
                Some(set) => view! {
                    <FieldRenderer field=field state=state errors=errors disabled_fields=set />
                }
                .into_any(),
                None => view! {
                    <FieldRenderer field=field state=state errors=errors />
                }
                .into_any(),
            })
            .collect_view()
            .into_any(),
    };

    let submit_label = section.submit_label.clone();
    // Table/custom sections manage their own actions; only form sections
    // get the submit footer.
    let has_footer = section.meta.kind == SectionKind::Form;

    view! {
        <section class="section" class:section--collapsed=move || !open.get()>
            <button
                class="section__header"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                <span class="section__title">{title}</span>
                <span
                    class="section__chevron"
                    class:section__chevron--open=move || open.get()
                >
                    {icon("chevron-down")}
                </span>
            </button>
            <Show when=move || open.get()>
                <div class="section__body">
                    <div class="section__grid">{make_body()}</div>
                    {has_footer.then(|| {
                        let submit_label = submit_label.clone();
                        view! {
                            <div class="section__footer">
                                <Button variant="primary" on_click=handle_submit>
                                    {submit_label.clone()}
                                </Button>
                            </div>
                        }
                    })}
                </div>
            </Show>
        </section>
    }
}
