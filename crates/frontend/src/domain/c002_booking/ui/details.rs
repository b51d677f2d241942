//! Booking form page
//!
//! Four collapsible sections over one SectionComposer. Each section owns
//! its state and submit scope; the customer is auto-filled from the modal
//! picker, the hazmat class follows the hazmat checkbox, and the document
//! attachment is size-checked before submit.

use std::sync::Arc;

use contracts::domain::c001_customer::Customer;
use contracts::shared::forms::{FormErrors, FormState, SectionMeta};
use leptos::prelude::*;

use crate::domain::c001_customer::ui::CustomerPicker;
use crate::domain::c002_booking::fields::{
    cargo_fields, document_fields, document_size_error, hazmat_disabled, parties_fields,
    shipment_fields, DOCUMENT_FIELD,
};
use crate::shared::components::field_renderer::FieldRenderer;
use crate::shared::components::section_composer::{
    FormSection, SectionComposer, SectionRender,
};
use crate::shared::components::ui::Button;
use crate::shared::icons::icon;

#[component]
pub fn BookingDetails() -> impl IntoView {
    let shipment_state = RwSignal::new(FormState::for_fields(&shipment_fields()));
    let shipment_errors = RwSignal::new(FormErrors::new());
    let cargo_state = RwSignal::new(FormState::for_fields(&cargo_fields()));
    let cargo_errors = RwSignal::new(FormErrors::new());
    let parties_state = RwSignal::new(FormState::for_fields(&parties_fields()));
    let parties_errors = RwSignal::new(FormErrors::new());
    let documents_state = RwSignal::new(FormState::for_fields(&document_fields()));
    let documents_errors = RwSignal::new(FormErrors::new());

    let show_picker = RwSignal::new(false);

    // Auto-fill wired by the page; sections themselves share nothing
    let handle_pick = Callback::new(move |customer: Customer| {
        shipment_state.update(|s| {
            s.set_text("customer_code", customer.code.clone());
            s.set_text("customer_name", customer.name.clone());
        });
        shipment_errors.update(|e| {
            e.remove("customer_code");
        });
    });

    let log_invalid = Callback::new(move |errors: FormErrors| {
        log::info!("submit blocked, {} field(s) invalid", errors.len());
    });

    let submit_shipment = Callback::new(move |state: FormState| {
        log::info!("shipment saved: {}", state.to_value());
    });
    let submit_cargo = Callback::new(move |state: FormState| {
        log::info!("cargo saved: {}", state.to_value());
    });
    let submit_parties = Callback::new(move |state: FormState| {
        log::info!("parties saved: {}", state.to_value());
    });
    let submit_documents = Callback::new(move |state: FormState| {
        if let Some(message) = document_size_error(&state) {
            documents_errors.update(|e| {
                e.insert(DOCUMENT_FIELD.to_string(), message);
            });
            return;
        }
        log::info!("documents saved: {}", state.to_value());
    });

    // Default grid plus a picker row for the customer fields
    let shipment_render: SectionRender = Arc::new(move |fields, state, errors| {
        let rendered = fields
            .into_iter()
            .map(|field| view! { <FieldRenderer field=field state=state errors=errors /> })
            .collect_view();
        view! {
            {rendered}
            <div class="form__picker-row">
                <Button
                    variant="secondary"
                    size="sm"
                    on_click=Callback::new(move |_| show_picker.set(true))
                >
                    {icon("search")}
                    "Pick customer"
                </Button>
            </div>
        }
        .into_any()
    });

    // Shipper and consignee side by side, split on the key prefix
    let parties_render: SectionRender = Arc::new(|fields, state, errors| {
        let (shipper, consignee): (Vec<_>, Vec<_>) =
            fields.into_iter().partition(|f| f.name.starts_with("shipper"));
        let card = move |title: &'static str, block: Vec<_>| {
            view! {
                <div class="section__card">
                    <h3 class="section__card-title">{title}</h3>
                    {block
                        .into_iter()
                        .map(|field| {
                            view! { <FieldRenderer field=field state=state errors=errors /> }
                        })
                        .collect_view()}
                </div>
            }
        };
        view! {
            <div class="section__columns">
                {card("Shipper", shipper)}
                {card("Consignee", consignee)}
            </div>
        }
        .into_any()
    });

    let cargo_disabled = Signal::derive(move || cargo_state.with(hazmat_disabled));

    let sections = vec![
        FormSection::new(
            SectionMeta::form("shipment", "Shipment"),
            shipment_fields(),
            shipment_state,
            shipment_errors,
            submit_shipment,
        )
        .with_on_invalid(log_invalid)
        .with_render_override(shipment_render),
        FormSection::new(
            SectionMeta::form("cargo", "Cargo"),
            cargo_fields(),
            cargo_state,
            cargo_errors,
            submit_cargo,
        )
        .with_on_invalid(log_invalid)
        .with_disabled_fields(cargo_disabled),
        FormSection::new(
            SectionMeta::form("parties", "Shipper / Consignee"),
            parties_fields(),
            parties_state,
            parties_errors,
            submit_parties,
        )
        .with_on_invalid(log_invalid)
        .with_render_override(parties_render),
        FormSection::new(
            SectionMeta::form("documents", "Documents").collapsed(),
            document_fields(),
            documents_state,
            documents_errors,
            submit_documents,
        )
        .with_on_invalid(log_invalid),
    ];

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Booking"</h1>
                </div>
            </div>

            <SectionComposer sections=sections />

            <Show when=move || show_picker.get()>
                {move || {
                    let initial = shipment_state.with(|s| {
                        let code = s.text("customer_code");
                        (!code.is_empty()).then_some(code)
                    });
                    view! {
                        <CustomerPicker
                            initial_selected_id=initial
                            on_select=handle_pick
                            on_close=Callback::new(move |_| show_picker.set(false))
                        />
                    }
                }}
            </Show>
        </div>
    }
}
