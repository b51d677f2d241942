//! Field declarations for the booking form
//!
//! Pure descriptor sets plus the computed-disable and pre-submit helpers,
//! kept out of the view so they stay host-testable.

use std::collections::HashSet;

use contracts::shared::forms::{FieldDescriptor, FormState, SelectOption, ValidationRules};

use crate::shared::components::ui::FileMeta;

pub const HAZMAT_FLAG: &str = "hazmat";
pub const HAZMAT_CLASS: &str = "hazmat_class";
pub const DOCUMENT_FIELD: &str = "document";

/// Attachments above this size are rejected before submit
pub const MAX_DOCUMENT_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

pub fn shipment_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text("booking_number", "Booking number")
            .required()
            .with_placeholder("BKG-2026-0001"),
        FieldDescriptor::text("customer_code", "Customer code")
            .readonly()
            .with_placeholder("Pick from reference"),
        FieldDescriptor::text("customer_name", "Customer name").readonly(),
        FieldDescriptor::select(
            "mode",
            "Transport mode",
            vec![
                SelectOption::new("ocean", "Ocean"),
                SelectOption::new("air", "Air"),
                SelectOption::new("road", "Road"),
            ],
        )
        .required(),
        FieldDescriptor::select(
            "incoterms",
            "Incoterms",
            vec![
                SelectOption::plain("EXW"),
                SelectOption::plain("FOB"),
                SelectOption::plain("CIF"),
                SelectOption::plain("DAP"),
            ],
        ),
        FieldDescriptor::date("departure_date", "Departure").required(),
        FieldDescriptor::date("arrival_date", "Arrival"),
    ]
}

pub fn cargo_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text("commodity", "Commodity").required(),
        FieldDescriptor::composite_unit(
            "weight",
            "Gross weight",
            "weight_unit",
            vec![SelectOption::plain("kg"), SelectOption::plain("lb")],
        )
        .with_rules(ValidationRules::range(0.0, 45_000.0)),
        FieldDescriptor::number("volume_m3", "Volume (m3)")
            .with_rules(ValidationRules::range(0.0, 100.0)),
        FieldDescriptor::number("packages", "Packages"),
        FieldDescriptor::checkbox(HAZMAT_FLAG, "Dangerous goods"),
        FieldDescriptor::select(
            HAZMAT_CLASS,
            "IMO class",
            vec![
                SelectOption::plain("1"),
                SelectOption::plain("2"),
                SelectOption::plain("3"),
                SelectOption::plain("8"),
                SelectOption::plain("9"),
            ],
        ),
    ]
}

/// One address block; shipper and consignee differ only by key prefix
pub fn address_fields(prefix: &str) -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::text(format!("{prefix}_name"), "Company").required(),
        FieldDescriptor::text(format!("{prefix}_street"), "Street"),
        FieldDescriptor::text(format!("{prefix}_city"), "City").required(),
        FieldDescriptor::text(format!("{prefix}_postal_code"), "Postal code"),
        FieldDescriptor::text(format!("{prefix}_country"), "Country").required(),
        FieldDescriptor::text(format!("{prefix}_contact"), "Contact"),
    ]
}

pub fn parties_fields() -> Vec<FieldDescriptor> {
    let mut fields = address_fields("shipper");
    fields.extend(address_fields("consignee"));
    fields
}

pub fn document_fields() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::select(
            "doc_type",
            "Document type",
            vec![
                SelectOption::new("bol", "Bill of lading"),
                SelectOption::new("invoice", "Commercial invoice"),
                SelectOption::new("packing", "Packing list"),
            ],
        )
        .required(),
        FieldDescriptor::file(DOCUMENT_FIELD, "Attachment").required(),
        FieldDescriptor::textarea("doc_notes", "Notes")
            .with_rules(ValidationRules::none().with_max_length(500)),
    ]
}

/// Hazmat class stays disabled until the hazmat checkbox is set
pub fn hazmat_disabled(state: &FormState) -> HashSet<String> {
    if state.flag(HAZMAT_FLAG) {
        HashSet::new()
    } else {
        HashSet::from([HAZMAT_CLASS.to_string()])
    }
}

/// Pre-submit size check on the attached document metadata
pub fn document_size_error(state: &FormState) -> Option<String> {
    let meta: FileMeta = serde_json::from_value(state.get(DOCUMENT_FIELD)?.clone()).ok()?;
    (meta.size > MAX_DOCUMENT_BYTES).then(|| {
        format!(
            "File is too large ({:.1} MB, limit {:.0} MB)",
            meta.size / (1024.0 * 1024.0),
            MAX_DOCUMENT_BYTES / (1024.0 * 1024.0)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::forms::validate_descriptors;
    use serde_json::json;

    #[test]
    fn all_sections_pass_descriptor_validation() {
        for fields in [
            shipment_fields(),
            cargo_fields(),
            parties_fields(),
            document_fields(),
        ] {
            assert!(validate_descriptors(&fields).is_empty());
        }
    }

    #[test]
    fn address_factory_prefixes_every_key() {
        let fields = address_fields("consignee");
        assert!(fields.iter().all(|f| f.name.starts_with("consignee_")));
    }

    #[test]
    fn hazmat_class_tracks_the_flag() {
        let mut state = FormState::for_fields(&cargo_fields());
        assert!(hazmat_disabled(&state).contains(HAZMAT_CLASS));

        state.set_flag(HAZMAT_FLAG, true);
        assert!(hazmat_disabled(&state).is_empty());
    }

    #[test]
    fn oversized_document_is_rejected() {
        let mut state = FormState::for_fields(&document_fields());
        state.set(
            DOCUMENT_FIELD,
            json!({"name": "manifest.pdf", "size": 11.0 * 1024.0 * 1024.0, "type": "application/pdf"}),
        );
        assert!(document_size_error(&state).is_some());

        state.set(
            DOCUMENT_FIELD,
            json!({"name": "manifest.pdf", "size": 512.0, "type": "application/pdf"}),
        );
        assert_eq!(document_size_error(&state), None);
    }
}
