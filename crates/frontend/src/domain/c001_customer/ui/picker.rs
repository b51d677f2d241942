//! Customer picker: modal reference selection for the booking form

use contracts::domain::c001_customer::Customer;
use contracts::shared::tables::{ColumnDescriptor, TableRow as DataRow};
use leptos::prelude::*;

use crate::shared::components::modal_picker::ModalPicker;
use crate::shared::fixtures::fetch_fixture;

fn picker_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("code", "Code"),
        ColumnDescriptor::new("name", "Name"),
        ColumnDescriptor::new("city", "City"),
        ColumnDescriptor::new("country", "Country"),
    ]
}

#[component]
pub fn CustomerPicker(
    /// Customer that should start selected, by key
    #[prop(optional_no_strip)]
    initial_selected_id: Option<String>,

    /// Callback with the confirmed customer
    on_select: Callback<Customer>,

    /// Callback when the dialog is dismissed
    on_close: Callback<()>,
) -> impl IntoView {
    let (customers, set_customers) = signal::<Vec<Customer>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (loading, set_loading) = signal(true);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_fixture::<Vec<Customer>>("customers.json").await {
            Ok(list) => {
                set_customers.set(list);
                set_error.set(None);
            }
            Err(e) => {
                log::error!("customers fixture: {e}");
                set_error.set(Some(e));
            }
        }
        set_loading.set(false);
    });

    let rows = Signal::derive(move || {
        customers
            .get()
            .into_iter()
            .map(DataRow::from)
            .collect::<Vec<_>>()
    });

    // Row ids are customer keys, so the confirmed row maps back to its DTO
    let handle_select = Callback::new(move |row: DataRow| {
        let picked = customers.with(|list| list.iter().find(|c| c.key() == row.id).cloned());
        if let Some(customer) = picked {
            on_select.run(customer);
        }
    });

    view! {
        <ModalPicker
            title="Select customer".to_string()
            rows=rows
            columns=picker_columns()
            initial_selected_id=initial_selected_id
            on_select=handle_select
            on_close=on_close
            loading=loading
            error=error
        />
    }
}
