//! Customer reference list

use std::collections::HashSet;

use contracts::domain::c001_customer::Customer;
use contracts::shared::tables::{ColumnDescriptor, RowAction, TableRow as DataRow};
use leptos::prelude::*;

use crate::shared::components::table::TableListRenderer;
use crate::shared::fixtures::fetch_fixture;

pub fn customer_columns() -> Vec<ColumnDescriptor> {
    vec![
        ColumnDescriptor::new("code", "Code"),
        ColumnDescriptor::new("name", "Name"),
        ColumnDescriptor::new("city", "City"),
        ColumnDescriptor::new("country", "Country"),
        ColumnDescriptor::new("paymentTerms", "Payment terms"),
        ColumnDescriptor::new("createdAt", "Created"),
    ]
}

#[component]
pub fn CustomerList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<DataRow>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let selected = RwSignal::new(HashSet::<String>::new());
    let columns = RwSignal::new(customer_columns());

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_fixture::<Vec<Customer>>("customers.json").await {
            Ok(customers) => {
                let rows: Vec<DataRow> = customers.into_iter().map(Into::into).collect();
                set_items.set(rows);
                set_error.set(None);
            }
            Err(e) => {
                log::error!("customers fixture: {e}");
                set_error.set(Some(e));
            }
        }
    });

    let handle_action = Callback::new(move |(action, row): (RowAction, DataRow)| {
        if action == RowAction::View {
            log::info!("view customer {}: {}", row.id, row.cell_text("name"));
        }
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Customers"</h1>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <TableListRenderer
                rows=items
                columns=columns
                actions=vec![RowAction::View]
                on_action=handle_action
                selected=selected
            />
        </div>
    }
}
