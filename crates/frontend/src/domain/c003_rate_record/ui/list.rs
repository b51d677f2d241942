//! Lane rates list
//!
//! Columns come from the fixture envelope; the page owns the row array and
//! applies every mutation itself (delete, bulk delete, add-row).

use std::collections::HashSet;

use contracts::domain::c003_rate_record::RateRecord;
use contracts::shared::tables::{
    delete_row, delete_rows, ColumnDescriptor, RowAction, TableFixture, TableRow as DataRow,
};
use leptos::prelude::*;

use crate::shared::components::table::TableListRenderer;
use crate::shared::components::ui::Button;
use crate::shared::fixtures::fetch_fixture;
use crate::shared::icons::icon;

#[component]
pub fn RateRecordList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<DataRow>>(Vec::new());
    let (columns, set_columns) = signal::<Vec<ColumnDescriptor>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let selected = RwSignal::new(HashSet::<String>::new());

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_fixture::<TableFixture>("rate_records.json").await {
            Ok(fixture) => {
                let (headers, rows) = fixture.into_parts();
                set_columns.set(headers);
                set_items.set(rows);
                set_error.set(None);
            }
            Err(e) => {
                log::error!("rate_records fixture: {e}");
                set_error.set(Some(e));
            }
        }
    });

    let handle_action = Callback::new(move |(action, row): (RowAction, DataRow)| match action {
        RowAction::Delete => {
            set_items.update(|rows| delete_row(rows, &row.id));
            selected.update(|s| {
                s.remove(&row.id);
            });
        }
        RowAction::Edit => log::info!("edit rate record {}", row.id),
        RowAction::View => log::info!("view rate record {}", row.id),
        RowAction::Custom(name) => log::info!("{name} rate record {}", row.id),
    });

    let handle_add = Callback::new(move |_: leptos::ev::MouseEvent| {
        let record = RateRecord {
            id: Some(uuid::Uuid::new_v4().to_string()),
            origin: "New origin".to_string(),
            destination: "New destination".to_string(),
            mode: "Ocean".to_string(),
            rate: 0.0,
            currency: "USD".to_string(),
            valid_from: None,
        };
        set_items.update(|rows| rows.push(record.into()));
    });

    let delete_selected = Callback::new(move |_: leptos::ev::MouseEvent| {
        let ids = selected.get();
        if ids.is_empty() {
            return;
        }
        set_items.update(|rows| delete_rows(rows, &ids));
        selected.update(|s| s.clear());
    });

    let export_stub = Callback::new(move |_: leptos::ev::MouseEvent| {
        log::info!(
            "export requested, {} row(s) selected",
            selected.get().len()
        );
    });

    let toolbar: ChildrenFn = std::sync::Arc::new(move || {
        view! {
            <Button variant="ghost" size="sm" on_click=export_stub>
                {icon("download")}
                "Export"
            </Button>
        }
        .into_any()
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Rate records"</h1>
                </div>
                <div class="header__actions">
                    <Button variant="primary" on_click=handle_add>
                        {icon("plus")}
                        "Add rate"
                    </Button>
                    <Button
                        variant="secondary"
                        disabled=Signal::derive(move || selected.get().is_empty())
                        on_click=delete_selected
                    >
                        {icon("trash")}
                        {move || format!("Delete ({})", selected.get().len())}
                    </Button>
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
                actions=vec![RowAction::Edit, RowAction::Delete]
                on_action=handle_action
                selected=selected
                toolbar=toolbar
            />
        </div>
    }
}
