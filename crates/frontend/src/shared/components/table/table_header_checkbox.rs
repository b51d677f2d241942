//! Select-all checkbox for the table header
//!
//! Three states: unchecked, checked, indeterminate, computed from the
//! visible rows and the shared selection set.

use std::collections::HashSet;

use contracts::shared::tables::TableRow as DataRow;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn TableHeaderCheckbox(
    /// Rows currently visible in the table
    #[prop(into)]
    rows: Signal<Vec<DataRow>>,

    /// Selected row ids
    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// Callback: true = select all visible, false = clear
    on_change: Callback<bool>,
) -> impl IntoView {
    let selected_count = Signal::derive(move || {
        let sel = selected.get();
        rows.with(|rows| rows.iter().filter(|r| sel.contains(&r.id)).count())
    });
    let row_count = Signal::derive(move || rows.with(|rows| rows.len()));

    let all_selected = move || {
        let total = row_count.get();
        total > 0 && selected_count.get() == total
    };
    let partially_selected = move || {
        let count = selected_count.get();
        count > 0 && count < row_count.get()
    };

    view! {
        <TableHeaderCell class="fixed-checkbox-column">
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=all_selected
                prop:indeterminate=partially_selected
                on:change=move |ev| {
                    on_change.run(event_target_checked(&ev));
                }
            />
        </TableHeaderCell>
    }
}
