//! Selection checkbox cell for one table row

use std::collections::HashSet;

use leptos::prelude::*;
use thaw::*;

/// Checkbox cell reflecting a row's membership in the shared selection set.
/// Clicks never propagate to the row itself.
#[component]
pub fn TableCellCheckbox(
    /// ID of the row this cell belongs to
    #[prop(into)]
    row_id: String,

    /// Selected row ids
    #[prop(into)]
    selected: Signal<HashSet<String>>,

    /// Callback when the checkbox changes: (row_id, checked)
    on_change: Callback<(String, bool)>,
) -> impl IntoView {
    let row_id_for_checked = row_id.clone();
    let row_id_for_change = row_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selected.get().contains(&row_id_for_checked)
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((row_id_for_change.clone(), checked));
                }
            />
        </TableCell>
    }
}
