//! Sortable table header cell
//!
//! Adds the sort indicator (▲▼) and dispatches clicks to the owning
//! table's sort toggle.

use leptos::prelude::*;
use thaw::*;

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};

#[component]
pub fn SortableHeaderCell(
    /// Header label
    #[prop(into)]
    label: String,

    /// Accessor key this header sorts on
    #[prop(into)]
    sort_key: String,

    /// Currently active sort key, if any
    #[prop(into)]
    current_sort_key: Signal<Option<String>>,

    /// Current sort direction
    #[prop(into)]
    sort_ascending: Signal<bool>,

    /// Callback when the header is clicked
    on_sort: Callback<String>,

    /// Minimum column width
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Whether the column can be resized
    #[prop(optional, default = true)]
    resizable: bool,
) -> impl IntoView {
    let sort_key_for_click = sort_key.clone();
    let sort_key_for_indicator = sort_key.clone();
    let sort_key_for_class = sort_key.clone();

    let handle_click = move |_| {
        on_sort.run(sort_key_for_click.clone());
    };

    view! {
        <TableHeaderCell resizable=resizable min_width=min_width class="resizable">
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px; max-width: calc(100% - 12px);"
                on:click=handle_click
            >
                {label}
                <span class=move || {
                    get_sort_class(current_sort_key.get().as_deref(), &sort_key_for_class)
                }>
                    {move || {
                        get_sort_indicator(
                            current_sort_key.get().as_deref(),
                            &sort_key_for_indicator,
                            sort_ascending.get(),
                        )
                    }}
                </span>
            </div>
        </TableHeaderCell>
    }
}
