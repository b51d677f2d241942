//! Modal reference picker
//!
//! A dialog presenting a searchable, paginated reference list with
//! single-row selection (radio semantics: picking a row deselects the
//! previous one). Confirm invokes `on_select` exactly once with the full
//! row and closes; Close (or Escape, or the overlay) discards without
//! calling back. Double-clicking a row confirms it directly.

use contracts::shared::tables::{apply_query, ColumnDescriptor, TableQuery, TableRow as DataRow};
use leptos::prelude::*;

use super::pagination_controls::PaginationControls;
use super::search_input::SearchInput;
use crate::shared::components::ui::Button;
use crate::shared::modal::Modal;

#[component]
pub fn ModalPicker(
    /// Dialog title
    title: String,

    /// Reference rows to choose from
    #[prop(into)]
    rows: Signal<Vec<DataRow>>,

    /// Columns of the reference list
    columns: Vec<ColumnDescriptor>,

    /// Row that should start selected (e.g. the field's current value)
    #[prop(optional_no_strip)]
    initial_selected_id: Option<String>,

    /// Callback when a row is confirmed
    on_select: Callback<DataRow>,

    /// Callback when the dialog is dismissed
    on_close: Callback<()>,

    /// Loading indicator while the reference fixture is in flight
    #[prop(optional, into)]
    loading: MaybeProp<bool>,

    /// Load error, shown instead of the list
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let selected_id = RwSignal::new(initial_selected_id);
    let query = RwSignal::new(TableQuery::default());

    let columns_for_view = columns.clone();
    let page_view = Signal::derive(move || {
        rows.with(|rows| apply_query(rows, &columns_for_view, &query.get()))
    });

    let search_value = Signal::derive(move || query.with(|q| q.search.clone()));
    let handle_search = Callback::new(move |term: String| {
        query.update(|q| *q = q.clone().with_search(term));
    });

    let current_page = Signal::derive(move || page_view.with(|v| v.page));
    let total_pages = Signal::derive(move || page_view.with(|v| v.page_count));
    let total_count = Signal::derive(move || page_view.with(|v| v.total));
    let page_size = Signal::derive(move || query.with(|q| q.page_size));
    let handle_page_change = Callback::new(move |page: usize| {
        query.update(|q| q.page = page);
    });
    let handle_page_size_change = Callback::new(move |size: usize| {
        query.update(|q| *q = q.clone().with_page_size(size));
    });

    // Confirm resolves against the full row set, not the current page
    let confirm_selection = Callback::new(move |_: ()| {
        let Some(id) = selected_id.get() else {
            return;
        };
        let picked = rows.with(|rows| rows.iter().find(|r| r.id == id).cloned());
        if let Some(row) = picked {
            on_select.run(row);
            on_close.run(());
        }
    });

    let columns_for_header = columns.clone();
    let columns_for_body = columns;

    let footer: ChildrenFn = std::sync::Arc::new({
        let confirm = confirm_selection;
        move || {
            view! {
                <Button
                    variant="primary"
                    disabled=Signal::derive(move || selected_id.get().is_none())
                    on_click=Callback::new(move |_| confirm.run(()))
                >
                    "Select"
                </Button>
                <Button variant="secondary" on_click=Callback::new(move |_| on_close.run(()))>
                    "Close"
                </Button>
            }
            .into_any()
        }
    });

    view! {
        <Modal title=title on_close=on_close footer=footer>
            <div class="picker">
                <div class="picker__toolbar">
                    <SearchInput value=search_value on_change=handle_search />
                </div>

                {move || {
                    if loading.get().unwrap_or(false) {
                        return view! { <div class="picker__loading">"Loading..."</div> }
                            .into_any();
                    }
                    if let Some(message) = error.get() {
                        return view! {
                            <div class="picker__error">
                                <p>"Failed to load: " {message}</p>
                            </div>
                        }
                        .into_any();
                    }

                    let visible = page_view.with(|v| v.rows.clone());
                    if visible.is_empty() {
                        return view! {
                            <div class="picker__empty">"No matching entries"</div>
                        }
                        .into_any();
                    }

                    let header_cells = columns_for_header
                        .iter()
                        .map(|column| view! { <th>{column.header.clone()}</th> })
                        .collect_view();

                    let body_rows = visible
                        .into_iter()
                        .map(|row| {
                            let row_id = row.id.clone();
                            let row_id_for_click = row.id.clone();
                            let row_id_for_checked = row.id.clone();
                            let row_for_dblclick = row.clone();
                            let cells = columns_for_body
                                .iter()
                                .map(|column| {
                                    let text = row.cell_text(&column.accessor_key);
                                    view! { <td>{text}</td> }
                                })
                                .collect_view();

                            view! {
                                <tr
                                    class="picker__row"
                                    class:selected=move || {
                                        selected_id.get().as_deref()
                                            == Some(row_id_for_checked.as_str())
                                    }
                                    on:click=move |_| {
                                        selected_id.set(Some(row_id_for_click.clone()))
                                    }
                                    on:dblclick=move |_| {
                                        selected_id.set(Some(row_for_dblclick.id.clone()));
                                        on_select.run(row_for_dblclick.clone());
                                        on_close.run(());
                                    }
                                >
                                    <td class="picker__radio-cell">
                                        <input
                                            type="radio"
                                            name="picker-selection"
                                            prop:checked=move || {
                                                selected_id.get().as_deref() == Some(row_id.as_str())
                                            }
                                        />
                                    </td>
                                    {cells}
                                </tr>
                            }
                        })
                        .collect_view();

                    view! {
                        <table class="picker__table">
                            <thead>
                                <tr>
                                    <th class="picker__radio-cell"></th>
                                    {header_cells}
                                </tr>
                            </thead>
                            <tbody>{body_rows}</tbody>
                        </table>
                    }
                    .into_any()
                }}

                <PaginationControls
                    current_page=current_page
                    total_pages=total_pages
                    total_count=total_count
                    page_size=page_size
                    on_page_change=handle_page_change
                    on_page_size_change=handle_page_size_change
                />
            </div>
        </Modal>
    }
}
