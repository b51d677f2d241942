//! Generic table/list renderer
//!
//! Renders a row collection against column descriptors with client-side
//! search, stable sorting, pagination, row selection and row-scoped
//! actions. The renderer owns no data: every mutation (delete, edit, add)
//! is the caller's, dispatched through `on_action`.

use std::collections::HashSet;

use contracts::shared::tables::{
    apply_query, ColumnDescriptor, RowAction, TableQuery, TableRow as DataRow,
};
use leptos::prelude::*;
use thaw::*;

use super::sortable_header_cell::SortableHeaderCell;
use super::table_cell_checkbox::TableCellCheckbox;
use super::table_header_checkbox::TableHeaderCheckbox;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;

fn action_icon(action: &RowAction) -> &'static str {
    match action {
        RowAction::Edit => "pencil",
        RowAction::View => "eye",
        RowAction::Delete => "trash",
        RowAction::Custom(_) => "download",
    }
}

#[component]
pub fn TableListRenderer(
    /// Row collection; the caller mutates it in response to actions
    #[prop(into)]
    rows: Signal<Vec<DataRow>>,

    /// Column descriptors; a missing accessor renders a blank cell
    #[prop(into)]
    columns: Signal<Vec<ColumnDescriptor>>,

    /// Row-scoped action buttons, rendered in declaration order
    #[prop(optional)]
    actions: Vec<RowAction>,

    /// Dispatch for row actions: (action, row)
    #[prop(optional)]
    on_action: Option<Callback<(RowAction, DataRow)>>,

    /// Shared selection set; enables the checkbox column when present
    #[prop(optional)]
    selected: Option<RwSignal<HashSet<String>>>,

    /// Caller-supplied toolbar extras (view toggles, export stubs)
    #[prop(optional)]
    toolbar: Option<ChildrenFn>,
) -> impl IntoView {
    let query = RwSignal::new(TableQuery::default());

    let page_view = Signal::derive(move || {
        rows.with(|rows| columns.with(|columns| apply_query(rows, columns, &query.get())))
    });

    let search_value = Signal::derive(move || query.with(|q| q.search.clone()));
    let handle_search = Callback::new(move |term: String| {
        query.update(|q| *q = q.clone().with_search(term));
    });

    let current_sort_key = Signal::derive(move || query.with(|q| q.sort_key.clone()));
    let sort_ascending = Signal::derive(move || query.with(|q| q.sort_ascending));
    let handle_sort = Callback::new(move |key: String| {
        query.update(|q| *q = q.clone().toggle_sort(&key));
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

    let visible_rows = Signal::derive(move || page_view.with(|v| v.rows.clone()));

    let selection_signal: Option<Signal<HashSet<String>>> = selected.map(Into::into);

    let handle_select_all = selected.map(|selection| {
        Callback::new(move |check_all: bool| {
            let visible = visible_rows.get();
            selection.update(|set| {
                if check_all {
                    for row in &visible {
                        set.insert(row.id.clone());
                    }
                } else {
                    set.clear();
                }
            });
        })
    });

    let handle_toggle_row = selected.map(|selection| {
        Callback::new(move |(id, checked): (String, bool)| {
            selection.update(|set| {
                if checked {
                    set.insert(id);
                } else {
                    set.remove(&id);
                }
            });
        })
    });

    let actions_for_header = actions.clone();
    let has_actions = on_action.is_some() && !actions.is_empty();

    view! {
        <div class="table-list">
            <div class="table-list__toolbar">
                <SearchInput value=search_value on_change=handle_search />
                {toolbar.map(|extras| view! {
                    <div class="table-list__toolbar-extras">{extras()}</div>
                })}
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        {handle_select_all.zip(selection_signal).map(|(on_change, sel)| view! {
                            <TableHeaderCheckbox
                                rows=visible_rows
                                selected=sel
                                on_change=on_change
                            />
                        })}
                        {move || {
                            columns
                                .get()
                                .into_iter()
                                .map(|column| {
                                    if column.sortable {
                                        view! {
                                            <SortableHeaderCell
                                                label=column.header
                                                sort_key=column.accessor_key
                                                current_sort_key=current_sort_key
                                                sort_ascending=sort_ascending
                                                on_sort=handle_sort
                                            />
                                        }
                                        .into_any()
                                    } else {
                                        view! {
                                            <TableHeaderCell>{column.header}</TableHeaderCell>
                                        }
                                        .into_any()
                                    }
                                })
                                .collect_view()
                        }}
                        {has_actions.then(|| view! {
                            <TableHeaderCell attr:style="width: 120px;">"Actions"</TableHeaderCell>
                        })}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let visible = visible_rows.get();
                        let column_set = columns.get();
                        if visible.is_empty() {
                            let span = column_set.len()
                                + usize::from(selected.is_some())
                                + usize::from(has_actions);
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan=span.to_string()>
                                        <div class="table-list__empty">"No data"</div>
                                    </TableCell>
                                </TableRow>
                            }
                            .into_any();
                        }

                        let actions = actions_for_header.clone();
                        visible
                            .into_iter()
                            .map(|row| {
                                let row_cells = column_set
                                    .iter()
                                    .map(|column| {
                                        let text = row.cell_text(&column.accessor_key);
                                        view! { <TableCell>{text}</TableCell> }
                                    })
                                    .collect_view();

                                let action_cell = has_actions.then(|| {
                                    let buttons = actions
                                        .iter()
                                        .cloned()
                                        .map(|action| {
                                            let row = row.clone();
                                            let title = action.name().to_string();
                                            let icon_name = action_icon(&action);
                                            view! {
                                                <button
                                                    class="button button--icon table__action"
                                                    title=title
                                                    on:click=move |_| {
                                                        if let Some(handler) = on_action {
                                                            handler
                                                                .run((action.clone(), row.clone()));
                                                        }
                                                    }
                                                >
                                                    {icon(icon_name)}
                                                </button>
                                            }
                                        })
                                        .collect_view();
                                    view! {
                                        <TableCell class="table__cell--actions">{buttons}</TableCell>
                                    }
                                });

                                let select_cell = handle_toggle_row.zip(selection_signal).map(
                                    |(on_change, sel)| {
                                        view! {
                                            <TableCellCheckbox
                                                row_id=row.id.clone()
                                                selected=sel
                                                on_change=on_change
                                            />
                                        }
                                    },
                                );

                                view! {
                                    <TableRow>
                                        {select_cell}
                                        {row_cells}
                                        {action_cell}
                                    </TableRow>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </TableBody>
            </Table>

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                total_count=total_count
                page_size=page_size
                on_page_change=handle_page_change
                on_page_size_change=handle_page_size_change
            />
        </div>
    }
}
