//! Client-side list pipeline: search, sort, paginate
//!
//! Everything here is pure and synchronous; the table renderer recomputes
//! the pipeline from its signals on every change.

use std::cmp::Ordering;

use super::descriptor::ColumnDescriptor;
use super::rows::TableRow;

/// Page size choices offered by the pagination controls
pub const PAGE_SIZES: [usize; 3] = [10, 25, 50];

/// Current view parameters of a table. `page` is 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub search: String,
    pub sort_key: Option<String>,
    pub sort_ascending: bool,
    pub page: usize,
    pub page_size: usize,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_key: None,
            sort_ascending: true,
            page: 1,
            page_size: PAGE_SIZES[0],
        }
    }
}

impl TableQuery {
    /// New search term; current page resets to 1
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self.page = 1;
        self
    }

    /// New page size; current page resets to 1
    pub fn with_page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self.page = 1;
        self
    }

    /// Toggle sorting: same key flips direction, a new key sorts ascending
    pub fn toggle_sort(mut self, key: &str) -> Self {
        if self.sort_key.as_deref() == Some(key) {
            self.sort_ascending = !self.sort_ascending;
        } else {
            self.sort_key = Some(key.to_string());
            self.sort_ascending = true;
        }
        self
    }
}

/// One computed page of a table
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub rows: Vec<TableRow>,
    /// Rows remaining after the filter, before slicing
    pub total: usize,
    /// Clamped current page (1-based)
    pub page: usize,
    pub page_count: usize,
}

/// Case-insensitive substring match across all column accessor values.
/// A blank term returns the input unchanged, so clearing the search box
/// restores the full set.
pub fn filter_rows(
    rows: &[TableRow],
    columns: &[ColumnDescriptor],
    term: &str,
) -> Vec<TableRow> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return rows.to_vec();
    }

    rows.iter()
        .filter(|row| {
            columns.iter().any(|column| {
                row.cell_text(&column.accessor_key)
                    .to_lowercase()
                    .contains(&needle)
            })
        })
        .cloned()
        .collect()
}

/// Stable sort on one column. Every cell maps to a single sort key before
/// comparison: numeric cells order numerically and sort ahead of text
/// cells, text compares case-insensitively. The key is total, so a column
/// mixing numbers and text still sorts without panicking. Descending is
/// the exact reverse of ascending.
pub fn sort_rows(rows: &mut [TableRow], key: &str, ascending: bool) {
    rows.sort_by(|a, b| {
        let ordering = compare_cells(a, b, key);
        if ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });
}

enum CellKey {
    Num(f64),
    Text(String),
}

fn cell_key(row: &TableRow, key: &str) -> CellKey {
    match row.cell_number(key) {
        Some(n) => CellKey::Num(n),
        None => CellKey::Text(row.cell_text(key).to_lowercase()),
    }
}

fn compare_cells(a: &TableRow, b: &TableRow, key: &str) -> Ordering {
    match (cell_key(a, key), cell_key(b, key)) {
        (CellKey::Num(x), CellKey::Num(y)) => x.total_cmp(&y),
        (CellKey::Num(_), CellKey::Text(_)) => Ordering::Less,
        (CellKey::Text(_), CellKey::Num(_)) => Ordering::Greater,
        (CellKey::Text(x), CellKey::Text(y)) => x.cmp(&y),
    }
}

/// `ceil(total / page_size)`; zero only when there are no rows
pub fn page_count(total: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

/// Clamp a 1-based page into `[1, page_count]` (an empty set still shows
/// page 1 of 1)
pub fn clamp_page(page: usize, total: usize, page_size: usize) -> usize {
    page.max(1).min(page_count(total, page_size).max(1))
}

/// Compose filter -> sort -> clamp -> slice
///
/// Sorting is applied only when the query's key names a column declared
/// sortable; stale keys from a previous column set are ignored.
pub fn apply_query(
    rows: &[TableRow],
    columns: &[ColumnDescriptor],
    query: &TableQuery,
) -> PageView {
    let mut filtered = filter_rows(rows, columns, &query.search);

    if let Some(key) = &query.sort_key {
        let sortable = columns
            .iter()
            .any(|c| c.sortable && &c.accessor_key == key);
        if sortable {
            sort_rows(&mut filtered, key, query.sort_ascending);
        }
    }

    let total = filtered.len();
    let page = clamp_page(query.page, total, query.page_size);
    let start = (page - 1) * query.page_size;
    let rows = filtered
        .into_iter()
        .skip(start)
        .take(query.page_size)
        .collect();

    PageView {
        rows,
        total,
        page,
        page_count: page_count(total, query.page_size),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::tables::rows::assign_row_ids;
    use serde_json::{json, Map, Value};

    fn lanes() -> (Vec<TableRow>, Vec<ColumnDescriptor>) {
        let raw: Vec<Map<String, Value>> = [
            json!({"lane": "HAM-RTM", "carrier": "Nordfracht", "rate": 1250.0}),
            json!({"lane": "RTM-ANR", "carrier": "Beneluxline", "rate": 480.0}),
            json!({"lane": "ANR-HAM", "carrier": "nordfracht", "rate": 1190.0}),
            json!({"lane": "HAM-CPH", "carrier": "Baltic Cargo", "rate": 900.0}),
        ]
        .into_iter()
        .map(|v| match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        })
        .collect();

        let columns = vec![
            ColumnDescriptor::new("lane", "Lane"),
            ColumnDescriptor::new("carrier", "Carrier"),
            ColumnDescriptor::new("rate", "Rate"),
        ];
        (assign_row_ids(raw), columns)
    }

    #[test]
    fn search_is_case_insensitive_substring_over_all_columns() {
        let (rows, columns) = lanes();
        let hits = filter_rows(&rows, &columns, "nordfracht");

        assert_eq!(hits.len(), 2);
        for row in &hits {
            let witness = columns.iter().any(|c| {
                row.cell_text(&c.accessor_key)
                    .to_lowercase()
                    .contains("nordfracht")
            });
            assert!(witness);
        }
    }

    #[test]
    fn blank_search_restores_full_set() {
        let (rows, columns) = lanes();
        let narrowed = filter_rows(&rows, &columns, "baltic");
        assert_eq!(narrowed.len(), 1);

        let restored = filter_rows(&rows, &columns, "");
        assert_eq!(restored, rows);
        assert_eq!(filter_rows(&rows, &columns, "   "), rows);
    }

    #[test]
    fn numeric_column_sorts_numerically() {
        let (mut rows, _) = lanes();
        sort_rows(&mut rows, "rate", true);
        let rates: Vec<String> = rows.iter().map(|r| r.cell_text("rate")).collect();
        assert_eq!(rates, vec!["480.0", "900.0", "1190.0", "1250.0"]);

        sort_rows(&mut rows, "rate", false);
        assert_eq!(rows[0].cell_text("rate"), "1250.0");
    }

    #[test]
    fn text_sort_ignores_case() {
        let (mut rows, _) = lanes();
        sort_rows(&mut rows, "carrier", true);
        let carriers: Vec<String> = rows.iter().map(|r| r.cell_text("carrier")).collect();
        assert_eq!(
            carriers,
            vec!["Baltic Cargo", "Beneluxline", "Nordfracht", "nordfracht"]
        );
    }

    #[test]
    fn mixed_numeric_and_text_column_sorts_without_panicking() {
        // Rates exported by hand often mix plain numbers with entries
        // like "120x" or "N/A"; sorting must stay a total order.
        let raw: Vec<Map<String, Value>> = (0..40)
            .map(|i| {
                let rate = if i % 2 == 0 {
                    json!(i)
                } else {
                    json!(format!("{i}x"))
                };
                match json!({"rate": rate}) {
                    Value::Object(m) => m,
                    _ => unreachable!(),
                }
            })
            .collect();
        let mut rows = assign_row_ids(raw);

        sort_rows(&mut rows, "rate", true);
        let first_text = rows
            .iter()
            .position(|r| r.cell_number("rate").is_none())
            .unwrap();
        // Numbers come first, in numeric order; text follows, in text order
        let numbers: Vec<f64> = rows[..first_text]
            .iter()
            .map(|r| r.cell_number("rate").unwrap())
            .collect();
        assert_eq!(numbers.len(), 20);
        assert!(numbers.windows(2).all(|w| w[0] <= w[1]));
        let texts: Vec<String> = rows[first_text..]
            .iter()
            .map(|r| r.cell_text("rate"))
            .collect();
        assert!(texts.iter().all(|t| t.ends_with('x')));
        let mut sorted_texts = texts.clone();
        sorted_texts.sort();
        assert_eq!(texts, sorted_texts);

        sort_rows(&mut rows, "rate", false);
        assert_eq!(rows.last().unwrap().cell_number("rate"), Some(0.0));
    }

    #[test]
    fn page_count_is_ceiling_and_page_is_clamped() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(12, 10), 2);

        assert_eq!(clamp_page(5, 12, 10), 2);
        assert_eq!(clamp_page(0, 12, 10), 1);
        assert_eq!(clamp_page(3, 0, 10), 1);
    }

    #[test]
    fn twelve_rows_at_page_size_ten_split_ten_and_two() {
        let raw: Vec<Map<String, Value>> = (0..12)
            .map(|i| match json!({"code": format!("C-{i:02}")}) {
                Value::Object(m) => m,
                _ => unreachable!(),
            })
            .collect();
        let rows = assign_row_ids(raw);
        let columns = vec![ColumnDescriptor::new("code", "Code")];

        let query = TableQuery::default();
        let first = apply_query(&rows, &columns, &query);
        assert_eq!(first.rows.len(), 10);
        assert_eq!(first.page_count, 2);

        let second = apply_query(&rows, &columns, &TableQuery { page: 2, ..query });
        assert_eq!(second.rows.len(), 2);
        assert_eq!(second.page, 2);
    }

    #[test]
    fn search_and_page_size_reset_page() {
        let query = TableQuery {
            page: 4,
            ..TableQuery::default()
        };
        assert_eq!(query.clone().with_search("ham").page, 1);
        assert_eq!(query.with_page_size(25).page, 1);
    }

    #[test]
    fn toggle_sort_flips_direction_on_same_key() {
        let query = TableQuery::default().toggle_sort("rate");
        assert_eq!(query.sort_key.as_deref(), Some("rate"));
        assert!(query.sort_ascending);

        let flipped = query.toggle_sort("rate");
        assert!(!flipped.sort_ascending);

        let other = flipped.toggle_sort("lane");
        assert_eq!(other.sort_key.as_deref(), Some("lane"));
        assert!(other.sort_ascending);
    }

    #[test]
    fn unsortable_column_is_ignored() {
        let (rows, _) = lanes();
        let columns = vec![
            ColumnDescriptor::new("lane", "Lane"),
            ColumnDescriptor::new("rate", "Rate").unsortable(),
        ];
        let query = TableQuery {
            sort_key: Some("rate".to_string()),
            ..TableQuery::default()
        };
        let view = apply_query(&rows, &columns, &query);
        let lanes_in_order: Vec<String> = view.rows.iter().map(|r| r.cell_text("lane")).collect();
        assert_eq!(
            lanes_in_order,
            vec!["HAM-RTM", "RTM-ANR", "ANR-HAM", "HAM-CPH"]
        );
    }
}
