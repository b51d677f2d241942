pub mod descriptor;
pub mod fixture;
pub mod query;
pub mod rows;

pub use descriptor::{ColumnDescriptor, RowAction};
pub use fixture::TableFixture;
pub use query::{
    apply_query, clamp_page, filter_rows, page_count, sort_rows, PageView, TableQuery, PAGE_SIZES,
};
pub use rows::{assign_row_ids, delete_row, delete_rows, TableRow};
