pub mod sortable_header_cell;
pub mod table_cell_checkbox;
pub mod table_header_checkbox;
pub mod table_list;

pub use sortable_header_cell::SortableHeaderCell;
pub use table_cell_checkbox::TableCellCheckbox;
pub use table_header_checkbox::TableHeaderCheckbox;
pub use table_list::TableListRenderer;
