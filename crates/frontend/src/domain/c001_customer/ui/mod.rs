pub mod list;
pub mod picker;

pub use list::CustomerList;
pub use picker::CustomerPicker;
