pub mod fields;
pub mod ui;
