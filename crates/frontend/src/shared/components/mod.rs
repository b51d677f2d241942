pub mod field_renderer;
pub mod modal_picker;
pub mod pagination_controls;
pub mod search_input;
pub mod section_composer;
pub mod table;
pub mod ui;
