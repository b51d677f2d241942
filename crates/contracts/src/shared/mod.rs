pub mod forms;
pub mod tables;
