//! Column descriptors and row-scoped actions for list pages

use serde::{Deserialize, Serialize};

/// Static configuration of one table column
///
/// `accessor_key` is looked up on every row; a missing value renders as an
/// empty cell, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    #[serde(rename = "accessorKey")]
    pub accessor_key: String,
    pub header: String,
    #[serde(default = "default_sortable")]
    pub sortable: bool,
}

fn default_sortable() -> bool {
    true
}

impl ColumnDescriptor {
    pub fn new(accessor_key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            accessor_key: accessor_key.into(),
            header: header.into(),
            sortable: true,
        }
    }

    pub fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }
}

/// Row-scoped action dispatched to the page's `on_action` callback
///
/// The table renderer owns no data: delete is the caller removing the row
/// from its own array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    View,
    Delete,
    Custom(String),
}

impl RowAction {
    pub fn name(&self) -> &str {
        match self {
            Self::Edit => "edit",
            Self::View => "view",
            Self::Delete => "delete",
            Self::Custom(name) => name,
        }
    }
}
