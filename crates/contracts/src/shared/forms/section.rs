//! Section metadata: a page is an ordered list of titled, independently
//! collapsible sections (accordion: any subset may be open at once).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Form,
    Table,
    Custom,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Form => "form",
            Self::Table => "table",
            Self::Custom => "custom",
        }
    }
}

/// Declarative part of a section; submit handlers and state live with the
/// page component that owns the section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionMeta {
    pub key: String,
    pub title: String,
    pub kind: SectionKind,
    #[serde(default = "default_open")]
    pub open_by_default: bool,
}

fn default_open() -> bool {
    true
}

impl SectionMeta {
    pub fn form(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            kind: SectionKind::Form,
            open_by_default: true,
        }
    }

    pub fn custom(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            kind: SectionKind::Custom,
            open_by_default: true,
        }
    }

    pub fn collapsed(mut self) -> Self {
        self.open_by_default = false;
        self
    }
}
