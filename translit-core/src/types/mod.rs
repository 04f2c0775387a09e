//! Data model for conversion tables and host-facing routing labels

use serde::{Deserialize, Serialize};

/// One row of a conversion table.
///
/// `special_case` marks a caseless source (an apostrophe, say) whose target
/// is case-bearing; the converter then infers the desired case from the
/// surrounding text instead of copying the target literally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionEntry {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub special_case: bool,
}

impl ConversionEntry {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            special_case: false,
        }
    }

    pub fn special(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            special_case: true,
        }
    }
}

/// Which side of each table entry acts as the lookup source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

/// Routing label for host commands.
///
/// `Batch` converts a selection or value once; `Map` runs an incremental
/// session on one field; `MapAll` runs incremental sessions across every
/// field in a scope. The host picks the core entry point from this label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Batch,
    Map,
    MapAll,
}

/// A named conversion table plus its case-sensitivity flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub name: String,
    pub description: String,
    pub case_sensitive: bool,
    pub table: Vec<ConversionEntry>,
}

/// Name/description pair for layout listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutSummary {
    pub name: String,
    pub description: String,
}
