//! Layout file loading
//!
//! Layouts live in a line-oriented data file, one property per line:
//!
//! ```text
//! # comment
//! translit.description=Russian translit
//! translit.case_sensitive=false
//! translit.layout=[["a","а"],["b","б"],["'","ь",true]]
//! ```
//!
//! The `layout` value is a JSON array of `[source, target]` or
//! `[source, target, special]` rows.

mod error;
mod loader;

pub use error::{LayoutError, Result};
pub use loader::{parse_table_json, LayoutFile};
