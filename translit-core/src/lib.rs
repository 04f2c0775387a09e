//! Live script transliteration engine
//!
//! Converts typed text between scripts through a configurable conversion
//! table: one-shot batch conversion of strings and document ranges, and
//! incremental keystroke-driven conversion that corrects already-emitted
//! output with minimal delete/insert edits.

pub mod dom;
pub mod endpoint;
pub mod engine;
pub mod error;
pub mod layout;
pub mod range;
pub mod types;

pub use types::*;

// Re-export commonly used types
pub use dom::{Document, NodeId, NodeKind};
pub use endpoint::{standard_end_points, EndPoint};
pub use engine::{
    apply_backspaces, CaretPosition, Chunk, Converter, EditAction, EditorField, FieldId,
    FieldKind, MappingSession, PlainTextField, SessionRegistry, TextField, ToggleOutcome,
};
pub use error::{Error, Result};
pub use layout::{LayoutError, LayoutFile};
pub use range::{Boundary, Range, RangeConverter};
