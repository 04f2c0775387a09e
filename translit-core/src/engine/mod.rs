//! Transliteration engine
//!
//! This module provides the longest-match converter, the backspace
//! normalizer, and the incremental per-field session machinery that turns
//! one typed character into a minimal delete/insert edit.

mod backspace;
mod case;
mod converter;
mod field;
mod markup;
mod output;
mod registry;
mod session;

pub use backspace::apply_backspaces;
pub use converter::{Chunk, Converter};
pub use field::{CaretPosition, EditorField, FieldKind, PlainTextField, TextField};
pub use output::EditAction;
pub use registry::{FieldId, SessionRegistry, ToggleOutcome};
pub use session::MappingSession;
