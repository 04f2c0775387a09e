//! Host field abstraction
//!
//! The engine never touches a real UI. It sees a field through this trait:
//! a caret snapshot for external-move detection, a back-buffer read for
//! lookbehind context, and an edit applier. Two reference implementations
//! cover the two field kinds; real hosts supply their own.

use crate::dom::{Document, NodeId};

use super::backspace::BACKSPACE;
use super::output::EditAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    PlainInput,
    RichEditor,
}

/// Caret/selection snapshot used to detect external cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretPosition {
    Plain { offset: usize },
    Rich { node: NodeId, offset: usize },
}

impl CaretPosition {
    /// Expected caret after the host applies `action` at this position.
    /// Backspace markers in the insert text net out as deletions.
    pub(crate) fn advanced_by(self, action: &EditAction) -> Self {
        let shift = |offset: usize| {
            let mut offset = offset.saturating_sub(action.delete_count);
            for c in action.insert.chars() {
                if c == BACKSPACE {
                    offset = offset.saturating_sub(1);
                } else {
                    offset += 1;
                }
            }
            offset
        };
        match self {
            CaretPosition::Plain { offset } => CaretPosition::Plain { offset: shift(offset) },
            CaretPosition::Rich { node, offset } => CaretPosition::Rich {
                node,
                offset: shift(offset),
            },
        }
    }
}

/// An editable field as the engine sees it.
pub trait TextField {
    fn kind(&self) -> FieldKind;

    fn caret(&self) -> CaretPosition;

    /// Up to `count` chars of committed text ending `offset_from_caret`
    /// chars before the caret. Returns `""` when unavailable, never fails.
    fn back_buffer(&self, offset_from_caret: usize, count: usize) -> String;

    /// Delete `action.delete_count` chars before the caret, insert
    /// `action.insert`, and leave the caret after the inserted text.
    fn apply_edit(&mut self, action: &EditAction);
}

fn edit_chars(chars: &mut Vec<char>, caret: &mut usize, action: &EditAction) {
    let delete = action.delete_count.min(*caret);
    chars.drain(*caret - delete..*caret);
    *caret -= delete;

    for c in action.insert.chars() {
        if c == BACKSPACE {
            // replayed as a deletion, mirroring synthetic backspace keys
            if *caret > 0 {
                chars.remove(*caret - 1);
                *caret -= 1;
            }
        } else {
            chars.insert(*caret, c);
            *caret += 1;
        }
    }
}

fn back_slice(chars: &[char], caret: usize, offset_from_caret: usize, count: usize) -> String {
    let end = caret.saturating_sub(offset_from_caret).min(chars.len());
    let start = end.saturating_sub(count);
    chars[start..end].iter().collect()
}

/// In-memory single-line input, caret as a char offset.
#[derive(Debug, Clone, Default)]
pub struct PlainTextField {
    chars: Vec<char>,
    caret: usize,
}

impl PlainTextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        let chars: Vec<char> = value.chars().collect();
        let caret = chars.len();
        Self { chars, caret }
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn caret_offset(&self) -> usize {
        self.caret
    }

    pub fn set_caret(&mut self, offset: usize) {
        self.caret = offset.min(self.chars.len());
    }
}

impl TextField for PlainTextField {
    fn kind(&self) -> FieldKind {
        FieldKind::PlainInput
    }

    fn caret(&self) -> CaretPosition {
        CaretPosition::Plain { offset: self.caret }
    }

    fn back_buffer(&self, offset_from_caret: usize, count: usize) -> String {
        back_slice(&self.chars, self.caret, offset_from_caret, count)
    }

    fn apply_edit(&mut self, action: &EditAction) {
        let mut chars = std::mem::take(&mut self.chars);
        edit_chars(&mut chars, &mut self.caret, action);
        self.chars = chars;
    }
}

/// Rich-editor field backed by one text node of a document tree.
#[derive(Debug)]
pub struct EditorField {
    doc: Document,
    node: NodeId,
    caret: usize,
}

impl EditorField {
    /// Editor over a document whose focus sits at the end of `node`.
    pub fn new(doc: Document, node: NodeId) -> Self {
        let caret = doc.text_len(node);
        Self { doc, node, caret }
    }

    pub fn with_value(value: &str) -> Self {
        let mut doc = Document::new();
        let root = doc.create_element("html");
        let node = doc.create_text(value);
        doc.append_child(root, node);
        Self::new(doc, node)
    }

    pub fn value(&self) -> String {
        self.doc.text(self.node).unwrap_or_default().to_string()
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn set_caret(&mut self, offset: usize) {
        self.caret = offset.min(self.doc.text_len(self.node));
    }
}

impl TextField for EditorField {
    fn kind(&self) -> FieldKind {
        FieldKind::RichEditor
    }

    fn caret(&self) -> CaretPosition {
        CaretPosition::Rich {
            node: self.node,
            offset: self.caret,
        }
    }

    fn back_buffer(&self, offset_from_caret: usize, count: usize) -> String {
        let chars: Vec<char> = self.value().chars().collect();
        back_slice(&chars, self.caret, offset_from_caret, count)
    }

    fn apply_edit(&mut self, action: &EditAction) {
        let mut chars: Vec<char> = self.value().chars().collect();
        edit_chars(&mut chars, &mut self.caret, action);
        let value: String = chars.into_iter().collect();
        self.doc.set_text(self.node, value);
    }
}
