//! Batch conversion of a document range
//!
//! Walks the subtree under a chosen root in document order, converting only
//! the text strictly inside the range boundaries and re-anchoring the
//! boundary offsets after each in-place text replacement.

use crate::dom::{Document, NodeId};
use crate::engine::Converter;

/// One end of a range: a node plus an offset into it. Offsets count chars in
/// text-bearing nodes and child positions in elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub node: NodeId,
    pub offset: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub start: Boundary,
    pub end: Boundary,
}

impl Range {
    pub fn new(start_node: NodeId, start_offset: usize, end_node: NodeId, end_offset: usize) -> Self {
        Self {
            start: Boundary {
                node: start_node,
                offset: start_offset,
            },
            end: Boundary {
                node: end_node,
                offset: end_offset,
            },
        }
    }

    fn set_start(&mut self, node: NodeId, offset: usize) {
        self.start = Boundary { node, offset };
    }

    fn set_end(&mut self, node: NodeId, offset: usize) {
        self.end = Boundary { node, offset };
    }
}

/// Walks a subtree and converts the text inside a range.
///
/// The walk arms itself when the start boundary is reached and disarms after
/// the end boundary node has been processed; boundary nodes that never appear
/// under the walked root simply leave the converter unarmed (or armed to the
/// subtree end), which is not an error.
pub struct RangeConverter<'a> {
    converter: &'a Converter,
    started: bool,
    finished: bool,
}

impl<'a> RangeConverter<'a> {
    pub fn new(converter: &'a Converter) -> Self {
        Self {
            converter,
            started: false,
            finished: false,
        }
    }

    /// Convert everything inside `range` under `root`, updating the range
    /// boundaries to stay anchored to the same logical positions.
    pub fn convert(&mut self, doc: &mut Document, range: &mut Range, root: NodeId) {
        self.convert_node(doc, range, root);
    }

    fn convert_node(&mut self, doc: &mut Document, range: &mut Range, node: NodeId) {
        if self.started && self.finished {
            return;
        }

        if !self.started && self.is_start_boundary(doc, range, node) {
            self.started = true;
        }

        if doc.is_text_bearing(node) {
            if self.started && !self.finished {
                self.convert_text_node(doc, range, node);
            }
        } else {
            for child in doc.children(node).to_vec() {
                self.convert_node(doc, range, child);
                if self.started && self.finished {
                    break;
                }
            }
        }

        if !self.finished && self.is_end_boundary(doc, range, node) {
            self.finished = true;
        }
    }

    fn is_start_boundary(&self, doc: &Document, range: &Range, node: NodeId) -> bool {
        if doc.is_text_bearing(range.start.node) {
            node == range.start.node
        } else {
            doc.children(range.start.node).get(range.start.offset) == Some(&node)
        }
    }

    fn is_end_boundary(&self, doc: &Document, range: &Range, node: NodeId) -> bool {
        if doc.is_text_bearing(range.end.node) {
            node == range.end.node
        } else {
            range.end.offset > 0
                && doc.children(range.end.node).get(range.end.offset - 1) == Some(&node)
        }
    }

    fn convert_text_node(&self, doc: &mut Document, range: &mut Range, node: NodeId) {
        let value: Vec<char> = doc.text(node).unwrap_or_default().chars().collect();
        let len = value.len();

        let start = if node == range.start.node {
            range.start.offset.min(len)
        } else {
            0
        };
        let end = if node == range.end.node {
            range.end.offset.min(len)
        } else {
            len
        };
        let end = end.max(start);
        // chars after the range end keep their distance from the node end
        let remainder = len - end;

        let prefix: String = value[..start].iter().collect();
        let middle: String = value[start..end].iter().collect();
        let suffix: String = value[end..].iter().collect();

        let converted = format!("{}{}{}", prefix, self.converter.convert_plain(&middle), suffix);
        let new_len = converted.chars().count();
        doc.set_text(node, converted);

        if node == range.end.node {
            range.set_end(node, new_len - remainder);
        }
        if node == range.start.node {
            range.set_start(node, start);
        }
    }
}
