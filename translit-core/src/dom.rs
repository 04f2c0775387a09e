//! Minimal arena-backed document tree
//!
//! Just enough of a node tree for batch range conversion and the rich-editor
//! field: elements with ordered children plus text-bearing leaves. Nodes are
//! addressed by index into the arena, never by reference.

/// Stable handle for a node in one [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element { tag: String },
    Text(String),
    Comment(String),
}

#[derive(Debug)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<NodeId>,
}

#[derive(Debug, Default)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            children: Vec::new(),
        });
        id
    }

    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.push(NodeKind::Element { tag: tag.into() })
    }

    pub fn create_text(&mut self, value: impl Into<String>) -> NodeId {
        self.push(NodeKind::Text(value.into()))
    }

    pub fn create_comment(&mut self, value: impl Into<String>) -> NodeId {
        self.push(NodeKind::Comment(value.into()))
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Text value of a text-bearing node (text or comment).
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::Text(value) | NodeKind::Comment(value) => Some(value),
            NodeKind::Element { .. } => None,
        }
    }

    pub fn set_text(&mut self, id: NodeId, value: impl Into<String>) {
        match &mut self.nodes[id.0].kind {
            NodeKind::Text(slot) | NodeKind::Comment(slot) => *slot = value.into(),
            NodeKind::Element { .. } => {}
        }
    }

    pub fn is_text_bearing(&self, id: NodeId) -> bool {
        self.text(id).is_some()
    }

    /// Text length in chars; zero for elements.
    pub fn text_len(&self, id: NodeId) -> usize {
        self.text(id).map_or(0, |t| t.chars().count())
    }

    /// Concatenated text of a subtree, in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        match self.text(id) {
            Some(value) => value.to_string(),
            None => self
                .children(id)
                .iter()
                .map(|&child| self.text_content(child))
                .collect(),
        }
    }
}
