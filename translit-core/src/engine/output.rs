//! Edit output of the incremental engine

/// One incremental edit: delete `delete_count` characters immediately before
/// the caret, then insert `insert`, leaving the caret after the inserted
/// text. The host translates this into field edits or synthetic key events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditAction {
    pub delete_count: usize,
    pub insert: String,
}

impl EditAction {
    pub fn new(delete_count: usize, insert: impl Into<String>) -> Self {
        Self {
            delete_count,
            insert: insert.into(),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.delete_count == 0 && self.insert.is_empty()
    }
}
