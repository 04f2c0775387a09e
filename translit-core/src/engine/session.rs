//! Incremental per-field mapping session
//!
//! A session tracks one live-mapped field: the raw input window, the output
//! currently on screen for it, and up to two resolved trailing chunks kept
//! for case-inference lookbehind once the window slides.
//!
//! Invariant: `converted_buffer` is always the conversion of
//! `source_buffer` under the owning converter given back-chunk context, and
//! the field's text before the caret equals the committed back text followed
//! by `converted_buffer`.

use std::collections::VecDeque;

use super::converter::{Chunk, Converter};
use super::field::{CaretPosition, TextField};
use super::output::EditAction;

const BACK_CHUNK_CAP: usize = 2;

#[derive(Debug, Clone)]
pub struct MappingSession {
    command: String,
    source_buffer: String,
    converted_buffer: String,
    back_chunks: VecDeque<Chunk>,
    caret: CaretPosition,
}

impl MappingSession {
    pub fn new(command: impl Into<String>, caret: CaretPosition) -> Self {
        Self {
            command: command.into(),
            source_buffer: String::new(),
            converted_buffer: String::new(),
            back_chunks: VecDeque::new(),
            caret,
        }
    }

    /// Discard incremental state and re-snapshot the caret. Used on attach,
    /// on command switch, and whenever the caret moved externally.
    pub fn reset(&mut self, caret: CaretPosition) {
        self.source_buffer.clear();
        self.converted_buffer.clear();
        self.back_chunks.clear();
        self.caret = caret;
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn set_command(&mut self, command: impl Into<String>) {
        self.command = command.into();
    }

    pub fn source_buffer(&self) -> &str {
        &self.source_buffer
    }

    pub fn converted_buffer(&self) -> &str {
        &self.converted_buffer
    }

    pub fn caret(&self) -> CaretPosition {
        self.caret
    }

    fn converted_len(&self) -> usize {
        self.converted_buffer.chars().count()
    }

    /// Lookbehind context from cached chunks, when they hold enough chars.
    fn cached_back_text(&self, count: usize) -> Option<String> {
        let cached: String = self.back_chunks.iter().map(|c| c.out.as_str()).collect();
        let cached_chars: Vec<char> = cached.chars().collect();
        if cached_chars.len() >= count {
            Some(cached_chars[cached_chars.len() - count..].iter().collect())
        } else {
            None
        }
    }

    fn push_back_chunk(&mut self, chunk: Chunk) {
        if self.back_chunks.len() == BACK_CHUNK_CAP {
            self.back_chunks.pop_front();
        }
        self.back_chunks.push_back(chunk);
    }
}

impl Converter {
    /// Process one typed character for a live-mapped field.
    ///
    /// Re-converts the whole input window against lookbehind context and
    /// returns the minimal trailing edit that brings the on-screen text in
    /// line. The caller applies the edit; the caret the session records is
    /// the position that edit will produce.
    pub fn process_next_char(
        &self,
        field: &dyn TextField,
        session: &mut MappingSession,
        c: char,
    ) -> EditAction {
        // an external caret move invalidates all incremental state
        if field.caret() != session.caret {
            log::debug!("caret moved externally, resetting mapping session");
            session.reset(field.caret());
        }

        // lookbehind needs up to two resolved chars beyond the live window
        let needed = 2 * self.max_source_len();
        let back_text = session
            .cached_back_text(needed)
            .unwrap_or_else(|| field.back_buffer(session.converted_len(), needed));

        session.source_buffer.push(c);

        let mut chunks = Vec::new();
        let full = self.convert_appending(&session.source_buffer, &back_text, Some(&mut chunks));

        // drop the context prefix; what remains matches source_buffer
        let context_len = back_text.chars().count();
        let new_output: Vec<char> = full.chars().skip(context_len).collect();

        let old_output: Vec<char> = session.converted_buffer.chars().collect();
        let action = diff_outputs(&old_output, &new_output);

        // slide the window past fully-resolved chunks
        let mut source: Vec<char> = session.source_buffer.chars().collect();
        let mut remaining = new_output;
        let mut chunk_queue: VecDeque<Chunk> = chunks.into();
        while source.len() > self.max_source_len() {
            let chunk = match chunk_queue.pop_front() {
                Some(chunk) => chunk,
                None => break,
            };
            let src_len = chunk.src.chars().count();
            let out_len = chunk.out.chars().count();
            source.drain(..src_len.min(source.len()));
            remaining.drain(..out_len.min(remaining.len()));
            session.push_back_chunk(chunk);
        }

        session.source_buffer = source.into_iter().collect();
        session.converted_buffer = remaining.into_iter().collect();
        session.caret = session.caret.advanced_by(&action);

        log::trace!(
            "processed {:?}: delete {} insert {:?}",
            c,
            action.delete_count,
            action.insert
        );
        action
    }
}

/// Minimal trailing edit turning `old` into `new`.
fn diff_outputs(old: &[char], new: &[char]) -> EditAction {
    if new.len() >= old.len() {
        for i in 0..old.len() {
            if old[i] != new[i] {
                return EditAction::new(old.len() - i, new[i..].iter().collect::<String>());
            }
        }
        EditAction::new(0, new[old.len()..].iter().collect::<String>())
    } else {
        // new output shrank, replace everything
        EditAction::new(old.len(), new.iter().collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_pure_append() {
        let old: Vec<char> = "ф".chars().collect();
        let new: Vec<char> = "фи".chars().collect();
        assert_eq!(diff_outputs(&old, &new), EditAction::new(0, "и"));
    }

    #[test]
    fn test_diff_tail_replace() {
        let old: Vec<char> = "ф".chars().collect();
        let new: Vec<char> = "ю".chars().collect();
        assert_eq!(diff_outputs(&old, &new), EditAction::new(1, "ю"));
    }

    #[test]
    fn test_diff_shrink_replaces_all() {
        let old: Vec<char> = "abc".chars().collect();
        let new: Vec<char> = "ab".chars().collect();
        assert_eq!(diff_outputs(&old, &new), EditAction::new(3, "ab"));
    }

    #[test]
    fn test_diff_identical_is_noop() {
        let chars: Vec<char> = "ша".chars().collect();
        assert!(diff_outputs(&chars, &chars).is_noop());
    }
}
