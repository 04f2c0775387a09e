//! Session registry
//!
//! Owns every live mapping session, keyed by a stable field identifier the
//! host assigns. The host routes toggle commands and keystrokes through
//! here; lifecycle discipline (detach on field teardown) is the host's job.

use std::collections::HashMap;

use crate::error::{Error, Result};

use super::converter::Converter;
use super::field::{CaretPosition, TextField};
use super::output::EditAction;
use super::session::MappingSession;

/// Stable host-assigned identifier for one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// No session existed, one was created.
    Attached,
    /// A session for a different command was retargeted and reset.
    Switched,
    /// The session for this command was removed.
    Detached,
}

#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: HashMap<FieldId, MappingSession>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle live mapping for `field` under `command`.
    pub fn toggle(
        &mut self,
        field: FieldId,
        command: &str,
        caret: CaretPosition,
    ) -> ToggleOutcome {
        match self.sessions.get_mut(&field) {
            Some(session) if session.command() == command => {
                self.sessions.remove(&field);
                log::debug!("detached mapping session for {:?}", field);
                ToggleOutcome::Detached
            }
            Some(session) => {
                session.set_command(command);
                session.reset(caret);
                log::debug!("switched {:?} to command {}", field, command);
                ToggleOutcome::Switched
            }
            None => {
                self.sessions
                    .insert(field, MappingSession::new(command, caret));
                log::debug!("attached mapping session for {:?}", field);
                ToggleOutcome::Attached
            }
        }
    }

    /// Route one keystroke to the field's session.
    ///
    /// A keystroke against a field with no session is a host lifecycle bug,
    /// reported as a state error rather than silently ignored.
    pub fn process_key(
        &mut self,
        converter: &Converter,
        id: FieldId,
        field: &dyn TextField,
        c: char,
    ) -> Result<EditAction> {
        let session = self.session_mut(id)?;
        Ok(converter.process_next_char(field, session, c))
    }

    pub fn session_mut(&mut self, field: FieldId) -> Result<&mut MappingSession> {
        self.sessions
            .get_mut(&field)
            .ok_or_else(|| Error::State(format!("no mapping session for field {:?}", field)))
    }

    pub fn session(&self, field: FieldId) -> Option<&MappingSession> {
        self.sessions.get(&field)
    }

    pub fn is_mapped(&self, field: FieldId) -> bool {
        self.sessions.contains_key(&field)
    }

    /// Remove the session for a field, if any. Called on toggle-off and on
    /// field/document teardown.
    pub fn detach(&mut self, field: FieldId) -> Option<MappingSession> {
        self.sessions.remove(&field)
    }

    /// Drop every session, e.g. when a whole document scope goes away.
    pub fn detach_all(&mut self) {
        self.sessions.clear();
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
