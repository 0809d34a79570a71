//! Inline Edit Session
//!
//! State machine for editing one todo's text in place.
//! At most one edit is open; every edit ends in exactly one
//! commit or discard.

use crate::models::TodoId;

/// Keys the edit input reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Confirm,
    Cancel,
    Other,
}

impl EditKey {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Self {
        match key {
            "Enter" => EditKey::Confirm,
            "Escape" => EditKey::Cancel,
            _ => EditKey::Other,
        }
    }
}

/// How an edit ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Apply `text` as the todo's new value
    Commit { id: TodoId, text: String },
    /// Leave the todo untouched
    Discard { id: TodoId },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ActiveEdit {
    id: TodoId,
    draft: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    active: Option<ActiveEdit>,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the todo being edited
    pub fn editing(&self) -> Option<&TodoId> {
        self.active.as_ref().map(|edit| &edit.id)
    }

    pub fn is_editing(&self, id: &TodoId) -> bool {
        self.editing() == Some(id)
    }

    pub fn draft(&self) -> Option<&str> {
        self.active.as_ref().map(|edit| edit.draft.as_str())
    }

    /// Start editing `id`, pre-filled with `current_text`.
    ///
    /// An edit already open on another todo is committed first and
    /// its outcome returned. Re-opening the same todo does nothing.
    pub fn begin(&mut self, id: TodoId, current_text: &str) -> Option<EditOutcome> {
        if self.is_editing(&id) {
            return None;
        }
        let prior = self.commit();
        log::debug!("[EDIT] begin {}", id);
        self.active = Some(ActiveEdit {
            id,
            draft: current_text.to_string(),
        });
        prior
    }

    pub fn set_draft(&mut self, text: &str) {
        if let Some(edit) = self.active.as_mut() {
            edit.draft = text.to_string();
        }
    }

    pub fn key(&mut self, key: EditKey) -> Option<EditOutcome> {
        match key {
            EditKey::Confirm => self.commit(),
            EditKey::Cancel => self.discard(),
            EditKey::Other => None,
        }
    }

    /// Losing focus commits
    pub fn blur(&mut self) -> Option<EditOutcome> {
        self.commit()
    }

    pub fn commit(&mut self) -> Option<EditOutcome> {
        self.active.take().map(|edit| {
            log::debug!("[EDIT] commit {}", edit.id);
            EditOutcome::Commit {
                id: edit.id,
                text: edit.draft,
            }
        })
    }

    pub fn discard(&mut self) -> Option<EditOutcome> {
        self.active.take().map(|edit| {
            log::debug!("[EDIT] discard {}", edit.id);
            EditOutcome::Discard { id: edit.id }
        })
    }
}
