//! User Intents
//!
//! What raw UI events mean for the store, independent of the DOM.

use crate::edit::EditOutcome;
use crate::models::{Filter, TodoId};
use crate::store::{Change, TodoStore};
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Add-form submitted with the field's value
    Add(String),
    Toggle(TodoId),
    Remove(TodoId),
    /// Edited text committed
    Update(TodoId, String),
    SelectFilter(Filter),
    ClearCompleted,
}

impl EditOutcome {
    /// Store call for a finished edit; discards need none
    pub fn into_intent(self) -> Option<Intent> {
        match self {
            EditOutcome::Commit { id, text } => Some(Intent::Update(id, text)),
            EditOutcome::Discard { .. } => None,
        }
    }
}

pub fn dispatch<K: KeyValueStore>(store: &mut TodoStore<K>, intent: Intent) -> Change {
    match intent {
        Intent::Add(text) => store.add(&text),
        Intent::Toggle(id) => store.toggle(&id),
        Intent::Remove(id) => store.remove(&id),
        Intent::Update(id, text) => store.update(&id, &text),
        Intent::SelectFilter(filter) => store.set_filter(filter),
        Intent::ClearCompleted => store.clear_completed(),
    }
}
