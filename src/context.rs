//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::edit::{EditKey, EditOutcome, EditSession};
use crate::intent::{self, Intent};
use crate::models::TodoId;
use crate::storage::KeyValueStore;
use crate::store::TodoStore;
use crate::view::{derive_view, TodoView};

/// Storage backend chosen at startup
pub type AppBackend = Box<dyn KeyValueStore>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    /// The store. Thread-local because `web_sys::Storage` is not `Send`.
    store: RwSignal<TodoStore<AppBackend>, LocalStorage>,
    /// Inline edit state
    edit: RwSignal<EditSession>,
    /// Derived page state, recomputed whenever the store changes
    pub view: Memo<TodoView>,
    /// Which row shows its edit input. Only changes on begin/end,
    /// not on every keystroke.
    pub editing: Memo<Option<TodoId>>,
}

impl TodoContext {
    pub fn new(store: TodoStore<AppBackend>) -> Self {
        let store = RwSignal::new_local(store);
        let edit = RwSignal::new(EditSession::new());
        let view = Memo::new(move |_| {
            store.with(|s| {
                log::debug!("[APP] render revision {}", s.revision());
                derive_view(s.todos(), s.filter())
            })
        });
        let editing = Memo::new(move |_| edit.with(|e| e.editing().cloned()));
        Self {
            store,
            edit,
            view,
            editing,
        }
    }

    /// Run an intent; subscribers are notified only if it changed something
    pub fn dispatch(&self, intent: Intent) {
        self.store
            .maybe_update(|store| intent::dispatch(store, intent).needs_render());
    }

    // ========================
    // Inline editing
    // ========================

    pub fn begin_edit(&self, id: TodoId, current_text: String) {
        self.resolve_edit(move |session| session.begin(id, &current_text));
    }

    pub fn set_draft(&self, text: String) {
        self.edit.update(|e| e.set_draft(&text));
    }

    pub fn edit_key(&self, key: &str) {
        let key = EditKey::from_key(key);
        if key != EditKey::Other {
            self.resolve_edit(move |session| session.key(key));
        }
    }

    pub fn edit_blur(&self) {
        self.resolve_edit(EditSession::blur);
    }

    /// Apply `step` to the session; a resulting commit goes to the store
    fn resolve_edit(&self, step: impl FnOnce(&mut EditSession) -> Option<EditOutcome>) {
        let mut outcome = None;
        self.edit.maybe_update(|session| {
            let before = session.editing().cloned();
            outcome = step(session);
            outcome.is_some() || session.editing() != before.as_ref()
        });
        if let Some(intent) = outcome.and_then(EditOutcome::into_intent) {
            self.dispatch(intent);
        }
    }
}

/// Get the todo context
pub fn use_todos() -> TodoContext {
    expect_context::<TodoContext>()
}
