//! Todo Store
//!
//! Owns the canonical list and the active filter. Every operation
//! reports what it triggered so the UI layer only redraws on change.

use crate::ids::IdGenerator;
use crate::models::{Filter, Todo, TodoId};
use crate::storage::{KeyValueStore, TodoRepository};

/// What an operation did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// Nothing happened
    None,
    /// Only view state changed (render, no save)
    View,
    /// The list changed (saved and rendered)
    Data,
}

impl Change {
    pub fn needs_render(self) -> bool {
        self != Change::None
    }
}

/// The todo list, its filter and its persistence
pub struct TodoStore<K: KeyValueStore> {
    todos: Vec<Todo>,
    filter: Filter,
    repo: TodoRepository<K>,
    ids: IdGenerator,
    /// Incremented once per render-triggering change
    revision: u64,
}

impl<K: KeyValueStore> TodoStore<K> {
    /// Load the saved list; the filter always starts at `All`
    pub fn load(repo: TodoRepository<K>, ids: IdGenerator) -> Self {
        let todos = repo.load();
        log::info!("[STORE] loaded {} todos", todos.len());
        Self {
            todos,
            filter: Filter::default(),
            repo,
            ids,
            revision: 0,
        }
    }

    // ========================
    // Accessors
    // ========================

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn get(&self, id: &TodoId) -> Option<&Todo> {
        self.todos.iter().find(|t| &t.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Incomplete items across the whole list, ignoring the filter
    pub fn remaining(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ========================
    // Operations
    // ========================

    /// Prepend a new todo. Blank text is ignored.
    pub fn add(&mut self, raw: &str) -> Change {
        let text = raw.trim();
        if text.is_empty() {
            return Change::None;
        }
        let id = self.fresh_id();
        log::debug!("[STORE] add {}", id);
        self.todos.insert(0, Todo::new(id, text));
        self.commit(Change::Data)
    }

    pub fn toggle(&mut self, id: &TodoId) -> Change {
        match self.todos.iter_mut().find(|t| &t.id == id) {
            Some(todo) => {
                todo.completed = !todo.completed;
                self.commit(Change::Data)
            }
            None => Change::None,
        }
    }

    pub fn remove(&mut self, id: &TodoId) -> Change {
        match self.todos.iter().position(|t| &t.id == id) {
            Some(index) => {
                self.todos.remove(index);
                log::debug!("[STORE] removed {}", id);
                self.commit(Change::Data)
            }
            None => Change::None,
        }
    }

    /// Replace the text of a todo; blank text removes it
    pub fn update(&mut self, id: &TodoId, raw: &str) -> Change {
        let Some(index) = self.todos.iter().position(|t| &t.id == id) else {
            return Change::None;
        };
        let text = raw.trim();
        if text.is_empty() {
            return self.remove(id);
        }
        self.todos[index].text = text.to_string();
        self.commit(Change::Data)
    }

    /// Change the filter. Not persisted.
    pub fn set_filter(&mut self, filter: Filter) -> Change {
        self.filter = filter;
        self.commit(Change::View)
    }

    pub fn clear_completed(&mut self) -> Change {
        let before = self.todos.len();
        self.todos.retain(|t| !t.completed);
        if self.todos.len() == before {
            return Change::None;
        }
        log::debug!("[STORE] cleared {} completed", before - self.todos.len());
        self.commit(Change::Data)
    }

    // ========================
    // Internals
    // ========================

    fn fresh_id(&mut self) -> TodoId {
        loop {
            let id = self.ids.next_id();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn commit(&mut self, change: Change) -> Change {
        if change == Change::Data {
            if let Err(err) = self.repo.save(&self.todos) {
                log::error!("[STORE] failed to save todos: {}", err);
            }
        }
        if change.needs_render() {
            self.revision += 1;
        }
        change
    }
}
