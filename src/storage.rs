//! Persistence Layer
//!
//! Key-value backends and the repository that maps the todo list
//! to a single JSON entry.
//! Implementations can use `localStorage`, in-memory maps, etc.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::error::{StorageError, StorageResult};
use crate::models::Todo;

/// Minimal string key-value store
///
/// Synchronous on purpose: `localStorage` is, and nothing is ever
/// held across an await point.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Overwrite the value under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<K: KeyValueStore + ?Sized> KeyValueStore for Box<K> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}

// ========================
// Browser localStorage
// ========================

/// `window.localStorage` scoped to the page origin
#[derive(Clone, Debug)]
pub struct BrowserStorage {
    inner: web_sys::Storage,
}

impl BrowserStorage {
    /// Open the origin's local storage
    pub fn open() -> StorageResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no global window".to_string()))?;
        let inner = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self { inner })
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        self.inner.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.inner.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

// ========================
// In-memory store
// ========================

/// In-memory store. Clones share the same map, which lets tests
/// "reload" by building a second store over the same backend.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
    writes: Rc<Cell<usize>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a raw value, bypassing the write counter
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self
    }

    /// Number of successful `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// Make every following `set` fail like a full quota would
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            });
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

// ========================
// Repository
// ========================

/// Reads and writes the whole todo list under one key
#[derive(Clone, Debug)]
pub struct TodoRepository<K: KeyValueStore> {
    backend: K,
    key: String,
}

impl<K: KeyValueStore> TodoRepository<K> {
    pub fn new(backend: K, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Load the stored list.
    ///
    /// Never fails: absent, unreadable or non-array data yields an
    /// empty list. Broken entries inside an array are dropped, and the
    /// next save overwrites them.
    pub fn load(&self) -> Vec<Todo> {
        match self.backend.get(&self.key) {
            Ok(Some(raw)) => {
                let decoded = decode_list(&raw);
                if decoded.skipped > 0 {
                    log::warn!(
                        "[STORAGE] {} unreadable entries under {:?} will be lost on the next save",
                        decoded.skipped,
                        self.key
                    );
                }
                decoded.todos
            }
            Ok(None) => {
                log::debug!("[STORAGE] no saved list under {:?}", self.key);
                Vec::new()
            }
            Err(err) => {
                log::warn!("[STORAGE] {}; starting empty", err);
                Vec::new()
            }
        }
    }

    /// Serialize the full list and overwrite the stored value
    pub fn save(&self, todos: &[Todo]) -> StorageResult<()> {
        let json = serde_json::to_string(todos)?;
        self.backend.set(&self.key, &json)
    }
}

/// Result of decoding a persisted list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedList {
    pub todos: Vec<Todo>,
    /// Array entries that were not usable todos
    pub skipped: usize,
}

/// Decode a persisted JSON array, keeping every well-formed entry in order
pub fn decode_list(raw: &str) -> DecodedList {
    let entries: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(err) => {
            log::warn!("[STORAGE] saved list is not a JSON array ({}); starting empty", err);
            return DecodedList::default();
        }
    };
    let total = entries.len();

    let mut seen = HashSet::new();
    let mut todos = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let mut todo: Todo = match serde_json::from_value(entry) {
            Ok(todo) => todo,
            Err(err) => {
                log::warn!("[STORAGE] skipping entry {}: {}", index, err);
                continue;
            }
        };
        let trimmed = todo.text.trim();
        if trimmed.is_empty() {
            log::warn!("[STORAGE] skipping entry {}: blank text", index);
            continue;
        }
        todo.text = trimmed.to_string();
        if !seen.insert(todo.id.clone()) {
            log::warn!("[STORAGE] skipping entry {}: duplicate id {}", index, todo.id);
            continue;
        }
        todos.push(todo);
    }
    DecodedList {
        skipped: total - todos.len(),
        todos,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoId;

    const KEY: &str = "todos-v1";

    fn todo(id: &str, text: &str, completed: bool) -> Todo {
        Todo {
            id: TodoId::from(id),
            text: text.to_string(),
            completed,
        }
    }

    #[test]
    fn test_load_absent_is_empty() {
        let repo = TodoRepository::new(MemoryStore::new(), KEY);
        assert!(repo.load().is_empty());
    }

    #[test]
    fn test_load_malformed_is_empty() {
        for raw in ["not json", "{\"id\":\"a\"}", "42", "null", ""] {
            let repo = TodoRepository::new(MemoryStore::new().with_entry(KEY, raw), KEY);
            assert!(repo.load().is_empty(), "expected empty list for {:?}", raw);
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = MemoryStore::new();
        let repo = TodoRepository::new(store.clone(), KEY);
        let todos = vec![todo("b", "second", true), todo("a", "first", false)];

        repo.save(&todos).expect("save failed");
        assert_eq!(store.writes(), 1);

        let reloaded = TodoRepository::new(store, KEY).load();
        assert_eq!(reloaded, todos);
    }

    #[test]
    fn test_load_legacy_ids() {
        let raw = r#"[{"id":"1700000000000a1b2c3","text":"legacy","completed":true}]"#;
        let repo = TodoRepository::new(MemoryStore::new().with_entry(KEY, raw), KEY);
        let loaded = repo.load();
        assert_eq!(loaded, vec![todo("1700000000000a1b2c3", "legacy", true)]);
    }

    #[test]
    fn test_load_skips_bad_entries() {
        let raw = r#"[
            {"id":"a","text":"  keep me  ","completed":false},
            {"id":"b","text":"   ","completed":false},
            {"id":"c","completed":true},
            "junk",
            {"id":"a","text":"dup","completed":true},
            {"id":"d","text":"last","completed":true}
        ]"#;
        let repo = TodoRepository::new(MemoryStore::new().with_entry(KEY, raw), KEY);
        let loaded = repo.load();
        assert_eq!(loaded, vec![todo("a", "keep me", false), todo("d", "last", true)]);

        let decoded = decode_list(raw);
        assert_eq!(decoded.todos, loaded);
        assert_eq!(decoded.skipped, 4);
    }

    #[test]
    fn test_skipped_entries_dropped_on_next_save() {
        let raw = r#"[
            {"id":"a","text":"keep","completed":null},
            {"id":"b","text":"y","completed":false}
        ]"#;
        assert_eq!(decode_list(raw).skipped, 1);

        let store = MemoryStore::new().with_entry(KEY, raw);
        let repo = TodoRepository::new(store.clone(), KEY);
        let mut loaded = repo.load();
        assert_eq!(loaded, vec![todo("b", "y", false)]);

        loaded[0].completed = true;
        repo.save(&loaded).unwrap();
        assert_eq!(
            store.raw(KEY).as_deref(),
            Some(r#"[{"id":"b","text":"y","completed":true}]"#)
        );
    }

    #[test]
    fn test_decode_clean_list_skips_nothing() {
        let decoded = decode_list(r#"[{"id":"a","text":"x","completed":false}]"#);
        assert_eq!(decoded.skipped, 0);
        assert_eq!(decoded.todos.len(), 1);
        assert_eq!(decode_list("oops"), DecodedList::default());
    }

    #[test]
    fn test_save_overwrites() {
        let store = MemoryStore::new();
        let repo = TodoRepository::new(store.clone(), KEY);
        repo.save(&[todo("a", "one", false)]).unwrap();
        repo.save(&[]).unwrap();
        assert_eq!(store.raw(KEY).as_deref(), Some("[]"));
        assert_eq!(store.writes(), 2);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let store = MemoryStore::new();
        store.set_fail_writes(true);
        let repo = TodoRepository::new(store.clone(), KEY);
        let err = repo.save(&[todo("a", "one", false)]).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert_eq!(store.writes(), 0);
        assert!(store.raw(KEY).is_none());
    }
}
