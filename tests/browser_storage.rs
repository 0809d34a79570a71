//! localStorage integration tests.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use todo_ui::ids::IdGenerator;
use todo_ui::storage::{BrowserStorage, KeyValueStore, TodoRepository};
use todo_ui::store::{Change, TodoStore};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_storage(key: &str) -> BrowserStorage {
    let storage = BrowserStorage::open().expect("localStorage should be available");
    storage.set(key, "[]").expect("reset failed");
    storage
}

#[wasm_bindgen_test]
fn browser_storage_round_trip() {
    let key = "todos-test-round-trip";
    let storage = fresh_storage(key);

    let mut store = TodoStore::load(TodoRepository::new(storage.clone(), key), IdGenerator::from_browser());
    assert_eq!(store.add("buy milk"), Change::Data);
    let id = store.todos()[0].id.clone();
    assert_eq!(store.toggle(&id), Change::Data);

    let reloaded = TodoStore::load(TodoRepository::new(storage, key), IdGenerator::from_browser());
    assert_eq!(reloaded.todos(), store.todos());
}

#[wasm_bindgen_test]
fn browser_storage_garbage_loads_empty() {
    let key = "todos-test-garbage";
    let storage = fresh_storage(key);
    storage.set(key, "{not json").unwrap();

    let repo = TodoRepository::new(storage, key);
    assert!(repo.load().is_empty());
}
