//! Todo App
//!
//! Root component: opens storage, loads the list and lays out the page.

use leptos::prelude::*;

use crate::components::{FilterBar, NewTodoForm, TodoFooter, TodoList};
use crate::config::AppConfig;
use crate::context::{AppBackend, TodoContext};
use crate::ids::IdGenerator;
use crate::storage::{BrowserStorage, MemoryStore, TodoRepository};
use crate::store::TodoStore;

/// Pick `localStorage`, or an in-memory map when the browser refuses it
fn open_backend() -> AppBackend {
    match BrowserStorage::open() {
        Ok(storage) => Box::new(storage),
        Err(err) => {
            log::warn!("[APP] {}; todos will not survive a reload", err);
            Box::new(MemoryStore::new())
        }
    }
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let repo = TodoRepository::new(open_backend(), config.storage_key);
    let store = TodoStore::load(repo, IdGenerator::from_browser());

    // Provide context to all children
    provide_context(TodoContext::new(store));

    view! {
        <main class="todo-app">
            <h1>"Todos"</h1>

            <NewTodoForm />

            <FilterBar />

            <TodoList />

            <TodoFooter />
        </main>
    }
}
