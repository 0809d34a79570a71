//! New Todo Form Component
//!
//! Text field + submit button for adding todos.

use leptos::prelude::*;

use crate::context::use_todos;
use crate::intent::Intent;

/// Form for creating new todos
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todos();

    let (new_text, set_new_text) = signal(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // Clear and refocus even when the text was blank and nothing was added
    let create_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Intent::Add(new_text.get_untracked()));
        set_new_text.set(String::new());
        if let Some(input) = input_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    view! {
        <form id="todo-form" class="new-todo-form" on:submit=create_todo>
            <input
                id="todo-input"
                type="text"
                placeholder="What needs to be done?"
                autocomplete="off"
                aria-label="New task"
                node_ref=input_ref
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
