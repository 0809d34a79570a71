//! Todo List Component

use leptos::prelude::*;

use crate::context::use_todos;
use super::TodoItem;

/// Visible rows plus the empty-state message.
///
/// Rows are keyed by their full content, so any change to a todo
/// redraws its row.
#[component]
pub fn TodoList() -> impl IntoView {
    let ctx = use_todos();

    view! {
        <ul id="todo-list" class="todo-list">
            <For
                each=move || ctx.view.with(|v| v.rows.clone())
                key=|row| row.clone()
                children=move |row| view! { <TodoItem row=row /> }
            />
        </ul>
        <p id="empty" class="empty" hidden=move || !ctx.view.with(|v| v.show_empty)>
            "Nothing to do. Add a task above."
        </p>
    }
}
