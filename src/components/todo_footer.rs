//! Todo Footer Component
//!
//! Remaining counter and the clear-completed action.

use leptos::prelude::*;

use crate::context::use_todos;
use crate::intent::Intent;

#[component]
pub fn TodoFooter() -> impl IntoView {
    let ctx = use_todos();

    view! {
        <footer class="todo-footer">
            <span id="counter" class="counter">
                {move || ctx.view.with(|v| v.remaining_label.clone())}
            </span>
            <button
                id="clear-completed"
                type="button"
                class="clear-completed"
                class:muted=move || !ctx.view.with(|v| v.has_completed)
                on:click=move |_| ctx.dispatch(Intent::ClearCompleted)
            >
                "Clear completed"
            </button>
        </footer>
    }
}
