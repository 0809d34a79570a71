//! Edit Input Component
//!
//! Inline text input shown in place of a todo's label while editing.

use leptos::prelude::*;

use crate::context::use_todos;

/// Focused, fully selected input pre-filled with the current text.
///
/// Enter or blur commits, Escape discards.
#[component]
pub fn EditInput(text: String) -> impl IntoView {
    let ctx = use_todos();
    let input_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
            input.select();
        }
    });

    view! {
        <input
            type="text"
            class="edit-input"
            aria-label="Edit task"
            node_ref=input_ref
            prop:value=text
            on:input=move |ev| ctx.set_draft(event_target_value(&ev))
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                let key = ev.key();
                if key == "Enter" || key == "Escape" {
                    ev.prevent_default();
                }
                ctx.edit_key(&key);
            }
            on:blur=move |_| ctx.edit_blur()
        />
    }
}
