//! Todo Item Component
//!
//! One row: checkbox, label (or edit input), edit and delete buttons.

use leptos::prelude::*;

use crate::context::use_todos;
use crate::intent::Intent;
use crate::view::TodoRow;
use super::EditInput;

/// A single todo row
#[component]
pub fn TodoItem(row: TodoRow) -> impl IntoView {
    let ctx = use_todos();

    let TodoRow { id, text, completed } = row;
    let label_class = if completed { "label completed" } else { "label" };

    let is_editing = {
        let id = id.clone();
        move || ctx.editing.with(|editing| editing.as_ref() == Some(&id))
    };
    let begin_edit = {
        let (id, text) = (id.clone(), text.clone());
        move || ctx.begin_edit(id.clone(), text.clone())
    };
    let on_toggle = {
        let id = id.clone();
        move |_: web_sys::Event| ctx.dispatch(Intent::Toggle(id.clone()))
    };
    let on_delete = {
        let id = id.clone();
        move |_: web_sys::MouseEvent| ctx.dispatch(Intent::Remove(id.clone()))
    };
    let on_edit_click = begin_edit.clone();

    view! {
        <li class="item" data-id=id.to_string()>
            <input
                type="checkbox"
                checked=completed
                aria-label="Toggle complete"
                on:change=on_toggle
            />

            {move || if is_editing() {
                view! { <EditInput text=text.clone() /> }.into_any()
            } else {
                let begin_edit = begin_edit.clone();
                view! {
                    <div
                        class=label_class
                        title="Double-click to edit"
                        on:dblclick=move |_| begin_edit()
                    >
                        {text.clone()}
                    </div>
                }.into_any()
            }}

            <div class="actions">
                <button class="icon-btn" type="button" title="Edit" on:click=move |_| on_edit_click()>
                    "✏️"
                </button>
                <button class="icon-btn danger" type="button" title="Delete" on:click=on_delete>
                    "🗑️"
                </button>
            </div>
        </li>
    }
}
