//! Filter Bar Component

use leptos::prelude::*;

use crate::context::use_todos;
use crate::intent::Intent;

/// All / Active / Completed selectors, exactly one highlighted
#[component]
pub fn FilterBar() -> impl IntoView {
    let ctx = use_todos();

    view! {
        <nav class="filters" role="tablist">
            {move || ctx.view.with(|v| v.filters.clone()).into_iter().map(|tab| {
                view! {
                    <button
                        type="button"
                        role="tab"
                        class=if tab.active { "filter-btn active" } else { "filter-btn" }
                        data-filter=tab.filter.as_str()
                        aria-selected=if tab.active { "true" } else { "false" }
                        on:click=move |_| ctx.dispatch(Intent::SelectFilter(tab.filter))
                    >
                        {tab.label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
