//! Search Box Component
//!
//! Free-text menu search with a clear button while non-empty.

use leptos::prelude::*;

/// Search input above the menu list
#[component]
pub fn SearchBox(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
) -> impl IntoView {
    view! {
        <div class="search-box">
            <input
                type="text"
                class="search-input"
                placeholder="Tìm kiếm món ăn..."
                prop:value=move || query.get()
                on:input=move |ev| set_query.set(event_target_value(&ev))
            />
            <Show when=move || !query.get().is_empty()>
                <button
                    class="clear-btn"
                    on:click=move |_| set_query.set(String::new())
                >
                    "✕"
                </button>
            </Show>
        </div>
    }
}
