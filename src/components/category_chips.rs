//! Category Chips Component
//!
//! "Tất cả" plus one chip per menu category, in menu order.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use order_cart::{categories, CategoryFilter};

/// Category chip row above the menu list
#[component]
pub fn CategoryChips(
    category: ReadSignal<CategoryFilter>,
    set_category: WriteSignal<CategoryFilter>,
) -> impl IntoView {
    let store = use_app_store();

    let chips = move || {
        let mut chips = vec![CategoryFilter::All];
        chips.extend(
            categories(&store.menu().get())
                .into_iter()
                .map(CategoryFilter::Only),
        );
        chips
    };

    view! {
        <div class="category-chips">
            <For
                each=chips
                key=|chip| match chip {
                    CategoryFilter::All => String::new(),
                    CategoryFilter::Only(tag) => tag.clone(),
                }
                children=move |chip| {
                    let label = match &chip {
                        CategoryFilter::All => "Tất cả".to_string(),
                        CategoryFilter::Only(tag) => tag.clone(),
                    };
                    let this_chip = chip.clone();
                    let is_active = move || category.get() == this_chip;
                    view! {
                        <button
                            class=move || if is_active() { "category-chip active" } else { "category-chip" }
                            on:click=move |_| set_category.set(chip.clone())
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}
