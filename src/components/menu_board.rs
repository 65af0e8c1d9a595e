//! Menu Board Component
//!
//! Order-building screen for one table: search, category chips, the
//! menu list, the note dialog and the order tray. The cart lives here
//! and is dropped when the screen closes.

use leptos::prelude::*;

use crate::components::{CategoryChips, FoodRow, NoteModal, OrderTray, SearchBox};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};
use order_cart::{visible_items, Cart, CategoryFilter, MenuFilter, MenuItem};

/// Order-building screen
#[component]
pub fn MenuBoard(table_id: u32, table_name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Order state, scoped to this visit
    let (cart, set_cart) = signal(Cart::new());
    let (query, set_query) = signal(String::new());
    let (category, set_category) = signal(CategoryFilter::All);
    let (editing, set_editing) = signal::<Option<MenuItem>>(None);
    let (expanded, set_expanded) = signal(false);

    web_sys::console::log_1(
        &format!("[MENU] Open for {} (id={})", table_name, table_id).into(),
    );

    let visible = move || {
        let filter = MenuFilter {
            query: query.get(),
            category: category.get(),
        };
        visible_items(&store.menu().get(), &filter)
    };

    view! {
        <div class="menu-board">
            <header class="compact-header">
                <button class="back-btn" on:click=move |_| ctx.back_to_tables()>"←"</button>
                <div class="header-info">
                    <h1 class="menu-title">"Thực đơn"</h1>
                    <p class="table-info">"Bàn: " {table_name.clone()}</p>
                </div>
            </header>

            <SearchBox query=query set_query=set_query />
            <CategoryChips category=category set_category=set_category />

            {move || {
                let items = visible();
                if items.is_empty() {
                    view! {
                        <div class="empty-result">
                            <p class="empty-result-text">"Không tìm thấy món ăn phù hợp"</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="food-list">
                            <For
                                each=move || visible()
                                key=|item| item.id
                                children=move |item| {
                                    view! { <FoodRow item=item set_editing=set_editing /> }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}

            <NoteModal cart=cart set_cart=set_cart editing=editing set_editing=set_editing />

            <OrderTray
                cart=cart
                set_cart=set_cart
                expanded=expanded
                set_expanded=set_expanded
                table_id=table_id
            />
        </div>
    }
}
