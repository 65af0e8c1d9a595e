//! Goi Mon Frontend App
//!
//! Main application component: loads the static catalog into the store,
//! then switches between the table picker and the order screen.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog;
use crate::components::{MenuBoard, TableBoard};
use crate::context::{AppContext, Screen};
use crate::store::{store_set_menu, store_set_tables, AppState};

#[component]
pub fn App() -> impl IntoView {
    // State
    let (screen, set_screen) = signal(Screen::Tables);

    // Provide store and context to all children
    let store = Store::new(AppState::new());
    provide_context(store);
    provide_context(AppContext::new((screen, set_screen)));

    // Load the embedded catalog once at startup
    match catalog::load_menu() {
        Ok(menu) => {
            web_sys::console::log_1(&format!("[APP] Loaded {} menu items", menu.len()).into());
            store_set_menu(&store, menu);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[APP] Menu data error: {}", e).into());
        }
    }
    match catalog::load_tables() {
        Ok(tables) => {
            web_sys::console::log_1(&format!("[APP] Loaded {} tables", tables.len()).into());
            store_set_tables(&store, tables);
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[APP] Table data error: {}", e).into());
        }
    }

    view! {
        <div class="app-layout">
            {move || match screen.get() {
                Screen::Tables => view! { <TableBoard /> }.into_any(),
                Screen::Order { table_id, table_name } => {
                    // A fresh MenuBoard per visit, so the order in
                    // progress dies with the screen
                    view! { <MenuBoard table_id=table_id table_name=table_name /> }.into_any()
                }
            }}
        </div>
    }
}
