//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{StatusVocabulary, Table};
use order_cart::MenuItem;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Floor plan shown on the table screen
    pub tables: Vec<Table>,
    /// Full menu; screens derive visible slices from it
    pub menu: Vec<MenuItem>,
    /// Active table-status wording
    pub vocabulary: StatusVocabulary,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the loaded menu
pub fn store_set_menu(store: &AppStore, menu: Vec<MenuItem>) {
    *store.menu().write() = menu;
}

/// Replace the floor plan
pub fn store_set_tables(store: &AppStore, tables: Vec<Table>) {
    *store.tables().write() = tables;
}
