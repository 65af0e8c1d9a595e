//! Application Context
//!
//! Navigation state shared via Leptos Context API.

use leptos::prelude::*;

use crate::models::Table;

/// Active screen plus the parameters it was opened with
#[derive(Clone, PartialEq)]
pub enum Screen {
    /// Table picker
    Tables,
    /// Order builder for one table; the pair is fixed when navigating
    Order { table_id: u32, table_name: String },
}

/// App-wide navigation signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub screen: ReadSignal<Screen>,
    /// Current screen - write
    set_screen: WriteSignal<Screen>,
}

impl AppContext {
    pub fn new(screen: (ReadSignal<Screen>, WriteSignal<Screen>)) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
        }
    }

    /// Hand off to the order screen for `table`
    pub fn open_order(&self, table: &Table) {
        self.set_screen.set(Screen::Order {
            table_id: table.id,
            table_name: table.name.clone(),
        });
    }

    /// Back to the table picker; any order in progress is dropped
    pub fn back_to_tables(&self) {
        self.set_screen.set(Screen::Tables);
    }
}
