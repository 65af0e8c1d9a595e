//! Table Card Component
//!
//! One tile on the table grid: status color, icon, name and label.

use leptos::prelude::*;

use crate::models::Table;
use crate::store::{use_app_store, AppStateStoreFields};

/// Single table tile
#[component]
pub fn TableCard(
    table: Table,
    selected: ReadSignal<Option<Table>>,
    set_selected: WriteSignal<Option<Table>>,
) -> impl IntoView {
    let store = use_app_store();

    let id = table.id;
    let status = table.status;
    let name = table.name.clone();

    let is_selected = move || selected.get().map(|t| t.id) == Some(id);
    let card_class = move || {
        if is_selected() { "table-card selected" } else { "table-card" }
    };
    let label = move || store.vocabulary().get().label(status);
    let on_pick = move |_| set_selected.set(Some(table.clone()));

    view! {
        <button
            class=card_class
            style=format!("border-color: {};", status.color())
            on:click=on_pick
        >
            <span
                class="status-indicator"
                style=format!("background-color: {};", status.color())
            ></span>
            <span class="table-icon">{status.icon()}</span>
            <span class="table-name">{name}</span>
            <span class="table-status" style=format!("color: {};", status.color())>
                {label}
            </span>
        </button>
    }
}
