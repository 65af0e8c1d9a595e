//! Table Board Component
//!
//! Table picker screen: status chips, legend, the table grid and the
//! selection footer that hands off to the order screen.

use leptos::prelude::*;

use crate::components::{StatusFilterBar, StatusLegend, TableCard};
use crate::context::AppContext;
use crate::models::Table;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::table_filter::{filter_by_status, TableStatusFilter};

/// Table picker screen
#[component]
pub fn TableBoard() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (selected, set_selected) = signal::<Option<Table>>(None);
    let (status_filter, set_status_filter) = signal(TableStatusFilter::All);

    let visible = move || filter_by_status(&store.tables().get(), status_filter.get());

    let on_confirm = move |_| {
        if let Some(table) = selected.get() {
            web_sys::console::log_1(
                &format!("[TABLES] Gọi món for {} (id={})", table.name, table.id).into(),
            );
            ctx.open_order(&table);
        }
    };

    view! {
        <div class="table-board">
            <header class="table-board-header">
                <h1 class="table-board-title">"Chọn Bàn"</h1>
            </header>

            <StatusFilterBar status_filter=status_filter set_status_filter=set_status_filter />
            <StatusLegend />

            {move || {
                let tables = visible();
                if tables.is_empty() {
                    view! {
                        <div class="empty-state">
                            <p class="empty-state-text">"Không có bàn nào phù hợp với lựa chọn"</p>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="table-grid">
                            <For
                                each=move || visible()
                                key=|table| table.id
                                children=move |table| {
                                    view! {
                                        <TableCard
                                            table=table
                                            selected=selected
                                            set_selected=set_selected
                                        />
                                    }
                                }
                            />
                        </div>
                    }
                    .into_any()
                }
            }}

            // Footer appears once a table is picked
            {move || {
                selected.get().map(|table| {
                    let status = table.status;
                    let label = move || store.vocabulary().get().label(status);
                    view! {
                        <footer class="selection-footer">
                            <div class="selected-info">
                                <span class="selected-label">"Bàn đã chọn:"</span>
                                <span class="selected-name">{table.name.clone()}</span>
                                <span
                                    class="selected-status"
                                    style=format!("color: {};", status.color())
                                >
                                    {label}
                                </span>
                            </div>
                            <button class="confirm-btn" on:click=on_confirm>"Gọi món"</button>
                        </footer>
                    }
                })
            }}
        </div>
    }
}
