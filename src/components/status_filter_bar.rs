//! Status Filter Bar Component
//!
//! Chip row narrowing the table grid by seating status.

use leptos::prelude::*;

use crate::models::TableStatus;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::table_filter::TableStatusFilter;

/// Chip order: "all" first, then one chip per status
const STATUS_FILTERS: [TableStatusFilter; 4] = [
    TableStatusFilter::All,
    TableStatusFilter::Of(TableStatus::Available),
    TableStatusFilter::Of(TableStatus::Occupied),
    TableStatusFilter::Of(TableStatus::Reserved),
];

/// Status chips above the table grid
#[component]
pub fn StatusFilterBar(
    status_filter: ReadSignal<TableStatusFilter>,
    set_status_filter: WriteSignal<TableStatusFilter>,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="status-filter-bar">
            {STATUS_FILTERS.iter().map(|&filter| {
                let is_active = move || status_filter.get() == filter;
                let label = move || match filter {
                    TableStatusFilter::All => "Tất cả",
                    TableStatusFilter::Of(status) => store.vocabulary().get().label(status),
                };
                view! {
                    <button
                        class=move || if is_active() { "filter-chip active" } else { "filter-chip" }
                        on:click=move |_| set_status_filter.set(filter)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
