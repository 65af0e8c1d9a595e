//! Status Legend Component
//!
//! Color key shown under the filter bar.

use leptos::prelude::*;

use crate::models::TableStatus;
use crate::store::{use_app_store, AppStateStoreFields};

/// Legend mapping status colors to their labels
#[component]
pub fn StatusLegend() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="status-legend">
            {TableStatus::ALL.iter().map(|&status| {
                let label = move || store.vocabulary().get().label(status);
                view! {
                    <div class="legend-item">
                        <span
                            class="legend-color"
                            style=format!("background-color: {};", status.color())
                        ></span>
                        <span class="legend-text">{label}</span>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
