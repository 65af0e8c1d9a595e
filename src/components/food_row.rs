//! Food Row Component
//!
//! One menu entry: image, name, price and the add button. Both the row
//! and the button open the note dialog; the quick +/- controls live in
//! the order tray.

use leptos::prelude::*;

use order_cart::{format_vnd, MenuItem};

/// Single menu list row
#[component]
pub fn FoodRow(
    item: MenuItem,
    set_editing: WriteSignal<Option<MenuItem>>,
) -> impl IntoView {
    let name = item.name.clone();
    let image = item.image.clone();
    let price = format_vnd(u64::from(item.price));

    let open_row = {
        let item = item.clone();
        move |_| set_editing.set(Some(item.clone()))
    };
    let open_btn = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        set_editing.set(Some(item.clone()));
    };

    view! {
        <div class="food-row" on:click=open_row>
            <img class="food-image" src=image alt=name.clone() />
            <div class="food-info">
                <span class="food-name">{name}</span>
                <span class="food-price">{price}</span>
            </div>
            <button class="add-btn" on:click=open_btn>"+"</button>
        </div>
    }
}
