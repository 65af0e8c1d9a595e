//! Order Tray Component
//!
//! Collapsible summary of the order in progress: quick +/- controls per
//! line, the running total and the confirm button. Hidden while the
//! order is empty.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use order_cart::{format_vnd, group_digits, Cart};

/// Bottom sheet listing the picked items
#[component]
pub fn OrderTray(
    cart: ReadSignal<Cart>,
    set_cart: WriteSignal<Cart>,
    expanded: ReadSignal<bool>,
    set_expanded: WriteSignal<bool>,
    table_id: u32,
) -> impl IntoView {
    let store = use_app_store();

    let total = move || cart.get().total_price(&store.menu().get());

    let on_confirm = move |_| {
        let order = cart.get();
        let menu = store.menu().get();
        web_sys::console::log_1(
            &format!(
                "[MENU] Xác nhận đặt món: bàn {}, {} món, {}",
                table_id,
                order.total_items(),
                format_vnd(order.total_price(&menu))
            )
            .into(),
        );
    };

    view! {
        <Show when=move || !cart.get().is_empty()>
            <div class=move || {
                if expanded.get() { "order-summary expanded" } else { "order-summary" }
            }>
                <button
                    class="swipe-indicator-container"
                    on:click=move |_| set_expanded.update(|v| *v = !*v)
                >
                    <span class="swipe-indicator"></span>
                </button>

                <div class="order-header">
                    <span class="order-title">
                        {move || {
                            if expanded.get() {
                                "Món đã chọn (Thu gọn)".to_string()
                            } else {
                                format!("Món đã chọn ({} món)", cart.get().total_items())
                            }
                        }}
                    </span>
                    <span class="total-price">{move || format_vnd(total())}</span>
                </div>

                <div class="order-list">
                    <For
                        each=move || cart.get().lines().to_vec()
                        key=|line| {
                            // Tuple of all mutable fields so changes re-render the row
                            (line.item_id, line.quantity, line.note.clone())
                        }
                        children=move |line| {
                            let item_id = line.item_id;
                            let quantity = line.quantity;
                            let item = store
                                .menu()
                                .get()
                                .into_iter()
                                .find(|item| item.id == item_id);
                            let name = item
                                .as_ref()
                                .map(|item| item.name.clone())
                                .unwrap_or_default();
                            let price = item.as_ref().map(|item| item.price).unwrap_or(0);
                            let line_total =
                                group_digits(u64::from(price) * u64::from(quantity));

                            let on_minus = move |_| set_cart.update(|c| c.remove_one(item_id));
                            let on_plus = move |_| {
                                if let Some(item) = &item {
                                    set_cart.update(|c| c.add_one(item));
                                }
                            };

                            view! {
                                <div class="order-item">
                                    <div class="order-item-details">
                                        <span class="order-item-name">{name}</span>
                                        {line.note.clone().map(|note| {
                                            view! {
                                                <span class="order-item-note">"Ghi chú: " {note}</span>
                                            }
                                        })}
                                    </div>
                                    <div class="quantity-control">
                                        <button class="quantity-btn" on:click=on_minus>"-"</button>
                                        <span class="quantity">{quantity}</span>
                                        <button class="quantity-btn" on:click=on_plus>"+"</button>
                                    </div>
                                    <span class="order-item-price">{line_total}</span>
                                </div>
                            }
                        }
                    />
                </div>

                <button class="confirm-btn" on:click=on_confirm>"Xác nhận đặt món"</button>
            </div>
        </Show>
    }
}
