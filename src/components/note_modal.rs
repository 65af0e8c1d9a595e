//! Note Modal Component
//!
//! Quantity-and-note dialog for one menu item. Opening it for an item
//! already in the order starts from that line's quantity and note; the
//! confirm button commits both at once.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use order_cart::{format_vnd, Cart, MenuItem};

/// Quantity and note dialog
#[component]
pub fn NoteModal(
    cart: ReadSignal<Cart>,
    set_cart: WriteSignal<Cart>,
    editing: ReadSignal<Option<MenuItem>>,
    set_editing: WriteSignal<Option<MenuItem>>,
) -> impl IntoView {
    let (modal_quantity, set_modal_quantity) = signal(1u32);
    let (note_text, set_note_text) = signal(String::new());
    let (last_item_id, set_last_item_id) = signal::<Option<u32>>(None);

    // Prefill from the order when the dialog opens for a new item
    Effect::new(move |_| {
        if let Some(item) = editing.get() {
            if last_item_id.get() != Some(item.id) {
                set_last_item_id.set(Some(item.id));

                match cart.get_untracked().line(item.id) {
                    Some(line) => {
                        set_modal_quantity.set(line.quantity);
                        set_note_text.set(line.note.clone().unwrap_or_default());
                    }
                    None => {
                        set_modal_quantity.set(1);
                        set_note_text.set(String::new());
                    }
                }
            }
        } else {
            set_last_item_id.set(None);
        }
    });

    view! {
        {move || editing.get().map(|item| {
            let price = item.price;
            let name = item.name.clone();
            let image = item.image.clone();
            let description = item.description.clone();

            let in_cart = cart.get().line(item.id).is_some();
            let confirm_label = if in_cart { "Cập nhật" } else { "Thêm món" };

            let on_confirm = move |_| {
                set_cart.update(|c| {
                    c.set_line(&item, modal_quantity.get(), note_text.get());
                });
                set_editing.set(None);
            };

            view! {
                <div class="modal-overlay">
                    <div class="note-modal">
                        <div class="modal-food-info">
                            <img class="modal-food-image" src=image alt=name.clone() />
                            <div class="modal-food-details">
                                <span class="modal-food-name">{name}</span>
                                <span class="modal-food-price">{format_vnd(u64::from(price))}</span>
                                <span class="modal-food-description">{description}</span>
                            </div>
                        </div>

                        <div class="modal-quantity-row">
                            <span class="modal-quantity-label">"Số lượng:"</span>
                            <div class="modal-quantity-control">
                                <button
                                    class="quantity-btn"
                                    on:click=move |_| set_modal_quantity.update(|q| if *q > 1 { *q -= 1 })
                                >
                                    "-"
                                </button>
                                <span class="modal-quantity">{move || modal_quantity.get()}</span>
                                <button
                                    class="quantity-btn"
                                    on:click=move |_| set_modal_quantity.update(|q| *q += 1)
                                >
                                    "+"
                                </button>
                            </div>
                        </div>

                        <label class="note-label">"Ghi chú (tùy chọn)"</label>
                        <textarea
                            class="note-input"
                            placeholder="Nhập yêu cầu đặc biệt..."
                            prop:value=move || note_text.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let textarea = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                                set_note_text.set(textarea.value());
                            }
                        ></textarea>

                        <span class="modal-total">
                            {move || format!("Tổng: {}", format_vnd(u64::from(price) * u64::from(modal_quantity.get())))}
                        </span>

                        <div class="modal-buttons">
                            <button class="cancel-btn" on:click=move |_| set_editing.set(None)>
                                "Hủy"
                            </button>
                            <button class="confirm-note-btn" on:click=on_confirm>
                                {confirm_label}
                            </button>
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
