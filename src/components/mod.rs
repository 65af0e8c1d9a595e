//! UI Components
//!
//! Reusable Leptos components.

mod table_card;
mod table_board;
mod status_filter_bar;
mod status_legend;
mod search_box;
mod category_chips;
mod food_row;
mod note_modal;
mod order_tray;
mod menu_board;

pub use table_card::TableCard;
pub use table_board::TableBoard;
pub use status_filter_bar::StatusFilterBar;
pub use status_legend::StatusLegend;
pub use search_box::SearchBox;
pub use category_chips::CategoryChips;
pub use food_row::FoodRow;
pub use note_modal::NoteModal;
pub use order_tray::OrderTray;
pub use menu_board::MenuBoard;
