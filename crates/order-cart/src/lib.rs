//! Order Core
//!
//! Cart state machine, menu filtering and currency formatting for the
//! table-side ordering UI. This layer has NO rendering dependencies
//! (except serde for the menu data), so any front end can drive it.

mod cart;
mod filter;
mod item;
mod money;

pub use cart::{Cart, CartLine};
pub use filter::{categories, visible_items, CategoryFilter, MenuFilter};
pub use item::{MenuItem};
pub use money::{format_vnd, group_digits};
