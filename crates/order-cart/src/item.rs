//! Menu Item Entity
//!
//! One sellable dish or drink. Loaded from the menu data and never
//! mutated; the cart refers to items by id only.

use serde::{Deserialize, Serialize};

/// A dish or drink on the menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Unit price in VND
    pub price: u32,
    /// Category tag shown as a filter chip
    pub category: String,
    /// Image URI (opaque to the order logic)
    pub image: String,
    /// Short description, searched together with the name
    pub description: String,
}
