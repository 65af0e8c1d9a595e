//! Order Cart
//!
//! The order in progress for one table: quantity and optional note per
//! menu item, updated by small user gestures. Every operation moves the
//! cart from one valid value to the next; none of them can fail.

use crate::item::MenuItem;

/// One ordered item with its quantity and note
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Menu item id (the cart owns no catalog data)
    pub item_id: u32,
    /// Always >= 1; a would-be zero removes the line instead
    pub quantity: u32,
    /// Special request text from the note dialog
    pub note: Option<String>,
}

/// Order in progress
///
/// Lines keep first-add order and stay unique per item id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines in first-add order
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line for `item_id`, if that item is in the cart
    pub fn line(&self, item_id: u32) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.item_id == item_id)
    }

    /// Quick "+": bump the quantity by one, keeping any note.
    /// The first add starts a line at quantity 1.
    pub fn add_one(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|line| line.item_id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                item_id: item.id,
                quantity: 1,
                note: None,
            }),
        }
    }

    /// Quick "-": drop the quantity by one; the last unit removes the
    /// whole line. Items not in the cart are ignored.
    pub fn remove_one(&mut self, item_id: u32) {
        match self.lines.iter().position(|line| line.item_id == item_id) {
            Some(at) if self.lines[at].quantity > 1 => self.lines[at].quantity -= 1,
            Some(at) => {
                self.lines.remove(at);
            }
            None => {}
        }
    }

    /// Dialog commit: replace quantity and note together, no merging
    /// with the previous values. Quantities below 1 are clamped to 1;
    /// an empty note clears any stored one.
    pub fn set_line(&mut self, item: &MenuItem, quantity: u32, note: String) {
        let quantity = quantity.max(1);
        let note = if note.is_empty() { None } else { Some(note) };
        match self.lines.iter_mut().find(|line| line.item_id == item.id) {
            Some(line) => {
                line.quantity = quantity;
                line.note = note;
            }
            None => self.lines.push(CartLine {
                item_id: item.id,
                quantity,
                note,
            }),
        }
    }

    /// Total quantity across all lines
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// Order total in VND, resolving unit prices through the menu.
    /// Lines whose item is missing from `menu` contribute nothing.
    pub fn total_price(&self, menu: &[MenuItem]) -> u64 {
        self.lines
            .iter()
            .filter_map(|line| {
                menu.iter()
                    .find(|item| item.id == line.item_id)
                    .map(|item| u64::from(item.price) * u64::from(line.quantity))
            })
            .sum()
    }
}
