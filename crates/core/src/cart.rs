//! The shopping cart and its mutation operations.
//!
//! A [`Cart`] is an ordered sequence of [`LineItem`]s, at most one per
//! distinct product title. It is the only state the storefront persists:
//! the web layer serializes the whole cart into the visitor's session
//! after every mutation and restores it (or an empty cart) on load.
//!
//! All operations are synchronous and infallible; out-of-range indices
//! are silent no-ops since indices always come from the immediately
//! preceding render.

use serde::{Deserialize, Serialize};

use crate::price::{format_amount, parse_display_price};

/// One distinct product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product display name; uniqueness key for merging additions.
    pub title: String,
    /// Single-unit display price (e.g. `"$10.000"`).
    pub price: String,
    /// Display image path or URL.
    pub img: String,
    /// Always at least 1; never persisted as zero.
    pub quantity: u32,
}

impl LineItem {
    /// Parsed unit price; unparseable prices count as zero.
    #[must_use]
    pub fn unit_amount(&self) -> i64 {
        parse_display_price(&self.price).unwrap_or(0)
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_amount(&self) -> i64 {
        self.unit_amount() * i64::from(self.quantity)
    }
}

/// Result of [`Cart::add`], used to pick the acknowledgment message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line item was appended with quantity 1.
    Added,
    /// An existing line item was merged; carries the new quantity.
    Merged(u32),
}

/// An ordered sequence of line items, insertion order preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items (not the badge count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Add one unit of a product.
    ///
    /// If a line item with an equal `title` exists its quantity is
    /// incremented; otherwise a new line item is appended with quantity 1.
    pub fn add(
        &mut self,
        title: impl Into<String>,
        price: impl Into<String>,
        img: impl Into<String>,
    ) -> AddOutcome {
        let title = title.into();
        if let Some(item) = self.items.iter_mut().find(|item| item.title == title) {
            item.quantity += 1;
            return AddOutcome::Merged(item.quantity);
        }
        self.items.push(LineItem {
            title,
            price: price.into(),
            img: img.into(),
            quantity: 1,
        });
        AddOutcome::Added
    }

    /// Increase the quantity of the line item at `index` by 1.
    pub fn increment(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity += 1;
        }
    }

    /// Decrease the quantity of the line item at `index` by 1, flooring
    /// at 1. Never removes the item; removal is a distinct action.
    pub fn decrement(&mut self, index: usize) {
        if let Some(item) = self.items.get_mut(index) {
            if item.quantity > 1 {
                item.quantity -= 1;
            }
        }
    }

    /// Delete the line item at `index`, shifting subsequent items.
    pub fn remove(&mut self, index: usize) {
        if index < self.items.len() {
            self.items.remove(index);
        }
    }

    /// Empty the cart. Used on checkout confirmation.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of all quantities, for the badge.
    #[must_use]
    pub fn total_item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Sum of parsed-unit-price times quantity over all line items.
    #[must_use]
    pub fn total_amount(&self) -> i64 {
        self.items.iter().map(LineItem::line_amount).sum()
    }

    /// The total formatted as a display price (`"$45.000"`).
    #[must_use]
    pub fn total_value(&self) -> String {
        format_amount(self.total_amount())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    const IMG: &str = "/static/images/products/aloe.jpg";

    #[test]
    fn test_add_new_item() {
        let mut cart = Cart::new();
        let outcome = cart.add("Aloe Vera", "$10.000", IMG);
        assert_eq!(outcome, AddOutcome::Added);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_add_same_title_merges() {
        let mut cart = Cart::new();
        cart.add("Aloe Vera", "$10.000", IMG);
        let outcome = cart.add("Aloe Vera", "$10.000", IMG);
        assert_eq!(outcome, AddOutcome::Merged(2));
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut cart = Cart::new();
        cart.add("Aloe Vera", "$10.000", IMG);
        cart.decrement(0);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_increment_then_decrement() {
        let mut cart = Cart::new();
        cart.add("Aloe Vera", "$10.000", IMG);
        cart.increment(0);
        cart.increment(0);
        cart.decrement(0);
        assert_eq!(cart.items()[0].quantity, 2);
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let mut cart = Cart::new();
        cart.add("Aloe Vera", "$10.000", IMG);
        cart.increment(5);
        cart.decrement(5);
        cart.remove(5);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let mut cart = Cart::new();
        cart.add("Aloe Vera", "$10.000", IMG);
        cart.add("Monstera", "$45.000", IMG);
        cart.add("Lavanda", "$18.000", IMG);
        cart.remove(1);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.items()[0].title, "Aloe Vera");
        assert_eq!(cart.items()[1].title, "Lavanda");
    }

    #[test]
    fn test_total_item_count_tracks_quantities() {
        let mut cart = Cart::new();
        assert_eq!(cart.total_item_count(), 0);
        cart.add("Aloe Vera", "$10.000", IMG);
        cart.add("Monstera", "$45.000", IMG);
        cart.add("Aloe Vera", "$10.000", IMG);
        cart.increment(1);
        assert_eq!(cart.total_item_count(), 4);
        cart.decrement(1);
        cart.remove(0);
        assert_eq!(cart.total_item_count(), 1);
    }

    #[test]
    fn test_total_value_weights_by_quantity() {
        let mut cart = Cart::new();
        cart.add("Aloe Vera", "$10.000", IMG);
        cart.add("Aloe Vera", "$10.000", IMG);
        cart.add("Monstera", "$25.000", IMG);
        assert_eq!(cart.total_amount(), 45_000);
        assert_eq!(cart.total_value(), "$45.000");
    }

    #[test]
    fn test_unparseable_price_counts_as_zero() {
        let mut cart = Cart::new();
        cart.add("Misterio", "???", IMG);
        cart.add("Aloe Vera", "$10.000", IMG);
        assert_eq!(cart.total_amount(), 10_000);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add("Aloe Vera", "$10.000", IMG);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut cart = Cart::new();
        cart.add("Aloe Vera", "$10.000", IMG);
        cart.add("Monstera", "$45.000", "/static/images/products/monstera.jpg");
        cart.increment(0);

        let json = serde_json::to_string(&cart).unwrap();
        let restored: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, cart);
        assert_eq!(restored.items().len(), 2);
        assert_eq!(restored.items()[0].quantity, 2);
    }

    #[test]
    fn test_serialized_shape_is_a_plain_list() {
        let mut cart = Cart::new();
        cart.add("Aloe Vera", "$10.000", IMG);
        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["title"], "Aloe Vera");
        assert_eq!(json[0]["quantity"], 1);
    }
}
