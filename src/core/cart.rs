//! # Cart
//!
//! Ordered list of line items plus the quantity reducer and derived totals.
//!
//! ```text
//! Cart
//! └── items: Vec<CartLineItem>   // quantity >= 1 for every entry
//!
//! update_quantity(id, n)
//!   n <= 0  → item removed
//!   n >= 1  → item.quantity = n
//!   unknown → no-op
//! ```
//!
//! Totals are never stored. `summary()` recomputes them from the items every
//! time, so they can't drift from the collection.

use clap::ValueEnum;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::catalog::CartSeed;

pub const DEFAULT_TAX_RATE: f64 = 0.08;
pub const DEFAULT_DELIVERY_FEE: f64 = 2.99;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineItem {
    pub id: String,
    pub name: String,
    pub unit_price: f64,
    pub quantity: u64,
    pub image: String,
    pub description: String,
}

impl CartLineItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * self.quantity as f64
    }
}

impl From<&CartSeed> for CartLineItem {
    fn from(seed: &CartSeed) -> Self {
        Self {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            unit_price: seed.price,
            quantity: u64::from(seed.quantity),
            image: seed.image.to_string(),
            description: seed.description.to_string(),
        }
    }
}

/// What a quantity update did to the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    Updated,
    Removed,
    /// No line item has that id. The cart is untouched.
    Unknown,
}

/// How tax and total relate to the rounded subtotal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TotalsRounding {
    /// Round the subtotal to cents, then compute tax and total from that
    /// rounded figure. Matches the figures shown on checkout receipts.
    #[default]
    SubtotalFirst,
    /// Compute tax and total from the full-precision subtotal.
    Exact,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pricing {
    pub tax_rate: f64,
    pub delivery_fee: f64,
    pub rounding: TotalsRounding,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            delivery_fee: DEFAULT_DELIVERY_FEE,
            rounding: TotalsRounding::default(),
        }
    }
}

/// Derived money figures for the summary panel and checkout dialog.
/// Values are full precision; format with two decimals for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartSummary {
    pub subtotal: f64,
    pub tax: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub item_count: u64,
}

/// Result of asking to check out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Checkout {
    EmptyCart,
    Confirm(CartSummary),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLineItem>,
}

impl Cart {
    /// Build a cart, dropping any entry whose quantity is zero.
    pub fn new(items: Vec<CartLineItem>) -> Self {
        let items = items.into_iter().filter(|item| item.quantity > 0).collect();
        Self { items }
    }

    pub fn from_seed(seed: &[CartSeed]) -> Self {
        Self::new(seed.iter().map(CartLineItem::from).collect())
    }

    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Set the quantity of one line item. Zero or below removes it.
    pub fn update_quantity(&mut self, id: &str, new_quantity: i64) -> QuantityChange {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            debug!("Quantity update for unknown cart item {}", id);
            return QuantityChange::Unknown;
        };

        match u64::try_from(new_quantity) {
            Ok(0) | Err(_) => {
                let removed = self.items.remove(pos);
                debug!("Removed {} from cart", removed.name);
                QuantityChange::Removed
            }
            Ok(quantity) => {
                self.items[pos].quantity = quantity;
                debug!("Set {} quantity to {}", self.items[pos].name, quantity);
                QuantityChange::Updated
            }
        }
    }

    /// Non-mutating form of [`Cart::update_quantity`].
    pub fn with_quantity(&self, id: &str, new_quantity: i64) -> Cart {
        let mut next = self.clone();
        next.update_quantity(id, new_quantity);
        next
    }

    /// Sum of `unit_price × quantity`, full precision.
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(CartLineItem::line_total).sum()
    }

    /// Total units across all lines. Saturates instead of overflowing.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .fold(0u64, |count, item| count.saturating_add(item.quantity))
    }

    pub fn summary(&self, pricing: &Pricing) -> CartSummary {
        let subtotal = match pricing.rounding {
            TotalsRounding::SubtotalFirst => round_cents(self.subtotal()),
            TotalsRounding::Exact => self.subtotal(),
        };
        let tax = subtotal * pricing.tax_rate;
        CartSummary {
            subtotal,
            tax,
            delivery_fee: pricing.delivery_fee,
            total: subtotal + tax + pricing.delivery_fee,
            item_count: self.item_count(),
        }
    }

    pub fn checkout(&self, pricing: &Pricing) -> Checkout {
        if self.is_empty() {
            Checkout::EmptyCart
        } else {
            Checkout::Confirm(self.summary(pricing))
        }
    }
}

/// Round to two decimal places, half away from zero.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::CART_SEED;
    use crate::core::format_money;

    fn line(id: &str, price: f64, quantity: u64) -> CartLineItem {
        CartLineItem {
            id: id.to_string(),
            name: format!("Item {id}"),
            unit_price: price,
            quantity,
            image: String::new(),
            description: String::new(),
        }
    }

    fn two_line_cart() -> Cart {
        Cart::new(vec![line("1", 8.99, 1), line("2", 6.49, 2)])
    }

    #[test]
    fn test_worked_example_totals() {
        let summary = two_line_cart().summary(&Pricing::default());
        assert_eq!(format_money(summary.subtotal), "$21.97");
        assert_eq!(format!("{:.2}", summary.tax), "1.76");
        assert!((summary.tax - 1.7576).abs() < 1e-9);
        assert_eq!(format!("{:.2}", summary.total), "26.72");
        assert_eq!(summary.item_count, 3);
    }

    #[test]
    fn test_zero_quantity_removes_only_that_item() {
        let mut cart = two_line_cart();
        let before = cart.get("1").cloned();
        assert_eq!(cart.update_quantity("2", 0), QuantityChange::Removed);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get("1").cloned(), before);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_negative_quantity_removes() {
        let mut cart = two_line_cart();
        assert_eq!(cart.update_quantity("1", -3), QuantityChange::Removed);
        assert!(cart.get("1").is_none());
    }

    #[test]
    fn test_positive_quantity_sets_exactly() {
        for n in [1_i64, 2, 7, 250] {
            let mut cart = two_line_cart();
            assert_eq!(cart.update_quantity("2", n), QuantityChange::Updated);
            let item = cart.get("2").unwrap();
            assert_eq!(item.quantity as i64, n);
            assert_eq!(item.unit_price, 6.49);
            assert_eq!(item.name, "Item 2");
            assert_eq!(cart.get("1").unwrap().quantity, 1);
        }
    }

    #[test]
    fn test_large_quantity_sets_exactly() {
        let mut cart = two_line_cart();
        let n = 5_000_000_000_i64;
        assert_eq!(cart.update_quantity("1", n), QuantityChange::Updated);
        assert_eq!(cart.get("1").unwrap().quantity as i64, n);

        assert_eq!(cart.update_quantity("2", i64::MAX), QuantityChange::Updated);
        assert_eq!(cart.get("2").unwrap().quantity, i64::MAX as u64);
    }

    #[test]
    fn test_item_count_saturates_on_huge_lines() {
        let mut cart = two_line_cart();
        cart.update_quantity("1", 3_000_000_000);
        cart.update_quantity("2", 3_000_000_000);
        let summary = cart.summary(&Pricing::default());
        assert_eq!(summary.item_count, 6_000_000_000);

        cart.update_quantity("1", i64::MAX);
        cart.update_quantity("2", i64::MAX);
        assert_eq!(cart.item_count(), u64::MAX - 1);

        let full = Cart::new(vec![line("1", 1.0, u64::MAX), line("2", 1.0, 5)]);
        assert_eq!(full.item_count(), u64::MAX);
        assert!(matches!(full.checkout(&Pricing::default()), Checkout::Confirm(_)));
    }

    #[test]
    fn test_unknown_id_is_noop() {
        let mut cart = two_line_cart();
        let before = cart.clone();
        assert_eq!(cart.update_quantity("nope", 5), QuantityChange::Unknown);
        assert_eq!(cart.update_quantity("nope", 0), QuantityChange::Unknown);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_with_quantity_leaves_original() {
        let cart = two_line_cart();
        let next = cart.with_quantity("1", 4);
        assert_eq!(cart.get("1").unwrap().quantity, 1);
        assert_eq!(next.get("1").unwrap().quantity, 4);
    }

    #[test]
    fn test_subtotal_tracks_updates_and_is_stable() {
        let mut cart = Cart::from_seed(CART_SEED);
        cart.update_quantity("3", 3);
        cart.update_quantity("1", 0);
        let expected: f64 = cart.items().iter().map(|i| i.unit_price * i.quantity as f64).sum();
        assert_eq!(cart.subtotal(), expected);
        assert_eq!(cart.subtotal(), cart.subtotal());
        assert_eq!(cart.summary(&Pricing::default()), cart.summary(&Pricing::default()));
    }

    #[test]
    fn test_new_drops_zero_quantity_lines() {
        let cart = Cart::new(vec![line("1", 1.0, 0), line("2", 1.0, 1)]);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].id, "2");
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut cart = two_line_cart();
        cart.update_quantity("1", 0);
        cart.update_quantity("2", 0);
        let before = cart.clone();
        assert_eq!(cart.checkout(&Pricing::default()), Checkout::EmptyCart);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_checkout_confirm_carries_summary() {
        let cart = two_line_cart();
        match cart.checkout(&Pricing::default()) {
            Checkout::Confirm(summary) => assert_eq!(summary.item_count, 3),
            Checkout::EmptyCart => panic!("cart is not empty"),
        }
    }

    #[test]
    fn test_rounding_modes_differ_on_sub_cent_subtotal() {
        let cart = Cart::new(vec![line("1", 0.125, 1)]);
        let first = cart.summary(&Pricing::default());
        let exact = cart.summary(&Pricing {
            rounding: TotalsRounding::Exact,
            ..Pricing::default()
        });
        assert_eq!(first.subtotal, 0.13);
        assert_eq!(exact.subtotal, 0.125);
        assert!((first.tax - 0.13 * 0.08).abs() < 1e-12);
        assert!((exact.tax - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(21.970000000000002), 21.97);
        assert_eq!(round_cents(1.7576), 1.76);
    }
}
