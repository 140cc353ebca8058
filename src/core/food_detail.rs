//! # Food Detail
//!
//! View model for a single catalog record: lookup by route id, a quantity
//! selector that never drops below one, and the simulated add-to-cart with
//! its pending flag.

use log::{debug, info};

use crate::core::catalog::{FoodItem, find_food};
use crate::core::dialog::{ButtonStyle, Dialog, DialogAction, DialogButton};
use crate::core::format_money;
use crate::core::navigation::{CART, Destination};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FoodLookup {
    Found(&'static FoodItem),
    NotFound,
}

/// What pressing "Add to Cart" should do.
#[derive(Debug, Clone, PartialEq)]
pub enum AddToCart {
    /// Kick off the simulated request.
    Start,
    Unavailable(Dialog),
    /// A request is already in flight, or there is no item.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FoodDetailState {
    pub requested_id: String,
    pub lookup: FoodLookup,
    pub quantity: u32,
    pub adding_to_cart: bool,
}

impl FoodDetailState {
    pub fn new(id: &str) -> Self {
        let lookup = match find_food(id) {
            Some(food) => FoodLookup::Found(food),
            None => {
                debug!("Food id {} not in catalog", id);
                FoodLookup::NotFound
            }
        };
        Self {
            requested_id: id.to_string(),
            lookup,
            quantity: 1,
            adding_to_cart: false,
        }
    }

    pub fn food(&self) -> Option<&'static FoodItem> {
        match self.lookup {
            FoodLookup::Found(food) => Some(food),
            FoodLookup::NotFound => None,
        }
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    pub fn can_decrement(&self) -> bool {
        self.quantity > 1
    }

    pub fn line_total(&self) -> f64 {
        self.food().map_or(0.0, |food| food.price * self.quantity as f64)
    }

    pub fn button_label(&self) -> String {
        match self.food() {
            None => String::new(),
            Some(_) if self.adding_to_cart => "Adding to Cart...".to_string(),
            Some(food) if food.available => {
                format!("Add to Cart - {}", format_money(self.line_total()))
            }
            Some(_) => "Not Available".to_string(),
        }
    }

    /// Entry point for the add-to-cart button. Sets the pending flag on `Start`.
    pub fn begin_add_to_cart(&mut self) -> AddToCart {
        let Some(food) = self.food() else {
            return AddToCart::Ignored;
        };
        if self.adding_to_cart {
            debug!("Add to cart already pending for {}", food.name);
            return AddToCart::Ignored;
        }
        if !food.available {
            return AddToCart::Unavailable(Dialog::alert(
                "Not Available",
                "This item is currently not available.",
            ));
        }
        info!("Adding {}x {} to cart", self.quantity, food.name);
        self.adding_to_cart = true;
        AddToCart::Start
    }

    /// Clear the pending flag and build the confirmation dialog.
    /// Returns `None` if nothing was pending.
    pub fn finish_add_to_cart(&mut self) -> Option<Dialog> {
        if !self.adding_to_cart {
            return None;
        }
        self.adding_to_cart = false;
        let food = self.food()?;
        Some(
            Dialog::with_buttons(
                "🎉 Added to Cart!",
                format!("{}x {} has been added to your cart.", self.quantity, food.name),
                vec![
                    DialogButton::new("Continue Shopping", ButtonStyle::Default, DialogAction::Back),
                    DialogButton::new(
                        "🛒 View Cart",
                        ButtonStyle::Default,
                        DialogAction::Navigate(Destination::Tab(CART)),
                    ),
                ],
            )
            .not_cancelable(),
        )
    }
}
