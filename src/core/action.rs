//! # Actions
//!
//! Everything that can happen in FoodExpress becomes an `Action`.
//! User presses `+` on the cart? That's `Action::UpdateQuantity`.
//! The simulated add-to-cart request finishes? That's `Action::AddToCartCompleted`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing any I/O the adapter must perform.
//! No side effects here. Timers and terminals live in the `tui` module.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! While a dialog is open it is modal: only dialog actions, ticks, quit and
//! background completions get through.

use std::time::Duration;

use log::{debug, info};

use crate::core::cart::{Checkout, QuantityChange, round_cents};
use crate::core::dialog::{ButtonStyle, Dialog, DialogAction, DialogButton};
use crate::core::food_detail::AddToCart;
use crate::core::format_money;
use crate::core::navigation::Destination;
use crate::core::notifications::{clear_all_dialog, cleared_dialog, mark_all_read_dialog};
use crate::core::profile::{QuickActionResult, edit_profile_dialog};
use crate::core::state::App;
use crate::core::tab_focus::{NavigationHost, TabPressOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Advance animations and timers.
    Tick(Duration),
    SkipSplash,
    PressTab(usize),
    Open(Destination),
    Back,
    UpdateQuantity { id: String, quantity: i64 },
    Checkout,
    FoodQuantityUp,
    FoodQuantityDown,
    AddToCart,
    AddToCartCompleted { food_id: String },
    PressNotification(String),
    MarkAllRead,
    ClearAll,
    QuickAction(String),
    EditProfile,
    DialogNext,
    DialogPrev,
    DialogConfirm,
    /// Choose a button directly, e.g. by mouse.
    DialogChoose(usize),
    DialogCancel,
    Quit,
}

/// Side effects the adapter has to carry out after `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    /// Send `AddToCartCompleted { food_id }` back after `delay`.
    ScheduleAddToCart { food_id: String, delay: Duration },
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Tick(dt) => {
            tick(app, dt);
            Effect::None
        }
        Action::Quit => Effect::Quit,
        Action::AddToCartCompleted { food_id } => {
            complete_add_to_cart(app, &food_id);
            Effect::None
        }
        Action::DialogNext => {
            if let Some(dialog) = app.dialog.as_mut() {
                dialog.select_next();
            }
            Effect::None
        }
        Action::DialogPrev => {
            if let Some(dialog) = app.dialog.as_mut() {
                dialog.select_prev();
            }
            Effect::None
        }
        Action::DialogConfirm => {
            if let Some(dialog) = app.dialog.take() {
                apply_dialog_action(app, dialog.selected_action());
            }
            Effect::None
        }
        Action::DialogChoose(index) => {
            let chosen = app.dialog.as_ref().and_then(|d| d.action_at(index));
            if let Some(chosen) = chosen {
                app.dialog = None;
                apply_dialog_action(app, chosen);
            }
            Effect::None
        }
        Action::DialogCancel => {
            if app.dialog.as_ref().is_some_and(|d| d.cancelable) {
                app.dialog = None;
            }
            Effect::None
        }
        _ if app.dialog.is_some() => {
            debug!("Ignoring {:?} while a dialog is open", action);
            Effect::None
        }
        Action::SkipSplash => {
            app.finish_splash();
            Effect::None
        }
        _ if app.splash.is_some() => Effect::None,
        Action::PressTab(index) => {
            press_tab(app, index);
            Effect::None
        }
        Action::Open(destination) => {
            app.go_to(destination);
            Effect::None
        }
        Action::Back => {
            app.back();
            Effect::None
        }
        Action::UpdateQuantity { id, quantity } => {
            match app.cart.update_quantity(&id, quantity) {
                QuantityChange::Removed => app.status_message = "Item removed from cart".into(),
                QuantityChange::Updated | QuantityChange::Unknown => {}
            }
            Effect::None
        }
        Action::Checkout => {
            app.dialog = Some(checkout_dialog(app));
            Effect::None
        }
        Action::FoodQuantityUp => {
            if let Some(detail) = app.food_detail_mut() {
                detail.increment();
            }
            Effect::None
        }
        Action::FoodQuantityDown => {
            if let Some(detail) = app.food_detail_mut() {
                detail.decrement();
            }
            Effect::None
        }
        Action::AddToCart => start_add_to_cart(app),
        Action::PressNotification(id) => {
            if let Some(entry) = app.notifications.press(&id) {
                app.dialog = Some(entry.dialog());
            }
            Effect::None
        }
        Action::MarkAllRead => {
            app.notifications.mark_all_read();
            app.dialog = Some(mark_all_read_dialog());
            Effect::None
        }
        Action::ClearAll => {
            app.dialog = Some(clear_all_dialog());
            Effect::None
        }
        Action::QuickAction(id) => {
            let result = app.profile.quick_action(&id).map(|a| a.activate());
            match result {
                Some(QuickActionResult::Navigate(destination)) => app.go_to(destination),
                Some(QuickActionResult::Dialog(dialog)) => app.dialog = Some(dialog),
                None => debug!("Unknown quick action {}", id),
            }
            Effect::None
        }
        Action::EditProfile => {
            app.dialog = Some(edit_profile_dialog());
            Effect::None
        }
    }
}

fn tick(app: &mut App, dt: Duration) {
    if let Some(splash) = app.splash.as_mut() {
        splash.advance(dt);
        if splash.is_finished() {
            app.finish_splash();
        }
    }
    app.tab_bar.tick(dt);
}

fn press_tab(app: &mut App, index: usize) {
    if !app.on_tabs() {
        return;
    }
    let outcome = app.tab_bar.on_tab_press(index, &mut app.tabs);
    if outcome == TabPressOutcome::Navigated {
        app.tab_bar.sync(app.tabs.active_index());
        if let Some(route) = app.tabs.active_route() {
            app.status_message = route.title.clone();
        }
    }
}

fn checkout_dialog(app: &App) -> Dialog {
    match app.cart.checkout(&app.pricing) {
        Checkout::EmptyCart => {
            Dialog::alert("Empty Cart", "Please add some items to your cart first.")
        }
        Checkout::Confirm(summary) => Dialog::with_buttons(
            "Proceed to Checkout",
            format!(
                "Total: {}\nItems: {}",
                format_money(round_cents(summary.subtotal)),
                summary.item_count
            ),
            vec![
                DialogButton::cancel("Cancel"),
                DialogButton::new("Checkout", ButtonStyle::Default, DialogAction::PlaceOrder),
            ],
        )
        .focus_last(),
    }
}

fn start_add_to_cart(app: &mut App) -> Effect {
    let delay = app.add_to_cart_delay;
    let Some(detail) = app.food_detail_mut() else {
        return Effect::None;
    };
    match detail.begin_add_to_cart() {
        AddToCart::Start => Effect::ScheduleAddToCart {
            food_id: detail.requested_id.clone(),
            delay,
        },
        AddToCart::Unavailable(dialog) => {
            app.dialog = Some(dialog);
            Effect::None
        }
        AddToCart::Ignored => Effect::None,
    }
}

/// Only the detail screen that started the request may finish it. If the
/// user has navigated away, the completion is dropped.
fn complete_add_to_cart(app: &mut App, food_id: &str) {
    let dialog = match app.food_detail_mut() {
        Some(detail) if detail.requested_id == food_id => detail.finish_add_to_cart(),
        _ => None,
    };
    match dialog {
        Some(dialog) => app.dialog = Some(dialog),
        None => debug!("Dropping add-to-cart completion for {}", food_id),
    }
}

fn apply_dialog_action(app: &mut App, action: DialogAction) {
    match action {
        DialogAction::Dismiss => {}
        DialogAction::Back => {
            app.back();
        }
        DialogAction::Navigate(destination) => app.go_to(destination),
        DialogAction::Alert(next) => app.dialog = Some(*next),
        DialogAction::PlaceOrder => {
            let summary = app.cart_summary();
            info!(
                "Order placed: {} items, {}",
                summary.item_count,
                format_money(summary.total)
            );
            app.dialog = Some(Dialog::alert("Success", "Order placed successfully!"));
        }
        DialogAction::ClearNotifications => {
            app.notifications.clear();
            app.dialog = Some(cleared_dialog());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cart::{Cart, CartLineItem, TotalsRounding};
    use crate::core::navigation::{CART, HOME};
    use crate::core::state::{Screen, View};
    use crate::test_support::test_app;

    fn settle(app: &mut App) {
        for _ in 0..200 {
            update(app, Action::Tick(Duration::from_millis(16)));
        }
    }

    #[test]
    fn test_quit_returns_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_press_tab_moves_focus_and_animates() {
        let mut app = test_app();
        update(&mut app, Action::PressTab(2));
        assert_eq!(app.view(), View::Tab(2));
        assert_eq!(app.status_message, "Cart");
        assert!(app.is_animating());

        settle(&mut app);
        assert!(!app.is_animating());
        assert_eq!(app.tab_bar.progress(2), 1.0);
        assert_eq!(app.tab_bar.progress(0), 0.0);
    }

    #[test]
    fn test_press_focused_tab_is_noop() {
        let mut app = test_app();
        update(&mut app, Action::PressTab(0));
        assert!(!app.is_animating());
        assert_eq!(app.status_message, "Welcome to FoodExpress!");
    }

    #[test]
    fn test_splash_blocks_input_until_skipped() {
        let mut app = App::new(&Default::default());
        update(&mut app, Action::PressTab(1));
        assert!(matches!(app.view(), View::Splash(_)));

        update(&mut app, Action::SkipSplash);
        assert_eq!(app.view(), View::Tab(0));
    }

    #[test]
    fn test_splash_finishes_on_tick() {
        let mut app = App::new(&Default::default());
        update(&mut app, Action::Tick(Duration::from_secs(6)));
        assert!(app.splash.is_none());
    }

    #[test]
    fn test_update_quantity_removes_at_zero() {
        let mut app = test_app();
        update(
            &mut app,
            Action::UpdateQuantity {
                id: "2".into(),
                quantity: 0,
            },
        );
        assert!(app.cart.get("2").is_none());
        assert_eq!(app.status_message, "Item removed from cart");
    }

    #[test]
    fn test_checkout_confirm_dialog() {
        let mut app = test_app();
        update(&mut app, Action::Checkout);
        let dialog = app.dialog.clone().expect("dialog");
        assert_eq!(dialog.title, "Proceed to Checkout");
        assert_eq!(dialog.message, "Total: $25.96\nItems: 4");
        assert_eq!(dialog.selected_action(), DialogAction::PlaceOrder);

        update(&mut app, Action::DialogConfirm);
        let success = app.dialog.clone().expect("success dialog");
        assert_eq!(success.message, "Order placed successfully!");
        // Placing an order leaves the cart as it was.
        assert_eq!(app.cart.items().len(), 3);
    }

    #[test]
    fn test_checkout_total_is_cent_rounded_subtotal() {
        let mut app = test_app();
        app.pricing.rounding = TotalsRounding::Exact;
        app.cart = Cart::new(vec![CartLineItem {
            id: "x".into(),
            name: "Half cent".into(),
            unit_price: 0.125,
            quantity: 1,
            image: String::new(),
            description: String::new(),
        }]);
        update(&mut app, Action::Checkout);
        let dialog = app.dialog.clone().expect("dialog");
        // Tax and delivery are left out of the confirmation figure.
        assert_eq!(dialog.message, "Total: $0.13\nItems: 1");
    }

    #[test]
    fn test_checkout_empty_cart() {
        let mut app = test_app();
        for id in ["1", "2", "3"] {
            update(
                &mut app,
                Action::UpdateQuantity {
                    id: id.into(),
                    quantity: 0,
                },
            );
        }
        update(&mut app, Action::Checkout);
        assert_eq!(app.dialog.as_ref().map(|d| d.title.as_str()), Some("Empty Cart"));
    }

    #[test]
    fn test_dialog_is_modal() {
        let mut app = test_app();
        update(&mut app, Action::EditProfile);
        update(&mut app, Action::PressTab(3));
        assert_eq!(app.view(), View::Tab(0));

        update(&mut app, Action::DialogCancel);
        assert!(app.dialog.is_none());
        update(&mut app, Action::PressTab(3));
        assert_eq!(app.view(), View::Tab(3));
    }

    #[test]
    fn test_add_to_cart_flow() {
        let mut app = test_app();
        update(&mut app, Action::Open(Destination::FoodDetail("2".into())));
        update(&mut app, Action::FoodQuantityUp);

        let effect = update(&mut app, Action::AddToCart);
        assert_eq!(
            effect,
            Effect::ScheduleAddToCart {
                food_id: "2".into(),
                delay: app.add_to_cart_delay,
            }
        );
        // Second press while pending does nothing.
        assert_eq!(update(&mut app, Action::AddToCart), Effect::None);

        update(&mut app, Action::AddToCartCompleted { food_id: "2".into() });
        let dialog = app.dialog.clone().expect("confirmation");
        assert_eq!(dialog.message, "2x Veggie Burger has been added to your cart.");

        // Not cancelable: Esc keeps it open.
        update(&mut app, Action::DialogCancel);
        assert!(app.dialog.is_some());

        // "View Cart" jumps to the cart tab.
        update(&mut app, Action::DialogChoose(1));
        assert_eq!(app.view(), View::Tab(2));
        assert_eq!(app.tabs.index_of(CART), Some(2));
    }

    #[test]
    fn test_continue_shopping_goes_back() {
        let mut app = test_app();
        update(&mut app, Action::Open(Destination::FoodDetail("1".into())));
        update(&mut app, Action::AddToCart);
        update(&mut app, Action::AddToCartCompleted { food_id: "1".into() });
        update(&mut app, Action::DialogChoose(0));
        assert!(app.on_tabs());
    }

    #[test]
    fn test_stale_completion_is_dropped() {
        let mut app = test_app();
        update(&mut app, Action::Open(Destination::FoodDetail("1".into())));
        update(&mut app, Action::AddToCart);
        update(&mut app, Action::Back);
        update(&mut app, Action::AddToCartCompleted { food_id: "1".into() });
        assert!(app.dialog.is_none());
    }

    #[test]
    fn test_unavailable_item_shows_dialog() {
        let mut app = test_app();
        update(&mut app, Action::Open(Destination::FoodDetail("3".into())));
        assert_eq!(update(&mut app, Action::AddToCart), Effect::None);
        assert_eq!(app.dialog.as_ref().map(|d| d.title.as_str()), Some("Not Available"));
    }

    #[test]
    fn test_clear_all_requires_confirmation() {
        let mut app = test_app();
        update(&mut app, Action::Open(Destination::Notifications));
        update(&mut app, Action::ClearAll);
        assert_eq!(app.notifications.entries().len(), 8);

        // Cancel is first; choose the destructive button.
        update(&mut app, Action::DialogNext);
        update(&mut app, Action::DialogConfirm);
        assert!(app.notifications.is_empty());
        assert_eq!(app.dialog.as_ref().map(|d| d.title.as_str()), Some("Cleared"));
    }

    #[test]
    fn test_press_notification_marks_read() {
        let mut app = test_app();
        update(&mut app, Action::PressNotification("2".into()));
        assert_eq!(app.notifications.unread_count(), 1);
        assert_eq!(app.dialog.as_ref().map(|d| d.buttons[0].label.as_str()), Some("Dismiss"));
    }

    #[test]
    fn test_mark_all_read() {
        let mut app = test_app();
        update(&mut app, Action::MarkAllRead);
        assert_eq!(app.notifications.unread_count(), 0);
        assert_eq!(app.dialog.as_ref().map(|d| d.title.as_str()), Some("Success"));
    }

    #[test]
    fn test_quick_actions() {
        let mut app = test_app();
        update(&mut app, Action::QuickAction("1".into()));
        assert!(matches!(app.view(), View::Screen(Screen::Orders)));

        update(&mut app, Action::Open(Destination::Tab(HOME)));
        update(&mut app, Action::QuickAction("3".into()));
        assert_eq!(app.dialog.as_ref().map(|d| d.title.as_str()), Some("Coming Soon"));
    }
}
