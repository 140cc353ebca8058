//! # Application State
//!
//! Core business state for FoodExpress. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── splash: Option<SplashState>     // launch screen, replaced by the tabs
//! ├── stack: Vec<Screen>              // screens pushed above the tabs
//! ├── tabs: TabNavigator              // tab routes + active index (the host)
//! ├── tab_bar: TabFocusAnimator       // per-tab focus progress
//! ├── cart: Cart                      // line items, totals derived on demand
//! ├── notifications: NotificationCenter
//! ├── orders: Vec<OrderEntry>
//! ├── profile: ProfileData
//! ├── dialog: Option<Dialog>          // modal, blocks other input
//! ├── status_message: String          // title bar text
//! ├── pricing: Pricing                // tax, delivery fee, rounding mode
//! └── add_to_cart_delay: Duration     // simulated request latency
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::time::Duration;

use log::{debug, info};

use crate::core::cart::{Cart, CartSummary, Pricing};
use crate::core::catalog::CART_SEED;
use crate::core::config::ResolvedConfig;
use crate::core::dialog::Dialog;
use crate::core::food_detail::FoodDetailState;
use crate::core::navigation::{Destination, TabNavigator};
use crate::core::notifications::{NotificationCenter, sample_notifications};
use crate::core::orders::{OrderEntry, sample_orders};
use crate::core::profile::ProfileData;
use crate::core::splash::SplashState;
use crate::core::tab_focus::{NavigationHost, TabFocusAnimator};

/// A screen pushed on top of the tabs.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    FoodDetail(FoodDetailState),
    Orders,
    Notifications,
}

/// What is currently visible underneath any dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    Splash(&'a SplashState),
    /// Index into the tab routes.
    Tab(usize),
    Screen(&'a Screen),
}

pub struct App {
    pub splash: Option<SplashState>,
    pub stack: Vec<Screen>,
    pub tabs: TabNavigator,
    pub tab_bar: TabFocusAnimator,
    pub cart: Cart,
    pub notifications: NotificationCenter,
    pub orders: Vec<OrderEntry>,
    pub profile: ProfileData,
    pub dialog: Option<Dialog>,
    pub status_message: String,
    pub pricing: Pricing,
    pub add_to_cart_delay: Duration,
}

impl App {
    pub fn new(config: &ResolvedConfig) -> Self {
        let tabs = TabNavigator::with_default_tabs();
        let tab_bar = TabFocusAnimator::new(tabs.routes().len(), tabs.active_index(), config.tab_spring);
        let splash = if config.skip_splash {
            None
        } else {
            Some(SplashState::new(config.splash_duration))
        };
        Self {
            splash,
            stack: Vec::new(),
            tabs,
            tab_bar,
            cart: Cart::from_seed(CART_SEED),
            notifications: NotificationCenter::new(sample_notifications()),
            orders: sample_orders(),
            profile: ProfileData::sample(),
            dialog: None,
            status_message: String::from("Welcome to FoodExpress!"),
            pricing: config.pricing,
            add_to_cart_delay: config.add_to_cart_delay,
        }
    }

    pub fn view(&self) -> View<'_> {
        if let Some(splash) = &self.splash {
            return View::Splash(splash);
        }
        match self.stack.last() {
            Some(screen) => View::Screen(screen),
            None => View::Tab(self.tabs.active_index()),
        }
    }

    pub fn on_tabs(&self) -> bool {
        matches!(self.view(), View::Tab(_))
    }

    pub fn food_detail_mut(&mut self) -> Option<&mut FoodDetailState> {
        if self.splash.is_some() {
            return None;
        }
        match self.stack.last_mut() {
            Some(Screen::FoodDetail(state)) => Some(state),
            _ => None,
        }
    }

    pub fn cart_summary(&self) -> CartSummary {
        self.cart.summary(&self.pricing)
    }

    /// True while something on screen is still moving.
    pub fn is_animating(&self) -> bool {
        let pending = self
            .stack
            .iter()
            .any(|s| matches!(s, Screen::FoodDetail(state) if state.adding_to_cart));
        self.splash.is_some() || !self.tab_bar.is_settled() || pending
    }

    /// Replace the splash with the tabs. No back entry is left behind.
    pub fn finish_splash(&mut self) {
        if self.splash.take().is_some() {
            info!("Splash finished");
        }
    }

    pub fn push(&mut self, screen: Screen) {
        debug!("Push {:?}", screen);
        self.stack.push(screen);
    }

    /// Pop the top screen. Returns false when already at the tabs.
    pub fn back(&mut self) -> bool {
        self.stack.pop().is_some()
    }

    pub fn go_to(&mut self, destination: Destination) {
        match destination {
            Destination::Tab(name) => {
                self.stack.clear();
                self.tabs.navigate(name);
                self.tab_bar.sync(self.tabs.active_index());
            }
            Destination::FoodDetail(id) => self.push(Screen::FoodDetail(FoodDetailState::new(&id))),
            Destination::Orders => self.push(Screen::Orders),
            Destination::Notifications => self.push(Screen::Notifications),
        }
    }
}
