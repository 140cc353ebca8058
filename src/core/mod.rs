//! # Core Application Logic
//!
//! This module contains FoodExpress's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and the navigation stack
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`cart`]: Cart line items, quantity updates and derived totals
//! - [`tab_focus`]: Tab bar focus animation and the navigation host seam
//! - [`navigation`]: Tab routes and the host implementation used by the app
//! - [`catalog`]: Seed data (foods, offers, restaurants, cart seed)
//! - [`food_detail`], [`notifications`], [`orders`], [`profile`], [`splash`]:
//!   per-screen view models
//! - [`dialog`]: Modal dialogs and the actions their buttons trigger
//! - [`config`]: Settings file, env vars and CLI resolution

pub mod action;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod dialog;
pub mod food_detail;
pub mod navigation;
pub mod notifications;
pub mod orders;
pub mod profile;
pub mod splash;
pub mod state;
pub mod tab_focus;

/// A plain RGB color. Core code stays free of terminal color types;
/// the TUI maps this onto its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear blend from `self` to `other`, `t` clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }
}

/// Brand accent used across screens.
pub const ACCENT: Rgb = Rgb(0x45, 0xB7, 0xD1);

/// Format a monetary amount the way every screen shows it: `$12.34`.
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}
