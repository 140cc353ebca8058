//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as struct fields:
//! - `TitleBar`: top status line with the screen title and unread badge
//! - `TabBar`: animated bottom navigation
//! - `DialogOverlay`: modal alert with buttons
//! - `SplashView`, `FoodDetailView`
//!
//! ### Stateful Screens (Persistent State + Transient Wrapper)
//!
//! Screens whose selection or scroll offset survives between frames keep a
//! `...State` struct in `TuiState` and implement `EventHandler` on it. The
//! matching view borrows that state for one frame:
//!
//! ```rust,ignore
//! let mut view = CartView::new(&app.cart, app.pricing, &mut tui.cart);
//! view.render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file, shared helpers)
//! ├── title_bar.rs
//! ├── tab_bar.rs
//! ├── dialog.rs
//! ├── splash.rs
//! ├── home.rs
//! ├── explore.rs
//! ├── cart.rs
//! ├── profile.rs
//! ├── food_detail.rs
//! ├── orders.rs
//! └── notifications.rs
//! ```

pub mod cart;
pub mod dialog;
pub mod explore;
pub mod food_detail;
pub mod home;
pub mod notifications;
pub mod orders;
pub mod profile;
pub mod splash;
pub mod tab_bar;
mod title_bar;

pub use cart::{CartState, CartView};
pub use dialog::DialogOverlay;
pub use explore::{ExploreState, ExploreView};
pub use food_detail::FoodDetailView;
pub use home::{HomeState, HomeView};
pub use notifications::{NotificationsState, NotificationsView};
pub use orders::{OrdersState, OrdersView};
pub use profile::{ProfileState, ProfileView};
pub use splash::SplashView;
pub use tab_bar::TabBar;
pub use title_bar::TitleBar;

use ratatui::style::Color;
use ratatui::widgets::ListState;
use unicode_width::UnicodeWidthChar;

use crate::core::Rgb;

pub fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Glyph for a food category or restaurant cuisine.
pub fn food_icon(kind: &str) -> &'static str {
    match kind {
        "Pizza" | "Italian" => "🍕",
        "Burgers" | "American" => "🍔",
        "Sushi" | "Japanese" => "🍣",
        "Desserts" => "🍰",
        "Drinks" => "🥤",
        _ => "🍽",
    }
}

/// Truncate to fit `max_width` terminal columns, adding "..." if needed.
pub fn truncate(s: &str, max_width: usize) -> String {
    if unicode_width::UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}

/// A list selection that stays inside `0..len` as the list changes size.
#[derive(Debug, Default)]
pub struct Selection {
    pub list_state: ListState,
}

impl Selection {
    pub fn selected(&self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.list_state.selected().unwrap_or(0).min(len - 1))
    }

    pub fn move_by(&mut self, delta: isize, len: usize) {
        let Some(current) = self.selected(len) else {
            self.list_state.select(None);
            return;
        };
        let next = current.saturating_add_signed(delta).min(len - 1);
        self.list_state.select(Some(next));
    }

    /// Clamp before rendering so a shrunken list never points past its end.
    pub fn clamp(&mut self, len: usize) {
        let selected = self.selected(len);
        self.list_state.select(selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_by_width() {
        assert_eq!(truncate("Pizza", 10), "Pizza");
        assert_eq!(truncate("Margherita Pizza", 10), "Margher...");
        assert_eq!(truncate("abc", 2), "..");
        // Wide glyphs count as two columns.
        assert_eq!(truncate("🍕🍕🍕🍕", 7), "🍕🍕...");
    }

    #[test]
    fn test_selection_clamps() {
        let mut selection = Selection::default();
        assert_eq!(selection.selected(0), None);
        assert_eq!(selection.selected(3), Some(0));

        selection.move_by(5, 3);
        assert_eq!(selection.selected(3), Some(2));
        selection.move_by(-1, 3);
        assert_eq!(selection.selected(3), Some(1));

        selection.clamp(1);
        assert_eq!(selection.list_state.selected(), Some(0));
        selection.clamp(0);
        assert_eq!(selection.list_state.selected(), None);
    }
}
