//! # Profile
//!
//! User card, stats, recent orders and the quick-action grid.

use chrono::NaiveDate;

use crate::core::Rgb;
use crate::core::dialog::Dialog;
use crate::core::navigation::Destination;
use crate::core::orders::OrderStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub name: &'static str,
    pub first_name: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub membership: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserStats {
    pub total_orders: u32,
    pub total_spent: f64,
    pub favorite_items: u32,
    pub loyalty_points: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentOrder {
    pub id: &'static str,
    pub name: &'static str,
    pub date: NaiveDate,
    pub status: OrderStatus,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickActionTarget {
    Orders,
    Notifications,
    ComingSoon,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuickAction {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
    pub color: Rgb,
    pub target: QuickActionTarget,
}

/// Where a quick action leads: another screen, or a placeholder dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum QuickActionResult {
    Navigate(Destination),
    Dialog(Dialog),
}

impl QuickAction {
    pub fn activate(&self) -> QuickActionResult {
        match self.target {
            QuickActionTarget::Orders => QuickActionResult::Navigate(Destination::Orders),
            QuickActionTarget::Notifications => {
                QuickActionResult::Navigate(Destination::Notifications)
            }
            QuickActionTarget::ComingSoon => QuickActionResult::Dialog(Dialog::alert(
                "Coming Soon",
                format!("{} feature will be available soon!", self.title),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileData {
    pub user: UserProfile,
    pub stats: UserStats,
    pub recent_orders: Vec<RecentOrder>,
    pub quick_actions: Vec<QuickAction>,
}

impl ProfileData {
    pub fn sample() -> Self {
        let date = |d: u32| NaiveDate::from_ymd_opt(2024, 1, d).unwrap_or_default();
        let recent = |id, name, d, amount| RecentOrder {
            id,
            name,
            date: date(d),
            status: OrderStatus::Delivered,
            amount,
        };
        let action = |id, title, icon, color, target| QuickAction {
            id,
            title,
            icon,
            color,
            target,
        };
        use QuickActionTarget::*;

        Self {
            user: UserProfile {
                name: "Nehal Ingole",
                first_name: "Nehal",
                email: "nehal.ingole@example.com",
                phone: "+1 (555) 123-4567",
                membership: "Premium Member",
            },
            stats: UserStats {
                total_orders: 47,
                total_spent: 284.50,
                favorite_items: 12,
                loyalty_points: 1250,
            },
            recent_orders: vec![
                recent("1", "Margherita Pizza", 15, 12.99),
                recent("2", "Veggie Burger Combo", 14, 15.49),
                recent("3", "Sushi Platter", 13, 18.99),
                recent("4", "Chocolate Cake", 12, 6.99),
            ],
            quick_actions: vec![
                action("1", "My Orders", "🧾", Rgb(0x45, 0xB7, 0xD1), Orders),
                action("2", "Notifications", "🔔", Rgb(0xFF, 0x6B, 0x6B), Notifications),
                action("3", "Favorites", "♥", Rgb(0xFF, 0xD9, 0x3D), ComingSoon),
                action("4", "Settings", "⚙", Rgb(0x6C, 0x5C, 0xE7), ComingSoon),
                action("5", "Help & Support", "?", Rgb(0x00, 0xB8, 0x94), ComingSoon),
                action("6", "About App", "ℹ", Rgb(0xFD, 0x79, 0xA8), ComingSoon),
            ],
        }
    }

    pub fn quick_action(&self, id: &str) -> Option<&QuickAction> {
        self.quick_actions.iter().find(|a| a.id == id)
    }
}

pub fn edit_profile_dialog() -> Dialog {
    Dialog::alert("Edit Profile", "Profile editing feature coming soon!")
}
