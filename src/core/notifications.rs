//! # Notifications
//!
//! In-memory notification feed. The unread count is always derived from the
//! entries' `read` flags.

use log::info;

use crate::core::Rgb;
use crate::core::dialog::{ButtonStyle, Dialog, DialogAction, DialogButton};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Order,
    Promo,
    System,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEntry {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Relative label such as "2 minutes ago".
    pub time: String,
    pub read: bool,
    pub icon: &'static str,
    pub color: Rgb,
    pub action: String,
}

impl NotificationEntry {
    /// Dialog shown when the entry is pressed.
    pub fn dialog(&self) -> Dialog {
        match self.kind {
            NotificationKind::Order => Dialog::with_buttons(
                &self.title,
                &self.message,
                vec![
                    DialogButton::ok(),
                    DialogButton::new(
                        &self.action,
                        ButtonStyle::Default,
                        DialogAction::Alert(Box::new(Dialog::alert(
                            "Action",
                            format!("{} feature coming soon!", self.action),
                        ))),
                    ),
                ],
            ),
            NotificationKind::Promo => Dialog::with_buttons(
                &self.title,
                &self.message,
                vec![
                    DialogButton::cancel("Dismiss"),
                    DialogButton::new(
                        &self.action,
                        ButtonStyle::Default,
                        DialogAction::Alert(Box::new(Dialog::alert(
                            "Offer",
                            "Offer details will be shown here!",
                        ))),
                    ),
                ],
            ),
            NotificationKind::System => Dialog::alert(&self.title, &self.message),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationCenter {
    entries: Vec<NotificationEntry>,
}

impl NotificationCenter {
    pub fn new(entries: Vec<NotificationEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[NotificationEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    /// Mark one entry read and return it. Unknown ids return `None`.
    pub fn press(&mut self, id: &str) -> Option<&NotificationEntry> {
        let entry = self.entries.iter_mut().find(|n| n.id == id)?;
        entry.read = true;
        Some(entry)
    }

    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.read = true;
        }
        info!("Marked {} notifications read", self.entries.len());
    }

    pub fn clear(&mut self) {
        info!("Cleared {} notifications", self.entries.len());
        self.entries.clear();
    }
}

pub fn mark_all_read_dialog() -> Dialog {
    Dialog::alert("Success", "All notifications marked as read!")
}

pub fn clear_all_dialog() -> Dialog {
    Dialog::with_buttons(
        "Clear All Notifications",
        "Are you sure you want to clear all notifications?",
        vec![
            DialogButton::cancel("Cancel"),
            DialogButton::new("Clear All", ButtonStyle::Destructive, DialogAction::ClearNotifications),
        ],
    )
}

pub fn cleared_dialog() -> Dialog {
    Dialog::alert("Cleared", "All notifications cleared!")
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    kind: NotificationKind,
    title: &str,
    message: &str,
    time: &str,
    read: bool,
    icon: &'static str,
    color: Rgb,
    action: &str,
) -> NotificationEntry {
    NotificationEntry {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        read,
        icon,
        color,
        action: action.to_string(),
    }
}

pub fn sample_notifications() -> Vec<NotificationEntry> {
    use NotificationKind::*;
    vec![
        entry(
            "1",
            Order,
            "Order Delivered! 🎉",
            "Your Margherita Pizza has been delivered. Enjoy your meal!",
            "2 minutes ago",
            false,
            "✔",
            Rgb(0x4C, 0xAF, 0x50),
            "Rate Order",
        ),
        entry(
            "2",
            Promo,
            "Special Offer! 🎁",
            "Get 20% off on all pizzas this weekend. Use code: PIZZA20",
            "1 hour ago",
            false,
            "🎁",
            Rgb(0xFF, 0x6B, 0x6B),
            "View Offer",
        ),
        entry(
            "3",
            Order,
            "Order Status Update",
            "Your Veggie Burger is being prepared and will be ready in 15 minutes.",
            "2 hours ago",
            true,
            "🍳",
            Rgb(0x45, 0xB7, 0xD1),
            "Track Order",
        ),
        entry(
            "4",
            System,
            "Payment Successful",
            "Your payment of $15.49 has been processed successfully.",
            "3 hours ago",
            true,
            "💳",
            Rgb(0x4E, 0xCD, 0xC4),
            "View Receipt",
        ),
        entry(
            "5",
            Promo,
            "New Restaurant Added! 🍕",
            "Check out our new Italian restaurant with authentic recipes.",
            "1 day ago",
            true,
            "🍴",
            Rgb(0xFF, 0xD9, 0x3D),
            "Explore",
        ),
        entry(
            "6",
            Order,
            "Order Cancelled",
            "Your order has been cancelled as requested. Refund will be processed within 3-5 days.",
            "2 days ago",
            true,
            "✖",
            Rgb(0xFF, 0x6B, 0x6B),
            "View Details",
        ),
        entry(
            "7",
            System,
            "App Update Available",
            "A new version of Food Delivery App is available with exciting features.",
            "3 days ago",
            true,
            "⬇",
            Rgb(0x6C, 0x5C, 0xE7),
            "Update Now",
        ),
        entry(
            "8",
            Promo,
            "Birthday Special! 🎂",
            "Happy Birthday! Enjoy 50% off on your next order. Valid until tomorrow.",
            "1 week ago",
            true,
            "🎂",
            Rgb(0xFD, 0x79, 0xA8),
            "Claim Offer",
        ),
    ]
}
