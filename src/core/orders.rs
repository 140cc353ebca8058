//! # Orders
//!
//! Sample order history for the "My Orders" screen.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::core::Rgb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Preparing,
    OnTheWay,
    Delivered,
}

impl OrderStatus {
    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OnTheWay => "On the way",
            OrderStatus::Delivered => "Delivered",
        }
    }

    pub fn color(self) -> Rgb {
        match self {
            OrderStatus::Delivered => Rgb(0x4C, 0xAF, 0x50),
            OrderStatus::OnTheWay => Rgb(0xFF, 0x98, 0x00),
            OrderStatus::Preparing => Rgb(0x21, 0x96, 0xF3),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            OrderStatus::Delivered => "✔",
            OrderStatus::OnTheWay => "🚲",
            OrderStatus::Preparing => "🍳",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderEntry {
    pub id: String,
    pub order_number: String,
    pub items: Vec<String>,
    pub total: f64,
    pub status: OrderStatus,
    pub placed_at: NaiveDateTime,
}

impl OrderEntry {
    pub fn date_label(&self) -> String {
        self.placed_at.format("%Y-%m-%d").to_string()
    }

    pub fn time_label(&self) -> String {
        self.placed_at.format("%-I:%M %p").to_string()
    }
}

fn at(date: (i32, u32, u32), time: (u32, u32)) -> NaiveDateTime {
    let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap_or_default();
    let time = NaiveTime::from_hms_opt(time.0, time.1, 0).unwrap_or_default();
    date.and_time(time)
}

fn order(
    id: &str,
    number: &str,
    items: &[&str],
    total: f64,
    status: OrderStatus,
    placed_at: NaiveDateTime,
) -> OrderEntry {
    OrderEntry {
        id: id.to_string(),
        order_number: number.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
        total,
        status,
        placed_at,
    }
}

pub fn sample_orders() -> Vec<OrderEntry> {
    vec![
        order(
            "1",
            "#ORD-001",
            &["Margherita Pizza", "Coke"],
            12.99,
            OrderStatus::Delivered,
            at((2024, 6, 1), (14, 30)),
        ),
        order(
            "2",
            "#ORD-002",
            &["Sushi Platter", "Green Tea"],
            18.99,
            OrderStatus::OnTheWay,
            at((2024, 6, 2), (13, 15)),
        ),
        order(
            "3",
            "#ORD-003",
            &["Veggie Burger", "French Fries"],
            9.99,
            OrderStatus::Preparing,
            at((2024, 6, 2), (12, 45)),
        ),
    ]
}
