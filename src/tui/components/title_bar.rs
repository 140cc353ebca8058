//! # TitleBar Component
//!
//! Top status line: app name, the current screen title, a transient status
//! message, and an unread-notifications badge on the right.
//!
//! Purely presentational. All props are plain struct fields so the parent
//! can build it from whatever state it has:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new("Cart".into(), app.status_message.clone(), 2);
//! title_bar.render(frame, area);
//! ```
//!
//! Narrow terminals drop the status message before the screen title.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::component::Component;
use crate::tui::components::truncate;

pub struct TitleBar {
    pub screen_title: String,
    pub status_message: String,
    pub unread: usize,
}

impl TitleBar {
    pub fn new(screen_title: String, status_message: String, unread: usize) -> Self {
        Self {
            screen_title,
            status_message,
            unread,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let badge = if self.unread > 0 {
            format!(" 🔔 {} ", self.unread)
        } else {
            String::new()
        };
        let badge_width = unicode_width::UnicodeWidthStr::width(badge.as_str()) as u16;
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(badge_width)]).areas(area);

        let title_text = if self.status_message.is_empty() {
            format!("FoodExpress | {}", self.screen_title)
        } else {
            format!("FoodExpress | {} | {}", self.screen_title, self.status_message)
        };
        let title = Span::styled(
            truncate(&title_text, left.width as usize),
            Style::new().add_modifier(Modifier::BOLD),
        );
        frame.render_widget(Line::from(title), left);

        if !badge.is_empty() {
            let style = Style::new().fg(Color::White).bg(Color::Rgb(0xFF, 0x6B, 0x6B));
            frame.render_widget(Span::styled(badge, style), right);
        }
    }
}
