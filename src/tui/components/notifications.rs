//! # Notifications Screen
//!
//! Unread count header and the notification list. Unread entries carry a
//! dot and a bold title.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, Paragraph};

use crate::core::ACCENT;
use crate::core::action::Action;
use crate::core::notifications::NotificationCenter;
use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{Selection, color};
use crate::tui::event::TuiEvent;

#[derive(Debug, Default)]
pub struct NotificationsState {
    pub entries: Selection,
}

impl EventHandler for NotificationsState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<Action> {
        let entries = app.notifications.entries();
        match event {
            TuiEvent::Up | TuiEvent::ScrollUp => {
                self.entries.move_by(-1, entries.len());
                None
            }
            TuiEvent::Down | TuiEvent::ScrollDown => {
                self.entries.move_by(1, entries.len());
                None
            }
            TuiEvent::Enter => {
                let index = self.entries.selected(entries.len())?;
                Some(Action::PressNotification(entries[index].id.clone()))
            }
            TuiEvent::Char('m') => Some(Action::MarkAllRead),
            TuiEvent::Char('x') if !entries.is_empty() => Some(Action::ClearAll),
            _ => None,
        }
    }
}

pub struct NotificationsView<'a> {
    pub center: &'a NotificationCenter,
    pub state: &'a mut NotificationsState,
}

impl<'a> NotificationsView<'a> {
    pub fn new(center: &'a NotificationCenter, state: &'a mut NotificationsState) -> Self {
        Self { center, state }
    }
}

impl Component for NotificationsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.center.is_empty() {
            let lines = vec![
                Line::from(""),
                Line::from("🔕"),
                Line::from(Span::styled(
                    "No Notifications",
                    Style::new().add_modifier(Modifier::BOLD),
                )),
                Line::from("You're all caught up!"),
            ];
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
            return;
        }

        let [header, list_area, help] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        let unread = self.center.unread_count();
        let header_text = if unread > 0 {
            format!("{unread} unread")
        } else {
            "All read".to_string()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(header_text, Style::new().fg(color(ACCENT)))),
            header,
        );

        let items: Vec<ListItem> = self
            .center
            .entries()
            .iter()
            .map(|entry| {
                let (marker, title_style) = if entry.read {
                    ("  ", Style::new())
                } else {
                    ("● ", Style::new().add_modifier(Modifier::BOLD))
                };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(marker, Style::new().fg(color(ACCENT))),
                        Span::styled(format!("{} ", entry.icon), Style::new().fg(color(entry.color))),
                        Span::styled(entry.title.clone(), title_style),
                        Span::styled(format!("  {}", entry.time), Style::new().fg(Color::DarkGray)),
                    ]),
                    Line::from(format!("    {}", entry.message)),
                ])
            })
            .collect();
        self.state.entries.clamp(self.center.entries().len());
        let list = List::new(items)
            .highlight_style(Style::new().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, list_area, &mut self.state.entries.list_state);

        frame.render_widget(
            Paragraph::new("Enter Open  m Mark all read  x Clear all  Esc Back")
                .style(Style::new().add_modifier(Modifier::DIM))
                .alignment(Alignment::Center),
            help,
        );
    }
}
