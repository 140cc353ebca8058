//! # Profile Screen
//!
//! User card, stats, recent orders and the quick-action grid. One cursor
//! walks every pressable element in reading order:
//!
//! ```text
//! [Edit Profile] → [View All] → quick action 1 … quick action 6
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};

use crate::core::action::Action;
use crate::core::navigation::Destination;
use crate::core::profile::ProfileData;
use crate::core::state::App;
use crate::core::{ACCENT, format_money};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{color, truncate};
use crate::tui::event::TuiEvent;

const GRID_COLUMNS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileItem {
    EditProfile,
    ViewAllOrders,
    QuickAction(usize),
}

fn items(profile: &ProfileData) -> Vec<ProfileItem> {
    let mut items = vec![ProfileItem::EditProfile, ProfileItem::ViewAllOrders];
    items.extend((0..profile.quick_actions.len()).map(ProfileItem::QuickAction));
    items
}

#[derive(Debug, Default)]
pub struct ProfileState {
    pub selected: usize,
}

impl ProfileState {
    pub fn selected_item(&self, profile: &ProfileData) -> Option<ProfileItem> {
        let items = items(profile);
        items.get(self.selected.min(items.len().saturating_sub(1))).copied()
    }

    fn move_by(&mut self, delta: isize, len: usize) {
        self.selected = self
            .selected
            .saturating_add_signed(delta)
            .min(len.saturating_sub(1));
    }
}

impl EventHandler for ProfileState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<Action> {
        let len = items(&app.profile).len();
        let in_grid = matches!(self.selected_item(&app.profile), Some(ProfileItem::QuickAction(_)));
        match event {
            TuiEvent::Left | TuiEvent::ScrollUp => self.move_by(-1, len),
            TuiEvent::Right | TuiEvent::ScrollDown => self.move_by(1, len),
            // Up/Down jump a whole grid row once inside the quick actions.
            TuiEvent::Up if in_grid && self.selected >= 2 + GRID_COLUMNS => {
                self.move_by(-(GRID_COLUMNS as isize), len)
            }
            TuiEvent::Up if in_grid => self.selected = 1,
            TuiEvent::Up => self.move_by(-1, len),
            TuiEvent::Down if in_grid => self.move_by(GRID_COLUMNS as isize, len),
            TuiEvent::Down => self.move_by(1, len),
            TuiEvent::Char('e') => return Some(Action::EditProfile),
            TuiEvent::Enter => {
                return match self.selected_item(&app.profile)? {
                    ProfileItem::EditProfile => Some(Action::EditProfile),
                    ProfileItem::ViewAllOrders => Some(Action::Open(Destination::Orders)),
                    ProfileItem::QuickAction(i) => app
                        .profile
                        .quick_actions
                        .get(i)
                        .map(|a| Action::QuickAction(a.id.to_string())),
                };
            }
            _ => {}
        }
        None
    }
}

pub struct ProfileView<'a> {
    pub profile: &'a ProfileData,
    pub state: &'a ProfileState,
}

impl<'a> ProfileView<'a> {
    pub fn new(profile: &'a ProfileData, state: &'a ProfileState) -> Self {
        Self { profile, state }
    }

    fn highlight(&self, item: ProfileItem, style: Style) -> Style {
        if self.state.selected_item(self.profile) == Some(item) {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }
}

impl Component for ProfileView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let grid_rows = self.profile.quick_actions.len().div_ceil(GRID_COLUMNS) as u16;
        let [card, stats, recent_title, recent, actions_title, grid, _] = Layout::vertical([
            Length(6),
            Length(3),
            Length(1),
            Length(self.profile.recent_orders.len() as u16),
            Length(1),
            Length(grid_rows * 3),
            Min(0),
        ])
        .areas(area);

        let user = &self.profile.user;
        let bold = Style::new().add_modifier(Modifier::BOLD);
        let card_lines = vec![
            Line::from(vec![Span::raw("👤 "), Span::styled(user.name, bold)]),
            Line::from(user.email),
            Line::from(user.phone),
            Line::from(vec![
                Span::styled(
                    format!(" ★ {} ", user.membership),
                    Style::new().fg(Color::Black).bg(Color::Rgb(0xFF, 0xD9, 0x3D)),
                ),
                Span::raw("  "),
                Span::styled(
                    "[ Edit Profile ]",
                    self.highlight(ProfileItem::EditProfile, Style::new().fg(color(ACCENT))),
                ),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(card_lines).block(Block::bordered().border_type(BorderType::Rounded)),
            card,
        );

        let s = &self.profile.stats;
        let stat_cells = [
            (s.total_orders.to_string(), "Orders"),
            (format_money(s.total_spent), "Spent"),
            (s.favorite_items.to_string(), "Favorites"),
            (s.loyalty_points.to_string(), "Points"),
        ];
        let stat_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, stat_cells.len() as u32); stat_cells.len()])
                .split(stats);
        for ((value, label), cell) in stat_cells.iter().zip(stat_areas.iter()) {
            frame.render_widget(
                Paragraph::new(vec![
                    Line::from(Span::styled(value.clone(), bold.fg(color(ACCENT)))),
                    Line::from(*label),
                ])
                .alignment(Alignment::Center),
                *cell,
            );
        }

        let [title_left, title_right] =
            Layout::horizontal([Min(0), Length(10)]).areas(recent_title);
        frame.render_widget(Paragraph::new("Recent Orders").style(bold), title_left);
        frame.render_widget(
            Paragraph::new("View All")
                .style(self.highlight(ProfileItem::ViewAllOrders, Style::new().fg(color(ACCENT))))
                .alignment(Alignment::Right),
            title_right,
        );
        let recent_lines: Vec<Line> = self
            .profile
            .recent_orders
            .iter()
            .map(|order| {
                Line::from(vec![
                    Span::raw(format!("{:<22}", order.name)),
                    Span::styled(
                        format!("{:<12}", order.date.format("%Y-%m-%d")),
                        Style::new().fg(Color::DarkGray),
                    ),
                    Span::styled(
                        format!("{:<12}", order.status.label()),
                        Style::new().fg(color(order.status.color())),
                    ),
                    Span::raw(format_money(order.amount)),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(recent_lines), recent);

        frame.render_widget(Paragraph::new("Quick Actions").style(bold), actions_title);
        let rows = Layout::vertical(vec![Length(3); grid_rows as usize]).split(grid);
        for (index, action) in self.profile.quick_actions.iter().enumerate() {
            let Some(row) = rows.get(index / GRID_COLUMNS) else {
                continue;
            };
            let columns =
                Layout::horizontal(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                    .split(*row);
            let cell = columns[index % GRID_COLUMNS];
            let label = format!("{} {}", action.icon, action.title);
            let style = self.highlight(
                ProfileItem::QuickAction(index),
                Style::new().fg(color(action.color)),
            );
            frame.render_widget(
                Paragraph::new(truncate(&label, cell.width.saturating_sub(2) as usize))
                    .style(style)
                    .alignment(Alignment::Center)
                    .block(Block::bordered().border_type(BorderType::Rounded)),
                cell,
            );
        }
    }
}
