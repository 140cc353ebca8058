//! # TabBar Component
//!
//! Bottom navigation drawn from the `TabFocusAnimator`'s per-tab progress.
//! A terminal can't scale glyphs, so each animated property maps to something
//! a cell grid can show:
//!
//! | Property            | Terminal rendering                          |
//! |---------------------|---------------------------------------------|
//! | translate_y         | icon and label lift one row past halfway    |
//! | icon/label scale    | bold once past halfway                      |
//! | label color         | true-color interpolation #666666 → accent   |
//! | indicator opacity   | underline bar width grows with progress     |
//!
//! Icons switch between a filled glyph for the active tab and an outline
//! glyph for the others.

use std::rc::Rc;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::ACCENT;
use crate::core::navigation::{CART, EXPLORE, HOME, PROFILE};
use crate::core::tab_focus::{INACTIVE_LABEL, TabFocusAnimator, TabRoute};
use crate::tui::component::Component;
use crate::tui::components::color;

pub const TAB_BAR_HEIGHT: u16 = 5;

/// (focused, unfocused) glyphs per route.
fn icons(route_name: &str) -> (&'static str, &'static str) {
    match route_name {
        HOME => ("◆", "◇"),
        EXPLORE => ("●", "○"),
        CART => ("■", "□"),
        PROFILE => ("▲", "△"),
        _ => ("•", "·"),
    }
}

fn cells(area: Rect, count: usize) -> Rc<[Rect]> {
    let count = count.max(1) as u32;
    Layout::horizontal(vec![Constraint::Ratio(1, count); count as usize]).split(area)
}

/// Which tab (if any) sits under a click inside the tab bar area.
pub fn tab_at(area: Rect, count: usize, column: u16, row: u16) -> Option<usize> {
    if count == 0 {
        return None;
    }
    cells(area, count)
        .iter()
        .position(|cell| cell.contains(Position::new(column, row)))
}

pub struct TabBar<'a> {
    pub routes: &'a [TabRoute],
    pub animator: &'a TabFocusAnimator,
    /// Shown next to the Cart label when non-zero.
    pub cart_count: u64,
}

impl<'a> TabBar<'a> {
    pub fn new(routes: &'a [TabRoute], animator: &'a TabFocusAnimator, cart_count: u64) -> Self {
        Self {
            routes,
            animator,
            cart_count,
        }
    }
}

impl Component for TabBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::new().fg(color(INACTIVE_LABEL)));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        for (index, cell) in cells(inner, self.routes.len()).iter().enumerate() {
            let Some(route) = self.routes.get(index) else {
                continue;
            };
            let visual = self.animator.visual(index);
            let focused = index == self.animator.active_index();
            let (filled, outline) = icons(&route.name);

            let label_color = color(visual.label_color);
            let mut style = Style::new().fg(label_color);
            if visual.label_scale > 1.025 {
                style = style.add_modifier(Modifier::BOLD);
            }
            let lift = if visual.translate_y <= -4.0 { 0 } else { 1 };

            let label = if route.name == CART && self.cart_count > 0 {
                format!("{} ({})", route.title, self.cart_count)
            } else {
                route.title.clone()
            };
            let lines = [
                Line::from(if focused { filled } else { outline }),
                Line::from(label),
            ];
            for (offset, line) in lines.into_iter().enumerate() {
                let y = cell.y + lift + offset as u16;
                if y >= cell.bottom() {
                    break;
                }
                let row = Rect::new(cell.x, y, cell.width, 1);
                frame.render_widget(
                    Paragraph::new(line).style(style).alignment(Alignment::Center),
                    row,
                );
            }

            let indicator_width = (cell.width as f32 * 0.6 * visual.indicator_opacity).round() as u16;
            if indicator_width > 0 && cell.height > 0 {
                let x = cell.x + (cell.width - indicator_width) / 2;
                let row = Rect::new(x, cell.bottom() - 1, indicator_width, 1);
                frame.render_widget(
                    Paragraph::new("━".repeat(indicator_width as usize))
                        .style(Style::new().fg(color(ACCENT))),
                    row,
                );
            }
        }
    }
}
