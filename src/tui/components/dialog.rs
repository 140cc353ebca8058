//! # Dialog Overlay
//!
//! Centered modal box drawn over whatever screen is underneath. The message
//! wraps, buttons sit on the last row, and the selected button is reversed.
//! Cancel-style buttons are dimmed and destructive ones are red.

use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::core::ACCENT;
use crate::core::dialog::{ButtonStyle, Dialog};
use crate::tui::component::Component;
use crate::tui::components::color;

const MAX_WIDTH: u16 = 54;
const BUTTON_GAP: u16 = 2;

fn button_text(label: &str) -> String {
    format!("[ {label} ]")
}

fn message_paragraph(dialog: &Dialog) -> Paragraph<'_> {
    Paragraph::new(dialog.message.as_str()).wrap(Wrap { trim: true })
}

/// Where the dialog box lands inside `area`.
pub fn dialog_area(area: Rect, dialog: &Dialog) -> Rect {
    let width = MAX_WIDTH.min(area.width.saturating_sub(4)).max(10).min(area.width);
    // Borders (2) + horizontal padding (2).
    let text_width = width.saturating_sub(4);
    let message_lines = message_paragraph(dialog).line_count(text_width) as u16;
    // Borders (2) + message + blank line + button row.
    let height = (message_lines + 4).min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn button_rects(row: Rect, dialog: &Dialog) -> Vec<Rect> {
    let widths: Vec<u16> = dialog
        .buttons
        .iter()
        .map(|b| button_text(&b.label).width() as u16)
        .collect();
    let gaps = BUTTON_GAP * widths.len().saturating_sub(1) as u16;
    let total: u16 = widths.iter().sum::<u16>() + gaps;
    let mut x = row.x + row.width.saturating_sub(total) / 2;
    widths
        .into_iter()
        .map(|w| {
            let rect = Rect::new(x, row.y, w, 1).intersection(row);
            x = x.saturating_add(w + BUTTON_GAP);
            rect
        })
        .collect()
}

fn inner(dialog_rect: Rect) -> Rect {
    Block::default()
        .borders(Borders::ALL)
        .padding(Padding::horizontal(1))
        .inner(dialog_rect)
}

/// Which button (if any) was clicked.
pub fn button_at(area: Rect, dialog: &Dialog, column: u16, row: u16) -> Option<usize> {
    let inner = inner(dialog_area(area, dialog));
    if inner.height == 0 {
        return None;
    }
    let button_row = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
    button_rects(button_row, dialog)
        .iter()
        .position(|r| r.contains(Position::new(column, row)))
}

pub struct DialogOverlay<'a> {
    pub dialog: &'a Dialog,
}

impl<'a> DialogOverlay<'a> {
    pub fn new(dialog: &'a Dialog) -> Self {
        Self { dialog }
    }
}

impl Component for DialogOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rect = dialog_area(area, self.dialog);
        frame.render_widget(Clear, rect);

        let help = if self.dialog.cancelable {
            " ←/→ Choose  Enter Select  Esc Close "
        } else {
            " ←/→ Choose  Enter Select "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::new().fg(color(ACCENT)))
            .title(format!(" {} ", self.dialog.title))
            .title_style(Style::new().add_modifier(Modifier::BOLD))
            .title_bottom(Line::from(help).centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        if inner.height == 0 {
            return;
        }

        let message_area = Rect::new(inner.x, inner.y, inner.width, inner.height.saturating_sub(2));
        frame.render_widget(
            message_paragraph(self.dialog).alignment(Alignment::Center),
            message_area,
        );

        let button_row = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
        for (index, (button, rect)) in self
            .dialog
            .buttons
            .iter()
            .zip(button_rects(button_row, self.dialog))
            .enumerate()
        {
            let mut style = match button.style {
                ButtonStyle::Default => Style::new().fg(color(ACCENT)),
                ButtonStyle::Cancel => Style::new().fg(Color::Gray),
                ButtonStyle::Destructive => Style::new().fg(Color::Red),
            };
            if index == self.dialog.selected {
                style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
            }
            frame.render_widget(Paragraph::new(button_text(&button.label)).style(style), rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dialog::{DialogAction, DialogButton};
    use crate::core::notifications::clear_all_dialog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(dialog: &Dialog) -> String {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                DialogOverlay::new(dialog).render(f, f.area());
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_title_message_and_buttons() {
        let text = render_text(&clear_all_dialog());
        assert!(text.contains("Clear All Notifications"));
        assert!(text.contains("Are you sure"));
        assert!(text.contains("[ Cancel ]"));
        assert!(text.contains("[ Clear All ]"));
        assert!(text.contains("Esc Close"));
    }

    #[test]
    fn test_not_cancelable_hides_esc_hint() {
        let dialog = Dialog::alert("Added", "Done").not_cancelable();
        let text = render_text(&dialog);
        assert!(text.contains("[ OK ]"));
        assert!(!text.contains("Esc Close"));
    }

    #[test]
    fn test_button_hit_test_matches_layout() {
        let dialog = Dialog::with_buttons(
            "Proceed to Checkout",
            "Total: $25.96\nItems: 4",
            vec![
                DialogButton::cancel("Cancel"),
                DialogButton::new("Checkout", ButtonStyle::Default, DialogAction::PlaceOrder),
            ],
        );
        let area = Rect::new(0, 0, 60, 16);
        let rect = dialog_area(area, &dialog);
        let button_row = rect.bottom() - 2;

        // "[ Cancel ]  [ Checkout ]" is 24 wide, centered in a 50-wide inner row.
        let inner_x = rect.x + 2;
        let start = inner_x + (rect.width - 4 - 24) / 2;
        assert_eq!(button_at(area, &dialog, start, button_row), Some(0));
        assert_eq!(button_at(area, &dialog, start + 12, button_row), Some(1));
        assert_eq!(button_at(area, &dialog, start + 10, button_row), None);
        assert_eq!(button_at(area, &dialog, start, button_row - 1), None);
    }
}
