//! # Cart Screen
//!
//! Line items with quantity controls and the order summary. Quantity keys
//! send `qty ± 1` to the reducer, which removes a line once it reaches zero.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};

use crate::core::action::Action;
use crate::core::cart::{Cart, CartSummary, Pricing};
use crate::core::navigation::{Destination, HOME};
use crate::core::state::App;
use crate::core::{ACCENT, format_money};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{Selection, color};
use crate::tui::event::TuiEvent;

const SUMMARY_HEIGHT: u16 = 9;

#[derive(Debug, Default)]
pub struct CartState {
    pub lines: Selection,
}

impl CartState {
    fn quantity_change(&self, app: &App, delta: i64) -> Option<Action> {
        let items = app.cart.items();
        let item = items.get(self.lines.selected(items.len())?)?;
        Some(Action::UpdateQuantity {
            id: item.id.clone(),
            quantity: i64::try_from(item.quantity)
                .unwrap_or(i64::MAX)
                .saturating_add(delta),
        })
    }
}

impl EventHandler for CartState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<Action> {
        let len = app.cart.items().len();
        match event {
            TuiEvent::Up | TuiEvent::ScrollUp => {
                self.lines.move_by(-1, len);
                None
            }
            TuiEvent::Down | TuiEvent::ScrollDown => {
                self.lines.move_by(1, len);
                None
            }
            TuiEvent::Char('+') | TuiEvent::Char('=') | TuiEvent::Right => {
                self.quantity_change(app, 1)
            }
            TuiEvent::Char('-') | TuiEvent::Left => self.quantity_change(app, -1),
            TuiEvent::Char('c') => Some(Action::Checkout),
            TuiEvent::Enter if app.cart.is_empty() => Some(Action::Open(Destination::Tab(HOME))),
            TuiEvent::Enter => Some(Action::Checkout),
            _ => None,
        }
    }
}

pub struct CartView<'a> {
    pub cart: &'a Cart,
    pub pricing: Pricing,
    pub state: &'a mut CartState,
}

impl<'a> CartView<'a> {
    pub fn new(cart: &'a Cart, pricing: Pricing, state: &'a mut CartState) -> Self {
        Self {
            cart,
            pricing,
            state,
        }
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from("🛒"),
            Line::from(Span::styled(
                "Your cart is empty",
                Style::new().add_modifier(Modifier::BOLD),
            )),
            Line::from("Add some delicious items to get started!"),
            Line::from(""),
            Line::from(Span::styled(
                "[ Browse Menu ]",
                Style::new().fg(color(ACCENT)).add_modifier(Modifier::REVERSED),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn summary_lines(&self, summary: &CartSummary) -> Vec<Line<'static>> {
        let row = |label: String, value: f64, style: Style| {
            Line::from(vec![
                Span::styled(format!("{label:<20}"), style),
                Span::styled(format!("{:>10}", format_money(value)), style),
            ])
        };
        let plain = Style::new();
        let total = Style::new().add_modifier(Modifier::BOLD);
        vec![
            row("Subtotal".into(), summary.subtotal, plain),
            row("Delivery Fee".into(), summary.delivery_fee, plain),
            row(
                format!("Tax ({}%)", (self.pricing.tax_rate * 100.0).round()),
                summary.tax,
                plain,
            ),
            Line::from("─".repeat(30)),
            row("Total".into(), summary.total, total),
            Line::from(""),
            Line::from(Span::styled(
                "[ Proceed to Checkout ]",
                Style::new().fg(color(ACCENT)).add_modifier(Modifier::REVERSED),
            )),
        ]
    }
}

impl Component for CartView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.cart.is_empty() {
            self.render_empty(frame, area);
            return;
        }

        let [list_area, summary_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(SUMMARY_HEIGHT)]).areas(area);

        let items: Vec<ListItem> = self
            .cart
            .items()
            .iter()
            .map(|item| {
                let minus = if item.quantity > 1 { "[-]" } else { "[×]" };
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(item.name.clone(), Style::new().add_modifier(Modifier::BOLD)),
                        Span::raw(format!("  {} each  ", format_money(item.unit_price))),
                        Span::styled(minus, Style::new().fg(color(ACCENT))),
                        Span::raw(format!(" {} ", item.quantity)),
                        Span::styled("[+]", Style::new().fg(color(ACCENT))),
                        Span::styled(
                            format!("  {}", format_money(item.line_total())),
                            Style::new().add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(Span::styled(
                        item.description.clone(),
                        Style::new().fg(Color::DarkGray),
                    )),
                ])
            })
            .collect();
        self.state.lines.clamp(self.cart.items().len());
        let list = List::new(items)
            .highlight_style(Style::new().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, list_area, &mut self.state.lines.list_state);

        let summary = self.cart.summary(&self.pricing);
        let block = Block::default()
            .borders(Borders::TOP)
            .title(format!(" Order Summary ({} items) ", summary.item_count))
            .title_bottom(Line::from(" +/- Quantity  c Checkout ").centered());
        frame.render_widget(
            Paragraph::new(self.summary_lines(&summary)).block(block),
            summary_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(cart: &Cart, state: &mut CartState) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                CartView::new(cart, Pricing::default(), state).render(f, f.area());
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
    fn test_cart_renders_lines_and_summary() {
        let app = test_app();
        let mut state = CartState::default();
        let text = render_text(&app.cart, &mut state);

        assert!(text.contains("Veggie Burger"));
        assert!(text.contains("$12.98"));
        assert!(text.contains("Order Summary (4 items)"));
        assert!(text.contains("$25.96"));
        assert!(text.contains("Tax (8%)"));
        assert!(text.contains("$31.03"));
    }

    #[test]
    fn test_empty_cart_offers_browse_menu() {
        let mut app = test_app();
        for id in ["1", "2", "3"] {
            app.cart.update_quantity(id, 0);
        }
        let mut state = CartState::default();
        let text = render_text(&app.cart, &mut state);
        assert!(text.contains("Your cart is empty"));
        assert!(text.contains("Browse Menu"));

        assert_eq!(
            state.handle_event(&TuiEvent::Enter, &app),
            Some(Action::Open(Destination::Tab(HOME)))
        );
        assert_eq!(state.handle_event(&TuiEvent::Char('+'), &app), None);
    }

    #[test]
    fn test_quantity_keys_target_selected_line() {
        let app = test_app();
        let mut state = CartState::default();
        state.handle_event(&TuiEvent::Down, &app);

        assert_eq!(
            state.handle_event(&TuiEvent::Char('+'), &app),
            Some(Action::UpdateQuantity {
                id: "2".into(),
                quantity: 3
            })
        );
        assert_eq!(
            state.handle_event(&TuiEvent::Char('-'), &app),
            Some(Action::UpdateQuantity {
                id: "2".into(),
                quantity: 1
            })
        );
        assert_eq!(state.handle_event(&TuiEvent::Char('c'), &app), Some(Action::Checkout));
    }
}
