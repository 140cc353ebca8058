//! # Orders Screen
//!
//! Scrollable order history. Each order is a bordered card with a status
//! badge colored by status.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::action::Action;
use crate::core::orders::OrderEntry;
use crate::core::state::App;
use crate::core::{ACCENT, format_money};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::color;
use crate::tui::event::TuiEvent;

const CARD_HEIGHT: u16 = 5;

#[derive(Debug, Default)]
pub struct OrdersState {
    pub scroll_state: ScrollViewState,
}

impl EventHandler for OrdersState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent, _app: &App) -> Option<Action> {
        match event {
            TuiEvent::Up | TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::Down | TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::PageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::PageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
        None
    }
}

pub struct OrdersView<'a> {
    pub orders: &'a [OrderEntry],
    pub state: &'a mut OrdersState,
}

impl<'a> OrdersView<'a> {
    pub fn new(orders: &'a [OrderEntry], state: &'a mut OrdersState) -> Self {
        Self { orders, state }
    }
}

fn card(order: &OrderEntry) -> Paragraph<'static> {
    let status = order.status;
    let badge = Span::styled(
        format!(" {} {} ", status.icon(), status.label()),
        Style::new().fg(Color::White).bg(color(status.color())),
    );
    let dim = Style::new().fg(Color::DarkGray);
    Paragraph::new(vec![
        Line::from(order.items.join(", ")),
        Line::from(vec![
            Span::styled(format!("{}  {}", order.date_label(), order.time_label()), dim),
        ]),
        Line::from(vec![
            Span::raw("Total "),
            Span::styled(
                format_money(order.total),
                Style::new().fg(color(ACCENT)).add_modifier(Modifier::BOLD),
            ),
        ]),
    ])
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title(Line::from(format!(" Order {} ", order.order_number)))
            .title(Line::from(badge).right_aligned()),
    )
}

impl Component for OrdersView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.orders.is_empty() {
            frame.render_widget(Paragraph::new("No orders yet.").centered(), area);
            return;
        }

        let width = area.width.saturating_sub(1);
        let height = self.orders.len() as u16 * CARD_HEIGHT;
        let mut scroll_view = ScrollView::new(Size::new(width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (index, order) in self.orders.iter().enumerate() {
            let rect = Rect::new(0, index as u16 * CARD_HEIGHT, width, CARD_HEIGHT);
            scroll_view.render_widget(card(order), rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::orders::sample_orders;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(orders: &[OrderEntry], state: &mut OrdersState) -> String {
        let backend = TestBackend::new(70, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                OrdersView::new(orders, state).render(f, f.area());
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
    fn test_orders_render_cards() {
        let orders = sample_orders();
        let mut state = OrdersState::default();
        let text = render_text(&orders, &mut state);

        assert!(text.contains("Order #ORD-001"));
        assert!(text.contains("Delivered"));
        assert!(text.contains("On the way"));
        assert!(text.contains("Sushi Platter, Green Tea"));
        assert!(text.contains("2024-06-01  2:30 PM"));
        assert!(text.contains("$18.99"));
    }

    #[test]
    fn test_empty_orders() {
        let mut state = OrdersState::default();
        assert!(render_text(&[], &mut state).contains("No orders yet."));
    }
}
