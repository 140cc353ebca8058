//! # Explore Screen
//!
//! Promotion banners followed by the restaurant list, inside a scroll view.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::action::Action;
use crate::core::catalog::{EXPLORE_RESTAURANTS, PROMOTIONS};
use crate::core::state::App;
use crate::core::ACCENT;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{color, food_icon};
use crate::tui::event::TuiEvent;

const BANNER_HEIGHT: u16 = 4;
const RESTAURANT_HEIGHT: u16 = 3;

#[derive(Debug, Default)]
pub struct ExploreState {
    pub scroll_state: ScrollViewState,
}

impl EventHandler for ExploreState {
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

pub struct ExploreView<'a> {
    pub state: &'a mut ExploreState,
}

impl<'a> ExploreView<'a> {
    pub fn new(state: &'a mut ExploreState) -> Self {
        Self { state }
    }
}

impl Component for ExploreView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = area.width.saturating_sub(1);
        let promos_height = PROMOTIONS.len() as u16 * BANNER_HEIGHT;
        let restaurants_height = EXPLORE_RESTAURANTS.len() as u16 * RESTAURANT_HEIGHT;
        // Two section headings.
        let height = 2 + promos_height + restaurants_height;

        let mut scroll_view = ScrollView::new(Size::new(width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let bold = Style::new().add_modifier(Modifier::BOLD);
        let mut y = 0;
        scroll_view.render_widget(
            Paragraph::new("Today's Promotions").style(bold),
            Rect::new(0, y, width, 1),
        );
        y += 1;
        for promo in PROMOTIONS {
            let banner = Paragraph::new(vec![
                Line::from(Span::styled(promo.title, bold)),
                Line::from(promo.description),
            ])
            .style(Style::new().fg(Color::White).bg(color(ACCENT)))
            .block(Block::bordered().border_type(BorderType::Rounded));
            scroll_view.render_widget(banner, Rect::new(0, y, width, BANNER_HEIGHT));
            y += BANNER_HEIGHT;
        }

        scroll_view.render_widget(
            Paragraph::new("Restaurants Near You").style(bold),
            Rect::new(0, y, width, 1),
        );
        y += 1;
        for restaurant in EXPLORE_RESTAURANTS {
            let card = Paragraph::new(Line::from(vec![
                Span::raw(format!("{} ", food_icon(restaurant.cuisine))),
                Span::styled(restaurant.name, bold),
                Span::raw(format!("  {}  ", restaurant.cuisine)),
                Span::styled(
                    format!("★ {:.1}", restaurant.rating),
                    Style::new().fg(Color::Yellow),
                ),
            ]))
            .block(Block::bordered().border_type(BorderType::Rounded));
            scroll_view.render_widget(card, Rect::new(0, y, width, RESTAURANT_HEIGHT));
            y += RESTAURANT_HEIGHT;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
