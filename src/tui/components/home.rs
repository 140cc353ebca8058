//! # Home Screen
//!
//! Greeting, search placeholder, special offers, the selectable popular
//! foods list and popular restaurants. Enter on a food opens its detail.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, List, ListItem, Paragraph};

use crate::core::action::Action;
use crate::core::catalog::{FOODS, HOME_RESTAURANTS, OFFERS};
use crate::core::navigation::Destination;
use crate::core::state::App;
use crate::core::{ACCENT, format_money};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{Selection, color, food_icon};
use crate::tui::event::TuiEvent;

#[derive(Debug, Default)]
pub struct HomeState {
    pub foods: Selection,
}

impl EventHandler for HomeState {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent, _app: &App) -> Option<Action> {
        match event {
            TuiEvent::Up | TuiEvent::ScrollUp => {
                self.foods.move_by(-1, FOODS.len());
                None
            }
            TuiEvent::Down | TuiEvent::ScrollDown => {
                self.foods.move_by(1, FOODS.len());
                None
            }
            TuiEvent::Enter => self
                .foods
                .selected(FOODS.len())
                .map(|i| Action::Open(Destination::FoodDetail(FOODS[i].id.to_string()))),
            _ => None,
        }
    }
}

pub struct HomeView<'a> {
    pub first_name: &'a str,
    pub state: &'a mut HomeState,
}

impl<'a> HomeView<'a> {
    pub fn new(first_name: &'a str, state: &'a mut HomeState) -> Self {
        Self { first_name, state }
    }
}

fn heading(text: &str) -> Paragraph<'_> {
    Paragraph::new(text).style(Style::new().add_modifier(Modifier::BOLD))
}

impl Component for HomeView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Length, Min};
        let [greeting, search, offers_title, offers, foods_title, foods, rest_title, restaurants] =
            Layout::vertical([
                Length(2),
                Length(3),
                Length(1),
                Length(4),
                Length(1),
                Min(3),
                Length(1),
                Length(HOME_RESTAURANTS.len() as u16),
            ])
            .areas(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    format!("Hello, {}! 👋", self.first_name),
                    Style::new().add_modifier(Modifier::BOLD),
                )),
                Line::from("What would you like to eat today?"),
            ]),
            greeting,
        );
        frame.render_widget(
            Paragraph::new("🔍 Search for food, restaurants...")
                .style(Style::new().fg(Color::DarkGray))
                .block(Block::bordered().border_type(BorderType::Rounded)),
            search,
        );

        frame.render_widget(heading("Special Offers"), offers_title);
        let cards = Layout::horizontal(vec![Constraint::Ratio(1, OFFERS.len() as u32); OFFERS.len()])
            .split(offers);
        for (offer, card) in OFFERS.iter().zip(cards.iter()) {
            let body = Paragraph::new(vec![
                Line::from(format!("{} {}", offer.icon, offer.title))
                    .style(Style::new().add_modifier(Modifier::BOLD)),
                Line::from(offer.subtitle),
            ])
            .style(Style::new().fg(Color::White).bg(color(offer.color)))
            .block(Block::bordered().border_type(BorderType::Rounded));
            frame.render_widget(body, *card);
        }

        frame.render_widget(heading("Popular Foods"), foods_title);
        let items: Vec<ListItem> = FOODS
            .iter()
            .map(|food| {
                let mut spans = vec![
                    Span::raw(format!("{} ", food_icon(food.category))),
                    Span::styled(food.name, Style::new().add_modifier(Modifier::BOLD)),
                    Span::raw("  "),
                    Span::styled(format_money(food.price), Style::new().fg(color(ACCENT))),
                    Span::raw(format!("  ★ {:.1}  {}", food.rating, food.delivery_time)),
                ];
                if !food.available {
                    spans.push(Span::styled("  Unavailable", Style::new().fg(Color::Red)));
                }
                ListItem::new(Line::from(spans))
            })
            .collect();
        self.state.foods.clamp(FOODS.len());
        let list = List::new(items)
            .highlight_style(Style::new().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");
        frame.render_stateful_widget(list, foods, &mut self.state.foods.list_state);

        frame.render_widget(heading("Popular Restaurants"), rest_title);
        let lines: Vec<Line> = HOME_RESTAURANTS
            .iter()
            .map(|r| {
                let eta = r.delivery_time.unwrap_or("");
                Line::from(format!(
                    "{} {}  {}  ★ {:.1}  {}",
                    food_icon(r.cuisine),
                    r.name,
                    r.cuisine,
                    r.rating,
                    eta
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), restaurants);
    }
}
