//! # Food Detail Screen
//!
//! Everything about one catalog item plus the quantity selector and the
//! add-to-cart button. All state lives in `core::food_detail`, so this view
//! is props-only.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::core::catalog::FoodItem;
use crate::core::food_detail::FoodDetailState;
use crate::core::{ACCENT, format_money};
use crate::tui::component::Component;
use crate::tui::components::{color, food_icon};

pub struct FoodDetailView<'a> {
    pub state: &'a FoodDetailState,
}

impl<'a> FoodDetailView<'a> {
    pub fn new(state: &'a FoodDetailState) -> Self {
        Self { state }
    }

    fn render_not_found(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Food item not found",
                Style::new().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[ Go Back ]",
                Style::new().fg(color(ACCENT)).add_modifier(Modifier::REVERSED),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }

    fn detail_lines(food: &FoodItem) -> Vec<Line<'static>> {
        let bold = Style::new().add_modifier(Modifier::BOLD);
        let dim = Style::new().fg(Color::DarkGray);
        let n = food.nutrition;
        let mut lines = vec![
            Line::from(vec![
                Span::raw(format!("{} ", food_icon(food.category))),
                Span::styled(food.name, bold),
                Span::raw("  "),
                Span::styled(format_money(food.price), bold.fg(color(ACCENT))),
            ]),
            Line::from(vec![
                Span::styled(format!("★ {:.1}", food.rating), Style::new().fg(Color::Yellow)),
                Span::styled(format!(" ({} reviews)", food.reviews), dim),
                Span::raw(format!("  ·  {}", food.category)),
            ]),
            Line::from(vec![
                Span::styled("Prep ", dim),
                Span::raw(food.preparation_time),
                Span::styled("   Delivery ", dim),
                Span::raw(food.delivery_time),
            ]),
            Line::from(""),
            Line::from(Span::styled("Description", bold)),
            Line::from(food.description),
            Line::from(""),
            Line::from(Span::styled("Ingredients", bold)),
        ];
        lines.extend(
            food.ingredients
                .iter()
                .map(|ingredient| Line::from(format!("  • {ingredient}"))),
        );
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Nutrition (per serving)", bold)));
        lines.push(Line::from(format!(
            "  {} kcal   {}g protein   {}g carbs   {}g fat",
            n.calories, n.protein, n.carbs, n.fat
        )));
        lines
    }
}

impl Component for FoodDetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(food) = self.state.food() else {
            self.render_not_found(frame, area);
            return;
        };

        let [body, footer] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);
        frame.render_widget(
            Paragraph::new(Self::detail_lines(food)).wrap(Wrap { trim: false }),
            body,
        );

        let dim_minus = !self.state.can_decrement();
        let minus_style = if dim_minus {
            Style::new().fg(Color::DarkGray)
        } else {
            Style::new().fg(color(ACCENT))
        };
        let button_style = if food.available && !self.state.adding_to_cart {
            Style::new()
                .fg(color(ACCENT))
                .add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::new().fg(Color::DarkGray).add_modifier(Modifier::REVERSED)
        };
        let footer_line = Line::from(vec![
            Span::raw("Quantity  "),
            Span::styled("[-]", minus_style),
            Span::styled(
                format!(" {} ", self.state.quantity),
                Style::new().add_modifier(Modifier::BOLD),
            ),
            Span::styled("[+]", Style::new().fg(color(ACCENT))),
            Span::raw("    "),
            Span::styled(format!(" {} ", self.state.button_label()), button_style),
        ]);
        frame.render_widget(
            Paragraph::new(footer_line).block(
                Block::default()
                    .borders(Borders::TOP)
                    .title_bottom(Line::from(" +/- Quantity  Enter Add to Cart  Esc Back ").centered()),
            ),
            footer,
        );
    }
}
