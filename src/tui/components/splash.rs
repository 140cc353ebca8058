//! # Splash Component
//!
//! Launch screen. The logo box grows with `logo_scale`, the title fades in
//! from the background color, and a gauge tracks overall progress.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Gauge, Paragraph};

use crate::core::splash::SplashState;
use crate::core::{ACCENT, Rgb};
use crate::tui::component::Component;
use crate::tui::components::color;

const BACKGROUND: Rgb = Rgb(0, 0, 0);
const FOREGROUND: Rgb = Rgb(0xFF, 0xFF, 0xFF);
const LOGO_WIDTH: u16 = 24;
const LOGO_HEIGHT: u16 = 5;
const FOOD_ICONS: [&str; 4] = ["🍕", "🍔", "🍟", "🍰"];

pub struct SplashView<'a> {
    pub splash: &'a SplashState,
}

impl<'a> SplashView<'a> {
    pub fn new(splash: &'a SplashState) -> Self {
        Self { splash }
    }
}

impl Component for SplashView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        use Constraint::{Fill, Length};
        let [_, logo_row, _, title_row, subtitle_row, _, gauge_row, hint_row, _] =
            Layout::vertical([
                Fill(1),
                Length(LOGO_HEIGHT),
                Length(1),
                Length(1),
                Length(1),
                Length(1),
                Length(1),
                Length(1),
                Fill(1),
            ])
            .areas(area);

        let scale = self.splash.logo_scale();
        let logo_width = ((LOGO_WIDTH as f64 * scale).round() as u16).min(area.width);
        let logo_height = ((LOGO_HEIGHT as f64 * scale).round() as u16).min(logo_row.height);
        if logo_width >= 2 && logo_height >= 2 {
            let logo = Rect::new(
                area.x + (area.width - logo_width) / 2,
                logo_row.y + (logo_row.height - logo_height) / 2,
                logo_width,
                logo_height,
            );
            let fade = BACKGROUND.lerp(ACCENT, self.splash.logo_opacity() as f32);
            let turn = self.splash.icon_turn();
            let icon = FOOD_ICONS[((turn * FOOD_ICONS.len() as f64) as usize).min(FOOD_ICONS.len() - 1)];
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::new().fg(color(fade)));
            let inner = block.inner(logo);
            frame.render_widget(block, logo);
            if inner.height > 0 {
                let middle = Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1);
                frame.render_widget(Paragraph::new(icon).alignment(Alignment::Center), middle);
            }
        }

        let text = BACKGROUND.lerp(FOREGROUND, self.splash.text_opacity() as f32);
        frame.render_widget(
            Paragraph::new("FoodExpress")
                .style(Style::new().fg(color(text)).add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            title_row,
        );
        frame.render_widget(
            Paragraph::new("Delicious food, delivered fast")
                .style(Style::new().fg(color(text)))
                .alignment(Alignment::Center),
            subtitle_row,
        );

        let gauge_width = 40.min(area.width);
        let gauge_area = Rect::new(
            area.x + (area.width - gauge_width) / 2,
            gauge_row.y,
            gauge_width,
            gauge_row.height,
        );
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::new().fg(color(ACCENT)))
                .ratio(self.splash.progress())
                .label("Loading..."),
            gauge_area,
        );
        frame.render_widget(
            Paragraph::new("Press any key to skip")
                .style(Style::new().add_modifier(Modifier::DIM))
                .alignment(Alignment::Center),
            hint_row,
        );
    }
}
