use ratatui::Frame;
use ratatui::layout::Rect;

use crate::core::state::App;
use crate::tui::event::TuiEvent;

/// A reusable UI component.
///
/// Components receive data via props (struct fields), may borrow persistent
/// state (`&mut State` fields), and render to a `Frame` within a given `Rect`.
///
/// `render` takes `&mut self` so components can update presentation state
/// such as list selection or scroll offsets during the render pass.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Persistent screen state that turns terminal events into high-level events.
///
/// Handlers read the core `App` to know what is on screen (how many cart
/// lines, which food is highlighted) but never mutate it.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    fn handle_event(&mut self, event: &TuiEvent, app: &App) -> Option<Self::Event>;
}
