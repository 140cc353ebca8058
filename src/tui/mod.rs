//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (splash, tab focus springs, pending add-to-cart): draws
//!   every ~16ms so the springs look smooth.
//! - **Idle**: sleeps up to 500ms, only redraws on events, background
//!   completions, or terminal resize.
//!
//! Every loop iteration sends `Action::Tick` with the real elapsed time, so
//! animation speed doesn't depend on the frame rate.
//!
//! ## Event Routing
//!
//! ```text
//! Ctrl+C ─────────────────────────────► Quit
//! splash showing ── any key ──────────► SkipSplash
//! dialog open ──── ←/→ Enter Esc ─────► Dialog*
//! global ───────── q Esc o n click ───► Quit / Back / Open / PressTab
//! tab showing ──── 1-4 Tab Shift+Tab ─► PressTab
//! otherwise ────── screen EventHandler
//! ```

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::navigation::Destination;
use crate::core::state::{App, Screen, View};
use crate::core::tab_focus::NavigationHost;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CartState, ExploreState, HomeState, NotificationsState, OrdersState, ProfileState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_FRAME: Duration = Duration::from_millis(16);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub home: HomeState,
    pub explore: ExploreState,
    pub cart: CartState,
    pub profile: ProfileState,
    pub orders: OrdersState,
    pub notifications: NotificationsState,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Report event types so key releases can be filtered out; terminals
        // without the Kitty protocol ignore the request.
        execute!(
            stdout(),
            EnableMouseCapture,
            Hide,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, hidden cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            Show
        );
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut last_tick = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let now = Instant::now();
        update(&mut app, Action::Tick(now - last_tick));
        last_tick = now;

        let animating = app.is_animating();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_FRAME } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = dispatch(&event, &app, &mut tui, frame_area) else {
                continue;
            };
            debug!("Dispatching {:?}", action);
            if apply(&mut app, action, &tx) {
                should_quit = true;
                break;
            }
        }

        // Handle background task actions (add-to-cart completions)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if apply(&mut app, action, &tx) {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("FoodExpress shutting down");
    ratatui::restore();
    Ok(())
}

/// Run an action through `update()` and carry out its effect.
/// Returns true when the app should quit.
fn apply(app: &mut App, action: Action, tx: &mpsc::Sender<Action>) -> bool {
    match update(app, action) {
        Effect::Quit => true,
        Effect::ScheduleAddToCart { food_id, delay } => {
            spawn_add_to_cart(food_id, delay, tx.clone());
            false
        }
        Effect::None => false,
    }
}

/// Simulated add-to-cart request: wait, then report back to the event loop.
fn spawn_add_to_cart(
    food_id: String,
    delay: Duration,
    tx: mpsc::Sender<Action>,
) -> tokio::task::JoinHandle<()> {
    info!("Spawning add-to-cart for food {} ({:?})", food_id, delay);
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx
            .send(Action::AddToCartCompleted {
                food_id: food_id.clone(),
            })
            .is_err()
        {
            warn!("Failed to deliver add-to-cart completion for {}: receiver dropped", food_id);
        }
    })
}

/// Translate a terminal event into an action for whatever is on screen.
pub fn dispatch(
    event: &TuiEvent,
    app: &App,
    tui: &mut TuiState,
    frame_area: Rect,
) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    if app.splash.is_some() {
        return event.is_key().then_some(Action::SkipSplash);
    }

    if app.dialog.is_some() {
        return match event {
            TuiEvent::Left | TuiEvent::Up | TuiEvent::BackTab => Some(Action::DialogPrev),
            TuiEvent::Right | TuiEvent::Down | TuiEvent::Tab => Some(Action::DialogNext),
            TuiEvent::Enter | TuiEvent::Char(' ') => Some(Action::DialogConfirm),
            TuiEvent::Escape => Some(Action::DialogCancel),
            TuiEvent::MouseClick(column, row) => {
                ui::hit_test_dialog(app, frame_area, *column, *row).map(Action::DialogChoose)
            }
            _ => None,
        };
    }

    let view = app.view();
    match event {
        TuiEvent::Char('q') => return Some(Action::Quit),
        TuiEvent::Escape | TuiEvent::Backspace => return Some(Action::Back),
        TuiEvent::MouseClick(column, row) => {
            return ui::hit_test_tab(app, frame_area, *column, *row).map(Action::PressTab);
        }
        TuiEvent::Char('o') if view != View::Screen(&Screen::Orders) => {
            return Some(Action::Open(Destination::Orders));
        }
        TuiEvent::Char('n') if view != View::Screen(&Screen::Notifications) => {
            return Some(Action::Open(Destination::Notifications));
        }
        _ => {}
    }

    match view {
        View::Splash(_) => None,
        View::Tab(active) => {
            let count = app.tabs.routes().len().max(1);
            match event {
                TuiEvent::Char(c) if c.is_ascii_digit() => {
                    let digit = c.to_digit(10)? as usize;
                    (1..=count).contains(&digit).then(|| Action::PressTab(digit - 1))
                }
                TuiEvent::Tab => Some(Action::PressTab((active + 1) % count)),
                TuiEvent::BackTab => Some(Action::PressTab((active + count - 1) % count)),
                _ => match active {
                    0 => tui.home.handle_event(event, app),
                    1 => tui.explore.handle_event(event, app),
                    2 => tui.cart.handle_event(event, app),
                    _ => tui.profile.handle_event(event, app),
                },
            }
        }
        View::Screen(Screen::FoodDetail(detail)) => match event {
            TuiEvent::Enter if detail.food().is_none() => Some(Action::Back),
            TuiEvent::Char('+') | TuiEvent::Char('=') | TuiEvent::Right => {
                Some(Action::FoodQuantityUp)
            }
            TuiEvent::Char('-') | TuiEvent::Left => Some(Action::FoodQuantityDown),
            TuiEvent::Enter | TuiEvent::Char('a') => Some(Action::AddToCart),
            _ => None,
        },
        View::Screen(Screen::Orders) => tui.orders.handle_event(event, app),
        View::Screen(Screen::Notifications) => tui.notifications.handle_event(event, app),
    }
}
