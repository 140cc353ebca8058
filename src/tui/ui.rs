use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::{App, Screen, View};
use crate::core::tab_focus::NavigationHost;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::dialog::button_at;
use crate::tui::components::tab_bar::{TAB_BAR_HEIGHT, tab_at};
use crate::tui::components::{
    CartView, DialogOverlay, ExploreView, FoodDetailView, HomeView, NotificationsView,
    OrdersView, ProfileView, SplashView, TabBar, TitleBar,
};

/// Title bar, body, and the tab bar when a tab is showing.
fn layout(frame_area: Rect, show_tab_bar: bool) -> [Rect; 3] {
    use Constraint::{Length, Min};
    let tab_bar_height = if show_tab_bar { TAB_BAR_HEIGHT } else { 0 };
    Layout::vertical([Length(1), Min(0), Length(tab_bar_height)]).areas(frame_area)
}

pub fn screen_title(app: &App) -> String {
    match app.view() {
        View::Splash(_) => String::new(),
        View::Tab(index) => app
            .tabs
            .routes()
            .get(index)
            .map(|route| route.title.clone())
            .unwrap_or_default(),
        View::Screen(Screen::FoodDetail(detail)) => detail
            .food()
            .map_or_else(|| "Food Details".to_string(), |food| food.name.to_string()),
        View::Screen(Screen::Orders) => "My Orders".to_string(),
        View::Screen(Screen::Notifications) => "Notifications".to_string(),
    }
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    if let View::Splash(splash) = app.view() {
        SplashView::new(splash).render(frame, frame.area());
        return;
    }

    let [title_area, body, tab_area] = layout(frame.area(), app.on_tabs());

    let mut title_bar = TitleBar::new(
        screen_title(app),
        app.status_message.clone(),
        app.notifications.unread_count(),
    );
    title_bar.render(frame, title_area);

    match app.view() {
        View::Splash(_) => {}
        View::Tab(0) => HomeView::new(app.profile.user.first_name, &mut tui.home).render(frame, body),
        View::Tab(1) => ExploreView::new(&mut tui.explore).render(frame, body),
        View::Tab(2) => CartView::new(&app.cart, app.pricing, &mut tui.cart).render(frame, body),
        View::Tab(_) => ProfileView::new(&app.profile, &tui.profile).render(frame, body),
        View::Screen(Screen::FoodDetail(detail)) => FoodDetailView::new(detail).render(frame, body),
        View::Screen(Screen::Orders) => {
            OrdersView::new(&app.orders, &mut tui.orders).render(frame, body)
        }
        View::Screen(Screen::Notifications) => {
            NotificationsView::new(&app.notifications, &mut tui.notifications).render(frame, body)
        }
    }

    if app.on_tabs() {
        TabBar::new(app.tabs.routes(), &app.tab_bar, app.cart.item_count()).render(frame, tab_area);
    }

    if let Some(dialog) = &app.dialog {
        DialogOverlay::new(dialog).render(frame, frame.area());
    }
}

/// Tab index under a click, if the tab bar is showing.
pub fn hit_test_tab(app: &App, frame_area: Rect, column: u16, row: u16) -> Option<usize> {
    if !app.on_tabs() {
        return None;
    }
    let [_, _, tab_area] = layout(frame_area, true);
    tab_at(tab_area, app.tabs.routes().len(), column, row)
}

/// Dialog button under a click, if a dialog is open.
pub fn hit_test_dialog(app: &App, frame_area: Rect, column: u16, row: u16) -> Option<usize> {
    let dialog = app.dialog.as_ref()?;
    button_at(frame_area, dialog, column, row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::navigation::Destination;
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render_text(app: &App, tui: &mut TuiState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_home_with_tab_bar() {
        let app = test_app();
        let mut tui = TuiState::new();
        let text = render_text(&app, &mut tui);
        assert!(text.contains("FoodExpress | Home"));
        assert!(text.contains("Popular Foods"));
        assert!(text.contains("Explore"));
        assert!(text.contains("Profile"));
    }

    #[test]
    fn test_pushed_screen_hides_tab_bar() {
        let mut app = test_app();
        update(&mut app, Action::Open(Destination::Orders));
        let mut tui = TuiState::new();
        let text = render_text(&app, &mut tui);
        assert!(text.contains("FoodExpress | My Orders"));
        assert!(!text.contains("Explore"));
    }

    #[test]
    fn test_dialog_drawn_on_top() {
        let mut app = test_app();
        update(&mut app, Action::EditProfile);
        let mut tui = TuiState::new();
        let text = render_text(&app, &mut tui);
        assert!(text.contains("Profile editing feature coming soon!"));
    }

    #[test]
    fn test_splash_takes_whole_screen() {
        let app = App::new(&Default::default());
        let mut tui = TuiState::new();
        let text = render_text(&app, &mut tui);
        assert!(text.contains("Press any key to skip"));
        assert!(!text.contains("FoodExpress |"));
    }

    #[test]
    fn test_screen_titles() {
        let mut app = test_app();
        update(&mut app, Action::Open(Destination::FoodDetail("4".into())));
        assert_eq!(screen_title(&app), "Chocolate Cake");
        update(&mut app, Action::Back);
        update(&mut app, Action::Open(Destination::FoodDetail("nope".into())));
        assert_eq!(screen_title(&app), "Food Details");
    }

    #[test]
    fn test_hit_test_tab() {
        let mut app = test_app();
        let area = Rect::new(0, 0, 80, 30);
        // Last row of the frame is inside the tab bar.
        assert_eq!(hit_test_tab(&app, area, 70, 29), Some(3));
        assert_eq!(hit_test_tab(&app, area, 70, 5), None);

        update(&mut app, Action::Open(Destination::Notifications));
        assert_eq!(hit_test_tab(&app, area, 70, 29), None);
    }
}
