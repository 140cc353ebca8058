//! # Navigation
//!
//! The tab container that hosts the tab bar, and the destinations that
//! buttons and dialogs can send the user to.

use log::{debug, info, warn};

use crate::core::tab_focus::{NavigationHost, TabPressEvent, TabRoute};

pub const HOME: &str = "index";
pub const EXPLORE: &str = "explore";
pub const CART: &str = "cart";
pub const PROFILE: &str = "profile";

/// Somewhere the user can be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// A tab by route name (see [`HOME`], [`CART`], ...).
    Tab(&'static str),
    FoodDetail(String),
    Orders,
    Notifications,
}

/// Decides whether a tab press should be vetoed.
pub type TabPressListener = Box<dyn FnMut(&TabRoute) -> bool + Send>;

/// Owns the tab routes and which one is active.
pub struct TabNavigator {
    routes: Vec<TabRoute>,
    active: usize,
    listeners: Vec<TabPressListener>,
}

impl TabNavigator {
    pub fn new(routes: Vec<TabRoute>) -> Self {
        Self {
            routes,
            active: 0,
            listeners: Vec::new(),
        }
    }

    /// Home, Explore, Cart, Profile.
    pub fn with_default_tabs() -> Self {
        let route = |name: &str, title: &str| TabRoute {
            key: format!("{name}-tab"),
            name: name.to_string(),
            title: title.to_string(),
        };
        Self::new(vec![
            route(HOME, "Home"),
            route(EXPLORE, "Explore"),
            route(CART, "Cart"),
            route(PROFILE, "Profile"),
        ])
    }

    /// Register a listener; returning `true` prevents the default navigation.
    pub fn add_tab_press_listener(&mut self, listener: TabPressListener) {
        self.listeners.push(listener);
    }

    pub fn active_route(&self) -> Option<&TabRoute> {
        self.routes.get(self.active)
    }

    pub fn index_of(&self, route_name: &str) -> Option<usize> {
        self.routes.iter().position(|r| r.name == route_name)
    }
}

impl NavigationHost for TabNavigator {
    fn routes(&self) -> &[TabRoute] {
        &self.routes
    }

    fn active_index(&self) -> usize {
        self.active
    }

    fn emit_tab_press(&mut self, route: &TabRoute) -> TabPressEvent {
        debug!("tabPress -> {}", route.key);
        let mut event = TabPressEvent::default();
        for listener in &mut self.listeners {
            if listener(route) {
                event.default_prevented = true;
            }
        }
        event
    }

    fn navigate(&mut self, route_name: &str) {
        match self.index_of(route_name) {
            Some(index) => {
                info!("Navigating to tab {}", route_name);
                self.active = index;
            }
            None => warn!("No tab named {}", route_name),
        }
    }
}
