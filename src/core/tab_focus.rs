//! # Tab Focus Animator
//!
//! Maps the host's discrete active route index onto one continuous focus
//! progress value per tab.
//!
//! ```text
//!   host.active_index ──sync()──► targets [0, 0, 1, 0]
//!                                    │
//!                         tick(dt)   ▼
//!                        springs  [0.0, 0.3, 0.7, 0.0]  ──► TabVisual
//! ```
//!
//! The animator never owns navigation. A press is forwarded to a
//! [`NavigationHost`], which may veto it; the animator only reacts when the
//! host's active index actually changes.

use std::time::Duration;

use log::debug;

use crate::core::{ACCENT, Rgb};

/// Integration step for the spring, in seconds.
const STEP: f64 = 0.001;
const REST_DISPLACEMENT: f64 = 0.001;
const REST_SPEED: f64 = 0.001;

pub const DEFAULT_TENSION: f64 = 40.0;
pub const DEFAULT_FRICTION: f64 = 8.0;

/// A route the tab bar shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRoute {
    pub key: String,
    pub name: String,
    pub title: String,
}

/// Result of emitting a tab-press event to the host's listeners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabPressEvent {
    pub default_prevented: bool,
}

/// The navigation container the tab bar is mounted in.
pub trait NavigationHost {
    fn routes(&self) -> &[TabRoute];
    fn active_index(&self) -> usize;
    /// Notify listeners that a tab was pressed. Any listener may veto.
    fn emit_tab_press(&mut self, route: &TabRoute) -> TabPressEvent;
    fn navigate(&mut self, route_name: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabPressOutcome {
    /// The route was already focused. No event was emitted.
    AlreadyFocused,
    /// A listener vetoed the press.
    Prevented,
    Navigated,
    /// Index out of range for the host's routes.
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Convert Origami-style tension/friction into physical coefficients.
    pub fn from_tension_friction(tension: f64, friction: f64) -> Self {
        Self {
            stiffness: (tension - 30.0) * 3.62 + 194.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            mass: 1.0,
        }
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::from_tension_friction(DEFAULT_TENSION, DEFAULT_FRICTION)
    }
}

/// A damped spring on [0, 1] with overshoot clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn at_rest(value: f64, config: SpringConfig) -> Self {
        let value = value.clamp(0.0, 1.0);
        Self {
            value,
            velocity: 0.0,
            target: value,
            config,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == 0.0
    }

    /// Point the spring at a new target. Motion restarts from rest so the
    /// value only ever travels toward the current target.
    pub fn retarget(&mut self, target: f64) {
        let target = target.clamp(0.0, 1.0);
        if target != self.target {
            self.target = target;
            self.velocity = 0.0;
        }
    }

    pub fn step(&mut self, dt: Duration) {
        if self.is_settled() {
            return;
        }
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let h = remaining.min(STEP);
            remaining -= h;

            let displacement = self.value - self.target;
            let force = -self.config.stiffness * displacement - self.config.damping * self.velocity;
            self.velocity += force / self.config.mass * h;
            let next = self.value + self.velocity * h;

            let crossed = (next - self.target).signum() != displacement.signum();
            let resting = (next - self.target).abs() < REST_DISPLACEMENT
                && self.velocity.abs() < REST_SPEED;
            if crossed || resting {
                self.value = self.target;
                self.velocity = 0.0;
                return;
            }
            self.value = next.clamp(0.0, 1.0);
        }
    }
}

/// Presentation values derived from a focus progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabVisual {
    pub scale: f32,
    pub translate_y: f32,
    pub icon_scale: f32,
    pub label_scale: f32,
    pub indicator_opacity: f32,
    pub label_color: Rgb,
}

pub const INACTIVE_LABEL: Rgb = Rgb(0x66, 0x66, 0x66);

impl TabVisual {
    pub fn from_progress(progress: f64) -> Self {
        let p = progress.clamp(0.0, 1.0) as f32;
        let lerp = |from: f32, to: f32| from + (to - from) * p;
        Self {
            scale: lerp(1.0, 1.1),
            translate_y: lerp(0.0, -8.0),
            icon_scale: lerp(1.0, 1.2),
            label_scale: lerp(1.0, 1.05),
            indicator_opacity: p,
            label_color: INACTIVE_LABEL.lerp(ACCENT, p),
        }
    }
}

/// Per-route focus progress for the tab bar.
#[derive(Debug, Clone)]
pub struct TabFocusAnimator {
    springs: Vec<Spring>,
    active: usize,
}

impl TabFocusAnimator {
    pub fn new(route_count: usize, initial_active: usize, config: SpringConfig) -> Self {
        let springs = (0..route_count)
            .map(|index| Spring::at_rest(if index == initial_active { 1.0 } else { 0.0 }, config))
            .collect();
        Self {
            springs,
            active: initial_active,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn progress(&self, index: usize) -> f64 {
        self.springs.get(index).map_or(0.0, Spring::value)
    }

    pub fn targets(&self) -> Vec<f64> {
        self.springs.iter().map(Spring::target).collect()
    }

    pub fn visual(&self, index: usize) -> TabVisual {
        TabVisual::from_progress(self.progress(index))
    }

    pub fn is_settled(&self) -> bool {
        self.springs.iter().all(Spring::is_settled)
    }

    /// Handle a press on route `index`.
    pub fn on_tab_press<H: NavigationHost>(&self, index: usize, host: &mut H) -> TabPressOutcome {
        if index == self.active {
            return TabPressOutcome::AlreadyFocused;
        }
        let Some(route) = host.routes().get(index).cloned() else {
            return TabPressOutcome::Ignored;
        };
        let event = host.emit_tab_press(&route);
        if event.default_prevented {
            debug!("Tab press on {} was prevented", route.name);
            return TabPressOutcome::Prevented;
        }
        host.navigate(&route.name);
        TabPressOutcome::Navigated
    }

    /// Follow the host's active index, retargeting every spring when it moved.
    pub fn sync(&mut self, active_index: usize) {
        if active_index == self.active {
            return;
        }
        debug!("Tab focus {} -> {}", self.active, active_index);
        self.active = active_index;
        for (index, spring) in self.springs.iter_mut().enumerate() {
            spring.retarget(if index == active_index { 1.0 } else { 0.0 });
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        for spring in &mut self.springs {
            spring.step(dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockHost {
        routes: Vec<TabRoute>,
        active: usize,
        veto: bool,
        emitted: Vec<String>,
    }

    impl MockHost {
        fn new(veto: bool) -> Self {
            let routes = ["index", "explore", "cart", "profile"]
                .iter()
                .map(|name| TabRoute {
                    key: format!("{name}-key"),
                    name: name.to_string(),
                    title: name.to_string(),
                })
                .collect();
            Self {
                routes,
                active: 0,
                veto,
                emitted: Vec::new(),
            }
        }
    }

    impl NavigationHost for MockHost {
        fn routes(&self) -> &[TabRoute] {
            &self.routes
        }
        fn active_index(&self) -> usize {
            self.active
        }
        fn emit_tab_press(&mut self, route: &TabRoute) -> TabPressEvent {
            self.emitted.push(route.key.clone());
            TabPressEvent {
                default_prevented: self.veto,
            }
        }
        fn navigate(&mut self, route_name: &str) {
            if let Some(pos) = self.routes.iter().position(|r| r.name == route_name) {
                self.active = pos;
            }
        }
    }

    fn settle(animator: &mut TabFocusAnimator) {
        for _ in 0..200 {
            animator.tick(Duration::from_millis(16));
        }
    }

    #[test]
    fn test_initial_progress() {
        let animator = TabFocusAnimator::new(4, 0, SpringConfig::default());
        assert_eq!(animator.progress(0), 1.0);
        assert_eq!(animator.progress(1), 0.0);
        assert!(animator.is_settled());
    }

    #[test]
    fn test_press_retargets() {
        let mut host = MockHost::new(false);
        let mut animator = TabFocusAnimator::new(4, 0, SpringConfig::default());

        let outcome = animator.on_tab_press(2, &mut host);
        assert_eq!(outcome, TabPressOutcome::Navigated);
        animator.sync(host.active_index());
        assert_eq!(animator.targets(), vec![0.0, 0.0, 1.0, 0.0]);
        assert!(!animator.is_settled());

        settle(&mut animator);
        assert!(animator.is_settled());
        assert_eq!(animator.progress(2), 1.0);
        assert_eq!(animator.progress(0), 0.0);
    }

    #[test]
    fn test_press_focused_route_emits_nothing() {
        let mut host = MockHost::new(false);
        let mut animator = TabFocusAnimator::new(4, 0, SpringConfig::default());
        let before = animator.targets();

        assert_eq!(animator.on_tab_press(0, &mut host), TabPressOutcome::AlreadyFocused);
        animator.sync(host.active_index());
        assert!(host.emitted.is_empty());
        assert_eq!(animator.targets(), before);
    }

    #[test]
    fn test_vetoed_press_keeps_focus() {
        let mut host = MockHost::new(true);
        let mut animator = TabFocusAnimator::new(4, 0, SpringConfig::default());

        assert_eq!(animator.on_tab_press(3, &mut host), TabPressOutcome::Prevented);
        animator.sync(host.active_index());
        assert_eq!(host.emitted, vec!["profile-key".to_string()]);
        assert_eq!(animator.targets(), vec![1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_out_of_range_press_is_ignored() {
        let mut host = MockHost::new(false);
        let animator = TabFocusAnimator::new(4, 0, SpringConfig::default());
        assert_eq!(animator.on_tab_press(9, &mut host), TabPressOutcome::Ignored);
        assert!(host.emitted.is_empty());
    }

    #[test]
    fn test_values_move_monotonically_and_stay_in_range() {
        let mut animator = TabFocusAnimator::new(4, 0, SpringConfig::default());
        animator.sync(1);
        let mut prev_rising = animator.progress(1);
        let mut prev_falling = animator.progress(0);
        for step in 0..120 {
            animator.tick(Duration::from_millis(8));
            let rising = animator.progress(1);
            let falling = animator.progress(0);
            assert!(rising >= prev_rising && rising <= 1.0);
            assert!(falling <= prev_falling && falling >= 0.0);
            prev_rising = rising;
            prev_falling = falling;

            // Bounce back mid-flight once.
            if step == 10 {
                animator.sync(0);
                prev_rising = animator.progress(0);
                prev_falling = animator.progress(1);
                let (r, f) = (prev_rising, prev_falling);
                for _ in 0..120 {
                    animator.tick(Duration::from_millis(8));
                    assert!(animator.progress(0) >= r);
                    assert!(animator.progress(1) <= f);
                }
                break;
            }
        }
        assert!(animator.is_settled());
        assert_eq!(animator.progress(0), 1.0);
    }

    #[test]
    fn test_mid_flight_values_are_between_endpoints() {
        let mut animator = TabFocusAnimator::new(2, 0, SpringConfig::default());
        animator.sync(1);
        animator.tick(Duration::from_millis(40));
        let p = animator.progress(1);
        assert!(p > 0.0 && p < 1.0, "progress {p} should be mid-flight");
    }

    #[test]
    fn test_spring_config_conversion() {
        let config = SpringConfig::from_tension_friction(40.0, 8.0);
        assert!((config.stiffness - 230.2).abs() < 1e-9);
        assert_eq!(config.damping, 25.0);
    }

    #[test]
    fn test_visual_endpoints() {
        let idle = TabVisual::from_progress(0.0);
        assert_eq!(idle.scale, 1.0);
        assert_eq!(idle.translate_y, 0.0);
        assert_eq!(idle.label_color, INACTIVE_LABEL);

        let focused = TabVisual::from_progress(1.0);
        assert!((focused.scale - 1.1).abs() < 1e-6);
        assert_eq!(focused.translate_y, -8.0);
        assert!((focused.icon_scale - 1.2).abs() < 1e-6);
        assert_eq!(focused.indicator_opacity, 1.0);
        assert_eq!(focused.label_color, ACCENT);
    }
}
