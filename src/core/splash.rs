//! # Splash
//!
//! Launch screen timing. Everything is a function of elapsed time.
//!
//! ```text
//! 0 ms      1200 ms   2000 ms                    duration
//! ├─ logo scale/fade ─┤                              │
//!           ├─ text ──┤                              │
//! ├──────────────── progress bar ────────────────────┤ → tabs
//! ```

use std::time::Duration;

pub const DEFAULT_SPLASH_DURATION: Duration = Duration::from_millis(5000);
const LOGO_SCALE_DURATION: Duration = Duration::from_millis(1200);
const LOGO_FADE_DURATION: Duration = Duration::from_millis(1000);
const TEXT_FADE_DURATION: Duration = Duration::from_millis(800);
const ICON_TURN_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq)]
pub struct SplashState {
    elapsed: Duration,
    duration: Duration,
}

fn fraction(elapsed: Duration, start: Duration, length: Duration) -> f64 {
    if length.is_zero() {
        return 1.0;
    }
    (elapsed.saturating_sub(start).as_secs_f64() / length.as_secs_f64()).clamp(0.0, 1.0)
}

impl SplashState {
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    pub fn progress(&self) -> f64 {
        fraction(self.elapsed, Duration::ZERO, self.duration)
    }

    pub fn logo_scale(&self) -> f64 {
        fraction(self.elapsed, Duration::ZERO, LOGO_SCALE_DURATION)
    }

    pub fn logo_opacity(&self) -> f64 {
        fraction(self.elapsed, Duration::ZERO, LOGO_FADE_DURATION)
    }

    /// Starts once the logo has finished scaling in.
    pub fn text_opacity(&self) -> f64 {
        fraction(self.elapsed, LOGO_SCALE_DURATION, TEXT_FADE_DURATION)
    }

    /// Icon rotation in [0, 1) turns, looping forever.
    pub fn icon_turn(&self) -> f64 {
        let period = ICON_TURN_DURATION.as_secs_f64();
        (self.elapsed.as_secs_f64() % period) / period
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence() {
        let mut splash = SplashState::new(DEFAULT_SPLASH_DURATION);
        assert_eq!(splash.progress(), 0.0);
        assert_eq!(splash.text_opacity(), 0.0);

        splash.advance(Duration::from_millis(600));
        assert!((splash.logo_scale() - 0.5).abs() < 1e-9);
        assert_eq!(splash.text_opacity(), 0.0);

        splash.advance(Duration::from_millis(1000));
        assert_eq!(splash.logo_scale(), 1.0);
        assert!((splash.text_opacity() - 0.5).abs() < 1e-9);
        assert!(!splash.is_finished());

        splash.advance(Duration::from_millis(3400));
        assert!(splash.is_finished());
        assert_eq!(splash.progress(), 1.0);
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let splash = SplashState::new(Duration::ZERO);
        assert!(splash.is_finished());
        assert_eq!(splash.progress(), 1.0);
    }

    #[test]
    fn test_icon_turn_wraps() {
        let mut splash = SplashState::new(DEFAULT_SPLASH_DURATION);
        splash.advance(Duration::from_millis(4500));
        assert!((splash.icon_turn() - 0.5).abs() < 1e-9);
    }
}
