//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::config::ResolvedConfig;
use crate::core::state::App;

/// Creates a test App that starts on the Home tab with default pricing.
pub fn test_app() -> App {
    App::new(&ResolvedConfig {
        skip_splash: true,
        ..Default::default()
    })
}
