//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.foodexpress/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::cart::{DEFAULT_DELIVERY_FEE, DEFAULT_TAX_RATE, Pricing, TotalsRounding};
use crate::core::splash::DEFAULT_SPLASH_DURATION;
use crate::core::tab_focus::{DEFAULT_FRICTION, DEFAULT_TENSION, SpringConfig};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FoodExpressConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pricing: PricingConfig,
    #[serde(default)]
    pub tab_bar: TabBarConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub skip_splash: Option<bool>,
    pub splash_duration_ms: Option<u64>,
    pub add_to_cart_delay_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PricingConfig {
    pub tax_rate: Option<f64>,
    pub delivery_fee: Option<f64>,
    pub rounding: Option<TotalsRounding>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TabBarConfig {
    pub tension: Option<f64>,
    pub friction: Option<f64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ADD_TO_CART_DELAY: Duration = Duration::from_millis(1500);

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub skip_splash: bool,
    pub splash_duration: Duration,
    pub add_to_cart_delay: Duration,
    pub pricing: Pricing,
    pub tab_spring: SpringConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve(&FoodExpressConfig::default(), &CliOverrides::default())
    }
}

/// Values that came from command-line flags (None = not specified).
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub skip_splash: bool,
    pub rounding: Option<TotalsRounding>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "could not read ~/.foodexpress/config.toml: {e}"),
            ConfigError::Parse(e) => write!(f, "invalid ~/.foodexpress/config.toml: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.foodexpress/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".foodexpress").join("config.toml"))
}

/// Load config from `~/.foodexpress/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `FoodExpressConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<FoodExpressConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(FoodExpressConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<FoodExpressConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(FoodExpressConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: FoodExpressConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# FoodExpress Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# skip_splash = false               # Or set FOODEXPRESS_SKIP_SPLASH=1
# splash_duration_ms = 5000
# add_to_cart_delay_ms = 1500

# [pricing]
# tax_rate = 0.08
# delivery_fee = 2.99
# rounding = "subtotal_first"       # "subtotal_first" or "exact" (FOODEXPRESS_ROUNDING)

# [tab_bar]
# tension = 40
# friction = 8
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

fn parse_rounding(value: &str) -> Option<TotalsRounding> {
    match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
        "subtotal_first" => Some(TotalsRounding::SubtotalFirst),
        "exact" => Some(TotalsRounding::Exact),
        other => {
            warn!("Ignoring unknown rounding mode {:?}", other);
            None
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &FoodExpressConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Skip splash: CLI → env → config → default
    let skip_splash = cli.skip_splash
        || std::env::var("FOODEXPRESS_SKIP_SPLASH")
            .ok()
            .map(|v| parse_flag(&v))
            .or(config.general.skip_splash)
            .unwrap_or(false);

    // Rounding: CLI → env → config → default
    let rounding = cli
        .rounding
        .or_else(|| {
            std::env::var("FOODEXPRESS_ROUNDING")
                .ok()
                .and_then(|v| parse_rounding(&v))
        })
        .or(config.pricing.rounding)
        .unwrap_or_default();

    let tax_rate = match config.pricing.tax_rate {
        Some(rate) if rate >= 0.0 => rate,
        Some(rate) => {
            warn!("Negative tax rate {} in config, using default", rate);
            DEFAULT_TAX_RATE
        }
        None => DEFAULT_TAX_RATE,
    };
    let delivery_fee = match config.pricing.delivery_fee {
        Some(fee) if fee >= 0.0 => fee,
        Some(fee) => {
            warn!("Negative delivery fee {} in config, using default", fee);
            DEFAULT_DELIVERY_FEE
        }
        None => DEFAULT_DELIVERY_FEE,
    };

    ResolvedConfig {
        skip_splash,
        splash_duration: config
            .general
            .splash_duration_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SPLASH_DURATION),
        add_to_cart_delay: config
            .general
            .add_to_cart_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_ADD_TO_CART_DELAY),
        pricing: Pricing {
            tax_rate,
            delivery_fee,
            rounding,
        },
        tab_spring: SpringConfig::from_tension_friction(
            config.tab_bar.tension.unwrap_or(DEFAULT_TENSION),
            config.tab_bar.friction.unwrap_or(DEFAULT_FRICTION),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = FoodExpressConfig::default();
        assert!(config.general.skip_splash.is_none());
        assert!(config.pricing.rounding.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(&FoodExpressConfig::default(), &CliOverrides::default());
        assert_eq!(resolved.splash_duration, DEFAULT_SPLASH_DURATION);
        assert_eq!(resolved.add_to_cart_delay, DEFAULT_ADD_TO_CART_DELAY);
        assert_eq!(resolved.pricing.tax_rate, DEFAULT_TAX_RATE);
        assert_eq!(resolved.pricing.delivery_fee, DEFAULT_DELIVERY_FEE);
        assert_eq!(resolved.tab_spring, SpringConfig::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = FoodExpressConfig {
            general: GeneralConfig {
                skip_splash: Some(true),
                splash_duration_ms: Some(100),
                add_to_cart_delay_ms: Some(10),
            },
            pricing: PricingConfig {
                tax_rate: Some(0.1),
                delivery_fee: Some(0.0),
                rounding: Some(TotalsRounding::Exact),
            },
            tab_bar: TabBarConfig {
                tension: Some(50.0),
                friction: Some(10.0),
            },
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert!(resolved.skip_splash);
        assert_eq!(resolved.splash_duration, Duration::from_millis(100));
        assert_eq!(resolved.add_to_cart_delay, Duration::from_millis(10));
        assert_eq!(resolved.pricing.tax_rate, 0.1);
        assert_eq!(resolved.pricing.delivery_fee, 0.0);
        assert_eq!(resolved.pricing.rounding, TotalsRounding::Exact);
        assert_eq!(resolved.tab_spring.damping, 31.0);
    }

    #[test]
    fn test_resolve_cli_rounding_wins() {
        let config = FoodExpressConfig {
            pricing: PricingConfig {
                rounding: Some(TotalsRounding::Exact),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            skip_splash: true,
            rounding: Some(TotalsRounding::SubtotalFirst),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.pricing.rounding, TotalsRounding::SubtotalFirst);
        assert!(resolved.skip_splash);
    }

    #[test]
    fn test_negative_pricing_falls_back() {
        let config = FoodExpressConfig {
            pricing: PricingConfig {
                tax_rate: Some(-1.0),
                delivery_fee: Some(-2.0),
                rounding: None,
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.pricing.tax_rate, DEFAULT_TAX_RATE);
        assert_eq!(resolved.pricing.delivery_fee, DEFAULT_DELIVERY_FEE);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
skip_splash = true
add_to_cart_delay_ms = 250

[pricing]
tax_rate = 0.05
rounding = "exact"

[tab_bar]
friction = 12
"#;
        let config: FoodExpressConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.skip_splash, Some(true));
        assert_eq!(config.general.add_to_cart_delay_ms, Some(250));
        assert_eq!(config.pricing.tax_rate, Some(0.05));
        assert_eq!(config.pricing.rounding, Some(TotalsRounding::Exact));
        assert_eq!(config.tab_bar.friction, Some(12.0));
        assert!(config.tab_bar.tension.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[pricing]
delivery_fee = 1.5
"#;
        let config: FoodExpressConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.pricing.delivery_fee, Some(1.5));
        assert!(config.general.splash_duration_ms.is_none());
        assert!(config.pricing.rounding.is_none());
    }

    #[test]
    fn test_default_template_is_valid_toml() {
        let config: FoodExpressConfig = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert!(config.general.skip_splash.is_none());
    }

    #[test]
    fn test_load_config_generates_default_file() {
        let dir = std::env::temp_dir().join(format!("foodexpress-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.pricing.tax_rate.is_none());
        assert!(path.exists());

        fs::write(&path, "[general\n").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_parse_rounding_accepts_cli_spelling() {
        assert_eq!(parse_rounding("subtotal-first"), Some(TotalsRounding::SubtotalFirst));
        assert_eq!(parse_rounding(" EXACT "), Some(TotalsRounding::Exact));
        assert_eq!(parse_rounding("banker"), None);
    }
}
