use clap::Parser;
use foodexpress::core::cart::TotalsRounding;
use foodexpress::core::config::{CliOverrides, FoodExpressConfig, load_config, resolve};
use foodexpress::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "foodexpress", about = "Food delivery in your terminal")]
struct Args {
    /// Go straight to the Home tab
    #[arg(long)]
    skip_splash: bool,

    /// How tax and total are derived from the subtotal
    #[arg(long, value_enum)]
    rounding: Option<TotalsRounding>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to foodexpress.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("foodexpress.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = load_config().unwrap_or_else(|e| {
        log::warn!("{}, falling back to defaults", e);
        FoodExpressConfig::default()
    });
    let resolved = resolve(
        &config,
        &CliOverrides {
            skip_splash: args.skip_splash,
            rounding: args.rounding,
        },
    );

    log::info!(
        "FoodExpress starting up (rounding: {:?}, skip splash: {})",
        resolved.pricing.rounding,
        resolved.skip_splash
    );

    tui::run(resolved)
}
