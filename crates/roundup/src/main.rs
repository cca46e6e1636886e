mod di;
mod format;

use crate::{di::DependenciesInject, format::format_minor_units};
use anyhow::{Context, Result};
use dotenv::dotenv;
use shared::{config::Config, utils::Logger};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _logger =
        Logger::new("roundup", config.is_dev).context("Failed to initialize logging")?;

    let deps = DependenciesInject::new(&config.starling)
        .context("Failed to initialize dependency injection container")?;

    info!("🚀 Calculating round-up");

    let summary = tokio::select! {
        result = deps.round_up.round_up_primary_account() => result.map_err(|e| {
            error!("❌ Round-up failed: {e}");
            e
        })?,
        _ = tokio::signal::ctrl_c() => {
            info!("Cancelled, shutting down...");
            return Ok(());
        }
    };

    match summary {
        Some(summary) => {
            println!("Your Round Up");
            println!(
                "{}",
                format_minor_units(summary.total_minor_units, summary.currency.as_deref())
            );
        }
        None => println!("No account found, nothing to round up yet"),
    }

    Ok(())
}
