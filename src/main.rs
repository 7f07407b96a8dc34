//! VALUEDECK — ASIC selector and three-variable valuation calculator
//!
//! Entry point. Loads configuration, initialises structured logging,
//! builds both calculators from their configured defaults, and serves the
//! dashboard until Ctrl+C.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

use valuedeck::config;
use valuedeck::dashboard;
use valuedeck::dashboard::routes::DashboardState;
use valuedeck::mining::DeviceSelectionState;
use valuedeck::valuation::calculator::InvestmentCalculator;

const BANNER: &str = r#"
__   ___   _   _   _ ___ ___  ___ ___ _  __
\ \ / /_\ | | | | | | __|   \| __/ __| |/ /
 \ V / _ \| |_| |_| | _|| |) | _| (__| ' <
  \_/_/ \_\____\___/|___|___/|___\___|_|\_\

  Miner selector • Three-variable valuation framework
  v0.1.0
"#;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cfg = config::AppConfig::load("config.toml")?;

    init_logging();

    println!("{BANNER}");
    info!(app_name = %cfg.app.name, "VALUEDECK starting up");

    // -- Calculators -----------------------------------------------------

    let preset = cfg.default_preset()?;
    let catalog = cfg.miner_catalog()?;
    info!(
        preset = %preset,
        miners = catalog.len(),
        default_profile = ?cfg.mining.default_profile,
        "Calculators initialised"
    );

    let miner = DeviceSelectionState::new(catalog, cfg.mining.default_profile.as_deref());
    let valuation = InvestmentCalculator::new(preset);
    let state = Arc::new(DashboardState::new(miner, valuation));

    // -- Serve -----------------------------------------------------------

    let addr: SocketAddr = format!("{}:{}", cfg.dashboard.host, cfg.port())
        .parse()
        .with_context(|| format!("Invalid dashboard address: {}", cfg.dashboard.host))?;

    dashboard::serve(state, addr, shutdown_signal()).await?;

    info!("VALUEDECK shut down cleanly.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C; serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received.");
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("valuedeck=info"));

    let json_logging = std::env::var("VALUEDECK_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_thread_ids(true)
            .init();
    } else {
        fmt().with_env_filter(env_filter).with_target(true).init();
    }
}
