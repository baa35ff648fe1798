use anyhow::Context;
use clap::Parser;
use configuration::{ConfigArgs, init_tracing, load_config};
use datastore::{ColumnLayout, load_with_layout};
use web_server::{AppState, run_server};

/// Serves the German foreign-trade dashboard.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: ConfigArgs,
}

/// The main entry point for the Handelsmonitor dashboard.
///
/// Startup is all-or-nothing: if the configuration or the dataset cannot be
/// loaded, the process exits before the listener is bound.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli.config.config)
        .with_context(|| format!("loading configuration from {}", cli.config.config.display()))?;
    // Keeps the file writer flushing until main returns.
    let _log_guard = init_tracing(&config.logging)?;

    let layout = ColumnLayout::from(&config.dataset);
    let table = load_with_layout(&config.dataset.path, &layout)
        .with_context(|| format!("loading dataset {}", config.dataset.path.display()))?;

    let state = AppState::new(table, &config.dashboard);
    tracing::info!(
        years = ?state.years,
        default_year = state.default_year,
        "Dashboard ready."
    );

    run_server(config.server.socket_addr(), state).await
}
