use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use quickdef_config::Config;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod io;
mod profile;
mod render;
mod state;
mod ui;


use controller::AppController;
use state::AppState;

/// Look up English definitions from a global hotkey popup
#[derive(Parser, Debug)]
#[command(name = "quickdef", version)]
struct Cli {
    /// Config file [default: config.json in the app data directory]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Word store to load instead of the configured one
    #[arg(long)]
    database: Option<PathBuf>,

    /// Never query the online dictionary
    #[arg(long)]
    offline: bool,

    /// Do not register the global hotkey
    #[arg(long)]
    no_hotkey: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(path) = &self.database {
            config.dictionary.path = path.clone();
        }
        if self.offline {
            config.network.enabled = false;
        }
        if self.no_hotkey {
            config.hotkey.enabled = false;
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    if let Err(e) = profile::init_user_config() {
        tracing::warn!("Could not prepare user config: {:#}", e);
    }

    let mut config = profile::load_config(cli.config.as_deref())?;
    cli.apply(&mut config);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let result = runtime.block_on(run(config));

    // Blocked stdin reads never finish on their own
    runtime.shutdown_timeout(Duration::from_millis(500));
    result
}

async fn run(config: Config) -> anyhow::Result<()> {
    let state = tokio::task::spawn_blocking(move || AppState::new(config)).await??;

    let controller = AppController::new(Arc::new(state));
    let mut tasks = controller.spawn_tasks();

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("Task failed: {:#}", e),
                Err(e) => tracing::error!("Task panicked: {}", e),
            }
        }
    }

    controller.shutdown();

    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(Ok(())) => {}
            Ok(Err(e)) => tracing::warn!("Task ended with error during shutdown: {:#}", e),
            Err(e) => tracing::error!("Task panicked: {}", e),
        }
    }

    Ok(())
}
