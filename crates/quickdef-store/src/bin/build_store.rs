use std::fs;
use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Parser;
use quickdef_config::paths;
use quickdef_store::wordnet;

/// Build the local QuickDef word store from WordNet database files
#[derive(Parser)]
#[command(name = "quickdef-build", version)]
struct Args {
    /// WordNet `dict/` directory containing data.noun, index.noun, ...
    #[arg(long)]
    wordnet_dir: PathBuf,

    /// Output store file [default: wordnet.jsonl in the app data directory]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Overwrite an existing store
    #[arg(long)]
    force: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let output = args.output.unwrap_or_else(paths::default_store_path);

    if output.exists() && !args.force {
        bail!(
            "{} already exists, pass --force to rebuild it",
            output.display()
        );
    }

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    tracing::info!(
        "Building word store from {} into {}",
        args.wordnet_dir.display(),
        output.display()
    );

    let store = wordnet::build_store(&args.wordnet_dir)
        .with_context(|| format!("Failed to read WordNet from {}", args.wordnet_dir.display()))?;

    store
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    tracing::info!("Word store ready: {} words", store.len());
    Ok(())
}
