use std::fs;
use std::path::Path;

use anyhow::Context;
use quickdef_config::{Config, paths};

/// Create the data directory and a default config file if missing
pub fn init_user_config() -> anyhow::Result<()> {
    let dir = paths::data_dir();
    fs::create_dir_all(&dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let config_file = paths::default_config_path();
    if !config_file.exists() {
        fs::write(&config_file, serde_json::to_string_pretty(&Config::default())?)?;
        tracing::info!("Created default config at {}", config_file.display());
    }

    Ok(())
}

/// Load config from an explicit path (must exist) or the default location
/// (optional), then apply environment overrides
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = match explicit {
        Some(path) => Config::load(path)?,
        None => load_optional(&paths::default_config_path())?,
    };

    config.apply_env_overrides();
    Ok(config)
}

fn load_optional(path: &Path) -> anyhow::Result<Config> {
    if path.exists() {
        tracing::info!("Loading config from {}", path.display());
        Ok(Config::load(path)?)
    } else {
        tracing::info!("No config at {}, using defaults", path.display());
        Ok(Config::default())
    }
}
