use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::hotkey::HotkeyConfig;
use self::network::NetworkConfig;
use self::ui::UiConfig;

pub mod dictionary;
pub mod hotkey;
pub mod network;
pub mod paths;
pub mod ui;

pub use ui::SuggestionOrder;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    /// Online fallback API
    pub network: NetworkConfig,
    pub ui: UiConfig,
    pub hotkey: HotkeyConfig,
}

impl Config {
    /// Read a JSON config file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Apply `QUICKDEF_*` overrides from an arbitrary key lookup.
    /// Unparsable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("QUICKDEF_DB_PATH") {
            self.dictionary.path = PathBuf::from(path);
        }

        if let Some(path) = lookup("QUICKDEF_FREQUENCY_PATH") {
            self.dictionary.frequency_path = Some(PathBuf::from(path));
        }

        if let Some(enabled) = lookup("QUICKDEF_ONLINE").and_then(|v| parse_flag(&v)) {
            self.network.enabled = enabled;
        }

        if let Some(url) = lookup("QUICKDEF_API_URL") {
            self.network.api_url = url;
        }

        if let Some(timeout) = lookup("QUICKDEF_TIMEOUT_SECONDS").and_then(|v| v.parse().ok()) {
            self.network.timeout_seconds = timeout;
        }

        if let Some(combo) = lookup("QUICKDEF_HOTKEY") {
            self.hotkey.combo = combo;
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
