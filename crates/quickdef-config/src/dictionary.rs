use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::paths;

fn default_enabled() -> bool {
    true
}

fn default_path() -> PathBuf {
    paths::default_store_path()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Main store file (JSON Lines)
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Extra store files merged after the main one
    #[serde(default)]
    pub additional_paths: Vec<PathBuf>,
    /// Optional `word<TAB>rank` list used for frequency-ordered suggestions
    #[serde(default)]
    pub frequency_path: Option<PathBuf>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_path(),
            additional_paths: vec![],
            frequency_path: None,
        }
    }
}
