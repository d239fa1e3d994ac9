use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "QuickDefinition";
pub const STORE_FILE_NAME: &str = "wordnet.jsonl";
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Per-platform data directory:
/// `%APPDATA%\QuickDefinition`, `~/Library/Application Support/QuickDefinition`
/// or `~/.quickdefinition`.
pub fn data_dir() -> PathBuf {
    if cfg!(target_os = "windows") {
        dirs::config_dir()
            .unwrap_or_default()
            .join(APP_DIR_NAME)
    } else if cfg!(target_os = "macos") {
        dirs::data_dir().unwrap_or_default().join(APP_DIR_NAME)
    } else {
        dirs::home_dir()
            .unwrap_or_default()
            .join(format!(".{}", APP_DIR_NAME.to_lowercase()))
    }
}

pub fn default_store_path() -> PathBuf {
    data_dir().join(STORE_FILE_NAME)
}

pub fn default_config_path() -> PathBuf {
    data_dir().join(CONFIG_FILE_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_config_share_data_dir() {
        let store = default_store_path();
        let config = default_config_path();

        assert_eq!(store.parent(), config.parent());
        assert!(store.ends_with(STORE_FILE_NAME));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn linux_uses_hidden_home_dir() {
        assert!(data_dir().ends_with(".quickdefinition"));
    }
}
