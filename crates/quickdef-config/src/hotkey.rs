use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_combo() -> String {
    if cfg!(target_os = "macos") {
        "<cmd>+<alt>+d".to_string()
    } else {
        "<ctrl>+<alt>+d".to_string()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HotkeyConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// e.g. `<ctrl>+<alt>+d`
    #[serde(default = "default_combo")]
    pub combo: String,
}

impl Default for HotkeyConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            combo: default_combo(),
        }
    }
}
