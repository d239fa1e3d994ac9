use serde::{Deserialize, Serialize};

fn default_suggestion_limit() -> usize {
    8
}

fn default_min_prefix_len() -> usize {
    2
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionOrder {
    #[default]
    Alphabetical,
    Frequency,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
    /// Shorter prefixes clear the suggestion list instead of querying
    #[serde(default = "default_min_prefix_len")]
    pub min_prefix_len: usize,
    #[serde(default)]
    pub suggestion_order: SuggestionOrder,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: default_suggestion_limit(),
            min_prefix_len: default_min_prefix_len(),
            suggestion_order: SuggestionOrder::default(),
        }
    }
}
