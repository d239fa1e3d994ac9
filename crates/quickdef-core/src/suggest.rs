use std::sync::Arc;

use quickdef_config::SuggestionOrder;

use crate::dictionary::Dictionary;
use crate::frequency::FrequencyProvider;
use crate::preprocess::normalize;

/// Prefix completion over the local store's keys
pub struct SuggestionProvider {
    dictionary: Arc<dyn Dictionary>,
    frequency: Option<Arc<dyn FrequencyProvider>>,
    order: SuggestionOrder,
}

impl SuggestionProvider {
    pub fn new(dictionary: Arc<dyn Dictionary>) -> Self {
        Self {
            dictionary,
            frequency: None,
            order: SuggestionOrder::Alphabetical,
        }
    }

    /// Rank by frequency when a list is available
    pub fn with_frequency(mut self, frequency: Arc<dyn FrequencyProvider>) -> Self {
        self.frequency = Some(frequency);
        self.order = SuggestionOrder::Frequency;
        self
    }

    pub fn with_order(mut self, order: SuggestionOrder) -> Self {
        self.order = order;
        self
    }

    /// At most `limit` words starting with `prefix`
    pub fn suggest(&self, prefix: &str, limit: usize) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }

        let prefix = normalize(prefix);
        let keys = self.dictionary.keys_with_prefix(&prefix);

        match (&self.order, &self.frequency) {
            (SuggestionOrder::Frequency, Some(frequency)) => {
                let mut ranked: Vec<(u32, &str)> = keys
                    .map(|k| (frequency.frequency(k).unwrap_or(u32::MAX), k))
                    .collect();
                // keys arrive sorted, so a stable sort keeps ties alphabetical
                ranked.sort_by_key(|(rank, _)| *rank);
                ranked
                    .into_iter()
                    .take(limit)
                    .map(|(_, k)| k.to_string())
                    .collect()
            }
            _ => keys.take(limit).map(str::to_string).collect(),
        }
    }
}
