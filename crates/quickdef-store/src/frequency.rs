use std::collections::HashMap;
use std::path::Path;

use quickdef_core::{FrequencyProvider, normalize};

/// Word frequency ranks loaded from a `word<TAB>rank` list
pub struct FrequencyList {
    frequencies: HashMap<String, u32>,
}

impl FrequencyList {
    pub fn new() -> Self {
        Self {
            frequencies: HashMap::new(),
        }
    }

    /// Parse TSV content; malformed lines are ignored.
    /// The best (lowest) rank wins when a word repeats.
    pub fn from_tsv(content: &str) -> Self {
        let mut frequencies: HashMap<String, u32> = HashMap::new();

        for line in content.lines() {
            let mut parts = line.split('\t');
            let (Some(word), Some(rank)) = (parts.next(), parts.next()) else {
                continue;
            };
            let Ok(rank) = rank.trim().parse::<u32>() else {
                continue;
            };

            let key = normalize(word);
            if key.is_empty() {
                continue;
            }

            frequencies
                .entry(key)
                .and_modify(|r| *r = (*r).min(rank))
                .or_insert(rank);
        }

        Self { frequencies }
    }

    /// Load frequency data from TSV file (word\trank format)
    pub fn load_from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        let list = Self::from_tsv(&content);
        tracing::info!("Loaded {} word frequencies from {}", list.len(), path.display());
        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

impl Default for FrequencyList {
    fn default() -> Self {
        Self::new()
    }
}

impl FrequencyProvider for FrequencyList {
    fn frequency(&self, word: &str) -> Option<u32> {
        self.frequencies.get(word).copied()
    }
}
