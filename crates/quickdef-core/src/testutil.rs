use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use quickdef_online::{OnlineDictionary, OnlineError, ProviderMetadata};
use quickdef_types::{Entry, Sense, Source};

use crate::dictionary::{Dictionary, DictionaryMetadata};
use crate::frequency::FrequencyProvider;
use crate::preprocess::normalize;

pub struct MemoryDictionary {
    entries: BTreeMap<String, Entry>,
}

impl MemoryDictionary {
    pub fn with_words(words: &[&str]) -> Self {
        let entries = words
            .iter()
            .map(|w| {
                let entry = Entry::new(*w, vec![Sense::new("n", format!("definition of {}", w))]);
                (normalize(w), entry)
            })
            .collect();
        Self { entries }
    }

    /// Store an entry as-is, bypassing any validation
    pub fn insert(&mut self, entry: Entry) {
        self.entries.insert(normalize(&entry.word), entry);
    }
}

impl Dictionary for MemoryDictionary {
    fn lookup_exact(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    fn keys_with_prefix<'a>(&'a self, prefix: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(
            self.entries
                .range::<str, _>((std::ops::Bound::Included(prefix), std::ops::Bound::Unbounded))
                .map(|(k, _)| k.as_str())
                .take_while(move |k| k.starts_with(prefix)),
        )
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "memory".to_string(),
            entry_count: self.entries.len(),
        }
    }
}

/// Online stub that knows a fixed word set and counts calls
pub struct CountingOnline {
    known: Vec<String>,
    fail_network: bool,
    pub calls: Arc<AtomicUsize>,
}

impl CountingOnline {
    pub fn knowing(words: &[&str]) -> Self {
        Self {
            known: words.iter().map(|w| w.to_string()).collect(),
            fail_network: false,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            known: Vec::new(),
            fail_network: true,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OnlineDictionary for CountingOnline {
    async fn fetch(&self, word: &str) -> Result<Entry, OnlineError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.fail_network {
            return Err(OnlineError::ApiError("HTTP 503 Service Unavailable".to_string()));
        }

        if self.known.iter().any(|w| w == word) {
            let mut entry = Entry::new(word, vec![Sense::new("noun", "from the web")]);
            entry.source = Source::Online;
            Ok(entry)
        } else {
            Err(OnlineError::NotFound("No Definitions Found".to_string()))
        }
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "counting".to_string(),
            base_url: "memory://".to_string(),
        }
    }
}

pub struct FixedFrequency(pub HashMap<String, u32>);

impl FrequencyProvider for FixedFrequency {
    fn frequency(&self, word: &str) -> Option<u32> {
        self.0.get(word).copied()
    }
}
