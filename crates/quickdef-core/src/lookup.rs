use std::sync::Arc;

use quickdef_online::OnlineDictionary;
use quickdef_types::{Entry, Source};

use crate::dictionary::Dictionary;
use crate::error::LookupError;
use crate::preprocess::normalize;

/// Local-first definition lookup with an optional online fallback
pub struct LookupService {
    dictionary: Arc<dyn Dictionary>,
    online: Option<Arc<dyn OnlineDictionary>>,
}

impl LookupService {
    pub fn new(dictionary: Arc<dyn Dictionary>) -> Self {
        Self {
            dictionary,
            online: None,
        }
    }

    pub fn with_online(mut self, online: Arc<dyn OnlineDictionary>) -> Self {
        self.online = Some(online);
        self
    }

    pub fn dictionary(&self) -> &Arc<dyn Dictionary> {
        &self.dictionary
    }

    pub fn has_online(&self) -> bool {
        self.online.is_some()
    }

    /// Define a word.
    ///
    /// A local hit never touches the network. On a local miss at most one
    /// online request is made; any failure there is reported as `NotFound`.
    pub async fn define(&self, word: &str) -> Result<Entry, LookupError> {
        let key = normalize(word);
        if key.is_empty() {
            return Err(LookupError::EmptyQuery);
        }

        match self.dictionary.lookup_exact(&key) {
            Some(entry) if !entry.is_empty() => {
                tracing::debug!("'{}': {} local senses", key, entry.senses.len());
                return Ok(entry.clone());
            }
            Some(_) => tracing::warn!("'{}' is stored without definitions", key),
            None => {}
        }

        let Some(online) = &self.online else {
            tracing::debug!("'{}' not in local store, online lookup disabled", key);
            return Err(LookupError::NotFound(key));
        };

        let metadata = online.metadata();
        tracing::debug!(
            "'{}' not in local store, asking {} at {}",
            key,
            metadata.name,
            metadata.base_url
        );

        match online.fetch(&key).await {
            Ok(mut entry) if !entry.is_empty() => {
                entry.source = Source::Online;
                Ok(entry)
            }
            Ok(_) => Err(LookupError::NotFound(key)),
            Err(e) if e.is_not_found() => {
                tracing::debug!("'{}' unknown online: {}", key, e);
                Err(LookupError::NotFound(key))
            }
            Err(e) => {
                tracing::warn!("Online lookup for '{}' failed: {}", key, e);
                Err(LookupError::NotFound(key))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{CountingOnline, MemoryDictionary};

    fn service(online: CountingOnline) -> (LookupService, Arc<CountingOnline>) {
        let dictionary = Arc::new(MemoryDictionary::with_words(&["cat", "ice cream", "dog"]));
        let online = Arc::new(online);
        let service = LookupService::new(dictionary).with_online(online.clone());
        (service, online)
    }

    #[tokio::test]
    async fn local_hit_skips_network() {
        let (service, online) = service(CountingOnline::knowing(&["cat"]));

        for word in ["cat", "dog", "ice cream"] {
            let entry = service.define(word).await.unwrap();
            assert_eq!(entry.source, Source::Local);
            assert_eq!(entry.definitions(), vec![format!("definition of {}", word)]);
        }

        assert_eq!(online.call_count(), 0);
    }

    #[tokio::test]
    async fn lookup_is_case_insensitive() {
        let (service, _) = service(CountingOnline::knowing(&[]));

        let upper = service.define("Cat").await.unwrap();
        let lower = service.define("cat").await.unwrap();
        let padded = service.define("  ICE   Cream ").await.unwrap();

        assert_eq!(upper, lower);
        assert_eq!(padded.word, "ice cream");
    }

    #[tokio::test]
    async fn local_miss_falls_back_once() {
        let (service, online) = service(CountingOnline::knowing(&["serendipity"]));

        let entry = service.define("Serendipity").await.unwrap();

        assert_eq!(entry.source, Source::Online);
        assert_eq!(entry.definitions(), vec!["from the web".to_string()]);
        assert_eq!(online.call_count(), 1);
    }

    #[tokio::test]
    async fn stored_word_without_senses_falls_back_online() {
        let mut dictionary = MemoryDictionary::with_words(&["cat"]);
        dictionary.insert(Entry::new("serendipity", vec![]));
        let online = Arc::new(CountingOnline::knowing(&["serendipity"]));
        let service = LookupService::new(Arc::new(dictionary)).with_online(online.clone());

        let entry = service.define("serendipity").await.unwrap();

        assert_eq!(entry.source, Source::Online);
        assert!(!entry.is_empty());
        assert_eq!(online.call_count(), 1);
    }

    #[tokio::test]
    async fn missing_everywhere_is_not_found() {
        let (service, online) = service(CountingOnline::knowing(&["serendipity"]));

        let err = service.define("zzxq").await.unwrap_err();

        assert_eq!(err, LookupError::NotFound("zzxq".to_string()));
        assert_eq!(online.call_count(), 1);
    }

    #[tokio::test]
    async fn remote_failure_degrades_to_not_found() {
        let (service, online) = service(CountingOnline::unreachable());

        let err = service.define("serendipity").await.unwrap_err();

        assert_eq!(err, LookupError::NotFound("serendipity".to_string()));
        assert_eq!(online.call_count(), 1);
    }

    #[tokio::test]
    async fn offline_miss_is_not_found() {
        let dictionary = Arc::new(MemoryDictionary::with_words(&["cat"]));
        let service = LookupService::new(dictionary);

        assert!(!service.has_online());
        assert_eq!(
            service.define("dog").await,
            Err(LookupError::NotFound("dog".to_string()))
        );
    }

    #[tokio::test]
    async fn blank_input_is_rejected_without_lookup() {
        let (service, online) = service(CountingOnline::knowing(&[]));

        assert_eq!(service.define("   ").await, Err(LookupError::EmptyQuery));
        assert_eq!(online.call_count(), 0);
    }
}
