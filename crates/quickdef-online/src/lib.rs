use quickdef_types::Entry;

mod free_dictionary;

pub use free_dictionary::FreeDictionaryClient;

/// Remote definition provider, consulted on local misses
#[async_trait::async_trait]
pub trait OnlineDictionary: Send + Sync {
    /// Fetch the definitions of an already normalized word
    async fn fetch(&self, word: &str) -> Result<Entry, OnlineError>;

    /// Provider metadata
    fn metadata(&self) -> ProviderMetadata;
}

#[derive(Debug, Clone)]
pub struct ProviderMetadata {
    pub name: String,
    pub base_url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum OnlineError {
    #[error("{0}")]
    NotFound(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl OnlineError {
    /// The remote side answered that the word does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, OnlineError::NotFound(_))
    }
}
