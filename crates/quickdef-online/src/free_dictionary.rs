use std::time::Duration;

use async_trait::async_trait;
use quickdef_types::{Entry, Sense, Source};
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::{OnlineDictionary, OnlineError, ProviderMetadata};

const DEFAULT_NOT_FOUND_TITLE: &str = "No Definitions Found";

/// Client for the public Free Dictionary API (dictionaryapi.dev)
#[derive(Clone)]
pub struct FreeDictionaryClient {
    client: reqwest::Client,
    api_url: String,
}

impl FreeDictionaryClient {
    pub fn new(api_url: impl Into<String>, timeout: Duration) -> Result<Self, OnlineError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("quickdef/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            api_url: api_url.into(),
        })
    }

    /// `{api_url}/{word}` with the word encoded as a single path segment
    fn entry_url(&self, word: &str) -> Result<Url, OnlineError> {
        let mut url =
            Url::parse(&self.api_url).map_err(|e| OnlineError::InvalidUrl(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| OnlineError::InvalidUrl(self.api_url.clone()))?
            .pop_if_empty()
            .push(word);

        Ok(url)
    }
}

#[async_trait]
impl OnlineDictionary for FreeDictionaryClient {
    async fn fetch(&self, word: &str) -> Result<Entry, OnlineError> {
        let url = self.entry_url(word)?;
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            return Err(OnlineError::NotFound(not_found_title(&body)));
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(OnlineError::RateLimitExceeded);
        }

        if !status.is_success() {
            return Err(OnlineError::ApiError(format!("HTTP {}", status)));
        }

        let body = response.text().await?;
        parse_entries(word, &body)
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Free Dictionary API".to_string(),
            base_url: self.api_url.clone(),
        }
    }
}

// Response structures of the v2 entries endpoint
#[derive(Debug, Deserialize)]
struct ApiEntry {
    #[serde(default)]
    word: String,
    #[serde(default)]
    phonetic: Option<String>,
    #[serde(default)]
    phonetics: Vec<ApiPhonetic>,
    #[serde(default)]
    meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
struct ApiPhonetic {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiMeaning {
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: String,
    #[serde(default)]
    definitions: Vec<ApiDefinition>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
    definition: String,
    #[serde(default)]
    example: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiNotFound {
    title: String,
}

fn not_found_title(body: &str) -> String {
    serde_json::from_str::<ApiNotFound>(body)
        .map(|e| e.title)
        .unwrap_or_else(|_| DEFAULT_NOT_FOUND_TITLE.to_string())
}

fn non_empty(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}

/// Merge every returned homograph into one entry
fn parse_entries(word: &str, body: &str) -> Result<Entry, OnlineError> {
    let entries: Vec<ApiEntry> = serde_json::from_str(body)
        .map_err(|e| OnlineError::ApiError(format!("Failed to parse response: {}", e)))?;

    let headword = entries
        .iter()
        .map(|e| e.word.as_str())
        .find(|w| !w.is_empty())
        .unwrap_or(word)
        .to_string();

    let mut phonetic = None;
    let mut senses = Vec::new();

    for entry in entries {
        if phonetic.is_none() {
            phonetic = non_empty(entry.phonetic)
                .or_else(|| entry.phonetics.into_iter().find_map(|p| non_empty(p.text)));
        }

        for meaning in entry.meanings {
            for definition in meaning.definitions {
                senses.push(Sense {
                    part_of_speech: meaning.part_of_speech.clone(),
                    definition: definition.definition,
                    examples: non_empty(definition.example).into_iter().collect(),
                    synset: None,
                });
            }
        }
    }

    if senses.is_empty() {
        return Err(OnlineError::NotFound(DEFAULT_NOT_FOUND_TITLE.to_string()));
    }

    Ok(Entry {
        word: headword,
        phonetic,
        senses,
        source: Source::Online,
    })
}
