use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use quickdef_config::{Config, SuggestionOrder};
use quickdef_core::{Dictionary, LookupService, SuggestionProvider};
use quickdef_online::FreeDictionaryClient;
use quickdef_store::{FrequencyList, StoreLoader, WordStore};
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub lookup: Arc<LookupService>,
    pub suggestions: Arc<SuggestionProvider>,
}

impl AppState {
    /// Load the word store and wire the lookup services.
    /// Fails only if an existing store cannot be read at all.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let dictionary: Arc<dyn Dictionary> = if config.dictionary.enabled {
            Arc::new(
                StoreLoader::load_with_additional(
                    &config.dictionary.path,
                    &config.dictionary.additional_paths,
                )
                .context("Failed to open word store")?,
            )
        } else {
            tracing::warn!("Local dictionary disabled, using empty store");
            Arc::new(WordStore::new("empty"))
        };

        let mut lookup = LookupService::new(dictionary.clone());
        if config.network.enabled {
            let client = FreeDictionaryClient::new(
                config.network.api_url.clone(),
                Duration::from_secs(config.network.timeout_seconds),
            )
            .context("Failed to create online dictionary client")?;
            lookup = lookup.with_online(Arc::new(client));
        } else {
            tracing::info!("Online fallback disabled");
        }

        let mut suggestions = SuggestionProvider::new(dictionary);
        if config.ui.suggestion_order == SuggestionOrder::Frequency {
            match &config.dictionary.frequency_path {
                Some(path) => match FrequencyList::load_from_file(path) {
                    Ok(list) => suggestions = suggestions.with_frequency(Arc::new(list)),
                    Err(e) => tracing::warn!(
                        "Failed to load frequency list {}: {}, ordering alphabetically",
                        path.display(),
                        e
                    ),
                },
                None => tracing::warn!("Frequency ordering requested without a frequency list"),
            }
        }

        Ok(Self::with_services(config, lookup, suggestions))
    }

    pub fn with_services(
        config: Config,
        lookup: LookupService,
        suggestions: SuggestionProvider,
    ) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            lookup: Arc::new(lookup),
            suggestions: Arc::new(suggestions),
        }
    }
}
