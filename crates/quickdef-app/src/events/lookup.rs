use std::sync::Arc;

use kanal::AsyncSender;
use quickdef_core::LookupError;
use quickdef_core::display::to_display_result;
use quickdef_types::AppEvent;
use tokio::task::JoinHandle;

use crate::state::AppState;

/// A definition request running in the background
pub struct PendingLookup {
    pub word: String,
    handle: JoinHandle<()>,
}

impl PendingLookup {
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Abort the request; its result is never delivered
    pub fn cancel(self) {
        if self.is_running() {
            tracing::debug!("Cancelling lookup for '{}'", self.word);
            self.handle.abort();
        }
    }
}

pub fn handle_lookup(
    state: &Arc<AppState>,
    word: String,
    generation: u64,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> PendingLookup {
    let handle = tokio::spawn(run_lookup(
        state.clone(),
        word.clone(),
        generation,
        app_to_ui_tx.clone(),
    ));

    PendingLookup { word, handle }
}

async fn run_lookup(
    state: Arc<AppState>,
    word: String,
    generation: u64,
    app_to_ui_tx: AsyncSender<AppEvent>,
) {
    let started = AppEvent::LookupStarted {
        word: word.clone(),
        generation,
    };
    if app_to_ui_tx
        .send(started)
        .await
        .is_err()
    {
        return;
    }

    let event = match state.lookup.define(&word).await {
        Ok(entry) => {
            tracing::info!(
                "'{}' resolved {} with {} senses",
                entry.word,
                entry.source.as_str(),
                entry.senses.len()
            );
            AppEvent::ShowDefinition {
                result: to_display_result(&entry),
                generation,
            }
        }
        Err(LookupError::EmptyQuery) => {
            tracing::debug!("Nothing to look up in '{}'", word);
            return;
        }
        Err(e) => {
            tracing::info!("{}", e);
            AppEvent::ShowError {
                message: e.to_string(),
                generation,
            }
        }
    };

    if let Err(e) = app_to_ui_tx.send(event).await {
        tracing::debug!("UI gone before lookup result: {}", e);
    }
}
