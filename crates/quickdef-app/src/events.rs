use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use quickdef_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

pub mod lookup;
pub mod suggest;

use lookup::{PendingLookup, handle_lookup};
use suggest::handle_suggest;

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    app_to_ui_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let metadata = state.lookup.dictionary().metadata();
    tracing::info!(
        "Dictionary '{}' ready with {} words (online fallback: {})",
        metadata.name,
        metadata.entry_count,
        state.lookup.has_online()
    );

    app_to_ui_tx.send(AppEvent::BackendReady).await?;

    let mut pending: Option<PendingLookup> = None;

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            event = ui_to_app_rx.recv() => event?,
        };

        tracing::debug!("Event received: {:?}", event);
        if handle_events(&state, &app_to_ui_tx, &mut pending, event).await? {
            break;
        }
    }

    if let Some(lookup) = pending.take() {
        lookup.cancel();
    }
    tracing::info!("Event loop stopped");
    Ok(())
}

/// Returns true when the app should close
async fn handle_events(
    state: &Arc<AppState>,
    app_to_ui_tx: &AsyncSender<AppEvent>,
    pending: &mut Option<PendingLookup>,
    event: AppEvent,
) -> anyhow::Result<bool> {
    match event {
        AppEvent::Lookup { word, generation } => {
            if word.trim().is_empty() {
                tracing::debug!("Ignoring blank lookup");
            } else if let Some(running) = pending.as_ref().filter(|p| p.is_running()) {
                tracing::debug!(
                    "Lookup for '{}' still running, ignoring '{}'",
                    running.word,
                    word
                );
            } else {
                *pending = Some(handle_lookup(state, word, generation, app_to_ui_tx));
            }
        }
        AppEvent::Suggest(prefix) => {
            handle_suggest(state, prefix, app_to_ui_tx).await?;
        }
        AppEvent::UiEvent(UiEvent::Hide) => {
            if let Some(lookup) = pending.take() {
                lookup.cancel();
            }
        }
        AppEvent::UiEvent(UiEvent::Close) => {
            tracing::info!("Close requested");
            return Ok(true);
        }
        AppEvent::UiEvent(UiEvent::Show) => {}
        // UI-bound events
        AppEvent::LookupStarted { .. }
        | AppEvent::ShowDefinition { .. }
        | AppEvent::ShowSuggestions { .. }
        | AppEvent::ShowError { .. }
        | AppEvent::BackendReady => {}
    }

    Ok(false)
}
