use std::sync::Arc;

use kanal::AsyncSender;
use quickdef_core::normalize;
use quickdef_types::AppEvent;

use crate::state::AppState;

/// Short prefixes answer with an empty list so the UI clears stale suggestions
pub async fn handle_suggest(
    state: &Arc<AppState>,
    prefix: String,
    app_to_ui_tx: &AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (limit, min_len) = {
        let config = state.config.read().await;
        (config.ui.suggestion_limit, config.ui.min_prefix_len)
    };

    let words = if normalize(&prefix).chars().count() < min_len {
        Vec::new()
    } else {
        state.suggestions.suggest(&prefix, limit)
    };

    tracing::debug!("{} suggestions for '{}'", words.len(), prefix);
    app_to_ui_tx
        .send(AppEvent::ShowSuggestions { prefix, words })
        .await?;

    Ok(())
}
