use std::sync::Arc;
use std::time::Duration;

use kanal::AsyncSender;
use quickdef_hotkey::HotkeyManager;
use quickdef_types::{AppEvent, UiEvent};
use tokio_util::sync::CancellationToken;

use crate::state::AppState;

/// Watch the global hotkey and ask the UI to show the popup on each press.
/// Without a registered hotkey this only waits for shutdown.
pub async fn watcher_io(
    state: Arc<AppState>,
    poll_interval: Duration,
    cancel: CancellationToken,
    event_tx: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let (enabled, combo) = {
        let config = state.config.read().await;
        (config.hotkey.enabled, config.hotkey.combo.clone())
    };

    if !enabled {
        tracing::info!("Global hotkey disabled");
        cancel.cancelled().await;
        return Ok(());
    }

    let cancel_clone = cancel.clone();
    let registered = tokio::task::spawn_blocking(move || {
        let hotkey_manager = match HotkeyManager::with_combo(&combo) {
            Ok(manager) => manager,
            Err(e) => {
                tracing::warn!("Global hotkey unavailable, popup only via the console prompt: {}", e);
                return false;
            }
        };

        tracing::info!("Hotkey registered ({}, id {})", combo, hotkey_manager.id());
        if HotkeyManager::needs_event_loop() {
            tracing::warn!(
                "Hotkey presses are only delivered through a native event loop on this \
                 platform and may never fire here; use the console prompt instead"
            );
        }

        while !cancel_clone.is_cancelled() {
            if hotkey_manager.poll() {
                tracing::debug!("Hotkey pressed");
                match event_tx.try_send(AppEvent::UiEvent(UiEvent::Show)) {
                    Ok(true) => {}
                    Ok(false) => tracing::warn!("UI busy, dropping hotkey press"),
                    Err(e) => {
                        tracing::warn!("Failed to forward hotkey press: {}", e);
                        break;
                    }
                }
            }

            std::thread::sleep(poll_interval);
        }

        tracing::info!("Hotkey listener stopping");
        true
    })
    .await?;

    if !registered {
        cancel.cancelled().await;
    }

    Ok(())
}
