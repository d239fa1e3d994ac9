use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use quickdef_config::Config;
use quickdef_types::{AppEvent, UiEvent};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::render::{render_definition, render_suggestions};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Define(String),
    Suggest(String),
    Hide,
    Help,
    Quit,
    /// Input that could not be understood, with a message for the user
    Invalid(String),
}

/// Parse one console line. `#n` resolves against the last suggestion list.
pub fn parse_command(line: &str, suggestions: &[String]) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let command = match line {
        ":q" | ":quit" => Command::Quit,
        ":hide" => Command::Hide,
        ":help" | ":h" => Command::Help,
        _ if line.starts_with(':') => Command::Invalid(format!("Unknown command '{}'", line)),
        _ => {
            if let Some(prefix) = line.strip_prefix('?') {
                Command::Suggest(prefix.trim().to_string())
            } else if let Some(n) = line.strip_prefix('#') {
                match n.trim().parse::<usize>() {
                    Ok(n) if n >= 1 && n <= suggestions.len() => {
                        Command::Define(suggestions[n - 1].clone())
                    }
                    _ => Command::Invalid(format!("No suggestion {}", line)),
                }
            } else {
                Command::Define(line.to_string())
            }
        }
    };

    Some(command)
}

/// Console stand-in for the popup window
#[derive(Debug, Default)]
pub struct Popup {
    visible: bool,
    suggestions: Vec<String>,
    /// Bumped on every hide; lookup replies tagged with an older value are stale
    generation: u64,
}

impl Popup {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
        self.suggestions.clear();
        self.generation += 1;
    }

    fn is_current(&self, generation: u64) -> bool {
        self.visible && generation == self.generation
    }

    /// Text to print for an event from the app, if any.
    /// Results arriving while the popup is closed, or for a lookup made
    /// before the last hide, are dropped.
    pub fn handle_app_event(&mut self, event: AppEvent) -> Option<String> {
        match event {
            AppEvent::UiEvent(UiEvent::Show) => {
                let was_visible = self.visible;
                self.open();
                (!was_visible).then(|| "Type a word to define (:help for commands)\n".to_string())
            }
            AppEvent::UiEvent(UiEvent::Hide) => {
                self.close();
                None
            }
            AppEvent::BackendReady => Some("QuickDefinition ready\n".to_string()),
            AppEvent::LookupStarted { word, generation } if self.is_current(generation) => {
                Some(format!("Looking up '{}'...\n", word))
            }
            AppEvent::ShowDefinition { result, generation } if self.is_current(generation) => {
                Some(render_definition(&result))
            }
            AppEvent::ShowSuggestions { prefix, words } if self.visible => {
                let text = render_suggestions(&prefix, &words);
                self.suggestions = words;
                Some(text)
            }
            AppEvent::ShowError {
                message,
                generation,
            } if self.is_current(generation) => Some(format!("{}\n", message)),
            _ => None,
        }
    }
}

fn help_text(combo: &str) -> String {
    format!(
        "  <word>     define a word\n  \
           ?<prefix>  list words starting with prefix\n  \
           #<n>       define the n-th listed suggestion\n  \
           :hide      close the popup\n  \
           :q         quit\nHotkey: {}\n",
        combo
    )
}

pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: Arc<RwLock<Config>>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let combo = config.read().await.hotkey.combo.clone();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut popup = Popup::default();

    loop {
        let output = tokio::select! {
            _ = cancel.cancelled() => break,
            event = app_to_ui_rx.recv() => popup.handle_app_event(event?),
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("Console input closed");
                    ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
                    break;
                };

                let Some(command) = parse_command(&line, popup.suggestions()) else {
                    continue;
                };

                match command {
                    Command::Define(word) => {
                        popup.open();
                        let lookup = AppEvent::Lookup {
                            word,
                            generation: popup.generation(),
                        };
                        ui_to_app_tx.send(lookup).await?;
                        None
                    }
                    Command::Suggest(prefix) => {
                        popup.open();
                        ui_to_app_tx.send(AppEvent::Suggest(prefix)).await?;
                        None
                    }
                    Command::Hide => {
                        popup.close();
                        ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Hide)).await?;
                        None
                    }
                    Command::Help => Some(help_text(&combo)),
                    Command::Quit => {
                        ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
                        break;
                    }
                    Command::Invalid(message) => Some(format!("{}\n", message)),
                }
            }
        };

        if let Some(text) = output {
            stdout.write_all(text.as_bytes()).await?;
            stdout.flush().await?;
        }
    }

    tracing::info!("UI loop stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdef_types::{DisplayResult, Source};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn parses_commands() {
        let suggestions = words(&["apple", "apply"]);

        assert_eq!(parse_command("  ", &suggestions), None);
        assert_eq!(
            parse_command(" Serendipity ", &suggestions),
            Some(Command::Define("Serendipity".to_string()))
        );
        assert_eq!(
            parse_command("?ap", &suggestions),
            Some(Command::Suggest("ap".to_string()))
        );
        assert_eq!(
            parse_command("#2", &suggestions),
            Some(Command::Define("apply".to_string()))
        );
        assert_eq!(parse_command(":hide", &suggestions), Some(Command::Hide));
        assert_eq!(parse_command(":q", &suggestions), Some(Command::Quit));
        assert_eq!(parse_command(":help", &suggestions), Some(Command::Help));
    }

    #[test]
    fn rejects_bad_picks_and_commands() {
        let suggestions = words(&["apple"]);

        for line in ["#0", "#2", "#x", ":nope"] {
            assert!(
                matches!(parse_command(line, &suggestions), Some(Command::Invalid(_))),
                "{line:?} should be invalid"
            );
        }
    }

    fn definition(generation: u64) -> AppEvent {
        AppEvent::ShowDefinition {
            result: DisplayResult {
                word: "Cat".to_string(),
                phonetic: None,
                source: Source::Local,
                meanings: vec![],
            },
            generation,
        }
    }

    #[test]
    fn hidden_popup_drops_results() {
        let mut popup = Popup::default();

        assert_eq!(popup.handle_app_event(definition(0)), None);

        popup.open();
        assert!(popup.handle_app_event(definition(0)).is_some());
    }

    #[test]
    fn results_from_before_hide_are_dropped_after_reopen() {
        let mut popup = Popup::default();
        popup.open();
        let before = popup.generation();

        popup.close();
        popup.open();
        let after = popup.generation();
        assert_ne!(before, after);

        assert_eq!(popup.handle_app_event(definition(before)), None);
        assert_eq!(
            popup.handle_app_event(AppEvent::ShowError {
                message: "No definition found for 'cat'".to_string(),
                generation: before,
            }),
            None
        );
        assert_eq!(
            popup.handle_app_event(AppEvent::LookupStarted {
                word: "cat".to_string(),
                generation: before,
            }),
            None
        );
        assert!(popup.handle_app_event(definition(after)).is_some());
    }

    #[test]
    fn suggestions_are_kept_for_picks_until_hidden() {
        let mut popup = Popup::default();
        popup.handle_app_event(AppEvent::UiEvent(UiEvent::Show));
        assert!(popup.is_visible());

        popup.handle_app_event(AppEvent::ShowSuggestions {
            prefix: "ap".to_string(),
            words: words(&["apple", "apt"]),
        });
        assert_eq!(
            parse_command("#2", popup.suggestions()),
            Some(Command::Define("apt".to_string()))
        );

        popup.handle_app_event(AppEvent::UiEvent(UiEvent::Hide));
        assert!(!popup.is_visible());
        assert!(popup.suggestions().is_empty());
    }

    #[test]
    fn repeated_show_prints_prompt_once() {
        let mut popup = Popup::default();
        assert!(popup.handle_app_event(AppEvent::UiEvent(UiEvent::Show)).is_some());
        assert!(popup.handle_app_event(AppEvent::UiEvent(UiEvent::Show)).is_none());
    }
}
