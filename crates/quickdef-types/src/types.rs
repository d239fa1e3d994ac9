use crate::entry::Source;

#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Submit a word for definition. The popup's `generation` is echoed on
    /// every reply so results from before a hide can be told apart.
    Lookup {
        word: String,
        generation: u64,
    },
    /// Request completions for a partial word
    Suggest(String),
    LookupStarted {
        word: String,
        generation: u64,
    },
    ShowDefinition {
        result: DisplayResult,
        generation: u64,
    },
    ShowSuggestions {
        prefix: String,
        words: Vec<String>,
    },
    ShowError {
        message: String,
        generation: u64,
    },
    BackendReady,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Hotkey pressed, open the popup
    Show,
    /// Popup dismissed, drop any pending result
    Hide,
    Close,
}

/// An entry grouped for presentation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayResult {
    pub word: String,
    pub phonetic: Option<String>,
    pub source: Source,
    pub meanings: Vec<DisplayMeaning>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMeaning {
    /// Full name, e.g. "Adjective Satellite"
    pub part_of_speech: String,
    pub definitions: Vec<DisplayDefinition>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDefinition {
    pub text: String,
    pub examples: Vec<String>,
}
