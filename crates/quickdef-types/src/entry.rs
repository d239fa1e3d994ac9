use serde::{Deserialize, Serialize};

/// Where an entry was resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Source {
    #[default]
    Local,
    Online,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Local => "offline",
            Source::Online => "online",
        }
    }
}

/// One meaning of a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    /// WordNet abbreviation (`n`, `v`, `a`, `s`, `r`) or a full name like "noun"
    #[serde(rename = "pos", default)]
    pub part_of_speech: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synset: Option<String>,
}

impl Sense {
    pub fn new(part_of_speech: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            part_of_speech: part_of_speech.into(),
            definition: definition.into(),
            examples: Vec::new(),
            synset: None,
        }
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }
}

/// A word and its senses, ordered by relevance.
///
/// This is also the line format of the local store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub word: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    pub senses: Vec<Sense>,
    #[serde(skip)]
    pub source: Source,
}

impl Entry {
    pub fn new(word: impl Into<String>, senses: Vec<Sense>) -> Self {
        Self {
            word: word.into(),
            phonetic: None,
            senses,
            source: Source::Local,
        }
    }

    /// Definition texts in sense order
    pub fn definitions(&self) -> Vec<String> {
        self.senses.iter().map(|s| s.definition.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }
}
