pub mod dictionary;
pub mod display;
pub mod error;
pub mod frequency;
pub mod lookup;
pub mod preprocess;
pub mod suggest;

#[cfg(test)]
pub(crate) mod testutil;

pub use dictionary::{Dictionary, DictionaryMetadata};
pub use error::LookupError;
pub use frequency::FrequencyProvider;
pub use lookup::LookupService;
pub use preprocess::normalize;
pub use suggest::SuggestionProvider;
