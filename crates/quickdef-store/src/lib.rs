pub mod frequency;
pub mod loader;
pub mod store;
pub mod wordnet;

pub use frequency::FrequencyList;
pub use loader::{StoreError, StoreLoader};
pub use store::{LoadStats, WordStore};
