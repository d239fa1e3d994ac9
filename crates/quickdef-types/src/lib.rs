pub mod entry;
pub mod types;

pub use entry::{Entry, Sense, Source};
pub use types::*;
