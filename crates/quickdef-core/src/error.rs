#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("No definition found for '{0}'")]
    NotFound(String),

    #[error("Nothing to look up")]
    EmptyQuery,
}
