/// Word frequency data used to rank suggestions
pub trait FrequencyProvider: Send + Sync {
    /// Get frequency rank (lower = more common), None if not in list
    fn frequency(&self, word: &str) -> Option<u32>;
}
