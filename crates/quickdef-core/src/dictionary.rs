use quickdef_types::Entry;

/// Read-only local word store. Keys are normalized words.
pub trait Dictionary: Send + Sync {
    /// Search dictionary by exact (normalized) key
    fn lookup_exact(&self, key: &str) -> Option<&Entry>;

    /// All keys starting with `prefix`, in ascending order
    fn keys_with_prefix<'a>(&'a self, prefix: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub entry_count: usize,
}
