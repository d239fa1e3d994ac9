use std::collections::BTreeMap;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use quickdef_core::dictionary::{Dictionary, DictionaryMetadata};
use quickdef_core::normalize;
use quickdef_types::Entry;

use crate::loader::StoreError;

/// Counters reported after reading a store file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines accepted (duplicates included)
    pub accepted: usize,
    /// Corrupt or empty-keyed lines
    pub skipped: usize,
}

/// In-memory word store keyed by normalized word
#[derive(Debug)]
pub struct WordStore {
    name: String,
    entries: BTreeMap<String, Entry>,
}

impl WordStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: BTreeMap::new(),
        }
    }

    /// Read JSON Lines. Unparsable lines are skipped, I/O errors are not.
    pub fn from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<(Self, LoadStats), io::Error> {
        let mut store = Self::new(name);
        let mut stats = LoadStats::default();

        for (line_no, line) in reader.split(b'\n').enumerate() {
            let line = line?;
            if line.iter().all(u8::is_ascii_whitespace) {
                continue;
            }

            match serde_json::from_slice::<Entry>(&line) {
                Ok(entry) if store.insert(entry.clone()) => stats.accepted += 1,
                Ok(_) => {
                    tracing::warn!(
                        "{}:{}: entry has an empty word or no definitions",
                        store.name,
                        line_no + 1
                    );
                    stats.skipped += 1;
                }
                Err(e) => {
                    tracing::warn!("{}:{}: skipping corrupt entry: {}", store.name, line_no + 1, e);
                    stats.skipped += 1;
                }
            }
        }

        Ok((store, stats))
    }

    /// Add an entry, appending its senses if the word is already present.
    /// Senses with blank definitions are dropped. Returns false when the word
    /// normalizes to nothing or no sense is left.
    pub fn insert(&mut self, mut entry: Entry) -> bool {
        let key = normalize(&entry.word);
        entry.senses.retain(|s| !s.definition.trim().is_empty());
        if key.is_empty() || entry.senses.is_empty() {
            return false;
        }

        match self.entries.get_mut(&key) {
            Some(existing) => existing.senses.extend(entry.senses),
            None => {
                self.entries.insert(key, entry);
            }
        }
        true
    }

    /// Merge another store into this one
    pub fn merge(mut self, other: WordStore) -> Self {
        for entry in other.entries.into_values() {
            self.insert(entry);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One JSON object per line, in key order
    pub fn write_jsonl<W: Write>(&self, writer: W) -> Result<(), StoreError> {
        let mut writer = BufWriter::new(writer);
        for entry in self.entries.values() {
            serde_json::to_writer(&mut writer, entry)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write to `path` through a temporary file in the same directory
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let dir = match path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };

        let mut file = tempfile::NamedTempFile::new_in(dir)?;
        self.write_jsonl(file.as_file_mut())?;
        file.persist(path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl Dictionary for WordStore {
    fn lookup_exact(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    fn keys_with_prefix<'a>(&'a self, prefix: &'a str) -> Box<dyn Iterator<Item = &'a str> + 'a> {
        Box::new(
            self.entries
                .range::<str, _>((std::ops::Bound::Included(prefix), std::ops::Bound::Unbounded))
                .map(|(key, _)| key.as_str())
                .take_while(move |key| key.starts_with(prefix)),
        )
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: self.name.clone(),
            entry_count: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use quickdef_types::Sense;

    use super::*;

    const SAMPLE: &str = r#"{"word":"apple","senses":[{"pos":"n","definition":"fruit with red or yellow or green skin","examples":["an apple a day"]}]}
{"word":"Apply","senses":[{"pos":"v","definition":"put into service"}]}

{"word":"apt","senses":[{"pos":"s","definition":"at risk of"}]}
{"word":"banana","senses":[{"pos":"n","definition":"elongated crescent-shaped yellow fruit"}]}
"#;

    fn sample() -> WordStore {
        let (store, stats) = WordStore::from_reader("sample", Cursor::new(SAMPLE)).unwrap();
        assert_eq!(stats, LoadStats { accepted: 4, skipped: 0 });
        store
    }

    #[test]
    fn keys_are_normalized() {
        let store = sample();

        assert_eq!(store.len(), 4);
        let apply = store.lookup_exact("apply").unwrap();
        assert_eq!(apply.word, "Apply");
        assert!(store.lookup_exact("Apply").is_none());
    }

    #[test]
    fn prefix_scan_is_sorted_and_bounded() {
        let store = sample();

        let keys: Vec<&str> = store.keys_with_prefix("ap").collect();
        assert_eq!(keys, vec!["apple", "apply", "apt"]);

        let keys: Vec<&str> = store.keys_with_prefix("b").collect();
        assert_eq!(keys, vec!["banana"]);

        assert_eq!(store.keys_with_prefix("c").count(), 0);
    }

    #[test]
    fn corrupt_lines_are_skipped() {
        let data = concat!(
            r#"{"word":"cat","senses":[{"pos":"n","definition":"feline"}]}"#,
            "\n{\"word\": truncated\n",
            r#"{"word":"   ","senses":[]}"#,
            "\n\u{0}\u{1}garbage\n",
            r#"{"word":"dog","senses":[{"pos":"n","definition":"canine"}]}"#,
        );

        let (store, stats) = WordStore::from_reader("mixed", Cursor::new(data)).unwrap();

        assert_eq!(stats, LoadStats { accepted: 2, skipped: 3 });
        assert!(store.lookup_exact("cat").is_some());
        assert!(store.lookup_exact("dog").is_some());
    }

    #[test]
    fn invalid_utf8_line_is_skipped() {
        let mut data = br#"{"word":"cat","senses":[{"pos":"n","definition":"feline"}]}"#.to_vec();
        data.extend_from_slice(b"\n\xff\xfe{}\n");

        let (store, stats) = WordStore::from_reader("bytes", Cursor::new(data)).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(stats.skipped, 1);
    }

    #[test]
    fn entries_without_definitions_are_skipped() {
        let data = concat!(
            r#"{"word":"cat","senses":[]}"#,
            "\n",
            r#"{"word":"dog","senses":[{"pos":"n","definition":"   "}]}"#,
            "\n",
            r#"{"word":"owl","senses":[{"pos":"n","definition":""},{"pos":"n","definition":"night bird"}]}"#,
        );

        let (store, stats) = WordStore::from_reader("empty", Cursor::new(data)).unwrap();

        assert_eq!(stats, LoadStats { accepted: 1, skipped: 2 });
        assert!(store.lookup_exact("cat").is_none());
        assert!(store.lookup_exact("dog").is_none());
        assert_eq!(store.lookup_exact("owl").unwrap().definitions(), vec!["night bird"]);
    }

    #[test]
    fn duplicate_words_merge_senses() {
        let mut store = WordStore::new("dups");
        assert!(store.insert(Entry::new("bank", vec![Sense::new("n", "sloping land")])));
        assert!(store.insert(Entry::new("Bank", vec![Sense::new("n", "financial institution")])));
        assert!(!store.insert(Entry::new("  ", vec![])));

        let bank = store.lookup_exact("bank").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(
            bank.definitions(),
            vec!["sloping land".to_string(), "financial institution".to_string()]
        );
    }

    #[test]
    fn save_then_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.jsonl");

        sample().save(&path).unwrap();

        let file = std::fs::File::open(&path).unwrap();
        let (reloaded, stats) =
            WordStore::from_reader("reloaded", io::BufReader::new(file)).unwrap();

        assert_eq!(stats.skipped, 0);
        assert_eq!(reloaded.len(), 4);
        assert_eq!(
            reloaded.lookup_exact("apple").unwrap().senses[0].examples,
            vec!["an apple a day"]
        );
    }

    #[test]
    fn merge_appends_into_existing_words() {
        let mut extra = WordStore::new("extra");
        extra.insert(Entry::new("apple", vec![Sense::new("n", "a tech company")]));
        extra.insert(Entry::new("cherry", vec![Sense::new("n", "a red fruit")]));

        let merged = sample().merge(extra);

        assert_eq!(merged.len(), 5);
        assert_eq!(merged.lookup_exact("apple").unwrap().senses.len(), 2);
        assert_eq!(merged.metadata().name, "sample");
    }
}
