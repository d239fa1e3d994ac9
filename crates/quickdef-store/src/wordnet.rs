//! Reader for the plain-text WordNet 3.x database (`data.*` and `index.*`).
//!
//! Each synset contributes one sense to every lemma it lists. Senses of a
//! lemma are ordered by part of speech, then by the sense rank found in the
//! matching `index.*` file (most frequent first).

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::Path;

use quickdef_core::normalize;
use quickdef_types::{Entry, Sense};

use crate::loader::StoreError;
use crate::store::WordStore;

/// Lemmas longer than this are phrases, not words worth defining
const MAX_LEMMA_LEN: usize = 50;

/// Database files in output order. `data.adj` holds both `a` and `s` synsets.
const FILES: [&str; 4] = ["noun", "verb", "adj", "adv"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Synset {
    pub offset: u64,
    /// `n`, `v`, `a`, `s` or `r`
    pub pos: char,
    pub lemmas: Vec<String>,
    pub definition: String,
    pub examples: Vec<String>,
}

impl Synset {
    pub fn id(&self) -> String {
        format!("{:08}-{}", self.offset, self.pos)
    }
}

fn pos_order(pos: char) -> u8 {
    match pos {
        'n' => 0,
        'v' => 1,
        'a' => 2,
        's' => 3,
        'r' => 4,
        _ => 5,
    }
}

/// Parse one `data.*` line. License header lines (leading spaces) and
/// malformed lines yield `None`.
pub fn parse_data_line(line: &str) -> Option<Synset> {
    if line.starts_with(' ') {
        return None;
    }

    let (head, gloss) = line.split_once(" | ").unwrap_or((line, ""));
    let fields: Vec<&str> = head.split_whitespace().collect();

    let offset = fields.first()?.parse().ok()?;
    let pos = fields.get(2)?.chars().next()?;
    let word_count = usize::from_str_radix(fields.get(3)?, 16).ok()?;

    let lemmas = (0..word_count)
        .map(|i| fields.get(4 + i * 2).copied())
        .collect::<Option<Vec<&str>>>()?
        .into_iter()
        .map(str::to_string)
        .collect();

    let (definition, examples) = parse_gloss(gloss);

    Some(Synset {
        offset,
        pos,
        lemmas,
        definition,
        examples,
    })
}

/// Split a gloss into its definition and quoted examples:
/// `a member of the genus Canis; "the dog barked all night"`
pub fn parse_gloss(gloss: &str) -> (String, Vec<String>) {
    let gloss = gloss.trim();

    let (definition, rest) = match gloss.find('"') {
        Some(i) => gloss.split_at(i),
        None => (gloss, ""),
    };

    let definition = definition.trim().trim_end_matches(';').trim().to_string();

    // odd segments sit between a pair of quotes
    let examples = rest
        .split('"')
        .skip(1)
        .step_by(2)
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect();

    (definition, examples)
}

/// Parse one `index.*` line into its lemma and synset offsets, most
/// frequent sense first.
pub fn parse_index_line(line: &str) -> Option<(String, Vec<u64>)> {
    if line.starts_with(' ') {
        return None;
    }

    let fields: Vec<&str> = line.split_whitespace().collect();
    let lemma = fields.first()?.to_string();
    let synset_count: usize = fields.get(2)?.parse().ok()?;
    let pointer_count: usize = fields.get(3)?.parse().ok()?;

    // lemma pos synset_cnt p_cnt [ptr...] sense_cnt tagsense_cnt offsets...
    let start = 4 + pointer_count + 2;
    let offsets = fields
        .get(start..start + synset_count)?
        .iter()
        .map(|o| o.parse().ok())
        .collect::<Option<Vec<u64>>>()?;

    Some((lemma, offsets))
}

/// Display form of a raw lemma, or `None` if it should not be stored
pub fn clean_lemma(raw: &str) -> Option<String> {
    // adjective position markers: `long(a)`, `galore(ip)`
    let raw = match raw.find('(') {
        Some(i) if raw.ends_with(')') => &raw[..i],
        _ => raw,
    };

    if raw.is_empty() || raw.chars().count() > MAX_LEMMA_LEN {
        return None;
    }

    Some(raw.replace('_', " "))
}

/// Sense rank per (file, lemma key, offset)
type RankIndex = HashMap<(&'static str, String, u64), usize>;

fn read_optional(path: &Path) -> Result<Option<String>, StoreError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StoreError::Open {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn read_ranks(file: &'static str, content: &str, ranks: &mut RankIndex) {
    for (lemma, offsets) in content.lines().filter_map(parse_index_line) {
        let key = normalize(&lemma.replace('_', " "));
        for (rank, offset) in offsets.into_iter().enumerate() {
            ranks.insert((file, key.clone(), offset), rank);
        }
    }
}

struct RankedSense {
    pos_order: u8,
    rank: usize,
    seq: usize,
    sense: Sense,
}

/// Build a word store from a WordNet `dict/` directory
pub fn build_store(dir: &Path) -> Result<WordStore, StoreError> {
    let mut ranks = RankIndex::new();
    let mut words: BTreeMap<String, (String, Vec<RankedSense>)> = BTreeMap::new();
    let mut files_read = 0;
    let mut seq = 0;

    for file in FILES {
        if let Some(index) = read_optional(&dir.join(format!("index.{file}")))? {
            read_ranks(file, &index, &mut ranks);
        }

        let data_path = dir.join(format!("data.{file}"));
        let Some(data) = read_optional(&data_path)? else {
            tracing::warn!("{} not found, skipping", data_path.display());
            continue;
        };
        files_read += 1;

        let mut synsets = 0;
        for synset in data.lines().filter_map(parse_data_line) {
            synsets += 1;
            for lemma in synset.lemmas.iter().filter_map(|l| clean_lemma(l)) {
                let key = normalize(&lemma);
                if key.is_empty() {
                    continue;
                }

                let rank = ranks
                    .get(&(file, key.clone(), synset.offset))
                    .copied()
                    .unwrap_or(usize::MAX);

                let sense = Sense {
                    part_of_speech: synset.pos.to_string(),
                    definition: synset.definition.clone(),
                    examples: synset.examples.clone(),
                    synset: Some(synset.id()),
                };

                words
                    .entry(key)
                    .or_insert_with(|| (lemma.clone(), Vec::new()))
                    .1
                    .push(RankedSense {
                        pos_order: pos_order(synset.pos),
                        rank,
                        seq,
                        sense,
                    });
                seq += 1;
            }
        }
        tracing::info!("Read {} synsets from {}", synsets, data_path.display());
    }

    if files_read == 0 {
        return Err(StoreError::NotFound(dir.join("data.noun")));
    }

    let mut store = WordStore::new("wordnet");
    for (_, (word, mut senses)) in words {
        senses.sort_by_key(|s| (s.pos_order, s.rank, s.seq));
        store.insert(Entry::new(word, senses.into_iter().map(|s| s.sense).collect()));
    }

    Ok(store)
}
