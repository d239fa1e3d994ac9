use quickdef_types::{DisplayDefinition, DisplayMeaning, DisplayResult, Entry};

/// Convert part of speech abbreviation to full form
pub fn full_part_of_speech(pos: &str) -> String {
    match pos.to_lowercase().as_str() {
        "n" => "Noun".to_string(),
        "v" => "Verb".to_string(),
        "a" => "Adjective".to_string(),
        "s" => "Adjective Satellite".to_string(),
        "r" => "Adverb".to_string(),
        _ => capitalize(pos),
    }
}

pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Group senses by part of speech (first-appearance order) and merge
/// repeated definition texts, accumulating their distinct examples.
pub fn to_display_result(entry: &Entry) -> DisplayResult {
    let mut meanings: Vec<DisplayMeaning> = Vec::new();

    for sense in &entry.senses {
        let pos = full_part_of_speech(&sense.part_of_speech);

        let idx = match meanings.iter().position(|m| m.part_of_speech == pos) {
            Some(idx) => idx,
            None => {
                meanings.push(DisplayMeaning {
                    part_of_speech: pos,
                    definitions: Vec::new(),
                });
                meanings.len() - 1
            }
        };
        let definitions = &mut meanings[idx].definitions;

        let def = match definitions.iter().position(|d| d.text == sense.definition) {
            Some(i) => &mut definitions[i],
            None => {
                definitions.push(DisplayDefinition {
                    text: sense.definition.clone(),
                    examples: Vec::new(),
                });
                let last = definitions.len() - 1;
                &mut definitions[last]
            }
        };

        for example in &sense.examples {
            if !def.examples.contains(example) {
                def.examples.push(example.clone());
            }
        }
    }

    DisplayResult {
        word: capitalize(&entry.word),
        phonetic: entry.phonetic.clone(),
        source: entry.source,
        meanings,
    }
}
