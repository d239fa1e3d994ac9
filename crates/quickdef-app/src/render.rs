use std::fmt::Write;

use quickdef_types::DisplayResult;

/// Text card for one definition, numbered per part of speech
pub fn render_definition(result: &DisplayResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "QUICK DEFINITION ({})", result.source.as_str());
    let _ = writeln!(out, "{}", result.word);
    if let Some(phonetic) = &result.phonetic {
        let _ = writeln!(out, "{}", phonetic);
    }

    for meaning in &result.meanings {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", meaning.part_of_speech);
        let _ = writeln!(out, "{}", "-".repeat(meaning.part_of_speech.chars().count()));

        for (i, definition) in meaning.definitions.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {}", i + 1, definition.text);
            for example in &definition.examples {
                let _ = writeln!(out, "     \"{}\"", example);
            }
        }
    }

    out
}

pub fn render_suggestions(prefix: &str, words: &[String]) -> String {
    if words.is_empty() {
        return format!("No suggestions for '{}'\n", prefix);
    }

    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        let _ = writeln!(out, "  #{} {}", i + 1, word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickdef_types::{DisplayDefinition, DisplayMeaning, Source};

    #[test]
    fn definition_card_layout() {
        let result = DisplayResult {
            word: "Serendipity".to_string(),
            phonetic: Some("/ˌsɛɹ.ənˈdɪp.ɪ.ti/".to_string()),
            source: Source::Online,
            meanings: vec![DisplayMeaning {
                part_of_speech: "Noun".to_string(),
                definitions: vec![
                    DisplayDefinition {
                        text: "A lucky discovery".to_string(),
                        examples: vec!["It was pure serendipity".to_string()],
                    },
                    DisplayDefinition {
                        text: "Good luck".to_string(),
                        examples: vec![],
                    },
                ],
            }],
        };

        let card = render_definition(&result);
        let lines: Vec<&str> = card.lines().collect();

        assert_eq!(lines[0], "QUICK DEFINITION (online)");
        assert_eq!(lines[1], "Serendipity");
        assert_eq!(lines[2], "/ˌsɛɹ.ənˈdɪp.ɪ.ti/");
        assert_eq!(lines[4], "Noun");
        assert_eq!(lines[6], "  1. A lucky discovery");
        assert_eq!(lines[7], "     \"It was pure serendipity\"");
        assert_eq!(lines[8], "  2. Good luck");
    }

    #[test]
    fn local_card_without_phonetic() {
        let result = DisplayResult {
            word: "Cat".to_string(),
            phonetic: None,
            source: Source::Local,
            meanings: vec![],
        };

        assert_eq!(render_definition(&result), "QUICK DEFINITION (offline)\nCat\n");
    }

    #[test]
    fn suggestions_are_numbered() {
        let words = vec!["apple".to_string(), "apply".to_string()];
        assert_eq!(render_suggestions("ap", &words), "  #1 apple\n  #2 apply\n");
        assert_eq!(render_suggestions("zz", &[]), "No suggestions for 'zz'\n");
    }
}
