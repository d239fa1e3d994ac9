use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default lookup-key normalization
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC), then case folding
        let folded = text.nfkc().collect::<String>().to_lowercase();

        // Inner whitespace runs (including newlines) become one space
        folded.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

/// Lookup key for a word or prefix
pub fn normalize(text: &str) -> String {
    DefaultPreprocessor.process(text)
}
