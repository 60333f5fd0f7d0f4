// Unicode word-boundary segmenter — the default tokenizer backend.
//
// Splits on UAX #29 word boundaries via the unicode-segmentation crate,
// which handles scripts without spaces (CJK) as well as Latin text.
// Boundary pieces with no alphanumeric content (punctuation, whitespace
// runs) are dropped so they never reach the counter.

use std::collections::HashSet;

use anyhow::Result;
use stop_words::{get, LANGUAGE};
use unicode_segmentation::UnicodeSegmentation;

use super::traits::Segmenter;

/// Tokenizer over Unicode word boundaries, with optional stop-word
/// removal.
#[derive(Default)]
pub struct UnicodeSegmenter {
    /// Lowercased stop words to drop, when configured.
    stop_words: Option<HashSet<String>>,
}

impl UnicodeSegmenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segmenter that also drops stop words for `language`.
    ///
    /// Stop-word removal changes the counts, so it is opt-in; the raw
    /// corpus frequencies are the default.
    pub fn with_stop_words(language: &str) -> Result<Self> {
        let words: Vec<String> = get(stop_word_language(language)?);
        Ok(Self {
            stop_words: Some(words.into_iter().collect()),
        })
    }
}

impl Segmenter for UnicodeSegmenter {
    fn segment_line(&self, line: &str) -> Vec<String> {
        line.split_word_bounds()
            .filter(|piece| piece.chars().any(char::is_alphanumeric))
            .filter(|piece| match &self.stop_words {
                Some(stop) => !stop.contains(&piece.to_lowercase()),
                None => true,
            })
            .map(str::to_owned)
            .collect()
    }
}

fn stop_word_language(name: &str) -> Result<LANGUAGE> {
    match name.to_ascii_lowercase().as_str() {
        "english" | "en" => Ok(LANGUAGE::English),
        "chinese" | "zh" => Ok(LANGUAGE::Chinese),
        "german" | "de" => Ok(LANGUAGE::German),
        "french" | "fr" => Ok(LANGUAGE::French),
        "spanish" | "es" => Ok(LANGUAGE::Spanish),
        other => anyhow::bail!(
            "unsupported stop-word language {other:?} \
             (try english, chinese, german, french, or spanish)"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_latin_text() {
        let segmenter = UnicodeSegmenter::new();
        assert_eq!(
            segmenter.segment_line("The quick brown fox."),
            vec!["The", "quick", "brown", "fox"]
        );
    }

    #[test]
    fn test_drops_punctuation_and_whitespace() {
        let segmenter = UnicodeSegmenter::new();
        assert_eq!(segmenter.segment_line("--- ?! ..."), Vec::<String>::new());
        assert_eq!(segmenter.segment_line(""), Vec::<String>::new());
    }

    #[test]
    fn test_splits_cjk_without_spaces() {
        let segmenter = UnicodeSegmenter::new();
        let tokens = segmenter.segment_line("今天天气不错");
        assert!(!tokens.is_empty());
        // Every character survives somewhere; nothing is silently lost.
        assert_eq!(tokens.concat(), "今天天气不错");
    }

    #[test]
    fn test_keeps_numbers() {
        let segmenter = UnicodeSegmenter::new();
        assert_eq!(
            segmenter.segment_line("version 2 of 3"),
            vec!["version", "2", "of", "3"]
        );
    }

    #[test]
    fn test_stop_words_removed_case_insensitively() {
        let segmenter = UnicodeSegmenter::with_stop_words("english").unwrap();
        let tokens = segmenter.segment_line("The shibboleth of THE tribe");
        assert_eq!(tokens, vec!["shibboleth", "tribe"]);
    }

    #[test]
    fn test_unknown_stop_word_language_is_an_error() {
        assert!(UnicodeSegmenter::with_stop_words("klingon").is_err());
    }
}
