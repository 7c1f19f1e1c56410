use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref RE: Regex = Regex::new(r"\S+").expect("valid regex");
}

/// Split text into lowercase words on runs of whitespace.
pub fn tokenize(text: &str) -> Vec<String> {
    RE.find_iter(text).map(|m| m.as_str().to_lowercase()).collect()
}

/// Tokenize and drop every word that belongs to `stop_words`.
pub fn tokenize_no_stop(text: &str, stop_words: &StopWords) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|word| !stop_words.contains(word))
        .collect()
}

/// Set of lowercase words excluded from indexing and querying.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    pub fn new() -> Self { Self::default() }

    /// Build from a whitespace-separated list.
    pub fn parse(text: &str) -> Self {
        let mut stop_words = Self::new();
        stop_words.extend_from(text);
        stop_words
    }

    /// Add every whitespace-separated word of `text`; existing entries are kept.
    pub fn extend_from(&mut self, text: &str) {
        self.words.extend(tokenize(text));
    }

    pub fn contains(&self, word: &str) -> bool { self.words.contains(word) }

    pub fn len(&self) -> usize { self.words.len() }

    pub fn is_empty(&self) -> bool { self.words.is_empty() }
}
