use std::collections::BTreeMap;

pub type DocId = u32;
pub type Rating = i32;

/// Term frequencies of one word, keyed by document.
pub type Postings = BTreeMap<DocId, f64>;

/// Word -> document -> TF. Only words actually present in a document get an entry,
/// so every stored TF lies in (0, 1].
#[derive(Debug, Default)]
pub struct InvertedIndex {
    postings: BTreeMap<String, Postings>,
    forward: BTreeMap<DocId, BTreeMap<String, f64>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    /// Index the already-filtered `words` of a new document. The caller guarantees
    /// `doc_id` has not been indexed before.
    pub fn insert(&mut self, doc_id: DocId, words: &[String]) {
        if words.is_empty() {
            return;
        }
        let inv_word_count = 1.0 / words.len() as f64;
        let doc_words = self.forward.entry(doc_id).or_default();
        for word in words {
            *self.postings.entry(word.clone()).or_default().entry(doc_id).or_insert(0.0) += inv_word_count;
            *doc_words.entry(word.clone()).or_insert(0.0) += inv_word_count;
        }
    }

    pub fn documents_containing(&self, word: &str) -> Option<&Postings> {
        self.postings.get(word)
    }

    /// Number of documents containing `word`.
    pub fn document_frequency(&self, word: &str) -> usize {
        self.postings.get(word).map_or(0, |p| p.len())
    }

    pub fn contains(&self, word: &str, doc_id: DocId) -> bool {
        self.forward.get(&doc_id).is_some_and(|words| words.contains_key(word))
    }

    /// Indexed words of one document with their TF; empty for unindexed documents.
    pub fn word_frequencies(&self, doc_id: DocId) -> BTreeMap<&str, f64> {
        self.forward
            .get(&doc_id)
            .map(|words| words.iter().map(|(w, tf)| (w.as_str(), *tf)).collect())
            .unwrap_or_default()
    }

    pub fn num_words(&self) -> usize { self.postings.len() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(text: &str) -> Vec<String> {
        text.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn term_frequency_is_share_of_word_count() {
        let mut idx = InvertedIndex::new();
        idx.insert(7, &words("cat city cat dog"));
        let cat = idx.documents_containing("cat").unwrap();
        assert!((cat[&7] - 0.5).abs() < 1e-12);
        assert!((idx.documents_containing("dog").unwrap()[&7] - 0.25).abs() < 1e-12);
        assert!(idx.documents_containing("bird").is_none());
    }

    #[test]
    fn document_frequency_counts_documents_not_occurrences() {
        let mut idx = InvertedIndex::new();
        idx.insert(1, &words("cat cat"));
        idx.insert(2, &words("cat dog"));
        assert_eq!(idx.document_frequency("cat"), 2);
        assert_eq!(idx.document_frequency("dog"), 1);
        assert_eq!(idx.document_frequency("bird"), 0);
        assert_eq!(idx.num_words(), 2);
    }

    #[test]
    fn empty_document_has_no_entries() {
        let mut idx = InvertedIndex::new();
        idx.insert(3, &[]);
        assert_eq!(idx.num_words(), 0);
        assert!(idx.word_frequencies(3).is_empty());
        assert!(!idx.contains("cat", 3));
    }
}
