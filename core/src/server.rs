use crate::config::SearchConfig;
use crate::document::{average_rating, Document, DocumentData, DocumentStatus};
use crate::error::Result;
use crate::index::{InvertedIndex, Postings};
use crate::query::Query;
use crate::rank::{idf, sort_and_truncate};
use crate::store::DocumentStore;
use crate::tokenizer::{tokenize_no_stop, StopWords};
use crate::{DocId, Rating};
use std::collections::BTreeMap;

/// Matched plus-words (sorted) and the document's status.
pub type MatchResult = (Vec<String>, DocumentStatus);

/// In-memory TF-IDF search over short documents.
#[derive(Debug, Default)]
pub struct SearchServer {
    config: SearchConfig,
    stop_words: StopWords,
    index: InvertedIndex,
    documents: DocumentStore,
}

impl SearchServer {
    pub fn new() -> Self { Self::default() }

    pub fn with_config(config: SearchConfig) -> Self {
        Self { config, ..Self::default() }
    }

    pub fn with_stop_words(stop_words: &str) -> Self {
        Self { stop_words: StopWords::parse(stop_words), ..Self::default() }
    }

    pub fn config(&self) -> &SearchConfig { &self.config }

    /// Add whitespace-separated stop words. Documents indexed earlier keep their
    /// entries, but queries stop matching the new stop words immediately.
    pub fn set_stop_words(&mut self, stop_words: &str) {
        self.stop_words.extend_from(stop_words);
    }

    pub fn add_document(&mut self, id: DocId, content: &str, status: DocumentStatus, ratings: &[Rating]) -> Result<()> {
        let words = tokenize_no_stop(content, &self.stop_words);
        let data = DocumentData { status, rating: average_rating(ratings), word_count: words.len() };
        if let Err(err) = self.documents.insert(id, data) {
            tracing::debug!(id, "rejected duplicate document");
            return Err(err);
        }
        self.index.insert(id, &words);
        tracing::debug!(id, word_count = data.word_count, %status, rating = data.rating, "indexed document");
        Ok(())
    }

    pub fn document_count(&self) -> usize { self.documents.len() }

    /// Ids in insertion order.
    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ { self.documents.ids() }

    pub fn word_count_of(&self, id: DocId) -> Result<usize> {
        Ok(self.documents.get(id)?.word_count)
    }

    pub fn status_of(&self, id: DocId) -> Result<DocumentStatus> {
        Ok(self.documents.get(id)?.status)
    }

    pub fn rating_of(&self, id: DocId) -> Result<Rating> {
        Ok(self.documents.get(id)?.rating)
    }

    pub fn word_frequencies(&self, id: DocId) -> Result<BTreeMap<&str, f64>> {
        self.documents.get(id)?;
        Ok(self.index.word_frequencies(id))
    }

    /// Document -> TF for `word`; empty if the word was never indexed.
    pub fn documents_containing(&self, word: &str) -> Postings {
        self.index.documents_containing(word).cloned().unwrap_or_default()
    }

    /// Top hits among `Actual` documents.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.find_top_documents_with_status(raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_with_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.find_top_documents_by(raw_query, |_, doc_status, _| doc_status == status)
    }

    /// Top hits among documents accepted by `predicate(id, status, rating)`.
    pub fn find_top_documents_by<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, Rating) -> bool,
    {
        let query = Query::parse(raw_query, &self.stop_words)?;
        let mut hits = self.find_all_documents(&query, predicate);
        let candidates = hits.len();
        sort_and_truncate(&mut hits, self.config.relevance_epsilon, self.config.max_result_document_count);
        tracing::trace!(query = raw_query, candidates, hits = hits.len(), "ranked query");
        Ok(hits)
    }

    fn find_all_documents<P>(&self, query: &Query, predicate: P) -> Vec<Document>
    where
        P: Fn(DocId, DocumentStatus, Rating) -> bool,
    {
        if query.plus_words.is_empty() {
            return Vec::new();
        }
        let total = self.documents.len();
        let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();
        for word in &query.plus_words {
            let Some(postings) = self.index.documents_containing(word) else { continue };
            let word_idf = idf(total, postings.len());
            for (&id, &tf) in postings {
                *relevance.entry(id).or_insert(0.0) += word_idf * tf;
            }
        }
        for word in &query.minus_words {
            if let Some(postings) = self.index.documents_containing(word) {
                for id in postings.keys() {
                    relevance.remove(id);
                }
            }
        }
        relevance
            .into_iter()
            .filter_map(|(id, relevance)| {
                let data = self.documents.get(id).ok()?;
                predicate(id, data.status, data.rating).then_some(Document { id, relevance, rating: data.rating })
            })
            .collect()
    }

    /// Plus-words of `raw_query` present in document `id`; empty if any minus-word is.
    pub fn match_document(&self, raw_query: &str, id: DocId) -> Result<MatchResult> {
        let status = self.documents.get(id)?.status;
        let query = Query::parse(raw_query, &self.stop_words)?;
        if query.minus_words.iter().any(|word| self.index.contains(word, id)) {
            return Ok((Vec::new(), status));
        }
        let matched = query
            .plus_words
            .into_iter()
            .filter(|word| self.index.contains(word, id))
            .collect();
        Ok((matched, status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SearchError;

    fn server() -> SearchServer {
        let mut server = SearchServer::with_stop_words("in the");
        server.add_document(0, "black cat in the city", DocumentStatus::Actual, &[1, 2, 3]).unwrap();
        server.add_document(1, "black dog in the car", DocumentStatus::Banned, &[4, 5, 6]).unwrap();
        server
    }

    #[test]
    fn lookups_report_metadata() {
        let s = server();
        assert_eq!(s.word_count_of(0), Ok(3));
        assert_eq!(s.status_of(1), Ok(DocumentStatus::Banned));
        assert_eq!(s.rating_of(1), Ok(5));
        assert_eq!(s.rating_of(9), Err(SearchError::UnknownId(9)));
        assert_eq!(s.document_ids().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn documents_containing_unindexed_word_is_empty() {
        let s = server();
        assert!(s.documents_containing("in").is_empty());
        assert_eq!(s.documents_containing("black").len(), 2);
    }

    #[test]
    fn word_frequencies_of_document() {
        let s = server();
        let freqs = s.word_frequencies(0).unwrap();
        assert_eq!(freqs.keys().copied().collect::<Vec<_>>(), vec!["black", "cat", "city"]);
        assert!(s.word_frequencies(5).is_err());
    }

    #[test]
    fn duplicate_id_does_not_reindex() {
        let mut s = server();
        let err = s.add_document(0, "parrot", DocumentStatus::Actual, &[]);
        assert_eq!(err, Err(SearchError::DuplicateId(0)));
        assert!(s.documents_containing("parrot").is_empty());
        assert_eq!(s.document_count(), 2);
    }

    #[test]
    fn config_limits_results() {
        let mut s = SearchServer::with_config(SearchConfig { max_result_document_count: 1, ..SearchConfig::default() });
        s.add_document(0, "cat", DocumentStatus::Actual, &[]).unwrap();
        s.add_document(1, "cat dog", DocumentStatus::Actual, &[]).unwrap();
        assert_eq!(s.find_top_documents("cat dog").unwrap().len(), 1);
    }
}
