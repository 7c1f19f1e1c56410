use crate::document::{Document, DocumentStatus};
use crate::error::Result;
use crate::server::{MatchResult, SearchServer};
use crate::{DocId, Rating};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to one `SearchServer`: many concurrent readers, one writer.
#[derive(Debug, Clone, Default)]
pub struct SharedSearchServer {
    inner: Arc<RwLock<SearchServer>>,
}

impl SharedSearchServer {
    pub fn new(server: SearchServer) -> Self {
        Self { inner: Arc::new(RwLock::new(server)) }
    }

    pub fn set_stop_words(&self, stop_words: &str) {
        self.inner.write().set_stop_words(stop_words);
    }

    pub fn add_document(&self, id: DocId, content: &str, status: DocumentStatus, ratings: &[Rating]) -> Result<()> {
        self.inner.write().add_document(id, content, status, ratings)
    }

    pub fn document_count(&self) -> usize {
        self.inner.read().document_count()
    }

    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<Document>> {
        self.inner.read().find_top_documents(raw_query)
    }

    pub fn find_top_documents_with_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<Document>> {
        self.inner.read().find_top_documents_with_status(raw_query, status)
    }

    pub fn find_top_documents_by<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<Document>>
    where
        P: Fn(DocId, DocumentStatus, Rating) -> bool,
    {
        self.inner.read().find_top_documents_by(raw_query, predicate)
    }

    pub fn match_document(&self, raw_query: &str, id: DocId) -> Result<MatchResult> {
        self.inner.read().match_document(raw_query, id)
    }

    /// Run `f` against the server under one read lock.
    pub fn read<R>(&self, f: impl FnOnce(&SearchServer) -> R) -> R {
        f(&self.inner.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn readers_see_writes_from_other_handles() {
        let shared = SharedSearchServer::default();
        let writer = shared.clone();
        thread::spawn(move || {
            for id in 0..10 {
                writer.add_document(id, "cat city", DocumentStatus::Actual, &[id as i32]).unwrap();
            }
        })
        .join()
        .unwrap();
        assert_eq!(shared.document_count(), 10);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let reader = shared.clone();
                thread::spawn(move || reader.find_top_documents("cat").unwrap().len())
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), 5);
        }
        assert_eq!(shared.read(|s| s.rating_of(9)), Ok(9));
    }
}
