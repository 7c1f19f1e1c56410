use crate::document::DocumentData;
use crate::error::{Result, SearchError};
use crate::DocId;
use std::collections::HashMap;

/// Document metadata keyed by id, remembering insertion order.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: HashMap<DocId, DocumentData>,
    order: Vec<DocId>,
}

impl DocumentStore {
    pub fn new() -> Self { Self::default() }

    /// Fails with `DuplicateId` before touching anything.
    pub fn insert(&mut self, id: DocId, data: DocumentData) -> Result<()> {
        if self.documents.contains_key(&id) {
            return Err(SearchError::DuplicateId(id));
        }
        self.documents.insert(id, data);
        self.order.push(id);
        Ok(())
    }

    pub fn contains(&self, id: DocId) -> bool { self.documents.contains_key(&id) }

    pub fn get(&self, id: DocId) -> Result<&DocumentData> {
        self.documents.get(&id).ok_or(SearchError::UnknownId(id))
    }

    pub fn len(&self) -> usize { self.order.len() }

    pub fn is_empty(&self) -> bool { self.order.is_empty() }

    /// Ids in the order they were added.
    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.order.iter().copied()
    }
}
