//! Error types for the search engine.

use crate::DocId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A document with this id was already added.
    #[error("document {0} already exists")]
    DuplicateId(DocId),

    /// No document with this id.
    #[error("document {0} not found")]
    UnknownId(DocId),

    /// Malformed minus-word, such as a lone `-` or a `--` prefix.
    #[error("invalid query word: {word:?}")]
    InvalidQuery { word: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offender() {
        assert_eq!(SearchError::DuplicateId(42).to_string(), "document 42 already exists");
        assert_eq!(SearchError::UnknownId(7).to_string(), "document 7 not found");
        let msg = SearchError::InvalidQuery { word: "--cat".into() }.to_string();
        assert!(msg.contains("--cat"));
    }
}
