//! In-memory TF-IDF search over short text documents.
//!
//! Documents are tokenized on whitespace, stop words are dropped, and each word's
//! term frequency is recorded in an inverted index. Queries rank documents by the
//! sum of IDF * TF over their plus-words; any document containing a minus-word is
//! excluded outright.
//!
//! ```
//! use search_core::{DocumentStatus, SearchServer};
//!
//! let mut server = SearchServer::with_stop_words("in the");
//! server.add_document(0, "cat in the city", DocumentStatus::Actual, &[1, 2, 3]).unwrap();
//! server.add_document(1, "gray dog", DocumentStatus::Actual, &[]).unwrap();
//!
//! let hits = server.find_top_documents("dog -cat").unwrap();
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].id, 1);
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod index;
pub mod query;
pub mod rank;
pub mod server;
pub mod shared;
pub mod store;
pub mod tokenizer;

pub use config::SearchConfig;
pub use document::{Document, DocumentData, DocumentStatus};
pub use error::{Result, SearchError};
pub use index::{DocId, InvertedIndex, Rating};
pub use query::Query;
pub use server::{MatchResult, SearchServer};
pub use shared::SharedSearchServer;
