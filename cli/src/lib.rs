use anyhow::{Context, Result};
use search_core::{DocId, Document, DocumentStatus, MatchResult, Rating, SearchConfig, SearchServer};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct InputDoc {
    pub id: DocId,
    pub content: String,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub ratings: Vec<Rating>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub total_docs: usize,
    pub results: Vec<Document>,
}

#[derive(Serialize)]
pub struct MatchResponse {
    pub query: String,
    pub id: DocId,
    pub words: Vec<String>,
    pub status: DocumentStatus,
}

impl MatchResponse {
    pub fn new(query: &str, id: DocId, (words, status): MatchResult) -> Self {
        Self { query: query.to_string(), id, words, status }
    }
}

pub fn load_config(path: Option<&Path>, max_results: Option<usize>) -> Result<SearchConfig> {
    let mut config = match path {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
            serde_json::from_reader(BufReader::new(f)).with_context(|| format!("parsing config {}", path.display()))?
        }
        None => SearchConfig::default(),
    };
    if let Some(n) = max_results {
        config.max_result_document_count = n;
    }
    Ok(config)
}

/// Read documents from a `.jsonl` file (one per line) or a `.json` file holding one
/// document or an array of them.
pub fn load_documents(path: &Path) -> Result<Vec<InputDoc>> {
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = BufReader::new(f);
    let mut docs = Vec::new();
    if path.extension().and_then(|s| s.to_str()) == Some("jsonl") {
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() { continue; }
            let doc: InputDoc = serde_json::from_str(&line)
                .with_context(|| format!("{}:{}: invalid document", path.display(), lineno + 1))?;
            docs.push(doc);
        }
        return Ok(docs);
    }
    let json: serde_json::Value = serde_json::from_reader(reader).with_context(|| format!("parsing {}", path.display()))?;
    match json {
        serde_json::Value::Array(arr) => {
            for v in arr {
                docs.push(serde_json::from_value(v)?);
            }
        }
        serde_json::Value::Object(_) => docs.push(serde_json::from_value(json)?),
        _ => anyhow::bail!("{}: expected a document object or array", path.display()),
    }
    Ok(docs)
}

pub fn build_server(config: SearchConfig, stop_words: &str, docs: Vec<InputDoc>) -> Result<SearchServer> {
    let mut server = SearchServer::with_config(config);
    server.set_stop_words(stop_words);
    for doc in docs {
        server
            .add_document(doc.id, &doc.content, doc.status, &doc.ratings)
            .with_context(|| format!("adding document {}", doc.id))?;
    }
    tracing::info!(num_docs = server.document_count(), "loaded documents");
    Ok(server)
}

pub fn search(server: &SearchServer, query: &str, status: Option<DocumentStatus>, min_rating: Option<Rating>) -> Result<SearchResponse> {
    let results = match (status, min_rating) {
        (None, None) => server.find_top_documents(query)?,
        (Some(status), None) => server.find_top_documents_with_status(query, status)?,
        (status, Some(min)) => {
            let wanted = status.unwrap_or_default();
            server.find_top_documents_by(query, |_, s, rating| s == wanted && rating >= min)?
        }
    };
    Ok(SearchResponse { query: query.to_string(), total_docs: server.document_count(), results })
}
