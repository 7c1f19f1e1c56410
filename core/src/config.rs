use serde::Deserialize;

fn default_max_results() -> usize { 5 }
fn default_epsilon() -> f64 { 1e-6 }

/// Ranking knobs. Missing fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct SearchConfig {
    /// Upper bound on hits returned by one query.
    #[serde(default = "default_max_results")]
    pub max_result_document_count: usize,
    /// Relevances closer than this are ordered by rating instead.
    #[serde(default = "default_epsilon")]
    pub relevance_epsilon: f64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_result_document_count: default_max_results(), relevance_epsilon: default_epsilon() }
    }
}
