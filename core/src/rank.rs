use crate::document::Document;
use std::cmp::Ordering;

/// Inverse document frequency: ln(total / containing).
pub fn idf(total_documents: usize, containing: usize) -> f64 {
    (total_documents as f64 / containing as f64).ln()
}

/// Order hits by relevance descending, then keep at most `limit`.
///
/// Hits whose relevance stays within `epsilon` of the first hit of their run are
/// treated as tied and ordered by rating descending. Grouping runs after a total
/// sort keeps the comparator a strict order.
pub fn sort_and_truncate(hits: &mut Vec<Document>, epsilon: f64, limit: usize) {
    hits.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));
    let mut start = 0;
    while start < hits.len() {
        let head = hits[start].relevance;
        let end = hits[start + 1..]
            .iter()
            .position(|d| (head - d.relevance).abs() >= epsilon)
            .map_or(hits.len(), |offset| start + 1 + offset);
        hits[start..end].sort_by(|a, b| by_rating_desc(a, b));
        start = end;
    }
    hits.truncate(limit);
}

fn by_rating_desc(a: &Document, b: &Document) -> Ordering {
    b.rating.cmp(&a.rating)
}
