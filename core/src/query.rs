use crate::error::{Result, SearchError};
use crate::tokenizer::{tokenize, StopWords};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pub plus_words: BTreeSet<String>,
    pub minus_words: BTreeSet<String>,
}

impl Query {
    /// Parse a raw query. `-word` marks a minus-word; stop words are dropped from
    /// both sets. A lone `-` or a `--` prefix is rejected.
    pub fn parse(raw: &str, stop_words: &StopWords) -> Result<Self> {
        let mut query = Query::default();
        for token in tokenize(raw) {
            let (word, is_minus) = match token.strip_prefix('-') {
                Some(rest) => {
                    if rest.is_empty() || rest.starts_with('-') {
                        tracing::debug!(word = %token, "rejected minus-word");
                        return Err(SearchError::InvalidQuery { word: token });
                    }
                    (rest.to_string(), true)
                }
                None => (token, false),
            };
            if stop_words.contains(&word) {
                continue;
            }
            if is_minus {
                query.minus_words.insert(word);
            } else {
                query.plus_words.insert(word);
            }
        }
        Ok(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn splits_plus_and_minus_words() {
        let q = Query::parse("cat -dog city cat", &StopWords::new()).unwrap();
        assert_eq!(q.plus_words, set(&["cat", "city"]));
        assert_eq!(q.minus_words, set(&["dog"]));
    }

    #[test]
    fn stop_words_leave_both_sets() {
        let q = Query::parse("cat in -the", &StopWords::parse("in the")).unwrap();
        assert_eq!(q.plus_words, set(&["cat"]));
        assert!(q.minus_words.is_empty());
    }

    #[test]
    fn same_word_may_be_plus_and_minus() {
        let q = Query::parse("cat -cat", &StopWords::new()).unwrap();
        assert!(q.plus_words.contains("cat"));
        assert!(q.minus_words.contains("cat"));
    }

    #[test]
    fn malformed_minus_words_are_errors() {
        let stop = StopWords::new();
        assert_eq!(
            Query::parse("cat -", &stop),
            Err(SearchError::InvalidQuery { word: "-".into() })
        );
        assert_eq!(
            Query::parse("--cat", &stop),
            Err(SearchError::InvalidQuery { word: "--cat".into() })
        );
    }

    #[test]
    fn inner_dash_is_plain_word() {
        let q = Query::parse("well-known", &StopWords::new()).unwrap();
        assert_eq!(q.plus_words, set(&["well-known"]));
    }
}
