//! Query cleaning for external summary lookups.
//!
//! Unlike intent matching, no stemming is applied here: the external
//! search works better with full word forms, so cleaning only lowercases,
//! drops punctuation-bearing and stop-word tokens, and rejoins the rest.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::alphanumeric::AlphanumericFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// Turns raw user input into a plain-text search query.
///
/// Cleaning is idempotent: running a cleaned query through the cleaner
/// again returns it unchanged.
///
/// # Examples
///
/// ```
/// use palaver::query::QueryCleaner;
///
/// let cleaner = QueryCleaner::new();
/// let query = cleaner.clean("What is the capital of France?").unwrap();
///
/// assert_eq!(query, "capital france");
/// ```
pub struct QueryCleaner {
    analyzer: PipelineAnalyzer,
}

impl QueryCleaner {
    /// Create a cleaner with the default query stop words.
    pub fn new() -> Self {
        Self::with_stop_filter(StopFilter::new())
    }

    /// Create a cleaner with a custom stop-word set.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        Self::with_stop_filter(StopFilter::with_stop_words(stop_words))
    }

    fn with_stop_filter(stop_filter: StopFilter) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(AlphanumericFilter::new()))
            .add_filter(Arc::new(stop_filter))
            .with_name("query".to_string());

        QueryCleaner { analyzer }
    }

    /// Clean user input into a search query.
    ///
    /// Returns the empty string when every token is filtered out.
    pub fn clean(&self, user_input: &str) -> Result<String> {
        let words: Vec<String> = self
            .analyzer
            .analyze(user_input)?
            .map(|token| token.text)
            .collect();

        Ok(words.join(" "))
    }
}

impl Default for QueryCleaner {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for QueryCleaner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCleaner")
            .field("analyzer", &self.analyzer)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_drops_stop_words_and_punctuation() {
        let cleaner = QueryCleaner::new();

        assert_eq!(
            cleaner.clean("What is the capital of France?").unwrap(),
            "capital france"
        );
        assert_eq!(
            cleaner.clean("Tell me about the Eiffel Tower!").unwrap(),
            "eiffel tower"
        );
    }

    #[test]
    fn test_clean_preserves_word_order() {
        let cleaner = QueryCleaner::new();

        assert_eq!(
            cleaner.clean("history of the Roman Empire").unwrap(),
            "history roman empire"
        );
    }

    #[test]
    fn test_clean_no_stemming_applied() {
        let cleaner = QueryCleaner::new();

        assert_eq!(cleaner.clean("running shoes").unwrap(), "running shoes");
    }

    #[test]
    fn test_clean_can_return_empty() {
        let cleaner = QueryCleaner::new();

        assert_eq!(cleaner.clean("what is the").unwrap(), "");
        assert_eq!(cleaner.clean("?!").unwrap(), "");
        assert_eq!(cleaner.clean("").unwrap(), "");
    }

    #[test]
    fn test_clean_is_idempotent() {
        let cleaner = QueryCleaner::new();

        for input in [
            "What is the capital of France?",
            "running shoes",
            "Mercury",
            "who invented the telephone",
        ] {
            let once = cleaner.clean(input).unwrap();
            let twice = cleaner.clean(&once).unwrap();
            assert_eq!(once, twice);
        }
    }
}
