//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words)
//! before user input becomes a search query. The default list covers the
//! question scaffolding of conversational English ("what is the ...",
//! "tell me about ..."), so the remaining tokens are the actual subject.
//!
//! # Examples
//!
//! ```
//! use palaver::analysis::token_filter::Filter;
//! use palaver::analysis::token_filter::stop::StopFilter;
//! use palaver::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Uses the default query stop words
//! let tokens = vec![
//!     Token::new("what", 0),
//!     Token::new("is", 1),
//!     Token::new("rust", 2),
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // Only the subject remains
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "rust");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default query stop words list.
///
/// Question scaffolding and glue words that carry no search subject.
const DEFAULT_QUERY_STOP_WORDS: &[&str] = &[
    "what", "is", "the", "of", "a", "an", "are", "do", "does", "did", "who", "where", "when",
    "why", "how", "tell", "me", "about", "can", "you", "give", "information", "on", "be", "to",
    "and", "in", "it", "for", "this", "that", "i", "am", "your", "my",
];

/// Default query stop words as a HashSet.
pub static DEFAULT_QUERY_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_QUERY_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// The comparison is exact, so this filter is meant to run after
/// [`LowercaseFilter`](crate::analysis::token_filter::LowercaseFilter).
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default query stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use palaver::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("the"));
    /// assert!(!filter.is_stop_word("hello"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_QUERY_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use palaver::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
