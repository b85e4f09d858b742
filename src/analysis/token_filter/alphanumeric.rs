//! Alphanumeric filter implementation.
//!
//! This module provides a filter that drops tokens containing any
//! non-alphanumeric character. Search queries built from the remaining
//! tokens stay plain words: contractions like "what's" and stray symbol
//! runs are removed entirely rather than partially cleaned.
//!
//! # Examples
//!
//! ```
//! use palaver::analysis::token_filter::Filter;
//! use palaver::analysis::token_filter::alphanumeric::AlphanumericFilter;
//! use palaver::analysis::token::Token;
//!
//! let filter = AlphanumericFilter::new();
//! let tokens = vec![Token::new("what's", 0), Token::new("rust", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "rust");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that keeps only fully alphanumeric tokens.
///
/// A token passes when it is non-empty and every character is alphanumeric
/// in the Unicode sense, mirroring how word-level `isalnum` checks behave.
#[derive(Clone, Debug, Default)]
pub struct AlphanumericFilter;

impl AlphanumericFilter {
    /// Create a new alphanumeric filter.
    pub fn new() -> Self {
        AlphanumericFilter
    }

    /// Check whether a token text passes the filter.
    pub fn is_alphanumeric(text: &str) -> bool {
        !text.is_empty() && text.chars().all(char::is_alphanumeric)
    }
}

impl Filter for AlphanumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<_> = tokens
            .filter(|token| Self::is_alphanumeric(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "alphanumeric"
    }
}
