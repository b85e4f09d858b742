//! Analyzer implementations that combine tokenizers and filters.

mod pipeline;

pub use pipeline::PipelineAnalyzer;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for complete text analysis pipelines.
///
/// An analyzer turns raw text into a stream of processed tokens:
///
/// ```text
/// Raw Text → Tokenizer → Filter 1 → ... → Filter N → Token Stream
/// ```
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
