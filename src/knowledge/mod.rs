//! Summary lookup against an external knowledge service.
//!
//! The [`SummaryProvider`] trait is the seam between the response
//! dispatcher and the outside world; [`WikipediaClient`] is the production
//! implementation. Lookup results are a closed set of outcomes so the
//! dispatcher's branching is exhaustive:
//!
//! - [`LookupOutcome::Summary`] — a short text excerpt, returned verbatim
//! - [`LookupOutcome::Ambiguous`] — several candidate subjects
//! - [`LookupOutcome::NotFound`] — no matching subject
//!
//! Transport and decoding failures surface as errors and are rendered as a
//! generic error reply; they never terminate the conversation loop.

pub mod wikipedia;

pub use wikipedia::WikipediaClient;

use crate::error::Result;

/// Outcome of a summary lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A short summary of the best-matching subject.
    Summary(String),
    /// The query matched several distinct subjects; candidates listed.
    Ambiguous(Vec<String>),
    /// No matching subject exists.
    NotFound,
}

/// Trait for services that resolve a plain-text query to a short summary.
pub trait SummaryProvider: Send + Sync {
    /// Look up a query and return its outcome.
    fn fetch_summary(&self, query: &str) -> Result<LookupOutcome>;
}
