//! # Palaver
//!
//! A small command-line conversational responder. User input is matched
//! against a table of predefined intents (greetings, farewells, small talk)
//! using stemmed bag-of-words matching; anything else is cleaned into a
//! plain-text query and answered with a short Wikipedia summary.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Composable text analysis pipeline (tokenizer + filters)
//! - Porter stemming for intent matching
//! - Pluggable summary providers
//! - Deterministic, testable reply selection

pub mod analysis;
pub mod cli;
pub mod error;
pub mod intent;
pub mod knowledge;
pub mod query;
pub mod repl;
pub mod responder;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
