//! Intent tables and stemmed bag-of-words intent matching.
//!
//! An [`IntentTable`] holds the conversational data: named intent
//! categories with their trigger phrases, named response categories with
//! their candidate replies, and the one-to-one mapping between them. The
//! table is built once at startup, validated, and never mutated.

pub mod matcher;
pub mod table;

pub use matcher::IntentMatcher;

use std::collections::HashMap;

use crate::error::{PalaverError, Result};

/// A named intent category: its trigger phrases and the response category
/// replies are drawn from when it matches.
#[derive(Debug, Clone)]
pub struct Intent {
    /// Category identifier, e.g. "greetings".
    pub name: String,
    /// Trigger phrases, tried in order.
    pub patterns: Vec<String>,
    /// Name of the response category replies come from.
    pub response_category: String,
}

impl Intent {
    /// Create a new intent category.
    pub fn new<S: Into<String>>(name: S, patterns: Vec<S>, response_category: S) -> Self {
        Intent {
            name: name.into(),
            patterns: patterns.into_iter().map(|p| p.into()).collect(),
            response_category: response_category.into(),
        }
    }
}

/// The complete, validated intent/response configuration.
///
/// Intent categories keep their declaration order; matching iterates them
/// in that order and the first match wins.
#[derive(Debug, Clone)]
pub struct IntentTable {
    intents: Vec<Intent>,
    responses: HashMap<String, Vec<String>>,
}

impl IntentTable {
    /// Build a table from intents and response categories, validating the
    /// cross-references.
    ///
    /// Validation failures are configuration errors and abort startup:
    /// - an intent references a response category that does not exist or
    ///   has no replies;
    /// - a trigger phrase is empty or blank (it would match every input).
    pub fn new(intents: Vec<Intent>, responses: HashMap<String, Vec<String>>) -> Result<Self> {
        let table = IntentTable { intents, responses };
        table.validate()?;
        Ok(table)
    }

    fn validate(&self) -> Result<()> {
        for intent in &self.intents {
            match self.responses.get(&intent.response_category) {
                None => {
                    return Err(PalaverError::config(format!(
                        "intent '{}' references unknown response category '{}'",
                        intent.name, intent.response_category
                    )));
                }
                Some(replies) if replies.is_empty() => {
                    return Err(PalaverError::config(format!(
                        "response category '{}' has no replies",
                        intent.response_category
                    )));
                }
                Some(_) => {}
            }

            for pattern in &intent.patterns {
                if pattern.trim().is_empty() {
                    return Err(PalaverError::config(format!(
                        "intent '{}' contains an empty trigger phrase",
                        intent.name
                    )));
                }
            }
        }

        Ok(())
    }

    /// Get the intent categories in declaration order.
    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }

    /// Get the replies of a response category.
    pub fn replies(&self, category: &str) -> Option<&[String]> {
        self.responses.get(category).map(|r| r.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn responses(category: &str, replies: &[&str]) -> HashMap<String, Vec<String>> {
        let mut map = HashMap::new();
        map.insert(
            category.to_string(),
            replies.iter().map(|r| r.to_string()).collect(),
        );
        map
    }

    #[test]
    fn test_valid_table() {
        let table = IntentTable::new(
            vec![Intent::new("greetings", vec!["hello"], "responses")],
            responses("responses", &["Hello!"]),
        )
        .unwrap();

        assert_eq!(table.intents().len(), 1);
        assert_eq!(table.replies("responses"), Some(&["Hello!".to_string()][..]));
        assert_eq!(table.replies("missing"), None);
    }

    #[test]
    fn test_unknown_response_category_rejected() {
        let result = IntentTable::new(
            vec![Intent::new("greetings", vec!["hello"], "responses")],
            HashMap::new(),
        );

        match result {
            Err(PalaverError::Config(msg)) => assert!(msg.contains("unknown response category")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_response_category_rejected() {
        let result = IntentTable::new(
            vec![Intent::new("greetings", vec!["hello"], "responses")],
            responses("responses", &[]),
        );

        match result {
            Err(PalaverError::Config(msg)) => assert!(msg.contains("no replies")),
            other => panic!("expected config error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_trigger_phrase_rejected() {
        let result = IntentTable::new(
            vec![Intent::new("greetings", vec!["hello", "  "], "responses")],
            responses("responses", &["Hello!"]),
        );

        match result {
            Err(PalaverError::Config(msg)) => assert!(msg.contains("empty trigger phrase")),
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
