//! The built-in intent and response tables.
//!
//! The data lives here as constants compiled into the binary; [`builtin`]
//! assembles and validates them once at startup.

use std::collections::HashMap;

use crate::error::Result;
use crate::intent::{Intent, IntentTable};

const GREETING_PATTERNS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "hi there",
    "good morning",
    "good afternoon",
    "good evening",
];

const GREETING_REPLIES: &[&str] = &[
    "Hello! How can I help you today?",
    "Hi there! What would you like to know?",
    "Hey! Ask me anything.",
    "Hello! Nice to chat with you.",
];

const FAREWELL_PATTERNS: &[&str] = &[
    "bye",
    "goodbye",
    "see you",
    "see you later",
    "take care",
    "good night",
];

const FAREWELL_REPLIES: &[&str] = &[
    "Goodbye! Have a great day!",
    "See you later!",
    "Bye! Come back any time.",
    "Take care!",
];

const SMALL_TALK_PATTERNS: &[&str] = &[
    "how are you",
    "what is your name",
    "who are you",
    "what can you do",
    "thank you",
    "thanks",
];

const SMALL_TALK_REPLIES: &[&str] = &[
    "I'm doing well, thank you for asking!",
    "I'm a small chatbot. Ask me a general knowledge question!",
    "All good here. What would you like to know?",
    "Happy to help! Try asking me about something.",
];

/// Build the built-in intent table.
///
/// Categories are matched in declaration order: greetings, farewells,
/// small talk.
pub fn builtin() -> Result<IntentTable> {
    let intents = vec![
        intent("greetings", GREETING_PATTERNS, "responses"),
        intent("farewells", FAREWELL_PATTERNS, "farewell_responses"),
        intent("small_talk", SMALL_TALK_PATTERNS, "small_talk_responses"),
    ];

    let mut responses = HashMap::new();
    responses.insert("responses".to_string(), owned(GREETING_REPLIES));
    responses.insert("farewell_responses".to_string(), owned(FAREWELL_REPLIES));
    responses.insert("small_talk_responses".to_string(), owned(SMALL_TALK_REPLIES));

    IntentTable::new(intents, responses)
}

fn intent(name: &str, patterns: &[&str], response_category: &str) -> Intent {
    Intent {
        name: name.to_string(),
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
        response_category: response_category.to_string(),
    }
}

fn owned(replies: &[&str]) -> Vec<String> {
    replies.iter().map(|r| r.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let table = builtin().unwrap();

        assert_eq!(table.intents().len(), 3);
        assert_eq!(table.intents()[0].name, "greetings");
        assert_eq!(table.intents()[1].name, "farewells");
        assert_eq!(table.intents()[2].name, "small_talk");
    }

    #[test]
    fn test_builtin_response_categories_are_populated() {
        let table = builtin().unwrap();

        for intent in table.intents() {
            let replies = table.replies(&intent.response_category).unwrap();
            assert!(!replies.is_empty(), "{} has no replies", intent.name);
        }
    }
}
