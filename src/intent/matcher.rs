//! Stemmed bag-of-words intent matching.

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stem::StemFilter;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::{PalaverError, Result};
use crate::intent::IntentTable;

/// A trigger phrase with its precomputed stem set.
#[derive(Debug, Clone)]
struct CompiledPattern {
    phrase: String,
    stems: HashSet<String>,
}

/// An intent category with its compiled trigger phrases.
#[derive(Debug, Clone)]
struct CompiledIntent {
    name: String,
    response_category: String,
    patterns: Vec<CompiledPattern>,
}

/// Matches user input against intent trigger phrases.
///
/// Input and trigger phrases are run through the same pipeline (tokenize,
/// lowercase, Porter stem). A phrase matches when every one of its stems
/// appears somewhere in the input's stems: the test is unordered
/// set-containment, so surrounding words and word order are irrelevant.
/// Categories are tried in table order and the first match wins.
///
/// A one-word trigger phrase therefore matches any input mentioning that
/// word anywhere, even mid-sentence. Tables are curated with that in mind.
pub struct IntentMatcher {
    analyzer: PipelineAnalyzer,
    intents: Vec<CompiledIntent>,
}

impl IntentMatcher {
    /// Compile a matcher from an intent table.
    ///
    /// Trigger phrase stems are precomputed here; a phrase whose stems come
    /// out empty is rejected as a configuration error, since an empty stem
    /// set would match every input.
    pub fn new(table: &IntentTable) -> Result<Self> {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StemFilter::new()))
            .with_name("intent".to_string());

        let mut intents = Vec::with_capacity(table.intents().len());
        for intent in table.intents() {
            let mut patterns = Vec::with_capacity(intent.patterns.len());
            for phrase in &intent.patterns {
                let stems: HashSet<String> =
                    analyzer.analyze(phrase)?.map(|token| token.text).collect();
                if stems.is_empty() {
                    return Err(PalaverError::config(format!(
                        "trigger phrase {:?} of intent '{}' produces no stems",
                        phrase, intent.name
                    )));
                }
                patterns.push(CompiledPattern {
                    phrase: phrase.clone(),
                    stems,
                });
            }
            intents.push(CompiledIntent {
                name: intent.name.clone(),
                response_category: intent.response_category.clone(),
                patterns,
            });
        }

        Ok(IntentMatcher { analyzer, intents })
    }

    /// Tokenize and stem a sentence.
    pub fn preprocess(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyzer.analyze(text)?.map(|token| token.text).collect())
    }

    /// Match user input against the trigger phrases.
    ///
    /// Returns the response category name of the first matching intent, or
    /// `None` when nothing matches.
    pub fn match_intent(&self, user_input: &str) -> Result<Option<&str>> {
        let input_stems: HashSet<String> = self.preprocess(user_input)?.into_iter().collect();
        log::debug!("processed input stems: {input_stems:?}");

        for intent in &self.intents {
            for pattern in &intent.patterns {
                if pattern.stems.iter().all(|stem| input_stems.contains(stem)) {
                    log::debug!(
                        "matched intent '{}' with pattern {:?}",
                        intent.name,
                        pattern.phrase
                    );
                    return Ok(Some(intent.response_category.as_str()));
                }
            }
        }

        Ok(None)
    }
}

impl std::fmt::Debug for IntentMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentMatcher")
            .field(
                "intents",
                &self.intents.iter().map(|i| &i.name).collect::<Vec<_>>(),
            )
            .finish()
    }
}
