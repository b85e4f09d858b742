//! Response dispatching.
//!
//! [`Responder`] ties the pieces together: intent matching first, then a
//! summary lookup on the cleaned query, then fixed fallbacks. Every branch
//! terminates the call; nothing is retried and nothing can escape as an
//! error, so the conversation loop never has to recover from a reply.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;

use crate::error::{PalaverError, Result};
use crate::intent::{IntentMatcher, IntentTable};
use crate::knowledge::{LookupOutcome, SummaryProvider};
use crate::query::QueryCleaner;

/// Cleaned queries of this many characters or fewer skip the lookup.
const MIN_QUERY_LEN: usize = 3;

/// How many candidate subjects an ambiguous lookup lists.
const MAX_AMBIGUOUS_OPTIONS: usize = 3;

const NO_INFORMATION_REPLY: &str =
    "I couldn't find information on that. Can you rephrase or ask something else?";

const FALLBACK_REPLY: &str = "I am not sure how to respond to that. Could you rephrase?";

/// Dispatches user input to a reply.
///
/// Reply selection among a matched intent's candidates is uniformly
/// random; the random source is injectable so tests can pin it down. That
/// selection is the only non-determinism in the dispatcher.
pub struct Responder {
    table: IntentTable,
    matcher: IntentMatcher,
    cleaner: QueryCleaner,
    provider: Box<dyn SummaryProvider>,
    rng: StdRng,
}

impl Responder {
    /// Create a responder with an OS-seeded random source.
    pub fn new(table: IntentTable, provider: Box<dyn SummaryProvider>) -> Result<Self> {
        Self::with_rng(table, provider, StdRng::from_os_rng())
    }

    /// Create a responder with an explicit random source.
    pub fn with_rng(
        table: IntentTable,
        provider: Box<dyn SummaryProvider>,
        rng: StdRng,
    ) -> Result<Self> {
        let matcher = IntentMatcher::new(&table)?;

        Ok(Responder {
            table,
            matcher,
            cleaner: QueryCleaner::new(),
            provider,
            rng,
        })
    }

    /// Produce a reply for one line of user input.
    pub fn respond(&mut self, user_input: &str) -> String {
        match self.matcher.match_intent(user_input) {
            Ok(Some(category)) => {
                let reply = self
                    .table
                    .replies(category)
                    .and_then(|replies| replies.choose(&mut self.rng));
                if let Some(reply) = reply {
                    return reply.clone();
                }
            }
            Ok(None) => {}
            Err(e) => log::warn!("intent matching failed: {e}"),
        }

        let query = match self.cleaner.clean(user_input) {
            Ok(query) => query,
            Err(e) => {
                log::warn!("query cleaning failed: {e}");
                String::new()
            }
        };
        log::debug!("cleaned query {query:?} from input {user_input:?}");

        if query.len() > MIN_QUERY_LEN {
            log::info!("looking up summary for {query:?}");
            match self.provider.fetch_summary(&query) {
                Ok(LookupOutcome::Summary(text)) if !text.trim().is_empty() => return text,
                Ok(LookupOutcome::Summary(_)) => return NO_INFORMATION_REPLY.to_string(),
                Ok(LookupOutcome::Ambiguous(options)) => return ambiguous_reply(&options),
                Ok(LookupOutcome::NotFound) => return not_found_reply(&query),
                Err(e) => {
                    log::warn!("summary lookup for {query:?} failed: {e}");
                    return lookup_error_reply(&e);
                }
            }
        } else {
            log::debug!("query {query:?} too short after cleaning, skipping lookup");
        }

        FALLBACK_REPLY.to_string()
    }
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Responder")
            .field("matcher", &self.matcher)
            .finish()
    }
}

fn ambiguous_reply(options: &[String]) -> String {
    let shown = options
        .iter()
        .take(MAX_AMBIGUOUS_OPTIONS)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Your query is a bit ambiguous. Did you mean one of these: {shown}? \
         Please try to be more specific."
    )
}

fn not_found_reply(query: &str) -> String {
    format!("I couldn't find anything about '{query}'. Please try another query.")
}

fn lookup_error_reply(error: &PalaverError) -> String {
    format!("An error occurred while looking that up: {error}")
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::intent::table;

    /// Provider that returns a fixed outcome and records the queries it saw.
    struct ScriptedProvider {
        outcome: fn() -> Result<LookupOutcome>,
        queries: Arc<Mutex<Vec<String>>>,
    }

    impl ScriptedProvider {
        fn new(outcome: fn() -> Result<LookupOutcome>) -> Self {
            ScriptedProvider {
                outcome,
                queries: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    impl SummaryProvider for ScriptedProvider {
        fn fetch_summary(&self, query: &str) -> Result<LookupOutcome> {
            self.queries.lock().unwrap().push(query.to_string());
            (self.outcome)()
        }
    }

    fn responder(outcome: fn() -> Result<LookupOutcome>) -> Responder {
        Responder::with_rng(
            table::builtin().unwrap(),
            Box::new(ScriptedProvider::new(outcome)),
            StdRng::seed_from_u64(7),
        )
        .unwrap()
    }

    fn never_called() -> Result<LookupOutcome> {
        panic!("provider must not be called");
    }

    #[test]
    fn test_intent_match_returns_category_reply() {
        let mut responder = responder(never_called);
        let table = table::builtin().unwrap();
        let greeting_replies = table.replies("responses").unwrap();

        let reply = responder.respond("hello there");
        assert!(greeting_replies.contains(&reply));
    }

    #[test]
    fn test_summary_returned_verbatim() {
        let mut responder = responder(|| {
            Ok(LookupOutcome::Summary(
                "Paris is the capital of France. It is on the Seine.".to_string(),
            ))
        });

        assert_eq!(
            responder.respond("what is the capital of France"),
            "Paris is the capital of France. It is on the Seine."
        );
    }

    #[test]
    fn test_empty_summary_yields_no_information_reply() {
        let mut responder = responder(|| Ok(LookupOutcome::Summary(String::new())));

        assert_eq!(responder.respond("some obscure subject"), NO_INFORMATION_REPLY);
    }

    #[test]
    fn test_ambiguous_lists_three_options() {
        let mut responder = responder(|| {
            Ok(LookupOutcome::Ambiguous(vec![
                "Mercury (planet)".to_string(),
                "Mercury (element)".to_string(),
                "Freddie Mercury".to_string(),
                "Mercury Records".to_string(),
            ]))
        });

        let reply = responder.respond("mercury facts");
        assert!(reply.contains("Mercury (planet), Mercury (element), Freddie Mercury"));
        assert!(!reply.contains("Mercury Records"));
        assert!(reply.contains("more specific"));
    }

    #[test]
    fn test_not_found_names_the_query() {
        let mut responder = responder(|| Ok(LookupOutcome::NotFound));

        let reply = responder.respond("what is zzzzqqq");
        assert!(reply.contains("couldn't find anything about 'zzzzqqq'"));
    }

    #[test]
    fn test_lookup_error_is_recovered() {
        let mut responder = responder(|| Err(PalaverError::lookup("connection reset")));

        let reply = responder.respond("what is the capital of France");
        assert!(reply.contains("An error occurred"));
    }

    #[test]
    fn test_short_query_skips_lookup() {
        // Cleaned query "xx" is under the length gate; the panicking
        // provider proves no lookup happens.
        let mut responder = responder(never_called);

        assert_eq!(responder.respond("xx"), FALLBACK_REPLY);
    }

    #[test]
    fn test_stop_word_only_input_skips_lookup() {
        let mut responder = responder(never_called);

        assert_eq!(responder.respond("what is the"), FALLBACK_REPLY);
    }

    #[test]
    fn test_provider_receives_cleaned_query() {
        let provider = ScriptedProvider::new(|| Ok(LookupOutcome::NotFound));
        let queries = provider.queries.clone();
        let mut responder = Responder::with_rng(
            table::builtin().unwrap(),
            Box::new(provider),
            StdRng::seed_from_u64(7),
        )
        .unwrap();

        responder.respond("What is the capital of France?");

        assert_eq!(queries.lock().unwrap().as_slice(), ["capital france"]);
    }
}
