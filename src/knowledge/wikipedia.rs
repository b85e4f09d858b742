//! Wikipedia-backed summary provider.
//!
//! Talks to the MediaWiki Action API over HTTPS using a blocking client.
//! A lookup is two requests: a full-text search that resolves the query to
//! candidate page titles, then an intro-extract fetch for the top title.
//! Disambiguation pages are reported as [`LookupOutcome::Ambiguous`] with
//! the remaining search candidates as the options.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use unicode_segmentation::UnicodeSegmentation;

use crate::error::Result;
use crate::knowledge::{LookupOutcome, SummaryProvider};

/// Default MediaWiki Action API endpoint (English Wikipedia).
pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// How many sentences of the intro extract are returned.
const SUMMARY_SENTENCES: usize = 2;

/// How many search hits to request; hits beyond the first become the
/// candidate list when the top hit is a disambiguation page.
const SEARCH_LIMIT: usize = 5;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    search: Vec<SearchHit>,
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    extract: Option<String>,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    pageprops: Option<PageProps>,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    // Present (as an empty string) on disambiguation pages
    #[serde(default)]
    disambiguation: Option<String>,
}

/// Summary provider backed by the MediaWiki Action API.
///
/// # Examples
///
/// ```no_run
/// use palaver::knowledge::{SummaryProvider, WikipediaClient};
///
/// let client = WikipediaClient::english().unwrap();
/// let outcome = client.fetch_summary("capital france").unwrap();
/// println!("{outcome:?}");
/// ```
pub struct WikipediaClient {
    endpoint: String,
    client: Client,
}

impl WikipediaClient {
    /// Create a client against a custom MediaWiki API endpoint.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("palaver/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(WikipediaClient {
            endpoint: endpoint.into(),
            client,
        })
    }

    /// Create a client against English Wikipedia.
    pub fn english() -> Result<Self> {
        Self::new(DEFAULT_ENDPOINT)
    }

    /// Get the endpoint this client queries.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn get(&self, params: &[(&str, &str)]) -> Result<ApiResponse> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(params)
            .send()?
            .error_for_status()?;

        Ok(response.json()?)
    }

    /// Resolve a query to candidate page titles, best match first.
    fn search_titles(&self, query: &str) -> Result<Vec<String>> {
        let limit = SEARCH_LIMIT.to_string();
        let body = self.get(&[
            ("action", "query"),
            ("list", "search"),
            ("srsearch", query),
            ("srlimit", &limit),
            ("format", "json"),
            ("formatversion", "2"),
        ])?;

        Ok(body
            .query
            .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default())
    }

    /// Fetch the intro extract and disambiguation marker of a page.
    fn fetch_page(&self, title: &str) -> Result<Option<Page>> {
        let body = self.get(&[
            ("action", "query"),
            ("prop", "extracts|pageprops"),
            ("ppprop", "disambiguation"),
            ("exintro", "1"),
            ("explaintext", "1"),
            ("redirects", "1"),
            ("titles", title),
            ("format", "json"),
            ("formatversion", "2"),
        ])?;

        Ok(body.query.and_then(|q| q.pages.into_iter().next()))
    }
}

impl SummaryProvider for WikipediaClient {
    fn fetch_summary(&self, query: &str) -> Result<LookupOutcome> {
        let titles = self.search_titles(query)?;
        let top = match titles.first() {
            Some(top) => top.clone(),
            None => return Ok(LookupOutcome::NotFound),
        };

        let page = match self.fetch_page(&top)? {
            Some(page) if !page.missing => page,
            _ => return Ok(LookupOutcome::NotFound),
        };

        if page
            .pageprops
            .as_ref()
            .is_some_and(|props| props.disambiguation.is_some())
        {
            let options: Vec<String> = titles.into_iter().skip(1).collect();
            if options.is_empty() {
                return Ok(LookupOutcome::NotFound);
            }
            return Ok(LookupOutcome::Ambiguous(options));
        }

        let extract = page.extract.unwrap_or_default();
        Ok(LookupOutcome::Summary(leading_sentences(
            &extract,
            SUMMARY_SENTENCES,
        )))
    }
}

/// Truncate text to its first `count` sentences (UAX #29 boundaries).
fn leading_sentences(text: &str, count: usize) -> String {
    let mut out = String::new();
    for (taken, sentence) in text.split_sentence_bounds().enumerate() {
        if taken == count {
            break;
        }
        out.push_str(sentence);
    }
    out.trim_end().to_string()
}
