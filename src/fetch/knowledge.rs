//! Knowledge API client
//!
//! Looks up an encyclopedia article by title (MediaWiki `prop=extracts`)
//! and reduces its intro to a short summary.

use serde_json::Value;

use super::summary::summarize;
use super::{EnrichmentOutcome, FetchError, check_status};

/// Knowledge API client
#[derive(Debug, Clone)]
pub struct KnowledgeClient {
    http: reqwest::Client,
    api_url: String,
    max_words: usize,
}

impl KnowledgeClient {
    pub fn new(http: reqwest::Client, api_url: &str, max_words: usize) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
            max_words,
        }
    }

    /// Look up `title` and turn the result into what the side panel shows
    ///
    /// Never fails: transport and decoding problems become
    /// [`EnrichmentOutcome::Failed`].
    pub async fn lookup(&self, title: &str) -> EnrichmentOutcome {
        match self.fetch_extract(title).await {
            Ok(Some(extract)) => match summarize(&extract, self.max_words) {
                Some(summary) => EnrichmentOutcome::Summary(summary),
                None => EnrichmentOutcome::NotFound,
            },
            Ok(None) => EnrichmentOutcome::NotFound,
            Err(e) => {
                log::warn!("enrichment lookup for {:?} failed: {}", title, e);
                EnrichmentOutcome::Failed(e)
            }
        }
    }

    async fn fetch_extract(&self, title: &str) -> Result<Option<String>, FetchError> {
        let response = self
            .http
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("prop", "extracts"),
                ("exintro", "1"),
                ("titles", title),
            ])
            .send()
            .await
            .map_err(FetchError::from_reqwest)?;

        let body: Value = check_status(response)
            .await?
            .json()
            .await
            .map_err(FetchError::from_reqwest)?;

        first_page_extract(&body)
    }
}

/// Read the `extract` of the first page in a `query.pages` response
///
/// A body without `query.pages` is malformed. An empty page map, or a first
/// page without a string extract (for example `"missing": ""`), means there
/// is no article.
///
/// "First" follows JavaScript object key order: keys that are array indices
/// come first in ascending numeric order, then the remaining keys in the
/// order the server sent them. Missing titles use negative ids, so a reply
/// for `cat|zzqx` yields the cat article rather than the `-1` page.
pub fn first_page_extract(body: &Value) -> Result<Option<String>, FetchError> {
    let pages = body
        .get("query")
        .and_then(|q| q.get("pages"))
        .and_then(Value::as_object)
        .ok_or_else(|| FetchError::Parse("response has no query.pages object".to_string()))?;

    Ok(pages
        .iter()
        .min_by_key(|(key, _)| page_order(key))
        .and_then(|(_, page)| page.get("extract"))
        .and_then(Value::as_str)
        .map(str::to_string))
}

/// Sort key placing array-index keys (`"0"`, `"12"`, never `"012"` or
/// `"-1"`) before every other key
fn page_order(key: &str) -> (bool, u32) {
    match key.parse::<u32>() {
        Ok(index) if index != u32::MAX && index.to_string() == key => (false, index),
        _ => (true, 0),
    }
}

#[cfg(test)]
#[path = "knowledge_tests.rs"]
mod knowledge_tests;
