//! Suggestion fetching and reconciliation

use super::{Controller, SEARCH_ERROR_TEXT};
use crate::fetch::{FetchError, FetchRequest};
use crate::query::{normalize, same_word};

impl Controller {
    /// Issue a prefix search for `raw`
    ///
    /// An empty prefix clears the list without touching the network.
    pub(super) fn fetch_suggestions(&mut self, raw: &str) {
        let query = normalize(raw);
        if query.is_empty() {
            self.suggestions.clear();
            if self.is_sequenced() {
                self.pending_search = None;
            }
            return;
        }

        self.search_request_id = self.search_request_id.wrapping_add(1);
        let request_id = self.search_request_id;

        if self.is_sequenced() {
            self.pending_search = Some(request_id);
            self.deleted_this_cycle.clear();
        } else {
            self.loading = true;
        }

        log::debug!("search {} for {:?}", request_id, query);
        self.send_request(FetchRequest::Search { request_id, query });
    }

    /// Apply a search response; returns false if it was discarded as stale
    pub(super) fn apply_search(
        &mut self,
        request_id: u64,
        query: &str,
        result: Result<Vec<String>, FetchError>,
    ) -> bool {
        if self.is_sequenced() {
            if self.pending_search != Some(request_id) {
                log::debug!(
                    "discarding stale search {} for {:?}",
                    request_id,
                    query
                );
                return false;
            }
            self.pending_search = None;
        } else {
            self.loading = false;
        }

        match result {
            Ok(words) => {
                if self.is_sequenced() {
                    let deleted = &self.deleted_this_cycle;
                    self.suggestions = words
                        .into_iter()
                        .filter(|w| !deleted.iter().any(|d| same_word(w, d)))
                        .collect();
                    self.error = None;
                } else {
                    self.suggestions = words;
                }
            }
            Err(e) => {
                log::warn!(
                    "search {} for {:?} failed: {}",
                    request_id,
                    query,
                    e
                );
                self.error = Some(SEARCH_ERROR_TEXT.to_string());
            }
        }
        true
    }
}
