//! User events and response dispatch

use super::Controller;
use crate::fetch::FetchResponse;

/// What one `poll_responses` call did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollSummary {
    pub applied: usize,
    pub discarded: usize,
}

impl PollSummary {
    pub fn changed(&self) -> bool {
        self.applied > 0
    }
}

impl Controller {
    /// The search box text changed
    ///
    /// Fires a search and a lookup for the new text at once. Nothing still
    /// in flight is cancelled.
    pub fn on_input(&mut self, text: &str) {
        self.query = text.to_string();
        self.selected = None;
        self.fetch_suggestions(text);
        self.fetch_enrichment(text);
    }

    /// A suggestion was picked: it becomes the query and only its
    /// enrichment is fetched
    pub fn on_suggestion_click(&mut self, suggestion: &str) {
        self.query = suggestion.to_string();
        self.selected = Some(suggestion.to_string());
        self.fetch_enrichment(suggestion);
    }

    /// Enter in the search box or an explicit submit
    ///
    /// Returns false when the query is blank and nothing was sent.
    pub fn on_submit(&mut self) -> bool {
        self.add_word()
    }

    pub fn on_delete_click(&mut self, suggestion: &str) {
        self.delete_word(suggestion);
    }

    /// Clear the error banner; returns false if there was none
    pub fn dismiss_error(&mut self) -> bool {
        self.error.take().is_some()
    }

    /// Apply every response the worker has delivered so far
    ///
    /// Called once per UI tick. Responses are applied in the order they
    /// completed.
    pub fn poll_responses(&mut self) -> PollSummary {
        let responses: Vec<FetchResponse> = match &self.response_rx {
            Some(rx) => rx.try_iter().collect(),
            None => return PollSummary::default(),
        };

        let mut summary = PollSummary::default();
        for response in responses {
            self.outstanding = self.outstanding.saturating_sub(1);
            if self.apply_response(response) {
                summary.applied += 1;
            } else {
                summary.discarded += 1;
            }
        }
        summary
    }

    /// Route a response to its component; returns false if it was stale
    pub(crate) fn apply_response(&mut self, response: FetchResponse) -> bool {
        match response {
            FetchResponse::Search {
                request_id,
                query,
                result,
            } => self.apply_search(request_id, &query, result),
            FetchResponse::Enrich {
                request_id,
                text,
                outcome,
            } => self.apply_enrichment(request_id, &text, outcome),
            FetchResponse::AddWord { word, result, .. } => {
                self.apply_add(&word, result);
                true
            }
            FetchResponse::DeleteWord { word, result, .. } => {
                self.apply_delete(&word, result);
                true
            }
        }
    }
}
