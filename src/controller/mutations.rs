//! Add and delete requests
//!
//! Mutations are confirmed by the server before the list changes; nothing
//! is applied optimistically, so there is nothing to roll back.

use super::{
    ADD_FAILURE_TEXT, Controller, DELETE_FAILURE_TEXT, added_message, deleted_message,
};
use crate::fetch::{FetchError, FetchRequest};
use crate::query::{normalize, normalize_submission, same_word};

impl Controller {
    /// Request that the current query be added; returns false when it is blank
    pub(super) fn add_word(&mut self) -> bool {
        let word = normalize_submission(&self.query);
        if word.is_empty() {
            return false;
        }

        self.mutation_request_id = self.mutation_request_id.wrapping_add(1);
        let request_id = self.mutation_request_id;
        log::debug!("add {} for {:?}", request_id, word);
        self.send_request(FetchRequest::AddWord { request_id, word });
        true
    }

    pub(super) fn delete_word(&mut self, suggestion: &str) {
        let word = normalize(suggestion);

        self.mutation_request_id = self.mutation_request_id.wrapping_add(1);
        let request_id = self.mutation_request_id;
        log::debug!("delete {} for {:?}", request_id, word);
        self.send_request(FetchRequest::DeleteWord { request_id, word });
    }

    pub(super) fn apply_add(&mut self, word: &str, result: Result<(), FetchError>) {
        match result {
            Ok(()) => {
                self.notifications.success(added_message(word));
                self.query.clear();
                self.suggestions.clear();
                self.selected = None;

                if self.is_sequenced() {
                    // The old query's fetches no longer describe what is displayed
                    self.enrichment.clear();
                    self.pending_search = None;
                    self.pending_enrich = None;
                    self.deleted_this_cycle.clear();
                }
            }
            Err(e) => {
                log::error!("failed to add {:?}: {}", word, e);
                self.notifications.failure(ADD_FAILURE_TEXT);
            }
        }
    }

    pub(super) fn apply_delete(&mut self, word: &str, result: Result<(), FetchError>) {
        match result {
            Ok(()) => {
                self.notifications.success(deleted_message(word));
                self.suggestions.retain(|s| !same_word(s, word));

                if self.is_sequenced() {
                    self.deleted_this_cycle.push(word.to_string());
                }
            }
            Err(e) => {
                log::error!("failed to delete {:?}: {}", word, e);
                self.notifications.failure(DELETE_FAILURE_TEXT);
            }
        }
    }
}
