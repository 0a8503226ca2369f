//! Enrichment fetching and reconciliation

use super::Controller;
use crate::fetch::{EnrichmentOutcome, FetchRequest};
use crate::query::normalize;

impl Controller {
    /// Issue a knowledge lookup for `raw`
    ///
    /// Empty text clears the panel without touching the network. With
    /// enrichment disabled nothing is requested.
    pub(super) fn fetch_enrichment(&mut self, raw: &str) {
        let text = normalize(raw);
        if text.is_empty() {
            self.enrichment.clear();
            if self.is_sequenced() {
                self.pending_enrich = None;
            }
            return;
        }

        if !self.enrichment_enabled {
            return;
        }

        self.enrich_request_id = self.enrich_request_id.wrapping_add(1);
        let request_id = self.enrich_request_id;

        if self.is_sequenced() {
            self.pending_enrich = Some(request_id);
        } else {
            self.loading = true;
        }

        log::debug!("enrich {} for {:?}", request_id, text);
        self.send_request(FetchRequest::Enrich { request_id, text });
    }

    /// Apply a lookup response; returns false if it was discarded as stale
    pub(super) fn apply_enrichment(
        &mut self,
        request_id: u64,
        text: &str,
        outcome: EnrichmentOutcome,
    ) -> bool {
        if self.is_sequenced() {
            if self.pending_enrich != Some(request_id) {
                log::debug!(
                    "discarding stale enrichment {} for {:?}",
                    request_id,
                    text
                );
                return false;
            }
            self.pending_enrich = None;
        } else {
            self.loading = false;
        }

        if let EnrichmentOutcome::Failed(e) = &outcome {
            log::warn!(
                "enrichment {} for {:?} failed: {}",
                request_id,
                text,
                e
            );
        }
        self.enrichment = outcome.display_text().to_string();
        true
    }
}
