use std::sync::mpsc::Receiver;

use tokio::sync::mpsc::UnboundedSender;

use crate::config::ConsistencyMode;
use crate::fetch::{FetchError, FetchRequest, FetchResponse};
use crate::notification::NotificationState;

/// Coarse view of where the user is in a search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Empty query, no suggestions, no enrichment
    Idle,
    /// The user is typing; fetches may be in flight or settled
    Typing,
    /// A suggestion was selected and its enrichment requested
    Viewing,
}

/// Single owner of the client state
///
/// Every state change goes through the event methods in
/// `controller_events.rs`; the rendering code only reads.
pub struct Controller {
    pub(super) query: String,
    pub(super) suggestions: Vec<String>,
    pub(super) enrichment: String,
    pub(super) error: Option<String>,
    /// Shared loading slot, only meaningful in last-write-wins mode
    pub(super) loading: bool,
    pub(super) mode: ConsistencyMode,
    pub(super) enrichment_enabled: bool,
    /// Suggestion chosen since the last keystroke
    pub(super) selected: Option<String>,
    pub(super) search_request_id: u64,
    pub(super) enrich_request_id: u64,
    pub(super) mutation_request_id: u64,
    /// Id of the search whose response will be applied (sequenced mode)
    pub(super) pending_search: Option<u64>,
    /// Id of the lookup whose response will be applied (sequenced mode)
    pub(super) pending_enrich: Option<u64>,
    /// Words deleted since the current search was issued (sequenced mode)
    pub(super) deleted_this_cycle: Vec<String>,
    /// Requests handed to the worker and not yet answered
    pub(super) outstanding: usize,
    pub notifications: NotificationState,
    request_tx: Option<UnboundedSender<FetchRequest>>,
    pub(super) response_rx: Option<Receiver<FetchResponse>>,
}

impl Controller {
    pub fn new(mode: ConsistencyMode, enrichment_enabled: bool) -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            enrichment: String::new(),
            error: None,
            loading: false,
            mode,
            enrichment_enabled,
            selected: None,
            search_request_id: 0,
            enrich_request_id: 0,
            mutation_request_id: 0,
            pending_search: None,
            pending_enrich: None,
            deleted_this_cycle: Vec::new(),
            outstanding: 0,
            notifications: NotificationState::new(),
            request_tx: None,
            response_rx: None,
        }
    }

    /// Set the channel handles for communication with the fetch worker
    pub fn set_channels(
        &mut self,
        request_tx: UnboundedSender<FetchRequest>,
        response_rx: Receiver<FetchResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn enrichment(&self) -> &str {
        &self.enrichment
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn mode(&self) -> ConsistencyMode {
        self.mode
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Whether the loading indicator should be shown
    ///
    /// In last-write-wins mode this is the shared slot that any completing
    /// fetch clears. In sequenced mode it is true while the current search
    /// or the current lookup is unanswered.
    pub fn is_loading(&self) -> bool {
        match self.mode {
            ConsistencyMode::LastWriteWins => self.loading,
            ConsistencyMode::Sequenced => {
                self.pending_search.is_some() || self.pending_enrich.is_some()
            }
        }
    }

    /// Requests sent to the worker that have not been answered yet
    pub fn outstanding_requests(&self) -> usize {
        self.outstanding
    }

    pub fn phase(&self) -> Phase {
        if self.selected.is_some() {
            Phase::Viewing
        } else if self.query.is_empty() && self.suggestions.is_empty() && self.enrichment.is_empty()
        {
            Phase::Idle
        } else {
            Phase::Typing
        }
    }

    pub(super) fn is_sequenced(&self) -> bool {
        self.mode == ConsistencyMode::Sequenced
    }

    /// Hand a request to the worker
    ///
    /// A request that cannot be delivered is answered on the spot with a
    /// [`FetchError::WorkerUnavailable`] failure, so the loading state never
    /// waits on a request nobody is running.
    pub(super) fn send_request(&mut self, request: FetchRequest) {
        let Some(tx) = &self.request_tx else {
            log::warn!("no fetch worker for {} request", request.kind());
            self.apply_response(request.fail(FetchError::WorkerUnavailable));
            return;
        };

        match tx.send(request) {
            Ok(()) => self.outstanding += 1,
            Err(err) => {
                let request = err.0;
                log::warn!(
                    "fetch worker gone, failing {} request {}",
                    request.kind(),
                    request.request_id()
                );
                self.apply_response(request.fail(FetchError::WorkerUnavailable));
            }
        }
    }
}
