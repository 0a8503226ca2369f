//! Network side of the client
//!
//! Requests are described by [`FetchRequest`] and executed by the background
//! worker; each one produces exactly one [`FetchResponse`]. The request id
//! travels with the response so the controller can tell whether it is still
//! current.

use thiserror::Error;

pub mod knowledge;
pub mod summary;
pub mod word_store;
pub mod worker;

pub use knowledge::KnowledgeClient;
pub use word_store::WordStoreClient;
pub use worker::{FetchClients, WorkerChannels, WorkerHandle};

/// Errors that can occur during word store or knowledge API calls
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Connection, DNS or transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Body could not be decoded
    #[error("Parse error: {0}")]
    Parse(String),

    /// No response within the configured timeout
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// The request never reached the worker
    #[error("Fetch worker unavailable")]
    WorkerUnavailable,
}

impl FetchError {
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Parse(err.to_string())
        } else {
            FetchError::Network(err.to_string())
        }
    }
}

/// Result of an enrichment lookup, already reduced to what gets displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnrichmentOutcome {
    Summary(String),
    NotFound,
    Failed(FetchError),
}

impl EnrichmentOutcome {
    /// Text shown in the side panel for this outcome
    pub fn display_text(&self) -> &str {
        match self {
            EnrichmentOutcome::Summary(text) => text,
            EnrichmentOutcome::NotFound => summary::NOT_FOUND_TEXT,
            EnrichmentOutcome::Failed(_) => summary::FAILURE_TEXT,
        }
    }
}

/// Work sent from the UI thread to the fetch worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    Search { request_id: u64, query: String },
    Enrich { request_id: u64, text: String },
    AddWord { request_id: u64, word: String },
    DeleteWord { request_id: u64, word: String },
}

/// Completed work sent back from the fetch worker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchResponse {
    Search {
        request_id: u64,
        query: String,
        result: Result<Vec<String>, FetchError>,
    },
    Enrich {
        request_id: u64,
        text: String,
        outcome: EnrichmentOutcome,
    },
    AddWord {
        request_id: u64,
        word: String,
        result: Result<(), FetchError>,
    },
    DeleteWord {
        request_id: u64,
        word: String,
        result: Result<(), FetchError>,
    },
}

impl FetchRequest {
    pub fn request_id(&self) -> u64 {
        match self {
            FetchRequest::Search { request_id, .. }
            | FetchRequest::Enrich { request_id, .. }
            | FetchRequest::AddWord { request_id, .. }
            | FetchRequest::DeleteWord { request_id, .. } => *request_id,
        }
    }

    /// Short name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            FetchRequest::Search { .. } => "search",
            FetchRequest::Enrich { .. } => "enrich",
            FetchRequest::AddWord { .. } => "add_word",
            FetchRequest::DeleteWord { .. } => "delete_word",
        }
    }

    /// Build the failure response for this request
    ///
    /// Used when the request times out or never reaches the worker, so every
    /// issued request still gets exactly one response.
    pub fn fail(self, error: FetchError) -> FetchResponse {
        match self {
            FetchRequest::Search { request_id, query } => FetchResponse::Search {
                request_id,
                query,
                result: Err(error),
            },
            FetchRequest::Enrich { request_id, text } => FetchResponse::Enrich {
                request_id,
                text,
                outcome: EnrichmentOutcome::Failed(error),
            },
            FetchRequest::AddWord { request_id, word } => FetchResponse::AddWord {
                request_id,
                word,
                result: Err(error),
            },
            FetchRequest::DeleteWord { request_id, word } => FetchResponse::DeleteWord {
                request_id,
                word,
                result: Err(error),
            },
        }
    }
}

/// Map a non-2xx response to [`FetchError::Api`], keeping the body as the message
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, FetchError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .filter(|body| !body.trim().is_empty())
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());

    Err(FetchError::Api {
        code: status.as_u16(),
        message,
    })
}
