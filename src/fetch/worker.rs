//! Fetch Worker Thread
//!
//! Runs every request on a background tokio runtime so the UI thread never
//! blocks on the network. Each request becomes its own task: any number of
//! searches, lookups and mutations can be in flight at once and they
//! complete in whatever order the servers answer.

use std::sync::mpsc::Sender;
use std::thread::JoinHandle;
use std::time::Duration;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

use super::{FetchError, FetchRequest, FetchResponse, KnowledgeClient, WordStoreClient};
use crate::config::Config;

const USER_AGENT: &str = concat!("triemaster/", env!("CARGO_PKG_VERSION"));

/// HTTP clients shared by all worker tasks
#[derive(Debug, Clone)]
pub struct FetchClients {
    pub word_store: WordStoreClient,
    pub knowledge: KnowledgeClient,
}

impl FetchClients {
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        Ok(Self {
            word_store: WordStoreClient::new(http.clone(), &config.word_store.base_url),
            knowledge: KnowledgeClient::new(
                http,
                &config.enrichment.api_url,
                config.enrichment.max_words,
            ),
        })
    }
}

/// UI-side ends of the worker channels
pub struct WorkerChannels {
    pub request_tx: UnboundedSender<FetchRequest>,
    pub response_rx: std::sync::mpsc::Receiver<FetchResponse>,
}

/// Owner of the worker thread
///
/// Dropping the handle cancels all in-flight requests.
pub struct WorkerHandle {
    shutdown: CancellationToken,
    thread: Option<JoinHandle<()>>,
}

impl WorkerHandle {
    /// Cancel in-flight work and wait for the worker thread to exit
    pub fn shutdown(&mut self) {
        self.shutdown.cancel();
        if let Some(thread) = self.thread.take()
            && thread.join().is_err()
        {
            log::error!("fetch worker thread panicked");
        }
    }
}

impl Drop for WorkerHandle {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Spawn the fetch worker thread
///
/// Creates a background thread with a single-threaded tokio runtime that:
/// 1. Listens for requests on the request channel
/// 2. Runs each request as an independent task under `timeout`
/// 3. Sends exactly one response per request back to the UI thread
pub fn spawn_worker(
    clients: FetchClients,
    timeout: Duration,
) -> std::io::Result<(WorkerHandle, WorkerChannels)> {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    let shutdown = CancellationToken::new();
    let worker_token = shutdown.clone();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let thread = std::thread::Builder::new()
        .name("fetch-worker".to_string())
        .spawn(move || {
            runtime.block_on(worker_loop(
                clients,
                timeout,
                request_rx,
                response_tx,
                worker_token,
            ));
        })?;

    Ok((
        WorkerHandle {
            shutdown,
            thread: Some(thread),
        },
        WorkerChannels {
            request_tx,
            response_rx,
        },
    ))
}

/// Main worker loop - dispatches requests until the channel closes or shutdown
pub(crate) async fn worker_loop(
    clients: FetchClients,
    timeout: Duration,
    mut request_rx: UnboundedReceiver<FetchRequest>,
    response_tx: Sender<FetchResponse>,
    shutdown: CancellationToken,
) {
    loop {
        tokio::select! {
            _ = shutdown.cancelled() => break,
            request = request_rx.recv() => match request {
                Some(request) => {
                    log::debug!(
                        "dispatching {} request {}",
                        request.kind(),
                        request.request_id()
                    );
                    tokio::spawn(run_request(
                        clients.clone(),
                        request,
                        timeout,
                        response_tx.clone(),
                        shutdown.clone(),
                    ));
                }
                None => break,
            },
        }
    }

    log::debug!("fetch worker shutting down");
}

/// Run one request under the timeout and report its response
///
/// A timeout becomes a normal failure response so the UI always sees the
/// request finish. Cancellation drops the request without a response.
async fn run_request(
    clients: FetchClients,
    request: FetchRequest,
    timeout: Duration,
    response_tx: Sender<FetchResponse>,
    shutdown: CancellationToken,
) {
    let response = tokio::select! {
        _ = shutdown.cancelled() => {
            log::debug!(
                "cancelled {} request {}",
                request.kind(),
                request.request_id()
            );
            return;
        }
        result = tokio::time::timeout(timeout, execute(&clients, request.clone())) => match result {
            Ok(response) => response,
            Err(_) => {
                let timeout_ms = timeout.as_millis() as u64;
                log::warn!(
                    "{} request {} timed out after {} ms",
                    request.kind(),
                    request.request_id(),
                    timeout_ms
                );
                request.fail(FetchError::Timeout(timeout_ms))
            }
        },
    };

    // UI thread gone means we are shutting down
    let _ = response_tx.send(response);
}

/// Execute a request against the right client
pub(crate) async fn execute(clients: &FetchClients, request: FetchRequest) -> FetchResponse {
    match request {
        FetchRequest::Search { request_id, query } => {
            let result = clients.word_store.search(&query).await;
            FetchResponse::Search {
                request_id,
                query,
                result,
            }
        }
        FetchRequest::Enrich { request_id, text } => {
            let outcome = clients.knowledge.lookup(&text).await;
            FetchResponse::Enrich {
                request_id,
                text,
                outcome,
            }
        }
        FetchRequest::AddWord { request_id, word } => {
            let result = clients.word_store.add_word(&word).await;
            FetchResponse::AddWord {
                request_id,
                word,
                result,
            }
        }
        FetchRequest::DeleteWord { request_id, word } => {
            let result = clients.word_store.delete_word(&word).await;
            FetchResponse::DeleteWord {
                request_id,
                word,
                result,
            }
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
