#[cfg(test)]
pub mod test_helpers {
    use std::sync::mpsc::{self, Sender};
    use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::app::App;
    use crate::config::ConsistencyMode;
    use crate::controller::Controller;
    use crate::fetch::{FetchRequest, FetchResponse};

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// App over a sequenced controller wired to test channels
    pub fn test_app() -> (App, UnboundedReceiver<FetchRequest>, Sender<FetchResponse>) {
        let (controller, request_rx, response_tx) = test_controller(ConsistencyMode::Sequenced);
        (App::new(controller, "http://localhost:5000"), request_rx, response_tx)
    }

    /// Type each character of `text` into the search box
    pub fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }
    }

    /// Controller wired to test channels
    ///
    /// Requests the controller issues land in the returned receiver; responses
    /// pushed into the returned sender are applied on `poll_responses()`.
    pub fn test_controller(
        mode: ConsistencyMode,
    ) -> (
        Controller,
        UnboundedReceiver<FetchRequest>,
        Sender<FetchResponse>,
    ) {
        let mut controller = Controller::new(mode, true);
        let (request_tx, request_rx) = unbounded_channel();
        let (response_tx, response_rx) = mpsc::channel();
        controller.set_channels(request_tx, response_rx);
        (controller, request_rx, response_tx)
    }

    /// Drain every request issued so far
    pub fn drain_requests(request_rx: &mut UnboundedReceiver<FetchRequest>) -> Vec<FetchRequest> {
        let mut requests = Vec::new();
        while let Ok(request) = request_rx.try_recv() {
            requests.push(request);
        }
        requests
    }

    /// Poll until no request is outstanding or the timeout passes
    ///
    /// Returns true if the controller settled.
    pub fn wait_until_settled(controller: &mut Controller, timeout_ms: u64) -> bool {
        let start = std::time::Instant::now();
        let timeout = std::time::Duration::from_millis(timeout_ms);

        while start.elapsed() < timeout {
            controller.poll_responses();
            if controller.outstanding_requests() == 0 {
                return true;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }

        false
    }

    pub fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }
}

#[cfg(test)]
pub mod mock_word_store {
    //! In-process word store and knowledge API for tests

    use std::collections::HashMap;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use axum::{
        Json, Router,
        extract::{Query, State},
        http::StatusCode,
        routing::{delete, get, post},
    };
    use serde::Deserialize;
    use serde_json::json;
    use tokio::net::TcpListener;

    #[derive(Clone, Default)]
    pub struct MockState {
        pub words: Arc<Mutex<Vec<String>>>,
        pub fail_search: Arc<AtomicBool>,
        /// Per-query artificial latency for search, in milliseconds
        pub search_delays: Arc<Mutex<HashMap<String, u64>>>,
        /// Title -> extract served by the knowledge endpoint
        pub articles: Arc<Mutex<HashMap<String, String>>>,
    }

    impl MockState {
        pub fn set_fail_search(&self, fail: bool) {
            self.fail_search.store(fail, Ordering::SeqCst);
        }

        pub fn delay_search(&self, query: &str, delay_ms: u64) {
            self.search_delays
                .lock()
                .unwrap()
                .insert(query.to_string(), delay_ms);
        }

        pub fn add_article(&self, title: &str, extract: &str) {
            self.articles
                .lock()
                .unwrap()
                .insert(title.to_string(), extract.to_string());
        }

        pub fn stored_words(&self) -> Vec<String> {
            self.words.lock().unwrap().clone()
        }
    }

    pub struct MockServer {
        pub base_url: String,
        pub knowledge_url: String,
        pub state: MockState,
    }

    #[derive(Deserialize)]
    struct WordBody {
        text: String,
    }

    async fn search(
        State(state): State<MockState>,
        Query(params): Query<HashMap<String, String>>,
    ) -> (StatusCode, Json<serde_json::Value>) {
        let prefix = params.get("q").cloned().unwrap_or_default();

        let delay = state.search_delays.lock().unwrap().get(&prefix).copied();
        if let Some(delay_ms) = delay {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }

        if state.fail_search.load(Ordering::SeqCst) {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "search unavailable"})),
            );
        }

        let matches: Vec<String> = state
            .words
            .lock()
            .unwrap()
            .iter()
            .filter(|w| w.starts_with(&prefix))
            .cloned()
            .collect();
        (StatusCode::OK, Json(json!(matches)))
    }

    async fn add_word(
        State(state): State<MockState>,
        Json(body): Json<WordBody>,
    ) -> (StatusCode, String) {
        let mut words = state.words.lock().unwrap();
        if words.contains(&body.text) {
            return (StatusCode::CONFLICT, "word already exists".to_string());
        }
        words.push(body.text);
        (StatusCode::CREATED, "added".to_string())
    }

    async fn delete_word(
        State(state): State<MockState>,
        Json(body): Json<WordBody>,
    ) -> (StatusCode, String) {
        let mut words = state.words.lock().unwrap();
        match words.iter().position(|w| *w == body.text) {
            Some(idx) => {
                words.remove(idx);
                (StatusCode::OK, "deleted".to_string())
            }
            None => (StatusCode::NOT_FOUND, "word not found".to_string()),
        }
    }

    async fn knowledge(
        State(state): State<MockState>,
        Query(params): Query<HashMap<String, String>>,
    ) -> Json<serde_json::Value> {
        let title = params.get("titles").cloned().unwrap_or_default();
        match state.articles.lock().unwrap().get(&title) {
            Some(extract) => Json(json!({
                "query": {"pages": {"1": {"title": title, "extract": extract}}}
            })),
            None => Json(json!({
                "query": {"pages": {"-1": {"title": title, "missing": ""}}}
            })),
        }
    }

    /// Start a mock server on an ephemeral port, seeded with `words`
    pub async fn spawn(words: &[&str]) -> MockServer {
        let state = MockState::default();
        state
            .words
            .lock()
            .unwrap()
            .extend(words.iter().map(|w| w.to_string()));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let app = Router::new()
            .route("/api/search", get(search))
            .route("/api/add-word", post(add_word))
            .route("/api/delete-word", delete(delete_word))
            .route("/w/api.php", get(knowledge))
            .with_state(state.clone());

        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        MockServer {
            base_url: format!("http://{}", addr),
            knowledge_url: format!("http://{}/w/api.php", addr),
            state,
        }
    }
}
