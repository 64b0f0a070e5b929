use anyhow::Result;
use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    Form, Router,
};
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{Arc, Mutex},
};
use tokio::sync::oneshot;

/// A request as seen by the mock judge.
#[derive(Debug, Clone)]
pub struct ReceivedSubmission {
    pub method: Method,
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub form: HashMap<String, String>,
}

struct MockState {
    status: StatusCode,
    body: String,
    received: Mutex<Vec<ReceivedSubmission>>,
}

/// Local HTTP server standing in for the online judge. Every request gets the
/// same canned status and body; form-encoded requests are recorded.
pub struct MockJudge {
    addr: SocketAddr,
    state: Arc<MockState>,
    shutdown: Option<oneshot::Sender<()>>,
}

impl MockJudge {
    pub fn start(status: u16, body: impl Into<String>) -> Result<Self> {
        let state = Arc::new(MockState {
            status: StatusCode::from_u16(status)?,
            body: body.into(),
            received: Mutex::new(Vec::new()),
        });

        let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
        listener.set_nonblocking(true)?;
        let addr = listener.local_addr()?;

        let app = Router::new().fallback(record).with_state(state.clone());
        let (shutdown, signal) = oneshot::channel::<()>();

        // Never joined; dropping the handle only signals shutdown.
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("Failed to build mock judge runtime");
            runtime.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener)
                    .expect("Failed to register mock judge listener");
                axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = signal.await;
                    })
                    .await
                    .expect("Mock judge server failed");
            });
        });

        Ok(Self {
            addr,
            state,
            shutdown: Some(shutdown),
        })
    }

    /// API root to pass as `--api-base`.
    pub fn api_base(&self) -> String {
        format!("http://{}/OnlineJudge/api/v1", self.addr)
    }

    pub fn submit_url(&self, problem: u32) -> String {
        format!("{}/problem/{problem}/submit", self.api_base())
    }

    pub fn received(&self) -> Vec<ReceivedSubmission> {
        self.state
            .received
            .lock()
            .expect("mock judge state poisoned")
            .clone()
    }
}

impl Drop for MockJudge {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}

async fn record(
    State(state): State<Arc<MockState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(String::from)
    };

    state
        .received
        .lock()
        .expect("mock judge state poisoned")
        .push(ReceivedSubmission {
            method,
            path: uri.path().to_string(),
            authorization: header_value(header::AUTHORIZATION),
            content_type: header_value(header::CONTENT_TYPE),
            form,
        });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body.clone(),
    )
}
