//! In-process HTTP stub used by the wire tests
//!
//! An axum router whose fallback answers every request with one canned
//! status and body, and records what it received.

use std::sync::{Arc, Mutex};

use axum::body::Bytes;
use axum::http::{header, Method, StatusCode, Uri};
use axum::Router;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    /// Path plus query string
    pub path: String,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

pub struct StubServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub async fn start(status: u16, body: &str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = requests.clone();
        let status = StatusCode::from_u16(status).unwrap();
        let body = body.to_string();

        let app = Router::new().fallback(move |method: Method, uri: Uri, payload: Bytes| {
            let recorded = recorded.clone();
            let body = body.clone();
            async move {
                recorded.lock().unwrap().push(RecordedRequest {
                    method: method.to_string(),
                    path: uri
                        .path_and_query()
                        .map(|pq| pq.to_string())
                        .unwrap_or_else(|| uri.path().to_string()),
                    body: String::from_utf8_lossy(&payload).to_string(),
                });
                (status, [(header::CONTENT_TYPE, "application/json")], body)
            }
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.expect("serve stub") });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// An address nothing listens on
    pub fn unreachable_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}
