#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};

/// Picks the response for the n-th request (0-based) given its JSON body.
pub type Responder = dyn Fn(usize, &Value) -> (StatusCode, String) + Send + Sync;

struct Inner {
    hits: AtomicUsize,
    responder: Box<Responder>,
}

/// A local stand-in for the alias endpoint.
pub struct StubService {
    pub base_url: String,
    inner: Arc<Inner>,
}

impl StubService {
    /// Number of requests the stub has served.
    pub fn hits(&self) -> usize {
        self.inner.hits.load(Ordering::SeqCst)
    }
}

async fn alias_handler(
    State(inner): State<Arc<Inner>>,
    Json(body): Json<Value>,
) -> (StatusCode, String) {
    let hit = inner.hits.fetch_add(1, Ordering::SeqCst);
    (inner.responder)(hit, &body)
}

/// Spawns a stub service on an ephemeral local port.
pub async fn spawn_stub(
    responder: impl Fn(usize, &Value) -> (StatusCode, String) + Send + Sync + 'static,
) -> StubService {
    let inner = Arc::new(Inner {
        hits: AtomicUsize::new(0),
        responder: Box::new(responder),
    });

    let app = Router::new()
        .route("/api/alias", post(alias_handler))
        .with_state(Arc::clone(&inner));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubService {
        base_url: format!("http://{addr}"),
        inner,
    }
}

/// Well-formed success body for the alias endpoint.
pub fn success_body(alias: &str, original: &str) -> String {
    json!({
        "alias": alias,
        "_links": {
            "self": original,
            "short": format!("https://short.test/{alias}"),
        },
    })
    .to_string()
}
