#![allow(dead_code)]

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::Value;
use shortener_form::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;
use url::Url;

/// A request body the stub received, with its content type.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub content_type: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: &'static str,
    received: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Stub of the `/api/v1` endpoint answering every request the same way.
pub struct StubServer {
    pub base_url: String,
    received: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubServer {
    pub fn endpoint(&self) -> Url {
        Url::parse(&format!("{}/api/v1", self.base_url)).unwrap()
    }

    pub fn received(&self) -> Vec<RecordedRequest> {
        self.received.lock().unwrap().clone()
    }
}

async fn handle_shorten(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: Bytes,
) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    state
        .received
        .lock()
        .unwrap()
        .push(RecordedRequest { content_type, body });

    (
        state.status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
}

pub async fn spawn_stub(status: StatusCode, body: &'static str) -> StubServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status,
        body,
        received: received.clone(),
    };
    let app = Router::new()
        .route("/api/v1", post(handle_shorten))
        .with_state(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubServer {
        base_url: format!("http://{addr}"),
        received,
    }
}

/// Endpoint on a port nothing listens on.
pub async fn closed_endpoint() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/api/v1")).unwrap()
}

/// HTTP client that ignores proxy variables from the environment.
pub fn direct_api(endpoint: Url) -> HttpShortenApi {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpShortenApi::with_client(client, endpoint)
}

pub fn mount<C: ClipboardWriter + 'static>(
    endpoint: Url,
    clipboard: C,
    fields: FormFields,
    copy_feedback: Duration,
) -> ShortenerController<HttpShortenApi, C, ViewSurface> {
    ShortenerController::new(
        Arc::new(direct_api(endpoint)),
        Arc::new(clipboard),
        Arc::new(ViewSurface::with_fields(fields)),
        copy_feedback,
    )
}

pub fn fields(url: &str, custom_short: &str, expiry: &str) -> FormFields {
    FormFields::new(url, custom_short, expiry)
}
