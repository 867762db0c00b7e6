//! In-process stand-in for the Hectane backend.
//!
//! [`MockBackend`] binds an axum server on `127.0.0.1:0`, answers every request
//! from a table of canned [`Reply`]s keyed by method and path, and records what
//! it received so tests can assert on the exact traffic a client produced.
//! [`StalledBackend`] accepts connections and never replies.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{debug, error};

pub use axum::http;

/// Cookie handed out by [`MockBackend::accept_login`].
pub const SESSION_COOKIE: &str = "session=mock-session-token";

/// A canned response.
#[derive(Debug, Clone)]
pub struct Reply {
    status: StatusCode,
    body: String,
    content_type: &'static str,
    set_cookie: Option<String>,
}

impl Reply {
    pub fn json(value: Value) -> Self {
        Self::json_status(StatusCode::OK, value)
    }

    pub fn json_status(status: StatusCode, value: Value) -> Self {
        Self {
            status,
            body: value.to_string(),
            content_type: "application/json",
            set_cookie: None,
        }
    }

    /// `200` with a `null` body, what the backend sends for acknowledgements.
    pub fn ok() -> Self {
        Self::json(Value::Null)
    }

    /// A plain-text body, the way the backend reports errors.
    pub fn text(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: "text/plain; charset=utf-8",
            set_cookie: None,
        }
    }

    pub fn with_cookie(mut self, cookie: impl Into<String>) -> Self {
        self.set_cookie = Some(cookie.into());
        self
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let mut response = (
            self.status,
            [(header::CONTENT_TYPE, self.content_type)],
            self.body,
        )
            .into_response();
        if let Some(value) = self
            .set_cookie
            .and_then(|c| HeaderValue::from_str(&c).ok())
        {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        response
    }
}

/// One request as seen by the mock.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl RecordedRequest {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The body parsed as JSON, `None` when empty or not JSON.
    pub fn json(&self) -> Option<Value> {
        serde_json::from_slice(&self.body).ok()
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

#[derive(Default)]
struct Backend {
    routes: HashMap<(Method, String), Reply>,
    requests: Vec<RecordedRequest>,
}

type Shared = Arc<Mutex<Backend>>;

pub struct MockBackend {
    addr: SocketAddr,
    state: Shared,
    server: JoinHandle<()>,
}

impl MockBackend {
    pub async fn start() -> std::io::Result<Self> {
        let state: Shared = Arc::default();
        let app = Router::new().fallback(respond).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                error!("mock backend stopped: {}", e);
            }
        });
        debug!("mock backend listening on {}", addr);

        Ok(Self {
            addr,
            state,
            server,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Answer `method path` with `reply` from now on, replacing any earlier reply.
    pub fn on(&self, method: Method, path: &str, reply: Reply) -> &Self {
        self.lock().routes.insert((method, path.to_string()), reply);
        self
    }

    /// Accept any login with `session` as the payload and set a session cookie.
    /// Logout is acknowledged and clears the cookie.
    pub fn accept_login(&self, session: Value) -> &Self {
        self.on(
            Method::POST,
            "/api/auth/login",
            Reply::json(session).with_cookie(format!("{SESSION_COOKIE}; Path=/")),
        )
        .on(
            Method::POST,
            "/api/auth/logout",
            Reply::ok().with_cookie("session=; Path=/; Max-Age=0"),
        )
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.lock().requests.clone()
    }

    pub fn requests_to(&self, method: &Method, path: &str) -> Vec<RecordedRequest> {
        self.lock()
            .requests
            .iter()
            .filter(|r| &r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Backend> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Accepts connections and never answers, for exercising timeouts and
/// abandoned requests.
pub struct StalledBackend {
    addr: SocketAddr,
    server: JoinHandle<()>,
}

impl StalledBackend {
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let server = tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        debug!("stalled backend listening on {}", addr);
        Ok(Self { addr, server })
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

impl Drop for StalledBackend {
    fn drop(&mut self) {
        self.server.abort();
    }
}

async fn respond(
    State(state): State<Shared>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri.path().to_string();
    let reply = {
        let mut backend = state.lock().unwrap_or_else(PoisonError::into_inner);
        let reply = backend.routes.get(&(method.clone(), path.clone())).cloned();
        backend.requests.push(RecordedRequest {
            method,
            path,
            headers,
            body,
        });
        reply
    };

    match reply {
        Some(reply) => reply.into_response(),
        None => (StatusCode::NOT_FOUND, "404 page not found\n").into_response(),
    }
}
