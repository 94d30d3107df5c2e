//! Local stand-in for the auth service, bound to an ephemeral port.
//!
//! Each stub answers a fixed reply per method and path (relative to
//! `/auth/v1`) and records every request it sees, so tests can check both
//! the client's request shaping and how callers react to each status.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use axum::Router;
use axum::extract::{Query, Request};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::GoTrueClient;
use crate::config::{HttpTimeouts, SupabaseConfig};

pub(crate) const ANON_KEY: &str = "anon-key";

/// One request as the auth service received it.
#[derive(Debug, Clone)]
pub(crate) struct SeenRequest {
    pub method: String,
    /// Path with the `/auth/v1` prefix removed.
    pub path: String,
    pub query: HashMap<String, String>,
    pub apikey: Option<String>,
    pub authorization: Option<String>,
    pub body: serde_json::Value,
}

struct StubReply {
    method: &'static str,
    path: &'static str,
    status: u16,
    body: serde_json::Value,
}

#[derive(Default)]
pub(crate) struct StubBuilder {
    replies: Vec<StubReply>,
}

impl StubBuilder {
    pub(crate) fn reply(
        mut self,
        method: &'static str,
        path: &'static str,
        status: u16,
        body: serde_json::Value,
    ) -> Self {
        self.replies.push(StubReply { method, path, status, body });
        self
    }

    pub(crate) async fn spawn(self) -> AuthStub {
        let replies = Arc::new(self.replies);
        let seen = Arc::new(Mutex::new(Vec::new()));
        let recorder = Arc::clone(&seen);

        let app = Router::new().fallback(move |request: Request| {
            let replies = Arc::clone(&replies);
            let recorder = Arc::clone(&recorder);
            async move { answer(&replies, &recorder, request).await }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        AuthStub { url: format!("http://{addr}"), seen }
    }
}

pub(crate) struct AuthStub {
    pub url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl AuthStub {
    pub(crate) fn builder() -> StubBuilder {
        StubBuilder::default()
    }

    pub(crate) fn config(&self) -> SupabaseConfig {
        SupabaseConfig {
            url: self.url.clone(),
            anon_key: ANON_KEY.into(),
            timeouts: HttpTimeouts { request_secs: 5, connect_secs: 2 },
        }
    }

    pub(crate) fn client(&self) -> GoTrueClient {
        GoTrueClient::new(&self.config()).unwrap()
    }

    pub(crate) fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

/// Token grant body as the auth service returns it.
pub(crate) fn session_body(access_token: &str, refresh_token: &str) -> serde_json::Value {
    serde_json::json!({
        "access_token": access_token,
        "token_type": "bearer",
        "expires_in": 3600,
        "refresh_token": refresh_token,
        "user": { "id": "8d1f-user", "aud": "authenticated", "email": "user@example.com" }
    })
}

async fn answer(replies: &[StubReply], recorder: &Mutex<Vec<SeenRequest>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let method = parts.method.as_str().to_owned();
    let path = parts.uri.path().strip_prefix("/auth/v1").unwrap_or(parts.uri.path()).to_owned();
    let query = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
        .map(|Query(q)| q)
        .unwrap_or_default();
    let header = |name: &str| {
        parts
            .headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };
    let apikey = header("apikey");
    let authorization = header("authorization");

    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);

    let reply = replies.iter().find(|r| r.method == method && r.path == path);
    recorder
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .push(SeenRequest { method, path, query, apikey, authorization, body });

    match reply {
        Some(reply) => {
            let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, axum::Json(reply.body.clone())).into_response()
        }
        None => (StatusCode::NOT_FOUND, axum::Json(serde_json::json!({ "msg": "no stub reply" }))).into_response(),
    }
}
