//! GoTrue REST client.
//!
//! Thin HTTP wrapper over the hosted auth service's `/auth/v1` endpoints.
//! Response and error decoding live in pure functions for testability.

use std::time::Duration;

use reqwest::Method;
use serde::Deserialize;

use super::{EmailLinkKind, ProviderError, Session, SessionTokens};
use crate::config::SupabaseConfig;

const AUTH_PATH: &str = "/auth/v1";

// =============================================================================
// CLIENT
// =============================================================================

/// Stateless client shared by every request. Session state lives in
/// [`super::SupabaseAuth`], never here.
pub struct GoTrueClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

/// User identity as reported by `GET /user`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

impl GoTrueClient {
    /// Build a client for the project at `config.url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &SupabaseConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProviderError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: auth_base_url(&config.url), anon_key: config.anon_key.clone() })
    }

    /// `POST /token?grant_type=password`.
    pub async fn password_grant(&self, email: &str, password: &str) -> Result<Session, ProviderError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let request = self
            .request(Method::POST, "/token", None)
            .query(&[("grant_type", "password")])
            .json(&body);
        parse_session(&self.send(request).await?)
    }

    /// `POST /token?grant_type=refresh_token`.
    pub async fn refresh_grant(&self, refresh_token: &str) -> Result<Session, ProviderError> {
        let body = serde_json::json!({ "refresh_token": refresh_token });
        let request = self
            .request(Method::POST, "/token", None)
            .query(&[("grant_type", "refresh_token")])
            .json(&body);
        parse_session(&self.send(request).await?)
    }

    /// `POST /signup?redirect_to=...`.
    pub async fn signup(&self, email: &str, password: &str, redirect_to: &str) -> Result<(), ProviderError> {
        let body = serde_json::json!({ "email": email, "password": password });
        let request = self
            .request(Method::POST, "/signup", None)
            .query(&[("redirect_to", redirect_to)])
            .json(&body);
        self.send(request).await.map(|_| ())
    }

    /// `POST /logout` for the token's session.
    pub async fn logout(&self, access_token: &str) -> Result<(), ProviderError> {
        let request = self.request(Method::POST, "/logout", Some(access_token));
        self.send(request).await.map(|_| ())
    }

    /// `GET /user`.
    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser, ProviderError> {
        let request = self.request(Method::GET, "/user", Some(access_token));
        parse_user(&self.send(request).await?)
    }

    /// `PUT /user` with a new password.
    pub async fn update_password(&self, access_token: &str, password: &str) -> Result<(), ProviderError> {
        let body = serde_json::json!({ "password": password });
        let request = self
            .request(Method::PUT, "/user", Some(access_token))
            .json(&body);
        self.send(request).await.map(|_| ())
    }

    /// `POST /recover?redirect_to=...`.
    pub async fn recover(&self, email: &str, redirect_to: &str) -> Result<(), ProviderError> {
        let body = serde_json::json!({ "email": email });
        let request = self
            .request(Method::POST, "/recover", None)
            .query(&[("redirect_to", redirect_to)])
            .json(&body);
        self.send(request).await.map(|_| ())
    }

    /// `POST /verify` with an emailed token hash.
    pub async fn verify(&self, token_hash: &str, kind: EmailLinkKind) -> Result<Session, ProviderError> {
        let body = serde_json::json!({ "type": kind.as_str(), "token_hash": token_hash });
        let request = self.request(Method::POST, "/verify", None).json(&body);
        parse_session(&self.send(request).await?)
    }

    fn request(&self, method: Method, path: &str, access_token: Option<&str>) -> reqwest::RequestBuilder {
        self.http
            .request(method, format!("{}{path}", self.base_url))
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token.unwrap_or(&self.anon_key))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<String, ProviderError> {
        let response = request
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        if !(200..300).contains(&status) {
            return Err(parse_error(status, &text));
        }
        Ok(text)
    }
}

fn auth_base_url(project_url: &str) -> String {
    format!("{}{AUTH_PATH}", project_url.trim_end_matches('/'))
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Deserialize)]
struct WireUser {
    id: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Deserialize)]
struct WireSession {
    access_token: String,
    refresh_token: String,
    user: WireUser,
}

/// GoTrue has shipped several error shapes over time; all are optional.
#[derive(Deserialize, Default)]
struct WireError {
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
    error: Option<String>,
}

// =============================================================================
// PARSING
// =============================================================================

fn parse_session(json: &str) -> Result<Session, ProviderError> {
    let wire: WireSession = serde_json::from_str(json).map_err(|e| ProviderError::Parse(e.to_string()))?;
    Ok(Session {
        user_id: wire.user.id,
        email: wire.user.email.unwrap_or_default(),
        tokens: SessionTokens { access_token: wire.access_token, refresh_token: wire.refresh_token },
    })
}

fn parse_user(json: &str) -> Result<AuthUser, ProviderError> {
    let wire: WireUser = serde_json::from_str(json).map_err(|e| ProviderError::Parse(e.to_string()))?;
    Ok(AuthUser { id: wire.id, email: wire.email.unwrap_or_default() })
}

/// Turn a non-2xx response into [`ProviderError::Api`], preferring the most
/// specific message field the body carries.
fn parse_error(status: u16, body: &str) -> ProviderError {
    let wire: WireError = serde_json::from_str(body).unwrap_or_default();
    let message = [wire.msg, wire.message, wire.error_description, wire.error]
        .into_iter()
        .flatten()
        .find(|m| !m.trim().is_empty())
        .unwrap_or_default();
    ProviderError::Api { status, message }
}

#[cfg(test)]
#[path = "gotrue_test.rs"]
mod tests;
