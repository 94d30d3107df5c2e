//! Test doubles for the provider and navigation seams.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::navigation::{Navigator, Route};
use crate::provider::{AuthProvider, EmailLinkKind, ProviderError, Session, SessionTokens};

pub(crate) fn sample_session() -> Session {
    Session {
        user_id: "0b5c7d2e-user".into(),
        email: "user@example.com".into(),
        tokens: SessionTokens { access_token: "at".into(), refresh_token: "rt".into() },
    }
}

/// How the mock answers every mutating call.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Reply {
    Ok,
    Api(&'static str),
    Transport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    GetSession,
    SignIn { email: String, password: String },
    SignUp { email: String, password: String, redirect_to: String },
    SignOut,
    UpdatePassword(String),
    ResetPassword { email: String, redirect_to: String },
    Verify { token_hash: String, kind: EmailLinkKind },
}

pub(crate) struct MockProvider {
    reply: Reply,
    session: Option<Session>,
    session_lookup_fails: bool,
    calls: Mutex<Vec<Call>>,
}

impl MockProvider {
    pub(crate) fn new() -> Self {
        Self { reply: Reply::Ok, session: None, session_lookup_fails: false, calls: Mutex::new(Vec::new()) }
    }

    pub(crate) fn with_reply(mut self, reply: Reply) -> Self {
        self.reply = reply;
        self
    }

    pub(crate) fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    pub(crate) fn with_failing_session_lookup(mut self) -> Self {
        self.session_lookup_fails = true;
        self
    }

    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn reply(&self) -> Result<(), ProviderError> {
        match self.reply {
            Reply::Ok => Ok(()),
            Reply::Api(message) => Err(ProviderError::Api { status: 400, message: message.to_owned() }),
            Reply::Transport => Err(ProviderError::Transport("connection refused".into())),
        }
    }
}

#[async_trait]
impl AuthProvider for MockProvider {
    async fn get_session(&self) -> Result<Option<Session>, ProviderError> {
        self.record(Call::GetSession);
        if self.session_lookup_fails {
            return Err(ProviderError::Transport("lookup failed".into()));
        }
        Ok(self.session.clone())
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, ProviderError> {
        self.record(Call::SignIn { email: email.into(), password: password.into() });
        self.reply().map(|()| Session { email: email.into(), ..sample_session() })
    }

    async fn sign_up(&self, email: &str, password: &str, email_redirect_to: &str) -> Result<(), ProviderError> {
        self.record(Call::SignUp { email: email.into(), password: password.into(), redirect_to: email_redirect_to.into() });
        self.reply()
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        self.record(Call::SignOut);
        self.reply()
    }

    async fn update_user_password(&self, password: &str) -> Result<(), ProviderError> {
        self.record(Call::UpdatePassword(password.into()));
        self.reply()
    }

    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> Result<(), ProviderError> {
        self.record(Call::ResetPassword { email: email.into(), redirect_to: redirect_to.into() });
        self.reply()
    }

    async fn verify_email_token(&self, token_hash: &str, kind: EmailLinkKind) -> Result<Session, ProviderError> {
        self.record(Call::Verify { token_hash: token_hash.into(), kind });
        self.reply().map(|()| sample_session())
    }
}

#[derive(Default)]
pub(crate) struct RecordingNavigator {
    pushes: Mutex<Vec<Route>>,
    refreshes: AtomicUsize,
}

impl RecordingNavigator {
    pub(crate) fn pushes(&self) -> Vec<Route> {
        self.pushes.lock().unwrap().clone()
    }

    pub(crate) fn refreshes(&self) -> usize {
        self.refreshes.load(Ordering::Relaxed)
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: Route) {
        self.pushes.lock().unwrap().push(route);
    }

    fn refresh(&self) {
        self.refreshes.fetch_add(1, Ordering::Relaxed);
    }
}
