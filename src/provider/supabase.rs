//! Request-scoped auth handle.
//!
//! DESIGN
//! ======
//! Route handlers build one `SupabaseAuth` per request from the shared
//! [`GoTrueClient`] and the session cookies. Operations that create, renew
//! or end a session record the change so the handler can rewrite cookies on
//! the way out. Nothing is cached beyond the request.
//!
//! A rejected refresh token ends the session. A renewal that fails for any
//! other reason leaves the cookies untouched so the next request retries.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use super::{AuthProvider, EmailLinkKind, GoTrueClient, ProviderError, Session, SessionTokens};

#[derive(Default)]
struct StoredSession {
    tokens: Option<SessionTokens>,
    changed: bool,
}

pub struct SupabaseAuth {
    client: Arc<GoTrueClient>,
    stored: Mutex<StoredSession>,
}

impl SupabaseAuth {
    #[must_use]
    pub fn new(client: Arc<GoTrueClient>, tokens: Option<SessionTokens>) -> Self {
        Self { client, stored: Mutex::new(StoredSession { tokens, changed: false }) }
    }

    /// The session change made during this request, if any.
    ///
    /// `Some(Some(tokens))` means a new or renewed session, `Some(None)` means
    /// the session ended, `None` means cookies can stay as they are.
    #[must_use]
    pub fn take_session_change(&self) -> Option<Option<SessionTokens>> {
        let mut stored = self.lock();
        if !stored.changed {
            return None;
        }
        stored.changed = false;
        Some(stored.tokens.clone())
    }

    fn tokens(&self) -> Option<SessionTokens> {
        self.lock().tokens.clone()
    }

    fn store(&self, tokens: Option<SessionTokens>) {
        let mut stored = self.lock();
        stored.tokens = tokens;
        stored.changed = true;
    }

    fn lock(&self) -> MutexGuard<'_, StoredSession> {
        self.stored.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuth {
    async fn get_session(&self) -> Result<Option<Session>, ProviderError> {
        let Some(tokens) = self.tokens() else {
            return Ok(None);
        };

        match self.client.get_user(&tokens.access_token).await {
            Ok(user) => Ok(Some(Session { user_id: user.id, email: user.email, tokens })),
            Err(e) if e.is_unauthorized() => {
                tracing::debug!("access token rejected; renewing session");
                match self.client.refresh_grant(&tokens.refresh_token).await {
                    Ok(session) => {
                        self.store(Some(session.tokens.clone()));
                        Ok(Some(session))
                    }
                    Err(refresh_err) if refresh_err.is_rejection() => {
                        self.store(None);
                        Err(refresh_err)
                    }
                    Err(refresh_err) => {
                        tracing::warn!(error = %refresh_err, "session renewal failed; keeping stored tokens");
                        Err(refresh_err)
                    }
                }
            }
            Err(e) => Err(e),
        }
    }

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, ProviderError> {
        let session = self.client.password_grant(email, password).await?;
        self.store(Some(session.tokens.clone()));
        Ok(session)
    }

    async fn sign_up(&self, email: &str, password: &str, email_redirect_to: &str) -> Result<(), ProviderError> {
        self.client.signup(email, password, email_redirect_to).await
    }

    async fn sign_out(&self) -> Result<(), ProviderError> {
        // The local session ends even when the provider call fails.
        let tokens = self.tokens();
        self.store(None);
        match tokens {
            Some(tokens) => self.client.logout(&tokens.access_token).await,
            None => Ok(()),
        }
    }

    async fn update_user_password(&self, password: &str) -> Result<(), ProviderError> {
        let tokens = self.tokens().ok_or(ProviderError::SessionMissing)?;
        self.client.update_password(&tokens.access_token, password).await
    }

    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> Result<(), ProviderError> {
        self.client.recover(email, redirect_to).await
    }

    async fn verify_email_token(&self, token_hash: &str, kind: EmailLinkKind) -> Result<Session, ProviderError> {
        let session = self.client.verify(token_hash, kind).await?;
        self.store(Some(session.tokens.clone()));
        Ok(session)
    }
}

#[cfg(test)]
#[path = "supabase_test.rs"]
mod tests;
