//! Auth provider seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every credential concern (hashing, token issuance, email confirmation,
//! recovery links) belongs to the hosted auth service. This module declares
//! the narrow capability the account screens consume, the typed session it
//! hands back, and the error surface screens turn into display text.

pub mod gotrue;
pub mod supabase;

use std::fmt;

use async_trait::async_trait;

pub use gotrue::GoTrueClient;
pub use supabase::SupabaseAuth;

// =============================================================================
// SESSION
// =============================================================================

/// Provider-issued token pair carried between requests in cookies.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl fmt::Debug for SessionTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionTokens")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// Authenticated identity as returned by the provider.
///
/// Only the provider builds these; screens read `user_id` and `email`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Opaque provider user id.
    pub user_id: String,
    pub email: String,
    pub tokens: SessionTokens,
}

/// Email link kinds accepted by the verification endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailLinkKind {
    Signup,
    Invite,
    MagicLink,
    Recovery,
    EmailChange,
    Email,
}

impl EmailLinkKind {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "signup" => Some(Self::Signup),
            "invite" => Some(Self::Invite),
            "magiclink" => Some(Self::MagicLink),
            "recovery" => Some(Self::Recovery),
            "email_change" => Some(Self::EmailChange),
            "email" => Some(Self::Email),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Signup => "signup",
            Self::Invite => "invite",
            Self::MagicLink => "magiclink",
            Self::Recovery => "recovery",
            Self::EmailChange => "email_change",
            Self::Email => "email",
        }
    }
}

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by auth provider operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider rejected the request with a human-readable message.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// An operation needing a signed-in user ran without one.
    #[error("Auth session missing!")]
    SessionMissing,

    /// The HTTP request never produced a response.
    #[error("auth request failed: {0}")]
    Transport(String),

    /// The provider answered with a body we could not decode.
    #[error("auth response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ProviderError {
    /// Text safe to show on a form, if this error carries any.
    ///
    /// Transport and decoding failures return `None` so callers fall back to
    /// their generic message instead of leaking URLs or serde output.
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } => Some(message.as_str()).filter(|m| !m.trim().is_empty()),
            Self::SessionMissing => Some("Auth session missing!"),
            Self::Transport(_) | Self::Parse(_) | Self::HttpClientBuild(_) => None,
        }
    }

    /// `true` when the provider refused the bearer token itself.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401 | 403, .. })
    }

    /// `true` when the provider answered and refused the request outright.
    /// Transport, decoding and 5xx failures may succeed on a later request.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Api { status: 400..=499, .. })
    }
}

// =============================================================================
// CAPABILITY
// =============================================================================

/// Auth capability consumed by the account screens.
///
/// Implementations are bound to one request: they see the caller's current
/// session (if any) and record session changes for the response.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Current session, validated with the provider. `Ok(None)` when signed out.
    async fn get_session(&self) -> Result<Option<Session>, ProviderError>;

    async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session, ProviderError>;

    /// Register an account. Success means a confirmation email is pending.
    async fn sign_up(&self, email: &str, password: &str, email_redirect_to: &str) -> Result<(), ProviderError>;

    async fn sign_out(&self) -> Result<(), ProviderError>;

    /// Change the signed-in user's password.
    async fn update_user_password(&self, password: &str) -> Result<(), ProviderError>;

    /// Send a recovery email whose link lands on `redirect_to`.
    async fn reset_password_for_email(&self, email: &str, redirect_to: &str) -> Result<(), ProviderError>;

    /// Exchange an emailed token hash for a session.
    async fn verify_email_token(&self, token_hash: &str, kind: EmailLinkKind) -> Result<Session, ProviderError>;
}

#[cfg(test)]
pub(crate) mod test_stub;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
