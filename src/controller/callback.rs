//! Email link landing: confirmation and recovery.

use crate::navigation::{Navigator, Route};
use crate::provider::{AuthProvider, EmailLinkKind};

/// Query carried by links the provider emails out.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct EmailLink {
    pub token_hash: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub next: Option<String>,
}

impl EmailLink {
    /// Where a verified link should land.
    ///
    /// An explicit `next` wins only when it names a local page; recovery
    /// links go to the reset form; everything else goes to the dashboard.
    #[must_use]
    pub fn destination(&self, kind: EmailLinkKind) -> Route {
        if let Some(route) = self.next.as_deref().and_then(Route::from_path) {
            return route;
        }
        match kind {
            EmailLinkKind::Recovery => Route::ResetPassword,
            _ => Route::Dashboard,
        }
    }
}

/// Verify an emailed token and navigate. Malformed links and provider
/// rejections both land on login.
pub async fn confirm_email_link(link: &EmailLink, provider: &dyn AuthProvider, navigator: &dyn Navigator) {
    let token_hash = link.token_hash.as_deref().map(str::trim).filter(|t| !t.is_empty());
    let kind = link.kind.as_deref().and_then(EmailLinkKind::parse);

    let (Some(token_hash), Some(kind)) = (token_hash, kind) else {
        tracing::warn!(kind = ?link.kind, has_token = link.token_hash.is_some(), "malformed email link");
        navigator.push(Route::Login);
        return;
    };

    match provider.verify_email_token(token_hash, kind).await {
        Ok(session) => {
            tracing::info!(user_id = %session.user_id, kind = kind.as_str(), "email link verified");
            navigator.refresh();
            navigator.push(link.destination(kind));
        }
        Err(e) => {
            tracing::warn!(error = ?e, kind = kind.as_str(), "email link verification failed");
            navigator.push(Route::Login);
        }
    }
}

#[cfg(test)]
#[path = "callback_test.rs"]
mod tests;
