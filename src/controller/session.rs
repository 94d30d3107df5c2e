//! Session gate and sign-out.
//!
//! DESIGN
//! ======
//! The gate is a two-state machine: `Loading` until the one-time provider
//! lookup finishes, then `Ready` with an optional session. Decisions are only
//! made once `Ready`, so protected content is never rendered for an unknown
//! session and auth-only screens never flash for a signed-in user.

use crate::navigation::{Navigator, Route};
use crate::provider::{AuthProvider, Session};

/// What a screen requires of the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Login and signup: a signed-in user is sent to the dashboard.
    AuthOnly,
    /// Dashboard and reset password: an anonymous user is sent to login.
    Protected,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionView {
    Loading,
    Ready(Option<Session>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision<'a> {
    /// Lookup still outstanding; show the loading indicator.
    Pending,
    Redirect(Route),
    Render(Option<&'a Session>),
}

#[derive(Debug, Clone)]
pub struct SessionGate {
    view: SessionView,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGate {
    #[must_use]
    pub const fn new() -> Self {
        Self { view: SessionView::Loading }
    }

    /// Resolve the session once. A failed lookup counts as no session.
    pub async fn load_session(&mut self, provider: &dyn AuthProvider) {
        let session = match provider.get_session().await {
            Ok(session) => session,
            Err(e) => {
                tracing::warn!(error = ?e, "session lookup failed; treating as signed out");
                None
            }
        };
        self.view = SessionView::Ready(session);
    }

    #[cfg(test)]
    pub(crate) const fn view(&self) -> &SessionView {
        &self.view
    }

    #[cfg(test)]
    pub(crate) fn session(&self) -> Option<&Session> {
        match &self.view {
            SessionView::Ready(session) => session.as_ref(),
            SessionView::Loading => None,
        }
    }

    #[must_use]
    pub fn decide(&self, access: Access) -> GateDecision<'_> {
        let SessionView::Ready(session) = &self.view else {
            return GateDecision::Pending;
        };
        match (access, session) {
            (Access::AuthOnly, Some(_)) => GateDecision::Redirect(Route::Dashboard),
            (Access::Protected, None) => GateDecision::Redirect(Route::Login),
            (_, session) => GateDecision::Render(session.as_ref()),
        }
    }
}

/// End the session and go to login. Navigation happens even when the
/// provider call fails; the local session is gone either way.
pub async fn sign_out(provider: &dyn AuthProvider, navigator: &dyn Navigator) {
    if let Err(e) = provider.sign_out().await {
        tracing::warn!(error = ?e, "sign out failed at provider");
    }
    navigator.push(Route::Login);
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
