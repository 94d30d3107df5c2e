//! Login and signup form.

use super::{FormStatus, Phase, ValidationError, display_message};
use crate::navigation::{Navigator, Route};
use crate::provider::AuthProvider;

/// Informational text after a successful signup.
pub const SIGNUP_NOTICE: &str = "Check your email to confirm your account";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    #[must_use]
    pub const fn route(self) -> Route {
        match self {
            Self::Login => Route::Login,
            Self::Signup => Route::Signup,
        }
    }
}

/// Form state for one login or signup screen.
#[derive(Debug, Clone)]
pub struct CredentialsForm {
    pub mode: AuthMode,
    pub email: String,
    pub password: String,
    pub status: FormStatus,
}

impl CredentialsForm {
    #[must_use]
    pub fn new(mode: AuthMode) -> Self {
        Self::with_input(mode, String::new(), String::new())
    }

    #[must_use]
    pub fn with_input(mode: AuthMode, email: String, password: String) -> Self {
        Self { mode, email, password, status: FormStatus::default() }
    }

    /// Sign in or sign up with the current input.
    ///
    /// Login success refreshes and navigates to the dashboard; signup success
    /// stays on the screen with [`SIGNUP_NOTICE`]. `origin` is the public site
    /// origin used to build the confirmation link target.
    pub async fn submit(&mut self, provider: &dyn AuthProvider, navigator: &dyn Navigator, origin: &str) -> Phase {
        if !self.status.begin() {
            return self.status.phase();
        }

        let email = self.email.trim().to_owned();
        if email.is_empty() || self.password.is_empty() {
            self.status.fail(ValidationError::MissingCredentials.to_string());
            return self.status.phase();
        }

        let result = match self.mode {
            AuthMode::Login => provider
                .sign_in_with_password(&email, &self.password)
                .await
                .map(|_| ()),
            AuthMode::Signup => {
                provider
                    .sign_up(&email, &self.password, &Route::AuthCallback.url(origin))
                    .await
            }
        };

        match result {
            Ok(()) => {
                navigator.refresh();
                match self.mode {
                    AuthMode::Login => {
                        navigator.push(Route::Dashboard);
                        self.status.navigated_away();
                    }
                    AuthMode::Signup => self.status.inform(SIGNUP_NOTICE),
                }
            }
            Err(e) => {
                tracing::warn!(error = ?e, mode = ?self.mode, "credential submit failed");
                self.status.fail(display_message(&e));
            }
        }
        self.status.phase()
    }
}

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;
