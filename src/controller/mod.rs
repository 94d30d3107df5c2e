//! Session-gated view controller.
//!
//! ARCHITECTURE
//! ============
//! Each account screen owns a small form state and a submit handler that
//! calls the injected [`AuthProvider`](crate::provider::AuthProvider) and
//! ends in one of three places: an error on the form, a success state on the
//! form, or a navigation away. The HTTP layer only translates between these
//! states and requests/responses.
//!
//! ```text
//! Idle --submit--> Submitting --+--> Failed      (idle, error shown)
//!                               +--> Succeeded   (idle, success/notice shown)
//!                               +--> NavigatedAway (terminal)
//! ```

pub mod callback;
pub mod credentials;
pub mod password;
pub mod session;

use crate::provider::ProviderError;

/// Shown when an error carries no displayable message.
pub const GENERIC_ERROR: &str = "An error occurred";

pub const MIN_PASSWORD_LEN: usize = 6;

/// Local validation failures. These never reach the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Email is required")]
    MissingEmail,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
}

/// Where a screen instance sits in its submit lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Failed,
    Succeeded,
    NavigatedAway,
}

/// Submit bookkeeping shared by every form.
///
/// `error`, `notice` and `success` are mutually exclusive and all cleared
/// when a submit begins. `loading` is true only while a provider call is
/// outstanding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormStatus {
    pub loading: bool,
    pub error: Option<String>,
    /// Informational message, e.g. "check your email".
    pub notice: Option<String>,
    pub success: bool,
    navigated: bool,
}

impl FormStatus {
    /// Enter `Submitting`. Returns `false` (and changes nothing) when a
    /// submit is already in flight or the screen has navigated away.
    pub fn begin(&mut self) -> bool {
        if self.loading || self.navigated {
            return false;
        }
        self.error = None;
        self.notice = None;
        self.success = false;
        self.loading = true;
        true
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.loading = false;
        self.error = Some(if message.trim().is_empty() { GENERIC_ERROR.to_owned() } else { message });
    }

    pub fn succeed(&mut self) {
        self.loading = false;
        self.success = true;
    }

    pub fn inform(&mut self, notice: impl Into<String>) {
        self.loading = false;
        self.notice = Some(notice.into());
    }

    pub fn navigated_away(&mut self) {
        self.loading = false;
        self.navigated = true;
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.navigated {
            Phase::NavigatedAway
        } else if self.loading {
            Phase::Submitting
        } else if self.error.is_some() {
            Phase::Failed
        } else if self.success || self.notice.is_some() {
            Phase::Succeeded
        } else {
            Phase::Idle
        }
    }
}

/// Map a provider failure to the text shown on the form.
#[must_use]
pub fn display_message(err: &ProviderError) -> String {
    err.user_message().unwrap_or(GENERIC_ERROR).to_owned()
}

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
