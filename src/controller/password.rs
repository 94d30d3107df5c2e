//! Forgot-password and reset-password forms.

use super::{FormStatus, MIN_PASSWORD_LEN, Phase, ValidationError, display_message};
use crate::navigation::Route;
use crate::provider::AuthProvider;

// =============================================================================
// FORGOT PASSWORD
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
    pub status: FormStatus,
}

impl ForgotPasswordForm {
    #[must_use]
    pub fn with_email(email: String) -> Self {
        Self { email, status: FormStatus::default() }
    }

    /// Ask the provider to email a recovery link pointing back at the
    /// callback route under `origin`.
    pub async fn submit(&mut self, provider: &dyn AuthProvider, origin: &str) -> Phase {
        if !self.status.begin() {
            return self.status.phase();
        }

        let email = self.email.trim().to_owned();
        if email.is_empty() {
            self.status.fail(ValidationError::MissingEmail.to_string());
            return self.status.phase();
        }

        match provider.reset_password_for_email(&email, &Route::AuthCallback.url(origin)).await {
            Ok(()) => self.status.succeed(),
            Err(e) => {
                tracing::warn!(error = ?e, "password reset request failed");
                self.status.fail(display_message(&e));
            }
        }
        self.status.phase()
    }
}

// =============================================================================
// RESET PASSWORD
// =============================================================================

#[derive(Debug, Clone, Default)]
pub struct ResetPasswordForm {
    pub password: String,
    pub confirm_password: String,
    pub status: FormStatus,
}

impl ResetPasswordForm {
    #[must_use]
    pub fn with_input(password: String, confirm_password: String) -> Self {
        Self { password, confirm_password, status: FormStatus::default() }
    }

    /// Mismatch is checked before length; neither reaches the provider.
    fn validate(&self) -> Result<(), ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        Ok(())
    }

    /// Set the new password for the signed-in user. Success stays on the
    /// screen; the page offers its own link back to login.
    pub async fn submit(&mut self, provider: &dyn AuthProvider) -> Phase {
        if !self.status.begin() {
            return self.status.phase();
        }

        if let Err(e) = self.validate() {
            self.status.fail(e.to_string());
            return self.status.phase();
        }

        match provider.update_user_password(&self.password).await {
            Ok(()) => self.status.succeed(),
            Err(e) => {
                tracing::warn!(error = ?e, "password update failed");
                self.status.fail(display_message(&e));
            }
        }
        self.status.phase()
    }
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
