//! Forgot-password and reset-password pages.

use leptos::prelude::*;

use super::{AuthCard, FormMessages};
use crate::controller::MIN_PASSWORD_LEN;
use crate::controller::password::{ForgotPasswordForm, ResetPasswordForm};
use crate::navigation::Route;

#[component]
pub fn ForgotPasswordPage(form: ForgotPasswordForm) -> impl IntoView {
    let ForgotPasswordForm { email, status } = form;

    let body = if status.success {
        view! {
            <div class="form-success" role="status">
                "Check your email for a link to reset your password"
            </div>
            <div class="toggle">
                <a href=Route::Login.path()>"Back to login"</a>
            </div>
        }
        .into_any()
    } else {
        let loading = status.loading;
        view! {
            <form method="post" action=Route::ForgotPassword.path()>
                <div class="field">
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        placeholder="name@example.com"
                        value=email
                        required=true
                        autocomplete="email"
                    />
                </div>
                <FormMessages status=status />
                <button type="submit" disabled=loading>
                    {if loading { "Sending..." } else { "Send reset link" }}
                </button>
                <div class="toggle">
                    <a href=Route::Login.path()>"Back to login"</a>
                </div>
            </form>
        }
        .into_any()
    };

    view! {
        <AuthCard>
            <h1>"Forgot your password?"</h1>
            <p class="subtitle">"Enter your email and we will send you a reset link"</p>
            {body}
        </AuthCard>
    }
}

/// New-password form, replaced by a confirmation panel once the provider
/// accepts the change.
#[component]
pub fn ResetPasswordPage(form: ResetPasswordForm) -> impl IntoView {
    let status = form.status;
    let min = MIN_PASSWORD_LEN.to_string();

    let body = if status.success {
        view! {
            <div class="form-success" role="status">"Your password has been reset successfully"</div>
            <div class="toggle">
                <a href=Route::Login.path() class="button button-outline">"Back to login"</a>
            </div>
        }
        .into_any()
    } else {
        let loading = status.loading;
        view! {
            <form method="post" action=Route::ResetPassword.path()>
                <div class="field">
                    <label for="password">"New Password"</label>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        required=true
                        minlength=min.clone()
                        autocomplete="new-password"
                    />
                </div>
                <div class="field">
                    <label for="confirm-password">"Confirm Password"</label>
                    <input
                        id="confirm-password"
                        name="confirm_password"
                        type="password"
                        required=true
                        minlength=min
                        autocomplete="new-password"
                    />
                </div>
                <FormMessages status=status />
                <button type="submit" disabled=loading>
                    {if loading { "Updating..." } else { "Reset Password" }}
                </button>
            </form>
        }
        .into_any()
    };

    view! {
        <AuthCard>
            <h1>"Reset your password"</h1>
            <p class="subtitle">"Enter your new password below"</p>
            {body}
        </AuthCard>
    }
}

#[cfg(test)]
#[path = "password_test.rs"]
mod tests;
