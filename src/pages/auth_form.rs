//! Login and signup pages.

use leptos::prelude::*;

use super::{AuthCard, FormMessages};
use crate::controller::credentials::{AuthMode, CredentialsForm};
use crate::navigation::Route;

struct ModeText {
    title: &'static str,
    subtitle: &'static str,
    button: &'static str,
    toggle: &'static str,
    toggle_route: Route,
    autocomplete_email: &'static str,
    autocomplete_password: &'static str,
}

const fn mode_text(mode: AuthMode) -> ModeText {
    match mode {
        AuthMode::Login => ModeText {
            title: "Login to your account",
            subtitle: "Enter your details below to login to your account",
            button: "Login",
            toggle: "Don't have an account? Sign up",
            toggle_route: Route::Signup,
            autocomplete_email: "username",
            autocomplete_password: "current-password",
        },
        AuthMode::Signup => ModeText {
            title: "Create a new account",
            subtitle: "Enter your details below to create your account",
            button: "Sign up",
            toggle: "Already have an account? Login",
            toggle_route: Route::Login,
            autocomplete_email: "email",
            autocomplete_password: "new-password",
        },
    }
}

/// Page title for a credentials screen.
#[must_use]
pub const fn page_title(mode: AuthMode) -> &'static str {
    match mode {
        AuthMode::Login => "Login",
        AuthMode::Signup => "Sign up",
    }
}

/// Login or signup form. The password field is never echoed back.
#[component]
pub fn CredentialsPage(form: CredentialsForm) -> impl IntoView {
    let CredentialsForm { mode, email, status, .. } = form;
    let text = mode_text(mode);
    let forgot = matches!(mode, AuthMode::Login).then(|| {
        view! { <a href=Route::ForgotPassword.path() class="forgot-link">"Forgot password?"</a> }
    });
    let loading = status.loading;
    let button = if loading { "Loading..." } else { text.button };

    view! {
        <AuthCard>
            <h1>{text.title}</h1>
            <p class="subtitle">{text.subtitle}</p>
            <form method="post" action=mode.route().path()>
                <div class="field">
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        name="email"
                        type="email"
                        placeholder="name@example.com"
                        value=email
                        required=true
                        autocomplete=text.autocomplete_email
                    />
                </div>
                <div class="field">
                    <div class="field-row">
                        <label for="password">"Password"</label>
                        {forgot}
                    </div>
                    <input
                        id="password"
                        name="password"
                        type="password"
                        required=true
                        autocomplete=text.autocomplete_password
                    />
                </div>
                <FormMessages status=status />
                <button type="submit" disabled=loading>{button}</button>
                <div class="toggle">
                    <a href=text.toggle_route.path()>{text.toggle}</a>
                </div>
            </form>
        </AuthCard>
    }
}

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod tests;
