//! Auth routes: credential forms, password recovery, sign-out and the email
//! link callback.

use axum::extract::{Form, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use leptos::prelude::*;
use serde::Deserialize;
use time::Duration;

use super::{form_status, html_page, load_gate, see_other};
use crate::controller::callback::{EmailLink, confirm_email_link};
use crate::controller::credentials::{AuthMode, CredentialsForm};
use crate::controller::password::{ForgotPasswordForm, ResetPasswordForm};
use crate::controller::session::{self, Access, GateDecision};
use crate::navigation::{RedirectNavigator, Route};
use crate::pages::LoadingView;
use crate::pages::auth_form::{CredentialsPage, page_title};
use crate::pages::password::{ForgotPasswordPage, ResetPasswordPage};
use crate::provider::{SessionTokens, SupabaseAuth};
use crate::state::AppState;

pub const ACCESS_COOKIE: &str = "sb-access-token";
pub const REFRESH_COOKIE: &str = "sb-refresh-token";

// =============================================================================
// COOKIES
// =============================================================================

/// Token pair carried by the request, if both cookies are present.
pub fn session_tokens(jar: &CookieJar) -> Option<SessionTokens> {
    let access = jar.get(ACCESS_COOKIE).map(Cookie::value).filter(|v| !v.is_empty())?;
    let refresh = jar.get(REFRESH_COOKIE).map(Cookie::value).filter(|v| !v.is_empty())?;
    Some(SessionTokens { access_token: access.to_owned(), refresh_token: refresh.to_owned() })
}

fn session_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn expired_cookie(name: &'static str, secure: bool) -> Cookie<'static> {
    let mut cookie = session_cookie(name, String::new(), secure);
    cookie.set_max_age(Duration::ZERO);
    cookie
}

/// Write any session change made during the request back to the cookies.
pub fn sync_session_cookies(jar: CookieJar, auth: &SupabaseAuth, secure: bool) -> CookieJar {
    match auth.take_session_change() {
        None => jar,
        Some(Some(tokens)) => jar
            .add(session_cookie(ACCESS_COOKIE, tokens.access_token, secure))
            .add(session_cookie(REFRESH_COOKIE, tokens.refresh_token, secure)),
        Some(None) => jar
            .add(expired_cookie(ACCESS_COOKIE, secure))
            .add(expired_cookie(REFRESH_COOKIE, secure)),
    }
}

// =============================================================================
// LOGIN / SIGNUP
// =============================================================================

#[derive(Deserialize)]
pub struct CredentialsInput {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

/// `GET /login`
pub async fn login_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    credentials_page(AuthMode::Login, &state, jar).await
}

/// `GET /signup`
pub async fn signup_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    credentials_page(AuthMode::Signup, &state, jar).await
}

/// `POST /login`
pub async fn submit_login(State(state): State<AppState>, jar: CookieJar, Form(input): Form<CredentialsInput>) -> Response {
    submit_credentials(AuthMode::Login, &state, jar, input).await
}

/// `POST /signup`
pub async fn submit_signup(State(state): State<AppState>, jar: CookieJar, Form(input): Form<CredentialsInput>) -> Response {
    submit_credentials(AuthMode::Signup, &state, jar, input).await
}

async fn credentials_page(mode: AuthMode, state: &AppState, jar: CookieJar) -> Response {
    let auth = state.provider(&jar);
    let gate = load_gate(&auth).await;
    let title = page_title(mode);

    let response = match gate.decide(Access::AuthOnly) {
        GateDecision::Redirect(route) => see_other(route),
        GateDecision::Pending => html_page(StatusCode::OK, title, view! { <LoadingView /> }),
        GateDecision::Render(_) => {
            let form = CredentialsForm::new(mode);
            html_page(StatusCode::OK, title, view! { <CredentialsPage form=form /> })
        }
    };
    let jar = sync_session_cookies(jar, &auth, state.config.cookie_secure);
    (jar, response).into_response()
}

async fn submit_credentials(mode: AuthMode, state: &AppState, jar: CookieJar, input: CredentialsInput) -> Response {
    let auth = state.provider(&jar);
    let navigator = RedirectNavigator::new();
    let mut form = CredentialsForm::with_input(mode, input.email, input.password);

    let phase = form.submit(&auth, &navigator, &state.config.site_url).await;
    let jar = sync_session_cookies(jar, &auth, state.config.cookie_secure);

    if let Some(route) = navigator.target() {
        tracing::debug!(?mode, target = route.path(), refreshed = navigator.refreshed(), "credentials accepted");
        return (jar, see_other(route)).into_response();
    }
    form.password.clear();
    let page = html_page(form_status(phase), page_title(mode), view! { <CredentialsPage form=form /> });
    (jar, page).into_response()
}

// =============================================================================
// PASSWORD RECOVERY
// =============================================================================

#[derive(Deserialize)]
pub struct ForgotPasswordInput {
    #[serde(default)]
    email: String,
}

#[derive(Deserialize)]
pub struct ResetPasswordInput {
    #[serde(default)]
    password: String,
    #[serde(default)]
    confirm_password: String,
}

/// `GET /forgot-password`
pub async fn forgot_password_page() -> Response {
    let form = ForgotPasswordForm::default();
    html_page(StatusCode::OK, "Forgot password", view! { <ForgotPasswordPage form=form /> })
}

/// `POST /forgot-password`
pub async fn submit_forgot_password(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<ForgotPasswordInput>,
) -> Response {
    let auth = state.provider(&jar);
    let mut form = ForgotPasswordForm::with_email(input.email);
    let phase = form.submit(&auth, &state.config.site_url).await;
    html_page(form_status(phase), "Forgot password", view! { <ForgotPasswordPage form=form /> })
}

/// `GET /reset-password`
pub async fn reset_password_page(State(state): State<AppState>, jar: CookieJar) -> Response {
    let auth = state.provider(&jar);
    let gate = load_gate(&auth).await;

    let response = match gate.decide(Access::Protected) {
        GateDecision::Render(Some(_)) => {
            let form = ResetPasswordForm::default();
            html_page(StatusCode::OK, "Reset password", view! { <ResetPasswordPage form=form /> })
        }
        GateDecision::Pending => html_page(StatusCode::OK, "Reset password", view! { <LoadingView /> }),
        GateDecision::Redirect(route) => see_other(route),
        GateDecision::Render(None) => see_other(Route::Login),
    };
    let jar = sync_session_cookies(jar, &auth, state.config.cookie_secure);
    (jar, response).into_response()
}

/// `POST /reset-password`
pub async fn submit_reset_password(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(input): Form<ResetPasswordInput>,
) -> Response {
    let auth = state.provider(&jar);
    let gate = load_gate(&auth).await;

    let response = match gate.decide(Access::Protected) {
        GateDecision::Render(Some(_)) => {
            let mut form = ResetPasswordForm::with_input(input.password, input.confirm_password);
            let phase = form.submit(&auth).await;
            form.password.clear();
            form.confirm_password.clear();
            html_page(form_status(phase), "Reset password", view! { <ResetPasswordPage form=form /> })
        }
        GateDecision::Redirect(route) => see_other(route),
        GateDecision::Pending | GateDecision::Render(None) => see_other(Route::Login),
    };
    let jar = sync_session_cookies(jar, &auth, state.config.cookie_secure);
    (jar, response).into_response()
}

// =============================================================================
// SESSION EXIT / EMAIL LINKS
// =============================================================================

/// `POST /auth/signout`
pub async fn sign_out(State(state): State<AppState>, jar: CookieJar) -> Response {
    let auth = state.provider(&jar);
    let navigator = RedirectNavigator::new();
    session::sign_out(&auth, &navigator).await;

    let jar = sync_session_cookies(jar, &auth, state.config.cookie_secure);
    (jar, see_other(navigator.target().unwrap_or(Route::Login))).into_response()
}

/// `GET /auth/callback?token_hash=..&type=..[&next=..]`
pub async fn callback(State(state): State<AppState>, jar: CookieJar, Query(link): Query<EmailLink>) -> Response {
    let auth = state.provider(&jar);
    let navigator = RedirectNavigator::new();
    confirm_email_link(&link, &auth, &navigator).await;

    let jar = sync_session_cookies(jar, &auth, state.config.cookie_secure);
    (jar, see_other(navigator.target().unwrap_or(Route::Login))).into_response()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
