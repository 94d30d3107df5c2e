//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the server-rendered account pages, the auth
//! action endpoints and the JSON media API under `/api/v1`. Page handlers
//! run the screen controller against a request-scoped provider, then turn
//! its outcome into a rendered page or a `303 See Other`.

pub mod auth;
pub mod dashboard;
pub mod games;
pub mod health;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use leptos::prelude::*;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::controller::Phase;
use crate::controller::session::SessionGate;
use crate::navigation::Route;
use crate::pages::render_document;
use crate::provider::AuthProvider;
use crate::state::AppState;

/// JSON API consumed by the media front end.
fn api_routes() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::api_health))
        .route("/games/search", post(games::search))
        .route("/games/popular", get(games::popular))
        .route("/games/new", get(games::new_releases))
        .route("/games/upcoming", get(games::upcoming))
        .route("/games/{id}", get(games::game))
        .layer(cors)
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::home))
        .route("/login", get(auth::login_page).post(auth::submit_login))
        .route("/signup", get(auth::signup_page).post(auth::submit_signup))
        .route(
            "/forgot-password",
            get(auth::forgot_password_page).post(auth::submit_forgot_password),
        )
        .route(
            "/reset-password",
            get(auth::reset_password_page).post(auth::submit_reset_password),
        )
        .route("/dashboard", get(dashboard::dashboard))
        .route(Route::SignOut.path(), post(auth::sign_out))
        .route(Route::AuthCallback.path(), get(auth::callback))
        .route("/healthz", get(health::healthz))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// RESPONSE HELPERS
// =============================================================================

/// Resolve the session once for a gated screen.
pub(crate) async fn load_gate(provider: &dyn AuthProvider) -> SessionGate {
    let mut gate = SessionGate::new();
    gate.load_session(provider).await;
    gate
}

pub(crate) fn html_page(status: StatusCode, title: &str, body: impl IntoView + 'static) -> Response {
    (status, Html(render_document(title, body))).into_response()
}

pub(crate) fn see_other(route: Route) -> Response {
    Redirect::to(route.path()).into_response()
}

/// Status for a re-rendered form: rejected submits are 422.
pub(crate) fn form_status(phase: Phase) -> StatusCode {
    match phase {
        Phase::Failed => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::OK,
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
