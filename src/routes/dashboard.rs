//! Landing page and dashboard routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;
use leptos::prelude::*;
use time::OffsetDateTime;

use super::auth::sync_session_cookies;
use super::{html_page, load_gate, see_other};
use crate::controller::session::{Access, GateDecision};
use crate::navigation::Route;
use crate::pages::LoadingView;
use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::state::AppState;

/// `GET /`
pub async fn home() -> Response {
    let year = OffsetDateTime::now_utc().year();
    html_page(StatusCode::OK, "Home", view! { <HomePage year=year /> })
}

/// `GET /dashboard`. Protected content renders only with a resolved session.
pub async fn dashboard(State(state): State<AppState>, jar: CookieJar) -> Response {
    let auth = state.provider(&jar);
    let gate = load_gate(&auth).await;

    let response = match gate.decide(Access::Protected) {
        GateDecision::Render(Some(session)) => {
            let session = session.clone();
            html_page(StatusCode::OK, "Dashboard", view! { <DashboardPage session=session /> })
        }
        GateDecision::Pending => html_page(StatusCode::OK, "Dashboard", view! { <LoadingView /> }),
        GateDecision::Redirect(route) => see_other(route),
        GateDecision::Render(None) => see_other(Route::Login),
    };
    let jar = sync_session_cookies(jar, &auth, state.config.cookie_secure);
    (jar, response).into_response()
}
