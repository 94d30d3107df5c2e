//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! is immutable after startup: the parsed config, the shared auth client and
//! the optional games catalogue client. Per-user session state never lives
//! here; handlers build a request-scoped [`SupabaseAuth`] from cookies.

use std::sync::Arc;

use axum_extra::extract::cookie::CookieJar;

use crate::config::AppConfig;
use crate::media::RawgClient;
use crate::provider::{GoTrueClient, SupabaseAuth};
use crate::routes::auth::session_tokens;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub auth: Arc<GoTrueClient>,
    /// `None` when `RAWG_API_KEY` is unset; game endpoints answer 503.
    pub media: Option<Arc<RawgClient>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, auth: GoTrueClient, media: Option<RawgClient>) -> Self {
        Self { config: Arc::new(config), auth: Arc::new(auth), media: media.map(Arc::new) }
    }

    /// Auth provider bound to the session carried by `jar`.
    #[must_use]
    pub fn provider(&self, jar: &CookieJar) -> SupabaseAuth {
        SupabaseAuth::new(Arc::clone(&self.auth), session_tokens(jar))
    }
}

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
