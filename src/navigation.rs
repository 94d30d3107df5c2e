//! Named routes and the navigation capability screens use to leave.
//!
//! SYSTEM CONTEXT
//! ==============
//! Screens never build redirect responses themselves: they `push` a named
//! route and the HTTP layer turns the recorded target into a `303 See Other`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Signup,
    ForgotPassword,
    ResetPassword,
    Dashboard,
    SignOut,
    AuthCallback,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::ForgotPassword => "/forgot-password",
            Self::ResetPassword => "/reset-password",
            Self::Dashboard => "/dashboard",
            Self::SignOut => "/auth/signout",
            Self::AuthCallback => "/auth/callback",
        }
    }

    /// Absolute URL of this route under `origin`.
    #[must_use]
    pub fn url(self, origin: &str) -> String {
        format!("{}{}", origin.trim_end_matches('/'), self.path())
    }

    /// Resolve a local page path. Only screens a user can land on qualify;
    /// anything else (external URLs, `//host`, action endpoints) is `None`.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Home),
            "/login" => Some(Self::Login),
            "/signup" => Some(Self::Signup),
            "/forgot-password" => Some(Self::ForgotPassword),
            "/reset-password" => Some(Self::ResetPassword),
            "/dashboard" => Some(Self::Dashboard),
            _ => None,
        }
    }
}

/// Imperative navigation, as offered by the hosting router.
pub trait Navigator: Send + Sync {
    fn push(&self, route: Route);
    /// Re-read server-held state (the session) before the next render.
    fn refresh(&self);
}

/// Navigator that records the last pushed route for the HTTP layer.
#[derive(Default)]
pub struct RedirectNavigator {
    target: Mutex<Option<Route>>,
    refreshed: AtomicBool,
}

impl RedirectNavigator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn target(&self) -> Option<Route> {
        *self.target.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use]
    pub fn refreshed(&self) -> bool {
        self.refreshed.load(Ordering::Relaxed)
    }
}

impl Navigator for RedirectNavigator {
    fn push(&self, route: Route) {
        *self.target.lock().unwrap_or_else(PoisonError::into_inner) = Some(route);
    }

    fn refresh(&self) {
        self.refreshed.store(true, Ordering::Relaxed);
    }
}

#[cfg(test)]
#[path = "navigation_test.rs"]
mod tests;
