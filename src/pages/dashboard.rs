//! Dashboard page for a signed-in user.

use leptos::prelude::*;

use crate::navigation::Route;
use crate::provider::Session;

/// Takes the session by value so this page cannot be built without one.
#[component]
pub fn DashboardPage(session: Session) -> impl IntoView {
    let Session { user_id, email, .. } = session;
    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h1>"Dashboard"</h1>
                <form method="post" action=Route::SignOut.path()>
                    <button type="submit" class="button-outline">"Sign out"</button>
                </form>
            </div>
            <div class="auth-card">
                <h2>"Welcome to Logari"</h2>
                <p>
                    <strong>"Email:"</strong>
                    " "
                    <span class="user-email">{email}</span>
                </p>
                <p>
                    <strong>"User ID:"</strong>
                    " "
                    <span class="user-id">{user_id}</span>
                </p>
                <p class="subtitle">
                    "Your personal media tracker for anime, movies, TV shows, manga and games."
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod tests;
