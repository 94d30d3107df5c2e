//! Landing page.

use leptos::prelude::*;

use crate::navigation::Route;

#[component]
pub fn HomePage(year: i32) -> impl IntoView {
    view! {
        <div class="home">
            <header class="home-header">
                <div class="brand">"Logari"</div>
                <nav>
                    <a href=Route::Login.path() class="button button-outline">"Login"</a>
                    " "
                    <a href=Route::Signup.path() class="button">"Sign up"</a>
                </nav>
            </header>
            <main class="home-main">
                <h1>"Track all your media in one place"</h1>
                <p>
                    "Logari helps you track everything you watch, read, and play, from anime and manga to movies, shows, and games."
                </p>
                <div class="home-actions">
                    <a href=Route::Signup.path() class="button">"Get Started"</a>
                    " "
                    <a href=Route::Login.path() class="button button-outline">"Login"</a>
                </div>
            </main>
            <footer class="home-footer">
                <p>{format!("© {year} Logari. All rights reserved.")}</p>
            </footer>
        </div>
    }
}

#[cfg(test)]
#[path = "home_test.rs"]
mod tests;
