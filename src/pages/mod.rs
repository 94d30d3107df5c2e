//! Server-rendered page shells.
//!
//! ARCHITECTURE
//! ============
//! Pages are Leptos components rendered to an HTML string per request. They
//! take controller form state by value and never call the provider; the
//! route handlers decide which page to render and with what state.

pub mod auth_form;
pub mod dashboard;
pub mod home;
pub mod password;

use leptos::prelude::*;

use crate::controller::FormStatus;

const STYLES: &str = "\
body { margin: 0; font-family: system-ui, sans-serif; background: #f7f7f8; color: #18181b; }
a { color: #4f46e5; text-decoration: none; }
.auth-card-wrap { display: flex; min-height: 80vh; align-items: center; justify-content: center; padding: 3rem 1rem; }
.auth-card { width: 100%; max-width: 28rem; background: #fff; border: 1px solid #e4e4e7; border-radius: 0.5rem; padding: 2rem; }
.auth-card h1 { font-size: 1.5rem; text-align: center; margin: 0 0 0.5rem; }
.subtitle { text-align: center; color: #71717a; font-size: 0.875rem; }
.field { display: flex; flex-direction: column; gap: 0.25rem; margin-bottom: 1rem; }
.field-row { display: flex; justify-content: space-between; }
input { padding: 0.5rem; border: 1px solid #d4d4d8; border-radius: 0.375rem; }
button, .button { display: inline-block; width: 100%; padding: 0.5rem; border: 0; border-radius: 0.375rem; background: #18181b; color: #fff; text-align: center; cursor: pointer; }
.button-outline { background: #fff; color: #18181b; border: 1px solid #d4d4d8; width: auto; padding: 0.5rem 1rem; }
.form-error { background: #fee2e2; color: #b91c1c; padding: 0.75rem; border-radius: 0.375rem; font-size: 0.875rem; }
.form-notice, .form-success { background: #e0e7ff; color: #3730a3; padding: 0.75rem; border-radius: 0.375rem; font-size: 0.875rem; }
.toggle { text-align: center; font-size: 0.875rem; margin-top: 1rem; }
.loading { display: flex; min-height: 100vh; align-items: center; justify-content: center; }
";

/// Render a full HTML document around `body`.
pub fn render_document(title: &str, body: impl IntoView + 'static) -> String {
    let title = format!("{title} | Logari");
    let owner = Owner::new();
    let html = owner.with(|| {
        view! {
            <html lang="en">
                <head>
                    <meta charset="utf-8" />
                    <meta name="viewport" content="width=device-width, initial-scale=1" />
                    <title>{title}</title>
                    <style>{STYLES}</style>
                </head>
                <body>{body}</body>
            </html>
        }
        .to_html()
    });
    format!("<!DOCTYPE html>{html}")
}

/// Centered card used by every account form.
#[component]
pub fn AuthCard(children: Children) -> impl IntoView {
    view! {
        <div class="auth-card-wrap">
            <div class="auth-card">{children()}</div>
        </div>
    }
}

/// Shown while the session lookup is outstanding.
#[component]
pub fn LoadingView() -> impl IntoView {
    view! {
        <div class="loading">
            <p>"Loading..."</p>
        </div>
    }
}

/// Error or notice box for a form, if either is set.
#[component]
pub fn FormMessages(status: FormStatus) -> impl IntoView {
    let error = status.error.map(|message| view! { <div class="form-error" role="alert">{message}</div> });
    let notice = status.notice.map(|message| view! { <div class="form-notice" role="status">{message}</div> });
    view! {
        {error}
        {notice}
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
