//! Sign-in pages for investors and for the admin console.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(feature = "hydrate")]
use crate::net::api::ApiClient;
use crate::net::types::Credentials;
use crate::state::auth::{AdminSession, AuthState};
use crate::util::auth::dashboard_path;
#[cfg(feature = "hydrate")]
use crate::util::liveness::use_liveness;
#[cfg(feature = "hydrate")]
use crate::util::storage::SharedStore;

/// Trim and check the login form.
///
/// # Errors
///
/// A message for the form when either field is unusable.
pub fn validate_credentials(email: &str, password: &str) -> Result<Credentials, String> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.".to_owned());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.".to_owned());
    }
    Ok(Credentials { email: email.to_owned(), password: password.to_owned() })
}

/// Admin console landing path for a stored admin user object.
pub fn admin_home_path(user: Option<&serde_json::Value>) -> String {
    let id = user
        .and_then(|u| u.get("id"))
        .and_then(|id| match id {
            serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .unwrap_or_else(|| "console".to_owned());
    format!("/admin/{id}/")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let (api, store, alive) = (expect_context::<ApiClient>(), expect_context::<SharedStore>(), use_liveness());

    // Already signed in: go straight to the dashboard.
    Effect::new(move || {
        let state = auth.get();
        if !state.is_pending() && state.user.is_some() {
            navigate(&dashboard_path(state.user.as_ref()), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(c) => c,
            Err(message) => {
                info.set(message);
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let (api, store, alive) = (api.clone(), store.clone(), alive.clone());
            leptos::task::spawn_local(async move {
                let message = match api.login(&credentials).await {
                    Ok(resp) => {
                        log::info!("signed in as {}", resp.user.id());
                        auth.update(|a| a.sign_in(resp.token, resp.user, store.as_dyn()));
                        String::new()
                    }
                    Err(e) => format!("Sign-in failed: {e}"),
                };
                if alive.is_alive() {
                    info.set(message);
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Kamioi"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <div class="login-divider"></div>
                <a href="/demo" class="login-button login-button--secondary">"Explore the demo"</a>
                <a href="/admin-login" class="login-card__admin-link">"Admin sign-in"</a>
            </div>
        </div>
    }
}

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    let admin = expect_context::<RwSignal<AdminSession>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();
    #[cfg(feature = "hydrate")]
    let (api, store, alive) = (expect_context::<ApiClient>(), expect_context::<SharedStore>(), use_liveness());

    Effect::new(move || {
        let session = admin.get();
        if session.is_present() {
            navigate(&admin_home_path(session.user.as_ref()), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(c) => c,
            Err(message) => {
                info.set(message);
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let (api, store, alive) = (api.clone(), store.clone(), alive.clone());
            leptos::task::spawn_local(async move {
                let message = match api.admin_login(&credentials).await {
                    Ok(resp) => {
                        log::info!("admin session started");
                        admin.update(|s| s.sign_in(resp.token, resp.user, store.as_dyn()));
                        String::new()
                    }
                    Err(e) => format!("Admin sign-in failed: {e}"),
                };
                if alive.is_alive() {
                    info.set(message);
                    busy.set(false);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = credentials;
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Kamioi Admin"</h1>
                <p class="login-card__subtitle">"Staff access only"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="admin@kamioi.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
