//! Site header: primary navigation, theme and demo toggles, notifications,
//! and the session menu.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::notification_center::NotificationCenter;
use crate::state::auth::AuthState;
use crate::state::demo::DemoState;
use crate::state::notifications::NotificationState;
use crate::state::ui::UiState;
use crate::util::auth::{LOGIN_PATH, dashboard_path};
use crate::util::storage::SharedStore;

const LINKS: &[(&str, &str)] = &[("/", "Home"), ("/features", "Features"), ("/pricing", "Pricing"), ("/blog", "Blog")];

/// Badge text for the bell; hidden when nothing is unread.
fn unread_badge(count: usize) -> Option<String> {
    match count {
        0 => None,
        1..=99 => Some(count.to_string()),
        _ => Some("99+".to_owned()),
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let demo = expect_context::<RwSignal<DemoState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let store = expect_context::<SharedStore>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    // Any navigation closes open overlays.
    Effect::new(move || {
        pathname.track();
        ui.update(UiState::close_overlays);
    });

    let theme_store = store.clone();
    let on_theme = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get_untracked().dark_mode, theme_store.as_dyn());
        ui.update(|u| u.dark_mode = next);
    };

    let demo_store = store.clone();
    let on_demo = move |_| demo.update(|d| d.toggle(demo_store.as_dyn()));

    let logout_store = store;
    let on_logout = move |_| {
        auth.update(|a| a.sign_out(logout_store.as_dyn()));
        log::info!("signed out");
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    let dashboard_href = move || auth.with(|a| dashboard_path(a.user.as_ref()));
    let signed_in = move || auth.with(|a| a.user.is_some());
    let unread = move || notifications.with(NotificationState::unread_count);

    view! {
        <header class="navbar">
            <a href="/" class="navbar__brand">"Kamioi"</a>
            <button
                class="btn navbar__menu-toggle"
                aria-label="Menu"
                on:click=move |_| ui.update(|u| u.mobile_menu_open = !u.mobile_menu_open)
            >
                "☰"
            </button>
            <nav class="navbar__links" class:navbar__links--open=move || ui.get().mobile_menu_open>
                {LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <a
                                href=href
                                class="navbar__link"
                                class:navbar__link--active=move || pathname.get() == href
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <span class="navbar__spacer"></span>

            <button
                class="btn navbar__demo-toggle"
                class:navbar__demo-toggle--on=move || demo.get().active
                on:click=on_demo
                title="Toggle demo mode"
            >
                {move || if demo.get().active { "Demo: on" } else { "Demo: off" }}
            </button>

            <button class="btn navbar__dark-toggle" on:click=on_theme title="Toggle dark mode">
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>

            <div class="navbar__notifications">
                <button
                    class="btn navbar__bell"
                    on:click=move |_| ui.update(UiState::toggle_notifications)
                    title="Notifications"
                >
                    "🔔"
                    {move || {
                        unread_badge(unread()).map(|label| view! { <span class="navbar__badge">{label}</span> })
                    }}
                </button>
                <Show when=move || ui.get().notifications_open>
                    <NotificationCenter />
                </Show>
            </div>

            <Show
                when=signed_in
                fallback=|| view! { <a href="/login" class="btn navbar__login">"Sign in"</a> }
            >
                <a href=dashboard_href class="navbar__self">
                    {move || auth.with(|a| a.user.as_ref().map(|u| u.display_name().to_owned()).unwrap_or_default())}
                </a>
                <button class="btn navbar__logout" on:click=on_logout.clone() title="Logout">
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
