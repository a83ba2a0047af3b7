//! Notification dropdown, transient toasts, and the `notify` helper used by
//! pages to report outcomes.

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationKind, NotificationState};
use crate::util::clock::now_ms;

/// How long a toast stays on screen.
pub const TOAST_MS: f64 = 5_000.0;

/// Record a notification; it also shows as a toast until [`TOAST_MS`] passes.
pub fn notify(
    notifications: RwSignal<NotificationState>,
    kind: NotificationKind,
    title: impl Into<String>,
    message: impl Into<String>,
) {
    let (title, message) = (title.into(), message.into());
    notifications.update(|n| {
        n.push(kind, title, message, now_ms());
    });
}

fn kind_class(kind: NotificationKind) -> String {
    format!("notification--{}", kind.as_str())
}

#[component]
pub fn NotificationCenter() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    view! {
        <div class="notification-center" on:click=move |ev| ev.stop_propagation()>
            <div class="notification-center__header">
                <span>"Notifications"</span>
                <button class="btn btn--link" on:click=move |_| notifications.update(NotificationState::mark_all_read)>
                    "Mark all read"
                </button>
                <button class="btn btn--link" on:click=move |_| notifications.update(NotificationState::clear)>
                    "Clear"
                </button>
            </div>
            <Show
                when=move || notifications.with(|n| !n.items.is_empty())
                fallback=|| view! { <p class="notification-center__empty">"You're all caught up."</p> }
            >
                <ul class="notification-center__list">
                    <For
                        each=move || notifications.get().items
                        key=|n| (n.id.clone(), n.read)
                        children=move |n: Notification| {
                            let id = n.id.clone();
                            let remove_id = n.id.clone();
                            view! {
                                <li
                                    class=format!("notification {}", kind_class(n.kind))
                                    class:notification--unread=!n.read
                                    on:click=move |_| notifications.update(|s| s.mark_read(&id))
                                >
                                    <strong class="notification__title">{n.title}</strong>
                                    <p class="notification__message">{n.message}</p>
                                    <button
                                        class="btn btn--icon notification__remove"
                                        title="Dismiss"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            notifications.update(|s| s.remove(&remove_id));
                                        }
                                    >
                                        "×"
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

/// Transient stack of recent unread notifications.
#[component]
pub fn Toasts() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();
    let now = RwSignal::new(now_ms());

    #[cfg(feature = "hydrate")]
    {
        let alive = crate::util::liveness::use_liveness();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_secs(1)).await;
                if !alive.is_alive() {
                    break;
                }
                now.set(now_ms());
            }
        });
    }

    let visible = move || {
        let since = now.get() - TOAST_MS;
        notifications.with(|n| n.recent_unread(since).cloned().collect::<Vec<_>>())
    };

    view! {
        <div class="toasts" aria-live="polite">
            <For
                each=visible
                key=|n| n.id.clone()
                children=move |n: Notification| {
                    let id = n.id.clone();
                    view! {
                        <div class=format!("toast {}", kind_class(n.kind))>
                            <strong class="toast__title">{n.title}</strong>
                            <span class="toast__message">{n.message}</span>
                            <button
                                class="btn btn--icon toast__close"
                                title="Dismiss"
                                on:click=move |_| notifications.update(|s| s.mark_read(&id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
