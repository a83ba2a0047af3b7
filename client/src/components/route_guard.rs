//! Route guard wrappers.
//!
//! Each guard evaluates a pure decision from `util::auth` reactively. Pending
//! renders a placeholder, allow renders the children, and a redirect
//! navigates with `replace` so the back button skips the refused route.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::state::auth::{AdminSession, AuthState, Role};
use crate::util::auth::{GuardOutcome, admin_route, install_guard_redirect, protected_route, user_id_route};

#[component]
fn GuardView(outcome: Memo<GuardOutcome>, children: ChildrenFn) -> impl IntoView {
    move || match outcome.get() {
        GuardOutcome::Allow => children().into_any(),
        GuardOutcome::Pending => view! { <div class="route-loading">"Loading..."</div> }.into_any(),
        GuardOutcome::Redirect(_) => view! { <div class="route-loading">"Redirecting..."</div> }.into_any(),
    }
}

/// Signed-in routes, optionally restricted to one role.
#[component]
pub fn ProtectedRoute(#[prop(optional)] role: Option<Role>, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let outcome = Memo::new(move |_| auth.with(|a| protected_route(a, role.as_ref())));
    install_guard_redirect(outcome, use_navigate());
    view! { <GuardView outcome=outcome children=children /> }
}

/// Routes whose `:id` segment must name the signed-in user.
#[component]
pub fn UserIdRoute(#[prop(optional)] allow_admin: bool, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let outcome = Memo::new(move |_| {
        let path_id = params.with(|p| p.get("id").unwrap_or_default());
        auth.with(|a| user_id_route(a, &path_id, allow_admin))
    });
    install_guard_redirect(outcome, use_navigate());
    view! { <GuardView outcome=outcome children=children /> }
}

/// Admin console routes, gated on the separate admin session.
#[component]
pub fn AdminRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let admin = expect_context::<RwSignal<AdminSession>>();
    let outcome = Memo::new(move |_| auth.with(|a| admin.with(|s| admin_route(a, s))));
    install_guard_redirect(outcome, use_navigate());
    view! { <GuardView outcome=outcome children=children /> }
}
