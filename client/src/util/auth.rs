//! Route guard decisions and redirect wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every guarded route resolves to render, wait, or redirect through the pure
//! functions below. Components only translate the outcome into a view or a
//! navigation, so the rules stay identical across routes.
//!
//! Guards never surface an error. While the session is still being restored
//! they report `Pending`, which prevents a reload from bouncing a signed-in
//! user to `/login` before storage has been read.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::{AdminSession, AuthState, Role, SessionUser};

pub const LOGIN_PATH: &str = "/login";

/// Result of evaluating a guard for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Session restore has not finished; show a loading placeholder.
    Pending,
    Allow,
    Redirect(String),
}

/// Canonical landing page for a user.
pub fn dashboard_path(user: Option<&SessionUser>) -> String {
    let Some(user) = user else {
        return LOGIN_PATH.to_owned();
    };
    let id = user.route_id();
    match user.effective_role.as_ref() {
        Some(Role::Admin | Role::SuperAdmin) => format!("/admin/{id}/"),
        Some(Role::Business) => format!("/business/{id}/"),
        Some(Role::Family) => format!("/family/{id}/"),
        Some(Role::Individual | Role::User) => format!("/dashboard/{id}/"),
        Some(Role::Other(_)) | None => LOGIN_PATH.to_owned(),
    }
}

/// Guard for signed-in routes, optionally restricted to one role.
///
/// A signed-in user with the wrong role lands on their own dashboard, never
/// on `/login`.
pub fn protected_route(auth: &AuthState, required_role: Option<&Role>) -> GuardOutcome {
    if auth.is_pending() {
        return GuardOutcome::Pending;
    }
    let Some(user) = auth.user.as_ref() else {
        return GuardOutcome::Redirect(LOGIN_PATH.to_owned());
    };
    if let Some(required) = required_role {
        let satisfied = user.effective_role.as_ref().is_some_and(|role| role.satisfies(required));
        if !satisfied {
            return GuardOutcome::Redirect(dashboard_path(Some(user)));
        }
    }
    GuardOutcome::Allow
}

/// Guard for routes scoped to a user id in the path.
pub fn user_id_route(auth: &AuthState, path_id: &str, allow_admin: bool) -> GuardOutcome {
    if auth.is_pending() {
        return GuardOutcome::Pending;
    }
    let Some(user) = auth.user.as_ref() else {
        return GuardOutcome::Redirect(LOGIN_PATH.to_owned());
    };
    if user.matches_path_id(path_id) || (allow_admin && user.is_admin()) {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect(dashboard_path(Some(user)))
    }
}

/// Guard for the admin console. Independent of the primary session, but still
/// waits for restore to finish.
pub fn admin_route(auth: &AuthState, admin: &AdminSession) -> GuardOutcome {
    if auth.is_pending() {
        return GuardOutcome::Pending;
    }
    if admin.is_present() {
        GuardOutcome::Allow
    } else {
        GuardOutcome::Redirect(LOGIN_PATH.to_owned())
    }
}

/// Navigate whenever `outcome` resolves to a redirect.
pub fn install_guard_redirect<F>(outcome: Memo<GuardOutcome>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let GuardOutcome::Redirect(path) = outcome.get() {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
