//! Session state: the signed-in user, their token, and the separate admin
//! session.
//!
//! DESIGN
//! ======
//! The backend stores the dashboard type in either `dashboard` or `role`
//! depending on account age. Both are folded into a single `effective_role`
//! when the record is deserialized, so guards never look at the raw fields.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

use crate::config::{STORAGE_ADMIN_TOKEN, STORAGE_ADMIN_USER, STORAGE_TOKEN, STORAGE_USER};
use crate::net::types::{deserialize_id, deserialize_opt_id};
use crate::util::storage::{KeyValueStore, load_json, save_json};

/// Dashboard type of an account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Admin,
    SuperAdmin,
    Business,
    Family,
    Individual,
    User,
    Other(String),
}

impl Role {
    /// Parse a raw role/dashboard string. Matching is case-insensitive.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Self::Admin,
            "superadmin" => Self::SuperAdmin,
            "business" => Self::Business,
            "family" => Self::Family,
            "individual" => Self::Individual,
            "user" => Self::User,
            other => Self::Other(other.to_owned()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::SuperAdmin => "superadmin",
            Self::Business => "business",
            Self::Family => "family",
            Self::Individual => "individual",
            Self::User => "user",
            Self::Other(raw) => raw,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }

    /// Whether this role may enter a route that requires `required`.
    ///
    /// `superadmin` passes `admin` routes and `user` passes `individual`
    /// routes; each pair shares a dashboard, so rejecting would loop.
    pub fn satisfies(&self, required: &Role) -> bool {
        match (self, required) {
            (Self::SuperAdmin, Self::Admin) | (Self::User, Self::Individual) | (Self::Individual, Self::User) => true,
            (have, want) => have == want,
        }
    }
}

/// User record exactly as the backend and `localStorage` carry it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_opt_id", skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Signed-in user with the role already normalized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "UserRecord", into = "UserRecord")]
pub struct SessionUser {
    pub record: UserRecord,
    pub effective_role: Option<Role>,
}

impl From<UserRecord> for SessionUser {
    fn from(record: UserRecord) -> Self {
        let present = |raw: &Option<String>| raw.as_deref().filter(|r| !r.trim().is_empty()).map(Role::parse);
        let effective_role = present(&record.dashboard).or_else(|| present(&record.role));
        Self { record, effective_role }
    }
}

impl From<SessionUser> for UserRecord {
    fn from(user: SessionUser) -> Self {
        user.record
    }
}

impl SessionUser {
    pub fn id(&self) -> &str {
        &self.record.id
    }

    pub fn account_number(&self) -> Option<&str> {
        self.record.account_number.as_deref().filter(|n| !n.is_empty())
    }

    /// Identifier used in dashboard URLs: account number when present, else id.
    pub fn route_id(&self) -> &str {
        self.account_number().unwrap_or(&self.record.id)
    }

    pub fn is_admin(&self) -> bool {
        self.effective_role.as_ref().is_some_and(Role::is_admin)
    }

    /// Whether a path segment names this user.
    pub fn matches_path_id(&self, path_id: &str) -> bool {
        self.record.id == path_id || self.account_number() == Some(path_id)
    }

    pub fn display_name(&self) -> &str {
        self.record
            .name
            .as_deref()
            .or(self.record.email.as_deref())
            .unwrap_or("Investor")
    }
}

/// Authentication state tracking the current user and restore progress.
///
/// `initialized` stays false until the persisted session has been read in the
/// browser; guards wait on it so a reload never flashes a login redirect.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub token: Option<String>,
    pub loading: bool,
    pub initialized: bool,
}

impl AuthState {
    /// Restore the persisted session.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        let token = store.get(STORAGE_TOKEN).filter(|t| !t.is_empty());
        let user = load_json::<SessionUser>(store, STORAGE_USER);
        Self { user, token, loading: false, initialized: true }
    }

    /// Persist a fresh login.
    pub fn sign_in(&mut self, token: String, user: SessionUser, store: &dyn KeyValueStore) {
        store.set(STORAGE_TOKEN, &token);
        save_json(store, STORAGE_USER, &user);
        self.token = Some(token);
        self.user = Some(user);
        self.loading = false;
        self.initialized = true;
    }

    pub fn sign_out(&mut self, store: &dyn KeyValueStore) {
        store.remove(STORAGE_TOKEN);
        store.remove(STORAGE_USER);
        self.token = None;
        self.user = None;
        self.loading = false;
    }

    /// Guards must neither render nor redirect while this is true.
    pub fn is_pending(&self) -> bool {
        !self.initialized || self.loading
    }
}

/// Admin console session, tracked independently of the primary session.
#[derive(Clone, Debug, Default)]
pub struct AdminSession {
    pub token: Option<String>,
    pub user: Option<serde_json::Value>,
}

impl AdminSession {
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        let token = store.get(STORAGE_ADMIN_TOKEN).filter(|t| !t.is_empty());
        let user = load_json::<serde_json::Value>(store, STORAGE_ADMIN_USER).filter(|v| !v.is_null());
        Self { token, user }
    }

    pub fn sign_in(&mut self, token: String, user: serde_json::Value, store: &dyn KeyValueStore) {
        store.set(STORAGE_ADMIN_TOKEN, &token);
        save_json(store, STORAGE_ADMIN_USER, &user);
        self.token = Some(token);
        self.user = Some(user);
    }

    pub fn sign_out(&mut self, store: &dyn KeyValueStore) {
        store.remove(STORAGE_ADMIN_TOKEN);
        store.remove(STORAGE_ADMIN_USER);
        self.token = None;
        self.user = None;
    }

    pub fn is_present(&self) -> bool {
        self.token.is_some() || self.user.is_some()
    }
}
