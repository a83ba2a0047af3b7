//! Client configuration: persisted storage keys, backend origin selection,
//! and query cache policy.
//!
//! DESIGN
//! ======
//! Everything environment-dependent is resolved from the page hostname at
//! startup so the same bundle runs against the local backend in development
//! and same-origin in production.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const STORAGE_TOKEN: &str = "kamioi_token";
pub const STORAGE_USER: &str = "kamioi_user";
pub const STORAGE_ADMIN_TOKEN: &str = "kamioi_admin_token";
pub const STORAGE_ADMIN_USER: &str = "kamioi_admin_user";
pub const STORAGE_DEMO_MODE: &str = "kamioi_demo_mode";
pub const STORAGE_DEMO_ACCOUNT_TYPE: &str = "kamioi_demo_account_type";
pub const STORAGE_COMPLETED_TUTORIALS: &str = "kamioi_completed_tutorials";
pub const STORAGE_DARK_MODE: &str = "kamioi_dark_mode";

/// Backend origin used while developing against a local API server.
pub const LOCAL_API_ORIGIN: &str = "http://localhost:4000";

/// Hosts that legacy code and stale content embed in absolute URLs.
pub const LEGACY_API_HOSTS: &[&str] = &["localhost:4000", "localhost:5111"];

/// Freshness window before a cached response is refetched.
pub const CACHE_STALE_MS: f64 = 5.0 * 60.0 * 1000.0;
/// Retention window before an unused cached response is dropped.
pub const CACHE_RETAIN_MS: f64 = 10.0 * 60.0 * 1000.0;
/// Extra attempts after a failed fetch.
pub const FETCH_RETRIES: u32 = 1;

/// Number of posts shown on the blog index.
pub const BLOG_PAGE_SIZE: u32 = 12;

/// Whether `hostname` is a local development host.
pub fn is_local_host(hostname: &str) -> bool {
    matches!(hostname, "localhost" | "127.0.0.1" | "0.0.0.0" | "[::1]")
}

/// Resolve the API base for a page served from `hostname`.
///
/// Local hosts talk to [`LOCAL_API_ORIGIN`]; everything else uses relative
/// same-origin paths (empty base).
pub fn api_base_for_host(hostname: &str) -> String {
    if is_local_host(hostname) {
        LOCAL_API_ORIGIN.to_owned()
    } else {
        String::new()
    }
}

/// Current page location as `(hostname, origin)`.
///
/// Outside the browser this reports `localhost` so SSR never rewrites hosts.
pub fn page_location() -> (String, String) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(location) = web_sys::window().map(|w| w.location()) {
            let hostname = location.hostname().unwrap_or_default();
            let origin = location.origin().unwrap_or_default();
            return (hostname, origin);
        }
    }
    ("localhost".to_owned(), "http://localhost".to_owned())
}
