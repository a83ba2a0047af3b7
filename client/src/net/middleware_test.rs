use super::*;
use crate::util::storage::{KeyValueStore, MemoryStore};

// =============================================================
// HostRewrite
// =============================================================

#[test]
fn host_rewrite_replaces_legacy_hosts_off_localhost() {
    let rewrite = HostRewrite::new("https://kamioi.com", false);
    let req = rewrite.transform(OutgoingRequest::get("http://localhost:4000/api/blog/posts"));
    assert_eq!(req.url, "https://kamioi.com/api/blog/posts");

    let req = rewrite.transform(OutgoingRequest::get("http://localhost:5111/api/frontend-content"));
    assert_eq!(req.url, "https://kamioi.com/api/frontend-content");
}

#[test]
fn host_rewrite_handles_schemeless_host() {
    let rewrite = HostRewrite::new("https://kamioi.com/", false);
    let req = rewrite.transform(OutgoingRequest::get("//localhost:4000/img/a.png"));
    assert_eq!(req.url, "//kamioi.com/img/a.png");
}

#[test]
fn host_rewrite_is_inactive_on_localhost() {
    let rewrite = HostRewrite::new("https://kamioi.com", true);
    let req = rewrite.transform(OutgoingRequest::get("http://localhost:4000/api/blog/posts"));
    assert_eq!(req.url, "http://localhost:4000/api/blog/posts");
}

#[test]
fn host_rewrite_leaves_other_urls_alone() {
    let rewrite = HostRewrite::new("https://kamioi.com", false);
    let req = rewrite.transform(OutgoingRequest::get("/api/blog/posts"));
    assert_eq!(req.url, "/api/blog/posts");
}

// =============================================================
// AdminBearer
// =============================================================

fn store_with_token() -> MemoryStore {
    let store = MemoryStore::new();
    store.set(STORAGE_ADMIN_TOKEN, "secret");
    store
}

#[test]
fn admin_bearer_injects_on_admin_paths() {
    let bearer = AdminBearer::new(SharedStore::new(store_with_token()));
    let req = bearer.transform(OutgoingRequest::get("/api/admin/demo-requests"));
    assert_eq!(req.header("authorization"), Some("Bearer secret"));
}

#[test]
fn admin_bearer_skips_non_admin_paths() {
    let bearer = AdminBearer::new(SharedStore::new(store_with_token()));
    let req = bearer.transform(OutgoingRequest::get("/api/blog/posts"));
    assert_eq!(req.header("Authorization"), None);
}

#[test]
fn admin_bearer_keeps_existing_authorization() {
    let bearer = AdminBearer::new(SharedStore::new(store_with_token()));
    let req = bearer.transform(OutgoingRequest::get("/api/admin/x").with_header("Authorization", "Bearer other"));
    assert_eq!(req.header("Authorization"), Some("Bearer other"));
    assert_eq!(req.headers.len(), 1);
}

#[test]
fn admin_bearer_without_token_is_noop() {
    let bearer = AdminBearer::new(SharedStore::new(MemoryStore::new()));
    let req = bearer.transform(OutgoingRequest::get("/api/admin/x"));
    assert!(req.headers.is_empty());
}

#[test]
fn admin_bearer_reads_token_at_request_time() {
    let store = MemoryStore::new();
    let bearer = AdminBearer::new(SharedStore::new(store.clone()));
    assert_eq!(bearer.transform(OutgoingRequest::get("/api/admin/x")).header("Authorization"), None);
    store.set(STORAGE_ADMIN_TOKEN, "late");
    assert_eq!(
        bearer.transform(OutgoingRequest::get("/api/admin/x")).header("Authorization"),
        Some("Bearer late")
    );
}

// =============================================================
// Middleware chain
// =============================================================

#[test]
fn chain_applies_transforms_in_order() {
    let middleware = Middleware::new()
        .with(HostRewrite::new("https://kamioi.com", false))
        .with(AdminBearer::new(SharedStore::new(store_with_token())));
    assert_eq!(middleware.len(), 2);

    let req = middleware.apply(OutgoingRequest::get("http://localhost:4000/api/admin/demo-requests"));
    assert_eq!(req.url, "https://kamioi.com/api/admin/demo-requests");
    assert_eq!(req.header("Authorization"), Some("Bearer secret"));
}

#[test]
fn empty_chain_is_identity() {
    let req = OutgoingRequest::post_json("/api/demo-requests", "{}".to_owned());
    assert_eq!(Middleware::new().apply(req.clone()), req);
}
