use super::*;

#[test]
fn local_hosts_are_recognized() {
    assert!(is_local_host("localhost"));
    assert!(is_local_host("127.0.0.1"));
    assert!(!is_local_host("kamioi.com"));
    assert!(!is_local_host("localhost.kamioi.com"));
}

#[test]
fn api_base_uses_local_backend_only_on_localhost() {
    assert_eq!(api_base_for_host("localhost"), LOCAL_API_ORIGIN);
    assert_eq!(api_base_for_host("app.kamioi.com"), "");
}

#[test]
fn cache_windows_match_policy() {
    assert!((CACHE_STALE_MS - 300_000.0).abs() < f64::EPSILON);
    assert!((CACHE_RETAIN_MS - 600_000.0).abs() < f64::EPSILON);
    assert_eq!(FETCH_RETRIES, 1);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn page_location_defaults_to_localhost_outside_browser() {
    let (hostname, _) = page_location();
    assert!(is_local_host(&hostname));
}
