use super::*;

fn post(json: serde_json::Value) -> BlogPost {
    serde_json::from_value(json).unwrap()
}

#[test]
fn format_post_date_from_iso_timestamp() {
    assert_eq!(format_post_date("2026-09-28T14:00:00Z"), "Sep 28, 2026");
    assert_eq!(format_post_date("2026-01-05"), "Jan 5, 2026");
}

#[test]
fn format_post_date_passes_through_garbage() {
    assert_eq!(format_post_date("last week"), "last week");
    assert_eq!(format_post_date("2026-13-01"), "2026-13-01");
}

#[test]
fn byline_joins_present_parts() {
    let p = post(serde_json::json!({
        "id": 7, "slug": "s", "title": "T",
        "author": "Jordan Lee", "published_at": "2026-09-28", "read_time": 4
    }));
    assert_eq!(post_byline(&p), "Jordan Lee · Sep 28, 2026 · 4 min read");
}

#[test]
fn byline_skips_missing_parts() {
    let p = post(serde_json::json!({"id": "a", "slug": "s", "title": "T", "read_time": 0}));
    assert_eq!(post_byline(&p), "");
}

#[test]
fn categories_start_with_all() {
    assert_eq!(CATEGORIES[0].0, "all");
}
