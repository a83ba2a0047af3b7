use super::*;

#[test]
fn badge_hidden_without_unread() {
    assert_eq!(unread_badge(0), None);
}

#[test]
fn badge_shows_count() {
    assert_eq!(unread_badge(1).as_deref(), Some("1"));
    assert_eq!(unread_badge(99).as_deref(), Some("99"));
}

#[test]
fn badge_caps_large_counts() {
    assert_eq!(unread_badge(100).as_deref(), Some("99+"));
}
