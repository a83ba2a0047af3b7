use super::*;

#[test]
fn push_inserts_newest_first_and_unread() {
    let mut state = NotificationState::default();
    let first = state.push(NotificationKind::Info, "One", "first", 1.0);
    let second = state.push(NotificationKind::Success, "Two", "second", 2.0);

    assert_ne!(first, second);
    assert_eq!(state.items[0].id, second);
    assert_eq!(state.items[1].id, first);
    assert_eq!(state.unread_count(), 2);
}

#[test]
fn mark_read_and_mark_all_read() {
    let mut state = NotificationState::default();
    let a = state.push(NotificationKind::Warning, "A", "", 1.0);
    state.push(NotificationKind::Error, "B", "", 2.0);

    state.mark_read(&a);
    assert_eq!(state.unread_count(), 1);
    state.mark_read("unknown");
    assert_eq!(state.unread_count(), 1);
    state.mark_all_read();
    assert_eq!(state.unread_count(), 0);
}

#[test]
fn remove_and_clear() {
    let mut state = NotificationState::default();
    let a = state.push(NotificationKind::Info, "A", "", 1.0);
    state.push(NotificationKind::Info, "B", "", 2.0);
    state.remove(&a);
    assert_eq!(state.items.len(), 1);
    state.clear();
    assert!(state.items.is_empty());
}

#[test]
fn list_is_capped() {
    let mut state = NotificationState::default();
    for i in 0..(MAX_NOTIFICATIONS + 5) {
        state.push(NotificationKind::Info, format!("n{i}"), "", f64::from(u32::try_from(i).unwrap()));
    }
    assert_eq!(state.items.len(), MAX_NOTIFICATIONS);
    assert_eq!(state.items[0].title, format!("n{}", MAX_NOTIFICATIONS + 4));
}

#[test]
fn recent_unread_filters_by_time_and_read_flag() {
    let mut state = NotificationState::default();
    state.push(NotificationKind::Info, "old", "", 10.0);
    let fresh = state.push(NotificationKind::Info, "fresh", "", 100.0);
    let read = state.push(NotificationKind::Info, "read", "", 110.0);
    state.mark_read(&read);

    let ids: Vec<&str> = state.recent_unread(50.0).map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec![fresh.as_str()]);
}

#[test]
fn kind_strings_match_css_modifiers() {
    assert_eq!(NotificationKind::Success.as_str(), "success");
    assert_eq!(NotificationKind::Error.as_str(), "error");
}
