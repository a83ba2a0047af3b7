use super::*;
use crate::util::storage::MemoryStore;

fn dashboard_len() -> usize {
    steps_for("dashboard").unwrap().len()
}

#[test]
fn key_joins_user_type_and_tutorial_id() {
    assert_eq!(tutorial_key("family", "dashboard"), "family_dashboard");
}

#[test]
fn start_enters_step_zero() {
    let mut state = TutorialState::default();
    state.start("dashboard", "individual").unwrap();
    assert!(state.is_active());
    assert_eq!(state.progress(), Some((1, dashboard_len())));
    assert_eq!(state.current_step().unwrap().target, ".dashboard-summary");
}

#[test]
fn start_unknown_tutorial_fails() {
    let mut state = TutorialState::default();
    assert_eq!(
        state.start("missing", "individual"),
        Err(TutorialError::UnknownTutorial("missing".to_owned()))
    );
    assert!(!state.is_active());
}

#[test]
fn complete_then_start_again_fails() {
    let store = MemoryStore::new();
    let mut state = TutorialState::default();
    state.start("dashboard", "individual").unwrap();
    state.complete(&store);

    assert!(!state.is_active());
    assert_eq!(
        state.start("dashboard", "individual"),
        Err(TutorialError::AlreadyCompleted("individual_dashboard".to_owned()))
    );
    assert!(!state.is_active());
}

#[test]
fn completion_is_scoped_per_user_type() {
    let store = MemoryStore::new();
    let mut state = TutorialState::default();
    state.start("dashboard", "individual").unwrap();
    state.complete(&store);
    assert!(state.start("dashboard", "family").is_ok());
}

#[test]
fn reset_then_start_succeeds() {
    let store = MemoryStore::new();
    let mut state = TutorialState::default();
    state.start("dashboard", "individual").unwrap();
    state.complete(&store);
    state.reset("dashboard", "individual", &store);
    assert!(state.start("dashboard", "individual").is_ok());
    assert!(TutorialState::load(&store).completed.is_empty());
}

#[test]
fn next_past_last_step_completes_like_skip() {
    let store = MemoryStore::new();
    let mut stepped = TutorialState::default();
    stepped.start("dashboard", "individual").unwrap();
    for _ in 0..dashboard_len() {
        stepped.next(&store);
    }
    assert!(!stepped.is_active());

    let skip_store = MemoryStore::new();
    let mut skipped = TutorialState::default();
    skipped.start("dashboard", "individual").unwrap();
    skipped.skip(&skip_store);

    assert_eq!(stepped.completed, skipped.completed);
    assert_eq!(
        store.get(STORAGE_COMPLETED_TUTORIALS),
        skip_store.get(STORAGE_COMPLETED_TUTORIALS)
    );
}

#[test]
fn next_before_last_step_only_advances() {
    let store = MemoryStore::new();
    let mut state = TutorialState::default();
    state.start("dashboard", "individual").unwrap();
    state.next(&store);
    assert_eq!(state.progress(), Some((2, dashboard_len())));
    assert!(state.completed.is_empty());
}

#[test]
fn prev_is_floored_at_zero() {
    let store = MemoryStore::new();
    let mut state = TutorialState::default();
    state.start("family", "family").unwrap();
    state.prev();
    assert_eq!(state.progress().map(|(step, _)| step), Some(1));
    state.next(&store);
    state.prev();
    assert_eq!(state.progress().map(|(step, _)| step), Some(1));
}

#[test]
fn completed_set_persists_as_json_array() {
    let store = MemoryStore::new();
    let mut state = TutorialState::default();
    state.start("business", "business").unwrap();
    state.skip(&store);

    assert_eq!(store.get(STORAGE_COMPLETED_TUTORIALS).as_deref(), Some(r#"["business_business"]"#));
    let reloaded = TutorialState::load(&store);
    assert!(reloaded.is_completed("business", "business"));
    assert!(!reloaded.is_active());
}

#[test]
fn transitions_while_idle_are_noops() {
    let store = MemoryStore::new();
    let mut state = TutorialState::default();
    state.next(&store);
    state.prev();
    state.skip(&store);
    assert_eq!(state, TutorialState::default());
    assert!(store.is_empty());
}
