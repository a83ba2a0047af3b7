use super::*;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("k", "v");
    assert_eq!(store.get("k").as_deref(), Some("v"));
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn memory_store_clones_share_entries() {
    let store = MemoryStore::new();
    let other = store.clone();
    store.set("shared", "1");
    assert_eq!(other.get("shared").as_deref(), Some("1"));
}

#[test]
fn json_helpers_tolerate_malformed_values() {
    let store = MemoryStore::new();
    store.set("list", "[not json");
    assert_eq!(load_json::<Vec<String>>(&store, "list"), None);

    save_json(&store, "list", &vec!["a".to_owned(), "b".to_owned()]);
    assert_eq!(load_json::<Vec<String>>(&store, "list"), Some(vec!["a".to_owned(), "b".to_owned()]));
}

#[test]
fn flags_round_through_string_values() {
    let store = MemoryStore::new();
    save_flag(&store, "f", true);
    assert_eq!(store.get("f").as_deref(), Some("true"));
    assert_eq!(load_flag(&store, "f"), Some(true));
    save_flag(&store, "f", false);
    assert_eq!(load_flag(&store, "f"), Some(false));
    store.set("f", "yes");
    assert_eq!(load_flag(&store, "f"), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_noop_without_hydrate() {
    let store = BrowserStore;
    store.set("k", "v");
    assert_eq!(store.get("k"), None);
    store.remove("k");
}

#[test]
fn shared_store_exposes_inner_store() {
    let memory = MemoryStore::new();
    let shared = SharedStore::new(memory.clone());
    shared.as_dyn().set("k", "v");
    assert_eq!(memory.get("k").as_deref(), Some("v"));
}
