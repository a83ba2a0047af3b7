use super::*;
use crate::state::demo_data::FAMILY_PORTFOLIO_TOTAL;
use crate::util::storage::MemoryStore;

#[test]
fn persona_parses_known_ids_only() {
    assert_eq!("family".parse::<Persona>(), Ok(Persona::Family));
    assert!("retiree".parse::<Persona>().is_err());
    assert_eq!(Persona::Business.to_string(), "business");
}

#[test]
fn load_defaults_when_storage_empty() {
    let store = MemoryStore::new();
    assert_eq!(DemoState::load(&store), DemoState { active: false, persona: Persona::Individual });
}

#[test]
fn enable_persists_flag_and_persona() {
    let store = MemoryStore::new();
    let mut demo = DemoState::default();
    demo.enable(Persona::Business, &store);

    assert_eq!(store.get(STORAGE_DEMO_MODE).as_deref(), Some("true"));
    assert_eq!(store.get(STORAGE_DEMO_ACCOUNT_TYPE).as_deref(), Some("business"));
    assert_eq!(DemoState::load(&store), demo);
}

#[test]
fn disable_and_toggle_mirror_to_storage() {
    let store = MemoryStore::new();
    let mut demo = DemoState::default();
    demo.enable(Persona::Family, &store);
    demo.disable(&store);
    assert_eq!(store.get(STORAGE_DEMO_MODE).as_deref(), Some("false"));

    demo.toggle(&store);
    assert!(demo.active);
    assert!(DemoState::load(&store).active);
    assert_eq!(DemoState::load(&store).persona, Persona::Family);
}

#[test]
fn unknown_stored_persona_falls_back_to_individual() {
    let store = MemoryStore::new();
    store.set(STORAGE_DEMO_ACCOUNT_TYPE, "retiree");
    store.set(STORAGE_DEMO_MODE, "true");
    let demo = DemoState::load(&store);
    assert!(demo.active);
    assert_eq!(demo.persona, Persona::Individual);
}

#[test]
fn family_portfolio_total_matches_fixture() {
    let demo = DemoState { active: true, persona: Persona::Family };
    let portfolio = demo.get_data(Some("portfolio")).unwrap();
    let total = portfolio["totalValue"].as_f64().unwrap();
    assert!((total - FAMILY_PORTFOLIO_TOTAL).abs() < f64::EPSILON);
}

#[test]
fn full_record_contains_persona_specific_sections() {
    let family = DemoState { active: true, persona: Persona::Family }.get_data(None).unwrap();
    assert!(family.get("members").is_some());
    let business = DemoState { active: true, persona: Persona::Business }.get_data(None).unwrap();
    assert!(business.get("employees").is_some());
}

#[test]
fn lookup_unknown_persona_or_section_is_none() {
    assert!(demo_data::lookup("retiree", Some("portfolio")).is_none());
    assert!(demo_data::lookup("retiree", None).is_none());
    assert!(demo_data::lookup("individual", Some("employees")).is_none());
}
