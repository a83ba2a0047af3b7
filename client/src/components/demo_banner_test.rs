use super::*;

#[test]
fn switching_persona_on_sample_dashboard_follows_the_route() {
    assert_eq!(persona_switch_target("/demo/family", Persona::Business).as_deref(), Some("/demo/business"));
}

#[test]
fn switching_persona_elsewhere_stays_put() {
    assert_eq!(persona_switch_target("/demo", Persona::Business), None);
    assert_eq!(persona_switch_target("/family/42", Persona::Business), None);
}
