use super::*;

fn filled() -> DemoRequestForm {
    DemoRequestForm { name: " Ana Ruiz ".into(), email: "ana@example.com".into(), ..DemoRequestForm::default() }
}

#[test]
fn minimal_form_is_valid() {
    let request = filled().validate().unwrap();
    assert_eq!(request.name, "Ana Ruiz");
    assert_eq!(request.email, "ana@example.com");
    assert_eq!(request.phone, None);
    assert_eq!(request.memo, None);
}

#[test]
fn blank_optional_fields_are_omitted_from_body() {
    let mut form = filled();
    form.address = "   ".into();
    form.interest_type = "family".into();
    let body = serde_json::to_value(form.validate().unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({"name": "Ana Ruiz", "email": "ana@example.com", "interest_type": "family"}));
}

#[test]
fn missing_name_is_reported_first() {
    let form = DemoRequestForm { email: "nope".into(), ..DemoRequestForm::default() };
    assert_eq!(form.validate().unwrap_err(), "Please enter your name.");
}

#[test]
fn email_must_look_like_an_address() {
    for bad in ["ana", "ana@", "@example.com", "ana@example", "ana@example."] {
        let form = DemoRequestForm { email: bad.into(), ..filled() };
        assert_eq!(form.validate().unwrap_err(), "Please enter a valid email address.", "{bad}");
    }
}

#[test]
fn phone_is_checked_when_present() {
    let ok = DemoRequestForm { phone: "+1 (555) 010-2000".into(), ..filled() };
    assert_eq!(ok.validate().unwrap().phone.as_deref(), Some("+1 (555) 010-2000"));
    let bad = DemoRequestForm { phone: "call me".into(), ..filled() };
    assert_eq!(bad.validate().unwrap_err(), "Please enter a valid phone number.");
}

#[test]
fn failed_validation_leaves_input_untouched() {
    let form = DemoRequestForm { email: "bad".into(), memo: "hello".into(), ..filled() };
    let before = form.clone();
    assert!(form.validate().is_err());
    assert_eq!(form, before);
}

#[test]
fn demo_paths_use_persona_ids() {
    assert_eq!(demo_dashboard_path(Persona::Family), "/demo/family");
    assert_eq!(demo_dashboard_path(Persona::Individual), "/demo/individual");
}
