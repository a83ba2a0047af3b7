use super::*;

#[test]
fn validate_trims_email() {
    let creds = validate_credentials("  ana@kamioi.com ", "hunter2").unwrap();
    assert_eq!(creds.email, "ana@kamioi.com");
    assert_eq!(creds.password, "hunter2");
}

#[test]
fn validate_rejects_missing_fields() {
    assert_eq!(validate_credentials("", "x").unwrap_err(), "Enter both email and password.");
    assert_eq!(validate_credentials("a@b.c", "").unwrap_err(), "Enter both email and password.");
}

#[test]
fn validate_rejects_malformed_email() {
    assert_eq!(validate_credentials("ana", "pw").unwrap_err(), "Enter a valid email address.");
}

#[test]
fn admin_home_path_uses_user_id() {
    assert_eq!(admin_home_path(Some(&serde_json::json!({"id": 3}))), "/admin/3/");
    assert_eq!(admin_home_path(Some(&serde_json::json!({"id": "ops"}))), "/admin/ops/");
}

#[test]
fn admin_home_path_without_id_falls_back() {
    assert_eq!(admin_home_path(None), "/admin/console/");
    assert_eq!(admin_home_path(Some(&serde_json::json!({"id": ""}))), "/admin/console/");
}
