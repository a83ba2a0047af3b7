use super::*;
use crate::state::demo_data::{FAMILY_PORTFOLIO_TOTAL, lookup};

#[test]
fn format_currency_groups_thousands() {
    assert_eq!(format_currency(12_487.52), "$12,487.52");
    assert_eq!(format_currency(186_940.12), "$186,940.12");
    assert_eq!(format_currency(1_000_000.0), "$1,000,000.00");
}

#[test]
fn format_currency_small_and_negative() {
    assert_eq!(format_currency(0.55), "$0.55");
    assert_eq!(format_currency(0.0), "$0.00");
    assert_eq!(format_currency(-3.1), "-$3.10");
}

#[test]
fn goal_percent_is_clamped() {
    let goal = |current, target| Goal { current, target, ..Goal::default() };
    assert_eq!(goal_percent(&goal(3_250.0, 5_000.0)), 65);
    assert_eq!(goal_percent(&goal(9_000.0, 5_000.0)), 100);
    assert_eq!(goal_percent(&goal(10.0, 0.0)), 0);
}

#[test]
fn family_fixture_parses_every_section() {
    let record = lookup("family", None).unwrap();
    let data = DashboardData::from_value(&record);
    assert_eq!(data.name, "The Nakamura Family");
    assert!((data.portfolio.total_value - FAMILY_PORTFOLIO_TOTAL).abs() < f64::EPSILON);
    assert_eq!(data.portfolio.holdings.len(), 4);
    assert_eq!(data.members.len(), 3);
    assert!(data.employees.is_empty());
    assert_eq!(data.transactions[0].member.as_deref(), Some("Maya"));
    assert!((data.transactions[0].round_up - 0.63).abs() < f64::EPSILON);
}

#[test]
fn business_fixture_has_employees() {
    let data = DashboardData::from_value(&lookup("business", None).unwrap());
    assert_eq!(data.employees.len(), 3);
    assert!(!data.employees[2].enrolled);
}

#[test]
fn malformed_section_only_blanks_itself() {
    let record = serde_json::json!({
        "portfolio": {"totalValue": 10.0},
        "transactions": "not a list",
        "goals": [{"id": "g", "title": "Trip", "target": 100.0, "current": 25.0}]
    });
    let data = DashboardData::from_value(&record);
    assert!((data.portfolio.total_value - 10.0).abs() < f64::EPSILON);
    assert!(data.transactions.is_empty());
    assert_eq!(data.goals.len(), 1);
    assert_eq!(data.name, "");
}

#[test]
fn tutorial_ids_match_step_tables() {
    for kind in Persona::ALL {
        assert!(crate::state::tutorial_steps::steps_for(tutorial_id_for(kind)).is_some());
    }
}

#[test]
fn demo_record_follows_the_page_kind() {
    let family = DashboardData::from_value(&demo_record(Persona::Family).unwrap());
    assert_eq!(family.members.len(), 3);
    assert!(family.employees.is_empty());

    let business = DashboardData::from_value(&demo_record(Persona::Business).unwrap());
    assert!(business.members.is_empty());
    assert!(!business.employees.is_empty());
}
