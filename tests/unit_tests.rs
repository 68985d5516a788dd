// Unit tests for TalentHub

use talenthub::core::{
    filters::{matches_experience, matches_location, matches_salary, matches_text, parse_salary_floor},
    fixtures::seed_candidates,
    ThemeStore,
};
use talenthub::models::{Candidate, FilterCriteria, IntakeSnapshot, SalaryThreshold, Theme, UploadMode};
use talenthub::services::FileIntake;

fn candidate_named(name: &str) -> Candidate {
    seed_candidates()
        .into_iter()
        .find(|c| c.name == name)
        .expect("fixture candidate")
}

#[test]
fn test_text_matches_name_role_and_skills() {
    let jane = candidate_named("Jane Smith");

    assert!(matches_text(&jane, "jane"));
    assert!(matches_text(&jane, "full stack"));
    assert!(matches_text(&jane, "POSTGRES"));
    assert!(!matches_text(&jane, "kubernetes"));
}

#[test]
fn test_text_does_not_search_email_or_location() {
    let jane = candidate_named("Jane Smith");

    assert!(!matches_text(&jane, "email.com"));
    assert!(!matches_text(&jane, "New York"));
}

#[test]
fn test_experience_token_is_loose() {
    let david = candidate_named("David Brown");

    assert!(matches_experience(&david, Some("6")));
    assert!(matches_experience(&david, Some("years")));
    // "5" is not a substring of "6 years", even though 6 >= 5
    assert!(!matches_experience(&david, Some("5")));
}

#[test]
fn test_location_substring() {
    let mike = candidate_named("Mike Johnson");

    assert!(matches_location(&mike, Some("Austin")));
    assert!(matches_location(&mike, Some("TX")));
    assert!(!matches_location(&mike, Some("Chicago")));
}

#[test]
fn test_fixture_salary_floors() {
    let floors: Vec<Option<u64>> = seed_candidates()
        .iter()
        .map(|c| parse_salary_floor(&c.salary))
        .collect();

    assert_eq!(
        floors,
        vec![Some(120_000), Some(100_000), Some(110_000), Some(90_000), Some(130_000)]
    );
}

#[test]
fn test_salary_boundary_is_inclusive() {
    let jane = candidate_named("Jane Smith");

    assert!(matches_salary(&jane, Some(SalaryThreshold::Over100k)));
}

#[test]
fn test_criteria_rejects_unknown_salary_token() {
    assert!(FilterCriteria::from_raw(None, None, Some("1m+")).is_err());
}

#[test]
fn test_theme_toggle_round_trip() {
    let store = ThemeStore::new(Theme::Light);

    store.toggle();
    store.toggle();

    assert_eq!(store.current(), Theme::Light);
}

#[test]
fn test_empty_intake_submission_changes_nothing() {
    let intake = FileIntake::default();

    let snapshot = tokio_test::block_on(intake.submit(vec![], UploadMode::Single)).unwrap();

    assert_eq!(snapshot, IntakeSnapshot::default());
    assert!(!intake.is_busy());
}
