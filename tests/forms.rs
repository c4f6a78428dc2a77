//! Integration tests for the form collector, tournament registration and match scheduling.

use chess_arena_web::models::{ExperienceLevel, MatchStatus};
use chess_arena_web::pages::{JoinTournament, RegistrationFields, ScheduleMatch, SCHEDULE_FORM};
use chess_arena_web::{EntityList, FieldViolation, FormCollector, PageError, Seed, ViolationKind};
use chrono::NaiveDate;
use std::collections::BTreeMap;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
}

fn fields(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn join_page() -> JoinTournament {
    JoinTournament::new(&Seed::load().unwrap().offers)
}

fn schedule_page() -> ScheduleMatch {
    ScheduleMatch::new(&Seed::load().unwrap().scheduled_matches)
}

fn complete_schedule_fields() -> BTreeMap<String, String> {
    fields(&[
        ("opponent", "BlitzKing"),
        ("date", "2024-02-01"),
        ("time", "18:30"),
        ("time_control", "3+2"),
        ("game_type", "blitz"),
        ("notes", "Sicilian only"),
    ])
}

#[test]
fn unknown_field_is_rejected() {
    let mut form = FormCollector::new(&SCHEDULE_FORM);
    let err = form.set_field("favourite_piece", "knight").unwrap_err();
    assert_eq!(err.kind, ViolationKind::UnknownField);
    assert_eq!(form.value("favourite_piece"), "");
}

#[test]
fn blank_required_fields_block_submit_without_mutation() {
    let mut page = schedule_page();
    let before = page.matches().to_vec();
    page.set_fields(fields(&[("opponent", "   "), ("time", "10:00")]))
        .unwrap();

    let err = page.submit(today()).unwrap_err();
    let PageError::Validation(violations) = err else {
        panic!("expected validation error");
    };
    let missing: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(missing, vec!["opponent", "date", "time_control", "game_type"]);
    assert_eq!(page.matches(), before.as_slice());
    assert_eq!(page.form().value("time"), "10:00");
}

#[test]
fn scheduling_appends_pending_match_and_resets_form() {
    let mut page = schedule_page();
    page.set_fields(complete_schedule_fields()).unwrap();

    let id = page.submit(today()).unwrap();

    assert_eq!(id, 4);
    let added = page.matches().last().unwrap();
    assert_eq!(added.opponent, "BlitzKing");
    assert_eq!(added.date, "2024-02-01");
    assert_eq!(added.status, MatchStatus::Pending);
    assert_eq!(added.notes, "Sicilian only");
    assert_eq!(page.form().value("opponent"), "");
}

#[test]
fn schedule_rejects_past_dates_and_unknown_options() {
    let mut page = schedule_page();
    let mut f = complete_schedule_fields();
    f.insert("date".to_string(), "2023-12-31".to_string());
    f.insert("time_control".to_string(), "7+7".to_string());
    f.insert("game_type".to_string(), "armageddon".to_string());
    page.set_fields(f).unwrap();

    let Err(PageError::Validation(violations)) = page.submit(today()) else {
        panic!("expected validation error");
    };
    let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
    assert_eq!(fields, vec!["date", "time_control", "game_type"]);
    assert_eq!(page.matches().len(), 3);
}

#[test]
fn schedule_rejects_today() {
    let mut page = schedule_page();
    let mut f = complete_schedule_fields();
    f.insert("date".to_string(), "2024-01-10".to_string());
    page.set_fields(f).unwrap();

    let Err(PageError::Validation(violations)) = page.submit(today()) else {
        panic!("expected validation error");
    };
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "date");
    assert!(matches!(violations[0].kind, ViolationKind::Invalid(_)));
    assert_eq!(page.matches().len(), 3);

    let mut f = complete_schedule_fields();
    f.insert("date".to_string(), "2024-01-11".to_string());
    page.set_fields(f).unwrap();
    assert_eq!(page.submit(today()), Ok(4));
}

#[test]
fn deleted_match_ids_are_not_reused() {
    let mut page = schedule_page();
    page.delete(3).unwrap();
    assert_eq!(page.delete(3), Err(PageError::RecordNotFound(3)));
    page.set_fields(complete_schedule_fields()).unwrap();
    let id = page.submit(today()).unwrap();
    assert_eq!(id, 4);
    let ids: Vec<u32> = page.matches().iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);
}

#[test]
fn registration_needs_a_selected_tournament() {
    let mut page = join_page();
    let Err(PageError::Validation(violations)) = page.submit() else {
        panic!("expected validation error");
    };
    assert_eq!(violations, vec![FieldViolation::missing("tournament")]);
    assert!(matches!(
        page.select("classical"),
        Err(PageError::UnknownOption { field: "tournament", .. })
    ));
}

#[test]
fn registration_requires_consent() {
    let mut page = join_page();
    page.select("blitz").unwrap();
    page.set_fields(RegistrationFields {
        fields: fields(&[
            ("full_name", "Alex Johnson"),
            ("email", "alex@example.com"),
            ("rating", "2156"),
        ]),
        agree_terms: None,
    })
    .unwrap();
    assert!(!page.form().can_submit());

    let Err(PageError::Validation(violations)) = page.submit() else {
        panic!("expected validation error");
    };
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, "agree_terms");
    assert_eq!(violations[0].kind, ViolationKind::ConsentRequired);
    assert!(page.registrations().is_empty());
}

#[test]
fn registration_is_recorded_and_form_reset() {
    let mut page = join_page();
    page.select("junior").unwrap();
    page.set_fields(RegistrationFields {
        fields: fields(&[
            ("full_name", "  Alex Johnson "),
            ("email", "alex@example.com"),
            ("rating", "abc"),
            ("experience", "advanced"),
        ]),
        agree_terms: Some(true),
    })
    .unwrap();
    assert!(page.form().can_submit());

    let id = page.submit().unwrap();

    let reg = &page.registrations()[0];
    assert_eq!(reg.id, id);
    assert_eq!(reg.tournament, "junior");
    assert_eq!(reg.full_name, "Alex Johnson");
    assert_eq!(reg.rating, 0);
    assert_eq!(reg.experience, Some(ExperienceLevel::Advanced));
    assert_eq!(page.form().value("email"), "");
    assert!(!page.form().consent());
    assert_eq!(page.selected().map(|o| o.slug.as_str()), Some("junior"));
}

#[test]
fn registration_rejects_malformed_email() {
    let mut page = join_page();
    page.select("rapid").unwrap();
    page.set_fields(RegistrationFields {
        fields: fields(&[
            ("full_name", "Alex"),
            ("email", "alex.example.com"),
            ("rating", "2000"),
        ]),
        agree_terms: Some(true),
    })
    .unwrap();
    let Err(PageError::Validation(violations)) = page.submit() else {
        panic!("expected validation error");
    };
    assert_eq!(violations[0].field, "email");
    assert_eq!(page.form().value("email"), "alex.example.com");
}

#[test]
fn collector_submit_passes_the_minted_id_to_the_builder() {
    use chess_arena_web::models::Achievement;
    use chess_arena_web::FormSchema;

    static FORM: FormSchema = FormSchema {
        fields: &["title"],
        required: &["title"],
        consent: None,
    };
    let mut list: EntityList<Achievement> = EntityList::new();
    let mut form = FormCollector::new(&FORM);
    form.set_field("title", "First Victory").unwrap();
    let id = form
        .submit(&mut list, |id, f| {
            Ok(Achievement {
                id,
                title: f.value("title").to_string(),
                description: String::new(),
                earned: String::new(),
                icon: String::new(),
            })
        })
        .unwrap();
    assert_eq!(id, 1);
    assert_eq!(list.find(1).map(|a| a.title.as_str()), Some("First Victory"));
}
