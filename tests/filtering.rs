//! Integration tests for search and status filtering.

use chess_arena_web::pages::Competitions;
use chess_arena_web::{filter, search, Competition, CompetitionStatus, PageError, Seed, StatusFilter};

fn competition(id: u32, name: &str, status: CompetitionStatus) -> Competition {
    Competition {
        id,
        name: name.to_string(),
        participants: 16,
        prize: "$1K".to_string(),
        status,
        days_left: 3,
        description: format!("{name} description"),
        start_date: "2024-01-01".to_string(),
        end_date: "2024-01-02".to_string(),
    }
}

fn seeded() -> Vec<Competition> {
    Seed::load().unwrap().competitions
}

#[test]
fn status_filter_keeps_only_matching_records() {
    let records = vec![
        competition(1, "A", CompetitionStatus::Live),
        competition(2, "B", CompetitionStatus::Upcoming),
    ];
    let result = filter(&records, "", &StatusFilter::Only(CompetitionStatus::Upcoming));
    assert_eq!(result, vec![&records[1]]);
}

#[test]
fn empty_query_and_all_returns_everything_in_order() {
    let records = seeded();
    let result: Vec<Competition> = filter(&records, "", &StatusFilter::All)
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(result, records);
}

#[test]
fn filtered_view_is_an_order_preserving_subsequence() {
    let records = seeded();
    let statuses = [
        StatusFilter::All,
        StatusFilter::Only(CompetitionStatus::Live),
        StatusFilter::Only(CompetitionStatus::Upcoming),
        StatusFilter::Only(CompetitionStatus::Registration),
        StatusFilter::Only(CompetitionStatus::Completed),
    ];
    for query in ["", "chess", "BLITZ", "tournament", "zzz", " rapid "] {
        for status in &statuses {
            let result = filter(&records, query, status);
            let mut last_index = None;
            for r in &result {
                let index = records.iter().position(|c| c.id == r.id).unwrap();
                assert!(last_index.map_or(true, |last| index > last), "order broken for {query:?}");
                last_index = Some(index);
                assert!(status.matches(r.status));
                let needle = query.to_lowercase();
                assert!(
                    r.name.to_lowercase().contains(&needle)
                        || r.description.to_lowercase().contains(&needle)
                );
            }
        }
    }
}

#[test]
fn search_is_case_insensitive_over_description() {
    let records = seeded();
    let names: Vec<&str> = search(&records, "LIGHTNING")
        .into_iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Blitz Masters"]);
}

#[test]
fn surrounding_whitespace_is_part_of_the_query() {
    let players = Seed::load().unwrap().players;
    let names: Vec<&str> = search(&players, "carlsen")
        .into_iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["Magnus Carlsen"]);
    assert!(search(&players, "carlsen ").is_empty());
    assert!(search(&players, "   ").is_empty());
    assert_eq!(search(&players, "").len(), players.len());
}

#[test]
fn status_filter_parses_sentinel_and_statuses() {
    assert_eq!(StatusFilter::<CompetitionStatus>::parse("all"), Ok(StatusFilter::All));
    assert_eq!(StatusFilter::<CompetitionStatus>::parse(""), Ok(StatusFilter::All));
    assert_eq!(
        StatusFilter::parse("registration"),
        Ok(StatusFilter::Only(CompetitionStatus::Registration))
    );
    assert!(StatusFilter::<CompetitionStatus>::parse("finished").is_err());
}

#[test]
fn competitions_page_combines_query_and_status() {
    let page = Competitions::new(&seeded());
    let view = page.view("championship", "upcoming").unwrap();
    let names: Vec<&str> = view
        .competitions
        .iter()
        .map(|e| e.competition.name.as_str())
        .collect();
    assert_eq!(names, vec!["Women's Grand Prix"]);
    assert!(!view.empty);

    let none = page.view("checkers", "all").unwrap();
    assert!(none.empty);

    assert!(matches!(
        page.view("", "finished"),
        Err(PageError::UnknownOption { field: "status", .. })
    ));
}

#[test]
fn completed_competitions_have_disabled_results_button_and_no_countdown() {
    let page = Competitions::new(&seeded());
    let view = page.view("", "completed").unwrap();
    assert_eq!(view.competitions.len(), 1);
    let entry = &view.competitions[0];
    assert_eq!(entry.badge, "COMPLETED");
    assert_eq!(entry.action, "View Results");
    assert!(!entry.action_enabled);
    assert_eq!(entry.countdown, None);

    let live = page.view("", "live").unwrap();
    assert_eq!(live.competitions[0].countdown.as_deref(), Some("Ends in 5 days"));
    assert_eq!(live.competitions[0].action, "Join Live");
}
