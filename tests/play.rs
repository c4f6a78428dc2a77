//! Integration tests for the start-playing page and the opponent search timer.

use chess_arena_web::models::GameType;
use chess_arena_web::pages::{StartPlaying, DEFAULT_RATING_RANGE};
use chess_arena_web::{PageError, SearchDurations, SearchTimer, Seed};
use std::time::Duration;

fn fast() -> SearchDurations {
    SearchDurations {
        search: Duration::from_millis(30),
        quick_match: Duration::from_millis(20),
    }
}

fn page(durations: SearchDurations) -> StartPlaying {
    StartPlaying::new(&Seed::load().unwrap().online_users, durations)
}

#[tokio::test]
async fn search_timer_clears_flag_after_duration() {
    let mut timer = SearchTimer::new();
    assert!(!timer.is_searching());
    timer.start(Duration::from_millis(20));
    assert!(timer.is_searching());
    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!timer.is_searching());
}

#[tokio::test]
async fn cancelled_search_stays_cancelled() {
    let mut timer = SearchTimer::new();
    timer.start(Duration::from_millis(20));
    timer.cancel();
    assert!(!timer.is_searching());
    tokio::time::sleep(Duration::from_millis(80)).await;
    assert!(!timer.is_searching());
}

#[tokio::test]
async fn restarting_search_extends_it() {
    let mut timer = SearchTimer::new();
    timer.start(Duration::from_millis(30));
    timer.start(Duration::from_secs(10));
    tokio::time::sleep(Duration::from_millis(120)).await;
    assert!(timer.is_searching());
    timer.cancel();
}

#[tokio::test]
async fn search_needs_game_type_and_time_control() {
    let mut p = page(fast());
    assert_eq!(p.start_search(), Err(PageError::SearchNotReady));
    p.select_game_type("blitz").unwrap();
    assert!(!p.can_search());
    assert_eq!(p.start_search(), Err(PageError::SearchNotReady));
    p.select_time_control("3+2").unwrap();
    assert!(p.can_search());

    p.start_search().unwrap();
    assert!(p.is_searching());
    assert!(!p.can_search());
    assert_eq!(p.start_search(), Err(PageError::AlreadySearching));

    tokio::time::sleep(Duration::from_millis(150)).await;
    assert!(!p.is_searching());
}

#[tokio::test]
async fn quick_match_has_no_prerequisites() {
    let mut p = page(fast());
    p.quick_match();
    assert!(p.is_searching());
    p.cancel_search();
    assert!(!p.is_searching());
}

#[test]
fn changing_game_type_drops_foreign_time_control() {
    let mut p = page(fast());
    assert!(matches!(
        p.select_time_control("3+2"),
        Err(PageError::UnknownOption { field: "time_control", .. })
    ));
    p.select_game_type("rapid").unwrap();
    p.select_time_control("15+10").unwrap();
    p.select_game_type("classical").unwrap();
    assert_eq!(p.game_type(), Some(GameType::Classical));
    assert_eq!(p.time_control(), None);
    assert!(p.select_time_control("15+10").is_err());
    assert!(p.select_game_type("chess960").is_err());
}

#[test]
fn rating_range_is_clamped_snapped_and_ordered() {
    let mut p = page(fast());
    assert_eq!(p.rating_range(), DEFAULT_RATING_RANGE);
    assert_eq!(p.set_rating_range(2430, 1976), (2000, 2450));
    assert_eq!(p.set_rating_range(100, 9000), (800, 3000));
}

#[test]
fn only_waiting_players_can_be_challenged() {
    let mut p = page(fast());
    assert_eq!(p.looking_for_game(), 4);
    p.challenge(1).unwrap();
    p.challenge(1).unwrap();
    assert_eq!(p.challenges(), &[1]);
    assert_eq!(p.challenge(2), Err(PageError::NotChallengeable(2)));
    assert_eq!(p.challenge(99), Err(PageError::RecordNotFound(99)));

    let view = p.view();
    assert!(view.online_users[0].challenged);
    assert!(!view.online_users[1].challengeable);
    assert!(view.time_controls.is_empty());
}
