//! Integration tests for the list store, the inline edit controller and the leaderboard page.

use chess_arena_web::pages::{Leaderboard, PlayerDraftPatch};
use chess_arena_web::{
    EditController, EditSession, EntityList, PageError, PlayerDraft, PointsStep, RankedPlayer,
};

fn player(id: u32, name: &str, rating: u32, points: f64) -> RankedPlayer {
    RankedPlayer {
        id,
        name: name.to_string(),
        rating,
        rank: id,
        points,
        country: String::new(),
    }
}

fn board() -> Leaderboard {
    Leaderboard::new(vec![
        player(1, "Magnus Carlsen", 2847, 12.5),
        player(2, "Fabiano Caruana", 2820, 11.0),
        player(3, "Ding Liren", 2810, 0.5),
    ])
}

#[test]
fn commit_renames_the_edited_player() {
    let mut list = EntityList::seeded(vec![player(1, "Magnus", 2847, 0.0)]);
    let mut edit = EditController::new();
    assert!(edit.begin(&list, 1));
    edit.draft_mut().unwrap().name = "Magnus C.".to_string();

    assert_eq!(edit.commit(&mut list), Some(1));

    assert_eq!(list.get(), &[player(1, "Magnus C.", 2847, 0.0)]);
    assert_eq!(edit.session(), &EditSession::Idle);
}

#[test]
fn commit_leaves_other_records_untouched() {
    let mut b = board();
    let before = b.players().to_vec();
    b.begin_edit(2).unwrap();
    b.update_draft(PlayerDraftPatch {
        name: Some("F. Caruana".to_string()),
        rating: Some("2830".to_string()),
    })
    .unwrap();
    b.commit_edit().unwrap();

    let after = b.players();
    assert_eq!(after[0], before[0]);
    assert_eq!(after[2], before[2]);
    assert_eq!(after[1].name, "F. Caruana");
    assert_eq!(after[1].rating, 2830);
    assert_eq!(after[1].points, before[1].points);
    assert_eq!(after[1].rank, before[1].rank);
}

#[test]
fn cancel_restores_pre_edit_state() {
    let mut b = board();
    let before = b.players().to_vec();
    b.begin_edit(1).unwrap();
    b.update_draft(PlayerDraftPatch {
        name: Some("Someone Else".to_string()),
        rating: None,
    })
    .unwrap();
    b.cancel_edit();

    assert_eq!(b.players(), before.as_slice());
    assert_eq!(b.edit_session(), &EditSession::Idle);
}

#[test]
fn new_edit_replaces_open_draft() {
    let mut b = board();
    b.begin_edit(1).unwrap();
    b.update_draft(PlayerDraftPatch {
        name: Some("Draft for one".to_string()),
        rating: None,
    })
    .unwrap();
    b.begin_edit(3).unwrap();

    match b.edit_session() {
        EditSession::Editing { id, draft } => {
            assert_eq!(*id, 3);
            assert_eq!(
                draft,
                &PlayerDraft {
                    name: "Ding Liren".to_string(),
                    rating: 2810
                }
            );
        }
        EditSession::Idle => panic!("expected an open edit"),
    }
    b.commit_edit().unwrap();
    assert_eq!(b.players()[0].name, "Magnus Carlsen");
}

#[test]
fn invalid_rating_input_becomes_zero() {
    let mut b = board();
    b.begin_edit(1).unwrap();
    b.update_draft(PlayerDraftPatch {
        name: None,
        rating: Some("twenty-eight hundred".to_string()),
    })
    .unwrap();
    b.commit_edit().unwrap();
    assert_eq!(b.players()[0].rating, 0);
}

#[test]
fn editing_requires_an_existing_player_and_an_open_session() {
    let mut b = board();
    assert_eq!(b.begin_edit(42), Err(PageError::RecordNotFound(42)));
    assert_eq!(b.edit_session(), &EditSession::Idle);
    assert_eq!(b.commit_edit(), Err(PageError::NotEditing));
    assert_eq!(
        b.update_draft(PlayerDraftPatch::default()),
        Err(PageError::NotEditing)
    );
}

#[test]
fn points_never_drop_below_zero() {
    let mut b = board();
    assert_eq!(b.change_points(3, PointsStep::Down), Ok(0.0));
    assert_eq!(b.change_points(3, PointsStep::Down), Ok(0.0));
    assert_eq!(b.change_points(3, PointsStep::Up), Ok(0.5));
    assert_eq!(b.change_points(1, PointsStep::Up), Ok(13.0));
    assert_eq!(
        b.change_points(9, PointsStep::Up),
        Err(PageError::RecordNotFound(9))
    );
}

#[test]
fn ids_are_not_reused_after_removal() {
    let mut list = EntityList::seeded(vec![player(1, "A", 1, 0.0), player(2, "B", 2, 0.0)]);
    assert!(list.remove(2));
    assert!(!list.remove(2));
    let id = list.add(|id| player(id, "C", 3, 0.0));
    assert_eq!(id, 3);
    let ids: Vec<u32> = list.get().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn update_on_missing_id_is_a_no_op() {
    let mut list = EntityList::seeded(vec![player(1, "A", 1, 0.0)]);
    let before = list.get().to_vec();
    assert!(!list.update(5, |p| p.name = "changed".to_string()));
    assert_eq!(list.get(), before.as_slice());
}

#[test]
fn commit_after_target_removed_writes_nothing() {
    let mut list = EntityList::seeded(vec![player(1, "A", 1, 0.0), player(2, "B", 2, 0.0)]);
    let mut edit = EditController::new();
    edit.begin(&list, 2);
    list.remove(2);
    assert_eq!(edit.commit(&mut list), None);
    assert!(!edit.is_editing());
    assert_eq!(list.len(), 1);
}

#[test]
fn search_view_counts_matches() {
    let b = Leaderboard::new(vec![
        RankedPlayer {
            country: "Norway".to_string(),
            ..player(1, "Magnus Carlsen", 2847, 12.5)
        },
        RankedPlayer {
            country: "USA".to_string(),
            ..player(2, "Fabiano Caruana", 2820, 11.0)
        },
        RankedPlayer {
            country: "USA".to_string(),
            ..player(3, "Wesley So", 2770, 9.0)
        },
    ]);
    let view = b.view("usa");
    assert_eq!(view.shown, 2);
    assert_eq!(view.total, 3);
    assert_eq!(view.rows[0].player.id, 2);
    assert_eq!(view.rows[1].initials, "WS");
}

#[test]
fn filtered_view_after_mutation_keeps_the_search() {
    let mut b = Leaderboard::new(vec![
        RankedPlayer {
            country: "Norway".to_string(),
            ..player(1, "Magnus Carlsen", 2847, 12.5)
        },
        RankedPlayer {
            country: "USA".to_string(),
            ..player(2, "Fabiano Caruana", 2820, 11.0)
        },
    ]);
    b.change_points(2, PointsStep::Up).unwrap();
    b.begin_edit(2).unwrap();

    let view = b.view("usa");
    assert_eq!((view.shown, view.total), (1, 2));
    assert_eq!(view.rows[0].player.points, 11.5);
    assert!(view.rows[0].editing);
}
