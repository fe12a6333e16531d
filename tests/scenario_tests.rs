//! End-to-end play scenarios.
//!
//! Each test drives a real level through `GameSession` (or the table and
//! generator directly) and checks the observable table state.

mod common;

use tripeaks_core::{
    evaluate, generate, Action, CardId, GameStatus, LevelDescription, Placement, Rank,
    Rejection, RuleConfig, Suit, TableState, Zone, STANDARD_DECK_SIZE,
};

fn rank(value: u8) -> Rank {
    Rank::new(value).unwrap()
}

// =============================================================================
// Deck and Generation
// =============================================================================

#[test]
fn test_standard_deck_init() {
    let table = TableState::standard();

    assert_eq!(table.len(), STANDARD_DECK_SIZE);
    assert!(table.all_cards().iter().all(|c| c.zone == Zone::Deck));
    assert!(table.all_cards().iter().all(|c| !c.face_up));
    assert_eq!(table.top_discard(), None);
    assert_eq!(table.draw_stack_size(), 0);
}

#[test]
fn test_generation_splits_discard_and_stack() {
    common::init_tracing();
    let level = LevelDescription::new(3)
        .with_playfield(Placement::new(5, 0).at(250.0, 1000.0).face_up(true))
        .with_stack(Placement::new(4, 2))
        .with_stack(Placement::new(9, 3));

    let mut table = TableState::new();
    let report = generate(&mut table, &level, &RuleConfig::default()).unwrap();

    let four = table.find(rank(4), Suit::Hearts).unwrap();
    let nine = table.find(rank(9), Suit::Spades).unwrap();
    assert_eq!(table.top_discard(), Some(four));
    assert_eq!(table.draw_stack_size(), 1);
    assert_eq!(table.peek_next_draw(), Some(nine));

    let nine = table.card(nine).unwrap();
    assert_eq!(nine.zone, Zone::Deck);
    assert!(!nine.face_up);

    assert_eq!(report.placed_playfield, 1);
    assert_eq!(report.drawn, 1);
    assert_eq!(table.playfield_count(), 1);
    assert_eq!(table.cards_in(Zone::Removed).count(), STANDARD_DECK_SIZE - 3);
    assert_eq!(table.check_invariants(), Ok(()));
}

// =============================================================================
// Moves and Draws
// =============================================================================

#[test]
fn test_move_then_undo() {
    let mut session = common::session_for(&common::small_level());
    let four = session.table().find(rank(4), Suit::Clubs).unwrap();
    let five = session.table().find(rank(5), Suit::Clubs).unwrap();
    let playfield_before = session.table().playfield_count();

    let outcome = session.request_move_to_discard(five);
    assert!(outcome.is_applied());
    assert_eq!(session.table().top_discard(), Some(five));
    assert_eq!(session.table().playfield_count(), playfield_before - 1);

    let outcome = session.request_undo();
    assert_eq!(
        outcome.change().map(|c| c.action),
        Some(Action::Undo(tripeaks_core::CommandKind::MoveToDiscard))
    );
    assert_eq!(session.table().top_discard(), Some(four));
    assert_eq!(session.table().playfield_count(), playfield_before);
}

#[test]
fn test_draw_then_undo() {
    let level = LevelDescription::new(4)
        .with_playfield(Placement::new(10, 2).at(100.0, 900.0).face_up(true))
        .with_stack(Placement::new(4, 0))
        .with_stack(Placement::new(9, 0));
    let mut session = common::session_for(&level);
    let four = session.table().find(rank(4), Suit::Clubs).unwrap();
    let nine = session.table().find(rank(9), Suit::Clubs).unwrap();
    assert_eq!(session.table().draw_stack_size(), 1);

    let outcome = session.request_draw();
    assert_eq!(outcome.change().map(|c| c.card), Some(nine));
    let drawn = session.table().card(nine).unwrap();
    assert_eq!(drawn.zone, Zone::Discard);
    assert!(drawn.face_up);
    assert_eq!(session.table().draw_stack_size(), 0);

    assert!(session.request_undo().is_applied());
    assert_eq!(session.table().draw_stack_size(), 1);
    assert_eq!(session.table().peek_next_draw(), Some(nine));
    let restored = session.table().card(nine).unwrap();
    assert_eq!(restored.zone, Zone::Deck);
    assert!(!restored.face_up);
    assert_eq!(session.table().top_discard(), Some(four));
}

#[test]
fn test_covered_card_cannot_move() {
    let mut session = common::session_for(&common::small_level());
    let six = session.table().find(rank(6), Suit::Clubs).unwrap();

    assert_eq!(
        session.request_move_to_discard(six).rejection(),
        Some(&Rejection::FaceDown(six))
    );
}

// =============================================================================
// Win and Loss
// =============================================================================

#[test]
fn test_deadlock_is_loss() {
    let level = LevelDescription::new(5)
        .with_playfield(Placement::new(10, 0).at(100.0, 900.0).face_up(true))
        .with_stack(Placement::new(4, 0));
    let session = common::session_for(&level);

    assert_eq!(session.table().draw_stack_size(), 0);
    assert!(session.playable_cards().is_empty());
    assert_eq!(session.status(), GameStatus::Lost);
    assert_eq!(evaluate(session.table()), GameStatus::Lost);
}

#[test]
fn test_win_takes_precedence_over_loss() {
    let level = LevelDescription::new(6)
        .with_playfield(Placement::new(5, 0).at(100.0, 900.0).face_up(true))
        .with_stack(Placement::new(4, 0));
    let mut session = common::session_for(&level);
    let five = session.table().find(rank(5), Suit::Clubs).unwrap();

    let outcome = session.request_move_to_discard(five);

    // No draws and no playable cards remain, yet the empty playfield wins.
    assert_eq!(session.table().draw_stack_size(), 0);
    assert_eq!(outcome.change().map(|c| c.status), Some(GameStatus::Won));
    assert_eq!(session.status(), GameStatus::Won);
}

#[test]
fn test_full_small_level_playthrough() {
    let mut session = common::session_for(&common::small_level());

    assert!(session.request_move_to_discard(CardId(4)).is_applied());
    let outcome = session.request_move_to_discard(CardId(5));

    assert_eq!(outcome.change().map(|c| c.status), Some(GameStatus::Won));
    assert_eq!(session.table().draw_stack_size(), 2);
    assert_eq!(session.history_len(), 2);
    assert_eq!(session.table().check_invariants(), Ok(()));
}

#[test]
fn test_king_does_not_wrap_to_ace() {
    let level = LevelDescription::new(7)
        .with_playfield(Placement::new(1, 1).at(100.0, 900.0).face_up(true))
        .with_stack(Placement::new(13, 1));
    let mut session = common::session_for(&level);
    let ace = session.table().find(Rank::ACE, Suit::Diamonds).unwrap();
    let king = session.table().find(Rank::KING, Suit::Diamonds).unwrap();

    assert_eq!(
        session.request_move_to_discard(ace).rejection(),
        Some(&Rejection::RankMismatch { card: ace, top: king })
    );
    assert_eq!(session.status(), GameStatus::Lost);
}
