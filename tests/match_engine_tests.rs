//! Match engine integration tests.
//!
//! These tests drive full rounds through the public API: the fixed
//! `[A, B, A, B]` scenario, rejection rules, sinks and restarts.

use rust_minigames::core::{GameKind, GameRng, RejectReason, RoundConfig, SymbolSet, Token};
use rust_minigames::deck::{Board, TileState};
use rust_minigames::engine::{MatchEngine, Phase, SelectOutcome};
use rust_minigames::feedback::{FeedbackEvent, InMemoryScoreStore, NullSink, Persist, RecordingSink, ScoreStore};
use rust_minigames::scoring::ScoringPolicy;

const A: Token = Token::new(0);
const B: Token = Token::new(1);

fn abab_config() -> RoundConfig {
    RoundConfig::new([A, B].into_iter().collect(), 4, ScoringPolicy::memory_match())
}

fn abab<S: rust_minigames::feedback::FeedbackSink>(sink: S) -> MatchEngine<S> {
    let board = Board::from_tokens([A, B, A, B]).unwrap();
    MatchEngine::from_board(abab_config(), board, sink).unwrap()
}

/// Clear whatever is left on the board without a wrong pick.
fn play_perfectly<S: rust_minigames::feedback::FeedbackSink>(engine: &mut MatchEngine<S>) {
    while !engine.is_complete() {
        let tile = *engine.board().iter().find(|t| t.is_hidden()).unwrap();
        let partner = engine.board().partner_of(tile.position).unwrap();
        engine.select(tile.position).unwrap();
        engine.select(partner).unwrap();
    }
}

// =============================================================================
// Scenario Tests
// =============================================================================

/// Walk the `[A, B, A, B]` board: one mismatch, then two matches.
#[test]
fn test_abab_scenario() {
    let mut engine = abab(NullSink);

    assert_eq!(engine.select(0), Ok(SelectOutcome::FirstReveal));
    assert_eq!(engine.phase(), Phase::OneRevealed);
    assert_eq!(engine.board().tiles()[0].state, TileState::Revealed);

    assert_eq!(engine.select(1), Ok(SelectOutcome::Mismatch { pair: [0, 1] }));
    assert_eq!(engine.round().mismatch_count, 1);
    assert_eq!(engine.board().tiles()[0].state, TileState::Hidden);
    assert_eq!(engine.board().tiles()[1].state, TileState::Hidden);
    assert_eq!(engine.phase(), Phase::Idle);

    assert_eq!(engine.select(0), Ok(SelectOutcome::FirstReveal));
    assert_eq!(
        engine.select(2),
        Ok(SelectOutcome::Match { pair: [0, 2], complete: false })
    );
    assert_eq!(engine.round().matched_pairs, 1);
    assert_eq!(engine.board().tiles()[0].state, TileState::Matched);
    assert_eq!(engine.board().tiles()[2].state, TileState::Matched);
    assert_eq!(engine.phase(), Phase::Idle);

    assert_eq!(engine.select(1), Ok(SelectOutcome::FirstReveal));
    assert_eq!(
        engine.select(3),
        Ok(SelectOutcome::Match { pair: [1, 3], complete: true })
    );
    assert_eq!(engine.round().matched_pairs, 2);
    assert_eq!(engine.phase(), Phase::Complete);

    let outcome = engine.outcome().unwrap();
    assert_eq!(outcome.game, GameKind::MemoryMatch);
    assert_eq!(outcome.mismatch_count, 1);
    assert_eq!(outcome.stars(), 5);
    assert_eq!(engine.round().attempts(), 3);
}

/// A round played from a seeded board finishes with all pairs matched.
#[test]
fn test_seeded_round_completes() {
    let config = RoundConfig::new(SymbolSet::range(12), 16, ScoringPolicy::memory_match());
    let mut engine = MatchEngine::new(config, &mut GameRng::new(2024)).unwrap();
    play_perfectly(&mut engine);

    assert_eq!(engine.round().matched_pairs, 8);
    assert_eq!(engine.hidden_tiles(), 0);
    assert_eq!(engine.board().count(TileState::Matched), 16);
    assert_eq!(engine.outcome().unwrap().mismatch_count, 0);
}

// =============================================================================
// Rejection Tests
// =============================================================================

/// Every rejection leaves the snapshot unchanged.
#[test]
fn test_rejections_never_mutate() {
    let mut engine = abab(RecordingSink::new());
    engine.select(0).unwrap();
    engine.select(2).unwrap();
    engine.select(1).unwrap();

    let before = engine.snapshot();
    let events_before = engine.sink().events().len();
    for (position, reason) in [
        (0, RejectReason::AlreadyMatched),
        (2, RejectReason::AlreadyMatched),
        (1, RejectReason::AlreadyRevealed),
        (4, RejectReason::OutOfRange { len: 4 }),
    ] {
        let err = engine.select(position).unwrap_err();
        assert_eq!(err.position, position);
        assert_eq!(err.reason, reason);
        assert_eq!(engine.snapshot(), before);
    }
    assert_eq!(engine.sink().events().len(), events_before);
}

/// Nothing is accepted once the round is complete.
#[test]
fn test_complete_round_rejects_everything() {
    let mut engine = abab(NullSink);
    for position in [0, 2, 1, 3] {
        engine.select(position).unwrap();
    }
    for position in 0..6 {
        assert_eq!(
            engine.select(position).unwrap_err().reason,
            RejectReason::RoundComplete
        );
    }
}

// =============================================================================
// Feedback Tests
// =============================================================================

/// Events arrive in order: flips, then the resolution, then completion.
#[test]
fn test_event_order() {
    let mut engine = abab(RecordingSink::new());
    for position in [0, 1, 0, 2, 1, 3] {
        engine.select(position).unwrap();
    }
    let sink = engine.into_sink();
    let names: Vec<&str> = sink.events().iter().map(FeedbackEvent::name).collect();
    assert_eq!(
        names,
        vec![
            "flip", "flip", "mismatch", "flip", "flip", "match", "flip", "flip", "match",
            "round-complete",
        ]
    );
}

/// A persisting sink records the outcome in the score store.
#[test]
fn test_outcome_reaches_score_store() {
    let sink = (RecordingSink::new(), Persist::new(InMemoryScoreStore::new()));
    let mut engine = abab(sink);
    for position in [0, 1, 0, 2, 1, 3] {
        engine.select(position).unwrap();
    }
    let (recorder, persist) = engine.into_sink();
    assert_eq!(recorder.count("round-complete"), 1);

    let store = persist.into_store();
    assert_eq!(store.best(GameKind::MemoryMatch).map(|g| g.stars()), Some(5));
    assert_eq!(store.get(GameKind::MemoryMatch).unwrap().plays, 1);
}

/// A borrowed sink can be inspected after the engine is dropped.
#[test]
fn test_borrowed_sink() {
    let mut recorder = RecordingSink::new();
    {
        let mut engine = abab(&mut recorder);
        engine.select(0).unwrap();
        engine.select(1).unwrap();
    }
    assert_eq!(recorder.count("mismatch"), 1);
}

// =============================================================================
// Restart Tests
// =============================================================================

/// Restarting deals a fresh board and keeps playing.
#[test]
fn test_restart_plays_again() {
    let config = RoundConfig::new(SymbolSet::range(8), 16, ScoringPolicy::memory_match());
    let mut rng = GameRng::new(99);
    let mut engine = MatchEngine::with_sink(config, &mut rng, RecordingSink::new()).unwrap();
    play_perfectly(&mut engine);
    assert!(engine.is_complete());

    engine.restart(&mut rng).unwrap();
    assert_eq!(engine.phase(), Phase::Idle);
    assert_eq!(engine.hidden_tiles(), 16);
    assert!(engine.outcome().is_none());

    play_perfectly(&mut engine);
    assert_eq!(engine.sink().count("round-complete"), 2);
}
