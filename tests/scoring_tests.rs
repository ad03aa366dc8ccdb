//! Scoring integration tests.
//!
//! Band tables, presets and custom policies, including the validation
//! errors raised for malformed tables.

use std::time::Duration;

use rust_minigames::core::{ConfigError, Error, GameKind, RoundConfig, SymbolSet};
use rust_minigames::scoring::{BandTable, GradeBand, Metric, Outcome, Sample, ScoringPolicy};

// =============================================================================
// Preset Tests
// =============================================================================

/// The memory-match preset grades 3 → 5, 7 → 4, 12 → 3.
#[test]
fn test_memory_match_preset() {
    let policy = ScoringPolicy::memory_match();
    assert_eq!(policy.grade(3, 8).stars(), 5);
    assert_eq!(policy.grade(7, 8).stars(), 4);
    assert_eq!(policy.grade(12, 8).stars(), 3);
}

/// Boundaries sit at 4/5 and 9/10 mismatches.
#[test]
fn test_memory_match_boundaries() {
    let policy = ScoringPolicy::memory_match();
    let stars: Vec<u8> = [0, 4, 5, 9, 10, 1000]
        .iter()
        .map(|&m| policy.grade(m, 8).stars())
        .collect();
    assert_eq!(stars, vec![5, 5, 4, 4, 3, 3]);
}

/// Puzzle time bands: under two minutes, under four, otherwise.
#[test]
fn test_puzzle_time_preset() {
    let policy = ScoringPolicy::puzzle_time();
    let grade = |secs| {
        policy
            .grade_sample(&Sample {
                elapsed: Duration::from_secs(secs),
                ..Sample::default()
            })
            .stars()
    };
    assert_eq!(grade(0), 5);
    assert_eq!(grade(119), 5);
    assert_eq!(grade(120), 4);
    assert_eq!(grade(240), 3);
}

/// Quiz tiers over ten questions.
#[test]
fn test_quiz_preset() {
    let policy = ScoringPolicy::quiz();
    let stars: Vec<u8> = (0..=10)
        .map(|correct| {
            policy
                .grade_sample(&Sample {
                    correct,
                    wrong: 10 - correct,
                    ..Sample::default()
                })
                .stars()
        })
        .collect();
    assert_eq!(stars, vec![0, 0, 1, 1, 2, 2, 3, 3, 4, 5, 5]);
}

// =============================================================================
// Custom Table Tests
// =============================================================================

/// A stricter table moves the boundaries without touching the engine.
#[test]
fn test_custom_table() {
    let bands = BandTable::from_lower_bounds(&[(0, 5), (3, 4), (6, 2)]).unwrap();
    let policy = ScoringPolicy::new(Metric::Mismatches, bands);
    assert_eq!(policy.grade(2, 8).stars(), 5);
    assert_eq!(policy.grade(3, 8).stars(), 4);
    assert_eq!(policy.grade(6, 8).stars(), 2);

    let config = RoundConfig::new(SymbolSet::range(8), 16, policy);
    assert!(config.validate().is_ok());
}

/// Malformed tables are rejected at construction.
#[test]
fn test_malformed_tables() {
    assert_eq!(BandTable::new(vec![]).unwrap_err(), ConfigError::EmptyBands);
    assert!(matches!(
        BandTable::new(vec![GradeBand::closed(0, 4, 5), GradeBand::open(6, 3)]),
        Err(ConfigError::Gap { .. })
    ));
    assert!(matches!(
        BandTable::new(vec![GradeBand::closed(0, 5, 5), GradeBand::open(5, 3)]),
        Err(ConfigError::Overlap { .. })
    ));
    assert!(matches!(
        BandTable::new(vec![GradeBand::closed(0, 4, 5), GradeBand::closed(5, 9, 4)]),
        Err(ConfigError::NotExhaustive { .. })
    ));
    assert!(matches!(
        BandTable::new(vec![GradeBand::open(0, 6)]),
        Err(ConfigError::GradeOutOfRange { grade: 6 })
    ));
}

/// A malformed table deserialized from JSON is rejected too.
#[test]
fn test_json_tables_validated() {
    let ok: BandTable = serde_json::from_str(r#"[{"from":0,"to":null,"grade":3}]"#).unwrap();
    assert_eq!(ok.grade_for(99).stars(), 3);

    let gap = serde_json::from_str::<BandTable>(r#"[{"from":1,"to":null,"grade":3}]"#);
    assert!(gap.is_err());
}

/// Policies whose metric a game cannot measure fail validation.
#[test]
fn test_metric_must_fit_game() {
    let config = RoundConfig::new(SymbolSet::range(8), 16, ScoringPolicy::puzzle_time());
    assert!(matches!(
        config.validate(),
        Err(Error::Config(ConfigError::UnsupportedMetric { .. }))
    ));
}

/// Outcomes carry the value the grade was read from.
#[test]
fn test_outcome_metric_value() {
    let sample = Sample {
        correct: 7,
        wrong: 3,
        moves: 10,
        elapsed: Duration::ZERO,
    };
    let outcome = Outcome::grade(GameKind::Quiz, &ScoringPolicy::quiz(), &sample);
    assert_eq!(outcome.metric_value, 70);
    assert_eq!(outcome.stars(), 3);
    assert_eq!(outcome.grade.to_string(), "3/5 stars");
}
