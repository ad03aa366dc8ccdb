//! Score stores.
//!
//! A store receives finished outcomes. Durable storage (a cloud profile,
//! a local save file) lives behind this trait; the engine never retries
//! or waits on a write.

use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::GameKind;
use crate::scoring::{Grade, Outcome};

/// Destination for finished round outcomes.
pub trait ScoreStore {
    /// Record a finished round.
    fn record(&mut self, outcome: &Outcome);

    /// Best grade recorded for a game, if any.
    fn best(&self, game: GameKind) -> Option<Grade>;
}

/// Per-game aggregate kept by `InMemoryScoreStore`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Highest grade so far.
    pub best: Grade,
    /// Rounds recorded.
    pub plays: u32,
    /// Most recent outcome.
    pub last: Outcome,
}

/// Score store held in memory.
#[derive(Clone, Debug, Default)]
pub struct InMemoryScoreStore {
    records: FxHashMap<GameKind, ScoreRecord>,
}

impl InMemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, game: GameKind) -> Option<&ScoreRecord> {
        self.records.get(&game)
    }

    /// Total rounds recorded across all games.
    #[must_use]
    pub fn total_plays(&self) -> u32 {
        self.records.values().map(|r| r.plays).sum()
    }
}

impl ScoreStore for InMemoryScoreStore {
    fn record(&mut self, outcome: &Outcome) {
        let record = self
            .records
            .entry(outcome.game)
            .or_insert(ScoreRecord {
                best: outcome.grade,
                plays: 0,
                last: *outcome,
            });
        record.best = record.best.max(outcome.grade);
        record.plays += 1;
        record.last = *outcome;
        debug!(
            "recorded {} for {} (best {}, {} plays)",
            outcome.grade, outcome.game, record.best, record.plays
        );
    }

    fn best(&self, game: GameKind) -> Option<Grade> {
        self.records.get(&game).map(|r| r.best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{Sample, ScoringPolicy};

    fn round(mismatches: u32) -> Outcome {
        Outcome::grade(
            GameKind::MemoryMatch,
            &ScoringPolicy::memory_match(),
            &Sample::round(8, mismatches),
        )
    }

    #[test]
    fn test_keeps_best_grade() {
        let mut store = InMemoryScoreStore::new();
        assert_eq!(store.best(GameKind::MemoryMatch), None);

        store.record(&round(7));
        store.record(&round(2));
        store.record(&round(12));

        let record = store.get(GameKind::MemoryMatch).unwrap();
        assert_eq!(record.best.stars(), 5);
        assert_eq!(record.plays, 3);
        assert_eq!(record.last.mismatch_count, 12);
        assert_eq!(store.best(GameKind::Quiz), None);
    }

    #[test]
    fn test_games_tracked_separately() {
        let mut store = InMemoryScoreStore::new();
        store.record(&round(0));
        let quiz = Outcome::grade(
            GameKind::Quiz,
            &ScoringPolicy::quiz(),
            &Sample {
                correct: 3,
                wrong: 7,
                ..Sample::default()
            },
        );
        store.record(&quiz);

        assert_eq!(store.best(GameKind::Quiz).map(Grade::stars), Some(1));
        assert_eq!(store.best(GameKind::MemoryMatch).map(Grade::stars), Some(5));
        assert_eq!(store.total_plays(), 2);
    }
}
