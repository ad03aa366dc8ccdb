//! Scoring policies: which value to measure and how to grade it.
//!
//! The three games grade differently:
//! - memory match: wrong flips (`≤4 → 5`, `5–9 → 4`, `≥10 → 3`)
//! - jigsaw puzzle: completion time (`<2 min → 5`, `<4 min → 4`, else 3)
//! - arithmetic quiz: percent correct in 20-point tiers
//!
//! A `ScoringPolicy` pairs a `Metric` with a `BandTable`, so the same
//! engine can be graded any of these ways.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::bands::{BandTable, Grade, GradeBand};
use crate::core::{ConfigError, GameKind};

/// What a policy measures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Wrong attempts (mismatched pairs, wrong answers).
    Mismatches,
    /// `correct * 100 / (correct + wrong)`, floored.
    PercentCorrect,
    /// Whole seconds taken.
    ElapsedSeconds,
    /// Moves made (attempts or swaps).
    Moves,
}

impl Metric {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Metric::Mismatches => "mismatches",
            Metric::PercentCorrect => "percent-correct",
            Metric::ElapsedSeconds => "elapsed-seconds",
            Metric::Moves => "moves",
        }
    }

    /// Whether a game can measure this metric.
    ///
    /// Engines do not model time, so only the puzzle, whose completion
    /// call carries the elapsed time, grades by seconds.
    #[must_use]
    pub const fn applies_to(self, game: GameKind) -> bool {
        matches!(
            (self, game),
            (Metric::Mismatches | Metric::PercentCorrect | Metric::Moves, GameKind::MemoryMatch)
                | (Metric::ElapsedSeconds | Metric::Moves, GameKind::Puzzle)
                | (Metric::Mismatches | Metric::PercentCorrect, GameKind::Quiz)
        )
    }
}

/// Raw counters a game hands to its policy at completion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sample {
    pub correct: u32,
    pub wrong: u32,
    pub moves: u32,
    pub elapsed: Duration,
}

impl Sample {
    /// Counters of a finished matching round.
    #[must_use]
    pub fn round(matched_pairs: u32, mismatches: u32) -> Self {
        Self {
            correct: matched_pairs,
            wrong: mismatches,
            moves: matched_pairs + mismatches,
            elapsed: Duration::ZERO,
        }
    }
}

/// Metric plus band table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    pub metric: Metric,
    pub bands: BandTable,
}

impl ScoringPolicy {
    #[must_use]
    pub fn new(metric: Metric, bands: BandTable) -> Self {
        Self { metric, bands }
    }

    /// Build from raw bands, validating the table.
    pub fn from_bands(metric: Metric, bands: Vec<GradeBand>) -> Result<Self, ConfigError> {
        Ok(Self::new(metric, BandTable::new(bands)?))
    }

    /// Memory-match table: `≤4 → 5`, `5–9 → 4`, `≥10 → 3` wrong flips.
    #[must_use]
    pub fn memory_match() -> Self {
        Self::new(
            Metric::Mismatches,
            BandTable::preset(vec![
                GradeBand::closed(0, 4, 5),
                GradeBand::closed(5, 9, 4),
                GradeBand::open(10, 3),
            ]),
        )
    }

    /// Jigsaw table: under 120 s → 5, under 240 s → 4, otherwise 3.
    #[must_use]
    pub fn puzzle_time() -> Self {
        Self::new(
            Metric::ElapsedSeconds,
            BandTable::preset(vec![
                GradeBand::closed(0, 119, 5),
                GradeBand::closed(120, 239, 4),
                GradeBand::open(240, 3),
            ]),
        )
    }

    /// Quiz table: `≥90% → 5`, `≥80% → 4`, `≥60% → 3`, `≥40% → 2`, `≥20% → 1`, else 0.
    #[must_use]
    pub fn quiz() -> Self {
        Self::new(
            Metric::PercentCorrect,
            BandTable::preset(vec![
                GradeBand::closed(0, 19, 0),
                GradeBand::closed(20, 39, 1),
                GradeBand::closed(40, 59, 2),
                GradeBand::closed(60, 79, 3),
                GradeBand::closed(80, 89, 4),
                GradeBand::open(90, 5),
            ]),
        )
    }

    /// Check the table and that `game` can measure the metric.
    pub fn validate_for(&self, game: GameKind) -> Result<(), ConfigError> {
        BandTable::validate(self.bands.bands())?;
        if !self.metric.applies_to(game) {
            return Err(ConfigError::UnsupportedMetric {
                metric: self.metric.name(),
                game: game.name(),
            });
        }
        Ok(())
    }

    /// Value of the policy's metric for a sample.
    #[must_use]
    pub fn measure(&self, sample: &Sample) -> u32 {
        match self.metric {
            Metric::Mismatches => sample.wrong,
            Metric::PercentCorrect => percent(sample.correct, sample.correct + sample.wrong),
            Metric::ElapsedSeconds => u32::try_from(sample.elapsed.as_secs()).unwrap_or(u32::MAX),
            Metric::Moves => sample.moves,
        }
    }

    /// Grade a sample.
    #[must_use]
    pub fn grade_sample(&self, sample: &Sample) -> Grade {
        self.bands.grade_for(self.measure(sample))
    }

    /// Grade a finished matching round.
    #[must_use]
    pub fn grade(&self, mismatch_count: u32, total_pairs: u32) -> Grade {
        self.grade_sample(&Sample::round(total_pairs, mismatch_count))
    }
}

/// Floored percentage; zero when nothing was attempted.
fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        return 0;
    }
    (u64::from(part) * 100 / u64::from(whole)) as u32
}
