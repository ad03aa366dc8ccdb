//! Round outcomes.

use serde::{Deserialize, Serialize};

use super::bands::Grade;
use super::policy::{Sample, ScoringPolicy};
use crate::core::GameKind;

/// Immutable result of a finished round.
///
/// Produced exactly once, when a round completes, and handed to the
/// feedback sink and any score store.
///
/// Counter meaning per game:
/// - memory match: `correct` = pairs, `mismatch_count` = wrong flips, `attempts` = flips of two
/// - puzzle: `correct` = pieces, `mismatch_count` = 0, `attempts` = swaps
/// - quiz: `correct` = right answers, `mismatch_count` = wrong answers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Game that produced this outcome.
    pub game: GameKind,

    /// Stars earned.
    pub grade: Grade,

    /// Wrong attempts.
    pub mismatch_count: u32,

    /// Correct attempts.
    pub correct: u32,

    /// Total moves.
    pub attempts: u32,

    /// Value of the scoring metric the grade was read from.
    pub metric_value: u32,
}

impl Outcome {
    /// Grade a sample and capture the result.
    #[must_use]
    pub fn grade(game: GameKind, policy: &ScoringPolicy, sample: &Sample) -> Self {
        let metric_value = policy.measure(sample);
        Self {
            game,
            grade: policy.bands.grade_for(metric_value),
            mismatch_count: sample.wrong,
            correct: sample.correct,
            attempts: sample.moves,
            metric_value,
        }
    }

    /// Stars earned.
    #[must_use]
    pub fn stars(&self) -> u8 {
        self.grade.stars()
    }
}
