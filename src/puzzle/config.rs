//! Puzzle configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::config::require_positive;
use crate::core::{GameKind, Result};
use crate::scoring::{Grade, Sample, ScoringPolicy};

/// Configuration for a slide puzzle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Number of pieces (a 4×4 grid has 16).
    pub piece_count: usize,
    /// How the finished puzzle is graded.
    pub scoring: ScoringPolicy,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            piece_count: 16,
            scoring: ScoringPolicy::puzzle_time(),
        }
    }
}

impl PuzzleConfig {
    #[must_use]
    pub fn new(piece_count: usize) -> Self {
        Self {
            piece_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_piece_count(mut self, piece_count: usize) -> Self {
        self.piece_count = piece_count;
        self
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("piece_count", self.piece_count)?;
        self.scoring.validate_for(GameKind::Puzzle)?;
        Ok(())
    }

    /// Grade a completion time against this configuration's bands.
    ///
    /// Only meaningful for time-based policies; other metrics see a
    /// zero-move sample.
    #[must_use]
    pub fn grade_elapsed(&self, elapsed: Duration) -> Grade {
        self.scoring.grade_sample(&Sample {
            elapsed,
            ..Sample::default()
        })
    }
}
