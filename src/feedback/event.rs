//! Feedback events.
//!
//! Events describe what happened in a round so a presentation layer can
//! react: play the flip sound, the "correct" jingle, the win fanfare.
//! The engine fires them; it never waits on or inspects the result.

use serde::{Deserialize, Serialize};

use crate::scoring::Outcome;

/// Something a sink may want to react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackEvent {
    /// A tile was turned face up.
    Flip { position: usize },
    /// Two revealed tiles matched.
    Match { pair: [usize; 2] },
    /// Two revealed tiles differed and were turned back.
    Mismatch { pair: [usize; 2] },
    /// Two puzzle pieces swapped places.
    Swap { a: usize, b: usize },
    /// A jigsaw piece snapped into its slot.
    Snap { piece: usize },
    /// A quiz answer was scored.
    Answer { correct: bool },
    /// The round finished.
    RoundComplete(Outcome),
}

impl FeedbackEvent {
    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            FeedbackEvent::Flip { .. } => "flip",
            FeedbackEvent::Match { .. } => "match",
            FeedbackEvent::Mismatch { .. } => "mismatch",
            FeedbackEvent::Swap { .. } => "swap",
            FeedbackEvent::Snap { .. } => "snap",
            FeedbackEvent::Answer { .. } => "answer",
            FeedbackEvent::RoundComplete(_) => "round-complete",
        }
    }
}
