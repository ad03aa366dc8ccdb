//! Round bookkeeping.
//!
//! ## Phases
//!
//! ```text
//! Idle ──select──▶ OneRevealed ──select──▶ Resolving ──▶ Idle
//!                                                    └─▶ Complete
//! ```
//!
//! `Resolving` only exists inside a single `select` call: the engine
//! compares the two revealed tiles and leaves the phase before returning.

use serde::{Deserialize, Serialize};

use crate::deck::TileState;

/// Where a round is in its select cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No tile face up.
    #[default]
    Idle,
    /// One tile face up, waiting for the second pick.
    OneRevealed,
    /// Two tiles face up, comparison in progress.
    Resolving,
    /// Every pair matched.
    Complete,
}

/// Counters and phase for one round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    /// Position of the face-up first pick, when `phase == OneRevealed`.
    pub first_selection: Option<usize>,
    pub matched_pairs: u32,
    pub mismatch_count: u32,
    pub total_pairs: u32,
    pub phase: Phase,
}

impl RoundState {
    /// Fresh state for a board with `total_pairs` pairs.
    #[must_use]
    pub fn new(total_pairs: u32) -> Self {
        Self {
            total_pairs,
            ..Self::default()
        }
    }

    /// Completed comparisons (matches plus mismatches).
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.matched_pairs.saturating_add(self.mismatch_count)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Pairs still on the board.
    #[must_use]
    pub fn remaining_pairs(&self) -> u32 {
        self.total_pairs.saturating_sub(self.matched_pairs)
    }
}

/// Tile states and counters after one accepted selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub tiles: Vec<TileState>,
    pub round: RoundState,
}

impl RoundSnapshot {
    /// Number of hidden tiles in this snapshot.
    #[must_use]
    pub fn hidden_tiles(&self) -> usize {
        self.tiles.iter().filter(|s| **s == TileState::Hidden).count()
    }
}
