//! Puzzle pieces.

use serde::{Deserialize, Serialize};

/// One piece of a slide puzzle.
///
/// `correct_index` is fixed when the board is built; only
/// `current_position` moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub correct_index: usize,
    pub current_position: usize,
}

impl Piece {
    /// A piece sitting in its correct slot.
    #[must_use]
    pub const fn new(correct_index: usize) -> Self {
        Self {
            correct_index,
            current_position: correct_index,
        }
    }

    #[must_use]
    pub const fn is_in_place(&self) -> bool {
        self.current_position == self.correct_index
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Piece({} @ {})", self.correct_index, self.current_position)
    }
}
