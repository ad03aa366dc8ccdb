//! Board tiles.

use serde::{Deserialize, Serialize};

use crate::core::Token;

/// Reveal state of a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileState {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, not yet resolved.
    Revealed,
    /// Part of a found pair. Stays face up for the rest of the round.
    Matched,
}

/// One board cell.
///
/// `position` equals the tile's index in the board and never changes
/// during a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub position: usize,
    pub token: Token,
    pub state: TileState,
}

impl Tile {
    /// Create a hidden tile.
    #[must_use]
    pub const fn new(position: usize, token: Token) -> Self {
        Self {
            position,
            token,
            state: TileState::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == TileState::Hidden
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == TileState::Matched
    }

    /// Whether the token is visible (revealed or matched).
    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.state != TileState::Hidden
    }
}
