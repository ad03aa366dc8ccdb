//! The board: an ordered sequence of paired tiles.
//!
//! ## Invariants
//!
//! - Length is even and non-zero
//! - Every token present appears on exactly two tiles
//! - `tiles[i].position == i`
//!
//! Boards come from the `DeckBuilder` or from an explicit, validated
//! layout via `Board::from_tokens`. Only the match engine changes
//! tile states.

use rustc_hash::FxHashMap;
use serde::Serialize;

use super::tile::{Tile, TileState};
use crate::core::config::validate_board_size;
use crate::core::{DeckError, Token};

/// Ordered, paired tiles for one round.
///
/// Serialize-only: boards are created through validated constructors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Board {
    tiles: Vec<Tile>,
}

impl Board {
    /// Build a board from an explicit token layout.
    ///
    /// ```
    /// use rust_minigames::core::Token;
    /// use rust_minigames::deck::Board;
    ///
    /// let (a, b) = (Token::new(0), Token::new(1));
    /// let board = Board::from_tokens([a, b, a, b]).unwrap();
    /// assert_eq!(board.total_pairs(), 2);
    ///
    /// assert!(Board::from_tokens([a, a, a, b]).is_err());
    /// ```
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Result<Self, DeckError> {
        let tokens: Vec<Token> = tokens.into_iter().collect();
        validate_pairs(&tokens)?;
        Ok(Self::from_shuffled(tokens))
    }

    /// Wrap a layout already known to satisfy the pairing invariant.
    pub(crate) fn from_shuffled(tokens: Vec<Token>) -> Self {
        let tiles = tokens
            .into_iter()
            .enumerate()
            .map(|(position, token)| Tile::new(position, token))
            .collect();
        Self { tiles }
    }

    /// Number of tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a valid board.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Number of pairs (`len / 2`).
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.tiles.len() / 2
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Tile> {
        self.tiles.get(position)
    }

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Token layout in position order.
    #[must_use]
    pub fn tokens(&self) -> Vec<Token> {
        self.tiles.iter().map(|t| t.token).collect()
    }

    /// Tile states in position order.
    #[must_use]
    pub fn states(&self) -> Vec<TileState> {
        self.tiles.iter().map(|t| t.state).collect()
    }

    /// Count tiles in a given state.
    #[must_use]
    pub fn count(&self, state: TileState) -> usize {
        self.tiles.iter().filter(|t| t.state == state).count()
    }

    /// Position of the other tile carrying the same token.
    #[must_use]
    pub fn partner_of(&self, position: usize) -> Option<usize> {
        let token = self.get(position)?.token;
        self.tiles
            .iter()
            .find(|t| t.token == token && t.position != position)
            .map(|t| t.position)
    }

    pub(crate) fn set_state(&mut self, position: usize, state: TileState) {
        self.tiles[position].state = state;
    }
}

/// Check that a layout pairs every token exactly twice.
fn validate_pairs(tokens: &[Token]) -> Result<(), DeckError> {
    validate_board_size(tokens.len())?;

    let mut counts: FxHashMap<Token, usize> = FxHashMap::default();
    for token in tokens {
        *counts.entry(*token).or_insert(0) += 1;
    }

    // Report the first offending token in layout order
    match tokens.iter().find(|t| counts[*t] != 2) {
        Some(&token) => Err(DeckError::UnpairedToken {
            token,
            count: counts[&token],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[u32]) -> Vec<Token> {
        raw.iter().copied().map(Token::new).collect()
    }

    #[test]
    fn test_from_tokens() {
        let board = Board::from_tokens(tokens(&[0, 1, 0, 1])).unwrap();
        assert_eq!(board.len(), 4);
        assert_eq!(board.total_pairs(), 2);
        for (i, tile) in board.iter().enumerate() {
            assert_eq!(tile.position, i);
            assert!(tile.is_hidden());
        }
        assert_eq!(board.tokens(), tokens(&[0, 1, 0, 1]));
    }

    #[test]
    fn test_unpaired_token() {
        let err = Board::from_tokens(tokens(&[0, 0, 0, 1])).unwrap_err();
        assert_eq!(
            err,
            DeckError::UnpairedToken {
                token: Token::new(0),
                count: 3
            }
        );

        let err = Board::from_tokens(tokens(&[0, 0, 0, 0])).unwrap_err();
        assert_eq!(
            err,
            DeckError::UnpairedToken {
                token: Token::new(0),
                count: 4
            }
        );
    }

    #[test]
    fn test_bad_sizes() {
        assert_eq!(Board::from_tokens(tokens(&[])), Err(DeckError::EmptyBoard));
        assert_eq!(
            Board::from_tokens(tokens(&[0, 0, 1])),
            Err(DeckError::OddBoardSize(3))
        );
    }

    #[test]
    fn test_partner_of() {
        let board = Board::from_tokens(tokens(&[3, 5, 5, 3])).unwrap();
        assert_eq!(board.partner_of(0), Some(3));
        assert_eq!(board.partner_of(2), Some(1));
        assert_eq!(board.partner_of(9), None);
    }

    #[test]
    fn test_count_states() {
        let mut board = Board::from_tokens(tokens(&[0, 1, 0, 1])).unwrap();
        board.set_state(0, TileState::Matched);
        board.set_state(2, TileState::Matched);
        board.set_state(1, TileState::Revealed);
        assert_eq!(board.count(TileState::Matched), 2);
        assert_eq!(board.count(TileState::Revealed), 1);
        assert_eq!(board.count(TileState::Hidden), 1);
        assert_eq!(
            board.states(),
            vec![TileState::Matched, TileState::Revealed, TileState::Matched, TileState::Hidden]
        );
    }
}
