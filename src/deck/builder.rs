//! Deck builder: paired, shuffled boards.
//!
//! ## Algorithm
//!
//! 1. Pick `board_size / 2` distinct symbols. When more are available a
//!    random subset is drawn (partial Fisher–Yates over the symbol list);
//!    when exactly enough are available no randomness is consumed.
//! 2. Lay each chosen symbol down twice.
//! 3. Shuffle with Fisher–Yates, scanning from the last index down to 1
//!    and swapping with a uniform index in `[0, i]`.
//!
//! Every arrangement of the multiset is equally likely given a uniform
//! random source.

use log::debug;

use super::board::Board;
use crate::core::config::validate_board_size;
use crate::core::{DeckError, RandomSource, RoundConfig, SymbolSet, Token};

/// In-place Fisher–Yates shuffle.
///
/// Draws bounds `len, len - 1, ..., 2` from the source.
pub fn shuffle<T>(items: &mut [T], rng: &mut dyn RandomSource) {
    for i in (1..items.len()).rev() {
        let j = rng.next_int(i + 1);
        items.swap(i, j);
    }
}

/// Builds boards for a symbol set and size.
///
/// ## Example
///
/// ```
/// use rust_minigames::core::{GameRng, SymbolSet};
/// use rust_minigames::deck::DeckBuilder;
///
/// let mut rng = GameRng::new(42);
/// let board = DeckBuilder::new(SymbolSet::range(10), 16).build(&mut rng).unwrap();
/// assert_eq!(board.len(), 16);
/// ```
#[derive(Clone, Debug)]
pub struct DeckBuilder {
    symbols: SymbolSet,
    board_size: usize,
}

impl DeckBuilder {
    #[must_use]
    pub fn new(symbols: SymbolSet, board_size: usize) -> Self {
        Self { symbols, board_size }
    }

    /// Builder for a round configuration.
    #[must_use]
    pub fn from_config(config: &RoundConfig) -> Self {
        Self::new(config.symbols.clone(), config.board_size)
    }

    /// Build a fresh board.
    pub fn build(&self, rng: &mut dyn RandomSource) -> Result<Board, DeckError> {
        validate_board_size(self.board_size)?;

        let chosen = self.choose_symbols(rng)?;
        let mut layout: Vec<Token> = chosen.iter().flat_map(|&t| [t, t]).collect();
        shuffle(&mut layout, rng);

        debug!(
            "built board of {} tiles from {} symbols",
            layout.len(),
            self.symbols.len()
        );
        Ok(Board::from_shuffled(layout))
    }

    /// Select exactly `board_size / 2` distinct symbols.
    fn choose_symbols(&self, rng: &mut dyn RandomSource) -> Result<Vec<Token>, DeckError> {
        let needed = self.board_size / 2;
        let available = self.symbols.len();
        if available < needed {
            return Err(DeckError::InsufficientSymbols { needed, available });
        }

        let mut pool = self.symbols.as_slice().to_vec();
        if available > needed {
            // Partial Fisher–Yates: the first `needed` slots become a uniform subset
            for i in 0..needed {
                let j = i + rng.next_int(available - i);
                pool.swap(i, j);
            }
            pool.truncate(needed);
        }
        Ok(pool)
    }
}
