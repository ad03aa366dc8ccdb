//! Game configuration types.
//!
//! Rounds are configured entirely at construction time:
//! - `SymbolSet`: which tokens may appear
//! - board size: how many tiles (always even)
//! - `ScoringPolicy`: how the finished round is graded
//!
//! The engine holds no hidden defaults. Presets exist for the bundled
//! games, but callers pick them explicitly.

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, DeckError, Result};
use super::token::SymbolSet;
use crate::scoring::ScoringPolicy;

/// Which mini-game a round belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    /// Tile memory match.
    MemoryMatch,
    /// Slide or jigsaw puzzle.
    Puzzle,
    /// Arithmetic quiz.
    Quiz,
}

impl GameKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameKind::MemoryMatch => "memory-match",
            GameKind::Puzzle => "puzzle",
            GameKind::Quiz => "quiz",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for one memory-match round.
///
/// ## Example
///
/// ```
/// use rust_minigames::core::{RoundConfig, SymbolSet};
/// use rust_minigames::scoring::ScoringPolicy;
///
/// let config = RoundConfig::new(SymbolSet::range(8), 16, ScoringPolicy::memory_match());
/// assert!(config.validate().is_ok());
/// assert_eq!(config.total_pairs(), 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Tokens the deck builder may draw from.
    pub symbols: SymbolSet,

    /// Number of tiles. Must be even and non-zero.
    pub board_size: usize,

    /// How the finished round is graded.
    pub scoring: ScoringPolicy,
}

impl RoundConfig {
    #[must_use]
    pub fn new(symbols: SymbolSet, board_size: usize, scoring: ScoringPolicy) -> Self {
        Self {
            symbols,
            board_size,
            scoring,
        }
    }

    /// Replace the symbol set.
    #[must_use]
    pub fn with_symbols(mut self, symbols: SymbolSet) -> Self {
        self.symbols = symbols;
        self
    }

    /// Replace the board size.
    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    /// Replace the scoring policy.
    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.board_size / 2
    }

    /// Check the configuration before any board is built.
    pub fn validate(&self) -> Result<()> {
        validate_board_size(self.board_size)?;
        let needed = self.total_pairs();
        if self.symbols.len() < needed {
            return Err(DeckError::InsufficientSymbols {
                needed,
                available: self.symbols.len(),
            }
            .into());
        }
        self.scoring.validate_for(GameKind::MemoryMatch)?;
        Ok(())
    }
}

/// Board sizes must be even and non-zero.
pub(crate) fn validate_board_size(board_size: usize) -> std::result::Result<(), DeckError> {
    if board_size == 0 {
        return Err(DeckError::EmptyBoard);
    }
    if board_size % 2 != 0 {
        return Err(DeckError::OddBoardSize(board_size));
    }
    Ok(())
}

/// Reject a zero count.
pub(crate) fn require_positive(field: &'static str, value: usize) -> std::result::Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}
