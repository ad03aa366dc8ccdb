//! Error types.
//!
//! Three kinds of failure exist:
//! - `DeckError`: a board could not be built (construction time, fatal to that call)
//! - `InvalidSelection`: an input was rejected (runtime, always recoverable)
//! - `ConfigError`: malformed configuration (fatal at engine construction)
//!
//! Matches and mismatches are ordinary results, never errors.

use super::token::Token;

/// Failure to build a board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckError {
    /// Fewer distinct symbols than pairs on the board.
    InsufficientSymbols { needed: usize, available: usize },
    /// Board size is odd, so tiles cannot be paired.
    OddBoardSize(usize),
    /// Board size is zero.
    EmptyBoard,
    /// An explicit layout has a token that does not appear exactly twice.
    UnpairedToken { token: Token, count: usize },
}

impl std::fmt::Display for DeckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientSymbols { needed, available } => write!(
                f,
                "board needs {needed} distinct symbols but only {available} were supplied"
            ),
            Self::OddBoardSize(size) => write!(f, "board size {size} is odd"),
            Self::EmptyBoard => write!(f, "board size is zero"),
            Self::UnpairedToken { token, count } => {
                write!(f, "{token} appears {count} times, expected exactly 2")
            }
        }
    }
}

impl std::error::Error for DeckError {}

/// Why a selection was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectReason {
    /// Position is past the end of the board.
    OutOfRange { len: usize },
    /// Tile has already been matched.
    AlreadyMatched,
    /// Tile is the face-up first pick.
    AlreadyRevealed,
    /// A comparison is still pending.
    Resolving,
    /// The round is over.
    RoundComplete,
    /// Completion was requested before the puzzle was solved.
    NotSolved,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { len } => write!(f, "out of range (len {len})"),
            Self::AlreadyMatched => write!(f, "already matched"),
            Self::AlreadyRevealed => write!(f, "already revealed"),
            Self::Resolving => write!(f, "a comparison is pending"),
            Self::RoundComplete => write!(f, "round is complete"),
            Self::NotSolved => write!(f, "puzzle is not solved"),
        }
    }
}

/// A rejected input. State is never changed by a rejected input.
///
/// `position` is the tile, piece or question index the input referred to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidSelection {
    pub position: usize,
    pub reason: RejectReason,
}

impl InvalidSelection {
    #[must_use]
    pub const fn new(position: usize, reason: RejectReason) -> Self {
        Self { position, reason }
    }
}

impl std::fmt::Display for InvalidSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid selection at {}: {}", self.position, self.reason)
    }
}

impl std::error::Error for InvalidSelection {}

/// Malformed configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Band table has no bands.
    EmptyBands,
    /// Values between `expected` and `found` map to no band.
    Gap { expected: u32, found: u32 },
    /// Two bands both cover `at`.
    Overlap { at: u32 },
    /// A band's upper bound is below its lower bound.
    InvertedBand { from: u32, to: u32 },
    /// The last band is closed, so large values map to no band.
    NotExhaustive { last: u32 },
    /// Grade exceeds the maximum star count.
    GradeOutOfRange { grade: u8 },
    /// The metric cannot be measured by this game.
    UnsupportedMetric { metric: &'static str, game: &'static str },
    /// Board handed to an engine differs from the configured size.
    BoardSizeMismatch { expected: usize, actual: usize },
    /// Any other out-of-range field.
    InvalidValue { field: &'static str, reason: &'static str },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyBands => write!(f, "band table is empty"),
            Self::Gap { expected, found } => {
                write!(f, "band table has a gap: expected a band at {expected}, next starts at {found}")
            }
            Self::Overlap { at } => write!(f, "band table overlaps at {at}"),
            Self::InvertedBand { from, to } => write!(f, "band {from}..={to} is inverted"),
            Self::NotExhaustive { last } => {
                write!(f, "band table ends at {last}; the last band must be open-ended")
            }
            Self::GradeOutOfRange { grade } => write!(f, "grade {grade} is out of range"),
            Self::UnsupportedMetric { metric, game } => {
                write!(f, "metric {metric} is not supported by {game}")
            }
            Self::BoardSizeMismatch { expected, actual } => {
                write!(f, "board has {actual} tiles, configuration expects {expected}")
            }
            Self::InvalidValue { field, reason } => write!(f, "{field}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Any error produced by this crate.
#[derive(Debug)]
pub enum Error {
    Deck(DeckError),
    Selection(InvalidSelection),
    Config(ConfigError),
    /// Replay encoding or decoding failed.
    Codec(bincode::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Deck(err) => write!(f, "{err}"),
            Self::Selection(err) => write!(f, "{err}"),
            Self::Config(err) => write!(f, "invalid configuration: {err}"),
            Self::Codec(err) => write!(f, "replay codec: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Deck(err) => Some(err),
            Self::Selection(err) => Some(err),
            Self::Config(err) => Some(err),
            Self::Codec(err) => Some(err.as_ref()),
        }
    }
}

impl From<DeckError> for Error {
    fn from(value: DeckError) -> Self {
        Self::Deck(value)
    }
}

impl From<InvalidSelection> for Error {
    fn from(value: InvalidSelection) -> Self {
        Self::Selection(value)
    }
}

impl From<ConfigError> for Error {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<bincode::Error> for Error {
    fn from(value: bincode::Error) -> Self {
        Self::Codec(value)
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_error_display() {
        let err = DeckError::InsufficientSymbols {
            needed: 8,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "board needs 8 distinct symbols but only 3 were supplied"
        );
    }

    #[test]
    fn test_invalid_selection_display() {
        let err = InvalidSelection::new(4, RejectReason::AlreadyMatched);
        assert_eq!(err.to_string(), "invalid selection at 4: already matched");
    }

    #[test]
    fn test_error_conversions() {
        let err: Error = ConfigError::EmptyBands.into();
        assert!(matches!(err, Error::Config(ConfigError::EmptyBands)));
        assert!(std::error::Error::source(&err).is_some());

        let err: Error = DeckError::EmptyBoard.into();
        assert_eq!(err.to_string(), "board size is zero");
    }
}
