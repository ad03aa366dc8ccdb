//! The memory-match engine.
//!
//! A `MatchEngine` owns one board and the round state for it. Each call
//! to `select` runs to completion: a second reveal is compared, resolved
//! and reported before the call returns. Timing (reveal delays, flip-back
//! animations) belongs to the caller, who simply waits before its next
//! `select`.
//!
//! ## Example
//!
//! ```
//! use rust_minigames::core::{RoundConfig, SymbolSet, Token};
//! use rust_minigames::deck::Board;
//! use rust_minigames::engine::{MatchEngine, Phase, SelectOutcome};
//! use rust_minigames::feedback::NullSink;
//! use rust_minigames::scoring::ScoringPolicy;
//!
//! let (a, b) = (Token::new(0), Token::new(1));
//! let config = RoundConfig::new(SymbolSet::range(2), 4, ScoringPolicy::memory_match());
//! let board = Board::from_tokens([a, b, a, b]).unwrap();
//! let mut engine = MatchEngine::from_board(config, board, NullSink).unwrap();
//!
//! assert_eq!(engine.select(0).unwrap(), SelectOutcome::FirstReveal);
//! assert_eq!(engine.select(2).unwrap(), SelectOutcome::Match { pair: [0, 2], complete: false });
//! assert_eq!(engine.phase(), Phase::Idle);
//! ```

use log::{debug, info, trace};
use smallvec::SmallVec;

use super::round::{Phase, RoundSnapshot, RoundState};
use crate::core::{
    ConfigError, DeckError, GameKind, InvalidSelection, RandomSource, RejectReason, Result, RoundConfig,
};
use crate::deck::{Board, DeckBuilder, TileState};
use crate::feedback::{FeedbackSink, NullSink};
use crate::scoring::{Outcome, Sample};

/// Result of an accepted selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First tile of a pair turned face up.
    FirstReveal,
    /// The two revealed tiles carry the same token.
    Match { pair: [usize; 2], complete: bool },
    /// The two revealed tiles differ and were turned back.
    Mismatch { pair: [usize; 2] },
}

/// State machine over tile selections for one round.
pub struct MatchEngine<S: FeedbackSink = NullSink> {
    config: RoundConfig,
    board: Board,
    round: RoundState,
    outcome: Option<Outcome>,
    sink: S,
}

impl MatchEngine<NullSink> {
    /// Validate `config`, build a shuffled board and start a round.
    pub fn new(config: RoundConfig, rng: &mut dyn RandomSource) -> Result<Self> {
        Self::with_sink(config, rng, NullSink)
    }
}

impl<S: FeedbackSink> MatchEngine<S> {
    /// Like `new`, reporting events to `sink`.
    pub fn with_sink(config: RoundConfig, rng: &mut dyn RandomSource, sink: S) -> Result<Self> {
        config.validate()?;
        let board = DeckBuilder::from_config(&config).build(rng)?;
        Ok(Self::assemble(config, board, sink))
    }

    /// Start a round on an explicit board.
    ///
    /// The board must have `config.board_size` tiles, all drawn from
    /// `config.symbols`, so that `restart` deals from the same symbols.
    pub fn from_board(config: RoundConfig, board: Board, sink: S) -> Result<Self> {
        if board.len() != config.board_size {
            return Err(ConfigError::BoardSizeMismatch {
                expected: config.board_size,
                actual: board.len(),
            }
            .into());
        }
        if let Some(tile) = board.iter().find(|t| !config.symbols.contains(t.token)) {
            trace!("board token {} is not in the symbol set", tile.token);
            return Err(ConfigError::InvalidValue {
                field: "board",
                reason: "tokens must come from the configured symbol set",
            }
            .into());
        }
        config.scoring.validate_for(GameKind::MemoryMatch)?;
        Ok(Self::assemble(config, board, sink))
    }

    fn assemble(config: RoundConfig, board: Board, sink: S) -> Self {
        let round = RoundState::new(board.total_pairs() as u32);
        Self {
            config,
            board,
            round,
            outcome: None,
            sink,
        }
    }

    /// Turn a tile face up.
    ///
    /// Rejections leave the engine untouched. A second reveal is resolved
    /// before returning, so the engine is never observed in `Resolving`.
    pub fn select(&mut self, position: usize) -> std::result::Result<SelectOutcome, InvalidSelection> {
        if let Err(reason) = self.check(position) {
            trace!("rejected select({position}): {reason}");
            return Err(InvalidSelection::new(position, reason));
        }

        self.board.set_state(position, TileState::Revealed);
        self.sink.on_flip(position);

        match self.round.first_selection.take() {
            None => {
                self.round.first_selection = Some(position);
                self.round.phase = Phase::OneRevealed;
                Ok(SelectOutcome::FirstReveal)
            }
            Some(first) => {
                self.round.phase = Phase::Resolving;
                Ok(self.resolve([first, position]))
            }
        }
    }

    /// Why `position` cannot be selected right now, if it cannot.
    fn check(&self, position: usize) -> std::result::Result<(), RejectReason> {
        match self.round.phase {
            Phase::Complete => return Err(RejectReason::RoundComplete),
            Phase::Resolving => return Err(RejectReason::Resolving),
            Phase::Idle | Phase::OneRevealed => {}
        }
        let tile = self.board.get(position).ok_or(RejectReason::OutOfRange {
            len: self.board.len(),
        })?;
        match tile.state {
            TileState::Hidden => Ok(()),
            TileState::Matched => Err(RejectReason::AlreadyMatched),
            TileState::Revealed => Err(RejectReason::AlreadyRevealed),
        }
    }

    fn resolve(&mut self, pair: [usize; 2]) -> SelectOutcome {
        let [a, b] = pair;
        let tiles = self.board.tiles();
        if tiles[a].token == tiles[b].token {
            self.board.set_state(a, TileState::Matched);
            self.board.set_state(b, TileState::Matched);
            self.round.matched_pairs += 1;
            self.sink.on_match(pair);

            let complete = self.round.matched_pairs == self.round.total_pairs;
            if complete {
                self.finish();
            } else {
                self.round.phase = Phase::Idle;
            }
            SelectOutcome::Match { pair, complete }
        } else {
            self.board.set_state(a, TileState::Hidden);
            self.board.set_state(b, TileState::Hidden);
            self.round.mismatch_count += 1;
            self.round.phase = Phase::Idle;
            self.sink.on_mismatch(pair);
            SelectOutcome::Mismatch { pair }
        }
    }

    fn finish(&mut self) {
        let sample = Sample::round(self.round.matched_pairs, self.round.mismatch_count);
        let outcome = Outcome::grade(GameKind::MemoryMatch, &self.config.scoring, &sample);
        self.round.phase = Phase::Complete;
        self.outcome = Some(outcome);
        debug!(
            "round complete: {} pairs, {} mismatches, {}",
            self.round.matched_pairs, self.round.mismatch_count, outcome.grade
        );
        self.sink.on_round_complete(&outcome);
    }

    /// Build a fresh board from the same configuration and reset the round.
    ///
    /// On error the current round is kept.
    pub fn restart(&mut self, rng: &mut dyn RandomSource) -> std::result::Result<(), DeckError> {
        let board = DeckBuilder::from_config(&self.config).build(rng)?;
        self.round = RoundState::new(board.total_pairs() as u32);
        self.board = board;
        self.outcome = None;
        info!("restarted round with {} tiles", self.board.len());
        Ok(())
    }

    /// Tile states and counters at this point.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            tiles: self.board.states(),
            round: self.round,
        }
    }

    /// Positions currently face up and unresolved.
    #[must_use]
    pub fn revealed_positions(&self) -> SmallVec<[usize; 2]> {
        self.board
            .iter()
            .filter(|t| t.state == TileState::Revealed)
            .map(|t| t.position)
            .collect()
    }

    #[must_use]
    pub fn hidden_tiles(&self) -> usize {
        self.board.count(TileState::Hidden)
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.round.phase
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.round.is_complete()
    }

    /// Graded result, once the round is complete.
    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the engine, returning its sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: FeedbackSink> std::fmt::Debug for MatchEngine<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("board_size", &self.board.len())
            .field("round", &self.round)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}
