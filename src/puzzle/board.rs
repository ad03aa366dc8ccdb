//! Slide puzzle board.
//!
//! Pieces are indexed by their correct slot. A swap exchanges the
//! current positions of two pieces with no adjacency rule, and the board
//! is solved when every piece sits in its correct slot.
//!
//! ## Two-click selection
//!
//! `select(piece)` mirrors tapping pieces on screen: the first tap marks
//! a piece, a second tap on another piece swaps the two, and tapping the
//! marked piece again clears the mark.

use std::time::Duration;

use log::{debug, trace};

use super::config::PuzzleConfig;
use super::piece::Piece;
use crate::core::{GameKind, InvalidSelection, RandomSource, RejectReason, Result};
use crate::deck::shuffle;
use crate::feedback::{FeedbackSink, NullSink};
use crate::scoring::{Outcome, Sample};

/// Result of an accepted puzzle input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PuzzleOutcome {
    /// A piece was marked for swapping.
    Selected { piece: usize },
    /// The marked piece was tapped again and unmarked.
    Deselected { piece: usize },
    /// Two pieces swapped places.
    Swapped { a: usize, b: usize, solved: bool },
}

/// A slide puzzle in progress.
///
/// ## Example
///
/// ```
/// use rust_minigames::puzzle::{PuzzleBoard, PuzzleConfig};
///
/// let mut board = PuzzleBoard::new(PuzzleConfig::new(4)).unwrap();
/// assert!(board.is_solved());
///
/// board.swap(0, 3).unwrap();
/// assert_eq!(board.pieces_in_place(), 2);
/// board.swap(0, 3).unwrap();
/// assert!(board.is_solved());
/// ```
pub struct PuzzleBoard<S: FeedbackSink = NullSink> {
    config: PuzzleConfig,
    pieces: Vec<Piece>,
    selected: Option<usize>,
    moves: u32,
    outcome: Option<Outcome>,
    sink: S,
}

impl PuzzleBoard<NullSink> {
    /// A solved board.
    pub fn new(config: PuzzleConfig) -> Result<Self> {
        config.validate()?;
        let pieces = (0..config.piece_count).map(Piece::new).collect();
        Ok(Self {
            config,
            pieces,
            selected: None,
            moves: 0,
            outcome: None,
            sink: NullSink,
        })
    }

    /// A board with pieces shuffled by Fisher–Yates.
    ///
    /// The shuffle may leave the board solved; callers that need a
    /// scrambled start can check `is_solved` and shuffle again.
    pub fn shuffled(config: PuzzleConfig, rng: &mut dyn RandomSource) -> Result<Self> {
        let mut board = Self::new(config)?;
        board.scatter(rng);
        Ok(board)
    }
}

impl<S: FeedbackSink> PuzzleBoard<S> {
    /// Replace the sink.
    pub fn with_sink<T: FeedbackSink>(self, sink: T) -> PuzzleBoard<T> {
        PuzzleBoard {
            config: self.config,
            pieces: self.pieces,
            selected: self.selected,
            moves: self.moves,
            outcome: self.outcome,
            sink,
        }
    }

    fn scatter(&mut self, rng: &mut dyn RandomSource) {
        let mut positions: Vec<usize> = (0..self.pieces.len()).collect();
        shuffle(&mut positions, rng);
        for (piece, position) in self.pieces.iter_mut().zip(positions) {
            piece.current_position = position;
        }
    }

    /// Reshuffle and reset counters ("play again").
    pub fn restart(&mut self, rng: &mut dyn RandomSource) {
        self.scatter(rng);
        self.selected = None;
        self.moves = 0;
        self.outcome = None;
        debug!("puzzle restarted with {} pieces", self.pieces.len());
    }

    fn check(&self, piece: usize) -> std::result::Result<(), InvalidSelection> {
        if self.outcome.is_some() {
            return Err(InvalidSelection::new(piece, RejectReason::RoundComplete));
        }
        if piece >= self.pieces.len() {
            return Err(InvalidSelection::new(
                piece,
                RejectReason::OutOfRange {
                    len: self.pieces.len(),
                },
            ));
        }
        Ok(())
    }

    /// Exchange the current positions of two pieces.
    ///
    /// Returns whether the board is solved afterwards.
    pub fn swap(&mut self, a: usize, b: usize) -> std::result::Result<bool, InvalidSelection> {
        if let Err(err) = self.check(a).and_then(|()| self.check(b)) {
            trace!("rejected swap({a}, {b}): {}", err.reason);
            return Err(err);
        }
        let position_a = self.pieces[a].current_position;
        self.pieces[a].current_position = self.pieces[b].current_position;
        self.pieces[b].current_position = position_a;
        self.moves += 1;
        self.sink.on_swap(a, b);

        let solved = self.is_solved();
        if solved {
            debug!("puzzle solved in {} moves", self.moves);
        }
        Ok(solved)
    }

    /// Tap a piece.
    pub fn select(&mut self, piece: usize) -> std::result::Result<PuzzleOutcome, InvalidSelection> {
        if let Err(err) = self.check(piece) {
            trace!("rejected select({piece}): {}", err.reason);
            return Err(err);
        }
        match self.selected.take() {
            None => {
                self.selected = Some(piece);
                Ok(PuzzleOutcome::Selected { piece })
            }
            Some(marked) if marked == piece => Ok(PuzzleOutcome::Deselected { piece }),
            Some(marked) => {
                let solved = self.swap(marked, piece)?;
                Ok(PuzzleOutcome::Swapped {
                    a: marked,
                    b: piece,
                    solved,
                })
            }
        }
    }

    /// Finish a solved puzzle, grading the caller-measured time.
    pub fn complete(&mut self, elapsed: Duration) -> std::result::Result<Outcome, InvalidSelection> {
        if self.outcome.is_some() {
            return Err(InvalidSelection::new(0, RejectReason::RoundComplete));
        }
        if !self.is_solved() {
            return Err(InvalidSelection::new(0, RejectReason::NotSolved));
        }
        let sample = Sample {
            correct: self.pieces.len() as u32,
            wrong: 0,
            moves: self.moves,
            elapsed,
        };
        let outcome = Outcome::grade(GameKind::Puzzle, &self.config.scoring, &sample);
        self.outcome = Some(outcome);
        debug!("puzzle complete in {}s: {}", elapsed.as_secs(), outcome.grade);
        self.sink.on_round_complete(&outcome);
        Ok(outcome)
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.pieces.iter().all(Piece::is_in_place)
    }

    #[must_use]
    pub fn pieces_in_place(&self) -> usize {
        self.pieces.iter().filter(|p| p.is_in_place()).count()
    }

    /// Piece occupying each slot, in slot order.
    #[must_use]
    pub fn layout(&self) -> Vec<usize> {
        let mut slots = vec![0; self.pieces.len()];
        for piece in &self.pieces {
            slots[piece.current_position] = piece.correct_index;
        }
        slots
    }

    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The marked piece, if any.
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Swaps made so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: FeedbackSink> std::fmt::Debug for PuzzleBoard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PuzzleBoard")
            .field("layout", &self.layout())
            .field("selected", &self.selected)
            .field("moves", &self.moves)
            .finish_non_exhaustive()
    }
}
