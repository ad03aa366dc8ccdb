//! Puzzle bindings for Python.

use std::time::Duration;

use pyo3::prelude::*;

use crate::core::GameRng;
use crate::puzzle::{PuzzleBoard, PuzzleConfig, PuzzleOutcome};

use super::py_engine::PyOutcome;
use super::value_error;

/// Python wrapper for PuzzleBoard.
#[pyclass(name = "PuzzleBoard")]
pub struct PyPuzzleBoard {
    board: PuzzleBoard,
    rng: GameRng,
}

#[pymethods]
impl PyPuzzleBoard {
    /// Create a shuffled slide puzzle.
    #[new]
    #[pyo3(signature = (piece_count = 16, seed = 42))]
    fn new(piece_count: usize, seed: u64) -> PyResult<Self> {
        let mut rng = GameRng::new(seed);
        let board = PuzzleBoard::shuffled(PuzzleConfig::new(piece_count), &mut rng).map_err(value_error)?;
        Ok(Self { board, rng })
    }

    /// Tap a piece. Returns "selected", "deselected", "swapped" or "solved".
    fn select(&mut self, piece: usize) -> PyResult<&'static str> {
        let outcome = self.board.select(piece).map_err(value_error)?;
        Ok(match outcome {
            PuzzleOutcome::Selected { .. } => "selected",
            PuzzleOutcome::Deselected { .. } => "deselected",
            PuzzleOutcome::Swapped { solved: false, .. } => "swapped",
            PuzzleOutcome::Swapped { solved: true, .. } => "solved",
        })
    }

    /// Swap two pieces directly. Returns whether the puzzle is solved.
    fn swap(&mut self, a: usize, b: usize) -> PyResult<bool> {
        self.board.swap(a, b).map_err(value_error)
    }

    /// Grade a solved puzzle by the seconds it took.
    fn complete(&mut self, elapsed_seconds: f64) -> PyResult<PyOutcome> {
        let elapsed = Duration::try_from_secs_f64(elapsed_seconds).map_err(value_error)?;
        let outcome = self.board.complete(elapsed).map_err(value_error)?;
        Ok(PyOutcome(outcome))
    }

    fn restart(&mut self) {
        self.board.restart(&mut self.rng);
    }

    /// Piece in each slot.
    fn layout(&self) -> Vec<usize> {
        self.board.layout()
    }

    fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    #[getter]
    fn pieces_in_place(&self) -> usize {
        self.board.pieces_in_place()
    }

    #[getter]
    fn moves(&self) -> u32 {
        self.board.moves()
    }

    #[getter]
    fn selected(&self) -> Option<usize> {
        self.board.selected()
    }

    fn __repr__(&self) -> String {
        format!(
            "PuzzleBoard(pieces={}, in_place={}, moves={})",
            self.board.pieces().len(),
            self.board.pieces_in_place(),
            self.board.moves()
        )
    }
}
