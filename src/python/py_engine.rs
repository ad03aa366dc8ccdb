//! Match engine bindings for Python.

use pyo3::prelude::*;

use crate::core::{GameRng, RoundConfig, SymbolSet};
use crate::deck::TileState;
use crate::engine::{MatchEngine, Phase, SelectOutcome};
use crate::feedback::RecordingSink;
use crate::scoring::{Outcome, ScoringPolicy};

use super::value_error;

/// Python wrapper for a graded outcome.
#[pyclass(name = "Outcome")]
#[derive(Clone, Debug)]
pub struct PyOutcome(pub Outcome);

#[pymethods]
impl PyOutcome {
    /// Stars earned (0-5).
    #[getter]
    fn stars(&self) -> u8 {
        self.0.stars()
    }

    #[getter]
    fn game(&self) -> &'static str {
        self.0.game.name()
    }

    #[getter]
    fn mismatch_count(&self) -> u32 {
        self.0.mismatch_count
    }

    #[getter]
    fn correct(&self) -> u32 {
        self.0.correct
    }

    #[getter]
    fn attempts(&self) -> u32 {
        self.0.attempts
    }

    /// Value the grade was read from (mismatches, percent, seconds).
    #[getter]
    fn metric_value(&self) -> u32 {
        self.0.metric_value
    }

    fn __repr__(&self) -> String {
        format!(
            "Outcome(game={}, stars={}, mismatches={}, correct={})",
            self.0.game, self.0.grade.stars(), self.0.mismatch_count, self.0.correct
        )
    }
}

/// Python wrapper for MatchEngine.
///
/// Events are buffered and handed out by `drain_events`.
#[pyclass(name = "MatchEngine")]
pub struct PyMatchEngine {
    engine: MatchEngine<RecordingSink>,
    rng: GameRng,
}

#[pymethods]
impl PyMatchEngine {
    /// Create a new round.
    ///
    /// # Arguments
    /// - board_size: Number of tiles (even)
    /// - symbol_count: Distinct symbols to draw pairs from
    /// - seed: RNG seed for deterministic boards
    #[new]
    #[pyo3(signature = (board_size = 16, symbol_count = 8, seed = 42))]
    fn new(board_size: usize, symbol_count: u32, seed: u64) -> PyResult<Self> {
        let config = RoundConfig::new(
            SymbolSet::range(symbol_count),
            board_size,
            ScoringPolicy::memory_match(),
        );
        let mut rng = GameRng::new(seed);
        let engine = MatchEngine::with_sink(config, &mut rng, RecordingSink::new()).map_err(value_error)?;
        Ok(Self { engine, rng })
    }

    /// Select a tile.
    ///
    /// Returns "first-reveal", "match" or "mismatch".
    fn select(&mut self, position: usize) -> PyResult<&'static str> {
        let outcome = self.engine.select(position).map_err(value_error)?;
        Ok(match outcome {
            SelectOutcome::FirstReveal => "first-reveal",
            SelectOutcome::Match { .. } => "match",
            SelectOutcome::Mismatch { .. } => "mismatch",
        })
    }

    /// Deal a new board from the same configuration.
    fn restart(&mut self) -> PyResult<()> {
        self.engine.restart(&mut self.rng).map_err(value_error)?;
        self.engine.sink_mut().clear();
        Ok(())
    }

    /// Token ids of face-up tiles, `None` for hidden ones.
    fn visible_tokens(&self) -> Vec<Option<u32>> {
        self.engine
            .board()
            .iter()
            .map(|t| (t.state != TileState::Hidden).then_some(t.token.raw()))
            .collect()
    }

    /// Names of events since the last call, oldest first.
    fn drain_events(&mut self) -> Vec<&'static str> {
        let names = self.engine.sink().events().iter().map(|e| e.name()).collect();
        self.engine.sink_mut().clear();
        names
    }

    #[getter]
    fn phase(&self) -> &'static str {
        match self.engine.phase() {
            Phase::Idle => "idle",
            Phase::OneRevealed => "one-revealed",
            Phase::Resolving => "resolving",
            Phase::Complete => "complete",
        }
    }

    #[getter]
    fn matched_pairs(&self) -> u32 {
        self.engine.round().matched_pairs
    }

    #[getter]
    fn mismatch_count(&self) -> u32 {
        self.engine.round().mismatch_count
    }

    #[getter]
    fn hidden_tiles(&self) -> usize {
        self.engine.hidden_tiles()
    }

    #[getter]
    fn outcome(&self) -> Option<PyOutcome> {
        self.engine.outcome().copied().map(PyOutcome)
    }

    fn __len__(&self) -> usize {
        self.engine.board().len()
    }

    fn __repr__(&self) -> String {
        format!(
            "MatchEngine(tiles={}, matched={}/{}, mismatches={})",
            self.engine.board().len(),
            self.engine.round().matched_pairs,
            self.engine.round().total_pairs,
            self.engine.round().mismatch_count
        )
    }
}
