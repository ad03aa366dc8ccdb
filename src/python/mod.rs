//! Python bindings for the mini-game engines.
//!
//! # Quick Start
//!
//! ```python
//! import rust_minigames as mg
//!
//! engine = mg.MatchEngine(board_size=16, symbol_count=8, seed=42)
//! result = engine.select(0)       # "first-reveal"
//! result = engine.select(5)       # "match" or "mismatch"
//!
//! quiz = mg.QuizSession(total_questions=10, seed=7)
//! print(quiz.question, quiz.options)
//! quiz.answer(quiz.options[0])
//! ```
//!
//! Rejected inputs and bad configuration raise `ValueError`.

use pyo3::prelude::*;

mod py_engine;
mod py_puzzle;
mod py_quiz;

pub use py_engine::*;
pub use py_puzzle::*;
pub use py_quiz::*;

/// Convert any crate error into a Python `ValueError`.
pub(crate) fn value_error(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
}

/// rust-minigames: deterministic memory-match, puzzle and quiz engines.
#[pymodule]
fn rust_minigames(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyOutcome>()?;
    m.add_class::<PyMatchEngine>()?;
    m.add_class::<PyPuzzleBoard>()?;
    m.add_class::<PyQuizSession>()?;
    Ok(())
}
