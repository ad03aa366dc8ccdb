//! Quiz bindings for Python.

use pyo3::prelude::*;

use crate::core::GameRng;
use crate::quiz::{QuizConfig, QuizSession};

use super::py_engine::PyOutcome;
use super::value_error;

/// Python wrapper for QuizSession.
#[pyclass(name = "QuizSession")]
pub struct PyQuizSession {
    session: QuizSession,
    rng: GameRng,
}

#[pymethods]
impl PyQuizSession {
    #[new]
    #[pyo3(signature = (total_questions = 10, max_operand = 20, option_count = 4, seed = 42))]
    fn new(total_questions: usize, max_operand: i64, option_count: usize, seed: u64) -> PyResult<Self> {
        let config = QuizConfig::default()
            .with_total_questions(total_questions)
            .with_max_operand(max_operand)
            .with_option_count(option_count);
        let mut rng = GameRng::new(seed);
        let session = QuizSession::new(config, &mut rng).map_err(value_error)?;
        Ok(Self { session, rng })
    }

    /// Text of the current question, `None` once finished.
    #[getter]
    fn question(&self) -> Option<String> {
        self.session.current().map(|item| item.question.to_string())
    }

    /// Options for the current question.
    #[getter]
    fn options(&self) -> Vec<i64> {
        self.session
            .current()
            .map(|item| item.options.to_vec())
            .unwrap_or_default()
    }

    /// Answer the current question. Returns whether it was right.
    fn answer(&mut self, value: i64) -> PyResult<bool> {
        let result = self.session.answer(value).map_err(value_error)?;
        Ok(result.correct)
    }

    fn restart(&mut self) {
        self.session.restart(&mut self.rng);
    }

    #[getter]
    fn index(&self) -> usize {
        self.session.index()
    }

    #[getter]
    fn correct_answers(&self) -> u32 {
        self.session.correct_answers()
    }

    #[getter]
    fn outcome(&self) -> Option<PyOutcome> {
        self.session.outcome().copied().map(PyOutcome)
    }

    fn __repr__(&self) -> String {
        format!(
            "QuizSession(question={}/{}, correct={})",
            self.session.index(),
            self.session.items().len(),
            self.session.correct_answers()
        )
    }
}
