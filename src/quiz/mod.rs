//! Arithmetic quiz: generated questions, multiple-choice options and
//! percent-correct grading.

pub mod config;
pub mod question;
pub mod session;

pub use config::QuizConfig;
pub use question::{answer_options, Operation, Options, Question, DISTRACTOR_SPREAD, MAX_OPERAND, MAX_OPTIONS};
pub use session::{AnswerResult, QuizItem, QuizSession};
