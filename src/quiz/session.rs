//! Quiz sessions.
//!
//! Questions and their options are drawn up front, so a session is fully
//! determined by its configuration and random source. Each `answer` call
//! scores the current question and moves on; the last answer grades the
//! session by percent correct.

use log::{debug, trace};

use super::config::QuizConfig;
use super::question::{answer_options, Options, Question};
use crate::core::{GameKind, InvalidSelection, RandomSource, RejectReason, Result};
use crate::feedback::{FeedbackSink, NullSink};
use crate::scoring::{Outcome, Sample};

/// A question with its shuffled options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizItem {
    pub question: Question,
    pub options: Options,
}

/// Result of one answer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnswerResult {
    pub correct: bool,
    /// The right answer to the question just scored.
    pub expected: i64,
    /// Set on the last answer.
    pub outcome: Option<Outcome>,
}

/// An arithmetic quiz in progress.
///
/// ## Example
///
/// ```
/// use rust_minigames::core::GameRng;
/// use rust_minigames::quiz::{QuizConfig, QuizSession};
///
/// let mut rng = GameRng::new(9);
/// let mut quiz = QuizSession::new(QuizConfig::default().with_total_questions(2), &mut rng).unwrap();
///
/// let first = quiz.current().unwrap().question.answer();
/// assert!(quiz.answer(first).unwrap().correct);
///
/// let last = quiz.answer(-1).unwrap();
/// assert!(!last.correct);
/// assert_eq!(last.outcome.unwrap().metric_value, 50);
/// ```
pub struct QuizSession<S: FeedbackSink = NullSink> {
    config: QuizConfig,
    items: Vec<QuizItem>,
    index: usize,
    correct: u32,
    wrong: u32,
    outcome: Option<Outcome>,
    sink: S,
}

impl QuizSession<NullSink> {
    pub fn new(config: QuizConfig, rng: &mut dyn RandomSource) -> Result<Self> {
        Self::with_sink(config, rng, NullSink)
    }
}

impl<S: FeedbackSink> QuizSession<S> {
    pub fn with_sink(config: QuizConfig, rng: &mut dyn RandomSource, sink: S) -> Result<Self> {
        config.validate()?;
        let items = generate(&config, rng);
        Ok(Self {
            config,
            items,
            index: 0,
            correct: 0,
            wrong: 0,
            outcome: None,
            sink,
        })
    }

    /// Draw fresh questions and reset the score.
    pub fn restart(&mut self, rng: &mut dyn RandomSource) {
        self.items = generate(&self.config, rng);
        self.index = 0;
        self.correct = 0;
        self.wrong = 0;
        self.outcome = None;
        debug!("quiz restarted with {} questions", self.items.len());
    }

    /// Score `value` against the current question and advance.
    pub fn answer(&mut self, value: i64) -> std::result::Result<AnswerResult, InvalidSelection> {
        let Some(item) = self.items.get(self.index) else {
            trace!("rejected answer {value}: quiz is over");
            return Err(InvalidSelection::new(self.index, RejectReason::RoundComplete));
        };
        let expected = item.question.answer();
        let correct = value == expected;
        if correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
        }
        self.index += 1;
        self.sink.on_answer(correct);

        let outcome = if self.index == self.items.len() {
            Some(self.finish())
        } else {
            None
        };
        Ok(AnswerResult {
            correct,
            expected,
            outcome,
        })
    }

    fn finish(&mut self) -> Outcome {
        let sample = Sample {
            correct: self.correct,
            wrong: self.wrong,
            moves: self.correct + self.wrong,
            ..Sample::default()
        };
        let outcome = Outcome::grade(GameKind::Quiz, &self.config.scoring, &sample);
        self.outcome = Some(outcome);
        debug!(
            "quiz complete: {}/{} correct, {}",
            self.correct,
            self.items.len(),
            outcome.grade
        );
        self.sink.on_round_complete(&outcome);
        outcome
    }

    /// The question waiting for an answer.
    #[must_use]
    pub fn current(&self) -> Option<&QuizItem> {
        self.items.get(self.index)
    }

    /// Zero-based index of the current question.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcome.is_some()
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &QuizConfig {
        &self.config
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }
}

impl<S: FeedbackSink> std::fmt::Debug for QuizSession<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizSession")
            .field("index", &self.index)
            .field("correct", &self.correct)
            .field("wrong", &self.wrong)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

fn generate(config: &QuizConfig, rng: &mut dyn RandomSource) -> Vec<QuizItem> {
    (0..config.total_questions)
        .map(|_| {
            let question = Question::generate(config.max_operand, rng);
            let options = answer_options(question.answer(), config.option_count, rng);
            QuizItem { question, options }
        })
        .collect()
}
