//! Arithmetic questions and multiple-choice options.
//!
//! ## Generation
//!
//! - Addition: both operands in `1..=max_operand`
//! - Subtraction: same range, larger operand first so the answer is never negative
//! - Multiplication: both operands in `2..=10`
//!
//! Distractors sit at a random offset in `[-10, 10]` from the answer. A
//! zero offset is replaced by one in `1..=5`. Distractors must be
//! positive and distinct from each other and from the answer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::RandomSource;
use crate::deck::shuffle;

/// Largest distractor offset either side of the answer.
pub const DISTRACTOR_SPREAD: i64 = 10;

/// Largest `max_operand` a quiz accepts.
pub const MAX_OPERAND: i64 = 1_000_000;

/// Most options a question can always offer: the answer plus every
/// positive offset when the answer is zero.
pub const MAX_OPTIONS: usize = DISTRACTOR_SPREAD as usize + 1;

/// Multiple-choice answers; four inline.
pub type Options = SmallVec<[i64; 4]>;

/// Arithmetic operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '×',
        }
    }

    #[must_use]
    pub const fn apply(self, left: i64, right: i64) -> i64 {
        match self {
            Operation::Add => left + right,
            Operation::Subtract => left - right,
            Operation::Multiply => left * right,
        }
    }
}

/// One question, e.g. `7 × 8 = ?`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Question {
    pub left: i64,
    pub right: i64,
    pub operation: Operation,
}

impl Question {
    #[must_use]
    pub const fn new(left: i64, operation: Operation, right: i64) -> Self {
        Self { left, right, operation }
    }

    /// Draw a random question.
    pub fn generate(max_operand: i64, rng: &mut dyn RandomSource) -> Self {
        let operation = Operation::ALL[rng.next_int(Operation::ALL.len())];
        match operation {
            Operation::Add => {
                let left = rng.next_in_range(1, max_operand);
                let right = rng.next_in_range(1, max_operand);
                Self::new(left, operation, right)
            }
            Operation::Subtract => {
                let a = rng.next_in_range(1, max_operand);
                let b = rng.next_in_range(1, max_operand);
                Self::new(a.max(b), operation, a.min(b))
            }
            Operation::Multiply => {
                let left = rng.next_in_range(2, 10);
                let right = rng.next_in_range(2, 10);
                Self::new(left, operation, right)
            }
        }
    }

    /// The correct answer.
    #[must_use]
    pub const fn answer(&self) -> i64 {
        self.operation.apply(self.left, self.right)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} = ?", self.left, self.operation.symbol(), self.right)
    }
}

/// Build `option_count` shuffled options containing `correct`.
///
/// `option_count` must be in `1..=MAX_OPTIONS`. Random draws are capped;
/// if the cap is hit the remaining slots take the nearest free values
/// above the answer.
pub fn answer_options(correct: i64, option_count: usize, rng: &mut dyn RandomSource) -> Options {
    let mut options = Options::new();
    options.push(correct);

    let mut draws = 0;
    while options.len() < option_count && draws < option_count * 32 {
        draws += 1;
        let mut offset = rng.next_in_range(-DISTRACTOR_SPREAD, DISTRACTOR_SPREAD);
        if offset == 0 {
            offset = rng.next_in_range(1, 5);
        }
        let candidate = correct + offset;
        if candidate > 0 && !options.contains(&candidate) {
            options.push(candidate);
        }
    }

    let mut next = correct.max(0) + 1;
    while options.len() < option_count {
        if !options.contains(&next) {
            options.push(next);
        }
        next += 1;
    }

    shuffle(&mut options, rng);
    options
}
