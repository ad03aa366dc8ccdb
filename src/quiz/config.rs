//! Quiz configuration.

use serde::{Deserialize, Serialize};

use super::question::{MAX_OPERAND, MAX_OPTIONS};
use crate::core::config::require_positive;
use crate::core::{ConfigError, GameKind, Result};
use crate::scoring::ScoringPolicy;

/// Configuration for an arithmetic quiz.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Questions per session.
    pub total_questions: usize,
    /// Upper operand for addition and subtraction.
    pub max_operand: i64,
    /// Answer buttons per question, including the correct one.
    pub option_count: usize,
    pub scoring: ScoringPolicy,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            total_questions: 10,
            max_operand: 20,
            option_count: 4,
            scoring: ScoringPolicy::quiz(),
        }
    }
}

impl QuizConfig {
    #[must_use]
    pub fn with_total_questions(mut self, total_questions: usize) -> Self {
        self.total_questions = total_questions;
        self
    }

    #[must_use]
    pub fn with_max_operand(mut self, max_operand: i64) -> Self {
        self.max_operand = max_operand;
        self
    }

    #[must_use]
    pub fn with_option_count(mut self, option_count: usize) -> Self {
        self.option_count = option_count;
        self
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringPolicy) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require_positive("total_questions", self.total_questions)?;
        if !(1..=MAX_OPERAND).contains(&self.max_operand) {
            return Err(ConfigError::InvalidValue {
                field: "max_operand",
                reason: "must be between 1 and 1000000",
            }
            .into());
        }
        if !(1..=MAX_OPTIONS).contains(&self.option_count) {
            return Err(ConfigError::InvalidValue {
                field: "option_count",
                reason: "must be between 1 and 11",
            }
            .into());
        }
        self.scoring.validate_for(GameKind::Quiz)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;

    #[test]
    fn test_default() {
        let config = QuizConfig::default();
        assert_eq!(config.total_questions, 10);
        assert_eq!(config.max_operand, 20);
        assert_eq!(config.option_count, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values() {
        for config in [
            QuizConfig::default().with_total_questions(0),
            QuizConfig::default().with_max_operand(0),
            QuizConfig::default().with_max_operand(MAX_OPERAND + 1),
            QuizConfig::default().with_max_operand(i64::MAX),
            QuizConfig::default().with_option_count(0),
            QuizConfig::default().with_option_count(12),
        ] {
            assert!(matches!(
                config.validate(),
                Err(Error::Config(ConfigError::InvalidValue { .. }))
            ));
        }
    }

    #[test]
    fn test_largest_operand_plays() {
        use crate::core::GameRng;
        use crate::quiz::QuizSession;

        let config = QuizConfig::default().with_max_operand(MAX_OPERAND).with_total_questions(200);
        assert!(config.validate().is_ok());
        let quiz = QuizSession::new(config, &mut GameRng::new(3)).unwrap();
        for item in quiz.items() {
            assert!(item.question.answer() <= 2 * MAX_OPERAND);
            assert!(item.options.contains(&item.question.answer()));
        }
    }

    #[test]
    fn test_serialization() {
        let config = QuizConfig::default().with_option_count(3);
        let json = serde_json::to_string(&config).unwrap();
        let back: QuizConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
