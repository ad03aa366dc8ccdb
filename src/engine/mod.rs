//! Round state and the memory-match engine.

pub mod match_engine;
pub mod round;

pub use match_engine::{MatchEngine, SelectOutcome};
pub use round::{Phase, RoundSnapshot, RoundState};
