//! # rust-minigames
//!
//! Deterministic game-state engines for a tile-matching memory game, a
//! slide/jigsaw puzzle and an arithmetic quiz.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: Engines never sleep, animate or play sounds.
//!    Every call runs to completion; timing belongs to the caller.
//!
//! 2. **Injected Everything**: Randomness comes from a `RandomSource`,
//!    notifications go to a `FeedbackSink`, results go to a `ScoreStore`.
//!    There is no global state.
//!
//! 3. **Configuration Over Convention**: Symbol sets, board sizes and
//!    grade band tables are plain data validated at construction.
//!
//! ## Architecture
//!
//! - **Atomic Resolution**: a second reveal is compared and resolved
//!   inside the same `select` call, so no half-resolved state is visible.
//!
//! - **Deterministic Replays**: the same seed and selections reproduce the
//!   same boards, snapshots and outcome.
//!
//! ## Modules
//!
//! - `core`: Tokens, RNG, configuration, errors
//! - `deck`: Tiles, boards and the shuffling deck builder
//! - `engine`: Round state and the match engine
//! - `scoring`: Grade bands, scoring policies, outcomes
//! - `feedback`: Events, sinks and score stores
//! - `puzzle`: Slide puzzle and jigsaw
//! - `quiz`: Arithmetic quiz
//! - `replay`: Recorded rounds
//!
//! ## Example
//!
//! ```
//! use rust_minigames::{GameRng, MatchEngine, RoundConfig, ScoringPolicy, SymbolSet};
//!
//! let config = RoundConfig::new(SymbolSet::range(8), 16, ScoringPolicy::memory_match());
//! let mut engine = MatchEngine::new(config, &mut GameRng::new(42)).unwrap();
//!
//! // Clear the board by always picking a tile and its partner
//! while !engine.is_complete() {
//!     let tile = *engine.board().iter().find(|t| t.is_hidden()).unwrap();
//!     let partner = engine.board().partner_of(tile.position).unwrap();
//!     engine.select(tile.position).unwrap();
//!     engine.select(partner).unwrap();
//! }
//! assert_eq!(engine.outcome().unwrap().stars(), 5);
//! ```

pub mod core;
pub mod deck;
pub mod engine;
pub mod feedback;
pub mod puzzle;
pub mod quiz;
pub mod replay;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DeckError, Error, GameKind, GameRng, GameRngState, InvalidSelection, RandomSource,
    RejectReason, Result, RoundConfig, ScriptedSource, SymbolSet, Token,
};

pub use crate::deck::{Board, DeckBuilder, Tile, TileState};

pub use crate::engine::{MatchEngine, Phase, RoundSnapshot, RoundState, SelectOutcome};

pub use crate::scoring::{BandTable, Grade, GradeBand, Metric, Outcome, Sample, ScoringPolicy, MAX_GRADE};

pub use crate::feedback::{
    FeedbackEvent, FeedbackSink, InMemoryScoreStore, NullSink, Persist, RecordingSink, ScoreRecord,
    ScoreStore,
};

pub use crate::puzzle::{grid_dimensions, GridDimensions, JigsawBoard, Piece, PuzzleBoard, PuzzleConfig, PuzzleOutcome};

pub use crate::quiz::{AnswerResult, Operation, Question, QuizConfig, QuizItem, QuizSession};

pub use crate::replay::{Recorder, Replay};

#[cfg(feature = "python")]
pub mod python;
