//! Puzzle variants: the two-click slide puzzle and the drag-and-snap jigsaw.
//!
//! Both share the deck's Fisher–Yates shuffle and grade through a
//! `ScoringPolicy`, by default the time-based `ScoringPolicy::puzzle_time()`.

pub mod board;
pub mod config;
pub mod jigsaw;
pub mod piece;

pub use board::{PuzzleBoard, PuzzleOutcome};
pub use config::PuzzleConfig;
pub use jigsaw::{grid_dimensions, GridDimensions, JigsawBoard, MAX_CELLS, MAX_DIFFICULTY, MIN_DIFFICULTY};
pub use piece::Piece;
