//! Jigsaw grid sizing and snapping.
//!
//! A picture of `width × height` is cut into a grid whose short side has
//! `difficulty` cells; the long side is scaled by the aspect ratio with
//! integer division. The board is laid out in a space one unit tall and
//! `width / height` units wide, centred on the origin, with row 0 at the
//! bottom. A dropped piece snaps when it lands within half a cell width
//! of its slot centre; snapped pieces are locked.

use std::time::Duration;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GameKind, InvalidSelection, RejectReason, Result};
use crate::feedback::{FeedbackSink, NullSink};
use crate::scoring::{Outcome, Sample, ScoringPolicy};

/// Smallest supported difficulty.
pub const MIN_DIFFICULTY: u32 = 2;
/// Largest supported difficulty.
pub const MAX_DIFFICULTY: u32 = 6;
/// Most pieces a picture may be cut into.
pub const MAX_CELLS: usize = 4096;

/// Grid size in cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridDimensions {
    pub columns: u32,
    pub rows: u32,
}

impl GridDimensions {
    /// Total number of pieces.
    #[must_use]
    pub const fn cells(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

impl std::fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}

/// Grid for a picture of `width × height` pixels.
///
/// ```
/// use rust_minigames::puzzle::grid_dimensions;
///
/// let grid = grid_dimensions(1920, 1080, 4).unwrap();
/// assert_eq!((grid.columns, grid.rows), (7, 4));
/// ```
pub fn grid_dimensions(width: u32, height: u32, difficulty: u32) -> std::result::Result<GridDimensions, ConfigError> {
    if width == 0 || height == 0 {
        return Err(ConfigError::InvalidValue {
            field: "picture",
            reason: "width and height must be greater than zero",
        });
    }
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&difficulty) {
        return Err(ConfigError::InvalidValue {
            field: "difficulty",
            reason: "must be between 2 and 6",
        });
    }

    let too_large = ConfigError::InvalidValue {
        field: "picture",
        reason: "aspect ratio too extreme for a jigsaw grid",
    };
    let scale = |long: u32, short: u32| {
        u32::try_from(u64::from(difficulty) * u64::from(long) / u64::from(short)).map_err(|_| too_large.clone())
    };
    let grid = if width < height {
        GridDimensions {
            columns: difficulty,
            rows: scale(height, width)?,
        }
    } else {
        GridDimensions {
            columns: scale(width, height)?,
            rows: difficulty,
        }
    };
    if grid.cells() > MAX_CELLS {
        return Err(too_large);
    }
    Ok(grid)
}

/// A jigsaw in progress.
pub struct JigsawBoard<S: FeedbackSink = NullSink> {
    grid: GridDimensions,
    cell_width: f32,
    cell_height: f32,
    snapped: Vec<bool>,
    snapped_count: usize,
    drops: u32,
    scoring: ScoringPolicy,
    outcome: Option<Outcome>,
    sink: S,
}

impl JigsawBoard<NullSink> {
    /// Cut a `width × height` picture at `difficulty`.
    pub fn new(width: u32, height: u32, difficulty: u32, scoring: ScoringPolicy) -> Result<Self> {
        Self::with_sink(width, height, difficulty, scoring, NullSink)
    }
}

impl<S: FeedbackSink> JigsawBoard<S> {
    pub fn with_sink(width: u32, height: u32, difficulty: u32, scoring: ScoringPolicy, sink: S) -> Result<Self> {
        let grid = grid_dimensions(width, height, difficulty)?;
        scoring.validate_for(GameKind::Puzzle)?;
        let aspect = width as f32 / height as f32;
        debug!("jigsaw grid {grid} for {width}x{height}");
        Ok(Self {
            grid,
            cell_width: aspect / grid.columns as f32,
            cell_height: 1.0 / grid.rows as f32,
            snapped: vec![false; grid.cells()],
            snapped_count: 0,
            drops: 0,
            scoring,
            outcome: None,
            sink,
        })
    }

    /// Centre of a piece's slot, or `None` past the last piece.
    #[must_use]
    pub fn slot_centre(&self, piece: usize) -> Option<(f32, f32)> {
        if piece >= self.snapped.len() {
            return None;
        }
        let columns = self.grid.columns as usize;
        let (col, row) = ((piece % columns) as f32, (piece / columns) as f32);
        let x = -self.cell_width * self.grid.columns as f32 / 2.0 + self.cell_width * col + self.cell_width / 2.0;
        let y = -self.cell_height * self.grid.rows as f32 / 2.0 + self.cell_height * row + self.cell_height / 2.0;
        Some((x, y))
    }

    /// Drop `piece` at `(x, y)`. Returns whether it snapped into its slot.
    pub fn drop_piece(&mut self, piece: usize, x: f32, y: f32) -> std::result::Result<bool, InvalidSelection> {
        if self.outcome.is_some() || self.is_complete() {
            return Err(InvalidSelection::new(piece, RejectReason::RoundComplete));
        }
        let (cx, cy) = self.slot_centre(piece).ok_or(InvalidSelection::new(
            piece,
            RejectReason::OutOfRange {
                len: self.snapped.len(),
            },
        ))?;
        if self.snapped[piece] {
            trace!("piece {piece} is already locked");
            return Err(InvalidSelection::new(piece, RejectReason::AlreadyMatched));
        }

        self.drops += 1;
        let distance = ((x - cx).powi(2) + (y - cy).powi(2)).sqrt();
        if distance.is_nan() || distance >= self.cell_width / 2.0 {
            return Ok(false);
        }

        self.snapped[piece] = true;
        self.snapped_count += 1;
        self.sink.on_snap(piece);
        trace!("piece {piece} snapped ({}/{})", self.snapped_count, self.snapped.len());
        Ok(true)
    }

    /// Finish a fully snapped jigsaw, grading the caller-measured time.
    pub fn complete(&mut self, elapsed: Duration) -> std::result::Result<Outcome, InvalidSelection> {
        if self.outcome.is_some() {
            return Err(InvalidSelection::new(0, RejectReason::RoundComplete));
        }
        if !self.is_complete() {
            return Err(InvalidSelection::new(self.snapped_count, RejectReason::NotSolved));
        }
        let sample = Sample {
            correct: self.snapped_count as u32,
            wrong: 0,
            moves: self.drops,
            elapsed,
        };
        let outcome = Outcome::grade(GameKind::Puzzle, &self.scoring, &sample);
        self.outcome = Some(outcome);
        debug!("jigsaw complete in {}s: {}", elapsed.as_secs(), outcome.grade);
        self.sink.on_round_complete(&outcome);
        Ok(outcome)
    }

    /// Every piece snapped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.snapped_count == self.snapped.len()
    }

    #[must_use]
    pub fn is_snapped(&self, piece: usize) -> bool {
        self.snapped.get(piece).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn grid(&self) -> GridDimensions {
        self.grid
    }

    #[must_use]
    pub fn snapped_count(&self) -> usize {
        self.snapped_count
    }

    /// Size of one cell as `(width, height)`.
    #[must_use]
    pub fn cell_size(&self) -> (f32, f32) {
        (self.cell_width, self.cell_height)
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }
}

impl<S: FeedbackSink> std::fmt::Debug for JigsawBoard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JigsawBoard")
            .field("grid", &self.grid)
            .field("snapped_count", &self.snapped_count)
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}
