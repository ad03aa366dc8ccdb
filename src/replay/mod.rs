//! Deterministic replays of memory-match rounds.
//!
//! A round is fully determined by its configuration, the random source
//! state it was built from and the accepted selections. A `Replay` keeps
//! those three plus a snapshot after every selection, so a round can be
//! stepped through, checked or shipped as bytes.
//!
//! Snapshots live in an `im::Vector`, so cloning a replay (or handing
//! out its history) does not copy the per-step states.
//!
//! ## Example
//!
//! ```
//! use rust_minigames::core::{RoundConfig, SymbolSet};
//! use rust_minigames::replay::Replay;
//! use rust_minigames::scoring::ScoringPolicy;
//!
//! let config = RoundConfig::new(SymbolSet::range(4), 8, ScoringPolicy::memory_match());
//! let replay = Replay::run(config, 42, [0, 1, 2, 3]).unwrap();
//! assert_eq!(replay.len(), 4);
//!
//! let bytes = replay.to_bytes().unwrap();
//! let decoded = Replay::from_bytes(&bytes).unwrap();
//! assert_eq!(decoded, replay);
//! assert!(decoded.verify().unwrap());
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::core::{GameRng, GameRngState, InvalidSelection, Result, RoundConfig};
use crate::engine::{MatchEngine, RoundSnapshot, SelectOutcome};
use crate::feedback::{FeedbackSink, NullSink};
use crate::scoring::Outcome;

/// Recorded round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    rng_state: GameRngState,
    config: RoundConfig,
    selections: Vec<usize>,
    snapshots: im::Vector<RoundSnapshot>,
    outcome: Option<Outcome>,
}

impl Replay {
    /// Play `selections` on a fresh round seeded with `seed`.
    ///
    /// Fails on the first rejected selection.
    pub fn run(config: RoundConfig, seed: u64, selections: impl IntoIterator<Item = usize>) -> Result<Self> {
        Self::run_from(config, GameRng::new(seed), selections)
    }

    fn run_from(config: RoundConfig, rng: GameRng, selections: impl IntoIterator<Item = usize>) -> Result<Self> {
        let mut recorder = Recorder::start(config, rng)?;
        for position in selections {
            recorder.select(position)?;
        }
        Ok(recorder.finish())
    }

    /// Re-run the round and check it reproduces every snapshot and the outcome.
    pub fn verify(&self) -> Result<bool> {
        let rerun = Self::run_from(
            self.config.clone(),
            GameRng::from_state(&self.rng_state),
            self.selections.iter().copied(),
        )?;
        Ok(rerun.snapshots == self.snapshots && rerun.outcome == self.outcome)
    }

    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by `to_bytes`, validating the configuration.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let replay: Self = bincode::deserialize(bytes)?;
        replay.config.validate()?;
        Ok(replay)
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng_state.seed
    }

    #[must_use]
    pub fn rng_state(&self) -> &GameRngState {
        &self.rng_state
    }

    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Accepted selections in order.
    #[must_use]
    pub fn selections(&self) -> &[usize] {
        &self.selections
    }

    /// Snapshot after each accepted selection.
    #[must_use]
    pub fn snapshots(&self) -> &im::Vector<RoundSnapshot> {
        &self.snapshots
    }

    /// Snapshot after the `step`-th selection (zero-based).
    #[must_use]
    pub fn snapshot_at(&self, step: usize) -> Option<&RoundSnapshot> {
        self.snapshots.get(step)
    }

    #[must_use]
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Number of recorded selections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// Records a live round as it is played.
pub struct Recorder<S: FeedbackSink = NullSink> {
    engine: MatchEngine<S>,
    replay: Replay,
}

impl Recorder<NullSink> {
    /// Build a round from `rng`, capturing its state first.
    pub fn start(config: RoundConfig, rng: GameRng) -> Result<Self> {
        Self::with_sink(config, rng, NullSink)
    }
}

impl<S: FeedbackSink> Recorder<S> {
    pub fn with_sink(config: RoundConfig, mut rng: GameRng, sink: S) -> Result<Self> {
        let rng_state = rng.state();
        let engine = MatchEngine::with_sink(config.clone(), &mut rng, sink)?;
        Ok(Self {
            engine,
            replay: Replay {
                rng_state,
                config,
                selections: Vec::new(),
                snapshots: im::Vector::new(),
                outcome: None,
            },
        })
    }

    /// Forward a selection to the engine, recording it if accepted.
    pub fn select(&mut self, position: usize) -> std::result::Result<SelectOutcome, InvalidSelection> {
        let result = self.engine.select(position)?;
        self.replay.selections.push(position);
        self.replay.snapshots.push_back(self.engine.snapshot());
        if let Some(outcome) = self.engine.outcome() {
            self.replay.outcome = Some(*outcome);
        }
        Ok(result)
    }

    #[must_use]
    pub fn engine(&self) -> &MatchEngine<S> {
        &self.engine
    }

    /// The recording so far.
    #[must_use]
    pub fn replay(&self) -> &Replay {
        &self.replay
    }

    pub fn finish(self) -> Replay {
        debug!(
            "recorded {} selections (seed {})",
            self.replay.len(),
            self.replay.seed()
        );
        self.replay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Error, RejectReason, SymbolSet};
    use crate::scoring::ScoringPolicy;

    fn config() -> RoundConfig {
        RoundConfig::new(SymbolSet::range(6), 8, ScoringPolicy::memory_match())
    }

    /// Selections that clear a board: each tile then its partner.
    fn solving_selections(seed: u64) -> Vec<usize> {
        let engine = MatchEngine::new(config(), &mut GameRng::new(seed)).unwrap();
        let board = engine.board();
        let mut seen = vec![false; board.len()];
        let mut selections = Vec::new();
        for tile in board.iter() {
            if seen[tile.position] {
                continue;
            }
            let partner = board.partner_of(tile.position).unwrap();
            seen[tile.position] = true;
            seen[partner] = true;
            selections.extend([tile.position, partner]);
        }
        selections
    }

    #[test]
    fn test_run_records_each_step() {
        let selections = solving_selections(3);
        let replay = Replay::run(config(), 3, selections.clone()).unwrap();
        assert_eq!(replay.selections(), selections.as_slice());
        assert_eq!(replay.snapshots().len(), 8);
        assert_eq!(replay.outcome().map(Outcome::stars), Some(5));
        assert!(replay.snapshot_at(7).unwrap().round.is_complete());
        assert_eq!(replay.seed(), 3);
    }

    #[test]
    fn test_same_seed_same_replay() {
        let a = Replay::run(config(), 17, [0, 1, 2, 3, 4, 5]).unwrap();
        let b = Replay::run(config(), 17, [0, 1, 2, 3, 4, 5]).unwrap();
        assert_eq!(a, b);
        assert!(a.verify().unwrap());
    }

    #[test]
    fn test_rejected_selection_fails_run() {
        let err = Replay::run(config(), 1, [0, 0]).unwrap_err();
        assert!(matches!(
            err,
            Error::Selection(InvalidSelection {
                position: 0,
                reason: RejectReason::AlreadyRevealed
            })
        ));
    }

    #[test]
    fn test_tampered_replay_fails_verify() {
        let mut replay = Replay::run(config(), 5, solving_selections(5)).unwrap();
        assert!(replay.verify().unwrap());
        replay.outcome = None;
        assert!(!replay.verify().unwrap());
    }

    #[test]
    fn test_bytes_roundtrip() {
        let replay = Replay::run(config(), 8, solving_selections(8)).unwrap();
        let bytes = replay.to_bytes().unwrap();
        let decoded = Replay::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, replay);
        assert!(matches!(Replay::from_bytes(&bytes[..3]), Err(Error::Codec(_))));
    }

    #[test]
    fn test_recorder_skips_rejections() {
        let mut recorder = Recorder::start(config(), GameRng::new(2)).unwrap();
        recorder.select(0).unwrap();
        assert!(recorder.select(0).is_err());
        assert!(recorder.select(99).is_err());
        assert_eq!(recorder.replay().selections(), &[0]);
        assert_eq!(recorder.finish().len(), 1);
    }
}
