//! Core engine types: tokens, RNG, configuration, errors.
//!
//! This module contains the building blocks shared by every game.
//! Games configure these rather than modifying the core.

pub mod config;
pub mod error;
pub mod rng;
pub mod token;

pub use config::{GameKind, RoundConfig};
pub use error::{ConfigError, DeckError, Error, InvalidSelection, RejectReason, Result};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedSource};
pub use token::{SymbolSet, Token};
