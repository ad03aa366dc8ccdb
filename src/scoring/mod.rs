//! Grading: band tables, scoring policies and round outcomes.
//!
//! Every game ends with a star grade. How the grade is computed is
//! configuration, not engine logic: a `ScoringPolicy` names the metric
//! to measure and a `BandTable` maps its value to stars.

pub mod bands;
pub mod outcome;
pub mod policy;

pub use bands::{BandTable, Grade, GradeBand, MAX_GRADE};
pub use outcome::Outcome;
pub use policy::{Metric, Sample, ScoringPolicy};
