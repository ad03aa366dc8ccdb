//! Feedback and persistence boundary.
//!
//! Games report what happens through a `FeedbackSink` handed to them at
//! construction. Audio, animation triggers and results popups are sink
//! implementations outside this crate. Finished outcomes can be forwarded
//! to a `ScoreStore` with `Persist`.

pub mod event;
pub mod sink;
pub mod store;

pub use event::FeedbackEvent;
pub use sink::{FeedbackSink, NullSink, Persist, RecordingSink};
pub use store::{InMemoryScoreStore, ScoreRecord, ScoreStore};
