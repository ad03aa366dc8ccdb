//! Feedback sinks.
//!
//! Games call into a `FeedbackSink` at each notable moment. Every method
//! has an empty default, so a sink only implements what it cares about.
//! Sinks are owned by the engine that calls them; there is no global
//! audio or popup manager.

use super::event::FeedbackEvent;
use super::store::ScoreStore;
use crate::scoring::Outcome;

/// Fire-and-forget notifications from a running game.
pub trait FeedbackSink {
    /// A tile was turned face up.
    fn on_flip(&mut self, _position: usize) {}

    /// Two revealed tiles matched.
    fn on_match(&mut self, _pair: [usize; 2]) {}

    /// Two revealed tiles differed.
    fn on_mismatch(&mut self, _pair: [usize; 2]) {}

    /// Two puzzle pieces swapped.
    fn on_swap(&mut self, _a: usize, _b: usize) {}

    /// A jigsaw piece snapped into place.
    fn on_snap(&mut self, _piece: usize) {}

    /// A quiz answer was scored.
    fn on_answer(&mut self, _correct: bool) {}

    /// The round finished.
    fn on_round_complete(&mut self, _outcome: &Outcome) {}

    /// Dispatch an event to the matching method.
    fn notify(&mut self, event: &FeedbackEvent) {
        match *event {
            FeedbackEvent::Flip { position } => self.on_flip(position),
            FeedbackEvent::Match { pair } => self.on_match(pair),
            FeedbackEvent::Mismatch { pair } => self.on_mismatch(pair),
            FeedbackEvent::Swap { a, b } => self.on_swap(a, b),
            FeedbackEvent::Snap { piece } => self.on_snap(piece),
            FeedbackEvent::Answer { correct } => self.on_answer(correct),
            FeedbackEvent::RoundComplete(ref outcome) => self.on_round_complete(outcome),
        }
    }
}

/// Sink that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl FeedbackSink for NullSink {}

/// Sink that records every event in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vec<FeedbackEvent>,
}

impl RecordingSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[FeedbackEvent] {
        &self.events
    }

    /// Count events with the given name.
    #[must_use]
    pub fn count(&self, name: &str) -> usize {
        self.events.iter().filter(|e| e.name() == name).count()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl FeedbackSink for RecordingSink {
    fn on_flip(&mut self, position: usize) {
        self.events.push(FeedbackEvent::Flip { position });
    }

    fn on_match(&mut self, pair: [usize; 2]) {
        self.events.push(FeedbackEvent::Match { pair });
    }

    fn on_mismatch(&mut self, pair: [usize; 2]) {
        self.events.push(FeedbackEvent::Mismatch { pair });
    }

    fn on_swap(&mut self, a: usize, b: usize) {
        self.events.push(FeedbackEvent::Swap { a, b });
    }

    fn on_snap(&mut self, piece: usize) {
        self.events.push(FeedbackEvent::Snap { piece });
    }

    fn on_answer(&mut self, correct: bool) {
        self.events.push(FeedbackEvent::Answer { correct });
    }

    fn on_round_complete(&mut self, outcome: &Outcome) {
        self.events.push(FeedbackEvent::RoundComplete(*outcome));
    }
}

/// Forwards round completions to a score store.
#[derive(Clone, Debug, Default)]
pub struct Persist<S: ScoreStore> {
    store: S,
}

impl<S: ScoreStore> Persist<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

impl<S: ScoreStore> FeedbackSink for Persist<S> {
    fn on_round_complete(&mut self, outcome: &Outcome) {
        self.store.record(outcome);
    }
}

impl<T: FeedbackSink + ?Sized> FeedbackSink for &mut T {
    fn on_flip(&mut self, position: usize) {
        (**self).on_flip(position);
    }
    fn on_match(&mut self, pair: [usize; 2]) {
        (**self).on_match(pair);
    }
    fn on_mismatch(&mut self, pair: [usize; 2]) {
        (**self).on_mismatch(pair);
    }
    fn on_swap(&mut self, a: usize, b: usize) {
        (**self).on_swap(a, b);
    }
    fn on_snap(&mut self, piece: usize) {
        (**self).on_snap(piece);
    }
    fn on_answer(&mut self, correct: bool) {
        (**self).on_answer(correct);
    }
    fn on_round_complete(&mut self, outcome: &Outcome) {
        (**self).on_round_complete(outcome);
    }
}

impl<T: FeedbackSink + ?Sized> FeedbackSink for Box<T> {
    fn on_flip(&mut self, position: usize) {
        (**self).on_flip(position);
    }
    fn on_match(&mut self, pair: [usize; 2]) {
        (**self).on_match(pair);
    }
    fn on_mismatch(&mut self, pair: [usize; 2]) {
        (**self).on_mismatch(pair);
    }
    fn on_swap(&mut self, a: usize, b: usize) {
        (**self).on_swap(a, b);
    }
    fn on_snap(&mut self, piece: usize) {
        (**self).on_snap(piece);
    }
    fn on_answer(&mut self, correct: bool) {
        (**self).on_answer(correct);
    }
    fn on_round_complete(&mut self, outcome: &Outcome) {
        (**self).on_round_complete(outcome);
    }
}

/// Fan out to two sinks, left first.
impl<A: FeedbackSink, B: FeedbackSink> FeedbackSink for (A, B) {
    fn on_flip(&mut self, position: usize) {
        self.0.on_flip(position);
        self.1.on_flip(position);
    }
    fn on_match(&mut self, pair: [usize; 2]) {
        self.0.on_match(pair);
        self.1.on_match(pair);
    }
    fn on_mismatch(&mut self, pair: [usize; 2]) {
        self.0.on_mismatch(pair);
        self.1.on_mismatch(pair);
    }
    fn on_swap(&mut self, a: usize, b: usize) {
        self.0.on_swap(a, b);
        self.1.on_swap(a, b);
    }
    fn on_snap(&mut self, piece: usize) {
        self.0.on_snap(piece);
        self.1.on_snap(piece);
    }
    fn on_answer(&mut self, correct: bool) {
        self.0.on_answer(correct);
        self.1.on_answer(correct);
    }
    fn on_round_complete(&mut self, outcome: &Outcome) {
        self.0.on_round_complete(outcome);
        self.1.on_round_complete(outcome);
    }
}
