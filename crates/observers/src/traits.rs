//! Capability traits for cross-strategy observers.
//!
//! These traits abstract over solver event and action types, so an observer
//! written against them works with any solver that provides the capability.
//!
//! # Event traits
//!
//! - [`HasIteration`]: events that carry a 1-based iteration index
//! - [`HasBracket`]: events that carry the current bracket
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use extremum_core::Observer;
//! use extremum_observers::traits::{CanStopEarly, HasBracket};
//!
//! struct NarrowEnough {
//!     width: f64,
//! }
//!
//! impl<E: HasBracket, A: CanStopEarly> Observer<E, A> for NarrowEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let [low, high] = event.bracket();
//!         (high - low < self.width).then(A::stop_early)
//!     }
//! }
//! ```

use extremum_solvers::{Action, Event};

/// An event that carries an iteration index.
pub trait HasIteration {
    /// Returns the 1-based iteration index of this event.
    fn iteration(&self) -> usize;
}

/// An event that carries the bracket its probes were placed in.
pub trait HasBracket {
    /// Returns the bracket as `[low, high]`.
    fn bracket(&self) -> [f64; 2];
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasIteration for Event<'_> {
    fn iteration(&self) -> usize {
        self.record.iter
    }
}

impl HasBracket for Event<'_> {
    fn bracket(&self) -> [f64; 2] {
        [self.record.low, self.record.high]
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
