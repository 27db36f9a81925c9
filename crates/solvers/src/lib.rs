//! Derivative-free extremum search over a bounded interval.
//!
//! Three strategies narrow a bracketing interval `[low, high]` toward the
//! maximum or minimum of a single-variable objective:
//!
//! - [`dichotomous`]: two probes `ε` either side of the midpoint, halving
//!   the bracket each iteration
//! - [`golden_section`]: interior points at golden-ratio offsets, reusing
//!   one evaluated point per iteration
//! - [`fibonacci`]: interior points at Fibonacci-ratio offsets with an
//!   iteration count fixed in advance by the target bracket width
//!
//! Every strategy records one [`IterationRecord`] per iteration and returns a
//! [`Solution`] holding the full trace, the final interval, and the best
//! point (the midpoint of the final interval).
//!
//! # Entry points
//!
//! - [`Strategy::search`] takes raw [`SearchParameters`], validates them,
//!   parses the expression, and dispatches to a strategy.
//! - Each strategy module exposes `search` / `search_unobserved` taking any
//!   [`Model`] over `f64`, validated [`Bounds`] and [`Tolerance`], and a
//!   [`Direction`].
//!
//! # Observer events
//!
//! All strategies emit one [`Event`] per iteration, after the iteration's
//! probes are evaluated and before the bracket is narrowed. Observers can
//! return [`Action::StopEarly`] to end the search; the solution is then built
//! from the bracket of the last recorded iteration.
//!
//! [`SearchParameters`]: extremum_core::SearchParameters
//! [`Model`]: extremum_core::Model
//! [`Bounds`]: extremum_core::Bounds
//! [`Tolerance`]: extremum_core::Tolerance
//! [`Direction`]: extremum_core::Direction

mod action;
mod config;
mod error;
mod evaluate;
mod event;
mod point;
mod record;
mod solution;
mod strategy;
mod trace;

#[cfg(test)]
mod testing;

pub mod dichotomous;
pub mod fibonacci;
pub mod golden_section;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::{Error, ErrorKind};
pub use event::Event;
pub use point::Point;
pub use record::{Detail, Evaluated, IterationRecord};
pub use solution::{Solution, Status};
pub use strategy::{ParseStrategyError, Strategy};
