//! Core traits and types for single-variable extremum search.
//!
//! This crate defines the shared abstractions that the search strategies,
//! observers, and front ends build on:
//!
//! - [`Model`]: a callable that maps an input to an output
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`Direction`]: whether a search seeks a maximum or a minimum
//! - [`SearchParameters`]: the full parameter set of one search, with the
//!   validated [`Bounds`] and [`Tolerance`] derived from it
//! - [`Expression`]: a parsed `f(x)` expression that implements [`Model`]

mod direction;
mod model;
mod observer;
mod params;

pub mod expression;

pub use direction::{Direction, ParseDirectionError};
pub use expression::{Expression, ExpressionError, evaluate};
pub use model::Model;
pub use observer::Observer;
pub use params::{Bounds, ParameterError, SearchParameters, Tolerance};
