//! Observers and trace rendering for extremum search.
//!
//! This crate provides [`Observer`] implementations that work with every
//! strategy in `extremum-solvers`, plus plain-text rendering of search
//! traces.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-strategy observers
//!   ([`HasIteration`], [`HasBracket`], [`CanStopEarly`])
//! - [`table`]: [`render_table`] and [`render_summary`]
//!
//! # Observers
//!
//! - [`TraceLogger`] logs each iteration through `tracing`
//! - [`StopAfter`] stops a search after a fixed number of iterations
//!
//! [`Observer`]: extremum_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasBracket`]: traits::HasBracket
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod table;
pub mod traits;

mod logger;
mod stop_after;

pub use logger::TraceLogger;
pub use stop_after::StopAfter;
pub use table::{format_number, render_summary, render_table, table_columns};
