use extremum_core::Direction;

use crate::{IterationRecord, Point, Strategy};

/// Indicates how a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// The bracket reached the minimum interval length.
    Converged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a search.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// The strategy that produced this solution.
    pub strategy: Strategy,

    pub direction: Direction,

    /// Final solver status.
    pub status: Status,

    /// One record per iteration, in order.
    pub records: Vec<IterationRecord>,

    /// The final bracket `[low, high]`.
    pub interval: [f64; 2],

    /// The midpoint of the final bracket and its objective value.
    pub best: Point,

    /// Number of objective calls, including the one at `best`.
    pub evaluations: usize,
}

impl Solution {
    /// Returns the number of iterations.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.records.len()
    }

    /// Returns the length of the final bracket.
    #[must_use]
    pub fn interval_length(&self) -> f64 {
        self.interval[1] - self.interval[0]
    }
}
