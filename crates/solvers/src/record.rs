use extremum_core::Direction;

use crate::{Point, Strategy};

/// One row of a search trace.
///
/// `low` and `high` are the bracket in which this iteration's probes were
/// placed, before the iteration narrowed it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct IterationRecord {
    /// 1-based iteration index.
    pub iter: usize,

    pub low: f64,

    pub high: f64,

    /// Strategy-specific probe data.
    pub detail: Detail,
}

/// Strategy-specific fields of an [`IterationRecord`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "strategy", rename_all = "snake_case"))]
pub enum Detail {
    /// Probes at `mid - ε` and `mid + ε`.
    Dichotomous { mid: f64, left: Point, right: Point },

    /// Interior points at golden-ratio offsets.
    GoldenSection {
        left: Point,
        right: Point,
        evaluated: Evaluated,
    },

    /// Interior points at Fibonacci-ratio offsets.
    Fibonacci {
        /// Index `i` of the ratios `F(i-2)/F(i)` and `F(i-1)/F(i)`.
        index: usize,
        left: Point,
        right: Point,
        evaluated: Evaluated,
        /// True for the final step, where `right` is `left + ε`.
        perturbed: bool,
    },
}

/// Which interior points were evaluated during an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Evaluated {
    Left,
    Right,
    Both,
}

impl Evaluated {
    /// Returns the number of objective calls this marker stands for.
    #[must_use]
    pub fn count(self) -> usize {
        match self {
            Self::Left | Self::Right => 1,
            Self::Both => 2,
        }
    }
}

impl IterationRecord {
    /// Returns the bracket length `high - low`.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the left and right probes.
    #[must_use]
    pub fn probes(&self) -> [Point; 2] {
        match self.detail {
            Detail::Dichotomous { left, right, .. }
            | Detail::GoldenSection { left, right, .. }
            | Detail::Fibonacci { left, right, .. } => [left, right],
        }
    }

    /// Returns the strategy that produced this record.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        match self.detail {
            Detail::Dichotomous { .. } => Strategy::Dichotomous,
            Detail::GoldenSection { .. } => Strategy::GoldenSection,
            Detail::Fibonacci { .. } => Strategy::Fibonacci,
        }
    }

    /// Returns the better of the two probes, preferring `left` on ties.
    #[must_use]
    pub fn best(&self, direction: Direction) -> Point {
        let [left, right] = self.probes();
        if direction.prefers(right.value, left.value) {
            right
        } else {
            left
        }
    }

    /// Returns the number of objective calls made during this iteration.
    #[must_use]
    pub fn evaluations(&self) -> usize {
        match self.detail {
            Detail::Dichotomous { .. } => 2,
            Detail::GoldenSection { evaluated, .. } | Detail::Fibonacci { evaluated, .. } => {
                evaluated.count()
            }
        }
    }
}
