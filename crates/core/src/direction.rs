use std::{fmt, str::FromStr};

use thiserror::Error;

/// Whether a search seeks the maximum or the minimum of the objective.
///
/// Strategies compare objective values through [`Direction::transform`], so
/// the same narrowing logic handles both directions: the transformed value is
/// always minimized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Search for the largest objective value.
    Max,

    /// Search for the smallest objective value.
    Min,
}

impl Direction {
    /// Transforms an objective value for internal minimization.
    ///
    /// - [`Direction::Min`]: returns the value unchanged
    /// - [`Direction::Max`]: negates the value
    #[inline]
    #[must_use]
    pub fn transform(self, value: f64) -> f64 {
        match self {
            Self::Max => -value,
            Self::Min => value,
        }
    }

    /// Returns true if `a` is strictly better than `b` in this direction.
    ///
    /// Equal values are never preferred, which gives every strategy the same
    /// tie-break: the left part of the bracket is discarded.
    #[inline]
    #[must_use]
    pub fn prefers(self, a: f64, b: f64) -> bool {
        self.transform(a) < self.transform(b)
    }

    /// Returns the lowercase name used for parsing and display.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Max => "max",
            Self::Min => "min",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`Direction`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown direction `{0}`, expected `max` or `min`")]
pub struct ParseDirectionError(String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" | "maximum" | "maximize" => Ok(Self::Max),
            "min" | "minimum" | "minimize" => Ok(Self::Min),
            _ => Err(ParseDirectionError(s.to_owned())),
        }
    }
}
