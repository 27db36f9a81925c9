use thiserror::Error;

use crate::Direction;

/// Errors raised when search parameters violate a precondition.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ParameterError {
    #[error("bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("lower bound {lower} is greater than upper bound {upper}")]
    ReversedBounds { lower: f64, upper: f64 },

    #[error("epsilon must be finite and positive, got {value}")]
    Epsilon { value: f64 },

    #[error("minimum interval length must be finite and positive, got {value}")]
    MinIntervalLength { value: f64 },

    #[error(
        "2 * epsilon ({epsilon}) must be less than the minimum interval length ({min_interval_length})"
    )]
    EpsilonTooLarge {
        epsilon: f64,
        min_interval_length: f64,
    },

    #[error(
        "interval length {length} is already within the minimum interval length \
         {min_interval_length}; Fibonacci search needs at least two indices"
    )]
    DegenerateFibonacci {
        length: f64,
        min_interval_length: f64,
    },
}

/// Ordered finite bounds of a search interval.
///
/// Unlike a root-finding bracket, a zero-width interval is valid: the search
/// simply has nothing to narrow.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bounds {
    lower: f64,
    upper: f64,
}

impl Bounds {
    /// Validates the interval endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if an endpoint is non-finite or the bounds
    /// are reversed.
    pub fn new(lower: f64, upper: f64) -> Result<Self, ParameterError> {
        if !lower.is_finite() {
            return Err(ParameterError::NonFiniteBound { value: lower });
        }
        if !upper.is_finite() {
            return Err(ParameterError::NonFiniteBound { value: upper });
        }
        if lower > upper {
            return Err(ParameterError::ReversedBounds { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    #[must_use]
    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Returns the interval length.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns the interval midpoint.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Returns true if `x` lies inside the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        (self.lower..=self.upper).contains(&x)
    }

    /// Returns the bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }
}

/// Validated probe offset and stopping tolerance.
///
/// `epsilon` is half the separation between the dichotomous probes and the
/// symmetry-breaking offset of the final Fibonacci step. `min_interval_length`
/// is the bracket width at which every strategy stops.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tolerance {
    epsilon: f64,
    min_interval_length: f64,
}

impl Tolerance {
    /// Validates the tolerance pair.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if either value is non-finite or not
    /// positive, or if `2 * epsilon >= min_interval_length`.
    pub fn new(epsilon: f64, min_interval_length: f64) -> Result<Self, ParameterError> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ParameterError::Epsilon { value: epsilon });
        }
        if !min_interval_length.is_finite() || min_interval_length <= 0.0 {
            return Err(ParameterError::MinIntervalLength {
                value: min_interval_length,
            });
        }
        if 2.0 * epsilon >= min_interval_length {
            return Err(ParameterError::EpsilonTooLarge {
                epsilon,
                min_interval_length,
            });
        }
        Ok(Self {
            epsilon,
            min_interval_length,
        })
    }

    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    #[must_use]
    pub fn min_interval_length(&self) -> f64 {
        self.min_interval_length
    }
}

/// The complete parameter set of one search invocation.
///
/// This is the value a front end collects from user input. It is not
/// validated on construction; call [`SearchParameters::validate`] (or let a
/// strategy do it) before searching.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchParameters {
    /// The objective, as an expression in `x`.
    pub expression: String,

    pub lower_bound: f64,

    pub upper_bound: f64,

    pub direction: Direction,

    /// Half the separation between the dichotomous probe points.
    pub epsilon: f64,

    /// Stopping tolerance on the bracket width.
    pub min_interval_length: f64,
}

impl SearchParameters {
    /// Validates the numeric parameters.
    ///
    /// The expression is not checked here; it is parsed when a search runs.
    ///
    /// # Errors
    ///
    /// Returns the first violated precondition.
    pub fn validate(&self) -> Result<(Bounds, Tolerance), ParameterError> {
        Ok((self.bounds()?, self.tolerance()?))
    }

    /// Returns the validated interval.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if the bounds are invalid.
    pub fn bounds(&self) -> Result<Bounds, ParameterError> {
        Bounds::new(self.lower_bound, self.upper_bound)
    }

    /// Returns the validated tolerance pair.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if the tolerances are invalid.
    pub fn tolerance(&self) -> Result<Tolerance, ParameterError> {
        Tolerance::new(self.epsilon, self.min_interval_length)
    }
}
