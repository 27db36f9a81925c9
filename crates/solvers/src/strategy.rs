use std::{fmt, str::FromStr};

use thiserror::Error;
use tracing::debug;

use extremum_core::{Bounds, Direction, Expression, Model, Observer, SearchParameters, Tolerance};

use crate::{Action, Config, Error, Event, Solution, dichotomous, fibonacci, golden_section};

/// The closed set of search strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    Dichotomous,
    GoldenSection,
    Fibonacci,
}

impl Strategy {
    /// Every strategy, in display order.
    pub const ALL: [Self; 3] = [Self::Dichotomous, Self::GoldenSection, Self::Fibonacci];

    /// Returns the kebab-case name of the strategy.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Dichotomous => "dichotomous",
            Self::GoldenSection => "golden-section",
            Self::Fibonacci => "fibonacci",
        }
    }

    /// Parses the expression, validates the parameters, and runs the search.
    ///
    /// # Errors
    ///
    /// See [`Strategy::search_with`].
    pub fn search(self, params: &SearchParameters) -> Result<Solution, Error> {
        self.search_with(params, &Config::default(), ())
    }

    /// Like [`Strategy::search`], with an explicit config and observer.
    ///
    /// Parameters are validated before the expression is parsed, so a
    /// precondition violation is reported even for a malformed expression.
    ///
    /// # Errors
    ///
    /// - [`Error::Parameter`] if a precondition is violated
    /// - [`Error::Expression`] if the expression fails to parse
    /// - [`Error::Evaluation`] or [`Error::NonFiniteValue`] if the objective
    ///   is undefined at a required point
    /// - [`Error::NonConvergence`] if the iteration cap is exceeded
    pub fn search_with<Obs>(
        self,
        params: &SearchParameters,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let (bounds, tolerance) = params.validate()?;
        let expression = Expression::parse(&params.expression)?;

        debug!(
            strategy = %self,
            expression = %expression,
            lower = bounds.lower(),
            upper = bounds.upper(),
            direction = %params.direction,
            "starting search"
        );

        let solution = self.run(
            &expression,
            &bounds,
            &tolerance,
            params.direction,
            config,
            observer,
        )?;

        debug!(
            strategy = %self,
            status = ?solution.status,
            iters = solution.iters(),
            evaluations = solution.evaluations,
            x = solution.best.x,
            value = solution.best.value,
            "search finished"
        );

        Ok(solution)
    }

    /// Runs this strategy on any objective model.
    ///
    /// # Errors
    ///
    /// Returns an error if the objective fails, the iteration cap is
    /// exceeded, or (for Fibonacci search) the bracket is already within the
    /// minimum length.
    pub fn run<M, Obs>(
        self,
        model: &M,
        bounds: &Bounds,
        tolerance: &Tolerance,
        direction: Direction,
        config: &Config,
        observer: Obs,
    ) -> Result<Solution, Error>
    where
        M: Model<Input = f64, Output = f64>,
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        match self {
            Self::Dichotomous => {
                dichotomous::search(model, bounds, tolerance, direction, config, observer)
            }
            Self::GoldenSection => {
                golden_section::search(model, bounds, tolerance, direction, config, observer)
            }
            Self::Fibonacci => {
                fibonacci::search(model, bounds, tolerance, direction, config, observer)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name a [`Strategy`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown strategy `{0}`, expected `dichotomous`, `golden-section`, or `fibonacci`")]
pub struct ParseStrategyError(String);

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "dichotomous" | "dichotomy" | "bisection" => Ok(Self::Dichotomous),
            "golden-section" | "golden" | "golden-ratio" => Ok(Self::GoldenSection),
            "fibonacci" => Ok(Self::Fibonacci),
            _ => Err(ParseStrategyError(s.to_owned())),
        }
    }
}
