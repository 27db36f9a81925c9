//! Golden section search.
//!
//! # Algorithm
//!
//! Two interior points sit at golden-ratio offsets of the bracket:
//! `x1 = high - φ⁻¹ * width` and `x2 = low + φ⁻¹ * width`. Each iteration
//! keeps the side of the better point. One of the old interior points lands
//! exactly on an interior position of the narrowed bracket, so it is carried
//! over and only the other point is evaluated.
//!
//! The first iteration evaluates both points and every later iteration
//! exactly one. The bracket shrinks by `φ⁻¹` per iteration. Equal values
//! discard the left part in both directions.
//!
//! # Observer Events
//!
//! One [`Event`] per iteration, after the new point is evaluated.

mod bracket;

#[cfg(test)]
mod tests;

use extremum_core::{Bounds, Direction, Model, Observer, Tolerance};

use crate::{
    Action, Config, Detail, Error, Evaluated, Event, Solution, Status, Strategy,
    evaluate::Evaluator,
    trace::{Carried, Trace},
};

use bracket::GoldenBracket;

/// Searches for the extremum using golden section search.
///
/// # Errors
///
/// Returns an error if the objective fails at an interior point or the
/// bracket is not narrowed to the minimum length within the configured
/// iteration cap.
pub fn search<M, Obs>(
    model: &M,
    bounds: &Bounds,
    tolerance: &Tolerance,
    direction: Direction,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let min_len = tolerance.min_interval_length();

    let mut evaluator = Evaluator::new(model);
    let mut trace = Trace::new(Strategy::GoldenSection, direction);
    let mut bracket = GoldenBracket::new(bounds);
    let mut carried = Carried::None;

    while bracket.width() > min_len {
        if trace.len() == config.max_iters() {
            return Err(Error::NonConvergence {
                iters: config.max_iters(),
            });
        }

        let (left, right, evaluated) = match carried {
            Carried::None => (
                evaluator.eval(bracket.inner_left)?,
                evaluator.eval(bracket.inner_right)?,
                Evaluated::Both,
            ),
            Carried::Left(left) => (left, evaluator.eval(bracket.inner_right)?, Evaluated::Right),
            Carried::Right(right) => (evaluator.eval(bracket.inner_left)?, right, Evaluated::Left),
        };

        let detail = Detail::GoldenSection {
            left,
            right,
            evaluated,
        };
        if let Some(Action::StopEarly) = trace.record(&mut observer, bracket.low, bracket.high, detail)
        {
            return trace.finish(evaluator, Status::StoppedByObserver, bracket.low, bracket.high);
        }

        if direction.prefers(left.value, right.value) {
            bracket.shrink_right();
            carried = Carried::Right(left);
        } else {
            bracket.shrink_left();
            carried = Carried::Left(right);
        }
    }

    trace.finish(evaluator, Status::Converged, bracket.low, bracket.high)
}

/// Searches for the extremum using golden section search without observer support.
///
/// # Errors
///
/// Returns an error if the objective fails or the iteration cap is exceeded.
pub fn search_unobserved<M>(
    model: &M,
    bounds: &Bounds,
    tolerance: &Tolerance,
    direction: Direction,
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model<Input = f64, Output = f64>,
{
    search(model, bounds, tolerance, direction, config, ())
}
