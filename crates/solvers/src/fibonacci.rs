//! Fibonacci search.
//!
//! # Algorithm
//!
//! The iteration count is fixed up front. With `F(0) = F(1) = 1`, `n` is the
//! smallest index such that `F(n) >= L / min_interval_length`, where `L` is
//! the initial bracket length. Iteration `k` in `1..n` uses index
//! `i = n - k + 1` and places two points at
//!
//! - `x1 = low + F(i-2) / F(i) * width`
//! - `x2 = low + F(i-1) / F(i) * width`
//!
//! As in golden section search, one point of each iteration lands on an
//! interior position of the narrowed bracket and is carried over, so every
//! iteration after the first evaluates exactly one new point.
//!
//! At `i = 2` both positions coincide at the midpoint. The carried point is
//! kept as `x1` and `x2` is perturbed to `x1 + ε`. The final cut is made at
//! `x1`, which leaves a bracket of length `L / F(n)`.
//!
//! # Observer Events
//!
//! One [`Event`] per iteration, after the new point is evaluated.

mod sequence;


use extremum_core::{Bounds, Direction, Model, Observer, ParameterError, Tolerance};
use tracing::trace;

use crate::{
    Action, Config, Detail, Error, Evaluated, Event, Point, Solution, Status, Strategy,
    evaluate::Evaluator,
    trace::{Carried, Trace},
};

use sequence::Sequence;

/// Searches for the extremum using Fibonacci search.
///
/// # Errors
///
/// - [`Error::Parameter`] if the bracket is already within the minimum
///   length, leaving fewer than two Fibonacci indices
/// - [`Error::NonConvergence`] if the required iteration count exceeds the
///   configured cap (checked before anything is evaluated)
/// - [`Error::Evaluation`] or [`Error::NonFiniteValue`] if the objective
///   fails at a probe
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
    let epsilon = tolerance.epsilon();
    let min_len = tolerance.min_interval_length();
    let length = bounds.width();

    let Some(seq) = Sequence::covering(length / min_len, config.max_iters() + 1) else {
        return Err(Error::NonConvergence {
            iters: config.max_iters(),
        });
    };
    let n = seq.n();
    if n < 2 {
        return Err(ParameterError::DegenerateFibonacci {
            length,
            min_interval_length: min_len,
        }
        .into());
    }
    trace!(n, f_n = seq.last(), "fibonacci index");

    let mut evaluator = Evaluator::new(model);
    let mut trace = Trace::new(Strategy::Fibonacci, direction);
    let [mut low, mut high] = bounds.as_array();
    let mut carried = Carried::None;

    for k in 1..n {
        let index = n - k + 1;
        let width = high - low;
        let perturbed = index == 2;

        let (left, right, evaluated) = if perturbed {
            let (left, evaluated) = match carried {
                Carried::Left(point) | Carried::Right(point) => (point, Evaluated::Right),
                Carried::None => (evaluator.eval(low + 0.5 * width)?, Evaluated::Both),
            };
            (left, evaluator.eval(left.x + epsilon)?, evaluated)
        } else {
            let x1 = low + seq.ratio(index - 2, index) * width;
            let x2 = low + seq.ratio(index - 1, index) * width;
            place(&mut evaluator, carried, x1, x2)?
        };

        let detail = Detail::Fibonacci {
            index,
            left,
            right,
            evaluated,
            perturbed,
        };
        if let Some(Action::StopEarly) = trace.record(&mut observer, low, high, detail) {
            return trace.finish(evaluator, Status::StoppedByObserver, low, high);
        }

        let left_wins = direction.prefers(left.value, right.value);
        match (perturbed, left_wins) {
            (true, true) => high = left.x,
            (true, false) => low = left.x,
            (false, true) => {
                high = right.x;
                carried = Carried::Right(left);
            }
            (false, false) => {
                low = left.x;
                carried = Carried::Left(right);
            }
        }
    }

    trace.finish(evaluator, Status::Converged, low, high)
}

/// Searches for the extremum using Fibonacci search without observer support.
///
/// # Errors
///
/// See [`search`].
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

/// Evaluates whichever of `x1` and `x2` is not carried over.
fn place<M>(
    evaluator: &mut Evaluator<'_, M>,
    carried: Carried,
    x1: f64,
    x2: f64,
) -> Result<(Point, Point, Evaluated), Error>
where
    M: Model<Input = f64, Output = f64>,
{
    Ok(match carried {
        Carried::None => (evaluator.eval(x1)?, evaluator.eval(x2)?, Evaluated::Both),
        Carried::Left(left) => (left, evaluator.eval(x2)?, Evaluated::Right),
        Carried::Right(right) => (evaluator.eval(x1)?, right, Evaluated::Left),
    })
}
