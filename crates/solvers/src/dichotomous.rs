//! Dichotomous search.
//!
//! # Algorithm
//!
//! Each iteration places two probes a distance `ε` either side of the
//! bracket midpoint and keeps the half on the side of the better probe:
//!
//! - if `f(mid - ε)` is preferred, `high = mid`
//! - otherwise `low = mid`
//!
//! The bracket halves exactly every iteration, so a bracket of length `L`
//! takes `ceil(log2(L / min_interval_length))` iterations. Equal probe
//! values discard the left half in both directions.
//!
//! # Observer Events
//!
//! One [`Event`] per iteration, after both probes are evaluated.

#[cfg(test)]
mod tests;

use extremum_core::{Bounds, Direction, Model, Observer, Tolerance};

use crate::{
    Action, Config, Detail, Error, Event, Solution, Status, Strategy, evaluate::Evaluator,
    trace::Trace,
};

/// Searches for the extremum using dichotomous search.
///
/// # Errors
///
/// Returns an error if the objective fails at a probe or the bracket is not
/// narrowed to the minimum length within the configured iteration cap.
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

    let mut evaluator = Evaluator::new(model);
    let mut trace = Trace::new(Strategy::Dichotomous, direction);
    let [mut low, mut high] = bounds.as_array();

    while high - low > min_len {
        if trace.len() == config.max_iters() {
            return Err(Error::NonConvergence {
                iters: config.max_iters(),
            });
        }

        let mid = 0.5 * (low + high);
        let left = evaluator.eval(mid - epsilon)?;
        let right = evaluator.eval(mid + epsilon)?;

        let detail = Detail::Dichotomous { mid, left, right };
        if let Some(Action::StopEarly) = trace.record(&mut observer, low, high, detail) {
            return trace.finish(evaluator, Status::StoppedByObserver, low, high);
        }

        if direction.prefers(left.value, right.value) {
            high = mid;
        } else {
            low = mid;
        }
    }

    trace.finish(evaluator, Status::Converged, low, high)
}

/// Searches for the extremum using dichotomous search without observer support.
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
