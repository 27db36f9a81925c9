//! Shared fixtures for strategy tests.

use std::cell::Cell;

use extremum_core::{Bounds, Expression, Model, Tolerance};

/// Wraps a model and counts every call.
pub(crate) struct Counting<M> {
    inner: M,
    calls: Cell<usize>,
}

impl<M> Counting<M> {
    pub(crate) fn new(inner: M) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<M: Model> Model for Counting<M> {
    type Input = M::Input;
    type Output = M::Output;
    type Error = M::Error;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.calls.set(self.calls.get() + 1);
        self.inner.call(input)
    }
}

pub(crate) fn expr(source: &str) -> Expression {
    Expression::parse(source).expect("test expression parses")
}

/// `-(x - 2)^2 + 5`, peaking at `x = 2`.
pub(crate) fn parabola() -> Expression {
    expr("-(x - 2)^2 + 5")
}

pub(crate) fn bounds(lower: f64, upper: f64) -> Bounds {
    Bounds::new(lower, upper).expect("test bounds are valid")
}

pub(crate) fn tolerance(epsilon: f64, min_interval_length: f64) -> Tolerance {
    Tolerance::new(epsilon, min_interval_length).expect("test tolerance is valid")
}
