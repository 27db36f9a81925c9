use extremum_core::Observer;

use crate::traits::{CanStopEarly, HasIteration};

/// Stops a search once a given number of iterations has been recorded.
///
/// The solution of a stopped search is built from the bracket of the last
/// recorded iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StopAfter {
    iters: usize,
}

impl StopAfter {
    /// Creates an observer that stops after `iters` iterations.
    ///
    /// A value of zero behaves like one: the first event is always observed.
    #[must_use]
    pub fn new(iters: usize) -> Self {
        Self { iters }
    }
}

impl<E: HasIteration, A: CanStopEarly> Observer<E, A> for StopAfter {
    fn observe(&mut self, event: &E) -> Option<A> {
        (event.iteration() >= self.iters).then(A::stop_early)
    }
}
