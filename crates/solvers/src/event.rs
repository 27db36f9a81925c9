use crate::{IterationRecord, Point, Strategy};

/// Event emitted once per iteration, after the probes are evaluated and
/// before the bracket is narrowed.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The record of the iteration just evaluated.
    pub record: &'a IterationRecord,

    /// The better of the two probes of this iteration.
    pub best: Point,
}

impl Event<'_> {
    /// Returns the strategy emitting the event.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.record.strategy()
    }

    /// Returns the 1-based iteration index.
    #[must_use]
    pub fn iter(&self) -> usize {
        self.record.iter
    }
}
