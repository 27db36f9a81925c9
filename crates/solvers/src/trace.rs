use extremum_core::{Direction, Model, Observer};

use crate::{
    Action, Detail, Error, Event, IterationRecord, Point, Solution, Status, Strategy,
    evaluate::Evaluator,
};

/// The interior point kept from the previous iteration, if any.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Carried {
    None,
    Left(Point),
    Right(Point),
}

/// Accumulates iteration records and notifies the observer.
pub(crate) struct Trace {
    strategy: Strategy,
    direction: Direction,
    records: Vec<IterationRecord>,
}

impl Trace {
    pub(crate) fn new(strategy: Strategy, direction: Direction) -> Self {
        Self {
            strategy,
            direction,
            records: Vec::new(),
        }
    }

    /// Returns the number of recorded iterations.
    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    /// Records one iteration and returns the observer's action.
    pub(crate) fn record<Obs>(
        &mut self,
        observer: &mut Obs,
        low: f64,
        high: f64,
        detail: Detail,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a>, Action>,
    {
        let record = IterationRecord {
            iter: self.records.len() + 1,
            low,
            high,
            detail,
        };
        let event = Event {
            record: &record,
            best: record.best(self.direction),
        };
        let action = observer.observe(&event);
        self.records.push(record);
        action
    }

    /// Evaluates the midpoint of the final bracket and builds the solution.
    ///
    /// # Errors
    ///
    /// Returns an error if the objective fails at the midpoint.
    pub(crate) fn finish<M>(
        self,
        mut evaluator: Evaluator<'_, M>,
        status: Status,
        low: f64,
        high: f64,
    ) -> Result<Solution, Error>
    where
        M: Model<Input = f64, Output = f64>,
    {
        let best = evaluator.eval(0.5 * (low + high))?;
        Ok(Solution {
            strategy: self.strategy,
            direction: self.direction,
            status,
            records: self.records,
            interval: [low, high],
            best,
            evaluations: evaluator.count(),
        })
    }
}
