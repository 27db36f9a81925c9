use extremum_core::Observer;
use extremum_solvers::{Action, Event};
use tracing::debug;

/// Logs every iteration through `tracing` at debug level.
///
/// Never requests an action.
#[derive(Debug, Default, Clone, Copy)]
pub struct TraceLogger;

impl<'a> Observer<Event<'a>, Action> for TraceLogger {
    fn observe(&mut self, event: &Event<'a>) -> Option<Action> {
        let record = event.record;
        debug!(
            strategy = %event.strategy(),
            iter = record.iter,
            low = record.low,
            high = record.high,
            length = record.length(),
            evaluations = record.evaluations(),
            best_x = event.best.x,
            best_value = event.best.value,
            "iteration"
        );
        None
    }
}
