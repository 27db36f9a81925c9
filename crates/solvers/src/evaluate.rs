use extremum_core::Model;

use crate::{Error, Point};

/// Evaluates the objective and counts every call.
pub(crate) struct Evaluator<'m, M> {
    model: &'m M,
    count: usize,
}

impl<'m, M> Evaluator<'m, M>
where
    M: Model<Input = f64, Output = f64>,
{
    pub(crate) fn new(model: &'m M) -> Self {
        Self { model, count: 0 }
    }

    /// Calls the model at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the model fails or returns a non-finite value.
    pub(crate) fn eval(&mut self, x: f64) -> Result<Point, Error> {
        self.count += 1;
        let value = self
            .model
            .call(&x)
            .map_err(|err| Error::evaluation(x, err))?;
        if !value.is_finite() {
            return Err(Error::NonFiniteValue { x, value });
        }
        Ok(Point::new(x, value))
    }

    /// Returns the number of model calls so far.
    pub(crate) fn count(&self) -> usize {
        self.count
    }
}
