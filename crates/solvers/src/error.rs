use std::error::Error as StdError;

use thiserror::Error;

use extremum_core::{ExpressionError, ParameterError};

/// Errors that can occur during a search.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid search parameters")]
    Parameter(#[from] ParameterError),

    #[error("invalid expression")]
    Expression(#[from] ExpressionError),

    #[error("objective evaluation failed at x = {x}")]
    Evaluation {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    #[error("objective returned non-finite value {value} at x = {x}")]
    NonFiniteValue { x: f64, value: f64 },

    #[error("bracket did not reach the minimum length within {iters} iterations")]
    NonConvergence { iters: usize },
}

/// The stable category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A precondition on the search parameters was violated.
    Parameter,

    /// The expression is malformed or undefined at a required point.
    Evaluation,

    /// The iteration cap was exceeded.
    NonConvergence,
}

impl Error {
    pub(crate) fn evaluation<E: StdError + Send + Sync + 'static>(x: f64, err: E) -> Self {
        Self::Evaluation {
            x,
            source: Box::new(err),
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Parameter(_) => ErrorKind::Parameter,
            Self::Expression(_) | Self::Evaluation { .. } | Self::NonFiniteValue { .. } => {
                ErrorKind::Evaluation
            }
            Self::NonConvergence { .. } => ErrorKind::NonConvergence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_group_variants() {
        let parameter = Error::from(ParameterError::Epsilon { value: 0.0 });
        let expression = Error::from(ExpressionError::UnexpectedEnd);
        let evaluation = Error::evaluation(1.0, ExpressionError::DivisionByZero);
        let non_finite = Error::NonFiniteValue {
            x: 1.0,
            value: f64::NAN,
        };
        let cap = Error::NonConvergence { iters: 3 };

        assert_eq!(parameter.kind(), ErrorKind::Parameter);
        assert_eq!(expression.kind(), ErrorKind::Evaluation);
        assert_eq!(evaluation.kind(), ErrorKind::Evaluation);
        assert_eq!(non_finite.kind(), ErrorKind::Evaluation);
        assert_eq!(cap.kind(), ErrorKind::NonConvergence);
    }

    #[test]
    fn evaluation_error_keeps_its_source() {
        let err = Error::evaluation(0.0, ExpressionError::DivisionByZero);
        let source = err.source().expect("has a source");
        assert_eq!(source.to_string(), "division by zero");
        assert_eq!(err.to_string(), "objective evaluation failed at x = 0");
    }
}
