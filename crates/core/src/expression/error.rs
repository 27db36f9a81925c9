use thiserror::Error;

/// Errors that can occur while parsing or evaluating an [`Expression`].
///
/// Positions are byte offsets into the source string.
///
/// [`Expression`]: super::Expression
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ExpressionError {
    #[error("unexpected character `{ch}` at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number `{text}` at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unknown identifier `{name}` at position {pos}")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("unexpected {found} at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("expression nests too deeply at position {pos}")]
    TooDeep { pos: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("{function}({arg}) is undefined")]
    Domain { function: &'static str, arg: f64 },

    #[error("{operation} produced a non-finite value")]
    NonFinite { operation: &'static str },
}

impl ExpressionError {
    /// Returns true for errors raised while parsing, as opposed to evaluating.
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Self::UnexpectedChar { .. }
                | Self::InvalidNumber { .. }
                | Self::UnknownIdentifier { .. }
                | Self::UnexpectedToken { .. }
                | Self::UnexpectedEnd
                | Self::TooDeep { .. }
        )
    }
}
