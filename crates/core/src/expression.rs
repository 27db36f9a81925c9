//! Parsing and evaluation of single-variable expressions.
//!
//! An [`Expression`] is parsed once and evaluated at any number of points.
//! It holds no interpreter state, so one parsed expression can be shared
//! across threads and searched by several strategies at the same time.
//!
//! # Syntax
//!
//! - Operators `+ - * / ^` (`**` is an alias for `^`), unary `-` and `+`,
//!   and parentheses. `^` binds tighter than unary minus and is right
//!   associative: `-x^2` is `-(x^2)` and `2^3^2` is `2^9`.
//! - The free variable `x`.
//! - Constants `pi` and `e`.
//! - Functions `sin cos tan asin acos atan sinh cosh tanh exp ln log log2
//!   sqrt abs sgn trunc round floor ceil`, where `log` is base 10.
//!
//! Constant and function names are case-insensitive. There is no implicit
//! multiplication: write `2*x`, not `2x`.
//!
//! # Errors
//!
//! Parsing rejects malformed input and any identifier other than `x`, a
//! constant, or a function. Evaluation rejects division by zero, arguments
//! outside a function's real domain, and non-finite intermediate results.

mod error;
mod function;
mod node;
mod parser;
mod token;


use std::{fmt, str::FromStr};

pub use error::ExpressionError;

use crate::Model;

use node::Node;

/// A parsed expression in the single free variable `x`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Node,
}

impl Expression {
    /// Parses an expression.
    ///
    /// # Errors
    ///
    /// Returns an [`ExpressionError`] if the expression is malformed or
    /// references an unknown identifier.
    pub fn parse(source: &str) -> Result<Self, ExpressionError> {
        let root = parser::parse(source)?;
        Ok(Self {
            source: source.to_owned(),
            root,
        })
    }

    /// Evaluates the expression with `x` bound to the given value.
    ///
    /// # Errors
    ///
    /// Returns an [`ExpressionError`] on a numeric fault at `x`.
    pub fn eval(&self, x: f64) -> Result<f64, ExpressionError> {
        self.root.eval(x)
    }

    /// Returns the source text the expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl FromStr for Expression {
    type Err = ExpressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl Model for Expression {
    type Input = f64;
    type Output = f64;
    type Error = ExpressionError;

    fn call(&self, x: &f64) -> Result<f64, Self::Error> {
        self.eval(*x)
    }
}

/// Parses `expression` and evaluates it at `x`.
///
/// Use [`Expression::parse`] instead when evaluating the same expression
/// more than once.
///
/// # Errors
///
/// Returns an [`ExpressionError`] if parsing or evaluation fails.
pub fn evaluate(expression: &str, x: f64) -> Result<f64, ExpressionError> {
    Expression::parse(expression)?.eval(x)
}
