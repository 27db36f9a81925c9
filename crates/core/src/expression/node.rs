use super::{ExpressionError, function::Function};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    fn name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
            Self::Pow => "exponentiation",
        }
    }

    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, ExpressionError> {
        let value = match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => {
                if rhs == 0.0 {
                    return Err(ExpressionError::DivisionByZero);
                }
                lhs / rhs
            }
            Self::Pow => lhs.powf(rhs),
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ExpressionError::NonFinite {
                operation: self.name(),
            })
        }
    }
}

/// A node of the parsed expression tree.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Node {
    Number(f64),
    Variable,
    Neg(Box<Node>),
    Binary(BinaryOp, Box<Node>, Box<Node>),
    Call(Function, Box<Node>),
}

impl Node {
    /// Evaluates the tree with the free variable bound to `x`.
    pub(super) fn eval(&self, x: f64) -> Result<f64, ExpressionError> {
        match self {
            Self::Number(value) => Ok(*value),
            Self::Variable => Ok(x),
            Self::Neg(inner) => inner.eval(x).map(|v| -v),
            Self::Binary(op, lhs, rhs) => op.apply(lhs.eval(x)?, rhs.eval(x)?),
            Self::Call(function, arg) => function.apply(arg.eval(x)?),
        }
    }
}
