use super::ExpressionError;

/// Built-in single-argument functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Function {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log,
    Log2,
    Sqrt,
    Abs,
    Sgn,
    Trunc,
    Round,
    Floor,
    Ceil,
}

impl Function {
    const ALL: [Self; 20] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Asin,
        Self::Acos,
        Self::Atan,
        Self::Sinh,
        Self::Cosh,
        Self::Tanh,
        Self::Exp,
        Self::Ln,
        Self::Log,
        Self::Log2,
        Self::Sqrt,
        Self::Abs,
        Self::Sgn,
        Self::Trunc,
        Self::Round,
        Self::Floor,
        Self::Ceil,
    ];

    pub(super) fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Sgn => "sgn",
            Self::Trunc => "trunc",
            Self::Round => "round",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
        }
    }

    /// Looks up a function by its lowercase name.
    pub(super) fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// Applies the function, rejecting arguments outside its real domain.
    pub(super) fn apply(self, arg: f64) -> Result<f64, ExpressionError> {
        let domain = |ok: bool| {
            if ok {
                Ok(())
            } else {
                Err(ExpressionError::Domain {
                    function: self.name(),
                    arg,
                })
            }
        };

        let value = match self {
            Self::Sin => arg.sin(),
            Self::Cos => arg.cos(),
            Self::Tan => arg.tan(),
            Self::Asin => {
                domain((-1.0..=1.0).contains(&arg))?;
                arg.asin()
            }
            Self::Acos => {
                domain((-1.0..=1.0).contains(&arg))?;
                arg.acos()
            }
            Self::Atan => arg.atan(),
            Self::Sinh => arg.sinh(),
            Self::Cosh => arg.cosh(),
            Self::Tanh => arg.tanh(),
            Self::Exp => arg.exp(),
            Self::Ln => {
                domain(arg > 0.0)?;
                arg.ln()
            }
            Self::Log => {
                domain(arg > 0.0)?;
                arg.log10()
            }
            Self::Log2 => {
                domain(arg > 0.0)?;
                arg.log2()
            }
            Self::Sqrt => {
                domain(arg >= 0.0)?;
                arg.sqrt()
            }
            Self::Abs => arg.abs(),
            Self::Sgn => {
                if arg == 0.0 {
                    0.0
                } else {
                    arg.signum()
                }
            }
            Self::Trunc => arg.trunc(),
            Self::Round => arg.round(),
            Self::Floor => arg.floor(),
            Self::Ceil => arg.ceil(),
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
