use std::fmt;

/// An arithmetic expression whose operands are themselves expressions.
///
/// The recursion goes through `Box` so the enum keeps a known size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArithmeticExpression {
    Number(i64),
    Addition(Box<Self>, Box<Self>),
    Multiplication(Box<Self>, Box<Self>),
}

impl ArithmeticExpression {
    #[must_use]
    pub fn addition(lhs: Self, rhs: Self) -> Self {
        Self::Addition(Box::new(lhs), Box::new(rhs))
    }

    #[must_use]
    pub fn multiplication(lhs: Self, rhs: Self) -> Self {
        Self::Multiplication(Box::new(lhs), Box::new(rhs))
    }

    /// Evaluates the whole tree. `None` only when an intermediate result overflows `i64`.
    #[must_use]
    pub fn evaluate(&self) -> Option<i64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Addition(lhs, rhs) => lhs.evaluate()?.checked_add(rhs.evaluate()?),
            Self::Multiplication(lhs, rhs) => lhs.evaluate()?.checked_mul(rhs.evaluate()?),
        }
    }

    const fn is_operation(&self) -> bool {
        !matches!(self, Self::Number(_))
    }

    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_operation() { write!(f, "({self})") } else { write!(f, "{self}") }
    }
}

impl fmt::Display for ArithmeticExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (lhs, op, rhs) = match self {
            Self::Number(value) => return write!(f, "{value}"),
            Self::Addition(lhs, rhs) => (lhs, '+', rhs),
            Self::Multiplication(lhs, rhs) => (lhs, '*', rhs),
        };

        lhs.fmt_operand(f)?;
        write!(f, " {op} ")?;
        rhs.fmt_operand(f)
    }
}

impl From<i64> for ArithmeticExpression {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}
