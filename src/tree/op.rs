use crate::tree::errors::EvalError;

/// Binary operator assigned to an internal tree node.
///
/// `None` is the placeholder for nodes whose operator has not been assigned
/// yet; it is never valid at evaluation time. The odometer cycles through
/// the remaining four in the fixed order Add, Sub, Mul, Div.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    None,
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Advance to the next operator in the cycle.
    ///
    /// Returns the operator before advancing and whether the cycle wrapped
    /// back to `Add`. Stepping from `None` lands on `Add` without reporting
    /// a wrap, so an unassigned slot does not produce a spurious carry.
    pub fn cycle_next(&mut self) -> (Operator, bool) {
        let previous = *self;
        let (next, wrapped) = match previous {
            Operator::None => (Operator::Add, false),
            Operator::Add => (Operator::Sub, false),
            Operator::Sub => (Operator::Mul, false),
            Operator::Mul => (Operator::Div, false),
            Operator::Div => (Operator::Add, true),
        };
        *self = next;
        (previous, wrapped)
    }

    /// Reduce an ordered, non-empty sequence of child values.
    ///
    /// Sub and Div treat the first value as the head: `v0 - (v1 + v2 + ...)`
    /// and `v0 / (v1 * v2 * ...)`.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::DivisionByZero` when the divisor product is zero.
    /// This is a recoverable "configuration invalid" signal for the search
    /// loop, not a fatal error.
    ///
    /// # Panics
    ///
    /// Panics when called on `Operator::None`; the search never constructs
    /// an evaluatable tree with an unassigned operator.
    pub fn reduce(self, values: &[f64]) -> Result<f64, EvalError> {
        assert!(!values.is_empty(), "reduce requires at least one value");

        match self {
            Operator::Add => Ok(values.iter().sum()),
            Operator::Sub => Ok(values[0] - values[1..].iter().sum::<f64>()),
            Operator::Mul => Ok(values.iter().product()),
            Operator::Div => {
                let divisor: f64 = values[1..].iter().product();
                if is_zero(divisor) {
                    Err(EvalError::DivisionByZero)
                } else {
                    Ok(values[0] / divisor)
                }
            }
            Operator::None => panic!("cannot reduce with an unassigned operator"),
        }
    }

    /// Display symbol used by the ASCII renderer.
    pub fn symbol(self) -> char {
        match self {
            Operator::None => '?',
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

#[inline]
fn is_zero(value: f64) -> bool {
    value.abs() < f64::EPSILON
}
