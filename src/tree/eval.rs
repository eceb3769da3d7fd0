use log::debug;

use crate::tree::ast::ExprTree;
use crate::tree::errors::EvalError;

/// Predicate applied to every intermediate (internal node) value; returning
/// false rejects the whole configuration.
pub type Constraint = fn(f64) -> bool;

impl ExprTree {
    /// Evaluate the tree bottom-up.
    ///
    /// Children are evaluated left to right, their results reduced by the
    /// node's operator, then each constraint is applied to the intermediate
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `EvalError::DivisionByZero` on a zero divisor and
    /// `EvalError::ConstraintRejected` when a constraint rejects an
    /// intermediate value. Both are skip signals for the search loop.
    pub fn evaluate(&self, constraints: &[Constraint]) -> Result<f64, EvalError> {
        match self {
            ExprTree::Leaf(value) => Ok(*value),
            ExprTree::Internal { op, children } => {
                let mut child_values = Vec::with_capacity(children.len());
                for child in children {
                    child_values.push(child.evaluate(constraints)?);
                }

                let value = op.reduce(&child_values)?;
                if constraints.iter().any(|accepts| !accepts(value)) {
                    debug!("Intermediate value {} rejected by constraint", value);
                    return Err(EvalError::ConstraintRejected);
                }

                Ok(value)
            }
        }
    }
}
