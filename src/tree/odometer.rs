use crate::tree::ast::ExprTree;

impl ExprTree {
    /// Advance the tree's operator configuration by one step.
    ///
    /// The internal nodes form a mixed-radix odometer, base four per node,
    /// stepped post-order: children advance before the parent, and the
    /// parent's operator only cycles when every child reports a wrap.
    /// Returns true when the entire configuration has wrapped back to its
    /// initial all-`Add` state, i.e. this shape is exhausted.
    ///
    /// A leaf has no operator slot and trivially reports "already wrapped".
    pub fn advance_operators(&mut self) -> bool {
        match self {
            ExprTree::Leaf(_) => true,
            ExprTree::Internal { op, children } => {
                for child in children {
                    if !child.advance_operators() {
                        return false;
                    }
                }
                let (_, wrapped) = op.cycle_next();
                wrapped
            }
        }
    }
}
