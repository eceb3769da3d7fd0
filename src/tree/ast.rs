use crate::tree::op::Operator;

/// An arithmetic expression tree over a fixed multiset of constants.
///
/// A tree is either a leaf holding one constant or an internal node holding
/// an operator and an ordered list of child subtrees (always two as built by
/// the shape enumerator, though evaluation and rendering accept any arity).
/// The shape is fixed at construction; the search only rewrites leaf values
/// and internal operators in place. `Clone` is a full structural deep copy.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprTree {
    Leaf(f64),
    Internal {
        op: Operator,
        children: Vec<ExprTree>,
    },
}

impl ExprTree {
    /// Build an internal node over two subtrees.
    pub fn internal(op: Operator, left: ExprTree, right: ExprTree) -> Self {
        ExprTree::Internal {
            op,
            children: vec![left, right],
        }
    }

    /// Number of leaves, fixed for the lifetime of the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            ExprTree::Leaf(_) => 1,
            ExprTree::Internal { children, .. } => {
                children.iter().map(ExprTree::leaf_count).sum()
            }
        }
    }

    /// Leaf values in left-to-right order.
    pub fn leaf_values(&self) -> Vec<f64> {
        let mut values = Vec::with_capacity(self.leaf_count());
        self.collect_leaf_values(&mut values);
        values
    }

    fn collect_leaf_values(&self, out: &mut Vec<f64>) {
        match self {
            ExprTree::Leaf(value) => out.push(*value),
            ExprTree::Internal { children, .. } => {
                for child in children {
                    child.collect_leaf_values(out);
                }
            }
        }
    }

    /// Assign `values` to the leaves positionally, left to right.
    ///
    /// # Panics
    ///
    /// Panics when the number of values does not match the leaf count;
    /// the search always permutes a vector sized at construction, so a
    /// mismatch is a programming error.
    pub fn assign_leaf_values(&mut self, values: &[f64]) {
        let mut iter = values.iter().copied();
        self.assign_from(&mut iter);
        assert!(
            iter.next().is_none(),
            "leaf count mismatch: more values than leaves"
        );
    }

    fn assign_from(&mut self, values: &mut impl Iterator<Item = f64>) {
        match self {
            ExprTree::Leaf(value) => {
                *value = values
                    .next()
                    .expect("leaf count mismatch: fewer values than leaves");
            }
            ExprTree::Internal { children, .. } => {
                for child in children {
                    child.assign_from(values);
                }
            }
        }
    }
}
