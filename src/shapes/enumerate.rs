use log::debug;

use crate::tree::{ExprTree, Operator};

/// Enumerate every structurally distinct full binary tree shape with
/// `leaf_count` leaves.
///
/// Shapes come back as fresh, exclusively owned trees: every leaf is a
/// placeholder `0.0` and every internal node starts at `Add`, the odometer's
/// initial state. For each split point k in 1..n the left and right
/// subshapes are enumerated recursively and combined pairwise, so the
/// result count is the Catalan number C(n-1).
pub fn enumerate_shapes(leaf_count: usize) -> Vec<ExprTree> {
    let shapes = build_shapes(leaf_count);
    debug!("Enumerated {} shapes for {} leaves", shapes.len(), leaf_count);
    shapes
}

fn build_shapes(leaf_count: usize) -> Vec<ExprTree> {
    if leaf_count == 0 {
        return Vec::new();
    }
    if leaf_count == 1 {
        return vec![ExprTree::Leaf(0.0)];
    }

    let mut result = Vec::new();
    for left_leaves in 1..leaf_count {
        let left_shapes = build_shapes(left_leaves);
        let right_shapes = build_shapes(leaf_count - left_leaves);

        for left in &left_shapes {
            for right in &right_shapes {
                result.push(ExprTree::internal(
                    Operator::Add,
                    left.clone(),
                    right.clone(),
                ));
            }
        }
    }

    result
}
