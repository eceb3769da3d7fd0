use log::{debug, info};

use crate::shapes::enumerate_shapes;
use crate::solver::constants::EPSILON;
use crate::tree::{Constraint, ExprTree};
use crate::utils::for_each_permutation;

/// Default equality predicate for integer targets: the computed value must
/// be integer-valued (within tolerance) and equal to the target.
pub fn integer_equals(target: f64, value: f64) -> bool {
    (value - value.round()).abs() < EPSILON && (value.round() - target).abs() < EPSILON
}

/// Exhaustive searcher over tree shapes, operator assignments and
/// leaf-value permutations.
pub struct ExpressionSolver {
    constraints: Vec<Constraint>,
}

impl ExpressionSolver {
    /// Create a solver with no intermediate-value constraints.
    pub fn new() -> Self {
        Self {
            constraints: Vec::new(),
        }
    }

    /// Create a solver that rejects any configuration whose intermediate
    /// (internal node) values fail one of the given predicates.
    pub fn with_constraints(constraints: Vec<Constraint>) -> Self {
        Self { constraints }
    }

    /// Find the first expression over `constants` accepted by `equals`.
    ///
    /// Every constant is used exactly once. Shapes are tried in enumeration
    /// order; within a shape, leaf-value permutations cycle lexicographically
    /// from the input order, and for each permutation the operator odometer
    /// walks all assignments. The first accepted configuration is deep-copied
    /// out; invalid configurations (division by zero, rejected intermediate
    /// values) are skipped silently. Returns `None` for an empty constants
    /// list or when the search space is exhausted.
    pub fn find_solution<F>(&self, constants: &[f64], target: f64, equals: F) -> Option<ExprTree>
    where
        F: Fn(f64, f64) -> bool,
    {
        if constants.is_empty() {
            return None;
        }

        info!(
            "Searching expressions over {} constants for target {}",
            constants.len(),
            target
        );

        for (shape_index, shape) in enumerate_shapes(constants.len()).into_iter().enumerate() {
            debug!("Trying shape {}", shape_index);

            let mut tree = shape;
            let mut values = constants.to_vec();

            let found = for_each_permutation(&mut values, |ordering| {
                tree.assign_leaf_values(ordering);
                self.search_operator_configurations(&mut tree, target, &equals)
            });

            if let Some(solution) = found {
                info!("Found solution in shape {}: target {}", shape_index, target);
                return Some(solution);
            }
        }

        info!("Search space exhausted, no solution for target {}", target);
        None
    }

    /// Walk every operator configuration of `tree` with the odometer,
    /// evaluating each one. The tree is left back in its all-Add state when
    /// no configuration matches.
    fn search_operator_configurations<F>(
        &self,
        tree: &mut ExprTree,
        target: f64,
        equals: &F,
    ) -> Option<ExprTree>
    where
        F: Fn(f64, f64) -> bool,
    {
        loop {
            match tree.evaluate(&self.constraints) {
                Ok(value) if equals(target, value) => {
                    return Some(tree.clone());
                }
                Ok(_) => {}
                Err(e) => debug!("Skipping invalid configuration: {}", e),
            }

            if tree.advance_operators() {
                return None;
            }
        }
    }
}

impl Default for ExpressionSolver {
    fn default() -> Self {
        Self::new()
    }
}
