//! Exprsearch - A library for finding arithmetic expressions that hit a target
//!
//! Given a fixed multiset of numeric constants, each used exactly once, this
//! library searches every binary tree shape, operator assignment and leaf
//! permutation for an expression built from `+ - * /` that evaluates to a
//! target value.

pub mod shapes;
pub mod solver;
pub mod tree;
pub mod utils;

// Re-export the main public API
pub use solver::{ExpressionSolver, SolverError, integer_equals};
pub use tree::{Constraint, EvalError, ExprTree, Operator};
pub use utils::validate_constants;

/// Find an expression over the given integer constants that evaluates to the
/// integer target.
///
/// This is a convenience function that casts the constants to doubles,
/// creates a default solver and searches with the integer-valued equality
/// predicate, matching the command-line behavior.
///
/// # Errors
///
/// This function will return an error if:
/// * The constants list is empty
///
/// # Examples
///
/// ```
/// use exprsearch::find_solution;
///
/// // Find an expression over 1, 2, 3, 4 that equals 10
/// match find_solution(&[1, 2, 3, 4], 10) {
///     Ok(Some(expr)) => println!("Found:\n{}", expr),
///     Ok(None) => println!("No solution found"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
pub fn find_solution(constants: &[i64], target: i64) -> Result<Option<ExprTree>, SolverError> {
    let cast: Vec<f64> = constants.iter().map(|&c| c as f64).collect();
    validate_constants(&cast)?;

    let solver = ExpressionSolver::new();
    Ok(solver.find_solution(&cast, target as f64, integer_equals))
}
