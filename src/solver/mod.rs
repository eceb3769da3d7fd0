pub mod constants;
mod core;
mod errors;

pub use self::core::{ExpressionSolver, integer_equals};
pub use errors::SolverError;
