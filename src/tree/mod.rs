//! Expression tree core: operators, the tagged tree, evaluation, the
//! operator odometer and ASCII rendering.

mod ast;
mod errors;
mod eval;
mod odometer;
mod op;
mod render;

pub use ast::ExprTree;
pub use errors::EvalError;
pub use eval::Constraint;
pub use op::Operator;
pub use render::format_value;
