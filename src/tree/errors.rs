use thiserror::Error;

/// Recoverable evaluation failures.
///
/// Both variants mean "this configuration is invalid, try the next one";
/// the search loop consumes them silently and they never reach the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Intermediate value rejected by constraint")]
    ConstraintRejected,
}
