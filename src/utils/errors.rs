use thiserror::Error;

/// Errors that can occur in utility functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UtilsError {
    #[error("Constants list cannot be empty")]
    EmptyConstants,
    #[error("Constant must be finite: {0}")]
    NonFiniteConstant(f64),
}
