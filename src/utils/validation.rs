use log::{debug, warn};

use crate::utils::errors::UtilsError;

/// Validate a constants list before handing it to the solver.
///
/// # Errors
///
/// Returns an error if the list is empty or contains a non-finite value.
pub fn validate_constants(constants: &[f64]) -> Result<(), UtilsError> {
    debug!("Validating {} constants", constants.len());

    if constants.is_empty() {
        warn!("Constants list is empty");
        return Err(UtilsError::EmptyConstants);
    }

    for &value in constants {
        if !value.is_finite() {
            warn!("Non-finite constant: {}", value);
            return Err(UtilsError::NonFiniteConstant(value));
        }
    }

    debug!("Constants validation successful");
    Ok(())
}
