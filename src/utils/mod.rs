//! Utils module split into submodules

mod errors;
mod permute;
mod validation;

pub use errors::UtilsError;
pub use permute::{for_each_permutation, next_permutation};
pub use validation::validate_constants;

#[cfg(test)]
mod tests;
