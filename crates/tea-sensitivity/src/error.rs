//! Sensitivity sweep errors.

use tea_core::TeaError;
use thiserror::Error;

pub type SensitivityResult<T> = Result<T, SensitivityError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SensitivityError {
    /// Name does not match any sweepable parameter.
    #[error("Unknown sensitivity parameter: {name}")]
    UnknownParameter { name: String },

    #[error("Invalid sweep: {what}")]
    InvalidSweep { what: String },

    /// Flow model rejected a perturbed input.
    #[error("Model evaluation failed: {0}")]
    Model(#[from] TeaError),
}
