//! Error types for the tea-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives the CLI a single error interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Scenario(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: tea_project::ProjectError,
    },

    #[error("Failed to write scenario file: {path}")]
    ScenarioFileWrite {
        path: PathBuf,
        source: tea_project::ProjectError,
    },

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("Sensitivity error: {0}")]
    Sensitivity(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for tea-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<tea_project::ProjectError> for AppError {
    fn from(err: tea_project::ProjectError) -> Self {
        AppError::Scenario(err.to_string())
    }
}

impl From<tea_project::ValidationError> for AppError {
    fn from(err: tea_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<tea_core::TeaError> for AppError {
    fn from(err: tea_core::TeaError) -> Self {
        AppError::Model(err.to_string())
    }
}

impl From<tea_sensitivity::SensitivityError> for AppError {
    fn from(err: tea_sensitivity::SensitivityError) -> Self {
        AppError::Sensitivity(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Scenario(format!("JSON serialization failed: {err}"))
    }
}
