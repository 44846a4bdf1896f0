use thiserror::Error;

pub type TeaResult<T> = Result<T, TeaError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TeaError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid parameter {what}: {value} (must be greater than zero)")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Invalid parameter {what}: {value} (expected {min}..={max})")]
    OutOfRange {
        what: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}
