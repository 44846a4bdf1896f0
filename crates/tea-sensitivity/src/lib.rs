//! tea-sensitivity: one-parameter sensitivity sweeps over the TEA model.
//!
//! Provides:
//! - `SensitivityParameter`: the six sweepable inputs
//! - `SweepDefinition`: symmetric percentage offsets around the base value
//! - `run_sensitivity_analysis`: re-evaluates the flow model per offset and
//!   derives production, revenue and profit
//!
//! # Example
//!
//! ```
//! use tea_process::ProcessParameters;
//! use tea_sensitivity::{SensitivityParameter, run_sensitivity_analysis};
//!
//! let rows = run_sensitivity_analysis(
//!     2.0,
//!     SensitivityParameter::EthanolPrice,
//!     &ProcessParameters::default(),
//!     1000.0,
//!     2.0,
//!     810_000.0,
//!     20,
//! )
//! .unwrap();
//!
//! assert_eq!(rows.len(), 9);
//! assert_eq!(rows[0].change, "-20%");
//! ```

pub mod error;
pub mod parameter;
pub mod runner;
pub mod sweep;

pub use error::{SensitivityError, SensitivityResult};
pub use parameter::SensitivityParameter;
pub use runner::{SensitivityRow, SensitivityTable, run_sensitivity_analysis, run_sensitivity_sweep};
pub use sweep::SweepDefinition;
