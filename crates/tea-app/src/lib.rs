//! Shared application service layer for the TEA engine.
//!
//! This crate gives front ends one interface for loading scenarios,
//! evaluating the base case, running sensitivity sweeps and exporting
//! results.

pub mod error;
pub mod evaluate;
pub mod export;
pub mod scenario_service;
pub mod sensitivity_service;

// Re-export key types for convenience
pub use error::{AppError, AppResult};
pub use evaluate::{BaseCaseReport, evaluate_base_case};
pub use export::{sensitivity_csv, to_json};
pub use scenario_service::{
    InputOverrides, load_scenario, resolve_scenario, save_scenario, validate_scenario,
};
pub use sensitivity_service::run_for_scenario;
