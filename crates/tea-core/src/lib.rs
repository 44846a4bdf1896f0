//! tea-core: shared foundation for the stover ethanol TEA engine.
//!
//! Contains:
//! - units (uom SI types, hourly-rate constructors, plant constants)
//! - numeric (Real + tolerances + input checks)
//! - error (shared error type)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TeaError, TeaResult};
pub use numeric::*;
pub use units::*;
