//! tea-econ: cost reference data and base-case financial metrics.

pub mod expenditure;
pub mod metrics;

pub use expenditure::{CAPEX, ExpenditureKind, ExpenditureTable, LineItem, OPEX};
pub use metrics::FinancialMetrics;
