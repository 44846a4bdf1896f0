//! tea-process: mass balance for the corn-stover-to-ethanol process.
//!
//! Provides:
//! - `ProcessParameters`: stage efficiencies plus the fixed ethanol density
//! - `calculate_flow_rates`: annual feedstock tonnage to hourly stage flows
//! - `ProcessStage`: the process stages in flow order
//! - `ProcessFlowDiagram`: labelled stage graph with DOT/text rendering
//!
//! Every calculation is a deterministic function of its inputs; nothing is
//! cached between calls.
//!
//! # Example
//!
//! ```
//! use tea_process::{ProcessParameters, calculate_flow_rates};
//!
//! let params = ProcessParameters::default();
//! let flows = calculate_flow_rates(1000.0, &params).unwrap();
//!
//! assert_eq!(flows.feedstock_kg_per_hr, 125.0);
//! assert_eq!(flows.pretreated_kg_per_hr, 100.0);
//! ```

pub mod diagram;
pub mod flow;
pub mod params;
pub mod stage;

// Re-exports
pub use diagram::{DiagramNode, ProcessFlowDiagram};
pub use flow::{FlowRates, calculate_flow_rates};
pub use params::{Efficiency, ProcessParameters};
pub use stage::ProcessStage;
