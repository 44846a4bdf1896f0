//! Base-case evaluation.

use serde::Serialize;
use tea_econ::{CAPEX, FinancialMetrics, OPEX};
use tea_process::{FlowRates, ProcessFlowDiagram, ProcessParameters, calculate_flow_rates};
use tea_project::Scenario;
use tracing::info;

use crate::error::AppResult;

/// Everything the front end shows for the unperturbed inputs.
#[derive(Debug, Clone, Serialize)]
pub struct BaseCaseReport {
    pub scenario: String,
    pub annual_feedstock_tons: f64,
    pub ethanol_price_usd_per_gal: f64,
    pub parameters: ProcessParameters,
    pub flow_rates: FlowRates,
    pub metrics: FinancialMetrics,
}

impl BaseCaseReport {
    pub fn diagram(&self) -> ProcessFlowDiagram {
        ProcessFlowDiagram::from_flow_rates(&self.flow_rates)
    }
}

pub fn evaluate_base_case(scenario: &Scenario) -> AppResult<BaseCaseReport> {
    let parameters = scenario.process_parameters()?;
    let flow_rates = calculate_flow_rates(scenario.annual_feedstock_tons, &parameters)?;
    let metrics = FinancialMetrics::compute(
        &flow_rates,
        scenario.ethanol_price_usd_per_gal,
        &CAPEX,
        &OPEX,
    );

    info!(
        scenario = %scenario.name,
        annual_production_gal = metrics.annual_production_gal,
        "evaluated base case"
    );

    Ok(BaseCaseReport {
        scenario: scenario.name.clone(),
        annual_feedstock_tons: scenario.annual_feedstock_tons,
        ethanol_price_usd_per_gal: scenario.ethanol_price_usd_per_gal,
        parameters,
        flow_rates,
        metrics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scenario_report() {
        let report = evaluate_base_case(&Scenario::new("Base")).unwrap();
        assert_eq!(report.flow_rates.feedstock_kg_per_hr, 125.0);
        assert_eq!(report.metrics.total_capex_usd, 3_750_000.0);
        assert_eq!(report.metrics.annual_opex_usd, 810_000.0);
        assert_eq!(report.diagram().node_count(), 6);
    }

    #[test]
    fn invalid_efficiency_is_model_error() {
        let mut scenario = Scenario::new("Bad");
        scenario.efficiencies.hydrolysis = 0.0;
        let err = evaluate_base_case(&scenario).unwrap_err();
        assert!(matches!(err, crate::AppError::Model(_)));
    }
}
