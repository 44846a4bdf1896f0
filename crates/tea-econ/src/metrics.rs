//! Base-case financial metrics.

use serde::{Deserialize, Serialize};
use tea_core::Real;
use tea_process::FlowRates;

use crate::expenditure::ExpenditureTable;

/// Headline numbers for one evaluation of the flow model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialMetrics {
    /// Ethanol produced per operating year (US gal)
    pub annual_production_gal: Real,
    /// Production times ethanol price (USD/year)
    pub annual_revenue_usd: Real,
    /// Sum of capital line items (USD)
    pub total_capex_usd: Real,
    /// Sum of operating line items (USD/year)
    pub annual_opex_usd: Real,
    /// Revenue minus operating cost (USD/year)
    pub simple_annual_profit_usd: Real,
}

impl FinancialMetrics {
    pub fn compute(
        flows: &FlowRates,
        ethanol_price_usd_per_gal: Real,
        capex: &ExpenditureTable,
        opex: &ExpenditureTable,
    ) -> Self {
        let annual_production_gal = flows.annual_ethanol_gal();
        let annual_revenue_usd = annual_production_gal * ethanol_price_usd_per_gal;
        let annual_opex_usd = opex.total();
        Self {
            annual_production_gal,
            annual_revenue_usd,
            total_capex_usd: capex.total(),
            annual_opex_usd,
            simple_annual_profit_usd: annual_revenue_usd - annual_opex_usd,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CAPEX, OPEX};
    use tea_process::{ProcessParameters, calculate_flow_rates};

    #[test]
    fn reference_case_metrics() {
        let flows = calculate_flow_rates(1000.0, &ProcessParameters::default()).unwrap();
        let m = FinancialMetrics::compute(&flows, 2.0, &CAPEX, &OPEX);

        assert_eq!(m.annual_production_gal, flows.ethanol_gal_per_hr * 8000.0);
        assert_eq!(m.annual_revenue_usd, m.annual_production_gal * 2.0);
        assert_eq!(m.total_capex_usd, 3_750_000.0);
        assert_eq!(m.annual_opex_usd, 810_000.0);
        assert_eq!(
            m.simple_annual_profit_usd,
            m.annual_revenue_usd - 810_000.0
        );
        // roughly 85.9k gal/year at these defaults
        assert!((m.annual_production_gal - 85_881.0).abs() < 5.0);
    }
}
