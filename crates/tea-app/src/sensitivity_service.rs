//! Sensitivity sweeps for a scenario.

use tea_econ::OPEX;
use tea_project::Scenario;
use tea_sensitivity::SensitivityTable;

use crate::error::AppResult;

/// Sweep the scenario's sensitivity parameter around its current value,
/// charging the static annual OPEX against every row.
pub fn run_for_scenario(scenario: &Scenario) -> AppResult<SensitivityTable> {
    let params = scenario.process_parameters()?;
    let sweep = scenario.sweep()?;
    let table = SensitivityTable::run(
        scenario.sensitivity.parameter,
        &params,
        scenario.annual_feedstock_tons,
        scenario.ethanol_price_usd_per_gal,
        OPEX.total(),
        &sweep,
    )?;
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate_base_case;
    use tea_sensitivity::SensitivityParameter;

    #[test]
    fn zero_row_matches_base_case_report() {
        for parameter in SensitivityParameter::ALL {
            let mut scenario = Scenario::new("Base");
            scenario.sensitivity.parameter = parameter;

            let report = evaluate_base_case(&scenario).unwrap();
            let table = run_for_scenario(&scenario).unwrap();
            let zero = table.row_at(0).unwrap();

            assert_eq!(table.rows.len(), 9);
            assert_eq!(zero.annual_production_gal, report.metrics.annual_production_gal);
            assert_eq!(zero.annual_revenue_usd, report.metrics.annual_revenue_usd);
            assert_eq!(
                zero.simple_annual_profit_usd,
                report.metrics.simple_annual_profit_usd
            );
        }
    }
}
