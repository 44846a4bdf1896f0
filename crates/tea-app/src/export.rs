//! CSV and JSON export.

use serde::Serialize;
use tea_sensitivity::SensitivityTable;

use crate::error::AppResult;

/// One line per row, sweep order preserved.
pub fn sensitivity_csv(table: &SensitivityTable) -> String {
    let mut csv = format!(
        "change,{},annual_production_gal,annual_revenue_usd,simple_annual_profit_usd\n",
        table.parameter.key()
    );
    for row in &table.rows {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            row.change,
            row.value,
            row.annual_production_gal,
            row.annual_revenue_usd,
            row.simple_annual_profit_usd
        ));
    }
    csv
}

pub fn to_json<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{evaluate_base_case, run_for_scenario};
    use tea_project::Scenario;

    #[test]
    fn csv_has_header_and_nine_rows() {
        let table = run_for_scenario(&Scenario::new("Base")).unwrap();
        let csv = sensitivity_csv(&table);
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(
            lines[0],
            "change,annual_feedstock,annual_production_gal,annual_revenue_usd,simple_annual_profit_usd"
        );
        assert!(lines[1].starts_with("-20%,800,"));
        assert!(lines[9].starts_with("20%,1200,"));
    }

    #[test]
    fn report_serializes_to_json() {
        let report = evaluate_base_case(&Scenario::new("Base")).unwrap();
        let json = to_json(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["flow_rates"]["feedstock_kg_per_hr"], 125.0);
        assert_eq!(value["parameters"]["ethanol_density_kg_per_l"], 0.789);
        assert_eq!(value["metrics"]["total_capex_usd"], 3_750_000.0);
    }
}
