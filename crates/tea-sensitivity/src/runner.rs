//! Sensitivity sweep execution.
//!
//! Each row is an independent evaluation: the perturbed input is applied to
//! the base case, the flow model is re-run where the input affects the mass
//! balance, and production, revenue and profit are derived from the result.

use serde::Serialize;
use tea_core::units::constants::HOURS_PER_YEAR;
use tea_core::{Real, ensure_finite, ensure_positive};
use tea_process::{Efficiency, FlowRates, ProcessParameters, calculate_flow_rates};
use tracing::{debug, info};

use crate::error::SensitivityResult;
use crate::parameter::SensitivityParameter;
use crate::sweep::SweepDefinition;

/// One swept point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityRow {
    /// Offset from the base value in percent
    pub offset_percent: i32,
    /// Offset label, e.g. `"-20%"`
    pub change: String,
    /// Perturbed parameter value
    pub value: Real,
    pub annual_production_gal: Real,
    pub annual_revenue_usd: Real,
    pub simple_annual_profit_usd: Real,
}

/// Rows of one sweep together with the parameter that was swept.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityTable {
    pub parameter: SensitivityParameter,
    pub base_value: Real,
    pub rows: Vec<SensitivityRow>,
}

impl SensitivityTable {
    /// Run a sweep and keep the rows with their parameter.
    pub fn run(
        param: SensitivityParameter,
        params: &ProcessParameters,
        annual_feedstock_tons: Real,
        ethanol_price: Real,
        annual_opex: Real,
        sweep: &SweepDefinition,
    ) -> SensitivityResult<Self> {
        let base_value = param.base_value(annual_feedstock_tons, ethanol_price, params);
        let rows = run_sensitivity_sweep(
            base_value,
            param,
            params,
            annual_feedstock_tons,
            ethanol_price,
            annual_opex,
            sweep,
        )?;
        Ok(Self {
            parameter: param,
            base_value,
            rows,
        })
    }

    /// Row at `offset_percent`, if the sweep produced one.
    pub fn row_at(&self, offset_percent: i32) -> Option<&SensitivityRow> {
        self.rows.iter().find(|r| r.offset_percent == offset_percent)
    }

    /// Offset labels in row order (chart x-axis).
    pub fn changes(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.change.as_str()).collect()
    }

    pub fn production_series(&self) -> Vec<Real> {
        self.rows.iter().map(|r| r.annual_production_gal).collect()
    }

    pub fn revenue_series(&self) -> Vec<Real> {
        self.rows.iter().map(|r| r.annual_revenue_usd).collect()
    }

    pub fn profit_series(&self) -> Vec<Real> {
        self.rows.iter().map(|r| r.simple_annual_profit_usd).collect()
    }
}

/// Sweep `param` by ±`range_percent` in 5 % steps around `base_value`.
pub fn run_sensitivity_analysis(
    base_value: Real,
    param: SensitivityParameter,
    params: &ProcessParameters,
    annual_feedstock_tons: Real,
    ethanol_price: Real,
    annual_opex: Real,
    range_percent: u32,
) -> SensitivityResult<Vec<SensitivityRow>> {
    let sweep = SweepDefinition::with_range(range_percent)?;
    run_sensitivity_sweep(
        base_value,
        param,
        params,
        annual_feedstock_tons,
        ethanol_price,
        annual_opex,
        &sweep,
    )
}

/// Sweep `param` over the offsets of `sweep` around `base_value`.
///
/// Sweeping the ethanol price reuses the base-case flow rates for every row:
/// price has no effect on the mass balance, only on revenue.
pub fn run_sensitivity_sweep(
    base_value: Real,
    param: SensitivityParameter,
    params: &ProcessParameters,
    annual_feedstock_tons: Real,
    ethanol_price: Real,
    annual_opex: Real,
    sweep: &SweepDefinition,
) -> SensitivityResult<Vec<SensitivityRow>> {
    ensure_positive(base_value, "sensitivity base value")?;
    ensure_positive(ethanol_price, "ethanol price")?;
    ensure_finite(annual_opex, "annual opex")?;

    let base_flows = calculate_flow_rates(annual_feedstock_tons, params)?;
    let offsets = sweep.offsets();
    let mut rows = Vec::with_capacity(offsets.len());

    for offset in offsets {
        let new_value = base_value * SweepDefinition::multiplier(offset);
        let flows = perturbed_flows(param, new_value, params, annual_feedstock_tons, &base_flows)?;

        let annual_production = flows.ethanol_gal_per_hr * HOURS_PER_YEAR;
        let price = match param {
            SensitivityParameter::EthanolPrice => new_value,
            _ => ethanol_price,
        };
        let revenue = annual_production * price;

        debug!(offset, new_value, annual_production, revenue, "sensitivity row");

        rows.push(SensitivityRow {
            offset_percent: offset,
            change: format!("{offset}%"),
            value: new_value,
            annual_production_gal: annual_production,
            annual_revenue_usd: revenue,
            simple_annual_profit_usd: revenue - annual_opex,
        });
    }

    info!(parameter = %param, base_value, rows = rows.len(), "sensitivity sweep complete");
    Ok(rows)
}

fn perturbed_flows(
    param: SensitivityParameter,
    new_value: Real,
    params: &ProcessParameters,
    annual_feedstock_tons: Real,
    base_flows: &FlowRates,
) -> SensitivityResult<FlowRates> {
    let swept = |which: Efficiency| -> SensitivityResult<FlowRates> {
        let overridden = params.with_efficiency(which, new_value)?;
        Ok(calculate_flow_rates(annual_feedstock_tons, &overridden)?)
    };
    let flows = match param {
        SensitivityParameter::AnnualFeedstock => calculate_flow_rates(new_value, params)?,
        SensitivityParameter::EthanolPrice => *base_flows,
        SensitivityParameter::PretreatmentEfficiency => swept(Efficiency::Pretreatment)?,
        SensitivityParameter::HydrolysisEfficiency => swept(Efficiency::Hydrolysis)?,
        SensitivityParameter::FermentationEfficiency => swept(Efficiency::Fermentation)?,
        SensitivityParameter::DistillationEfficiency => swept(Efficiency::Distillation)?,
    };
    Ok(flows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SensitivityError;
    use tea_core::TeaError;

    const OPEX: Real = 810_000.0;

    fn run(param: SensitivityParameter) -> Vec<SensitivityRow> {
        let params = ProcessParameters::default();
        let base = param.base_value(1000.0, 2.0, &params);
        run_sensitivity_analysis(base, param, &params, 1000.0, 2.0, OPEX, 20).unwrap()
    }

    #[test]
    fn labels_follow_offsets() {
        let rows = run(SensitivityParameter::AnnualFeedstock);
        let labels: Vec<_> = rows.iter().map(|r| r.change.as_str()).collect();
        assert_eq!(
            labels,
            ["-20%", "-15%", "-10%", "-5%", "0%", "5%", "10%", "15%", "20%"]
        );
    }

    #[test]
    fn feedstock_sweep_reruns_flow_model() {
        let rows = run(SensitivityParameter::AnnualFeedstock);
        assert_eq!(rows[0].value, 800.0);
        let expected = calculate_flow_rates(800.0, &ProcessParameters::default())
            .unwrap()
            .annual_ethanol_gal();
        assert_eq!(rows[0].annual_production_gal, expected);
        assert!(rows[0].annual_production_gal < rows[8].annual_production_gal);
    }

    #[test]
    fn efficiency_sweep_overrides_one_field() {
        let rows = run(SensitivityParameter::PretreatmentEfficiency);
        let params = ProcessParameters::default()
            .with_efficiency(tea_process::Efficiency::Pretreatment, rows[2].value)
            .unwrap();
        let expected = calculate_flow_rates(1000.0, &params).unwrap().annual_ethanol_gal();
        assert_eq!(rows[2].annual_production_gal, expected);
    }

    #[test]
    fn price_sweep_keeps_production_constant() {
        let rows = run(SensitivityParameter::EthanolPrice);
        let first = rows[0].annual_production_gal;
        assert!(rows.iter().all(|r| r.annual_production_gal == first));
        for r in &rows {
            assert_eq!(r.annual_revenue_usd, r.annual_production_gal * r.value);
        }
    }

    #[test]
    fn every_efficiency_sweep_moves_production() {
        for param in SensitivityParameter::ALL {
            if param.efficiency().is_none() {
                continue;
            }
            let rows = run(param);
            assert!(
                rows[0].annual_production_gal < rows[8].annual_production_gal,
                "{param} sweep left production unchanged"
            );
        }
    }

    #[test]
    fn profit_subtracts_opex() {
        for r in run(SensitivityParameter::FermentationEfficiency) {
            assert_eq!(r.simple_annual_profit_usd, r.annual_revenue_usd - OPEX);
        }
    }

    #[test]
    fn rejects_non_positive_base_value() {
        let params = ProcessParameters::default();
        let err = run_sensitivity_analysis(
            0.0,
            SensitivityParameter::EthanolPrice,
            &params,
            1000.0,
            2.0,
            OPEX,
            20,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            SensitivityError::Model(TeaError::NonPositive { .. })
        ));
    }

    #[test]
    fn table_series_are_in_row_order() {
        let table = SensitivityTable::run(
            SensitivityParameter::HydrolysisEfficiency,
            &ProcessParameters::default(),
            1000.0,
            2.0,
            OPEX,
            &SweepDefinition::default(),
        )
        .unwrap();

        assert_eq!(table.base_value, 0.75);
        assert_eq!(table.changes().len(), 9);
        assert_eq!(table.production_series().len(), 9);
        assert_eq!(table.revenue_series()[4], table.rows[4].annual_revenue_usd);
        assert_eq!(table.profit_series()[8], table.rows[8].simple_annual_profit_usd);
        assert_eq!(table.row_at(0).map(|r| r.value), Some(0.75));
        assert!(table.row_at(7).is_none());
    }
}
