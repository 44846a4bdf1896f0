//! Stage-by-stage mass balance.

use serde::{Deserialize, Serialize};
use tea_core::units::constants::{
    FERMENTATION_YIELD, HOURS_PER_YEAR, KG_PER_TONNE, US_GAL_PER_LITER,
};
use tea_core::units::{MassRate, VolumeRate, gal_per_hr, kg_per_hr, l_per_hr};
use tea_core::{Real, TeaResult, ensure_positive};
use tracing::debug;

use crate::params::{Efficiency, ProcessParameters};
use crate::stage::ProcessStage;

/// Hourly flows through the process, one field per stage.
///
/// Mass rates are kg/hr, the ethanol volume rates L/hr and US gal/hr.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowRates {
    pub feedstock_kg_per_hr: Real,
    pub pretreated_kg_per_hr: Real,
    pub hydrolyzed_kg_per_hr: Real,
    pub fermented_kg_per_hr: Real,
    pub ethanol_kg_per_hr: Real,
    pub ethanol_l_per_hr: Real,
    pub ethanol_gal_per_hr: Real,
}

impl FlowRates {
    /// Value shown for `stage` on the flow diagram (kg/hr, gal/hr for ethanol).
    pub fn stage_rate(&self, stage: ProcessStage) -> Real {
        match stage {
            ProcessStage::Feedstock => self.feedstock_kg_per_hr,
            ProcessStage::Pretreatment => self.pretreated_kg_per_hr,
            ProcessStage::Hydrolysis => self.hydrolyzed_kg_per_hr,
            ProcessStage::Fermentation => self.fermented_kg_per_hr,
            ProcessStage::Distillation => self.ethanol_kg_per_hr,
            ProcessStage::Ethanol => self.ethanol_gal_per_hr,
        }
    }

    pub fn feedstock_rate(&self) -> MassRate {
        kg_per_hr(self.feedstock_kg_per_hr)
    }

    pub fn ethanol_mass_rate(&self) -> MassRate {
        kg_per_hr(self.ethanol_kg_per_hr)
    }

    pub fn ethanol_volume_rate(&self) -> VolumeRate {
        l_per_hr(self.ethanol_l_per_hr)
    }

    pub fn ethanol_gallon_rate(&self) -> VolumeRate {
        gal_per_hr(self.ethanol_gal_per_hr)
    }

    /// Ethanol output over one operating year (US gal).
    pub fn annual_ethanol_gal(&self) -> Real {
        self.ethanol_gal_per_hr * HOURS_PER_YEAR
    }
}

/// Convert annual feedstock tonnage into hourly flows through every stage.
///
/// The chain is evaluated in fixed order so repeated calls are bit-identical:
/// feedstock kg/hr = tons * 1000 / 8000, each stage multiplies by its
/// efficiency, fermentation also applies the 0.5 yield factor, and the
/// ethanol mass is converted to volume through the fixed density.
pub fn calculate_flow_rates(
    annual_feedstock_tons: Real,
    params: &ProcessParameters,
) -> TeaResult<FlowRates> {
    ensure_positive(annual_feedstock_tons, "annual feedstock")?;
    for which in Efficiency::ALL {
        ensure_positive(params.efficiency(which), which.key())?;
    }
    let density = ensure_positive(params.ethanol_density_kg_per_l(), "ethanol density")?;

    let hourly_feedstock = annual_feedstock_tons * KG_PER_TONNE / HOURS_PER_YEAR;
    let pretreated = hourly_feedstock * params.pretreatment_efficiency();
    let hydrolyzed = pretreated * params.hydrolysis_efficiency();
    let fermented = hydrolyzed * FERMENTATION_YIELD * params.fermentation_efficiency();
    let ethanol = fermented * params.distillation_efficiency();

    let ethanol_volume = ethanol / density;
    let ethanol_gal_per_hr = ethanol_volume * US_GAL_PER_LITER;

    debug!(
        annual_feedstock_tons,
        ethanol_kg_per_hr = ethanol,
        ethanol_gal_per_hr,
        "evaluated flow rates"
    );

    Ok(FlowRates {
        feedstock_kg_per_hr: hourly_feedstock,
        pretreated_kg_per_hr: pretreated,
        hydrolyzed_kg_per_hr: hydrolyzed,
        fermented_kg_per_hr: fermented,
        ethanol_kg_per_hr: ethanol,
        ethanol_l_per_hr: ethanol_volume,
        ethanol_gal_per_hr,
    })
}
