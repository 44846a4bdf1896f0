//! Scenario schema definitions.

use serde::{Deserialize, Serialize};
use tea_core::TeaResult;
use tea_process::ProcessParameters;
use tea_sensitivity::{SensitivityParameter, SensitivityResult, SweepDefinition};

pub const DEFAULT_ANNUAL_FEEDSTOCK_TONS: f64 = 1000.0;
pub const DEFAULT_ETHANOL_PRICE_USD_PER_GAL: f64 = 2.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default = "default_feedstock")]
    pub annual_feedstock_tons: f64,
    #[serde(default = "default_price")]
    pub ethanol_price_usd_per_gal: f64,
    #[serde(default)]
    pub efficiencies: EfficienciesDef,
    #[serde(default)]
    pub sensitivity: SensitivityDef,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct EfficienciesDef {
    pub pretreatment: f64,
    pub hydrolysis: f64,
    pub fermentation: f64,
    pub distillation: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SensitivityDef {
    pub parameter: SensitivityParameter,
    #[serde(default = "default_range")]
    pub range_percent: u32,
    #[serde(default = "default_step")]
    pub step_percent: u32,
}

fn default_feedstock() -> f64 {
    DEFAULT_ANNUAL_FEEDSTOCK_TONS
}

fn default_price() -> f64 {
    DEFAULT_ETHANOL_PRICE_USD_PER_GAL
}

fn default_range() -> u32 {
    SweepDefinition::default().range_percent()
}

fn default_step() -> u32 {
    SweepDefinition::default().step_percent()
}

impl Default for EfficienciesDef {
    fn default() -> Self {
        let p = ProcessParameters::default();
        Self {
            pretreatment: p.pretreatment_efficiency(),
            hydrolysis: p.hydrolysis_efficiency(),
            fermentation: p.fermentation_efficiency(),
            distillation: p.distillation_efficiency(),
        }
    }
}

impl Default for SensitivityDef {
    fn default() -> Self {
        Self {
            parameter: SensitivityParameter::AnnualFeedstock,
            range_percent: default_range(),
            step_percent: default_step(),
        }
    }
}

impl Scenario {
    /// Dashboard defaults under the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: name.into(),
            annual_feedstock_tons: DEFAULT_ANNUAL_FEEDSTOCK_TONS,
            ethanol_price_usd_per_gal: DEFAULT_ETHANOL_PRICE_USD_PER_GAL,
            efficiencies: EfficienciesDef::default(),
            sensitivity: SensitivityDef::default(),
        }
    }

    pub fn process_parameters(&self) -> TeaResult<ProcessParameters> {
        let e = &self.efficiencies;
        ProcessParameters::new(e.pretreatment, e.hydrolysis, e.fermentation, e.distillation)
    }

    pub fn sweep(&self) -> SensitivityResult<SweepDefinition> {
        SweepDefinition::new(self.sensitivity.range_percent, self.sensitivity.step_percent)
    }
}
