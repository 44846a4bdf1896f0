//! Scenario loading, saving, validation and command-line overrides.

use std::path::Path;
use tea_project::Scenario;
use tea_sensitivity::SensitivityParameter;
use tracing::debug;

use crate::error::{AppError, AppResult};

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Load a scenario; `.json` files are read as JSON, everything else as YAML.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let loaded = if is_json(path) {
        tea_project::load_json(path)
    } else {
        tea_project::load_yaml(path)
    };
    loaded.map_err(|source| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Save a scenario in the format implied by the file extension.
pub fn save_scenario(path: &Path, scenario: &Scenario) -> AppResult<()> {
    let saved = if is_json(path) {
        tea_project::save_json(path, scenario)
    } else {
        tea_project::save_yaml(path, scenario)
    };
    saved.map_err(|source| AppError::ScenarioFileWrite {
        path: path.to_path_buf(),
        source,
    })
}

pub fn validate_scenario(scenario: &Scenario) -> AppResult<()> {
    tea_project::validate_scenario(scenario)?;
    Ok(())
}

/// Individual inputs supplied on top of a scenario (or the defaults).
#[derive(Debug, Clone, Default)]
pub struct InputOverrides {
    pub annual_feedstock_tons: Option<f64>,
    pub ethanol_price_usd_per_gal: Option<f64>,
    pub pretreatment: Option<f64>,
    pub hydrolysis: Option<f64>,
    pub fermentation: Option<f64>,
    pub distillation: Option<f64>,
    pub parameter: Option<SensitivityParameter>,
    pub range_percent: Option<u32>,
    pub step_percent: Option<u32>,
}

impl InputOverrides {
    /// Apply the overrides to `scenario` and validate the result.
    pub fn apply(&self, scenario: &Scenario) -> AppResult<Scenario> {
        let mut out = scenario.clone();

        if let Some(v) = self.annual_feedstock_tons {
            out.annual_feedstock_tons = v;
        }
        if let Some(v) = self.ethanol_price_usd_per_gal {
            out.ethanol_price_usd_per_gal = v;
        }
        if let Some(v) = self.pretreatment {
            out.efficiencies.pretreatment = v;
        }
        if let Some(v) = self.hydrolysis {
            out.efficiencies.hydrolysis = v;
        }
        if let Some(v) = self.fermentation {
            out.efficiencies.fermentation = v;
        }
        if let Some(v) = self.distillation {
            out.efficiencies.distillation = v;
        }
        if let Some(p) = self.parameter {
            out.sensitivity.parameter = p;
        }
        if let Some(r) = self.range_percent {
            out.sensitivity.range_percent = r;
        }
        if let Some(s) = self.step_percent {
            out.sensitivity.step_percent = s;
        }

        validate_scenario(&out)?;
        debug!(scenario = %out.name, "applied input overrides");
        Ok(out)
    }
}

/// Scenario from an optional file, with overrides applied.
pub fn resolve_scenario(path: Option<&Path>, overrides: &InputOverrides) -> AppResult<Scenario> {
    let base = match path {
        Some(p) => load_scenario(p)?,
        None => Scenario::new("Default"),
    };
    overrides.apply(&base)
}
