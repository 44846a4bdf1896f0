//! Scenario validation logic.
//!
//! Bounds match the dashboard input ranges and are tighter than what the
//! flow model itself accepts.

use crate::schema::Scenario;

pub const FEEDSTOCK_TONS_BOUNDS: (f64, f64) = (100.0, 10_000.0);
pub const ETHANOL_PRICE_BOUNDS: (f64, f64) = (0.5, 5.0);
pub const EFFICIENCY_BOUNDS: (f64, f64) = (0.5, 1.0);
pub const MAX_RANGE_PERCENT: u32 = 95;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing value: {field}")]
    Missing { field: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version == 0 || scenario.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    if scenario.name.trim().is_empty() {
        return Err(ValidationError::Missing {
            field: "name".to_string(),
        });
    }

    validate_bounded(
        "annual_feedstock_tons",
        scenario.annual_feedstock_tons,
        FEEDSTOCK_TONS_BOUNDS,
    )?;
    validate_bounded(
        "ethanol_price_usd_per_gal",
        scenario.ethanol_price_usd_per_gal,
        ETHANOL_PRICE_BOUNDS,
    )?;

    let e = &scenario.efficiencies;
    for (field, value) in [
        ("efficiencies.pretreatment", e.pretreatment),
        ("efficiencies.hydrolysis", e.hydrolysis),
        ("efficiencies.fermentation", e.fermentation),
        ("efficiencies.distillation", e.distillation),
    ] {
        validate_bounded(field, value, EFFICIENCY_BOUNDS)?;
    }

    let s = &scenario.sensitivity;
    if s.range_percent > MAX_RANGE_PERCENT {
        return Err(ValidationError::InvalidValue {
            field: "sensitivity.range_percent".to_string(),
            value: s.range_percent.to_string(),
            reason: format!("must be at most {MAX_RANGE_PERCENT}"),
        });
    }
    if s.step_percent == 0 {
        return Err(ValidationError::InvalidValue {
            field: "sensitivity.step_percent".to_string(),
            value: s.step_percent.to_string(),
            reason: "must be positive".to_string(),
        });
    }

    Ok(())
}

pub fn validate_bounded(
    field: &str,
    value: f64,
    (min, max): (f64, f64),
) -> Result<(), ValidationError> {
    if !value.is_finite() || value < min || value > max {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: format!("must be in [{min}, {max}]"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        validate_scenario(&Scenario::new("Base")).unwrap();
    }

    #[test]
    fn rejects_feedstock_outside_widget_bounds() {
        let mut s = Scenario::new("Low");
        s.annual_feedstock_tons = 50.0;
        let err = validate_scenario(&s).unwrap_err();
        assert!(err.to_string().contains("annual_feedstock_tons"));

        s.annual_feedstock_tons = 10_000.0;
        validate_scenario(&s).unwrap();
    }

    #[test]
    fn rejects_efficiency_below_half() {
        let mut s = Scenario::new("Eff");
        s.efficiencies.fermentation = 0.4;
        let err = validate_scenario(&s).unwrap_err();
        assert!(err.to_string().contains("efficiencies.fermentation"));
    }

    #[test]
    fn rejects_nan_price() {
        let mut s = Scenario::new("Price");
        s.ethanol_price_usd_per_gal = f64::NAN;
        assert!(validate_scenario(&s).is_err());
    }

    #[test]
    fn rejects_unknown_version_and_blank_name() {
        let mut s = Scenario::new("Version");
        s.version = 7;
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::UnsupportedVersion { version: 7 })
        ));

        let blank = Scenario::new("  ");
        assert!(matches!(
            validate_scenario(&blank),
            Err(ValidationError::Missing { .. })
        ));
    }

    #[test]
    fn rejects_oversized_range_and_zero_step() {
        let mut s = Scenario::new("Sweep");
        s.sensitivity.range_percent = 100;
        assert!(validate_scenario(&s).is_err());

        let mut s = Scenario::new("Sweep");
        s.sensitivity.step_percent = 0;
        assert!(validate_scenario(&s).is_err());
    }
}
