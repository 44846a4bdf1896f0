//! Percentage offsets for a sensitivity sweep.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{SensitivityError, SensitivityResult};

pub const DEFAULT_RANGE_PERCENT: u32 = 20;
pub const DEFAULT_STEP_PERCENT: u32 = 5;

/// Symmetric sweep `-range, -range + step, ..., <= +range` in percent.
///
/// Deserialization goes through the checks in [`SweepDefinition::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSweep")]
pub struct SweepDefinition {
    range_percent: u32,
    step_percent: u32,
}

#[derive(Deserialize)]
struct RawSweep {
    range_percent: u32,
    step_percent: u32,
}

impl TryFrom<RawSweep> for SweepDefinition {
    type Error = SensitivityError;

    fn try_from(raw: RawSweep) -> SensitivityResult<Self> {
        Self::new(raw.range_percent, raw.step_percent)
    }
}

impl Default for SweepDefinition {
    fn default() -> Self {
        Self {
            range_percent: DEFAULT_RANGE_PERCENT,
            step_percent: DEFAULT_STEP_PERCENT,
        }
    }
}

impl SweepDefinition {
    pub fn new(range_percent: u32, step_percent: u32) -> SensitivityResult<Self> {
        if step_percent == 0 {
            return Err(SensitivityError::InvalidSweep {
                what: "step must be at least 1 percent".to_string(),
            });
        }
        // -100 % would zero the perturbed value
        if range_percent >= 100 {
            return Err(SensitivityError::InvalidSweep {
                what: format!("range {range_percent}% must be below 100%"),
            });
        }
        Ok(Self {
            range_percent,
            step_percent,
        })
    }

    /// Default 5 % step with a custom range.
    pub fn with_range(range_percent: u32) -> SensitivityResult<Self> {
        Self::new(range_percent, DEFAULT_STEP_PERCENT)
    }

    pub fn range_percent(&self) -> u32 {
        self.range_percent
    }

    pub fn step_percent(&self) -> u32 {
        self.step_percent
    }

    /// Offsets in ascending order.
    pub fn offsets(&self) -> Vec<i32> {
        let range = self.range_percent as i32;
        (-range..=range).step_by(self.step_percent as usize).collect()
    }

    /// `1 + offset / 100`
    pub fn multiplier(offset_percent: i32) -> f64 {
        1.0 + f64::from(offset_percent) / 100.0
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "±{}% in {}% steps",
            self.range_percent, self.step_percent
        )
    }
}
