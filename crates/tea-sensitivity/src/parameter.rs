//! Sweepable input parameters.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tea_core::Real;
use tea_process::{Efficiency, ProcessParameters};

use crate::error::SensitivityError;

/// The inputs a sensitivity sweep can perturb, one variant each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SensitivityParameter {
    #[serde(rename = "Annual Feedstock", alias = "annual_feedstock")]
    AnnualFeedstock,
    #[serde(rename = "Ethanol Price", alias = "ethanol_price")]
    EthanolPrice,
    #[serde(rename = "Pretreatment Efficiency", alias = "pretreatment_efficiency")]
    PretreatmentEfficiency,
    #[serde(rename = "Hydrolysis Efficiency", alias = "hydrolysis_efficiency")]
    HydrolysisEfficiency,
    #[serde(rename = "Fermentation Efficiency", alias = "fermentation_efficiency")]
    FermentationEfficiency,
    #[serde(rename = "Distillation Efficiency", alias = "distillation_efficiency")]
    DistillationEfficiency,
}

impl SensitivityParameter {
    /// Menu order.
    pub const ALL: [SensitivityParameter; 6] = [
        SensitivityParameter::AnnualFeedstock,
        SensitivityParameter::EthanolPrice,
        SensitivityParameter::PretreatmentEfficiency,
        SensitivityParameter::HydrolysisEfficiency,
        SensitivityParameter::FermentationEfficiency,
        SensitivityParameter::DistillationEfficiency,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::AnnualFeedstock => "Annual Feedstock",
            Self::EthanolPrice => "Ethanol Price",
            Self::PretreatmentEfficiency => "Pretreatment Efficiency",
            Self::HydrolysisEfficiency => "Hydrolysis Efficiency",
            Self::FermentationEfficiency => "Fermentation Efficiency",
            Self::DistillationEfficiency => "Distillation Efficiency",
        }
    }

    /// snake_case key, also accepted by `FromStr`.
    pub fn key(self) -> &'static str {
        match self {
            Self::AnnualFeedstock => "annual_feedstock",
            Self::EthanolPrice => "ethanol_price",
            Self::PretreatmentEfficiency => "pretreatment_efficiency",
            Self::HydrolysisEfficiency => "hydrolysis_efficiency",
            Self::FermentationEfficiency => "fermentation_efficiency",
            Self::DistillationEfficiency => "distillation_efficiency",
        }
    }

    /// The process efficiency this parameter overrides, if any.
    pub fn efficiency(self) -> Option<Efficiency> {
        match self {
            Self::AnnualFeedstock | Self::EthanolPrice => None,
            Self::PretreatmentEfficiency => Some(Efficiency::Pretreatment),
            Self::HydrolysisEfficiency => Some(Efficiency::Hydrolysis),
            Self::FermentationEfficiency => Some(Efficiency::Fermentation),
            Self::DistillationEfficiency => Some(Efficiency::Distillation),
        }
    }

    /// Current value of this parameter among the base-case inputs.
    pub fn base_value(
        self,
        annual_feedstock_tons: Real,
        ethanol_price: Real,
        params: &ProcessParameters,
    ) -> Real {
        match self.efficiency() {
            Some(which) => params.efficiency(which),
            None if self == Self::AnnualFeedstock => annual_feedstock_tons,
            None => ethanol_price,
        }
    }
}

impl fmt::Display for SensitivityParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SensitivityParameter {
    type Err = SensitivityError;

    /// Accepts the menu name (`"Ethanol Price"`) or its key (`ethanol_price`,
    /// `ethanol-price`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let key = trimmed.to_ascii_lowercase().replace(['-', ' '], "_");
        Self::ALL
            .into_iter()
            .find(|p| p.name() == trimmed || p.key() == key)
            .ok_or_else(|| SensitivityError::UnknownParameter {
                name: s.to_string(),
            })
    }
}
