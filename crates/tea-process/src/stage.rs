//! Process stages in flow order.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProcessStage {
    Feedstock,
    Pretreatment,
    Hydrolysis,
    Fermentation,
    Distillation,
    /// Final product, reported volumetrically.
    Ethanol,
}

impl ProcessStage {
    /// All stages, upstream first.
    pub const ALL: [ProcessStage; 6] = [
        ProcessStage::Feedstock,
        ProcessStage::Pretreatment,
        ProcessStage::Hydrolysis,
        ProcessStage::Fermentation,
        ProcessStage::Distillation,
        ProcessStage::Ethanol,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Feedstock => "Feedstock",
            Self::Pretreatment => "Pretreatment",
            Self::Hydrolysis => "Hydrolysis",
            Self::Fermentation => "Fermentation",
            Self::Distillation => "Distillation",
            Self::Ethanol => "Ethanol",
        }
    }

    /// Unit of the rate reported for this stage.
    pub fn rate_unit(self) -> &'static str {
        match self {
            Self::Ethanol => "gal/hr",
            _ => "kg/hr",
        }
    }

    /// Next stage downstream, `None` for the product.
    pub fn downstream(self) -> Option<ProcessStage> {
        match self {
            Self::Feedstock => Some(Self::Pretreatment),
            Self::Pretreatment => Some(Self::Hydrolysis),
            Self::Hydrolysis => Some(Self::Fermentation),
            Self::Fermentation => Some(Self::Distillation),
            Self::Distillation => Some(Self::Ethanol),
            Self::Ethanol => None,
        }
    }
}

impl fmt::Display for ProcessStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
