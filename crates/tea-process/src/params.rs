//! Process parameters: stage efficiencies and the fixed ethanol density.

use serde::Serialize;
use std::fmt;
use tea_core::units::constants::ETHANOL_DENSITY_KG_PER_L;
use tea_core::{Real, TeaResult, ensure_in_range, ensure_positive};

/// One of the four user-adjustable stage efficiencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Efficiency {
    Pretreatment,
    Hydrolysis,
    Fermentation,
    Distillation,
}

impl Efficiency {
    /// All efficiencies in process order.
    pub const ALL: [Efficiency; 4] = [
        Efficiency::Pretreatment,
        Efficiency::Hydrolysis,
        Efficiency::Fermentation,
        Efficiency::Distillation,
    ];

    /// Lowercase name used in error messages and file keys.
    pub fn key(self) -> &'static str {
        match self {
            Self::Pretreatment => "pretreatment efficiency",
            Self::Hydrolysis => "hydrolysis efficiency",
            Self::Fermentation => "fermentation efficiency",
            Self::Distillation => "distillation efficiency",
        }
    }
}

impl fmt::Display for Efficiency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretreatment => write!(f, "Pretreatment Efficiency"),
            Self::Hydrolysis => write!(f, "Hydrolysis Efficiency"),
            Self::Fermentation => write!(f, "Fermentation Efficiency"),
            Self::Distillation => write!(f, "Distillation Efficiency"),
        }
    }
}

/// Immutable set of process parameters for one evaluation.
///
/// The ethanol density is a physical constant and has no setter. Values built
/// through [`ProcessParameters::new`] are fractions in (0, 1]; sweep overrides
/// built through [`ProcessParameters::with_efficiency`] only need to be
/// positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProcessParameters {
    pretreatment_efficiency: Real,
    hydrolysis_efficiency: Real,
    fermentation_efficiency: Real,
    distillation_efficiency: Real,
    ethanol_density_kg_per_l: Real,
}

impl Default for ProcessParameters {
    fn default() -> Self {
        Self {
            pretreatment_efficiency: 0.8,
            hydrolysis_efficiency: 0.75,
            fermentation_efficiency: 0.9,
            distillation_efficiency: 0.95,
            ethanol_density_kg_per_l: ETHANOL_DENSITY_KG_PER_L,
        }
    }
}

impl ProcessParameters {
    /// Build parameters from user-supplied efficiencies, each in (0, 1].
    pub fn new(
        pretreatment: Real,
        hydrolysis: Real,
        fermentation: Real,
        distillation: Real,
    ) -> TeaResult<Self> {
        Ok(Self {
            pretreatment_efficiency: check_fraction(pretreatment, Efficiency::Pretreatment)?,
            hydrolysis_efficiency: check_fraction(hydrolysis, Efficiency::Hydrolysis)?,
            fermentation_efficiency: check_fraction(fermentation, Efficiency::Fermentation)?,
            distillation_efficiency: check_fraction(distillation, Efficiency::Distillation)?,
            ethanol_density_kg_per_l: ETHANOL_DENSITY_KG_PER_L,
        })
    }

    pub fn efficiency(&self, which: Efficiency) -> Real {
        match which {
            Efficiency::Pretreatment => self.pretreatment_efficiency,
            Efficiency::Hydrolysis => self.hydrolysis_efficiency,
            Efficiency::Fermentation => self.fermentation_efficiency,
            Efficiency::Distillation => self.distillation_efficiency,
        }
    }

    pub fn pretreatment_efficiency(&self) -> Real {
        self.pretreatment_efficiency
    }

    pub fn hydrolysis_efficiency(&self) -> Real {
        self.hydrolysis_efficiency
    }

    pub fn fermentation_efficiency(&self) -> Real {
        self.fermentation_efficiency
    }

    pub fn distillation_efficiency(&self) -> Real {
        self.distillation_efficiency
    }

    /// Ethanol density in kg/L.
    pub fn ethanol_density_kg_per_l(&self) -> Real {
        self.ethanol_density_kg_per_l
    }

    /// Copy of these parameters with exactly one efficiency replaced.
    ///
    /// The override may exceed 1.0 (a +20 % sweep of 0.95 gives 1.14) but
    /// must be finite and positive.
    pub fn with_efficiency(&self, which: Efficiency, value: Real) -> TeaResult<Self> {
        let value = ensure_positive(value, which.key())?;
        let mut out = *self;
        match which {
            Efficiency::Pretreatment => out.pretreatment_efficiency = value,
            Efficiency::Hydrolysis => out.hydrolysis_efficiency = value,
            Efficiency::Fermentation => out.fermentation_efficiency = value,
            Efficiency::Distillation => out.distillation_efficiency = value,
        }
        Ok(out)
    }
}

fn check_fraction(value: Real, which: Efficiency) -> TeaResult<Real> {
    let value = ensure_positive(value, which.key())?;
    ensure_in_range(value, 0.0, 1.0, which.key())
}
