// tea-core/src/units.rs

use uom::si::f64::{MassRate as UomMassRate, VolumeRate as UomVolumeRate};

// Public canonical unit types (SI, f64)
pub type MassRate = UomMassRate;
pub type VolumeRate = UomVolumeRate;

/// Mass flow given in kg/hr.
#[inline]
pub fn kg_per_hr(v: f64) -> MassRate {
    use uom::si::mass_rate::kilogram_per_second;
    MassRate::new::<kilogram_per_second>(v / constants::SECONDS_PER_HOUR)
}

/// Volumetric flow given in L/hr.
#[inline]
pub fn l_per_hr(v: f64) -> VolumeRate {
    use uom::si::volume_rate::cubic_meter_per_second;
    VolumeRate::new::<cubic_meter_per_second>(
        v / constants::LITERS_PER_CUBIC_METER / constants::SECONDS_PER_HOUR,
    )
}

/// Volumetric flow given in US gal/hr.
#[inline]
pub fn gal_per_hr(v: f64) -> VolumeRate {
    l_per_hr(v / constants::US_GAL_PER_LITER)
}

/// Read a mass flow back in kg/hr.
#[inline]
pub fn as_kg_per_hr(rate: MassRate) -> f64 {
    rate.value * constants::SECONDS_PER_HOUR
}

/// Read a volumetric flow back in US gal/hr.
#[inline]
pub fn as_gal_per_hr(rate: VolumeRate) -> f64 {
    rate.value
        * constants::SECONDS_PER_HOUR
        * constants::LITERS_PER_CUBIC_METER
        * constants::US_GAL_PER_LITER
}

pub mod constants {
    /// Plant operating hours per year.
    pub const HOURS_PER_YEAR: f64 = 8000.0;
    pub const KG_PER_TONNE: f64 = 1000.0;
    /// L -> US gallon.
    pub const US_GAL_PER_LITER: f64 = 0.264172;
    /// Theoretical sugar-to-ethanol mass yield applied in fermentation.
    pub const FERMENTATION_YIELD: f64 = 0.5;
    pub const ETHANOL_DENSITY_KG_PER_L: f64 = 0.789;

    pub const SECONDS_PER_HOUR: f64 = 3600.0;
    pub const LITERS_PER_CUBIC_METER: f64 = 1000.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};

    #[test]
    fn constructors_smoke() {
        let _mdot = kg_per_hr(125.0);
        let _vdot = l_per_hr(40.0);
        let _gal = gal_per_hr(8.0);
    }

    #[test]
    fn hourly_rates_round_trip() {
        let tol = Tolerances::default();
        assert!(nearly_equal(as_kg_per_hr(kg_per_hr(125.0)), 125.0, tol));
        assert!(nearly_equal(as_gal_per_hr(gal_per_hr(8.47)), 8.47, tol));
    }

    #[test]
    fn litres_and_gallons_agree() {
        let tol = Tolerances::default();
        let litres = l_per_hr(100.0);
        let gallons = gal_per_hr(100.0 * constants::US_GAL_PER_LITER);
        assert!(nearly_equal(litres.value, gallons.value, tol));
    }
}
