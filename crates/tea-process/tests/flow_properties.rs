//! Property tests for the stage mass balance.

use proptest::prelude::*;
use tea_core::{Tolerances, nearly_equal};
use tea_process::{FlowRates, ProcessParameters, calculate_flow_rates};

fn fields(f: &FlowRates) -> [f64; 7] {
    [
        f.feedstock_kg_per_hr,
        f.pretreated_kg_per_hr,
        f.hydrolyzed_kg_per_hr,
        f.fermented_kg_per_hr,
        f.ethanol_kg_per_hr,
        f.ethanol_l_per_hr,
        f.ethanol_gal_per_hr,
    ]
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let params = ProcessParameters::new(0.83, 0.71, 0.92, 0.97).unwrap();
    let a = calculate_flow_rates(4321.0, &params).unwrap();
    let b = calculate_flow_rates(4321.0, &params).unwrap();
    for (x, y) in fields(&a).iter().zip(fields(&b).iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

proptest! {
    #[test]
    fn stages_never_grow(
        tons in 1.0_f64..1.0e5,
        pre in 0.01_f64..=1.0,
        hyd in 0.01_f64..=1.0,
        fer in 0.01_f64..=1.0,
        dis in 0.01_f64..=1.0,
    ) {
        let params = ProcessParameters::new(pre, hyd, fer, dis).unwrap();
        let f = calculate_flow_rates(tons, &params).unwrap();

        for v in fields(&f) {
            prop_assert!(v >= 0.0);
        }
        prop_assert!(f.feedstock_kg_per_hr >= f.pretreated_kg_per_hr);
        prop_assert!(f.pretreated_kg_per_hr >= f.hydrolyzed_kg_per_hr);
        prop_assert!(f.fermented_kg_per_hr <= f.hydrolyzed_kg_per_hr * 0.5);
        prop_assert!(f.ethanol_kg_per_hr <= f.fermented_kg_per_hr);
    }

    #[test]
    fn flows_scale_linearly_with_feedstock(
        tons in 100.0_f64..10_000.0,
        k in 0.1_f64..10.0,
    ) {
        let params = ProcessParameters::default();
        let base = calculate_flow_rates(tons, &params).unwrap();
        let scaled = calculate_flow_rates(tons * k, &params).unwrap();
        let tol = Tolerances { abs: 1e-9, rel: 1e-9 };

        for (b, s) in fields(&base).iter().zip(fields(&scaled).iter()) {
            prop_assert!(nearly_equal(b * k, *s, tol));
        }
    }

    #[test]
    fn full_pretreatment_passes_all_feedstock(tons in 1.0_f64..1.0e5) {
        let params = ProcessParameters::new(1.0, 0.75, 0.9, 0.95).unwrap();
        let f = calculate_flow_rates(tons, &params).unwrap();
        prop_assert_eq!(f.pretreated_kg_per_hr, f.feedstock_kg_per_hr);
    }
}
