//! Equilibrium solves against independently computed references.

use approx::assert_relative_eq;
use sorb_iast::{
    IastComponent, IastError, IastOptions, IastResult, ModelIsotherm, iast, iast_binary_svp,
    iast_binary_vle, reverse_iast,
};
use sorb_models::{Freundlich, Langmuir};

/// Stand-in for an interpolation-backed point isotherm: reports no
/// model family, so eligibility cannot reject it.
struct PointIsotherm {
    k: f64,
    n_m: f64,
}

impl IastComponent for PointIsotherm {
    fn loading_at(&self, pressure: f64) -> IastResult<f64> {
        let kp = self.k * pressure;
        Ok(self.n_m * kp / (1.0 + kp))
    }

    fn spreading_pressure_at(&self, pressure: f64) -> IastResult<f64> {
        Ok(self.n_m * (1.0 + self.k * pressure).ln())
    }

    fn max_pressure(&self) -> Option<f64> {
        None
    }

    fn model_name(&self) -> Option<&str> {
        None
    }
}

/// Methane-like Langmuir fit on a metal-organic framework.
fn methane() -> ModelIsotherm {
    ModelIsotherm::new(Box::new(Langmuir::new(0.035, 18.0)))
}

/// Ethane-like Langmuir fit on the same material.
fn ethane() -> ModelIsotherm {
    ModelIsotherm::new(Box::new(Langmuir::new(0.25, 12.0)))
}

#[test]
fn forward_equimolar_reference() {
    let (a, b) = (methane(), ethane());
    let solution = iast(&[&a, &b], &[0.5, 0.5], 1.0, &IastOptions::default()).unwrap();

    assert_relative_eq!(
        solution.adsorbed_fractions[0],
        0.177_027_470_339_191_2,
        max_relative = 1e-6
    );
    assert_relative_eq!(
        solution.adsorbed_fractions[1],
        0.822_972_529_660_808_8,
        max_relative = 1e-6
    );
    assert_relative_eq!(
        solution.total_loading,
        1.588_747_995_242_954_2,
        max_relative = 1e-6
    );
    assert_relative_eq!(
        solution.loadings[0],
        0.281_252_038_604_321_5,
        max_relative = 1e-6
    );
    assert_relative_eq!(
        solution.loadings[1],
        1.307_495_956_638_632_6,
        max_relative = 1e-6
    );
    assert_relative_eq!(
        solution.reference_pressures[0],
        2.824_420_407_985_164_7,
        max_relative = 1e-6
    );
}

#[test]
fn solution_structs_are_debuggable() {
    // Result structs must format for assertions and failure output.
    let (a, b) = (methane(), ethane());
    let solution = iast(&[&a, &b], &[0.5, 0.5], 1.0, &IastOptions::default()).unwrap();
    assert!(format!("{solution:?}").contains("adsorbed_fractions"));
    let curve = iast_binary_vle(&[&a, &b], 1.0, 3, &IastOptions::default()).unwrap();
    assert!(format!("{curve:?}").contains("gas_fractions"));
}

#[test]
fn forward_identical_components_split_evenly() {
    let (a, b) = (ethane(), ethane());
    let solution = iast(&[&a, &b], &[0.5, 0.5], 2.0, &IastOptions::default()).unwrap();
    assert_relative_eq!(solution.loadings[0], solution.loadings[1], max_relative = 1e-6);
    assert_relative_eq!(solution.adsorbed_fractions[0], 0.5, max_relative = 1e-6);
}

#[test]
fn forward_three_components_stay_on_simplex() {
    let a = ModelIsotherm::new(Box::new(Langmuir::new(0.1, 10.0)));
    let b = ModelIsotherm::new(Box::new(Langmuir::new(0.5, 8.0)));
    let c = ModelIsotherm::new(Box::new(Langmuir::new(1.5, 6.0)));
    let solution = iast(&[&a, &b, &c], &[0.2, 0.3, 0.5], 2.0, &IastOptions::default()).unwrap();

    let sum: f64 = solution.adsorbed_fractions.iter().sum();
    assert!((sum - 1.0).abs() < 1e-6);
    for z in &solution.adsorbed_fractions {
        assert!((0.0..=1.0).contains(z));
    }
}

#[test]
fn forward_accepts_caller_guess() {
    let (a, b) = (methane(), ethane());
    let options = IastOptions {
        guess: Some(vec![0.2, 0.8]),
        ..Default::default()
    };
    let solution = iast(&[&a, &b], &[0.5, 0.5], 1.0, &options).unwrap();
    assert_relative_eq!(
        solution.adsorbed_fractions[0],
        0.177_027_470_339_191_2,
        max_relative = 1e-6
    );
}

#[test]
fn forward_rejects_guess_off_the_simplex() {
    let (a, b) = (methane(), ethane());
    let options = IastOptions {
        guess: Some(vec![0.2, 0.6]),
        ..Default::default()
    };
    let err = iast(&[&a, &b], &[0.5, 0.5], 1.0, &options).unwrap_err();
    assert!(matches!(err, IastError::InvalidArg { .. }));
}

#[test]
fn forward_rejects_mismatched_lengths() {
    let (a, b) = (methane(), ethane());
    let err = iast(&[&a, &b], &[0.1], 1.0, &IastOptions::default()).unwrap_err();
    assert!(matches!(err, IastError::InvalidArg { .. }));
}

#[test]
fn forward_rejects_single_component() {
    let a = methane();
    let err = iast(&[&a], &[1.0], 1.0, &IastOptions::default()).unwrap_err();
    assert!(matches!(err, IastError::InvalidArg { .. }));
}

#[test]
fn forward_rejects_inconsistent_model_families() {
    let a = methane();
    let b = ModelIsotherm::new(Box::new(Freundlich::new(2.5, 2.0)));
    let err = iast(&[&a, &b], &[0.5, 0.5], 1.0, &IastOptions::default()).unwrap_err();
    assert!(matches!(err, IastError::InvalidArg { .. }));
}

#[test]
fn forward_accepts_point_isotherms() {
    // Same equilibrium as the reference case, with the second
    // component behind the point-isotherm interface.
    let a = methane();
    let b = PointIsotherm { k: 0.25, n_m: 12.0 };
    let solution = iast(&[&a, &b], &[0.5, 0.5], 1.0, &IastOptions::default()).unwrap();
    assert_relative_eq!(
        solution.adsorbed_fractions[0],
        0.177_027_470_339_191_2,
        max_relative = 1e-6
    );
}

#[test]
fn forward_extrapolation_is_not_fatal() {
    // Reference pressures exceed the recorded data range; the result
    // is still returned, only a warning is emitted.
    let a = ModelIsotherm::with_max_pressure(Box::new(Langmuir::new(0.035, 18.0)), 0.5);
    let b = ModelIsotherm::with_max_pressure(Box::new(Langmuir::new(0.25, 12.0)), 0.5);
    let solution = iast(&[&a, &b], &[0.5, 0.5], 1.0, &IastOptions::default()).unwrap();
    assert!(solution.reference_pressures.iter().any(|&p| p > 0.5));
}

#[test]
fn reverse_reference() {
    let (a, b) = (methane(), ethane());
    let solution = reverse_iast(&[&a, &b], &[0.3, 0.7], 1.0, &IastOptions::default()).unwrap();

    assert_relative_eq!(
        solution.gas_fractions[0],
        0.666_928_375_966_805_9,
        max_relative = 1e-6
    );
    assert_relative_eq!(
        solution.gas_fractions[1],
        0.333_071_624_033_194_1,
        max_relative = 1e-6
    );
    assert_relative_eq!(
        solution.loadings[0],
        0.384_819_318_426_024_96,
        max_relative = 1e-6
    );
    assert_relative_eq!(
        solution.loadings[1],
        0.897_911_742_994_058_3,
        max_relative = 1e-6
    );
}

#[test]
fn reverse_requires_exact_unit_sum() {
    let (a, b) = (methane(), ethane());
    let err = reverse_iast(&[&a, &b], &[0.1, 0.4], 1.0, &IastOptions::default()).unwrap_err();
    assert!(matches!(err, IastError::InvalidArg { .. }));
}

#[test]
fn reverse_round_trips_through_forward() {
    let (a, b) = (methane(), ethane());
    let reverse = reverse_iast(&[&a, &b], &[0.3, 0.7], 1.0, &IastOptions::default()).unwrap();
    let forward = iast(&[&a, &b], &reverse.gas_fractions, 1.0, &IastOptions::default()).unwrap();
    assert_relative_eq!(forward.adsorbed_fractions[0], 0.3, max_relative = 1e-5);
    assert_relative_eq!(forward.adsorbed_fractions[1], 0.7, max_relative = 1e-5);
}

#[test]
fn vle_curve_is_closed_and_monotone_grid() {
    let (a, b) = (methane(), ethane());
    let curve = iast_binary_vle(&[&a, &b], 1.0, 15, &IastOptions::default()).unwrap();

    assert_eq!(curve.gas_fractions.len(), 17);
    assert_eq!(curve.adsorbed_fractions.len(), 17);
    assert_eq!(curve.gas_fractions[0], 0.0);
    assert_eq!(curve.adsorbed_fractions[0], 0.0);
    assert_eq!(*curve.gas_fractions.last().unwrap(), 1.0);
    assert_eq!(*curve.adsorbed_fractions.last().unwrap(), 1.0);
    assert_relative_eq!(curve.gas_fractions[1], 0.01, max_relative = 1e-12);
    assert_relative_eq!(curve.gas_fractions[15], 0.99, max_relative = 1e-12);

    // Ethane is the stronger adsorbate, so methane's adsorbed fraction
    // stays below its gas fraction in the interior.
    for i in 1..16 {
        assert!(curve.adsorbed_fractions[i] < curve.gas_fractions[i]);
    }
}

#[test]
fn svp_reference_values() {
    let (a, b) = (methane(), ethane());
    let pressures = [0.1, 1.0, 5.0];
    let curve = iast_binary_svp(&[&a, &b], &[0.5, 0.5], &pressures, &IastOptions::default())
        .unwrap();

    assert_eq!(curve.pressures, pressures.to_vec());
    assert_relative_eq!(
        curve.selectivities[0],
        0.210_527_396_372_267_25,
        max_relative = 1e-6
    );
    assert_relative_eq!(
        curve.selectivities[1],
        0.215_107_386_891_946_08,
        max_relative = 1e-6
    );
    assert_relative_eq!(
        curve.selectivities[2],
        0.232_720_253_741_063_75,
        max_relative = 1e-6
    );
}

#[test]
fn svp_selectivity_grows_with_pressure_on_log_grid() {
    // Ethane saturates first, so methane's relative uptake improves
    // as pressure rises.
    let (a, b) = (methane(), ethane());
    let pressures = sorb_core::logspace(0.01, 10.0, 8);
    let curve = iast_binary_svp(&[&a, &b], &[0.5, 0.5], &pressures, &IastOptions::default())
        .unwrap();
    for w in curve.selectivities.windows(2) {
        assert!(w[1] > w[0]);
    }
}

#[test]
fn svp_selectivity_is_reciprocal_under_component_swap() {
    let (a, b) = (methane(), ethane());
    let pressures = [0.5, 2.0];
    let fwd = iast_binary_svp(&[&a, &b], &[0.4, 0.6], &pressures, &IastOptions::default())
        .unwrap();
    let rev = iast_binary_svp(&[&b, &a], &[0.6, 0.4], &pressures, &IastOptions::default())
        .unwrap();

    for (s, r) in fwd.selectivities.iter().zip(&rev.selectivities) {
        assert_relative_eq!(s * r, 1.0, max_relative = 1e-6);
    }
}

#[test]
fn svp_rejects_fractions_not_summing_to_one() {
    let (a, b) = (methane(), ethane());
    let err = iast_binary_svp(&[&a, &b], &[0.4, 0.5], &[1.0], &IastOptions::default())
        .unwrap_err();
    assert!(matches!(err, IastError::InvalidArg { .. }));
}

mod proptests {
    use super::*;
    use proptest::prelude::*;
    use sorb_core::{Tolerances, nearly_equal};

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn forward_fractions_stay_on_simplex(
            y in 0.05_f64..0.95,
            pressure in 0.1_f64..5.0,
        ) {
            let (a, b) = (methane(), ethane());
            let solution =
                iast(&[&a, &b], &[y, 1.0 - y], pressure, &IastOptions::default()).unwrap();
            let sum: f64 = solution.adsorbed_fractions.iter().sum();
            let tol = Tolerances { abs: 1e-6, rel: 1e-6 };
            prop_assert!(nearly_equal(sum, 1.0, tol));
            for z in &solution.adsorbed_fractions {
                prop_assert!((0.0..=1.0).contains(z));
            }
        }
    }
}
