//! Langmuir isotherm.

use crate::error::ModelResult;
use crate::model::{IsothermModel, clamp_to_bounds, langmuir_seed};
use sorb_core::Real;

/// Langmuir model: `n(p) = n_m K p / (1 + K p)`.
///
/// Monolayer adsorption on equivalent, non-interacting sites. `n_m` is
/// the monolayer capacity, `K` the affinity constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Langmuir {
    pub k: Real,
    pub n_m: Real,
}

static PARAM_NAMES: [&str; 2] = ["K", "n_m"];
static PARAM_BOUNDS: [(Real, Real); 2] = [(0.0, Real::INFINITY), (0.0, Real::INFINITY)];

impl Langmuir {
    pub const NAME: &'static str = "Langmuir";

    pub fn new(k: Real, n_m: Real) -> Self {
        Self { k, n_m }
    }
}

impl IsothermModel for Langmuir {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = n_m K p / (1 + K p)"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &PARAM_NAMES
    }

    fn param_default_bounds(&self) -> &'static [(Real, Real)] {
        &PARAM_BOUNDS
    }

    fn params(&self) -> Vec<(&'static str, Real)> {
        vec![("K", self.k), ("n_m", self.n_m)]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        let kp = self.k * pressure;
        Ok(self.n_m * kp / (1.0 + kp))
    }

    /// Direct rearrangement: `p = n / (K (n_m - n))`.
    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        Ok(loading / (self.k * (self.n_m - loading)))
    }

    /// Analytic integral: `pi = n_m ln(1 + K p)`.
    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real> {
        Ok(self.n_m * (1.0 + self.k * pressure).ln())
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, k) = langmuir_seed(pressure, loading);
        let mut guess = vec![("K", k), ("n_m", sat)];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pressure_inverts_loading(
            k in 0.01_f64..10.0,
            n_m in 0.1_f64..50.0,
            p in 1e-3_f64..100.0,
        ) {
            let m = Langmuir::new(k, n_m);
            let n = m.loading(p).unwrap();
            let back = m.pressure(n).unwrap();
            prop_assert!((back - p).abs() <= 1e-8 * p.max(1.0));
        }

        #[test]
        fn spreading_pressure_nondecreasing(
            k in 0.01_f64..10.0,
            n_m in 0.1_f64..50.0,
            p in 1e-3_f64..50.0,
        ) {
            let m = Langmuir::new(k, n_m);
            let lo = m.spreading_pressure(p).unwrap();
            let hi = m.spreading_pressure(1.5 * p).unwrap();
            prop_assert!(hi >= lo);
        }
    }
}
