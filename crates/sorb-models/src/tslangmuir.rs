//! Triple-site Langmuir isotherm.

use crate::error::ModelResult;
use crate::model::{IsothermModel, clamp_to_bounds, invert_loading, langmuir_seed};
use sorb_core::Real;

/// Triple-site Langmuir: three independent Langmuir terms.
///
/// Unlike the dual-site variant there is no closed-form inverse, so
/// `pressure(n)` is a bracketed numerical solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TsLangmuir {
    pub n_m1: Real,
    pub n_m2: Real,
    pub n_m3: Real,
    pub k1: Real,
    pub k2: Real,
    pub k3: Real,
}

static PARAM_NAMES: [&str; 6] = ["n_m1", "n_m2", "n_m3", "K1", "K2", "K3"];
static PARAM_BOUNDS: [(Real, Real); 6] = [
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
];

impl TsLangmuir {
    pub const NAME: &'static str = "TSLangmuir";

    pub fn new(n_m1: Real, n_m2: Real, n_m3: Real, k1: Real, k2: Real, k3: Real) -> Self {
        Self {
            n_m1,
            n_m2,
            n_m3,
            k1,
            k2,
            k3,
        }
    }

    fn sites(&self) -> [(Real, Real); 3] {
        [
            (self.n_m1, self.k1),
            (self.n_m2, self.k2),
            (self.n_m3, self.k3),
        ]
    }
}

impl IsothermModel for TsLangmuir {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = sum_i n_mi Ki p / (1 + Ki p), i = 1..3"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &PARAM_NAMES
    }

    fn param_default_bounds(&self) -> &'static [(Real, Real)] {
        &PARAM_BOUNDS
    }

    fn params(&self) -> Vec<(&'static str, Real)> {
        vec![
            ("n_m1", self.n_m1),
            ("n_m2", self.n_m2),
            ("n_m3", self.n_m3),
            ("K1", self.k1),
            ("K2", self.k2),
            ("K3", self.k3),
        ]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        Ok(self
            .sites()
            .iter()
            .map(|(n_m, k)| {
                let kp = k * pressure;
                n_m * kp / (1.0 + kp)
            })
            .sum())
    }

    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        invert_loading(|x| self.loading(x), loading, Self::NAME)
    }

    /// Per-site logarithmic antiderivatives, summed.
    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real> {
        Ok(self
            .sites()
            .iter()
            .map(|(n_m, k)| n_m * (1.0 + k * pressure).ln())
            .sum())
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, k) = langmuir_seed(pressure, loading);
        let mut guess = vec![
            ("n_m1", 0.4 * sat),
            ("n_m2", 0.4 * sat),
            ("n_m3", 0.2 * sat),
            ("K1", 0.2 * k),
            ("K2", 0.4 * k),
            ("K3", 0.4 * k),
        ];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> TsLangmuir {
        TsLangmuir::new(2.0, 1.5, 1.0, 2.0, 0.5, 0.05)
    }

    #[test]
    fn reference_values() {
        let m = model();
        assert_relative_eq!(
            m.loading(1.0).unwrap(),
            1.880_952_380_952_381,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            m.spreading_pressure(1.0).unwrap(),
            2.854_212_403_667_898,
            max_relative = 1e-12
        );
    }

    #[test]
    fn numeric_inverse_round_trips() {
        let m = model();
        for p in [0.05, 0.7, 3.0, 40.0] {
            let n = m.loading(p).unwrap();
            assert_relative_eq!(m.pressure(n).unwrap(), p, max_relative = 1e-8);
        }
    }

    #[test]
    fn inversion_fails_above_saturation() {
        // Total capacity is 4.5; asking for more cannot converge.
        let m = model();
        assert!(m.pressure(5.0).is_err());
    }
}
