//! Temkin approximation isotherm.

use crate::error::ModelResult;
use crate::model::{IsothermModel, clamp_to_bounds, invert_loading, langmuir_seed};
use sorb_core::Real;

/// Approximation of the Temkin model: a Langmuir core with a
/// perturbation `tht` capturing adsorbate-adsorbate interactions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemkinApprox {
    pub n_m: Real,
    pub k: Real,
    pub tht: Real,
}

static PARAM_NAMES: [&str; 3] = ["n_m", "K", "tht"];
static PARAM_BOUNDS: [(Real, Real); 3] = [
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (Real::NEG_INFINITY, Real::INFINITY),
];

impl TemkinApprox {
    pub const NAME: &'static str = "TemkinApprox";

    pub fn new(n_m: Real, k: Real, tht: Real) -> Self {
        Self { n_m, k, tht }
    }
}

impl IsothermModel for TemkinApprox {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = n_m (L(p) + tht L(p)^2 (L(p) - 1)), L = K p / (1 + K p)"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &PARAM_NAMES
    }

    fn param_default_bounds(&self) -> &'static [(Real, Real)] {
        &PARAM_BOUNDS
    }

    fn params(&self) -> Vec<(&'static str, Real)> {
        vec![("n_m", self.n_m), ("K", self.k), ("tht", self.tht)]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        let lang = self.k * pressure / (1.0 + self.k * pressure);
        Ok(self.n_m * (lang + self.tht * lang * lang * (lang - 1.0)))
    }

    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        invert_loading(|x| self.loading(x), loading, Self::NAME)
    }

    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real> {
        let one_kp = 1.0 + self.k * pressure;
        Ok(self.n_m
            * (one_kp.ln() + self.tht * (2.0 * self.k * pressure + 1.0) / (2.0 * one_kp * one_kp)))
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, k) = langmuir_seed(pressure, loading);
        let mut guess = vec![("n_m", sat), ("K", k), ("tht", 0.0)];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> TemkinApprox {
        TemkinApprox::new(4.0, 2.0, 0.1)
    }

    #[test]
    fn reference_values() {
        let m = model();
        assert_relative_eq!(m.loading(1.5).unwrap(), 2.943_75, max_relative = 1e-12);
        assert_relative_eq!(
            m.spreading_pressure(1.5).unwrap(),
            5.632_677_444_479_563,
            max_relative = 1e-12
        );
    }

    #[test]
    fn numeric_inverse_round_trips() {
        let m = model();
        assert_relative_eq!(m.pressure(2.943_75).unwrap(), 1.5, max_relative = 1e-8);
    }

    #[test]
    fn spreading_pressure_monotone() {
        let m = model();
        let mut last = 0.0;
        for p in [0.2, 0.8, 2.0, 5.0] {
            let pi = m.spreading_pressure(p).unwrap();
            assert!(pi > last);
            last = pi;
        }
    }

    #[test]
    fn zero_tht_reduces_to_langmuir() {
        let m = TemkinApprox::new(4.0, 2.0, 0.0);
        let p = 0.7;
        let lang = 4.0 * 2.0 * p / (1.0 + 2.0 * p);
        assert_relative_eq!(m.loading(p).unwrap(), lang, max_relative = 1e-12);
    }
}
