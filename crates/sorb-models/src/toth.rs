//! Toth heterogeneous-surface isotherm.

use crate::error::ModelResult;
use crate::model::{IsothermModel, clamp_to_bounds, langmuir_seed, spreading_pressure_quad};
use sorb_core::Real;

/// Toth model, a Langmuir form with a heterogeneity exponent `t`
/// (t = 1 recovers Langmuir).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Toth {
    pub n_m: Real,
    pub k: Real,
    pub t: Real,
}

static PARAM_NAMES: [&str; 3] = ["n_m", "K", "t"];
static PARAM_BOUNDS: [(Real, Real); 3] = [
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
];

impl Toth {
    pub const NAME: &'static str = "Toth";

    pub fn new(n_m: Real, k: Real, t: Real) -> Self {
        Self { n_m, k, t }
    }
}

impl IsothermModel for Toth {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = n_m K p / (1 + (K p)^t)^(1/t)"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &PARAM_NAMES
    }

    fn param_default_bounds(&self) -> &'static [(Real, Real)] {
        &PARAM_BOUNDS
    }

    fn params(&self) -> Vec<(&'static str, Real)> {
        vec![("n_m", self.n_m), ("K", self.k), ("t", self.t)]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        let kp = self.k * pressure;
        Ok(self.n_m * kp / (1.0 + kp.powf(self.t)).powf(1.0 / self.t))
    }

    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        let theta = loading / self.n_m;
        Ok(loading / (self.n_m * self.k) / (1.0 - theta.powf(self.t)).powf(1.0 / self.t))
    }

    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real> {
        spreading_pressure_quad(|x| self.loading(x), pressure, Self::NAME)
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, k) = langmuir_seed(pressure, loading);
        let mut guess = vec![("n_m", sat), ("K", k), ("t", 1.0)];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> Toth {
        Toth::new(4.5, 1.5, 0.7)
    }

    #[test]
    fn reference_values() {
        let m = model();
        assert_relative_eq!(
            m.loading(1.3).unwrap(),
            2.245_902_455_440_363,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            m.pressure(2.245_902_455_440_363).unwrap(),
            1.3,
            max_relative = 1e-10
        );
    }

    #[test]
    fn spreading_pressure_by_quadrature() {
        assert_relative_eq!(
            model().spreading_pressure(2.0).unwrap(),
            4.807_122_378_380_926,
            max_relative = 1e-8
        );
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
    fn unit_exponent_reduces_to_langmuir() {
        let m = Toth::new(5.0, 3.0, 1.0);
        let p = 1.0;
        assert_relative_eq!(m.loading(p).unwrap(), 3.75, max_relative = 1e-12);
    }
}
