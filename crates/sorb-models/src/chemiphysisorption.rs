//! Combined chemisorption and physisorption isotherm.

use crate::error::ModelResult;
use crate::model::{GAS_CONSTANT, IsothermModel, clamp_to_bounds, invert_loading, langmuir_seed, spreading_pressure_quad};
use sorb_core::Real;

/// Toth physisorption site plus an activated Langmuir chemisorption
/// site with activation energy `Ea`. Requires the isotherm
/// temperature to evaluate the Arrhenius factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChemiPhysisorption {
    pub n_m1: Real,
    pub k1: Real,
    pub t1: Real,
    pub n_m2: Real,
    pub k2: Real,
    pub ea: Real,
    rt: Real,
}

static PARAM_NAMES: [&str; 6] = ["n_m1", "K1", "t1", "n_m2", "K2", "Ea"];
static PARAM_BOUNDS: [(Real, Real); 6] = [
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
];

impl ChemiPhysisorption {
    pub const NAME: &'static str = "ChemiPhysisorption";

    pub fn new(n_m1: Real, k1: Real, t1: Real, n_m2: Real, k2: Real, ea: Real, temperature: Real) -> Self {
        Self {
            n_m1,
            k1,
            t1,
            n_m2,
            k2,
            ea,
            rt: GAS_CONSTANT * temperature,
        }
    }
}

impl IsothermModel for ChemiPhysisorption {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = n_m1 K1 p / (1 + (K1 p)^t1)^(1/t1) + n_m2 K2 p / (1 + K2 p) exp(-Ea / RT)"
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
            ("K1", self.k1),
            ("t1", self.t1),
            ("n_m2", self.n_m2),
            ("K2", self.k2),
            ("Ea", self.ea),
        ]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        let k1p = self.k1 * pressure;
        let physi = self.n_m1 * k1p / (1.0 + k1p.powf(self.t1)).powf(1.0 / self.t1);
        let k2p = self.k2 * pressure;
        let chemi = self.n_m2 * k2p / (1.0 + k2p) * (-self.ea / self.rt).exp();
        Ok(physi + chemi)
    }

    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        invert_loading(|x| self.loading(x), loading, Self::NAME)
    }

    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real> {
        spreading_pressure_quad(|x| self.loading(x), pressure, Self::NAME)
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, k) = langmuir_seed(pressure, loading);
        let mut guess = vec![
            ("n_m1", 0.5 * sat),
            ("K1", 0.4 * k),
            ("t1", 1.0),
            ("n_m2", 0.5 * sat),
            ("K2", 0.6 * k),
            ("Ea", self.rt * core::f64::consts::E),
        ];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> ChemiPhysisorption {
        ChemiPhysisorption::new(3.0, 1.2, 0.8, 2.0, 0.5, 20_000.0, 298.0)
    }

    #[test]
    fn reference_values() {
        let m = model();
        assert_relative_eq!(
            m.loading(1.4).unwrap(),
            1.592_034_861_330_816_4,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            m.spreading_pressure(1.4).unwrap(),
            2.552_508_763_921_802_3,
            max_relative = 1e-8
        );
    }

    #[test]
    fn numeric_inverse_round_trips() {
        let m = model();
        let n = m.loading(1.4).unwrap();
        assert_relative_eq!(m.pressure(n).unwrap(), 1.4, max_relative = 1e-8);
    }

    #[test]
    fn spreading_pressure_monotone() {
        let m = model();
        let mut last = 0.0;
        for p in [0.3, 0.9, 2.0, 4.5] {
            let pi = m.spreading_pressure(p).unwrap();
            assert!(pi > last);
            last = pi;
        }
    }
}
