//! Dual-site Toth isotherm.

use crate::error::ModelResult;
use crate::model::{IsothermModel, clamp_to_bounds, invert_loading, langmuir_seed, spreading_pressure_quad};
use sorb_core::Real;

/// Two independent Toth sites. The sum of two Toth terms has no
/// analytic inverse, so `pressure(n)` inverts the total loading
/// numerically rather than combining per-site inverses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DsToth {
    pub n_m1: Real,
    pub k1: Real,
    pub t1: Real,
    pub n_m2: Real,
    pub k2: Real,
    pub t2: Real,
}

static PARAM_NAMES: [&str; 6] = ["n_m1", "K1", "t1", "n_m2", "K2", "t2"];
static PARAM_BOUNDS: [(Real, Real); 6] = [
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
];

impl DsToth {
    pub const NAME: &'static str = "DSToth";

    pub fn new(n_m1: Real, k1: Real, t1: Real, n_m2: Real, k2: Real, t2: Real) -> Self {
        Self {
            n_m1,
            k1,
            t1,
            n_m2,
            k2,
            t2,
        }
    }

    fn site(n_m: Real, k: Real, t: Real, pressure: Real) -> Real {
        let kp = k * pressure;
        n_m * kp / (1.0 + kp.powf(t)).powf(1.0 / t)
    }
}

impl IsothermModel for DsToth {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = n_m1 K1 p / (1 + (K1 p)^t1)^(1/t1) + n_m2 K2 p / (1 + (K2 p)^t2)^(1/t2)"
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
            ("t2", self.t2),
        ]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        Ok(Self::site(self.n_m1, self.k1, self.t1, pressure)
            + Self::site(self.n_m2, self.k2, self.t2, pressure))
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
            ("t2", 1.0),
        ];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}
