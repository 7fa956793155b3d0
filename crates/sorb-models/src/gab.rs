//! Guggenheim-Anderson-de Boer isotherm.

use crate::error::ModelResult;
use crate::model::{IsothermModel, clamp_to_bounds, langmuir_seed};
use sorb_core::Real;

/// GAB model, a three-parameter extension of BET where `K` scales the
/// multilayer affinity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gab {
    pub n_m: Real,
    pub c: Real,
    pub k: Real,
}

static PARAM_NAMES: [&str; 3] = ["n_m", "C", "K"];
static PARAM_BOUNDS: [(Real, Real); 3] = [
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
];

impl Gab {
    pub const NAME: &'static str = "GAB";

    pub fn new(n_m: Real, c: Real, k: Real) -> Self {
        Self { n_m, c, k }
    }
}

impl IsothermModel for Gab {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = n_m K C p / ((1 - K p)(1 - K p + K C p))"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &PARAM_NAMES
    }

    fn param_default_bounds(&self) -> &'static [(Real, Real)] {
        &PARAM_BOUNDS
    }

    fn params(&self) -> Vec<(&'static str, Real)> {
        vec![("n_m", self.n_m), ("C", self.c), ("K", self.k)]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        let kp = self.k * pressure;
        Ok(self.n_m * self.c * kp / ((1.0 - kp) * (1.0 - kp + self.c * kp)))
    }

    /// Closed-form root of the loading quadratic, NaN mapped to zero
    /// when no physical pressure exists.
    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        let (a, b, c) = (self.n_m, self.k, self.c);
        let x = loading * (1.0 - c) * b * b;
        let y = (loading * (c - 2.0) - a * c) * b;
        let res = (-y - (y * y - 4.0 * x * loading).sqrt()) / (2.0 * x);
        Ok(if res.is_nan() { 0.0 } else { res })
    }

    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real> {
        let kp = self.k * pressure;
        Ok(self.n_m * ((1.0 - kp + self.c * kp) / (1.0 - kp)).ln())
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, k) = langmuir_seed(pressure, loading);
        let mut guess = vec![("n_m", sat), ("C", 10.0 * k), ("K", 0.01)];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}
