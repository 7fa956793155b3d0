//! Jensen-Seaton isotherm.

use crate::error::ModelResult;
use crate::model::{IsothermModel, clamp_to_bounds, invert_loading, langmuir_seed, spreading_pressure_quad};
use sorb_core::Real;

/// Jensen-Seaton model for compressible adsorbed phases. The loading
/// keeps growing linearly at high pressure instead of saturating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JensenSeaton {
    pub k: Real,
    pub a: Real,
    pub b: Real,
    pub c: Real,
}

static PARAM_NAMES: [&str; 4] = ["K", "a", "b", "c"];
static PARAM_BOUNDS: [(Real, Real); 4] = [
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
];

impl JensenSeaton {
    pub const NAME: &'static str = "JensenSeaton";

    pub fn new(k: Real, a: Real, b: Real, c: Real) -> Self {
        Self { k, a, b, c }
    }
}

impl IsothermModel for JensenSeaton {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = K p / (1 + (K p / (a (1 + b p)))^c)^(1/c)"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &PARAM_NAMES
    }

    fn param_default_bounds(&self) -> &'static [(Real, Real)] {
        &PARAM_BOUNDS
    }

    fn params(&self) -> Vec<(&'static str, Real)> {
        vec![("K", self.k), ("a", self.a), ("b", self.b), ("c", self.c)]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        let kp = self.k * pressure;
        let ratio = kp / (self.a * (1.0 + self.b * pressure));
        Ok(kp / (1.0 + ratio.powf(self.c)).powf(1.0 / self.c))
    }

    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        invert_loading(|x| self.loading(x), loading, Self::NAME)
    }

    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real> {
        spreading_pressure_quad(|x| self.loading(x), pressure, Self::NAME)
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, k) = langmuir_seed(pressure, loading);
        let mut guess = vec![("K", sat * k), ("a", 1.0), ("b", 1.0), ("c", 1.0)];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}
