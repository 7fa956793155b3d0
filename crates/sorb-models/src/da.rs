//! Dubinin-Astakhov pore-filling isotherm.

use crate::error::ModelResult;
use crate::model::{GAS_CONSTANT, IsothermModel, clamp_to_bounds, langmuir_seed, spreading_pressure_quad};
use sorb_core::Real;

/// Dubinin-Astakhov model, the DR form with a fitted exponent `m`
/// instead of the fixed value of 2. Requires the isotherm temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DubininAstakhov {
    pub n_m: Real,
    pub e: Real,
    pub m: Real,
    minus_rt: Real,
}

static PARAM_NAMES: [&str; 3] = ["n_m", "e", "m"];
static PARAM_BOUNDS: [(Real, Real); 3] = [
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (1.0, 3.0),
];

impl DubininAstakhov {
    pub const NAME: &'static str = "DA";

    pub fn new(n_m: Real, e: Real, m: Real, temperature: Real) -> Self {
        Self {
            n_m,
            e,
            m,
            minus_rt: -GAS_CONSTANT * temperature,
        }
    }
}

impl IsothermModel for DubininAstakhov {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = n_m exp(-(RT ln(p) / e)^m)"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &PARAM_NAMES
    }

    fn param_default_bounds(&self) -> &'static [(Real, Real)] {
        &PARAM_BOUNDS
    }

    fn params(&self) -> Vec<(&'static str, Real)> {
        vec![("n_m", self.n_m), ("e", self.e), ("m", self.m)]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        let a = self.minus_rt * pressure.ln() / self.e;
        Ok(self.n_m * (-a.powf(self.m)).exp())
    }

    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        Ok((self.e / self.minus_rt * (-(loading / self.n_m).ln()).powf(1.0 / self.m)).exp())
    }

    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real> {
        spreading_pressure_quad(|x| self.loading(x), pressure, Self::NAME)
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, _) = langmuir_seed(pressure, loading);
        let mut guess = vec![("n_m", sat), ("e", -self.minus_rt), ("m", 1.0)];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}
