//! Dubinin-Radushkevich pore-filling isotherm.

use crate::error::ModelResult;
use crate::model::{GAS_CONSTANT, IsothermModel, clamp_to_bounds, langmuir_seed, spreading_pressure_quad};
use sorb_core::Real;

/// Dubinin-Radushkevich model. Pressures are on a relative basis and
/// the characteristic energy `e` competes with the thermal energy
/// `RT`, so construction requires the isotherm temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DubininRadushkevich {
    pub n_m: Real,
    pub e: Real,
    minus_rt: Real,
}

static PARAM_NAMES: [&str; 2] = ["n_m", "e"];
static PARAM_BOUNDS: [(Real, Real); 2] = [(0.0, Real::INFINITY), (0.0, Real::INFINITY)];

impl DubininRadushkevich {
    pub const NAME: &'static str = "DR";

    pub fn new(n_m: Real, e: Real, temperature: Real) -> Self {
        Self {
            n_m,
            e,
            minus_rt: -GAS_CONSTANT * temperature,
        }
    }
}

impl IsothermModel for DubininRadushkevich {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = n_m exp(-(RT ln(p) / e)^2)"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &PARAM_NAMES
    }

    fn param_default_bounds(&self) -> &'static [(Real, Real)] {
        &PARAM_BOUNDS
    }

    fn params(&self) -> Vec<(&'static str, Real)> {
        vec![("n_m", self.n_m), ("e", self.e)]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        let a = self.minus_rt * pressure.ln() / self.e;
        Ok(self.n_m * (-(a * a)).exp())
    }

    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        Ok((self.e / self.minus_rt * (-(loading / self.n_m).ln()).sqrt()).exp())
    }

    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real> {
        spreading_pressure_quad(|x| self.loading(x), pressure, Self::NAME)
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, _) = langmuir_seed(pressure, loading);
        let mut guess = vec![("n_m", sat), ("e", -self.minus_rt)];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}
