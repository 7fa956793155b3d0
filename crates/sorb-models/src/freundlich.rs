//! Freundlich empirical isotherm.

use crate::error::ModelResult;
use crate::model::{IsothermModel, clamp_to_bounds, langmuir_seed};
use sorb_core::Real;

/// Freundlich power law `n = K p^(1/m)`.
///
/// The loading has no saturation limit and the reduced isotherm
/// diverges at zero pressure, so the spreading pressure integral only
/// converges because the analytic form `m K p^(1/m)` is used directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Freundlich {
    pub k: Real,
    pub m: Real,
}

static PARAM_NAMES: [&str; 2] = ["K", "m"];
static PARAM_BOUNDS: [(Real, Real); 2] = [(0.0, Real::INFINITY), (0.0, Real::INFINITY)];

impl Freundlich {
    pub const NAME: &'static str = "Freundlich";

    pub fn new(k: Real, m: Real) -> Self {
        Self { k, m }
    }
}

impl IsothermModel for Freundlich {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = K p^(1/m)"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &PARAM_NAMES
    }

    fn param_default_bounds(&self) -> &'static [(Real, Real)] {
        &PARAM_BOUNDS
    }

    fn params(&self) -> Vec<(&'static str, Real)> {
        vec![("K", self.k), ("m", self.m)]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        Ok(self.k * pressure.powf(1.0 / self.m))
    }

    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        Ok((loading / self.k).powf(self.m))
    }

    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real> {
        Ok(self.m * self.k * pressure.powf(1.0 / self.m))
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, k) = langmuir_seed(pressure, loading);
        let mut guess = vec![("K", sat * k), ("m", 1.0)];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}
