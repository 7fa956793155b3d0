//! Quadratic isotherm (two molecules per site).

use crate::error::ModelResult;
use crate::model::{IsothermModel, clamp_to_bounds, langmuir_seed};
use sorb_core::Real;

/// Quadratic model, where each site can hold up to two molecules with
/// association constants `Ka` and `Kb`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    pub n_m: Real,
    pub ka: Real,
    pub kb: Real,
}

static PARAM_NAMES: [&str; 3] = ["n_m", "Ka", "Kb"];
static PARAM_BOUNDS: [(Real, Real); 3] = [
    (0.0, Real::INFINITY),
    (Real::NEG_INFINITY, Real::INFINITY),
    (Real::NEG_INFINITY, Real::INFINITY),
];

impl Quadratic {
    pub const NAME: &'static str = "Quadratic";

    pub fn new(n_m: Real, ka: Real, kb: Real) -> Self {
        Self { n_m, ka, kb }
    }
}

impl IsothermModel for Quadratic {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = n_m (Ka + 2 Kb p) p / (1 + Ka p + Kb p^2)"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &PARAM_NAMES
    }

    fn param_default_bounds(&self) -> &'static [(Real, Real)] {
        &PARAM_BOUNDS
    }

    fn params(&self) -> Vec<(&'static str, Real)> {
        vec![("n_m", self.n_m), ("Ka", self.ka), ("Kb", self.kb)]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        Ok(
            self.n_m * (self.ka + 2.0 * self.kb * pressure) * pressure
                / (1.0 + self.ka * pressure + self.kb * pressure * pressure),
        )
    }

    /// Closed-form root of the loading quadratic, NaN mapped to zero
    /// when no physical pressure exists.
    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        let (a, b, c) = (self.n_m, self.ka, self.kb);
        let x = (loading - 2.0 * a) * c;
        let y = (loading - a) * b;
        let res = (-y - (y * y - 4.0 * x * loading).sqrt()) / (2.0 * x);
        Ok(if res.is_nan() { 0.0 } else { res })
    }

    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real> {
        Ok(self.n_m * (1.0 + self.ka * pressure + self.kb * pressure * pressure).ln())
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, k) = langmuir_seed(pressure, loading);
        let mut guess = vec![("n_m", sat / 2.0), ("Ka", k), ("Kb", k * k)];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}
