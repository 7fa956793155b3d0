//! Henry's law isotherm.

use crate::error::ModelResult;
use crate::model::{IsothermModel, clamp_to_bounds, langmuir_seed};
use sorb_core::Real;

/// Henry's law: `n(p) = K p`.
///
/// Linear uptake with pressure. Physically valid only at low coverage,
/// but it is the limit every thermodynamically consistent model must
/// reduce to as p -> 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Henry {
    pub k: Real,
}

static PARAM_NAMES: [&str; 1] = ["K"];
static PARAM_BOUNDS: [(Real, Real); 1] = [(0.0, Real::INFINITY)];

impl Henry {
    pub const NAME: &'static str = "Henry";

    pub fn new(k: Real) -> Self {
        Self { k }
    }
}

impl IsothermModel for Henry {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = K p"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &PARAM_NAMES
    }

    fn param_default_bounds(&self) -> &'static [(Real, Real)] {
        &PARAM_BOUNDS
    }

    fn params(&self) -> Vec<(&'static str, Real)> {
        vec![("K", self.k)]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        Ok(self.k * pressure)
    }

    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        Ok(loading / self.k)
    }

    /// The integral of `K x / x` is simply `K p`.
    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real> {
        Ok(self.k * pressure)
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, k) = langmuir_seed(pressure, loading);
        let mut guess = vec![("K", sat * k)];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}
