//! Virial isotherm.

use crate::error::{ModelError, ModelResult};
use crate::model::{INVERT_TOL, IsothermModel, clamp_to_bounds, langmuir_seed};
use sorb_core::Real;
use sorb_solver::find_root_from_zero;

/// Virial expansion `ln(p/n) = -ln K + A n + B n^2 + C n^3`.
///
/// This is the one model in the catalog that calculates pressure from
/// loading; `loading(p)` inverts the expansion numerically and the
/// spreading pressure has no usable form at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Virial {
    pub k: Real,
    pub a: Real,
    pub b: Real,
    pub c: Real,
}

static PARAM_NAMES: [&str; 4] = ["K", "A", "B", "C"];
static PARAM_BOUNDS: [(Real, Real); 4] = [
    (0.0, Real::INFINITY),
    (Real::NEG_INFINITY, Real::INFINITY),
    (Real::NEG_INFINITY, Real::INFINITY),
    (Real::NEG_INFINITY, Real::INFINITY),
];

impl Virial {
    pub const NAME: &'static str = "Virial";

    pub fn new(k: Real, a: Real, b: Real, c: Real) -> Self {
        Self { k, a, b, c }
    }

    fn pressure_at(&self, loading: Real) -> Real {
        let exponent =
            -self.k.ln() + self.a * loading + self.b * loading * loading
                + self.c * loading * loading * loading;
        loading * exponent.exp()
    }
}

impl IsothermModel for Virial {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "ln(p/n) = -ln(K) + A n + B n^2 + C n^3"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &PARAM_NAMES
    }

    fn param_default_bounds(&self) -> &'static [(Real, Real)] {
        &PARAM_BOUNDS
    }

    fn params(&self) -> Vec<(&'static str, Real)> {
        vec![("K", self.k), ("A", self.a), ("B", self.b), ("C", self.c)]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        find_root_from_zero(|n| Ok(self.pressure_at(n) - pressure), 1.0, INVERT_TOL).map_err(|e| {
            ModelError::Convergence {
                model: Self::NAME,
                what: format!("loading inversion at pressure {pressure} failed: {e}"),
            }
        })
    }

    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        Ok(self.pressure_at(loading))
    }

    fn spreading_pressure(&self, _pressure: Real) -> ModelResult<Real> {
        Err(ModelError::NotSupported {
            model: Self::NAME,
            what: "spreading pressure",
        })
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, k) = langmuir_seed(pressure, loading);
        let mut guess = vec![("K", sat * k), ("A", 0.0), ("B", 0.0), ("C", 0.0)];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}
