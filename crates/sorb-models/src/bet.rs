//! Brunauer-Emmett-Teller multilayer isotherm.

use crate::error::ModelResult;
use crate::model::{IsothermModel, clamp_to_bounds, langmuir_seed};
use sorb_core::Real;

/// BET model with monolayer capacity `n_m`, first-layer constant `C`
/// and upper-layer constant `N`.
///
/// Valid below the condensation pressure `1/N`; loading diverges as
/// the pressure approaches it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bet {
    pub n_m: Real,
    pub c: Real,
    pub n: Real,
}

static PARAM_NAMES: [&str; 3] = ["n_m", "C", "N"];
static PARAM_BOUNDS: [(Real, Real); 3] = [
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
];

impl Bet {
    pub const NAME: &'static str = "BET";

    pub fn new(n_m: Real, c: Real, n: Real) -> Self {
        Self { n_m, c, n }
    }
}

impl IsothermModel for Bet {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = n_m C p / ((1 - N p)(1 - N p + C p))"
    }

    fn param_names(&self) -> &'static [&'static str] {
        &PARAM_NAMES
    }

    fn param_default_bounds(&self) -> &'static [(Real, Real)] {
        &PARAM_BOUNDS
    }

    fn params(&self) -> Vec<(&'static str, Real)> {
        vec![("n_m", self.n_m), ("C", self.c), ("N", self.n)]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        let np = self.n * pressure;
        Ok(self.n_m * self.c * pressure / ((1.0 - np) * (1.0 - np + self.c * pressure)))
    }

    /// Closed-form root of the loading quadratic. A negative
    /// discriminant means no physical pressure exists; the NaN it
    /// produces is mapped to zero.
    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        let (a, b, c) = (self.n_m, self.n, self.c);
        let x = loading * b * (b - c);
        let y = loading * c - 2.0 * loading * b - a * c;
        let res = (-y - (y * y - 4.0 * x * loading).sqrt()) / (2.0 * x);
        Ok(if res.is_nan() { 0.0 } else { res })
    }

    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real> {
        let np = self.n * pressure;
        Ok(self.n_m * ((1.0 - np + self.c * pressure) / (1.0 - np)).ln())
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, k) = langmuir_seed(pressure, loading);
        let mut guess = vec![("n_m", sat), ("C", k), ("N", 0.01)];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn model() -> Bet {
        Bet::new(4.0, 50.0, 0.4)
    }

    #[test]
    fn reference_values() {
        let m = model();
        assert_relative_eq!(
            m.loading(0.4).unwrap(),
            4.569_966_182_250_252,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            m.spreading_pressure(0.4).unwrap(),
            12.844_910_416_119_776,
            max_relative = 1e-12
        );
    }

    #[test]
    fn closed_form_inverse_round_trips() {
        let m = model();
        for p in [0.01, 0.1, 0.4, 1.5] {
            let n = m.loading(p).unwrap();
            assert_relative_eq!(m.pressure(n).unwrap(), p, max_relative = 1e-10);
        }
    }
}
