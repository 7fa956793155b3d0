//! Dual-site Langmuir isotherm.

use crate::error::ModelResult;
use crate::model::{IsothermModel, clamp_to_bounds, langmuir_seed};
use sorb_core::Real;

/// Dual-site Langmuir: the sum of two independent Langmuir terms.
///
/// `n(p) = n_m1 K1 p / (1 + K1 p) + n_m2 K2 p / (1 + K2 p)`
///
/// Two distinct homogeneous site families, as in zeolites or MOFs with
/// chemically different adsorption environments. The two-site structure
/// still admits a closed-form inverse via the quadratic formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DsLangmuir {
    pub n_m1: Real,
    pub k1: Real,
    pub n_m2: Real,
    pub k2: Real,
}

static PARAM_NAMES: [&str; 4] = ["n_m1", "K1", "n_m2", "K2"];
static PARAM_BOUNDS: [(Real, Real); 4] = [
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
    (0.0, Real::INFINITY),
];

impl DsLangmuir {
    pub const NAME: &'static str = "DSLangmuir";

    pub fn new(n_m1: Real, k1: Real, n_m2: Real, k2: Real) -> Self {
        Self { n_m1, k1, n_m2, k2 }
    }
}

impl IsothermModel for DsLangmuir {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn formula(&self) -> &'static str {
        "n(p) = n_m1 K1 p / (1 + K1 p) + n_m2 K2 p / (1 + K2 p)"
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
            ("n_m2", self.n_m2),
            ("K2", self.k2),
        ]
    }

    fn loading(&self, pressure: Real) -> ModelResult<Real> {
        let k1p = self.k1 * pressure;
        let k2p = self.k2 * pressure;
        Ok(self.n_m1 * k1p / (1.0 + k1p) + self.n_m2 * k2p / (1.0 + k2p))
    }

    /// Quadratic-formula inverse exploiting the two-site structure.
    /// A degenerate (NaN) root is mapped to zero pressure.
    fn pressure(&self, loading: Real) -> ModelResult<Real> {
        let a = self.n_m1;
        let b = self.k1;
        let c = self.n_m2;
        let d = self.k2;

        let x = (a + c - loading) * b * d;
        let y = a * b + c * d - loading * (b + d);

        let res = (-y + (y * y + 4.0 * x * loading).sqrt()) / (2.0 * x);
        Ok(if res.is_nan() { 0.0 } else { res })
    }

    /// Sum of the per-site logarithmic antiderivatives.
    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real> {
        Ok(self.n_m1 * (1.0 + self.k1 * pressure).ln()
            + self.n_m2 * (1.0 + self.k2 * pressure).ln())
    }

    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)> {
        let (sat, k) = langmuir_seed(pressure, loading);
        let mut guess = vec![
            ("n_m1", 0.5 * sat),
            ("K1", 0.4 * k),
            ("n_m2", 0.5 * sat),
            ("K2", 0.6 * k),
        ];
        clamp_to_bounds(&mut guess, &PARAM_BOUNDS);
        guess
    }
}
