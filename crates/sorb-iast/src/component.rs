//! Pure-component view consumed by the equilibrium solver.

use crate::error::IastResult;
use sorb_core::Real;
use sorb_models::IsothermModel;

/// A pure-component isotherm as the solver sees it.
///
/// The solver only ever reads: loading and spreading pressure at a
/// pressure, the largest calibration pressure (for extrapolation
/// warnings) and the model family name (for the eligibility check).
/// A point isotherm backed by interpolation reports `None` for the
/// model name and is always eligible.
pub trait IastComponent: Send + Sync {
    fn loading_at(&self, pressure: Real) -> IastResult<Real>;
    fn spreading_pressure_at(&self, pressure: Real) -> IastResult<Real>;
    /// Largest pressure covered by the calibration data, if known.
    fn max_pressure(&self) -> Option<Real>;
    /// Model family name, `None` for point isotherms.
    fn model_name(&self) -> Option<&str>;
}

/// An [`IastComponent`] backed by a fitted isotherm model.
pub struct ModelIsotherm {
    model: Box<dyn IsothermModel>,
    max_pressure: Option<Real>,
}

impl ModelIsotherm {
    pub fn new(model: Box<dyn IsothermModel>) -> Self {
        Self {
            model,
            max_pressure: None,
        }
    }

    /// Attach the largest pressure of the data the model was fitted
    /// to, enabling the extrapolation warning.
    pub fn with_max_pressure(model: Box<dyn IsothermModel>, max_pressure: Real) -> Self {
        Self {
            model,
            max_pressure: Some(max_pressure),
        }
    }

    pub fn model(&self) -> &dyn IsothermModel {
        self.model.as_ref()
    }
}

impl IastComponent for ModelIsotherm {
    fn loading_at(&self, pressure: Real) -> IastResult<Real> {
        Ok(self.model.loading(pressure)?)
    }

    fn spreading_pressure_at(&self, pressure: Real) -> IastResult<Real> {
        Ok(self.model.spreading_pressure(pressure)?)
    }

    fn max_pressure(&self) -> Option<Real> {
        self.max_pressure
    }

    fn model_name(&self) -> Option<&str> {
        Some(self.model.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use sorb_models::Langmuir;

    #[test]
    fn forwards_model_evaluations() {
        let iso = ModelIsotherm::with_max_pressure(Box::new(Langmuir::new(3.0, 5.0)), 10.0);
        assert_relative_eq!(iso.loading_at(1.0).unwrap(), 3.75, max_relative = 1e-12);
        assert_relative_eq!(
            iso.spreading_pressure_at(1.0).unwrap(),
            5.0 * 4.0_f64.ln(),
            max_relative = 1e-12
        );
        assert_eq!(iso.max_pressure(), Some(10.0));
        assert_eq!(iso.model_name(), Some("Langmuir"));
    }
}
