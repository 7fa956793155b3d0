//! The isotherm model trait and shared helpers.

use crate::error::{ModelError, ModelResult};
use sorb_core::Real;
use sorb_solver::{adaptive_simpson, find_root_from_zero};

/// Molar gas constant [J/(mol K)], used by the temperature-parameterised
/// models (DR, DA, chemi/physisorption).
pub const GAS_CONSTANT: Real = 8.314_462_618_153_24;

/// Relative tolerance for numerical pressure inversion.
pub(crate) const INVERT_TOL: Real = 1e-12;
/// Tolerance for spreading-pressure quadrature.
pub(crate) const QUAD_TOL: Real = 1e-12;
/// Lower integration limit standing in for zero; the reduced integrand
/// `loading(x)/x` is finite there for every model that uses quadrature.
pub(crate) const QUAD_LOWER: Real = 1e-30;

/// A pure-component adsorption isotherm model.
///
/// Implementations are immutable value types: parameters are set at
/// construction (by an external fitting routine or from stored values)
/// and only read afterwards, so a model can be shared freely across
/// threads during IAST solving.
///
/// Every model exposes the same three evaluations:
/// - `loading(p)`: amount adsorbed at pressure `p`
/// - `pressure(n)`: the inverse, closed-form where the algebra allows,
///   otherwise a bracketed root-find that errors on non-convergence
/// - `spreading_pressure(p)`: the reduced grand potential
///   `int_0^p loading(x)/x dx`, closed-form or by adaptive quadrature
pub trait IsothermModel: std::fmt::Debug + Send + Sync {
    /// Catalog name of the model family.
    fn name(&self) -> &'static str;

    /// Human-readable form of the model equation.
    fn formula(&self) -> &'static str;

    /// Ordered parameter identifiers.
    fn param_names(&self) -> &'static [&'static str];

    /// Box constraints for each parameter, in `param_names` order.
    fn param_default_bounds(&self) -> &'static [(Real, Real)];

    /// Current parameter values, in `param_names` order.
    fn params(&self) -> Vec<(&'static str, Real)>;

    /// Loading at the given pressure.
    fn loading(&self, pressure: Real) -> ModelResult<Real>;

    /// Pressure at the given loading.
    fn pressure(&self, loading: Real) -> ModelResult<Real>;

    /// Spreading pressure at the given gas pressure.
    fn spreading_pressure(&self, pressure: Real) -> ModelResult<Real>;

    /// A fitting starting point derived from raw data, clamped into
    /// `param_default_bounds`. Never fails: inconsistent heuristics are
    /// clamped, not rejected.
    fn initial_guess(&self, pressure: &[Real], loading: &[Real]) -> Vec<(&'static str, Real)>;
}

/// Shared seed heuristic: a crude Langmuir read of the data.
///
/// Returns `(saturation_loading, langmuir_k)` where saturation loading
/// is 10% above the highest observed loading and K comes from the first
/// usable data point. Non-positive pressure/loading pairs are dropped.
pub(crate) fn langmuir_seed(pressure: &[Real], loading: &[Real]) -> (Real, Real) {
    let pairs: Vec<(Real, Real)> = pressure
        .iter()
        .zip(loading.iter())
        .filter(|(p, l)| **p > 0.0 && **l > 0.0)
        .map(|(p, l)| (*p, *l))
        .collect();

    if pairs.is_empty() {
        return (1.0, 1.0);
    }

    let max_loading = pairs.iter().map(|(_, l)| *l).fold(Real::MIN, Real::max);
    let saturation_loading = 1.1 * max_loading;
    let (p0, l0) = pairs[0];
    let langmuir_k = if saturation_loading > l0 {
        l0 / p0 / (saturation_loading - l0)
    } else {
        l0 / p0
    };
    (saturation_loading, langmuir_k)
}

/// Clamp a guess vector into the model's declared bounds, in place.
pub(crate) fn clamp_to_bounds(
    guess: &mut [(&'static str, Real)],
    bounds: &'static [(Real, Real)],
) {
    for ((_, value), (lo, hi)) in guess.iter_mut().zip(bounds.iter()) {
        if *value < *lo {
            *value = *lo;
        }
        if *value > *hi {
            *value = *hi;
        }
    }
}

/// Numerically invert `loading(p) = target`, searching upward from zero.
pub(crate) fn invert_loading<F>(loading: F, target: Real, model: &'static str) -> ModelResult<Real>
where
    F: Fn(Real) -> ModelResult<Real>,
{
    find_root_from_zero(
        |x| {
            loading(x)
                .map(|n| n - target)
                .map_err(|e| sorb_solver::SolverError::Numeric {
                    what: e.to_string(),
                })
        },
        1.0,
        INVERT_TOL,
    )
    .map_err(|e| ModelError::Convergence {
        model,
        what: format!("pressure inversion for loading {target} failed: {e}"),
    })
}

/// Spreading pressure by quadrature of `loading(x)/x` over `(0, p]`.
pub(crate) fn spreading_pressure_quad<F>(
    loading: F,
    pressure: Real,
    model: &'static str,
) -> ModelResult<Real>
where
    F: Fn(Real) -> ModelResult<Real>,
{
    adaptive_simpson(
        |x| {
            loading(x)
                .map(|n| n / x)
                .map_err(|e| sorb_solver::SolverError::Numeric {
                    what: e.to_string(),
                })
        },
        QUAD_LOWER,
        pressure,
        QUAD_TOL,
    )
    .map_err(|e| ModelError::Convergence {
        model,
        what: format!("spreading pressure quadrature to {pressure} failed: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ignores_non_positive_points() {
        let (sat, k) = langmuir_seed(&[0.0, 0.5, 1.0], &[0.1, 1.0, 2.0]);
        assert!((sat - 2.2).abs() < 1e-12);
        // first usable point is (0.5, 1.0)
        assert!((k - 1.0 / 0.5 / (2.2 - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn seed_survives_empty_data() {
        let (sat, k) = langmuir_seed(&[], &[]);
        assert_eq!(sat, 1.0);
        assert_eq!(k, 1.0);
    }

    #[test]
    fn clamp_respects_bounds() {
        static BOUNDS: [(Real, Real); 2] = [(0.0, Real::INFINITY), (1.0, 3.0)];
        let mut guess = [("a", -5.0), ("b", 10.0)];
        clamp_to_bounds(&mut guess, &BOUNDS);
        assert_eq!(guess[0].1, 0.0);
        assert_eq!(guess[1].1, 3.0);
    }
}
