//! Bracketing scalar root-finder.

use crate::error::{SolverError, SolverResult};

/// Find `x >= 0` such that `f(x) = 0`, starting the search at zero.
///
/// The bracket is grown geometrically from `[0, initial_step]` until `f`
/// changes sign, then shrunk by bisection. This is the inversion routine
/// used by isotherm models without an analytic `pressure(loading)`: their
/// residual `loading(x) - target` is negative at zero and crosses once in
/// the physical domain.
///
/// Fails (never returns a guess) if no sign change is found before the
/// bracket reaches `f64` range limits, or if `f` itself fails inside the
/// bracket.
pub fn find_root_from_zero<F>(f: F, initial_step: f64, tol: f64) -> SolverResult<f64>
where
    F: Fn(f64) -> SolverResult<f64>,
{
    let mut lo = 0.0_f64;
    let mut f_lo = f(lo)?;
    if f_lo == 0.0 {
        return Ok(0.0);
    }

    // Grow the upper bound until the sign flips.
    let mut hi = initial_step.max(f64::MIN_POSITIVE);
    let mut f_hi = f(hi)?;
    while f_lo.signum() == f_hi.signum() {
        hi *= 2.0;
        if !hi.is_finite() {
            return Err(SolverError::ConvergenceFailed {
                what: "no sign change found while expanding the root bracket".to_string(),
            });
        }
        lo = hi / 2.0;
        f_lo = f_hi;
        f_hi = f(hi)?;
    }
    if !f_lo.is_finite() || !f_hi.is_finite() {
        return Err(SolverError::Numeric {
            what: "non-finite function value while bracketing root".to_string(),
        });
    }

    // Bisection on the bracketed interval.
    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        if hi - lo <= tol * mid.abs().max(1.0) {
            return Ok(mid);
        }
        let f_mid = f(mid)?;
        if f_mid == 0.0 {
            return Ok(mid);
        }
        if f_mid.signum() == f_lo.signum() {
            lo = mid;
            f_lo = f_mid;
        } else {
            hi = mid;
        }
    }

    Err(SolverError::ConvergenceFailed {
        what: "bisection failed to shrink the root bracket".to_string(),
    })
}
