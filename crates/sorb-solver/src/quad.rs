//! Adaptive Simpson quadrature.

use crate::error::{SolverError, SolverResult};

fn simpson(fa: f64, fm: f64, fb: f64, a: f64, b: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

#[allow(clippy::too_many_arguments)]
fn recurse<F>(
    f: &F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tol: f64,
    depth: u32,
) -> SolverResult<f64>
where
    F: Fn(f64) -> SolverResult<f64>,
{
    let m = 0.5 * (a + b);
    let lm = 0.5 * (a + m);
    let rm = 0.5 * (m + b);
    let flm = f(lm)?;
    let frm = f(rm)?;
    let left = simpson(fa, flm, fm, a, m);
    let right = simpson(fm, frm, fb, m, b);
    let delta = left + right - whole;

    if depth == 0 || delta.abs() <= 15.0 * tol {
        // Richardson correction on the final panel
        return Ok(left + right + delta / 15.0);
    }
    Ok(recurse(f, a, m, fa, flm, fm, left, tol / 2.0, depth - 1)?
        + recurse(f, m, b, fm, frm, fb, right, tol / 2.0, depth - 1)?)
}

/// Integrate `f` over `[a, b]` with adaptive panel refinement.
///
/// Errors if `f` fails or produces non-finite values anywhere it is
/// sampled.
pub fn adaptive_simpson<F>(f: F, a: f64, b: f64, tol: f64) -> SolverResult<f64>
where
    F: Fn(f64) -> SolverResult<f64>,
{
    if a >= b {
        if a == b {
            return Ok(0.0);
        }
        return Err(SolverError::InvalidArg {
            what: "integration bounds are reversed".to_string(),
        });
    }
    let m = 0.5 * (a + b);
    let fa = f(a)?;
    let fm = f(m)?;
    let fb = f(b)?;
    if !fa.is_finite() || !fm.is_finite() || !fb.is_finite() {
        return Err(SolverError::Numeric {
            what: "non-finite integrand value".to_string(),
        });
    }
    let whole = simpson(fa, fm, fb, a, b);
    let result = recurse(&f, a, b, fa, fm, fb, whole, tol, 60)?;
    if !result.is_finite() {
        return Err(SolverError::Numeric {
            what: "quadrature produced a non-finite result".to_string(),
        });
    }
    Ok(result)
}
