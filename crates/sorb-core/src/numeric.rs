use crate::CoreError;

/// Floating point type used throughout the workspace.
pub type Real = f64;

/// Absolute and relative comparison tolerances.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let scale = a.abs().max(b.abs());
    (a - b).abs() <= tol.abs.max(tol.rel * scale)
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CoreError> {
    if !v.is_finite() {
        return Err(CoreError::NonFinite { what, value: v });
    }
    Ok(v)
}

/// Uniformly spaced grid with exact endpoints.
pub fn linspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    if n <= 1 {
        return vec![start];
    }
    let delta = (end - start) / (n - 1) as Real;
    let mut points: Vec<Real> = (0..n).map(|i| start + i as Real * delta).collect();
    points[n - 1] = end;
    points
}

/// Logarithmically spaced grid with exact endpoints.
///
/// Both bounds must be positive; falls back to linear spacing otherwise.
pub fn logspace(start: Real, end: Real, n: usize) -> Vec<Real> {
    if n <= 1 {
        return vec![start];
    }
    if start <= 0.0 || end <= 0.0 {
        return linspace(start, end, n);
    }
    let log_start = start.ln();
    let log_delta = (end.ln() - log_start) / (n - 1) as Real;
    let mut points: Vec<Real> = (0..n)
        .map(|i| (log_start + i as Real * log_delta).exp())
        .collect();
    points[n - 1] = end;
    points
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn linspace_endpoints_always_exact(
            start in -1e6_f64..1e6,
            span in 1e-6_f64..1e6,
            n in 2_usize..200,
        ) {
            let end = start + span;
            let grid = linspace(start, end, n);
            prop_assert_eq!(grid.len(), n);
            prop_assert_eq!(grid[0], start);
            prop_assert_eq!(*grid.last().unwrap(), end);
        }

        #[test]
        fn logspace_is_sorted(
            start in 1e-6_f64..1.0,
            factor in 1.0_f64..1e6,
            n in 2_usize..100,
        ) {
            let grid = logspace(start, start * factor, n);
            for w in grid.windows(2) {
                prop_assert!(w[1] >= w[0]);
            }
        }
    }
}
