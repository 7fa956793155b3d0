//! Finite difference Jacobian computation.

use crate::error::SolverResult;
use nalgebra::{DMatrix, DVector};

/// Compute a Jacobian using forward finite differences.
///
/// Column j holds (f(x + e_j) - f(x)) / e_j, where e_j scales epsilon
/// by the magnitude of x[j].
pub fn forward_difference_jacobian<F>(
    x: &DVector<f64>,
    f: F,
    epsilon: f64,
) -> SolverResult<DMatrix<f64>>
where
    F: Fn(&DVector<f64>) -> SolverResult<DVector<f64>>,
{
    let base = f(x)?;
    let mut jac = DMatrix::zeros(base.len(), x.len());
    let mut shifted = x.clone();

    for j in 0..x.len() {
        let step = epsilon * x[j].abs().max(1.0);
        shifted[j] = x[j] + step;
        let column = (f(&shifted)? - &base) / step;
        shifted[j] = x[j];
        jac.set_column(j, &column);
    }

    Ok(jac)
}
