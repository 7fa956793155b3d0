//! Levenberg-Marquardt solver for small dense residual systems.

use crate::error::{SolverError, SolverResult};
use crate::jacobian::forward_difference_jacobian;
use nalgebra::DVector;

/// Levenberg-Marquardt configuration.
pub struct LmConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance for residual norm
    pub residual_tol: f64,
    /// Tolerance for the gradient norm (first-order optimality)
    pub gradient_tol: f64,
    /// Relative tolerance for the step size
    pub step_tol: f64,
    /// Initial damping factor
    pub initial_damping: f64,
    /// Finite difference epsilon for the Jacobian
    pub fd_epsilon: f64,
}

impl Default for LmConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            residual_tol: 1e-10,
            gradient_tol: 1e-12,
            step_tol: 1e-12,
            initial_damping: 1e-3,
            fd_epsilon: 1e-8,
        }
    }
}

/// Levenberg-Marquardt iteration result.
pub struct LmResult {
    /// Solution vector
    pub x: DVector<f64>,
    /// Final residual norm
    pub residual_norm: f64,
    /// Number of iterations
    pub iterations: usize,
}

/// Solve `residual_fn(x) = 0` in the least-squares sense, starting from `x0`.
///
/// Damped Gauss-Newton: each step solves `(J'J + lambda diag(J'J)) dx = -J'r`.
/// A trial point that fails to evaluate, produces non-finite residuals, or
/// increases the residual norm is rejected and the damping raised; accepted
/// steps lower it. The residual at `x0` must evaluate cleanly.
///
/// Non-convergence within `max_iterations` is an error carrying the final
/// residual norm, never a best-effort answer.
pub fn levenberg_marquardt<F>(
    x0: DVector<f64>,
    residual_fn: F,
    config: &LmConfig,
) -> SolverResult<LmResult>
where
    F: Fn(&DVector<f64>) -> SolverResult<DVector<f64>>,
{
    let mut x = x0;
    let mut r = residual_fn(&x)?;
    if r.iter().any(|v| !v.is_finite()) {
        return Err(SolverError::Numeric {
            what: "residual is not finite at the starting point".to_string(),
        });
    }
    let mut r_norm = r.norm();
    let mut lambda = config.initial_damping;

    for iter in 0..config.max_iterations {
        if r_norm < config.residual_tol {
            return Ok(LmResult {
                x,
                residual_norm: r_norm,
                iterations: iter,
            });
        }

        let jac = forward_difference_jacobian(&x, &residual_fn, config.fd_epsilon)?;
        let jtj = jac.transpose() * &jac;
        let gradient = jac.transpose() * &r;

        if gradient.norm() < config.gradient_tol {
            // First-order optimality: a root only if the residual itself
            // is small, otherwise this is a minimum with no root.
            if r_norm < config.residual_tol.sqrt() {
                return Ok(LmResult {
                    x,
                    residual_norm: r_norm,
                    iterations: iter,
                });
            }
            return Err(SolverError::ConvergenceFailed {
                what: format!(
                    "converged to a non-zero residual minimum, norm = {:.3e}",
                    r_norm
                ),
            });
        }

        // Inner loop: raise damping until a step is accepted.
        let mut accepted = false;
        for _ in 0..30 {
            let mut damped = jtj.clone();
            for i in 0..damped.nrows() {
                damped[(i, i)] += lambda * jtj[(i, i)].max(1e-12);
            }

            let dx = match damped.lu().solve(&(-&gradient)) {
                Some(dx) => dx,
                None => {
                    lambda *= 10.0;
                    continue;
                }
            };

            let x_trial = &x + &dx;
            let r_trial = match residual_fn(&x_trial) {
                Ok(r_trial) if r_trial.iter().all(|v| v.is_finite()) => r_trial,
                // Left the evaluable region: treat as a rejected step.
                _ => {
                    lambda *= 10.0;
                    continue;
                }
            };
            let r_trial_norm = r_trial.norm();

            if r_trial_norm < r_norm {
                let step = dx.norm();
                x = x_trial;
                r = r_trial;
                r_norm = r_trial_norm;
                lambda = (lambda / 10.0).max(1e-12);
                accepted = true;

                if step < config.step_tol * (x.norm() + config.step_tol) {
                    return Ok(LmResult {
                        x,
                        residual_norm: r_norm,
                        iterations: iter + 1,
                    });
                }
                break;
            }
            lambda *= 10.0;
        }

        if !accepted {
            // No further progress possible; either we are at a minimum of
            // the residual norm or the damping blew up.
            if r_norm < config.residual_tol.sqrt() {
                return Ok(LmResult {
                    x,
                    residual_norm: r_norm,
                    iterations: iter,
                });
            }
            return Err(SolverError::ConvergenceFailed {
                what: format!(
                    "step rejected at iteration {}, residual norm = {:.3e}",
                    iter, r_norm
                ),
            });
        }
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "maximum iterations {} reached, residual norm = {:.3e}",
            config.max_iterations, r_norm
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_quadratic() {
        // x^2 - 4 = 0 from x0 = 3
        let residual = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            Ok(DVector::from_element(1, x[0] * x[0] - 4.0))
        };
        let result =
            levenberg_marquardt(DVector::from_element(1, 3.0), residual, &LmConfig::default())
                .unwrap();
        assert!((result.x[0] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn two_dimensional_system() {
        // x0 + x1 = 3, x0 * x1 = 2 -> (1, 2) or (2, 1)
        let residual = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            Ok(DVector::from_vec(vec![
                x[0] + x[1] - 3.0,
                x[0] * x[1] - 2.0,
            ]))
        };
        let result = levenberg_marquardt(
            DVector::from_vec(vec![0.5, 2.5]),
            residual,
            &LmConfig::default(),
        )
        .unwrap();
        let prod = result.x[0] * result.x[1];
        let sum = result.x[0] + result.x[1];
        assert!((sum - 3.0).abs() < 1e-6);
        assert!((prod - 2.0).abs() < 1e-6);
    }

    #[test]
    fn rejects_unsolvable_system() {
        // x^2 + 1 = 0 has no real root; the solver must error, not
        // return the least-squares minimum as if it had converged.
        let residual = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            Ok(DVector::from_element(1, x[0] * x[0] + 1.0))
        };
        let result =
            levenberg_marquardt(DVector::from_element(1, 3.0), residual, &LmConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn recovers_from_unevaluable_trial_points() {
        // sqrt(x) - 2 = 0: negative trial points fail to evaluate and
        // must be treated as rejected steps, not fatal errors.
        let residual = |x: &DVector<f64>| -> SolverResult<DVector<f64>> {
            if x[0] < 0.0 {
                return Err(SolverError::Numeric {
                    what: "negative argument".to_string(),
                });
            }
            Ok(DVector::from_element(1, x[0].sqrt() - 2.0))
        };
        let result =
            levenberg_marquardt(DVector::from_element(1, 0.1), residual, &LmConfig::default())
                .unwrap();
        assert!((result.x[0] - 4.0).abs() < 1e-6);
    }
}
