//! Forward and reverse adsorbed-solution equilibrium solves.

use crate::component::IastComponent;
use crate::error::{IastError, IastResult};
use nalgebra::DVector;
use sorb_core::{Real, ensure_finite};
use sorb_models::is_iast_model;
use sorb_solver::{LmConfig, SolverError, levenberg_marquardt};
use tracing::{info, warn};

/// Tolerance on the sum of a caller-supplied starting guess.
const GUESS_SUM_TOL: Real = 1e-4;

/// Options shared by the forward and reverse solves.
#[derive(Default)]
pub struct IastOptions {
    /// Starting guess for the solved mole fractions. Must sum to 1
    /// within 1e-4. When absent a default guess is constructed.
    pub guess: Option<Vec<Real>>,
    /// Suppress the extrapolation warning.
    pub warning_off: bool,
    /// Log the per-component equilibrium details on success.
    pub verbose: bool,
}

/// Result of a forward solve: adsorbed-phase composition and loadings.
#[derive(Debug, Clone)]
pub struct IastSolution {
    /// Adsorbed-phase mole fractions, same order as the components.
    pub adsorbed_fractions: Vec<Real>,
    /// Reference pressures `p0_i` at which each pure component has the
    /// mixture's spreading pressure.
    pub reference_pressures: Vec<Real>,
    /// Total mixture loading.
    pub total_loading: Real,
    /// Per-component loadings.
    pub loadings: Vec<Real>,
}

/// Result of a reverse solve: the gas composition producing a desired
/// adsorbed composition, plus the loadings at that point.
#[derive(Debug, Clone)]
pub struct ReverseIastSolution {
    /// Gas-phase mole fractions, same order as the components.
    pub gas_fractions: Vec<Real>,
    /// Reference pressures `p0_i`.
    pub reference_pressures: Vec<Real>,
    /// Total mixture loading.
    pub total_loading: Real,
    /// Per-component loadings.
    pub loadings: Vec<Real>,
}

fn check_components(
    components: &[&dyn IastComponent],
    fractions: &[Real],
    what_fractions: &str,
) -> IastResult<()> {
    if components.len() < 2 {
        return Err(IastError::InvalidArg {
            what: format!(
                "at least 2 components are required, got {}",
                components.len()
            ),
        });
    }
    if fractions.len() != components.len() {
        return Err(IastError::InvalidArg {
            what: format!(
                "{} components but {} {what_fractions}",
                components.len(),
                fractions.len()
            ),
        });
    }
    for component in components {
        if let Some(name) = component.model_name() {
            if !is_iast_model(name) {
                return Err(IastError::InvalidArg {
                    what: format!(
                        "model '{name}' is not thermodynamically consistent for \
                         adsorbed-solution calculations"
                    ),
                });
            }
        }
    }
    Ok(())
}

fn check_guess(guess: &[Real], n: usize) -> IastResult<()> {
    if guess.len() != n {
        return Err(IastError::InvalidArg {
            what: format!("guess has {} entries for {n} components", guess.len()),
        });
    }
    let sum: Real = guess.iter().sum();
    if (sum - 1.0).abs() > GUESS_SUM_TOL {
        return Err(IastError::InvalidArg {
            what: format!("guess mole fractions sum to {sum}, expected 1"),
        });
    }
    Ok(())
}

/// Check the reassembled mole fractions lie on the simplex.
fn check_physical(fractions: &[Real], what: &str) -> IastResult<()> {
    for (i, z) in fractions.iter().enumerate() {
        if !(0.0..=1.0).contains(z) {
            return Err(IastError::UnphysicalResult {
                what: format!(
                    "{what} fraction of component {i} is {z}, outside [0, 1]; \
                     the starting guess may be poor, try supplying a different one"
                ),
            });
        }
    }
    Ok(())
}

/// Solve the (N-1)-dimensional spreading-pressure equality system.
///
/// `reference_pressure(i, z_i)` is the pure-component pressure at which
/// component `i` must be evaluated given its solved fraction. The last
/// fraction is substituted as `1 - sum(rest)`, which keeps the solve
/// unconstrained; physicality is checked afterwards.
fn solve_equality<R>(
    components: &[&dyn IastComponent],
    guess: &[Real],
    reference_pressure: R,
) -> IastResult<Vec<Real>>
where
    R: Fn(usize, Real) -> Real,
{
    let n = components.len();
    let x0 = DVector::from_iterator(n - 1, guess[..n - 1].iter().copied());

    let residual = |x: &DVector<f64>| -> Result<DVector<f64>, SolverError> {
        let last = 1.0 - x.sum();
        let frac = |i: usize| if i == n - 1 { last } else { x[i] };
        let mut r = DVector::zeros(n - 1);
        for i in 0..n - 1 {
            let a = components[i]
                .spreading_pressure_at(reference_pressure(i, frac(i)))
                .map_err(|e| SolverError::Numeric {
                    what: e.to_string(),
                })?;
            let b = components[i + 1]
                .spreading_pressure_at(reference_pressure(i + 1, frac(i + 1)))
                .map_err(|e| SolverError::Numeric {
                    what: e.to_string(),
                })?;
            r[i] = a - b;
        }
        Ok(r)
    };

    let result = levenberg_marquardt(x0, residual, &LmConfig::default()).map_err(|e| {
        IastError::Convergence {
            what: format!("spreading-pressure equality solve failed: {e}"),
        }
    })?;

    let mut fractions: Vec<Real> = result.x.iter().copied().collect();
    fractions.push(1.0 - fractions.iter().sum::<Real>());
    Ok(fractions)
}

/// Harmonic mixing rule for the total loading, then per-component split.
fn loadings_at_equilibrium(
    components: &[&dyn IastComponent],
    fractions: &[Real],
    reference_pressures: &[Real],
) -> IastResult<(Real, Vec<Real>)> {
    let mut inverse_total = 0.0;
    for ((component, &z), &p0) in components.iter().zip(fractions).zip(reference_pressures) {
        inverse_total += z / component.loading_at(p0)?;
    }
    let total = 1.0 / inverse_total;
    let loadings = fractions.iter().map(|z| z * total).collect();
    Ok((total, loadings))
}

fn warn_extrapolation(
    components: &[&dyn IastComponent],
    reference_pressures: &[Real],
    warning_off: bool,
) {
    if warning_off {
        return;
    }
    for (i, (component, &p0)) in components.iter().zip(reference_pressures).enumerate() {
        if let Some(max_p) = component.max_pressure() {
            if p0 > max_p {
                warn!(
                    component = i,
                    reference_pressure = p0,
                    max_pressure = max_p,
                    "equilibrium requires extrapolating beyond the calibration data"
                );
            }
        }
    }
}

/// Forward solve: gas composition to adsorbed-phase loadings.
///
/// Given N pure-component isotherms and partial pressures
/// `y_i * total_pressure`, finds the adsorbed mole fractions `z`
/// at which all pure components reach the same spreading pressure
/// when evaluated at `p_i / z_i`, then computes the loadings.
pub fn iast(
    components: &[&dyn IastComponent],
    gas_fractions: &[Real],
    total_pressure: Real,
    options: &IastOptions,
) -> IastResult<IastSolution> {
    check_components(components, gas_fractions, "gas mole fractions")?;
    ensure_finite(total_pressure, "total pressure")?;
    let n = components.len();
    let partial_pressures: Vec<Real> = gas_fractions.iter().map(|y| y * total_pressure).collect();

    let guess = match &options.guess {
        Some(g) => {
            check_guess(g, n)?;
            g.clone()
        }
        None => {
            // Pure loadings at the partial pressures, normalized.
            let mut loadings = Vec::with_capacity(n);
            for (component, &p) in components.iter().zip(&partial_pressures) {
                loadings.push(component.loading_at(p)?);
            }
            let sum: Real = loadings.iter().sum();
            if !(sum > 0.0) {
                return Err(IastError::InvalidArg {
                    what: "pure-component loadings give no usable starting guess, \
                           supply one explicitly"
                        .to_string(),
                });
            }
            loadings.iter().map(|l| l / sum).collect()
        }
    };

    let fractions = solve_equality(components, &guess, |i, z| partial_pressures[i] / z)?;
    check_physical(&fractions, "adsorbed")?;

    let reference_pressures: Vec<Real> = partial_pressures
        .iter()
        .zip(&fractions)
        .map(|(p, z)| p / z)
        .collect();
    let (total_loading, loadings) =
        loadings_at_equilibrium(components, &fractions, &reference_pressures)?;
    warn_extrapolation(components, &reference_pressures, options.warning_off);

    if options.verbose {
        info!(
            total_pressure,
            ?fractions,
            ?loadings,
            total_loading,
            "forward equilibrium solved"
        );
    }

    Ok(IastSolution {
        adsorbed_fractions: fractions,
        reference_pressures,
        total_loading,
        loadings,
    })
}

/// Reverse solve: desired adsorbed composition to gas composition.
///
/// The desired fractions are a user-declared exact target, so they
/// must sum to 1 exactly rather than within the guess tolerance.
pub fn reverse_iast(
    components: &[&dyn IastComponent],
    adsorbed_fractions: &[Real],
    total_pressure: Real,
    options: &IastOptions,
) -> IastResult<ReverseIastSolution> {
    check_components(components, adsorbed_fractions, "adsorbed mole fractions")?;
    ensure_finite(total_pressure, "total pressure")?;
    let n = components.len();
    if adsorbed_fractions.iter().sum::<Real>() != 1.0 {
        return Err(IastError::InvalidArg {
            what: format!(
                "desired adsorbed mole fractions sum to {}, they must sum to 1 exactly",
                adsorbed_fractions.iter().sum::<Real>()
            ),
        });
    }

    let guess = match &options.guess {
        Some(g) => {
            check_guess(g, n)?;
            g.clone()
        }
        None => adsorbed_fractions.to_vec(),
    };

    let gas_fractions = solve_equality(components, &guess, |i, y| {
        total_pressure * y / adsorbed_fractions[i]
    })?;
    check_physical(&gas_fractions, "gas")?;

    let reference_pressures: Vec<Real> = gas_fractions
        .iter()
        .zip(adsorbed_fractions)
        .map(|(y, x)| total_pressure * y / x)
        .collect();
    let (total_loading, loadings) =
        loadings_at_equilibrium(components, adsorbed_fractions, &reference_pressures)?;
    warn_extrapolation(components, &reference_pressures, options.warning_off);

    if options.verbose {
        info!(
            total_pressure,
            ?gas_fractions,
            ?loadings,
            total_loading,
            "reverse equilibrium solved"
        );
    }

    Ok(ReverseIastSolution {
        gas_fractions,
        reference_pressures,
        total_loading,
        loadings,
    })
}
