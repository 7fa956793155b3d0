//! Binary sweep drivers built on the forward solve.

use crate::component::IastComponent;
use crate::error::{IastError, IastResult};
use crate::iast::{IastOptions, iast};
use rayon::prelude::*;
use sorb_core::{Real, numeric::linspace};

/// Adsorbed-vs-gas mole fraction equilibrium curve for a binary
/// mixture at fixed total pressure.
#[derive(Debug, Clone)]
pub struct VleCurve {
    /// Adsorbed-phase mole fraction of the first component.
    pub adsorbed_fractions: Vec<Real>,
    /// Gas-phase mole fraction of the first component.
    pub gas_fractions: Vec<Real>,
}

/// Selectivity of the first component over the second, across a
/// pressure grid at fixed gas composition.
#[derive(Debug, Clone)]
pub struct SvpCurve {
    pub pressures: Vec<Real>,
    pub selectivities: Vec<Real>,
}

fn check_binary(components: &[&dyn IastComponent]) -> IastResult<()> {
    if components.len() != 2 {
        return Err(IastError::InvalidArg {
            what: format!(
                "binary sweeps take exactly 2 components, got {}",
                components.len()
            ),
        });
    }
    Ok(())
}

/// Sweep the first component's gas fraction from 0.01 to 0.99 and
/// solve the equilibrium at each point.
///
/// The grid points are independent and solved in parallel; the first
/// failure aborts the sweep. The returned curve is closed with the
/// trivial endpoints (0, 0) and (1, 1).
pub fn iast_binary_vle(
    components: &[&dyn IastComponent],
    total_pressure: Real,
    n_points: usize,
    options: &IastOptions,
) -> IastResult<VleCurve> {
    check_binary(components)?;
    let grid = linspace(0.01, 0.99, n_points);

    let interior: Vec<(Real, Real)> = grid
        .par_iter()
        .map(|&y| {
            let solution = iast(components, &[y, 1.0 - y], total_pressure, options)?;
            let x = solution.loadings[0] / (solution.loadings[0] + solution.loadings[1]);
            Ok((x, y))
        })
        .collect::<IastResult<_>>()?;

    let mut adsorbed_fractions = Vec::with_capacity(n_points + 2);
    let mut gas_fractions = Vec::with_capacity(n_points + 2);
    adsorbed_fractions.push(0.0);
    gas_fractions.push(0.0);
    for (x, y) in interior {
        adsorbed_fractions.push(x);
        gas_fractions.push(y);
    }
    adsorbed_fractions.push(1.0);
    gas_fractions.push(1.0);

    Ok(VleCurve {
        adsorbed_fractions,
        gas_fractions,
    })
}

/// Solve the equilibrium at fixed gas composition across a pressure
/// grid and report the selectivity `(l0/y0) / (l1/y1)` at each point.
pub fn iast_binary_svp(
    components: &[&dyn IastComponent],
    gas_fractions: &[Real],
    pressures: &[Real],
    options: &IastOptions,
) -> IastResult<SvpCurve> {
    check_binary(components)?;
    if gas_fractions.len() != 2 {
        return Err(IastError::InvalidArg {
            what: format!(
                "binary sweeps take exactly 2 gas mole fractions, got {}",
                gas_fractions.len()
            ),
        });
    }
    if gas_fractions.iter().sum::<Real>() != 1.0 {
        return Err(IastError::InvalidArg {
            what: format!(
                "gas mole fractions sum to {}, they must sum to 1",
                gas_fractions.iter().sum::<Real>()
            ),
        });
    }

    let selectivities: Vec<Real> = pressures
        .par_iter()
        .map(|&pressure| {
            let solution = iast(components, gas_fractions, pressure, options)?;
            Ok((solution.loadings[0] / gas_fractions[0])
                / (solution.loadings[1] / gas_fractions[1]))
        })
        .collect::<IastResult<_>>()?;

    Ok(SvpCurve {
        pressures: pressures.to_vec(),
        selectivities,
    })
}
