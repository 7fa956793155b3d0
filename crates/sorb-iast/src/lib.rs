//! sorb-iast: multi-component adsorption equilibria from
//! pure-component isotherms, by ideal adsorbed solution theory.
//!
//! The forward solve ([`iast`]) takes a gas composition and predicts
//! adsorbed-phase loadings; the reverse solve ([`reverse_iast`]) takes
//! a desired adsorbed composition and finds the gas composition that
//! produces it. Both reduce to equalizing the pure-component spreading
//! pressures over the composition simplex, solved as an unconstrained
//! (N-1)-dimensional least-squares problem with the last mole fraction
//! substituted out.
//!
//! On top of these sit binary sweep drivers producing equilibrium
//! ([`iast_binary_vle`]) and selectivity ([`iast_binary_svp`]) curves;
//! their grid points are independent and run in parallel.

pub mod component;
pub mod error;
pub mod iast;
pub mod sweeps;

pub use component::{IastComponent, ModelIsotherm};
pub use error::{IastError, IastResult};
pub use iast::{IastOptions, IastSolution, ReverseIastSolution, iast, reverse_iast};
pub use sweeps::{SvpCurve, VleCurve, iast_binary_svp, iast_binary_vle};
