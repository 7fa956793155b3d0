//! Generic numerical routines for sorb.
//!
//! This crate has no adsorption knowledge: it provides the nonlinear
//! root-finding and quadrature primitives the model library and the
//! IAST solver are built on:
//! - a Levenberg-Marquardt solver for small dense residual systems
//! - a bracketing scalar root-finder for model inversion
//! - adaptive Simpson quadrature for spreading-pressure integrals
//! - finite-difference Jacobians

pub mod error;
pub mod jacobian;
pub mod lm;
pub mod quad;
pub mod root;

pub use error::{SolverError, SolverResult};
pub use jacobian::forward_difference_jacobian;
pub use lm::{LmConfig, LmResult, levenberg_marquardt};
pub use quad::adaptive_simpson;
pub use root::find_root_from_zero;
