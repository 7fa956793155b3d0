//! Error types for adsorbed-solution calculations.

use sorb_core::CoreError;
use sorb_models::ModelError;
use thiserror::Error;

/// Errors that can occur while solving for multi-component equilibria.
#[derive(Error, Debug)]
pub enum IastError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Convergence failed: {what}")]
    Convergence { what: String },

    #[error("Unphysical result: {what}")]
    UnphysicalResult { what: String },

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type IastResult<T> = Result<T, IastError>;
