//! Isotherm model errors.

use thiserror::Error;

/// Result type for model evaluations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while constructing or evaluating a model.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A named parameter was not supplied to a factory.
    #[error("the '{model}' model is missing parameter '{param}'")]
    MissingParam {
        model: &'static str,
        param: &'static str,
    },

    /// A parameter value (or required temperature) is unusable.
    #[error("invalid parameter for '{model}': {what}")]
    InvalidParam { model: &'static str, what: String },

    /// Requested model name is not in the catalog.
    #[error("unknown isotherm model '{name}'")]
    UnknownModel { name: String },

    /// A numerical inversion or quadrature failed to converge.
    #[error("numerical routine failed for '{model}': {what}")]
    Convergence { model: &'static str, what: String },

    /// The operation has no meaningful implementation for this model.
    #[error("'{model}' does not support {what}")]
    NotSupported {
        model: &'static str,
        what: &'static str,
    },
}
