//! sorb-models: adsorption isotherm model library.
//!
//! Provides:
//! - the `IsothermModel` trait: `loading(p)`, `pressure(n)`,
//!   `spreading_pressure(p)` and a fitting seed heuristic
//! - 16 concrete models, from Henry's law to chemi/physisorption
//! - a static model catalog with by-name construction and IAST
//!   eligibility flags
//!
//! All models compute loading as the dependent variable (the Virial
//! model inverts its own pressure function to do so). Closed-form
//! expressions are used wherever the algebra allows; the rest fall back
//! to bracketed root-finding and adaptive quadrature from `sorb-solver`.
//!
//! Pressure and loading units are whatever the calibration data used;
//! the math is unit-agnostic.

pub mod error;
pub mod model;
pub mod registry;

mod bet;
mod chemiphysisorption;
mod da;
mod dr;
mod dslangmuir;
mod dstoth;
mod freundlich;
mod gab;
mod henry;
mod jensenseaton;
mod langmuir;
mod quadratic;
mod temkinapprox;
mod toth;
mod tslangmuir;
mod virial;

pub use bet::Bet;
pub use chemiphysisorption::ChemiPhysisorption;
pub use da::DubininAstakhov;
pub use dr::DubininRadushkevich;
pub use dslangmuir::DsLangmuir;
pub use dstoth::DsToth;
pub use error::{ModelError, ModelResult};
pub use freundlich::Freundlich;
pub use gab::Gab;
pub use henry::Henry;
pub use jensenseaton::JensenSeaton;
pub use langmuir::Langmuir;
pub use model::{GAS_CONSTANT, IsothermModel};
pub use quadratic::Quadratic;
pub use registry::{ModelCatalogEntry, catalog_entry, is_iast_model, model_from_params};
pub use temkinapprox::TemkinApprox;
pub use toth::Toth;
pub use tslangmuir::TsLangmuir;
pub use virial::Virial;
