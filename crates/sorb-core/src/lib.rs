//! sorb-core: stable foundation for sorb.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers + grid builders)
//! - error (shared error type)

pub mod error;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult};
pub use numeric::*;
