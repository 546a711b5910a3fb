//! sf-core: stable foundation for stillflow.
//!
//! Contains:
//! - units (uom pressure/temperature types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{SfError, SfResult};
pub use numeric::*;
pub use units::*;
