//! sf-thermo: equilibrium thermodynamics for the ethanol-water system.
//!
//! Provides:
//! - The closed `Component` enumeration (ethanol, water)
//! - Antoine vapor-pressure correlation and coefficient table
//! - `VaporPressureModel` trait isolating callers from the correlation
//! - Validated liquid mole fractions
//! - Raoult's-law vapor composition
//!
//! # Example
//!
//! ```
//! use sf_core::units::{degc, to_atm};
//! use sf_thermo::{AntoineModel, Component, VaporPressureModel};
//!
//! let model = AntoineModel::new();
//! let p = model
//!     .saturation_pressure(Component::Water, degc(100.0))
//!     .unwrap();
//! // Water boils at ~100 C under 1 atm
//! assert!((to_atm(p) - 1.0).abs() < 0.01);
//! ```

pub mod antoine;
pub mod component;
pub mod composition;
pub mod error;
pub mod model;
pub mod raoult;

// Re-exports for ergonomics
pub use antoine::{AntoineCoefficients, AntoineModel};
pub use component::Component;
pub use composition::MoleFraction;
pub use error::{ThermoError, ThermoResult};
pub use model::VaporPressureModel;
pub use raoult::vapor_composition;
