//! Bubble-point solver for the ethanol-water equilibrium engine.
//!
//! This crate provides a scalar Newton iteration with a finite-difference
//! slope estimate, and the bubble-point solver built on it: given a liquid
//! ethanol fraction and a total pressure, find the temperature at which the
//! Raoult's-law mixture pressure matches the total pressure. Both saturation
//! curves are strictly increasing in temperature, so the root is unique.

pub mod bubble;
pub mod error;
pub mod newton;

pub use bubble::{BubblePointSolver, DEFAULT_T_GUESS_C};
pub use error::{SolverError, SolverResult};
pub use newton::{NewtonConfig, NewtonResult, newton_solve};
