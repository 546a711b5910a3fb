//! sf-curve: equilibrium-curve generation for the ethanol-water system.
//!
//! Sweeps an evenly spaced liquid-composition grid, solving each point for
//! its bubble temperature and Raoult's-law vapor composition, and assembles
//! the ordered equilibrium curve. A failed grid point is downgraded to a
//! [`SolveWarning`] and the sweep continues; this is the only place in the
//! engine where an error is absorbed instead of propagated.

pub mod error;
pub mod generate;
pub mod grid;
pub mod types;

pub use error::{CurveError, CurveResult};
pub use generate::{
    CurveConfig, CurveGenerator, CurveOutcome, PointSolver, RaoultPointSolver, generate_with,
    generate_parallel_with,
};
pub use grid::CompositionGrid;
pub use types::{EquilibriumCurve, EquilibriumPoint, SolveWarning};
