//! Mass-balance errors.

use sf_core::SfError;
use thiserror::Error;

pub type BalanceResult<T> = Result<T, BalanceError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BalanceError {
    /// Compositions do not admit a split (requires xB < xF < xD).
    #[error("Infeasible design basis: {what}")]
    InfeasibleBasis { what: &'static str },

    /// The balance system is singular (feed and bottoms compositions equal).
    #[error("Degenerate split: xF={x_f} equals xB={x_b}")]
    DegenerateSplit { x_f: f64, x_b: f64 },

    #[error(transparent)]
    Core(#[from] SfError),
}
