//! Curve generation errors.

use thiserror::Error;

/// Errors that abort a whole generation request (per-point failures do not;
/// they become [`crate::SolveWarning`]s).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("Invalid composition range: a grid needs at least 2 points, got {num_points}")]
    InvalidCompositionRange { num_points: usize },

    #[error("Invalid total pressure: {p_atm} atm")]
    InvalidPressure { p_atm: f64 },
}

pub type CurveResult<T> = Result<T, CurveError>;
