//! Error types for bubble-point solving.

use sf_thermo::ThermoError;
use thiserror::Error;

/// Errors that can occur while solving for a bubble temperature.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Problem setup error: {what}")]
    ProblemSetup { what: &'static str },

    #[error(
        "Convergence failed for x={x_ethanol} at P={p_total_atm} atm: \
         {iterations} iterations reached, last T={last_t_celsius} C"
    )]
    ConvergenceFailed {
        x_ethanol: f64,
        p_total_atm: f64,
        last_t_celsius: f64,
        iterations: usize,
    },

    #[error("Vapor-pressure model error: {0}")]
    Thermo(#[from] ThermoError),

    #[error("Numeric error: {what}")]
    Numeric { what: &'static str },
}

pub type SolverResult<T> = Result<T, SolverError>;
