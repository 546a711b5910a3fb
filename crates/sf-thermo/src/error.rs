//! Thermodynamic model errors.

use crate::component::Component;
use thiserror::Error;

/// Result type for thermodynamic operations.
pub type ThermoResult<T> = Result<T, ThermoError>;

/// Errors that can occur during equilibrium property calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThermoError {
    /// Component identifier not in the closed ethanol/water set.
    #[error("Unknown component '{name}': use 'ethanol' or 'water'")]
    UnknownComponent { name: String },

    /// Antoine domain violation (T + C <= 0).
    #[error("Temperature {t_celsius} C is outside the Antoine domain for {component}")]
    InvalidTemperature {
        component: Component,
        t_celsius: f64,
    },

    /// Mole fraction outside [0, 1].
    #[error("Mole fraction out of range: {value}")]
    InvalidComposition { value: f64 },

    /// Non-physical values (zero or negative total pressure, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// NaN or infinity reached the model boundary.
    #[error("Non-finite value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
