//! Vapor-pressure model seam.

use crate::component::Component;
use crate::error::ThermoResult;
use sf_core::units::{Pressure, Temperature};

/// Pure-component saturation-pressure model.
///
/// This trait isolates the solver and curve generator from the concrete
/// correlation. Implementations must be thread-safe (Send + Sync) to support
/// parallel curve generation, and must be strictly increasing in temperature
/// over their valid domain for the bubble-point root to be unique.
pub trait VaporPressureModel: Send + Sync {
    /// Model name (for diagnostics and manifests).
    fn name(&self) -> &str;

    /// Saturation pressure of `component` at temperature `t`.
    fn saturation_pressure(&self, component: Component, t: Temperature)
    -> ThermoResult<Pressure>;
}
