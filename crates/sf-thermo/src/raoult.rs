//! Raoult's-law vapor composition.

use crate::component::Component;
use crate::composition::MoleFraction;
use crate::error::{ThermoError, ThermoResult};
use crate::model::VaporPressureModel;
use sf_core::units::{Pressure, Temperature, to_atm};

/// Vapor-phase ethanol mole fraction at a converged bubble temperature.
///
/// `y = x * P_sat(T, ethanol) / P_total`. The value is returned exactly as
/// computed: it is not clamped to [0, 1] and the water-side fraction is never
/// used to renormalize it. A result outside [0, 1] therefore signals an
/// inconsistent model or input and is the caller's to surface.
pub fn vapor_composition(
    model: &dyn VaporPressureModel,
    x: MoleFraction,
    t: Temperature,
    p_total: Pressure,
) -> ThermoResult<f64> {
    let p_total_atm = to_atm(p_total);
    if !p_total_atm.is_finite() || p_total_atm <= 0.0 {
        return Err(ThermoError::NonPhysical {
            what: "total pressure",
        });
    }

    let p_sat = to_atm(model.saturation_pressure(Component::Ethanol, t)?);
    Ok(x.value() * p_sat / p_total_atm)
}
