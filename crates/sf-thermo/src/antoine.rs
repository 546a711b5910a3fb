//! Antoine vapor-pressure correlation.
//!
//! `log10(P_mmHg) = A - B / (T_celsius + C)`, converted to atmospheres.
//! Both coefficient sets are fitted for the distillation-relevant range,
//! where the saturation curve is strictly increasing in temperature.

use crate::component::Component;
use crate::error::{ThermoError, ThermoResult};
use crate::model::VaporPressureModel;
use sf_core::units::constants::MMHG_PER_ATM;
use sf_core::units::{Pressure, Temperature, atm, to_degc};

/// Antoine constants with P in mmHg and T in degrees Celsius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntoineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

pub(crate) const ETHANOL: AntoineCoefficients = AntoineCoefficients {
    a: 8.20417,
    b: 1642.89,
    c: 230.300,
};

pub(crate) const WATER: AntoineCoefficients = AntoineCoefficients {
    a: 8.07131,
    b: 1730.63,
    c: 233.426,
};

/// Antoine-correlation implementation of [`VaporPressureModel`].
///
/// Stateless: results depend only on the inputs and the immutable
/// coefficient table.
#[derive(Debug, Clone, Copy, Default)]
pub struct AntoineModel;

impl AntoineModel {
    pub fn new() -> Self {
        Self
    }
}

fn saturation_pressure_atm(component: Component, t_celsius: f64) -> ThermoResult<f64> {
    if !t_celsius.is_finite() {
        return Err(ThermoError::NonFinite {
            what: "temperature",
            value: t_celsius,
        });
    }

    let coeff = component.antoine();
    let shifted = t_celsius + coeff.c;
    // log10 singularity at T + C = 0
    if shifted <= 0.0 {
        return Err(ThermoError::InvalidTemperature {
            component,
            t_celsius,
        });
    }

    let p_mmhg = 10f64.powf(coeff.a - coeff.b / shifted);
    Ok(p_mmhg / MMHG_PER_ATM)
}

impl VaporPressureModel for AntoineModel {
    fn name(&self) -> &str {
        "antoine"
    }

    fn saturation_pressure(
        &self,
        component: Component,
        t: Temperature,
    ) -> ThermoResult<Pressure> {
        saturation_pressure_atm(component, to_degc(t)).map(atm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::units::{degc, to_atm};

    #[test]
    fn water_boils_near_100c_at_1atm() {
        let model = AntoineModel::new();
        let p = model
            .saturation_pressure(Component::Water, degc(100.0))
            .unwrap();
        assert!((to_atm(p) - 1.0).abs() < 0.01, "P = {} atm", to_atm(p));
    }

    #[test]
    fn ethanol_boils_near_78c_at_1atm() {
        let model = AntoineModel::new();
        let p = model
            .saturation_pressure(Component::Ethanol, degc(78.4))
            .unwrap();
        assert!((to_atm(p) - 1.0).abs() < 0.01, "P = {} atm", to_atm(p));
    }

    #[test]
    fn ethanol_is_more_volatile_than_water() {
        let model = AntoineModel::new();
        for t in [40.0, 60.0, 80.0, 100.0] {
            let p_eth = to_atm(
                model
                    .saturation_pressure(Component::Ethanol, degc(t))
                    .unwrap(),
            );
            let p_wat = to_atm(
                model
                    .saturation_pressure(Component::Water, degc(t))
                    .unwrap(),
            );
            assert!(p_eth > p_wat, "at {t} C: {p_eth} vs {p_wat}");
        }
    }

    #[test]
    fn antoine_domain_violation() {
        let model = AntoineModel::new();
        let err = model
            .saturation_pressure(Component::Water, degc(-233.426))
            .unwrap_err();
        assert!(matches!(err, ThermoError::InvalidTemperature { .. }));

        let err = model
            .saturation_pressure(Component::Ethanol, degc(-250.0))
            .unwrap_err();
        assert!(matches!(
            err,
            ThermoError::InvalidTemperature {
                component: Component::Ethanol,
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_finite_temperature() {
        let model = AntoineModel::new();
        let err = model
            .saturation_pressure(Component::Water, degc(f64::NAN))
            .unwrap_err();
        assert!(matches!(err, ThermoError::NonFinite { .. }));
    }
}
