//! Liquid composition handling.

use crate::error::{ThermoError, ThermoResult};

/// Ethanol mole fraction of the binary liquid, validated to [0, 1].
///
/// The water fraction is always the complement; only the ethanol side is
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct MoleFraction(f64);

impl MoleFraction {
    /// Pure water.
    pub const ZERO: MoleFraction = MoleFraction(0.0);
    /// Pure ethanol.
    pub const ONE: MoleFraction = MoleFraction(1.0);

    /// Validate a raw value into a mole fraction.
    pub fn new(value: f64) -> ThermoResult<Self> {
        if !value.is_finite() {
            return Err(ThermoError::NonFinite {
                what: "mole fraction",
                value,
            });
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ThermoError::InvalidComposition { value });
        }
        Ok(Self(value))
    }

    /// Ethanol mole fraction.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Water mole fraction.
    pub fn complement(&self) -> f64 {
        1.0 - self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_unit_interval() {
        assert_eq!(MoleFraction::new(0.0).unwrap(), MoleFraction::ZERO);
        assert_eq!(MoleFraction::new(1.0).unwrap(), MoleFraction::ONE);
        assert!((MoleFraction::new(0.3).unwrap().value() - 0.3).abs() < 1e-15);
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(
            MoleFraction::new(-0.1),
            Err(ThermoError::InvalidComposition { .. })
        ));
        assert!(matches!(
            MoleFraction::new(1.5),
            Err(ThermoError::InvalidComposition { .. })
        ));
        assert!(matches!(
            MoleFraction::new(f64::NAN),
            Err(ThermoError::NonFinite { .. })
        ));
    }
}
