// sf-core/src/units.rs

use uom::si::f64::{
    Pressure as UomPressure, ThermodynamicTemperature as UomThermodynamicTemperature,
};

// Public canonical unit types (f64)
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn atm(v: f64) -> Pressure {
    use uom::si::pressure::atmosphere;
    Pressure::new::<atmosphere>(v)
}

#[inline]
pub fn mmhg(v: f64) -> Pressure {
    use uom::si::pressure::millimeter_of_mercury;
    Pressure::new::<millimeter_of_mercury>(v)
}

#[inline]
pub fn degc(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn kelvin(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn to_atm(p: Pressure) -> f64 {
    use uom::si::pressure::atmosphere;
    p.get::<atmosphere>()
}

#[inline]
pub fn to_degc(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

pub mod constants {
    /// Antoine correlations report pressure in mmHg.
    pub const MMHG_PER_ATM: f64 = 760.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = atm(1.0);
        let _p2 = mmhg(760.0);
        let _t = degc(78.4);
        let _t2 = kelvin(300.0);
    }

    #[test]
    fn atm_roundtrip() {
        let p = atm(1.0);
        assert!((to_atm(p) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn mmhg_to_atm() {
        let p = mmhg(constants::MMHG_PER_ATM);
        assert!((to_atm(p) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn celsius_roundtrip() {
        let t = degc(100.0);
        assert!((to_degc(t) - 100.0).abs() < 1e-9);
    }
}
