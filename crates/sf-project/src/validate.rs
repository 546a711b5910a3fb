//! Design-specs validation logic.

use crate::schema::{DesignSpecs, LATEST_VERSION};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid grid: num_points = {num_points} (need at least 2)")]
    InvalidGrid { num_points: usize },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_specs(specs: &DesignSpecs) -> Result<(), ValidationError> {
    if specs.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: specs.version,
        });
    }

    let basis = &specs.basis;
    require_positive(
        "product_rate_L_per_day",
        basis.product_rate_l_per_day,
    )?;
    require_positive(
        "density_ethanol_kg_per_L",
        basis.density_ethanol_kg_per_l,
    )?;

    require_open_unit_interval("feed_composition_xF", basis.feed_composition_x_f)?;
    require_open_unit_interval("distillate_composition_xD", basis.distillate_composition_x_d)?;
    require_open_unit_interval("bottoms_composition_xB", basis.bottoms_composition_x_b)?;

    if !(basis.bottoms_composition_x_b < basis.feed_composition_x_f
        && basis.feed_composition_x_f < basis.distillate_composition_x_d)
    {
        return Err(ValidationError::InvalidValue {
            field: "feed_composition_xF",
            value: basis.feed_composition_x_f,
            reason: "compositions must satisfy xB < xF < xD",
        });
    }

    if specs.vle.num_points < 2 {
        return Err(ValidationError::InvalidGrid {
            num_points: specs.vle.num_points,
        });
    }
    require_positive("pressure_atm", specs.vle.pressure_atm)?;

    Ok(())
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must be positive and finite",
        });
    }
    Ok(())
}

fn require_open_unit_interval(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 || value >= 1.0 {
        return Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "must lie strictly between 0 and 1",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{BasisDef, VleDef};

    fn specs() -> DesignSpecs {
        DesignSpecs {
            version: LATEST_VERSION,
            basis: BasisDef {
                product_rate_l_per_day: 1000.0,
                density_ethanol_kg_per_l: 0.789,
                feed_composition_x_f: 0.30,
                distillate_composition_x_d: 0.85,
                bottoms_composition_x_b: 0.02,
            },
            vle: VleDef::default(),
        }
    }

    #[test]
    fn accepts_a_sound_basis() {
        assert!(validate_specs(&specs()).is_ok());
    }

    #[test]
    fn rejects_future_versions() {
        let mut bad = specs();
        bad.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_specs(&bad),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_compositions_on_the_boundary() {
        let mut bad = specs();
        bad.basis.bottoms_composition_x_b = 0.0;
        assert!(validate_specs(&bad).is_err());

        let mut bad = specs();
        bad.basis.distillate_composition_x_d = 1.0;
        assert!(validate_specs(&bad).is_err());
    }

    #[test]
    fn rejects_unordered_compositions() {
        let mut bad = specs();
        bad.basis.feed_composition_x_f = 0.9;
        assert!(matches!(
            validate_specs(&bad),
            Err(ValidationError::InvalidValue { .. })
        ));
    }

    #[test]
    fn rejects_degenerate_grid() {
        let mut bad = specs();
        bad.vle.num_points = 1;
        assert!(matches!(
            validate_specs(&bad),
            Err(ValidationError::InvalidGrid { num_points: 1 })
        ));
    }

    #[test]
    fn rejects_non_positive_pressure() {
        let mut bad = specs();
        bad.vle.pressure_atm = 0.0;
        assert!(validate_specs(&bad).is_err());
    }
}
