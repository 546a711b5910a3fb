//! Overall balance solve.

use crate::error::{BalanceError, BalanceResult};
use nalgebra::{Matrix2, Vector2};
use sf_core::numeric::ensure_positive;
use sf_thermo::MoleFraction;

pub const HOURS_PER_DAY: f64 = 24.0;

/// Design basis for the overall balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignBasis {
    /// Distillate product rate [L/day]
    pub product_rate_l_per_day: f64,
    /// Distillate product density [kg/L]
    pub density_ethanol_kg_per_l: f64,
    /// Feed ethanol fraction
    pub x_f: MoleFraction,
    /// Distillate ethanol fraction
    pub x_d: MoleFraction,
    /// Bottoms ethanol fraction
    pub x_b: MoleFraction,
}

/// Stream flows solved from the balance, in kg/day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamFlows {
    pub feed_kg_per_day: f64,
    pub distillate_kg_per_day: f64,
    pub bottoms_kg_per_day: f64,
}

impl StreamFlows {
    pub fn feed_kg_per_h(&self) -> f64 {
        self.feed_kg_per_day / HOURS_PER_DAY
    }

    pub fn distillate_kg_per_h(&self) -> f64 {
        self.distillate_kg_per_day / HOURS_PER_DAY
    }

    pub fn bottoms_kg_per_h(&self) -> f64 {
        self.bottoms_kg_per_day / HOURS_PER_DAY
    }
}

/// Solve the two-equation overall balance for the three stream flows.
///
/// D is fixed by the product basis (rate times density); the remaining
/// unknowns F and B satisfy
///
/// ```text
/// [ 1   -1  ] [F]   [ D      ]
/// [ xF  -xB ] [B] = [ xD * D ]
/// ```
///
/// solved by LU decomposition.
pub fn solve_mass_balance(basis: &DesignBasis) -> BalanceResult<StreamFlows> {
    ensure_positive(basis.product_rate_l_per_day, "product rate")?;
    ensure_positive(basis.density_ethanol_kg_per_l, "product density")?;

    let x_f = basis.x_f.value();
    let x_d = basis.x_d.value();
    let x_b = basis.x_b.value();
    if !(x_b < x_f && x_f < x_d) {
        return Err(BalanceError::InfeasibleBasis {
            what: "compositions must satisfy xB < xF < xD",
        });
    }

    let distillate = basis.product_rate_l_per_day * basis.density_ethanol_kg_per_l;

    let system = Matrix2::new(1.0, -1.0, x_f, -x_b);
    let rhs = Vector2::new(distillate, x_d * distillate);
    let solution = system
        .lu()
        .solve(&rhs)
        .ok_or(BalanceError::DegenerateSplit { x_f, x_b })?;

    Ok(StreamFlows {
        feed_kg_per_day: solution[0],
        distillate_kg_per_day: distillate,
        bottoms_kg_per_day: solution[1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sf_core::numeric::{Tolerances, nearly_equal};

    fn basis() -> DesignBasis {
        DesignBasis {
            product_rate_l_per_day: 1000.0,
            density_ethanol_kg_per_l: 0.789,
            x_f: MoleFraction::new(0.30).unwrap(),
            x_d: MoleFraction::new(0.85).unwrap(),
            x_b: MoleFraction::new(0.02).unwrap(),
        }
    }

    #[test]
    fn balance_closes() {
        let flows = solve_mass_balance(&basis()).unwrap();
        let tol = Tolerances::default();

        // Total balance: F = D + B
        let total = flows.distillate_kg_per_day + flows.bottoms_kg_per_day;
        assert!(nearly_equal(flows.feed_kg_per_day, total, tol));

        // Component balance: F*xF = D*xD + B*xB
        let ethanol_in = flows.feed_kg_per_day * 0.30;
        let ethanol_out = flows.distillate_kg_per_day * 0.85 + flows.bottoms_kg_per_day * 0.02;
        assert!(nearly_equal(ethanol_in, ethanol_out, tol));
    }

    #[test]
    fn distillate_follows_the_product_basis() {
        let flows = solve_mass_balance(&basis()).unwrap();
        assert!((flows.distillate_kg_per_day - 789.0).abs() < 1e-9);
        // B = D*(xD - xF)/(xF - xB) = 789 * 0.55 / 0.28
        assert!((flows.bottoms_kg_per_day - 789.0 * 0.55 / 0.28).abs() < 1e-6);
    }

    #[test]
    fn hourly_rates_divide_by_24() {
        let flows = solve_mass_balance(&basis()).unwrap();
        assert!((flows.feed_kg_per_h() * HOURS_PER_DAY - flows.feed_kg_per_day).abs() < 1e-9);
        assert!((flows.distillate_kg_per_h() - 789.0 / 24.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_unordered_compositions() {
        let mut bad = basis();
        bad.x_b = MoleFraction::new(0.30).unwrap();
        assert!(matches!(
            solve_mass_balance(&bad),
            Err(BalanceError::InfeasibleBasis { .. })
        ));

        let mut inverted = basis();
        inverted.x_d = MoleFraction::new(0.10).unwrap();
        assert!(matches!(
            solve_mass_balance(&inverted),
            Err(BalanceError::InfeasibleBasis { .. })
        ));
    }

    #[test]
    fn rejects_non_positive_rate() {
        let mut bad = basis();
        bad.product_rate_l_per_day = 0.0;
        assert!(matches!(
            solve_mass_balance(&bad),
            Err(BalanceError::Core(_))
        ));
    }
}
