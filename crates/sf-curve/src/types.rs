//! Equilibrium curve data types.

use serde::{Deserialize, Serialize};
use sf_solver::SolverError;

/// One converged point of the equilibrium curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquilibriumPoint {
    /// Liquid ethanol mole fraction
    pub x_ethanol: f64,
    /// Vapor ethanol mole fraction
    pub y_ethanol: f64,
    /// Bubble temperature [C]
    pub t_bubble_c: f64,
}

/// Ordered equilibrium curve, strictly increasing in x.
///
/// Produced by one generation sweep; read-only for downstream consumers
/// (export, plotting, plate-by-plate design).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EquilibriumCurve {
    points: Vec<EquilibriumPoint>,
}

impl EquilibriumCurve {
    pub fn from_points(points: Vec<EquilibriumPoint>) -> Self {
        debug_assert!(
            points.windows(2).all(|p| p[1].x_ethanol > p[0].x_ethanol),
            "curve points must be strictly ascending in x"
        );
        Self { points }
    }

    pub fn points(&self) -> &[EquilibriumPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &EquilibriumPoint> {
        self.points.iter()
    }
}

/// Record of a grid point whose solve failed.
///
/// Warnings are collected alongside the curve and never silently dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveWarning {
    /// Attempted liquid ethanol mole fraction
    pub x_ethanol: f64,
    /// The failure for this point
    pub error: SolverError,
}
