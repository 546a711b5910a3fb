//! Equilibrium-curve generation across a composition grid.

use crate::error::{CurveError, CurveResult};
use crate::grid::CompositionGrid;
use crate::types::{EquilibriumCurve, EquilibriumPoint, SolveWarning};
use rayon::prelude::*;
use sf_core::units::{Pressure, degc, to_atm, to_degc};
use sf_solver::{BubblePointSolver, DEFAULT_T_GUESS_C, NewtonConfig, SolverError};
use sf_thermo::{MoleFraction, VaporPressureModel, vapor_composition};
use tracing::warn;

/// Curve generation settings.
#[derive(Debug, Clone, Copy)]
pub struct CurveConfig {
    /// Initial bubble-point guess used for every grid point [C].
    ///
    /// Every point starts from the same guess so that points stay
    /// independent of each other and parallel generation needs no
    /// cross-point state.
    pub t_guess_c: f64,
    /// Newton settings passed through to the solver
    pub newton: NewtonConfig,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            t_guess_c: DEFAULT_T_GUESS_C,
            newton: NewtonConfig::default(),
        }
    }
}

/// Per-point solving seam used by the curve generator.
///
/// The default implementation is the bubble-point/Raoult pipeline; tests
/// substitute stubs to exercise the partial-failure bookkeeping.
pub trait PointSolver: Send + Sync {
    fn solve_point(
        &self,
        x: MoleFraction,
        p_total: Pressure,
    ) -> Result<EquilibriumPoint, SolverError>;
}

/// Default pipeline: bubble-point solve, then Raoult vapor composition.
pub struct RaoultPointSolver<'a> {
    model: &'a dyn VaporPressureModel,
    config: CurveConfig,
}

impl<'a> RaoultPointSolver<'a> {
    pub fn new(model: &'a dyn VaporPressureModel, config: CurveConfig) -> Self {
        Self { model, config }
    }
}

impl PointSolver for RaoultPointSolver<'_> {
    fn solve_point(
        &self,
        x: MoleFraction,
        p_total: Pressure,
    ) -> Result<EquilibriumPoint, SolverError> {
        let solver = BubblePointSolver::with_config(self.model, self.config.newton);
        let t = solver.solve(x, p_total, degc(self.config.t_guess_c))?;
        let y = vapor_composition(self.model, x, t, p_total)?;
        Ok(EquilibriumPoint {
            x_ethanol: x.value(),
            y_ethanol: y,
            t_bubble_c: to_degc(t),
        })
    }
}

/// Outcome of one generation sweep: the ordered curve plus one warning per
/// grid point that failed to solve.
#[derive(Debug, Clone)]
pub struct CurveOutcome {
    pub curve: EquilibriumCurve,
    pub warnings: Vec<SolveWarning>,
}

/// Sweeps a liquid-composition grid into an ordered equilibrium curve.
pub struct CurveGenerator<'a> {
    solver: RaoultPointSolver<'a>,
}

impl<'a> CurveGenerator<'a> {
    pub fn new(model: &'a dyn VaporPressureModel) -> Self {
        Self::with_config(model, CurveConfig::default())
    }

    pub fn with_config(model: &'a dyn VaporPressureModel, config: CurveConfig) -> Self {
        Self {
            solver: RaoultPointSolver::new(model, config),
        }
    }

    /// Generate the curve point by point, in ascending-x order.
    pub fn generate(&self, num_points: usize, p_total: Pressure) -> CurveResult<CurveOutcome> {
        generate_with(&self.solver, num_points, p_total)
    }

    /// Same sweep with the per-point loop fanned out over the rayon pool.
    ///
    /// Points are independent (each depends only on its own x, the pressure
    /// and the fixed guess), so the only coordination is reassembling
    /// ascending-x order; the output is identical to [`Self::generate`].
    pub fn generate_parallel(
        &self,
        num_points: usize,
        p_total: Pressure,
    ) -> CurveResult<CurveOutcome> {
        generate_parallel_with(&self.solver, num_points, p_total)
    }
}

fn validated_grid(num_points: usize, p_total: Pressure) -> CurveResult<CompositionGrid> {
    let grid = CompositionGrid::new(num_points)?;
    let p_atm = to_atm(p_total);
    if !p_atm.is_finite() || p_atm <= 0.0 {
        return Err(CurveError::InvalidPressure { p_atm });
    }
    Ok(grid)
}

fn solve_grid_value(
    solver: &dyn PointSolver,
    x: f64,
    p_total: Pressure,
) -> Result<EquilibriumPoint, SolveWarning> {
    MoleFraction::new(x)
        .map_err(SolverError::from)
        .and_then(|x| solver.solve_point(x, p_total))
        .map_err(|error| {
            warn!(x_ethanol = x, %error, "grid point failed, recording warning");
            SolveWarning {
                x_ethanol: x,
                error,
            }
        })
}

/// Generate a curve with an explicit per-point solver.
pub fn generate_with(
    solver: &dyn PointSolver,
    num_points: usize,
    p_total: Pressure,
) -> CurveResult<CurveOutcome> {
    let grid = validated_grid(num_points, p_total)?;

    let mut points = Vec::with_capacity(num_points);
    let mut warnings = Vec::new();
    for x in grid.points() {
        match solve_grid_value(solver, x, p_total) {
            Ok(point) => points.push(point),
            Err(warning) => warnings.push(warning),
        }
    }

    Ok(CurveOutcome {
        curve: EquilibriumCurve::from_points(points),
        warnings,
    })
}

/// Parallel variant of [`generate_with`].
pub fn generate_parallel_with(
    solver: &dyn PointSolver,
    num_points: usize,
    p_total: Pressure,
) -> CurveResult<CurveOutcome> {
    let grid = validated_grid(num_points, p_total)?;

    // Indexed parallel map keeps results in grid order
    let results: Vec<Result<EquilibriumPoint, SolveWarning>> = grid
        .points()
        .into_par_iter()
        .map(|x| solve_grid_value(solver, x, p_total))
        .collect();

    let mut points = Vec::with_capacity(num_points);
    let mut warnings = Vec::new();
    for result in results {
        match result {
            Ok(point) => points.push(point),
            Err(warning) => warnings.push(warning),
        }
    }

    Ok(CurveOutcome {
        curve: EquilibriumCurve::from_points(points),
        warnings,
    })
}
