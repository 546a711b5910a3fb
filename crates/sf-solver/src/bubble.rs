//! Bubble-point temperature solver.

use crate::error::{SolverError, SolverResult};
use crate::newton::{NewtonConfig, newton_solve};
use sf_core::units::{Pressure, Temperature, degc, to_atm, to_degc};
use sf_thermo::{Component, MoleFraction, VaporPressureModel};
use tracing::debug;

/// Default initial temperature guess [C], between the two pure boiling
/// points at atmospheric pressure.
pub const DEFAULT_T_GUESS_C: f64 = 80.0;

/// Finds the temperature at which a liquid of given ethanol fraction boils
/// at a given total pressure.
///
/// The residual is `P_total - (x*Psat_eth(T) + (1-x)*Psat_wat(T))`; both
/// saturation curves are strictly increasing in T, so the weighted sum is
/// too and the root is unique between the pure-component boiling points.
pub struct BubblePointSolver<'a> {
    model: &'a dyn VaporPressureModel,
    config: NewtonConfig,
}

impl<'a> BubblePointSolver<'a> {
    pub fn new(model: &'a dyn VaporPressureModel) -> Self {
        Self {
            model,
            config: NewtonConfig::default(),
        }
    }

    pub fn with_config(model: &'a dyn VaporPressureModel, config: NewtonConfig) -> Self {
        Self { model, config }
    }

    /// Mixture-pressure residual in atm at `t_celsius`.
    fn residual(&self, x: f64, p_total_atm: f64, t_celsius: f64) -> SolverResult<f64> {
        let p_eth = to_atm(
            self.model
                .saturation_pressure(Component::Ethanol, degc(t_celsius))?,
        );
        let p_wat = to_atm(
            self.model
                .saturation_pressure(Component::Water, degc(t_celsius))?,
        );
        Ok(p_total_atm - (x * p_eth + (1.0 - x) * p_wat))
    }

    /// Solve for the bubble temperature starting from `t_guess`.
    ///
    /// Fails with `ConvergenceFailed` (carrying x, the pressure and the last
    /// iterate) when the iteration cap is exhausted. There is no automatic
    /// retry; callers may re-invoke with a different guess.
    pub fn solve(
        &self,
        x: MoleFraction,
        p_total: Pressure,
        t_guess: Temperature,
    ) -> SolverResult<Temperature> {
        let p_total_atm = to_atm(p_total);
        if !p_total_atm.is_finite() || p_total_atm <= 0.0 {
            return Err(SolverError::ProblemSetup {
                what: "total pressure must be positive",
            });
        }

        let x_ethanol = x.value();
        let result = newton_solve(
            to_degc(t_guess),
            |t| self.residual(x_ethanol, p_total_atm, t),
            &self.config,
        )?;

        if !result.converged {
            return Err(SolverError::ConvergenceFailed {
                x_ethanol,
                p_total_atm,
                last_t_celsius: result.root,
                iterations: result.iterations,
            });
        }

        debug!(
            x_ethanol,
            t_celsius = result.root,
            iterations = result.iterations,
            "bubble point converged"
        );
        Ok(degc(result.root))
    }

    /// Solve with the default initial guess.
    pub fn solve_default(&self, x: MoleFraction, p_total: Pressure) -> SolverResult<Temperature> {
        self.solve(x, p_total, degc(DEFAULT_T_GUESS_C))
    }

    /// Boiling point of a pure component at `p_total`.
    pub fn pure_boiling_point(
        &self,
        component: Component,
        p_total: Pressure,
    ) -> SolverResult<Temperature> {
        let x = match component {
            Component::Ethanol => MoleFraction::ONE,
            Component::Water => MoleFraction::ZERO,
        };
        self.solve_default(x, p_total)
    }
}
