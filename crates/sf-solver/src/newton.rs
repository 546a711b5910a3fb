//! Scalar Newton iteration with a finite-difference slope estimate.

use crate::error::{SolverError, SolverResult};

/// Newton solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct NewtonConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Absolute tolerance on the residual
    pub tol: f64,
    /// Relative step used for the finite-difference slope estimate
    pub fd_step: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        Self {
            max_iterations: 50,
            tol: 1e-6,
            fd_step: 1e-6,
        }
    }
}

/// Newton iteration result.
#[derive(Debug, Clone, Copy)]
pub struct NewtonResult {
    /// Last iterate (the root when converged)
    pub root: f64,
    /// Residual at the last iterate
    pub residual: f64,
    /// Number of iterations taken
    pub iterations: usize,
    /// Whether `|residual| < tol` was reached within the iteration cap
    pub converged: bool,
}

/// Iterate `x <- x - f(x) / f'(x)` with `f'` estimated by forward difference.
///
/// Returns with `converged: false` once the iteration cap is exhausted; the
/// caller decides how to report that, since it knows the problem context.
/// A vanishing slope estimate is a hard error.
pub fn newton_solve<F>(x0: f64, mut f: F, config: &NewtonConfig) -> SolverResult<NewtonResult>
where
    F: FnMut(f64) -> SolverResult<f64>,
{
    let mut x = x0;
    let mut residual = f(x)?;

    for iter in 0..config.max_iterations {
        if residual.abs() < config.tol {
            return Ok(NewtonResult {
                root: x,
                residual,
                iterations: iter,
                converged: true,
            });
        }

        let h = config.fd_step * x.abs().max(1.0);
        let slope = (f(x + h)? - residual) / h;
        if !slope.is_finite() || slope.abs() < f64::EPSILON {
            return Err(SolverError::Numeric {
                what: "degenerate finite-difference slope",
            });
        }

        x -= residual / slope;
        if !x.is_finite() {
            return Err(SolverError::Numeric {
                what: "iterate diverged to non-finite value",
            });
        }
        residual = f(x)?;
    }

    Ok(NewtonResult {
        root: x,
        residual,
        iterations: config.max_iterations,
        converged: residual.abs() < config.tol,
    })
}
