mod config;
mod error;
mod solution;

pub use config::Config;
pub use error::Error;
pub use solution::Solution;

use std::error::Error as StdError;

/// Finds a root of `residual` starting from a single seed value.
///
/// The second starting point required by the secant update is produced by
/// perturbing the seed with [`Config::seed_delta`], so callers only need
/// one estimate of the root. Convergence is declared when the step size
/// satisfies `|Δx| ≤ x_abs_tol + x_rel_tol·|x|` or when the residual
/// magnitude drops to [`Config::residual_tol`].
///
/// # Errors
///
/// Returns an error if the config or seed is invalid, if the residual
/// fails or becomes non-finite, if the secant update degenerates (two
/// equal residuals), or if the iteration budget is exhausted.
/// Non-convergence is always a hard error, never a best-effort result.
pub fn solve<F>(mut residual: F, seed: f64, config: &Config) -> Result<Solution, Error>
where
    F: FnMut(f64) -> Result<f64, Box<dyn StdError + Send + Sync>>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if !seed.is_finite() {
        return Err(Error::NonFiniteSeed { value: seed });
    }

    let mut x0 = seed;
    let mut f0 = eval(&mut residual, x0)?;
    if f0.abs() <= config.residual_tol {
        return Ok(Solution {
            root: x0,
            residual: f0,
            iters: 0,
        });
    }

    let mut x1 = if seed == 0.0 {
        config.seed_delta
    } else {
        seed * (1.0 + config.seed_delta)
    };
    let mut f1 = eval(&mut residual, x1)?;

    for iter in 1..=config.max_iters {
        if f1.abs() <= config.residual_tol {
            return Ok(Solution {
                root: x1,
                residual: f1,
                iters: iter,
            });
        }

        let denominator = f1 - f0;
        if denominator == 0.0 {
            return Err(Error::DegenerateUpdate { x: x1, residual: f1 });
        }

        let x2 = x1 - f1 * (x1 - x0) / denominator;
        if !x2.is_finite() {
            return Err(Error::NonFiniteIterate { value: x2 });
        }

        let f2 = eval(&mut residual, x2)?;
        let step = (x2 - x1).abs();
        if step <= config.x_abs_tol + config.x_rel_tol * x2.abs()
            || f2.abs() <= config.residual_tol
        {
            return Ok(Solution {
                root: x2,
                residual: f2,
                iters: iter,
            });
        }

        x0 = x1;
        f0 = f1;
        x1 = x2;
        f1 = f2;
    }

    Err(Error::MaxIters {
        max_iters: config.max_iters,
        x: x1,
        residual: f1,
    })
}

/// Evaluates the residual, surfacing failures and non-finite values.
fn eval<F>(residual: &mut F, x: f64) -> Result<f64, Error>
where
    F: FnMut(f64) -> Result<f64, Box<dyn StdError + Send + Sync>>,
{
    let value = residual(x).map_err(Error::Residual)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteResidual { x, residual: value })
    }
}
