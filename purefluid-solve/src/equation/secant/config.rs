/// Configuration for the secant solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of secant updates before giving up.
    pub max_iters: usize,
    /// Absolute step tolerance for convergence.
    pub x_abs_tol: f64,
    /// Relative step tolerance for convergence.
    pub x_rel_tol: f64,
    /// Residual magnitude accepted as converged.
    pub residual_tol: f64,
    /// Relative perturbation applied to the seed to produce the second
    /// starting point. Applied as an absolute offset when the seed is zero.
    pub seed_delta: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
            residual_tol: 1e-12,
            seed_delta: 1e-3,
        }
    }
}

impl Config {
    /// Validates that all tolerances are finite and non-negative and that
    /// the seed perturbation is finite and nonzero.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.x_abs_tol.is_finite() || self.x_abs_tol < 0.0 {
            return Err("x_abs_tol must be finite and non-negative");
        }
        if !self.x_rel_tol.is_finite() || self.x_rel_tol < 0.0 {
            return Err("x_rel_tol must be finite and non-negative");
        }
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err("residual_tol must be finite and non-negative");
        }
        if !self.seed_delta.is_finite() || self.seed_delta == 0.0 {
            return Err("seed_delta must be finite and nonzero");
        }
        Ok(())
    }
}
