use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during secant solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("seed is not finite: {value}")]
    NonFiniteSeed { value: f64 },

    #[error("iterate is not finite: {value}")]
    NonFiniteIterate { value: f64 },

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },

    /// Two consecutive residuals were equal, so the next update is undefined.
    #[error("secant update degenerated at x = {x} with residual {residual}")]
    DegenerateUpdate { x: f64, residual: f64 },

    #[error("failed to evaluate residual")]
    Residual(#[source] Box<dyn StdError + Send + Sync>),

    #[error("no convergence after {max_iters} iterations (x = {x}, residual = {residual})")]
    MaxIters {
        max_iters: usize,
        x: f64,
        residual: f64,
    },
}
