/// A converged secant solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// The root estimate.
    pub root: f64,
    /// Residual at the root estimate.
    pub residual: f64,
    /// Number of secant updates performed.
    pub iters: usize,
}
