//! Scalar equation solving.
//!
//! A solver in this module finds `x` such that `f(x) = 0` for a scalar
//! residual function `f`. Each call is a single-shot convergence loop;
//! no state persists between calls.

pub mod secant;
