//! Numerical utilities for the purefluid property engine.
//!
//! Equation-of-state relations are frequently implicit in the variable of
//! interest, and two of the derived quantities are defined as path
//! integrals with no general closed form. This crate provides the two
//! numerical building blocks those calculations need:
//!
//! - [`equation::secant`]: a derivative-free secant root finder that
//!   bootstraps itself from a single seed value.
//! - [`quadrature`]: adaptive Simpson integration with per-interval
//!   error control.
//!
//! Both operate on plain `f64` values. Callers convert typed quantities
//! to and from SI magnitudes at the boundary, and both routines accept
//! fallible callables so that domain violations inside an evaluation
//! abort the computation instead of being silently absorbed.

pub mod equation;
pub mod quadrature;
