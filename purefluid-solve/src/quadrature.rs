//! Adaptive Simpson quadrature.
//!
//! Integrates a fallible scalar function over a finite interval,
//! recursively splitting subintervals until the Richardson error estimate
//! for each falls under its share of the tolerance.

use std::error::Error as StdError;

use thiserror::Error;

/// Configuration for adaptive Simpson integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Absolute tolerance on the integral value.
    pub tolerance: f64,
    /// Maximum recursion depth before giving up on an interval.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tolerance: 1e-8,
            max_depth: 32,
        }
    }
}

impl Config {
    /// Validates that the tolerance is finite and positive.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err("tolerance must be finite and positive");
        }
        Ok(())
    }
}

/// Errors that can occur during integration.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("integration bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("non-finite integrand value {value} at x = {x}")]
    NonFiniteIntegrand { x: f64, value: f64 },

    #[error("failed to evaluate integrand")]
    Integrand(#[source] Box<dyn StdError + Send + Sync>),

    #[error("recursion depth exhausted on [{left}, {right}]")]
    MaxDepth { left: f64, right: f64 },
}

/// A completed integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Value of the integral from the first bound to the second.
    pub value: f64,
    /// Number of integrand evaluations performed.
    pub evaluations: usize,
}

/// Integrates `integrand` over `interval` to the configured tolerance.
///
/// The interval is signed: integrating from a larger bound to a smaller
/// one negates the result, matching the usual convention.
///
/// # Errors
///
/// Returns an error if the config or bounds are invalid, if the integrand
/// fails or produces a non-finite value, or if the recursion depth budget
/// is exhausted before the tolerance is met.
pub fn integrate<F>(mut integrand: F, interval: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: FnMut(f64) -> Result<f64, Box<dyn StdError + Send + Sync>>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let [a, b] = interval;
    if !a.is_finite() {
        return Err(Error::NonFiniteBound { value: a });
    }
    if !b.is_finite() {
        return Err(Error::NonFiniteBound { value: b });
    }

    let mut evaluations = 0;
    #[allow(clippy::float_cmp)]
    if a == b {
        return Ok(Solution {
            value: 0.0,
            evaluations,
        });
    }

    let fa = eval(&mut integrand, a, &mut evaluations)?;
    let fb = eval(&mut integrand, b, &mut evaluations)?;
    let midpoint = 0.5 * (a + b);
    let fm = eval(&mut integrand, midpoint, &mut evaluations)?;
    let whole = simpson(a, b, fa, fm, fb);

    let value = refine(
        &mut integrand,
        a,
        b,
        fa,
        fm,
        fb,
        whole,
        config.tolerance,
        config.max_depth,
        &mut evaluations,
    )?;

    Ok(Solution { value, evaluations })
}

/// Simpson's rule on a single interval given its endpoint and midpoint values.
fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

#[allow(clippy::too_many_arguments)]
fn refine<F>(
    integrand: &mut F,
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
    tolerance: f64,
    depth: usize,
    evaluations: &mut usize,
) -> Result<f64, Error>
where
    F: FnMut(f64) -> Result<f64, Box<dyn StdError + Send + Sync>>,
{
    let midpoint = 0.5 * (a + b);
    let left_mid = 0.5 * (a + midpoint);
    let right_mid = 0.5 * (midpoint + b);
    let flm = eval(integrand, left_mid, evaluations)?;
    let frm = eval(integrand, right_mid, evaluations)?;

    let left = simpson(a, midpoint, fa, flm, fm);
    let right = simpson(midpoint, b, fm, frm, fb);
    let split = left + right;

    // Richardson error estimate for the halved rule.
    if (split - whole).abs() <= 15.0 * tolerance {
        return Ok(split + (split - whole) / 15.0);
    }

    if depth == 0 {
        return Err(Error::MaxDepth { left: a, right: b });
    }

    let half_tolerance = 0.5 * tolerance;
    Ok(refine(
        integrand,
        a,
        midpoint,
        fa,
        flm,
        fm,
        left,
        half_tolerance,
        depth - 1,
        evaluations,
    )? + refine(
        integrand,
        midpoint,
        b,
        fm,
        frm,
        fb,
        right,
        half_tolerance,
        depth - 1,
        evaluations,
    )?)
}

/// Evaluates the integrand, surfacing failures and non-finite values.
fn eval<F>(integrand: &mut F, x: f64, evaluations: &mut usize) -> Result<f64, Error>
where
    F: FnMut(f64) -> Result<f64, Box<dyn StdError + Send + Sync>>,
{
    *evaluations += 1;
    let value = integrand(x).map_err(Error::Integrand)?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteIntegrand { x, value })
    }
}
