use thiserror::Error;

/// Errors surfaced by property evaluations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// An input quantity is non-finite or non-positive.
    #[error("invalid {quantity}: {value} (must be strictly positive)")]
    InvalidInput {
        /// Which quantity was rejected.
        quantity: &'static str,
        /// The offending value in SI base units.
        value: f64,
    },

    /// A state or heat-capacity specification is over- or under-determined.
    #[error("ambiguous specification: {0}")]
    AmbiguousSpecification(&'static str),

    /// A temperature falls outside a correlation's validity window.
    #[error("temperature {temperature} K is outside the valid range [{min} K, {max} K]")]
    OutOfRange {
        /// The requested temperature in kelvin.
        temperature: f64,
        /// Lower bound of the validity window in kelvin.
        min: f64,
        /// Upper bound of the validity window in kelvin.
        max: f64,
    },

    /// An iterative inversion failed to converge.
    #[error("solver failed while computing {context}: {reason}")]
    SolverDivergence {
        /// What was being solved for.
        context: &'static str,
        /// The underlying solver failure.
        reason: String,
    },
}
