//! Temperature-dependent property correlations.
//!
//! A [`Correlation`] maps an absolute temperature to a single property
//! inside a declared validity window. Evaluation outside the window is
//! an error, never an extrapolation.

mod aly_lee;
mod ppds;
mod range;
mod wagner;

pub use aly_lee::{AlyLeeCoefficients, AlyLeeCpIdeal};
pub use ppds::{PpdsCoefficients, PpdsCpIdeal};
pub use range::TemperatureRange;
pub use wagner::{Wagner5, Wagner5Coefficients};

use uom::si::f64::ThermodynamicTemperature;

use crate::PropertyError;

/// A property correlation valid over a closed temperature window.
pub trait Correlation {
    /// The property this correlation produces.
    type Output;

    /// The closed temperature window the correlation is fitted over.
    fn range(&self) -> TemperatureRange;

    /// A short name for the functional form, used in diagnostics.
    fn form_name(&self) -> &'static str;

    /// Evaluates the correlation without checking the validity window.
    ///
    /// Callers should prefer [`Correlation::evaluate`]; this is the raw
    /// functional form.
    fn evaluate_in_range(&self, temperature: ThermodynamicTemperature) -> Self::Output;

    /// Evaluates the correlation, rejecting temperatures outside the window.
    fn evaluate(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self::Output, PropertyError> {
        self.range().check(temperature)?;
        Ok(self.evaluate_in_range(temperature))
    }
}
