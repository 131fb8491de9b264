use uom::si::f64::ThermodynamicTemperature;

use crate::correlation::{Correlation, TemperatureRange};
use crate::units::{MolarHeatCapacity, joule_per_mole_kelvin};

/// Coefficients of the Aly-Lee ideal-gas heat capacity form.
///
/// `a`, `b`, and `d` carry J/(mol·K); `c` and `e` carry kelvin.
/// Untabulated coefficients default to zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AlyLeeCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
}

/// Ideal-gas isobaric heat capacity in the Aly-Lee form.
///
/// ```text
/// cp⁰ = A + B·[(C/T) / sinh(C/T)]² + D·[(E/T) / cosh(E/T)]²
/// ```
///
/// As its characteristic temperature goes to zero the sinh ratio
/// approaches one while the cosh ratio approaches zero, so `C = 0`
/// keeps the B term and `E = 0` drops the D term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlyLeeCpIdeal {
    range: TemperatureRange,
    coefficients: AlyLeeCoefficients,
}

impl AlyLeeCpIdeal {
    /// Creates an ideal-gas heat capacity correlation.
    #[must_use]
    pub fn new(range: TemperatureRange, coefficients: AlyLeeCoefficients) -> Self {
        Self {
            range,
            coefficients,
        }
    }
}

impl Correlation for AlyLeeCpIdeal {
    type Output = MolarHeatCapacity;

    fn range(&self) -> TemperatureRange {
        self.range
    }

    fn form_name(&self) -> &'static str {
        "Aly-Lee ideal-gas heat capacity"
    }

    fn evaluate_in_range(&self, temperature: ThermodynamicTemperature) -> MolarHeatCapacity {
        let AlyLeeCoefficients { a, b, c, d, e } = self.coefficients;
        let t = temperature.value;

        // x/sinh(x) is 0/0 at x = 0 with limit 1; x/cosh(x) is 0/1 and
        // needs no guard.
        let c_t = c / t;
        let sinh_ratio = if c_t == 0.0 { 1.0 } else { c_t / c_t.sinh() };
        let e_t = e / t;
        let cosh_ratio = e_t / e_t.cosh();

        joule_per_mole_kelvin(a + b * sinh_ratio.powi(2) + d * cosh_ratio.powi(2))
    }
}
