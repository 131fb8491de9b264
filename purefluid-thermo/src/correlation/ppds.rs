use uom::si::f64::ThermodynamicTemperature;

use crate::correlation::{Correlation, TemperatureRange};
use crate::units::{GAS_CONSTANT, MolarHeatCapacity};

/// Coefficients of the PPDS ideal-gas heat capacity form.
///
/// `a` carries kelvin; the remaining coefficients are dimensionless
/// multipliers on the gas constant. Untabulated coefficients default to
/// zero, truncating the polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PpdsCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
    pub h: f64,
}

/// Ideal-gas isobaric heat capacity in the PPDS form.
///
/// With the reduced variable `y = T / (A + T)`:
///
/// ```text
/// cp⁰/R = B + (C − B)·y²·[1 + (y − 1)·(D + E·y + F·y² + G·y³ + H·y⁴)]
/// ```
///
/// `cp⁰` tends to `B·R` as `T → 0` and to `C·R` as `T → ∞`, so the form
/// interpolates between the two asymptotic heat capacities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PpdsCpIdeal {
    range: TemperatureRange,
    coefficients: PpdsCoefficients,
}

impl PpdsCpIdeal {
    /// Creates an ideal-gas heat capacity correlation.
    #[must_use]
    pub fn new(range: TemperatureRange, coefficients: PpdsCoefficients) -> Self {
        Self {
            range,
            coefficients,
        }
    }
}

impl Correlation for PpdsCpIdeal {
    type Output = MolarHeatCapacity;

    fn range(&self) -> TemperatureRange {
        self.range
    }

    fn form_name(&self) -> &'static str {
        "PPDS ideal-gas heat capacity"
    }

    fn evaluate_in_range(&self, temperature: ThermodynamicTemperature) -> MolarHeatCapacity {
        let PpdsCoefficients {
            a,
            b,
            c,
            d,
            e,
            f,
            g,
            h,
        } = self.coefficients;
        let t = temperature.value;
        let y = t / (a + t);
        let polynomial = d + e * y + f * y.powi(2) + g * y.powi(3) + h * y.powi(4);
        GAS_CONSTANT * (b + (c - b) * y.powi(2) * (1.0 + (y - 1.0) * polynomial))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::PropertyError;
    use crate::units::kelvin;

    fn heat_capacity(window: (f64, f64), coefficients: [f64; 7], temperature: f64) -> f64 {
        let [a, b, c, d, e, f, g] = coefficients;
        let correlation = PpdsCpIdeal::new(
            TemperatureRange::new(window.0, window.1).unwrap(),
            PpdsCoefficients {
                a,
                b,
                c,
                d,
                e,
                f,
                g,
                h: 0.0,
            },
        );
        correlation.evaluate(kelvin(temperature)).unwrap().value
    }

    #[test]
    fn matches_literature_heat_capacities() {
        // GKKR table values for ethane, propane, n-butane, isobutane, and
        // n-pentane, in J/(mol·K).
        let cases = [
            (
                (123.0, 1500.0),
                [
                    903.41135, 4.48148, 11.69046, 8.47923, -77.02151, 122.97656, -74.05999,
                ],
                273.15,
                49.67119879196014,
            ),
            (
                (123.0, 1500.0),
                [
                    1222.85277, 4.63428, 6.17777, -31.84476, -487.58918, 1216.90986, -972.09252,
                ],
                373.15,
                88.54729827040656,
            ),
            (
                (163.0, 1500.0),
                [
                    68.64918, 8.90810, 14.24670, 41.04664, -258.18297, 411.82384, -258.68803,
                ],
                373.15,
                298.11538281803723,
            ),
            (
                (143.0, 1223.0),
                [
                    2084.48334, 5.07542, 7.06198, -264.30218, -47.27861, 2309.95342, -3524.85868,
                ],
                373.15,
                117.04412619799584,
            ),
            (
                (183.0, 1673.0),
                [
                    1074.74180, 8.97762, 11.92509, 31.16797, -592.50351, 1201.64991, -830.32720,
                ],
                323.15,
                128.15298030297484,
            ),
        ];

        for (window, coefficients, temperature, expected) in cases {
            assert_relative_eq!(
                heat_capacity(window, coefficients, temperature),
                expected,
                max_relative = 1e-12,
            );
        }
    }

    #[test]
    fn default_coefficients_truncate_the_polynomial() {
        // With equal asymptotes and the polynomial zeroed out, cp⁰
        // collapses to B·R at every temperature.
        let correlation = PpdsCpIdeal::new(
            TemperatureRange::new(123.0, 1500.0).unwrap(),
            PpdsCoefficients {
                b: 4.48148,
                c: 4.48148,
                ..PpdsCoefficients::default()
            },
        );
        let cp = correlation.evaluate(kelvin(300.0)).unwrap();
        assert_relative_eq!((cp / GAS_CONSTANT).value, 4.48148, max_relative = 1e-12);
    }

    #[test]
    fn rejects_temperatures_outside_the_window() {
        let correlation = PpdsCpIdeal::new(
            TemperatureRange::new(123.0, 1500.0).unwrap(),
            PpdsCoefficients::default(),
        );
        assert!(matches!(
            correlation.evaluate(kelvin(100.0)),
            Err(PropertyError::OutOfRange { .. })
        ));
        assert!(matches!(
            correlation.evaluate(kelvin(1700.0)),
            Err(PropertyError::OutOfRange { .. })
        ));
    }
}
