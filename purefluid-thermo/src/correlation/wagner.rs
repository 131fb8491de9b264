use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::PropertyError;
use crate::correlation::{Correlation, TemperatureRange};

/// Coefficients of the five-term Wagner vapor pressure form.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Wagner5Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

/// Saturation pressure along the vapor-liquid coexistence curve.
///
/// The five-term Wagner form with exponents (1, 1.5, 2.5, 5):
///
/// ```text
/// ln(Ps / Pc) = (A·τ + B·τ^1.5 + C·τ^2.5 + D·τ^5) / Tr
/// ```
///
/// where `Tr = T / Tc` and `τ = 1 − Tr`. The curve terminates at the
/// critical point, so the validity window may not extend past `Tc`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wagner5 {
    range: TemperatureRange,
    critical_pressure: Pressure,
    critical_temperature: ThermodynamicTemperature,
    coefficients: Wagner5Coefficients,
}

impl Wagner5 {
    /// Creates a saturation pressure correlation.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidInput`] when either critical
    /// property is not strictly positive and finite, or when the validity
    /// window extends above the critical temperature.
    pub fn new(
        range: TemperatureRange,
        critical_pressure: Pressure,
        critical_temperature: ThermodynamicTemperature,
        coefficients: Wagner5Coefficients,
    ) -> Result<Self, PropertyError> {
        if !critical_pressure.value.is_finite() || critical_pressure.value <= 0.0 {
            return Err(PropertyError::InvalidInput {
                quantity: "critical pressure",
                value: critical_pressure.value,
            });
        }
        if !critical_temperature.value.is_finite() || critical_temperature.value <= 0.0 {
            return Err(PropertyError::InvalidInput {
                quantity: "critical temperature",
                value: critical_temperature.value,
            });
        }
        if range.max() > critical_temperature {
            return Err(PropertyError::InvalidInput {
                quantity: "validity window margin (Tc - max)",
                value: critical_temperature.value - range.max().value,
            });
        }

        Ok(Self {
            range,
            critical_pressure,
            critical_temperature,
            coefficients,
        })
    }

    /// The critical pressure anchoring the curve.
    #[must_use]
    pub fn critical_pressure(&self) -> Pressure {
        self.critical_pressure
    }

    /// The critical temperature anchoring the curve.
    #[must_use]
    pub fn critical_temperature(&self) -> ThermodynamicTemperature {
        self.critical_temperature
    }
}

impl Correlation for Wagner5 {
    type Output = Pressure;

    fn range(&self) -> TemperatureRange {
        self.range
    }

    fn form_name(&self) -> &'static str {
        "Wagner-5 saturation pressure"
    }

    fn evaluate_in_range(&self, temperature: ThermodynamicTemperature) -> Pressure {
        let Wagner5Coefficients { a, b, c, d } = self.coefficients;
        let tr = (temperature / self.critical_temperature).value;
        let tau = 1.0 - tr;
        let exponent =
            (a * tau + b * tau.powf(1.5) + c * tau.powf(2.5) + d * tau.powi(5)) / tr;
        self.critical_pressure * exponent.exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::pressure::bar;

    use crate::units::kelvin;

    fn saturation_pressure(
        window: (f64, f64),
        critical: (f64, f64),
        coefficients: [f64; 4],
        temperature: f64,
    ) -> f64 {
        let [a, b, c, d] = coefficients;
        let correlation = Wagner5::new(
            TemperatureRange::new(window.0, window.1).unwrap(),
            Pressure::new::<bar>(critical.0),
            kelvin(critical.1),
            Wagner5Coefficients { a, b, c, d },
        )
        .unwrap();
        correlation.evaluate(kelvin(temperature)).unwrap().get::<bar>()
    }

    fn water() -> Wagner5 {
        Wagner5::new(
            TemperatureRange::new(274.0, 647.096).unwrap(),
            Pressure::new::<bar>(220.64),
            kelvin(647.096),
            Wagner5Coefficients {
                a: -7.870154,
                b: 1.906774,
                c: -2.31033,
                d: -2.06339,
            },
        )
        .unwrap()
    }

    #[test]
    fn matches_literature_saturation_pressures() {
        // GKKR table values for water, ammonia, HCl, chlorine, and nitrogen.
        let cases = [
            (
                (274.0, 647.096),
                (220.64, 647.096),
                [-7.870154, 1.906774, -2.31033, -2.06339],
                393.15,
                1.985883802176223,
            ),
            (
                (196.0, 405.5),
                (113.592, 405.5),
                [-7.303825, 1.649953, -2.021615, -1.960295],
                275.15,
                4.6236939427323245,
            ),
            (
                (134.0, 324.55),
                (82.631, 324.55),
                [-6.454142, 0.934797, -0.636477, -1.704349],
                243.15,
                10.820230411538157,
            ),
            (
                (174.0, 416.958),
                (79.911, 416.958),
                [-6.442452, 1.492841, -1.225096, -2.015398],
                273.15,
                3.6877155101601953,
            ),
            (
                (65.0, 126.192),
                (33.958, 126.192),
                [-6.12368, 1.26061, -0.760446, -1.794726],
                103.15,
                9.61983010063866,
            ),
        ];

        for (window, critical, coefficients, temperature, expected) in cases {
            assert_relative_eq!(
                saturation_pressure(window, critical, coefficients, temperature),
                expected,
                max_relative = 1e-12,
            );
        }
    }

    #[test]
    fn approaches_critical_pressure_at_the_critical_temperature() {
        let near_critical = water().evaluate(kelvin(647.09)).unwrap();
        assert_relative_eq!(near_critical.get::<bar>(), 220.64, max_relative = 1e-3);
    }

    #[test]
    fn rejects_a_window_above_the_critical_temperature() {
        let result = Wagner5::new(
            TemperatureRange::new(274.0, 700.0).unwrap(),
            Pressure::new::<bar>(220.64),
            kelvin(647.096),
            Wagner5Coefficients::default(),
        );
        assert!(matches!(result, Err(PropertyError::InvalidInput { .. })));
    }

    #[test]
    fn rejects_temperatures_outside_the_window() {
        assert!(matches!(
            water().evaluate(kelvin(100.0)),
            Err(PropertyError::OutOfRange { .. })
        ));
        assert!(matches!(
            water().evaluate(kelvin(700.0)),
            Err(PropertyError::OutOfRange { .. })
        ));
    }
}
