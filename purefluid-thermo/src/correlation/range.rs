use uom::si::f64::ThermodynamicTemperature;

use crate::PropertyError;
use crate::units::kelvin;

/// A closed temperature window `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemperatureRange {
    min: ThermodynamicTemperature,
    max: ThermodynamicTemperature,
}

impl TemperatureRange {
    /// Creates a window from its bounds in kelvin.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidInput`] when the lower bound is not
    /// strictly positive, either bound is non-finite, or the window is empty.
    pub fn new(min: f64, max: f64) -> Result<Self, PropertyError> {
        if !min.is_finite() || min <= 0.0 {
            return Err(PropertyError::InvalidInput {
                quantity: "temperature window lower bound",
                value: min,
            });
        }
        if !max.is_finite() {
            return Err(PropertyError::InvalidInput {
                quantity: "temperature window upper bound",
                value: max,
            });
        }
        if max <= min {
            return Err(PropertyError::InvalidInput {
                quantity: "temperature window width (max - min)",
                value: max - min,
            });
        }

        Ok(Self {
            min: kelvin(min),
            max: kelvin(max),
        })
    }

    /// Lower bound of the window.
    #[must_use]
    pub fn min(&self) -> ThermodynamicTemperature {
        self.min
    }

    /// Upper bound of the window.
    #[must_use]
    pub fn max(&self) -> ThermodynamicTemperature {
        self.max
    }

    /// Rejects temperatures outside the window.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] when `temperature` falls
    /// outside `[min, max]`.
    pub fn check(&self, temperature: ThermodynamicTemperature) -> Result<(), PropertyError> {
        if temperature < self.min || temperature > self.max {
            return Err(PropertyError::OutOfRange {
                temperature: temperature.value,
                min: self.min.value,
                max: self.max.value,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_interior_and_boundary_temperatures() {
        let range = TemperatureRange::new(278.0, 1273.0).unwrap();
        assert!(range.check(kelvin(278.0)).is_ok());
        assert!(range.check(kelvin(500.0)).is_ok());
        assert!(range.check(kelvin(1273.0)).is_ok());
    }

    #[test]
    fn rejects_temperatures_outside_the_window() {
        let range = TemperatureRange::new(278.0, 1273.0).unwrap();
        assert!(matches!(
            range.check(kelvin(277.9)),
            Err(PropertyError::OutOfRange { .. })
        ));
        assert!(matches!(
            range.check(kelvin(1273.1)),
            Err(PropertyError::OutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_degenerate_windows() {
        assert!(TemperatureRange::new(0.0, 100.0).is_err());
        assert!(TemperatureRange::new(-10.0, 100.0).is_err());
        assert!(TemperatureRange::new(300.0, 300.0).is_err());
        assert!(TemperatureRange::new(400.0, 300.0).is_err());
        assert!(TemperatureRange::new(f64::NAN, 300.0).is_err());
        assert!(TemperatureRange::new(100.0, f64::INFINITY).is_err());
    }
}
