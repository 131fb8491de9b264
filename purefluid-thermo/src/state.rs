use std::sync::OnceLock;

use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::PropertyError;
use crate::eos::{EquationOfState, check_positive};
use crate::units::MolarVolume;

/// Two of the three P-v-T variables, fixing a thermodynamic state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StateSpec {
    PressureTemperature {
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    },
    PressureVolume {
        pressure: Pressure,
        molar_volume: MolarVolume,
    },
    TemperatureVolume {
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    },
}

impl StateSpec {
    /// Fixes a state by pressure and temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidInput`] when either value is not
    /// strictly positive and finite.
    pub fn pressure_temperature(
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<Self, PropertyError> {
        check_positive("pressure", pressure.value)?;
        check_positive("temperature", temperature.value)?;
        Ok(Self::PressureTemperature {
            pressure,
            temperature,
        })
    }

    /// Fixes a state by pressure and molar volume.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidInput`] when either value is not
    /// strictly positive and finite.
    pub fn pressure_volume(
        pressure: Pressure,
        molar_volume: MolarVolume,
    ) -> Result<Self, PropertyError> {
        check_positive("pressure", pressure.value)?;
        check_positive("molar volume", molar_volume.value)?;
        Ok(Self::PressureVolume {
            pressure,
            molar_volume,
        })
    }

    /// Fixes a state by temperature and molar volume.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidInput`] when either value is not
    /// strictly positive and finite.
    pub fn temperature_volume(
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<Self, PropertyError> {
        check_positive("temperature", temperature.value)?;
        check_positive("molar volume", molar_volume.value)?;
        Ok(Self::TemperatureVolume {
            temperature,
            molar_volume,
        })
    }

    /// Builds a specification from a triple of optional variables.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::AmbiguousSpecification`] unless exactly
    /// two of the three are `Some`, and [`PropertyError::InvalidInput`]
    /// when a given value is not strictly positive and finite.
    pub fn from_options(
        pressure: Option<Pressure>,
        temperature: Option<ThermodynamicTemperature>,
        molar_volume: Option<MolarVolume>,
    ) -> Result<Self, PropertyError> {
        match (pressure, temperature, molar_volume) {
            (Some(p), Some(t), None) => Self::pressure_temperature(p, t),
            (Some(p), None, Some(v)) => Self::pressure_volume(p, v),
            (None, Some(t), Some(v)) => Self::temperature_volume(t, v),
            _ => Err(PropertyError::AmbiguousSpecification(
                "a fluid state requires exactly two of pressure, temperature, and molar volume",
            )),
        }
    }
}

/// A thermodynamic state of a fluid under a particular equation of state.
///
/// The two specified variables are available immediately; the third and
/// the compressibility factor are computed on first access and memoized,
/// so repeated reads never repeat an iterative inversion.
#[derive(Debug)]
pub struct FluidState<'a, E: EquationOfState + ?Sized> {
    eos: &'a E,
    spec: StateSpec,
    pressure: OnceLock<Pressure>,
    temperature: OnceLock<ThermodynamicTemperature>,
    molar_volume: OnceLock<MolarVolume>,
    compressibility: OnceLock<Ratio>,
}

impl<'a, E: EquationOfState + ?Sized> FluidState<'a, E> {
    /// Anchors a specification to an equation of state.
    ///
    /// The given variables are seeded into their caches up front, so
    /// accessing them never touches the equation of state.
    #[must_use]
    pub fn new(eos: &'a E, spec: StateSpec) -> Self {
        let pressure = OnceLock::new();
        let temperature = OnceLock::new();
        let molar_volume = OnceLock::new();

        match spec {
            StateSpec::PressureTemperature {
                pressure: p,
                temperature: t,
            } => {
                let _ = pressure.set(p);
                let _ = temperature.set(t);
            }
            StateSpec::PressureVolume {
                pressure: p,
                molar_volume: v,
            } => {
                let _ = pressure.set(p);
                let _ = molar_volume.set(v);
            }
            StateSpec::TemperatureVolume {
                temperature: t,
                molar_volume: v,
            } => {
                let _ = temperature.set(t);
                let _ = molar_volume.set(v);
            }
        }

        Self {
            eos,
            spec,
            pressure,
            temperature,
            molar_volume,
            compressibility: OnceLock::new(),
        }
    }

    /// The specification this state was built from.
    #[must_use]
    pub fn spec(&self) -> StateSpec {
        self.spec
    }

    /// Pressure of the state.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the equation of state when the
    /// pressure has to be computed.
    pub fn pressure(&self) -> Result<Pressure, PropertyError> {
        if let Some(pressure) = self.pressure.get() {
            return Ok(*pressure);
        }
        let computed = match self.spec {
            StateSpec::TemperatureVolume {
                temperature,
                molar_volume,
            } => self.eos.pressure(temperature, molar_volume)?,
            StateSpec::PressureTemperature { pressure, .. }
            | StateSpec::PressureVolume { pressure, .. } => pressure,
        };
        Ok(*self.pressure.get_or_init(|| computed))
    }

    /// Temperature of the state.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the equation of state when the
    /// temperature has to be computed.
    pub fn temperature(&self) -> Result<ThermodynamicTemperature, PropertyError> {
        if let Some(temperature) = self.temperature.get() {
            return Ok(*temperature);
        }
        let computed = match self.spec {
            StateSpec::PressureVolume {
                pressure,
                molar_volume,
            } => self.eos.temperature(pressure, molar_volume)?,
            StateSpec::PressureTemperature { temperature, .. }
            | StateSpec::TemperatureVolume { temperature, .. } => temperature,
        };
        Ok(*self.temperature.get_or_init(|| computed))
    }

    /// Molar volume of the state.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the equation of state when the molar
    /// volume has to be computed.
    pub fn molar_volume(&self) -> Result<MolarVolume, PropertyError> {
        if let Some(molar_volume) = self.molar_volume.get() {
            return Ok(*molar_volume);
        }
        let computed = match self.spec {
            StateSpec::PressureTemperature {
                pressure,
                temperature,
            } => self.eos.molar_volume(pressure, temperature)?,
            StateSpec::PressureVolume { molar_volume, .. }
            | StateSpec::TemperatureVolume { molar_volume, .. } => molar_volume,
        };
        Ok(*self.molar_volume.get_or_init(|| computed))
    }

    /// Compressibility factor of the state.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the equation of state.
    pub fn compressibility(&self) -> Result<Ratio, PropertyError> {
        if let Some(z) = self.compressibility.get() {
            return Ok(*z);
        }
        let temperature = self.temperature()?;
        let molar_volume = self.molar_volume()?;
        let computed = self.eos.compressibility(temperature, molar_volume)?;
        Ok(*self.compressibility.get_or_init(|| computed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};

    use approx::assert_relative_eq;

    use crate::eos::Ideal;
    use crate::units::{
        PressurePerMolarVolume, PressurePerTemperature, cubic_meter_per_mole, kelvin, pascal,
    };

    /// Wraps an equation of state and counts molar volume inversions.
    struct CountingEos {
        inner: Ideal,
        molar_volume_calls: AtomicUsize,
    }

    impl CountingEos {
        fn new() -> Self {
            Self {
                inner: Ideal,
                molar_volume_calls: AtomicUsize::new(0),
            }
        }
    }

    impl EquationOfState for CountingEos {
        fn pressure(
            &self,
            temperature: ThermodynamicTemperature,
            molar_volume: MolarVolume,
        ) -> Result<Pressure, PropertyError> {
            self.inner.pressure(temperature, molar_volume)
        }

        fn temperature(
            &self,
            pressure: Pressure,
            molar_volume: MolarVolume,
        ) -> Result<ThermodynamicTemperature, PropertyError> {
            self.inner.temperature(pressure, molar_volume)
        }

        fn molar_volume(
            &self,
            pressure: Pressure,
            temperature: ThermodynamicTemperature,
        ) -> Result<MolarVolume, PropertyError> {
            self.molar_volume_calls.fetch_add(1, Ordering::SeqCst);
            self.inner.molar_volume(pressure, temperature)
        }

        fn dp_dt(
            &self,
            temperature: ThermodynamicTemperature,
            molar_volume: MolarVolume,
        ) -> Result<PressurePerTemperature, PropertyError> {
            self.inner.dp_dt(temperature, molar_volume)
        }

        fn dp_dv(
            &self,
            temperature: ThermodynamicTemperature,
            molar_volume: MolarVolume,
        ) -> Result<PressurePerMolarVolume, PropertyError> {
            self.inner.dp_dv(temperature, molar_volume)
        }
    }

    #[test]
    fn exactly_two_variables_must_be_given() {
        assert!(StateSpec::from_options(Some(pascal(1e5)), Some(kelvin(300.0)), None).is_ok());
        assert!(matches!(
            StateSpec::from_options(Some(pascal(1e5)), None, None),
            Err(PropertyError::AmbiguousSpecification(_))
        ));
        assert!(matches!(
            StateSpec::from_options(
                Some(pascal(1e5)),
                Some(kelvin(300.0)),
                Some(cubic_meter_per_mole(0.02)),
            ),
            Err(PropertyError::AmbiguousSpecification(_))
        ));
        assert!(matches!(
            StateSpec::from_options(None, None, None),
            Err(PropertyError::AmbiguousSpecification(_))
        ));
    }

    #[test]
    fn specified_values_are_validated() {
        assert!(matches!(
            StateSpec::pressure_temperature(pascal(-1.0), kelvin(300.0)),
            Err(PropertyError::InvalidInput { .. })
        ));
        assert!(matches!(
            StateSpec::temperature_volume(kelvin(300.0), cubic_meter_per_mole(0.0)),
            Err(PropertyError::InvalidInput { .. })
        ));
    }

    #[test]
    fn the_missing_variable_is_derived() {
        let spec = StateSpec::pressure_temperature(pascal(1e5), kelvin(300.0)).unwrap();
        let state = FluidState::new(&Ideal, spec);

        assert_relative_eq!(state.pressure().unwrap().value, 1e5);
        assert_relative_eq!(state.temperature().unwrap().value, 300.0);
        assert_relative_eq!(
            state.molar_volume().unwrap().value,
            8.3144622 * 300.0 / 1e5,
            max_relative = 1e-12,
        );
        assert_relative_eq!(state.compressibility().unwrap().value, 1.0);
    }

    #[test]
    fn each_specification_derives_its_own_missing_variable() {
        let v = cubic_meter_per_mole(8.3144622 * 300.0 / 1e5);

        let from_pv = FluidState::new(
            &Ideal,
            StateSpec::pressure_volume(pascal(1e5), v).unwrap(),
        );
        assert_relative_eq!(from_pv.temperature().unwrap().value, 300.0, max_relative = 1e-12);

        let from_tv = FluidState::new(
            &Ideal,
            StateSpec::temperature_volume(kelvin(300.0), v).unwrap(),
        );
        assert_relative_eq!(from_tv.pressure().unwrap().value, 1e5, max_relative = 1e-12);
    }

    #[test]
    fn the_derived_variable_is_computed_once() {
        let eos = CountingEos::new();
        let spec = StateSpec::pressure_temperature(pascal(100.0), kelvin(450.0)).unwrap();
        let state = FluidState::new(&eos, spec);

        let first = state.molar_volume().unwrap();
        let second = state.molar_volume().unwrap();
        assert_eq!(first, second);
        assert_eq!(eos.molar_volume_calls.load(Ordering::SeqCst), 1);

        // The compressibility reuses the cached volume.
        let _ = state.compressibility().unwrap();
        assert_eq!(eos.molar_volume_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn specified_variables_never_touch_the_equation_of_state() {
        let eos = CountingEos::new();
        let spec = StateSpec::pressure_volume(pascal(1e5), cubic_meter_per_mole(0.02)).unwrap();
        let state = FluidState::new(&eos, spec);

        let _ = state.pressure().unwrap();
        let _ = state.molar_volume().unwrap();
        assert_eq!(eos.molar_volume_calls.load(Ordering::SeqCst), 0);
    }
}
