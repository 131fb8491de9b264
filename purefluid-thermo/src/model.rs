use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::PropertyError;
use crate::correlation::Correlation;
use crate::eos::EquationOfState;
use crate::units::{GAS_CONSTANT, MolarHeatCapacity, MolarVolume};

/// An ideal-gas heat capacity correlation, tagged with which capacity
/// it reports.
///
/// Tabulated data comes in both conventions; exactly one must be given,
/// and the other follows from `cp⁰ = cv⁰ + R`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IdealHeatCapacity<C> {
    /// The correlation reports cp⁰.
    Isobaric(C),
    /// The correlation reports cv⁰.
    Isochoric(C),
}

impl<C> IdealHeatCapacity<C> {
    /// Builds the tagged correlation from a pair of optional inputs.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::AmbiguousSpecification`] unless exactly
    /// one of the two is `Some`.
    pub fn from_options(isobaric: Option<C>, isochoric: Option<C>) -> Result<Self, PropertyError> {
        match (isobaric, isochoric) {
            (Some(cp), None) => Ok(Self::Isobaric(cp)),
            (None, Some(cv)) => Ok(Self::Isochoric(cv)),
            (Some(_), Some(_)) | (None, None) => Err(PropertyError::AmbiguousSpecification(
                "exactly one of cp or cv must be provided",
            )),
        }
    }
}

/// A pure fluid: an equation of state paired with an ideal-gas heat
/// capacity correlation.
///
/// The equation of state carries the P-v-T behavior; the correlation
/// carries the caloric behavior the equation of state cannot provide on
/// its own.
#[derive(Debug, Clone)]
pub struct FluidModel<E, C> {
    eos: E,
    heat_capacity: IdealHeatCapacity<C>,
}

impl<E, C> FluidModel<E, C>
where
    E: EquationOfState,
    C: Correlation<Output = MolarHeatCapacity>,
{
    /// Pairs an equation of state with a heat capacity correlation.
    #[must_use]
    pub fn new(eos: E, heat_capacity: IdealHeatCapacity<C>) -> Self {
        Self { eos, heat_capacity }
    }

    /// The underlying equation of state.
    #[must_use]
    pub fn eos(&self) -> &E {
        &self.eos
    }

    /// Ideal-gas isobaric heat capacity at the given temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] when the temperature falls
    /// outside the correlation's validity window.
    pub fn cp_ideal(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, PropertyError> {
        match &self.heat_capacity {
            IdealHeatCapacity::Isobaric(cp) => cp.evaluate(temperature),
            IdealHeatCapacity::Isochoric(cv) => Ok(cv.evaluate(temperature)? + GAS_CONSTANT),
        }
    }

    /// Ideal-gas isochoric heat capacity at the given temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::OutOfRange`] when the temperature falls
    /// outside the correlation's validity window.
    pub fn cv_ideal(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarHeatCapacity, PropertyError> {
        match &self.heat_capacity {
            IdealHeatCapacity::Isobaric(cp) => Ok(cp.evaluate(temperature)? - GAS_CONSTANT),
            IdealHeatCapacity::Isochoric(cv) => cv.evaluate(temperature),
        }
    }

    /// Pressure at the given temperature and molar volume.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the equation of state.
    pub fn pressure(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<Pressure, PropertyError> {
        self.eos.pressure(temperature, molar_volume)
    }

    /// Temperature at the given pressure and molar volume.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the equation of state.
    pub fn temperature(
        &self,
        pressure: Pressure,
        molar_volume: MolarVolume,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        self.eos.temperature(pressure, molar_volume)
    }

    /// Molar volume at the given pressure and temperature.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the equation of state.
    pub fn molar_volume(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarVolume, PropertyError> {
        self.eos.molar_volume(pressure, temperature)
    }

    /// Compressibility factor at the given temperature and molar volume.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the equation of state.
    pub fn compressibility(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<Ratio, PropertyError> {
        self.eos.compressibility(temperature, molar_volume)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::correlation::{AlyLeeCoefficients, AlyLeeCpIdeal, TemperatureRange};
    use crate::eos::Ideal;
    use crate::units::kelvin;

    // Water: GKKR Aly-Lee coefficients on a molar basis.
    fn water_cp() -> AlyLeeCpIdeal {
        AlyLeeCpIdeal::new(
            TemperatureRange::new(278.0, 1273.0).unwrap(),
            AlyLeeCoefficients {
                a: 33.48475,
                b: 9.27530,
                c: 1218.48,
                d: 20.24142,
                e: 2919.59,
            },
        )
    }

    #[test]
    fn exactly_one_heat_capacity_must_be_given() {
        assert!(IdealHeatCapacity::from_options(Some(water_cp()), None).is_ok());
        assert!(IdealHeatCapacity::from_options(None, Some(water_cp())).is_ok());
        assert!(matches!(
            IdealHeatCapacity::from_options(Some(water_cp()), Some(water_cp())),
            Err(PropertyError::AmbiguousSpecification(_))
        ));
        assert!(matches!(
            IdealHeatCapacity::<AlyLeeCpIdeal>::from_options(None, None),
            Err(PropertyError::AmbiguousSpecification(_))
        ));
    }

    #[test]
    fn heat_capacities_differ_by_the_gas_constant() {
        let model = FluidModel::new(Ideal, IdealHeatCapacity::Isobaric(water_cp()));
        let temperature = kelvin(373.15);

        let cp = model.cp_ideal(temperature).unwrap();
        let cv = model.cv_ideal(temperature).unwrap();
        assert_relative_eq!(cp.value, 34.0639638024998, max_relative = 1e-12);
        assert_relative_eq!((cp - cv).value, 8.3144622, max_relative = 1e-12);
    }

    #[test]
    fn an_isochoric_correlation_is_shifted_the_other_way() {
        // Feeding the same correlation as cv⁰ must shift cp⁰ up by R.
        let model = FluidModel::new(Ideal, IdealHeatCapacity::Isochoric(water_cp()));
        let temperature = kelvin(373.15);

        let cv = model.cv_ideal(temperature).unwrap();
        let cp = model.cp_ideal(temperature).unwrap();
        assert_relative_eq!(cv.value, 34.0639638024998, max_relative = 1e-12);
        assert_relative_eq!(cp.value, 34.0639638024998 + 8.3144622, max_relative = 1e-12);
    }

    #[test]
    fn heat_capacity_range_violations_surface() {
        let model = FluidModel::new(Ideal, IdealHeatCapacity::Isobaric(water_cp()));
        assert!(matches!(
            model.cp_ideal(kelvin(100.0)),
            Err(PropertyError::OutOfRange { .. })
        ));
    }

    #[test]
    fn pvt_queries_delegate_to_the_equation_of_state() {
        let model = FluidModel::new(Ideal, IdealHeatCapacity::Isobaric(water_cp()));
        let temperature = kelvin(373.15);
        let molar_volume = crate::units::cubic_meter_per_mole(0.03);

        let pressure = model.pressure(temperature, molar_volume).unwrap();
        assert_relative_eq!(
            pressure.value,
            8.3144622 * 373.15 / 0.03,
            max_relative = 1e-12,
        );
        assert_relative_eq!(
            model.compressibility(temperature, molar_volume).unwrap().value,
            1.0,
        );
    }
}
