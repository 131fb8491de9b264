//! Molar-basis quantities and unit helpers.
//!
//! Every public API in this crate works on a molar basis: volumes are
//! m³/mol, energies are J/mol, and heat capacities are J/(mol·K). The
//! derivative quantities produced by an equation of state (Pa/K,
//! Pa·mol/m³, and their inverses and cross terms) are given explicit
//! type aliases here so signatures stay readable and dimensionally
//! checked.

use std::marker::PhantomData;

use uom::si::{
    ISQ, Quantity, SI,
    f64::{
        AmountOfSubstance, Energy, Pressure, TemperatureInterval, ThermodynamicTemperature, Volume,
    },
};
use uom::typenum::{N1, N2, N3, N4, P1, P2, P3, P4, P6, Z0};

/// Molar volume, m³/mol in SI.
pub type MolarVolume = Quantity<ISQ<P3, Z0, Z0, Z0, Z0, N1, Z0>, SI<f64>, f64>;

/// Molar energy, J/mol in SI.
pub type MolarEnergy = Quantity<ISQ<P2, P1, N2, Z0, Z0, N1, Z0>, SI<f64>, f64>;

/// Molar heat capacity, J/(mol·K) in SI.
pub type MolarHeatCapacity = Quantity<ISQ<P2, P1, N2, Z0, N1, N1, Z0>, SI<f64>, f64>;

/// Molar gas constant, J/(mol·K) in SI.
pub type MolarGasConstant = MolarHeatCapacity;

/// ∂P/∂T at constant molar volume, Pa/K in SI.
pub type PressurePerTemperature = Quantity<ISQ<N1, P1, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// ∂P/∂v at constant temperature, Pa·mol/m³ in SI.
pub type PressurePerMolarVolume = Quantity<ISQ<N4, P1, N2, Z0, Z0, P1, Z0>, SI<f64>, f64>;

/// ∂²P/∂T² at constant molar volume, Pa/K² in SI.
pub type PressurePerTemperatureSquared = Quantity<ISQ<N1, P1, N2, Z0, N2, Z0, Z0>, SI<f64>, f64>;

/// ∂T/∂P at constant molar volume, K/Pa in SI.
pub type TemperaturePerPressure = Quantity<ISQ<P1, N1, P2, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// ∂T/∂v at constant pressure, K·mol/m³ in SI.
pub type TemperaturePerMolarVolume = Quantity<ISQ<N3, Z0, Z0, Z0, P1, P1, Z0>, SI<f64>, f64>;

/// ∂v/∂T at constant pressure, m³/(mol·K) in SI.
pub type MolarVolumePerTemperature = Quantity<ISQ<P3, Z0, Z0, Z0, N1, N1, Z0>, SI<f64>, f64>;

/// ∂v/∂P at constant temperature, m³/(mol·Pa) in SI.
pub type MolarVolumePerPressure = Quantity<ISQ<P4, N1, P2, Z0, Z0, N1, Z0>, SI<f64>, f64>;

/// Squared molar volume, (m³/mol)² in SI.
///
/// The dimension of the enthalpy-pressure path integral `∫(∂h/∂P)_T dv`,
/// which runs over molar volume rather than pressure.
pub type MolarVolumeSquared = Quantity<ISQ<P6, Z0, Z0, Z0, Z0, N2, Z0>, SI<f64>, f64>;

/// The molar gas constant, 8.3144622 J/(mol·K).
///
/// Defined once and imported by value everywhere; it is never reassigned.
pub const GAS_CONSTANT: MolarGasConstant = Quantity {
    dimension: PhantomData,
    units: PhantomData,
    value: 8.314_462_2,
};

/// An absolute temperature in kelvin.
#[must_use]
pub fn kelvin(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<uom::si::thermodynamic_temperature::kelvin>(value)
}

/// A temperature difference in kelvin.
#[must_use]
pub fn kelvin_interval(value: f64) -> TemperatureInterval {
    TemperatureInterval::new::<uom::si::temperature_interval::kelvin>(value)
}

/// A pressure in pascal.
#[must_use]
pub fn pascal(value: f64) -> Pressure {
    Pressure::new::<uom::si::pressure::pascal>(value)
}

/// A molar volume in m³/mol.
#[must_use]
pub fn cubic_meter_per_mole(value: f64) -> MolarVolume {
    Volume::new::<uom::si::volume::cubic_meter>(value)
        / AmountOfSubstance::new::<uom::si::amount_of_substance::mole>(1.0)
}

/// A molar energy in J/mol.
#[must_use]
pub fn joule_per_mole(value: f64) -> MolarEnergy {
    Energy::new::<uom::si::energy::joule>(value)
        / AmountOfSubstance::new::<uom::si::amount_of_substance::mole>(1.0)
}

/// A molar heat capacity in J/(mol·K).
#[must_use]
pub fn joule_per_mole_kelvin(value: f64) -> MolarHeatCapacity {
    joule_per_mole(value) / kelvin_interval(1.0)
}

/// A squared molar volume in (m³/mol)².
#[must_use]
pub fn squared_cubic_meter_per_mole(value: f64) -> MolarVolumeSquared {
    cubic_meter_per_mole(value) * cubic_meter_per_mole(1.0)
}

/// Converts a temperature-dimensioned quantity to an absolute temperature.
///
/// Algebra on an equation of state produces temperatures with the
/// dimension of a `TemperatureInterval`. The underlying relations yield
/// absolute temperatures, so the conversion is safe.
#[must_use]
pub fn as_absolute_temperature(interval: TemperatureInterval) -> ThermodynamicTemperature {
    kelvin(interval.get::<uom::si::temperature_interval::kelvin>())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn gas_constant_value_in_si() {
        assert_relative_eq!(GAS_CONSTANT.value, 8.3144622);
    }

    #[test]
    fn constructors_store_si_magnitudes() {
        assert_relative_eq!(kelvin(300.0).value, 300.0);
        assert_relative_eq!(pascal(101_325.0).value, 101_325.0);
        assert_relative_eq!(cubic_meter_per_mole(0.002).value, 0.002);
        assert_relative_eq!(joule_per_mole(42.0).value, 42.0);
        assert_relative_eq!(joule_per_mole_kelvin(8.314).value, 8.314);
        assert_relative_eq!(squared_cubic_meter_per_mole(4e-6).value, 4e-6);
    }

    #[test]
    fn ideal_gas_algebra_is_dimensionally_consistent() {
        // P·v and R·T must land on the same dimension (J/mol).
        let energy: MolarEnergy = pascal(1e5) * cubic_meter_per_mole(0.0249);
        let reference: MolarEnergy = GAS_CONSTANT * kelvin(300.0);
        assert_relative_eq!((energy / reference).value, 0.99826, max_relative = 1e-4);
    }

    #[test]
    fn interval_conversion_preserves_kelvin_magnitude() {
        let temperature = as_absolute_temperature(kelvin_interval(450.0));
        assert_relative_eq!(temperature.value, 450.0);
    }
}
