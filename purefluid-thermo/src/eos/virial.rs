use std::fmt;

use uom::si::f64::{Pressure, ThermodynamicTemperature};

use crate::PropertyError;
use crate::eos::{
    EquationOfState, check_pressure_temperature, check_pressure_volume, check_temperature_volume,
    invert,
};
use crate::units::{
    GAS_CONSTANT, MolarVolume, MolarVolumePerTemperature, PressurePerMolarVolume,
    PressurePerTemperature, cubic_meter_per_mole, kelvin,
};

type CoefficientFn =
    Box<dyn Fn(ThermodynamicTemperature) -> Result<MolarVolume, PropertyError> + Send + Sync>;
type CoefficientSlopeFn = Box<
    dyn Fn(ThermodynamicTemperature) -> Result<MolarVolumePerTemperature, PropertyError>
        + Send
        + Sync,
>;

/// The virial equation of state truncated after the second term.
///
/// Uses the Leiden (volume-series) form:
///
/// ```text
/// P·v = z·R·T,    z = 1 + B(T)/v
/// ```
///
/// The second virial coefficient `B(T)` and its temperature slope are
/// supplied as closures so callers can plug in any correlation; the
/// slope is required because ∂P/∂T depends on it.
pub struct Virial2ndOrder {
    b: CoefficientFn,
    db_dt: CoefficientSlopeFn,
}

impl Virial2ndOrder {
    /// Creates the equation of state from `B(T)` and `dB/dT`.
    #[must_use]
    pub fn new(b: CoefficientFn, db_dt: CoefficientSlopeFn) -> Self {
        Self { b, db_dt }
    }

    /// Creates the equation of state from a temperature-independent
    /// second virial coefficient, whose slope is identically zero.
    #[must_use]
    pub fn with_constant(b: MolarVolume) -> Self {
        Self {
            b: Box::new(move |_| Ok(b)),
            db_dt: Box::new(|_| Ok(MolarVolumePerTemperature::default())),
        }
    }
}

impl fmt::Debug for Virial2ndOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Virial2ndOrder").finish_non_exhaustive()
    }
}

impl EquationOfState for Virial2ndOrder {
    fn pressure(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<Pressure, PropertyError> {
        check_temperature_volume(temperature, molar_volume)?;
        let b = (self.b)(temperature)?;
        let z = 1.0 + (b / molar_volume).value;
        Ok(GAS_CONSTANT * temperature / molar_volume * z)
    }

    fn temperature(
        &self,
        pressure: Pressure,
        molar_volume: MolarVolume,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        check_pressure_volume(pressure, molar_volume)?;
        let seed = (pressure * molar_volume / GAS_CONSTANT).value;
        let root = invert(
            |t| {
                let z = 1.0 + ((self.b)(kelvin(t))? / molar_volume).value;
                Ok(t - seed / z)
            },
            seed,
            "temperature from pressure and molar volume",
        )?;
        Ok(kelvin(root))
    }

    fn molar_volume(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarVolume, PropertyError> {
        check_pressure_temperature(pressure, temperature)?;
        let seed = (GAS_CONSTANT * temperature / pressure).value;
        let b = (self.b)(temperature)?;
        let root = invert(
            |v| Ok(v - seed * (1.0 + (b / cubic_meter_per_mole(v)).value)),
            seed,
            "molar volume from pressure and temperature",
        )?;
        Ok(cubic_meter_per_mole(root))
    }

    fn dp_dt(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<PressurePerTemperature, PropertyError> {
        check_temperature_volume(temperature, molar_volume)?;
        let b = (self.b)(temperature)?;
        let db_dt = (self.db_dt)(temperature)?;

        // Differentiating P = RT/v + RT·B(T)/v² in T leaves the ideal
        // term plus a product-rule pair from T·B(T).
        let ideal = GAS_CONSTANT / molar_volume;
        let residual =
            (GAS_CONSTANT / molar_volume / molar_volume) * (b + db_dt * temperature);
        Ok(ideal + residual)
    }

    fn dp_dv(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<PressurePerMolarVolume, PropertyError> {
        check_temperature_volume(temperature, molar_volume)?;
        let b = (self.b)(temperature)?;
        let rt_vv = GAS_CONSTANT * temperature / molar_volume / molar_volume;
        Ok(-(rt_vv + 2.0 * rt_vv * (b / molar_volume).value))
    }
}
