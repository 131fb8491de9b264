use uom::ConstZero;
use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::PropertyError;
use crate::eos::{
    EquationOfState, check_pressure_temperature, check_pressure_volume, check_temperature_volume,
};
use crate::units::{
    GAS_CONSTANT, MolarEnergy, MolarVolume, MolarVolumeSquared, PressurePerMolarVolume,
    PressurePerTemperature, PressurePerTemperatureSquared, as_absolute_temperature,
};

/// The ideal gas law, `P·v = R·T`.
///
/// Every relation is closed-form, the compressibility factor is exactly
/// one, and the residual terms all vanish. Useful as a baseline and as
/// the seeding model for iterative inversions elsewhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ideal;

impl EquationOfState for Ideal {
    fn pressure(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<Pressure, PropertyError> {
        check_temperature_volume(temperature, molar_volume)?;
        Ok(GAS_CONSTANT * temperature / molar_volume)
    }

    fn temperature(
        &self,
        pressure: Pressure,
        molar_volume: MolarVolume,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        check_pressure_volume(pressure, molar_volume)?;
        Ok(as_absolute_temperature(
            pressure * molar_volume / GAS_CONSTANT,
        ))
    }

    fn molar_volume(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarVolume, PropertyError> {
        check_pressure_temperature(pressure, temperature)?;
        Ok(GAS_CONSTANT * temperature / pressure)
    }

    fn dp_dt(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<PressurePerTemperature, PropertyError> {
        check_temperature_volume(temperature, molar_volume)?;
        Ok(GAS_CONSTANT / molar_volume)
    }

    fn dp_dv(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<PressurePerMolarVolume, PropertyError> {
        check_temperature_volume(temperature, molar_volume)?;
        Ok(-(GAS_CONSTANT * temperature / molar_volume / molar_volume))
    }

    fn compressibility(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<Ratio, PropertyError> {
        check_temperature_volume(temperature, molar_volume)?;
        Ok(Ratio::new::<uom::si::ratio::ratio>(1.0))
    }

    fn d2p_dt2(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<PressurePerTemperatureSquared, PropertyError> {
        check_temperature_volume(temperature, molar_volume)?;
        Ok(PressurePerTemperatureSquared::ZERO)
    }

    fn du_dv(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<Pressure, PropertyError> {
        check_temperature_volume(temperature, molar_volume)?;
        Ok(Pressure::ZERO)
    }

    fn dh_dp(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<MolarVolume, PropertyError> {
        check_temperature_volume(temperature, molar_volume)?;
        Ok(MolarVolume::ZERO)
    }

    fn integrate_du_dv(
        &self,
        temperature: ThermodynamicTemperature,
        from: MolarVolume,
        to: MolarVolume,
    ) -> Result<MolarEnergy, PropertyError> {
        check_temperature_volume(temperature, from)?;
        check_temperature_volume(temperature, to)?;
        Ok(MolarEnergy::ZERO)
    }

    fn integrate_dh_dp(
        &self,
        temperature: ThermodynamicTemperature,
        from: MolarVolume,
        to: MolarVolume,
    ) -> Result<MolarVolumeSquared, PropertyError> {
        check_temperature_volume(temperature, from)?;
        check_temperature_volume(temperature, to)?;
        Ok(MolarVolumeSquared::ZERO)
    }
}
