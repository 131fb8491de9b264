//! Equations of state for pure fluids.
//!
//! An [`EquationOfState`] relates pressure, temperature, and molar
//! volume for a single-phase fluid. Implementors provide the
//! pressure-explicit form and its two analytic first derivatives; the
//! remaining derivatives and the energy path integrals follow from
//! those via provided methods, so a new equation of state only has to
//! get five functions right.
//!
//! Implementations should be side-effect free: an equation of state
//! holds fluid parameters and nothing else, so every method call is a
//! pure function of its arguments and those parameters. Methods of an
//! implementation should also avoid calling each other, which keeps the
//! provided-method call graph free of cycles.

mod ideal;
mod peng_robinson;
mod virial;

pub use ideal::Ideal;
pub use peng_robinson::PengRobinsonPure;
pub use virial::Virial2ndOrder;

use std::error::Error as StdError;

use purefluid_solve::{equation::secant, quadrature};
use uom::si::f64::{Pressure, Ratio, ThermodynamicTemperature};

use crate::PropertyError;
use crate::units::{
    GAS_CONSTANT, MolarEnergy, MolarVolume, MolarVolumePerPressure, MolarVolumePerTemperature,
    MolarVolumeSquared, PressurePerMolarVolume, PressurePerTemperature,
    PressurePerTemperatureSquared, TemperaturePerMolarVolume, TemperaturePerPressure,
    cubic_meter_per_mole, joule_per_mole, kelvin, kelvin_interval, squared_cubic_meter_per_mole,
};

/// Relative step for the finite-difference fallback of ∂²P/∂T².
const SECOND_DERIVATIVE_STEP: f64 = 1e-6;

/// A pressure-explicit equation of state for a pure fluid.
///
/// All quantities are molar. Every method validates its inputs and
/// reports failures through [`PropertyError`] rather than panicking.
pub trait EquationOfState {
    /// Pressure at the given temperature and molar volume.
    fn pressure(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<Pressure, PropertyError>;

    /// Temperature at the given pressure and molar volume.
    fn temperature(
        &self,
        pressure: Pressure,
        molar_volume: MolarVolume,
    ) -> Result<ThermodynamicTemperature, PropertyError>;

    /// Molar volume at the given pressure and temperature.
    fn molar_volume(
        &self,
        pressure: Pressure,
        temperature: ThermodynamicTemperature,
    ) -> Result<MolarVolume, PropertyError>;

    /// ∂P/∂T at constant molar volume, from the analytic form.
    fn dp_dt(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<PressurePerTemperature, PropertyError>;

    /// ∂P/∂v at constant temperature, from the analytic form.
    fn dp_dv(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<PressurePerMolarVolume, PropertyError>;

    /// Compressibility factor `z = P·v / (R·T)`.
    fn compressibility(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<Ratio, PropertyError> {
        let pressure = self.pressure(temperature, molar_volume)?;
        Ok(pressure * molar_volume / (GAS_CONSTANT * temperature))
    }

    /// ∂²P/∂T² at constant molar volume.
    ///
    /// The default implementation central-differences [`Self::dp_dt`];
    /// equations of state with a tractable analytic second derivative
    /// should override it.
    fn d2p_dt2(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<PressurePerTemperatureSquared, PropertyError> {
        let step = SECOND_DERIVATIVE_STEP * temperature.value;
        let forward = self.dp_dt(kelvin(temperature.value + step), molar_volume)?;
        let backward = self.dp_dt(kelvin(temperature.value - step), molar_volume)?;
        Ok((forward - backward) / kelvin_interval(2.0 * step))
    }

    /// ∂T/∂P at constant molar volume.
    fn dt_dp(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<TemperaturePerPressure, PropertyError> {
        Ok(1.0 / self.dp_dt(temperature, molar_volume)?)
    }

    /// ∂v/∂P at constant temperature.
    fn dv_dp(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<MolarVolumePerPressure, PropertyError> {
        Ok(1.0 / self.dp_dv(temperature, molar_volume)?)
    }

    /// ∂v/∂T at constant pressure, by the triple product rule.
    fn dv_dt(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<MolarVolumePerTemperature, PropertyError> {
        let dp_dt = self.dp_dt(temperature, molar_volume)?;
        let dp_dv = self.dp_dv(temperature, molar_volume)?;
        Ok(-(dp_dt / dp_dv))
    }

    /// ∂T/∂v at constant pressure, the reciprocal of [`Self::dv_dt`].
    fn dt_dv(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<TemperaturePerMolarVolume, PropertyError> {
        let dp_dt = self.dp_dt(temperature, molar_volume)?;
        let dp_dv = self.dp_dv(temperature, molar_volume)?;
        Ok(-(dp_dv / dp_dt))
    }

    /// ∂u/∂v at constant temperature, `T·(∂P/∂T)ᵥ − P`.
    ///
    /// Derivable from the equation of state alone, unlike ∂u/∂T which
    /// needs heat capacity data. Dimensionally this is a pressure.
    fn du_dv(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<Pressure, PropertyError> {
        let dp_dt = self.dp_dt(temperature, molar_volume)?;
        let pressure = self.pressure(temperature, molar_volume)?;
        Ok(dp_dt * temperature - pressure)
    }

    /// ∂h/∂P at constant temperature, `v − T·(∂v/∂T)ₚ`.
    fn dh_dp(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<MolarVolume, PropertyError> {
        let dv_dt = self.dv_dt(temperature, molar_volume)?;
        Ok(molar_volume - dv_dt * temperature)
    }

    /// Integrates ∂u/∂v along an isotherm between two molar volumes.
    ///
    /// The result is the residual change in internal energy over the
    /// path. The default implementation integrates numerically;
    /// equations of state with a closed-form antiderivative may
    /// override it.
    fn integrate_du_dv(
        &self,
        temperature: ThermodynamicTemperature,
        from: MolarVolume,
        to: MolarVolume,
    ) -> Result<MolarEnergy, PropertyError> {
        let solution = quadrature::integrate(
            |v| {
                self.du_dv(temperature, cubic_meter_per_mole(v))
                    .map(|du_dv| du_dv.value)
                    .map_err(boxed_error)
            },
            [from.value, to.value],
            &quadrature::Config::default(),
        )
        .map_err(|error| quadrature_failure("the isothermal internal energy integral", error))?;
        Ok(joule_per_mole(solution.value))
    }

    /// Integrates ∂h/∂P along an isotherm between two molar volumes.
    ///
    /// The integration variable is molar volume, so the result carries
    /// the dimension of a squared molar volume rather than an energy.
    fn integrate_dh_dp(
        &self,
        temperature: ThermodynamicTemperature,
        from: MolarVolume,
        to: MolarVolume,
    ) -> Result<MolarVolumeSquared, PropertyError> {
        let solution = quadrature::integrate(
            |v| {
                self.dh_dp(temperature, cubic_meter_per_mole(v))
                    .map(|dh_dp| dh_dp.value)
                    .map_err(boxed_error)
            },
            [from.value, to.value],
            &quadrature::Config::default(),
        )
        .map_err(|error| quadrature_failure("the isothermal enthalpy integral", error))?;
        Ok(squared_cubic_meter_per_mole(solution.value))
    }
}

/// Rejects non-finite or non-positive quantity magnitudes.
pub(crate) fn check_positive(quantity: &'static str, value: f64) -> Result<(), PropertyError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(PropertyError::InvalidInput { quantity, value });
    }
    Ok(())
}

pub(crate) fn check_temperature_volume(
    temperature: ThermodynamicTemperature,
    molar_volume: MolarVolume,
) -> Result<(), PropertyError> {
    check_positive("temperature", temperature.value)?;
    check_positive("molar volume", molar_volume.value)
}

pub(crate) fn check_pressure_volume(
    pressure: Pressure,
    molar_volume: MolarVolume,
) -> Result<(), PropertyError> {
    check_positive("pressure", pressure.value)?;
    check_positive("molar volume", molar_volume.value)
}

pub(crate) fn check_pressure_temperature(
    pressure: Pressure,
    temperature: ThermodynamicTemperature,
) -> Result<(), PropertyError> {
    check_positive("pressure", pressure.value)?;
    check_positive("temperature", temperature.value)
}

pub(crate) fn boxed_error(error: PropertyError) -> Box<dyn StdError + Send + Sync> {
    Box::new(error)
}

/// Solves `residual(x) = 0` by the secant method, seeded at `seed`.
///
/// Property errors raised inside the residual pass through unchanged;
/// solver failures are reported as [`PropertyError::SolverDivergence`].
pub(crate) fn invert<F>(
    mut residual: F,
    seed: f64,
    context: &'static str,
) -> Result<f64, PropertyError>
where
    F: FnMut(f64) -> Result<f64, PropertyError>,
{
    let solution = secant::solve(
        |x| residual(x).map_err(boxed_error),
        seed,
        &secant::Config::default(),
    )
    .map_err(|error| match error {
        secant::Error::Residual(source) => match source.downcast::<PropertyError>() {
            Ok(inner) => *inner,
            Err(source) => PropertyError::SolverDivergence {
                context,
                reason: source.to_string(),
            },
        },
        other => PropertyError::SolverDivergence {
            context,
            reason: other.to_string(),
        },
    })?;
    Ok(solution.root)
}

fn quadrature_failure(context: &'static str, error: quadrature::Error) -> PropertyError {
    match error {
        quadrature::Error::Integrand(source) => match source.downcast::<PropertyError>() {
            Ok(inner) => *inner,
            Err(source) => PropertyError::SolverDivergence {
                context,
                reason: source.to_string(),
            },
        },
        other => PropertyError::SolverDivergence {
            context,
            reason: other.to_string(),
        },
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Finite-difference slopes for checking analytic derivatives.

    use super::*;

    pub(crate) fn pressure_slope_in_temperature<E: EquationOfState>(
        eos: &E,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> f64 {
        let step = 1e-6 * temperature.value;
        let forward = eos
            .pressure(kelvin(temperature.value + step), molar_volume)
            .unwrap();
        let backward = eos
            .pressure(kelvin(temperature.value - step), molar_volume)
            .unwrap();
        (forward - backward).value / (2.0 * step)
    }

    pub(crate) fn pressure_slope_in_volume<E: EquationOfState>(
        eos: &E,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> f64 {
        let step = 1e-6 * molar_volume.value;
        let forward = eos
            .pressure(temperature, cubic_meter_per_mole(molar_volume.value + step))
            .unwrap();
        let backward = eos
            .pressure(temperature, cubic_meter_per_mole(molar_volume.value - step))
            .unwrap();
        (forward - backward).value / (2.0 * step)
    }
}
