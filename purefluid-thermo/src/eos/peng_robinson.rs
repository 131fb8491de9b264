use std::marker::PhantomData;

use uom::si::f64::{Pressure, ThermodynamicTemperature};
use uom::si::{ISQ, Quantity, SI};
use uom::typenum::{N1, N2, P1, P5, Z0};

use crate::PropertyError;
use crate::eos::{
    EquationOfState, check_positive, check_pressure_temperature, check_pressure_volume,
    check_temperature_volume, invert,
};
use crate::units::{
    GAS_CONSTANT, MolarVolume, MolarVolumeSquared, PressurePerMolarVolume, PressurePerTemperature,
    PressurePerTemperatureSquared, cubic_meter_per_mole, kelvin, kelvin_interval,
};

/// The attraction parameter `a(T)`, Pa·(m³/mol)² in SI.
type Attraction = Quantity<ISQ<P5, P1, N2, Z0, Z0, N2, Z0>, SI<f64>, f64>;

/// da/dT, Pa·(m³/mol)²/K in SI.
type AttractionSlope = Quantity<ISQ<P5, P1, N2, Z0, N1, N2, Z0>, SI<f64>, f64>;

/// d²a/dT², Pa·(m³/mol)²/K² in SI.
type AttractionCurvature = Quantity<ISQ<P5, P1, N2, Z0, N2, N2, Z0>, SI<f64>, f64>;

fn attraction(value: f64) -> Attraction {
    Quantity {
        dimension: PhantomData,
        units: PhantomData,
        value,
    }
}

/// The Peng-Robinson cubic equation of state for a pure fluid.
///
/// ```text
/// P = R·T/(v − b) − a(T)/[v·(v + b) + b·(v − b)]
///
/// a(T) = Cₐ·[1 + C_α·(1 − √Tr)]²
/// Cₐ   = 0.45724·R²·Tc²/Pc
/// C_α  = 0.37464 + 1.54226·ω − 0.26992·ω²
/// b    = 0.0778·R·Tc/Pc
/// ```
///
/// All three temperature derivatives of `a(T)` are analytic, so the
/// second pressure derivative is exact rather than finite-differenced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PengRobinsonPure {
    critical_pressure: Pressure,
    critical_temperature: ThermodynamicTemperature,
    acentric_factor: f64,
    c_a: Attraction,
    c_alpha: f64,
    covolume: MolarVolume,
}

impl PengRobinsonPure {
    /// Creates the equation of state from the fluid's critical point and
    /// acentric factor.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidInput`] when either critical
    /// property is not strictly positive and finite, or when the
    /// acentric factor is not finite.
    pub fn new(
        critical_pressure: Pressure,
        critical_temperature: ThermodynamicTemperature,
        acentric_factor: f64,
    ) -> Result<Self, PropertyError> {
        check_positive("critical pressure", critical_pressure.value)?;
        check_positive("critical temperature", critical_temperature.value)?;
        if !acentric_factor.is_finite() {
            return Err(PropertyError::InvalidInput {
                quantity: "acentric factor",
                value: acentric_factor,
            });
        }

        let tc = critical_temperature.value;
        let c_alpha =
            0.37464 + 1.54226 * acentric_factor - 0.26992 * acentric_factor.powi(2);
        let c_a = attraction(
            0.45724 * GAS_CONSTANT.value.powi(2) * tc.powi(2) / critical_pressure.value,
        );
        let covolume = GAS_CONSTANT * critical_temperature / critical_pressure * 0.0778;

        Ok(Self {
            critical_pressure,
            critical_temperature,
            acentric_factor,
            c_a,
            c_alpha,
            covolume,
        })
    }

    /// The covolume `b`, the excluded molar volume of the fluid.
    #[must_use]
    pub fn covolume(&self) -> MolarVolume {
        self.covolume
    }

    /// States with `v ≤ b` are outside the domain of the equation.
    fn check_covolume(&self, molar_volume: MolarVolume) -> Result<(), PropertyError> {
        let margin = molar_volume - self.covolume;
        if margin.value <= 0.0 {
            return Err(PropertyError::InvalidInput {
                quantity: "molar volume margin (v - b)",
                value: margin.value,
            });
        }
        Ok(())
    }

    fn reduced_temperature_sqrt(&self, temperature: ThermodynamicTemperature) -> f64 {
        (temperature / self.critical_temperature).value.sqrt()
    }

    fn attraction_at(&self, temperature: ThermodynamicTemperature) -> Attraction {
        let sqrt_tr = self.reduced_temperature_sqrt(temperature);
        self.c_a * (1.0 + self.c_alpha * (1.0 - sqrt_tr)).powi(2)
    }

    fn attraction_slope(&self, temperature: ThermodynamicTemperature) -> AttractionSlope {
        let sqrt_tr = self.reduced_temperature_sqrt(temperature);
        -(self.c_a * (self.c_alpha * sqrt_tr * (1.0 + self.c_alpha * (1.0 - sqrt_tr))))
            / kelvin_interval(temperature.value)
    }

    fn attraction_curvature(&self, temperature: ThermodynamicTemperature) -> AttractionCurvature {
        let sqrt_tr = self.reduced_temperature_sqrt(temperature);
        self.c_a * (0.5 * self.c_alpha * sqrt_tr * (1.0 + self.c_alpha))
            / kelvin_interval(temperature.value)
            / kelvin_interval(temperature.value)
    }

    /// The cubic's denominator `v·(v + b) + b·(v − b)`.
    fn denominator(&self, molar_volume: MolarVolume) -> MolarVolumeSquared {
        let b = self.covolume;
        molar_volume * (molar_volume + b) + b * (molar_volume - b)
    }

    /// The pressure-explicit form on raw SI magnitudes, for use inside
    /// secant residuals where iterates may wander outside the domain.
    fn pressure_raw(&self, temperature: f64, molar_volume: f64) -> f64 {
        let b = self.covolume.value;
        let sqrt_tr = (temperature / self.critical_temperature.value).sqrt();
        let a = self.c_a.value * (1.0 + self.c_alpha * (1.0 - sqrt_tr)).powi(2);
        let denominator = molar_volume * (molar_volume + b) + b * (molar_volume - b);
        GAS_CONSTANT.value * temperature / (molar_volume - b) - a / denominator
    }
}

impl EquationOfState for PengRobinsonPure {
    fn pressure(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<Pressure, PropertyError> {
        check_temperature_volume(temperature, molar_volume)?;
        self.check_covolume(molar_volume)?;
        let repulsion = GAS_CONSTANT * temperature / (molar_volume - self.covolume);
        let cohesion = self.attraction_at(temperature) / self.denominator(molar_volume);
        Ok(repulsion - cohesion)
    }

    fn temperature(
        &self,
        pressure: Pressure,
        molar_volume: MolarVolume,
    ) -> Result<ThermodynamicTemperature, PropertyError> {
        check_pressure_volume(pressure, molar_volume)?;
        self.check_covolume(molar_volume)?;
        let seed = (pressure * molar_volume / GAS_CONSTANT).value;
        let root = invert(
            |t| Ok(self.pressure_raw(t, molar_volume.value) - pressure.value),
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
        let root = invert(
            |v| Ok(self.pressure_raw(temperature.value, v) - pressure.value),
            seed,
            "molar volume from pressure and temperature",
        )?;
        let molar_volume = cubic_meter_per_mole(root);
        if self.check_covolume(molar_volume).is_err() {
            return Err(PropertyError::SolverDivergence {
                context: "molar volume from pressure and temperature",
                reason: format!("converged to v = {root} m³/mol, inside the covolume"),
            });
        }
        Ok(molar_volume)
    }

    fn dp_dt(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<PressurePerTemperature, PropertyError> {
        check_temperature_volume(temperature, molar_volume)?;
        self.check_covolume(molar_volume)?;
        let repulsion = GAS_CONSTANT / (molar_volume - self.covolume);
        let cohesion = self.attraction_slope(temperature) / self.denominator(molar_volume);
        Ok(repulsion - cohesion)
    }

    fn dp_dv(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<PressurePerMolarVolume, PropertyError> {
        check_temperature_volume(temperature, molar_volume)?;
        self.check_covolume(molar_volume)?;
        let margin = molar_volume - self.covolume;
        let denominator = self.denominator(molar_volume);
        let repulsion = GAS_CONSTANT * temperature / margin / margin;
        let cohesion = 2.0 * self.attraction_at(temperature) * (molar_volume + self.covolume)
            / denominator
            / denominator;
        Ok(-repulsion + cohesion)
    }

    fn d2p_dt2(
        &self,
        temperature: ThermodynamicTemperature,
        molar_volume: MolarVolume,
    ) -> Result<PressurePerTemperatureSquared, PropertyError> {
        check_temperature_volume(temperature, molar_volume)?;
        self.check_covolume(molar_volume)?;
        Ok(-(self.attraction_curvature(temperature) / self.denominator(molar_volume)))
    }
}
