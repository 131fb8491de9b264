//! Shared fixtures for the integration tests.

use purefluid_thermo::correlation::{
    AlyLeeCoefficients, AlyLeeCpIdeal, TemperatureRange, Wagner5, Wagner5Coefficients,
};
use purefluid_thermo::eos::PengRobinsonPure;
use purefluid_thermo::units::{kelvin, pascal};
use purefluid_thermo::{FluidModel, IdealHeatCapacity};

/// Critical pressure of water [Pa].
pub const WATER_PC: f64 = 2.2064e7;

/// Critical temperature of water [K].
pub const WATER_TC: f64 = 647.096;

/// Acentric factor of water.
pub const WATER_OMEGA: f64 = 0.3443;

/// The Peng-Robinson equation of state for water.
pub fn water_eos() -> PengRobinsonPure {
    PengRobinsonPure::new(pascal(WATER_PC), kelvin(WATER_TC), WATER_OMEGA).unwrap()
}

/// GKKR Aly-Lee ideal-gas cp for water, on a molar basis.
pub fn water_cp_ideal() -> AlyLeeCpIdeal {
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

/// GKKR Wagner saturation pressure curve for water.
pub fn water_saturation() -> Wagner5 {
    Wagner5::new(
        TemperatureRange::new(274.0, WATER_TC).unwrap(),
        pascal(WATER_PC),
        kelvin(WATER_TC),
        Wagner5Coefficients {
            a: -7.870154,
            b: 1.906774,
            c: -2.31033,
            d: -2.06339,
        },
    )
    .unwrap()
}

/// A complete water model: Peng-Robinson plus Aly-Lee cp.
pub fn water_model() -> FluidModel<PengRobinsonPure, AlyLeeCpIdeal> {
    FluidModel::new(water_eos(), IdealHeatCapacity::Isobaric(water_cp_ideal()))
}
