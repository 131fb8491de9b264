//! Thermodynamic property modeling for pure fluids.
//!
//! The crate is organized around three layers:
//!
//! - [`eos`]: pressure-explicit equations of state relating pressure,
//!   temperature, and molar volume, with analytic first derivatives and
//!   isothermal path integrals.
//! - [`correlation`]: temperature-dependent correlations for properties
//!   an equation of state cannot supply, each guarded by a validity
//!   window.
//! - [`FluidModel`] and [`FluidState`]: a fluid pairs an equation of
//!   state with an ideal-gas heat capacity correlation; a state fixes
//!   two P-v-T variables and lazily derives the rest.
//!
//! All quantities are molar and statically dimensioned via [`uom`]; the
//! aliases and helpers live in [`units`].

mod error;
mod model;
mod state;

pub mod correlation;
pub mod eos;
pub mod units;

pub use error::PropertyError;
pub use model::{FluidModel, IdealHeatCapacity};
pub use state::{FluidState, StateSpec};
