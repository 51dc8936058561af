//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, power, area).
//! This module provides extensions that are useful for modeling but aren't included in [`uom`].
//!
//! ## Thermal resistance
//!
//! [`ThermalResistance`] (K/W) is the currency of a resistance network.
//! [`uom`] has no unit module for it, so [`ThermalResistanceExt`] provides
//! construction and extraction in kelvin per watt:
//!
//! ```
//! use coldplate_models::support::units::{ThermalResistance, ThermalResistanceExt};
//! use uom::si::{f64::Power, power::watt, temperature_interval::kelvin};
//!
//! let r = ThermalResistance::kelvin_per_watt(0.1414028);
//! let rise = Power::new::<watt>(250.0) * r;
//! assert!((rise.get::<kelvin>() - 35.3507).abs() < 1e-9);
//! ```
//!
//! ## Temperature differences
//!
//! The [`TemperatureDifference`] trait provides a [`minus`](TemperatureDifference::minus) method
//! for subtracting one absolute temperature from another to get a temperature interval.

mod quantities;
mod temperature_difference;

pub use quantities::{ThermalResistance, ThermalResistanceExt};
pub use temperature_difference::TemperatureDifference;
