use uom::si::f64::{Power, ThermodynamicTemperature};

use super::ThermalScenario;

/// Reference results the calibrated model must reproduce.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationTarget {
    /// Target heat source temperature.
    pub cpu_temperature: ThermodynamicTemperature,

    /// Target heat flow through the porous zone.
    pub porous_heat: Power,
}

/// A scenario paired with the targets it must be calibrated against.
///
/// The scenario's coefficients are placeholders: they seed the calibration
/// when no other initial guess is supplied and are otherwise ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationScenario {
    pub scenario: ThermalScenario,
    pub target: CalibrationTarget,
}
