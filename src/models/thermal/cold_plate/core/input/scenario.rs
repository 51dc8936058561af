use uom::si::f64::{Area, HeatTransfer, Power};

use super::{Coolant, Plate, Zones};

/// A complete, immutable description of one cold plate operating point.
///
/// Scenarios are plain values. Variations (sweep points, calibration trials)
/// are new scenarios built with struct update syntax or
/// [`with_coefficients`](Self::with_coefficients), never in-place edits of a
/// shared instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalScenario {
    /// Total heat load entering through the contact resistance.
    pub heat_load: Power,

    /// Coolant stream properties and inlet temperature.
    pub coolant: Coolant,

    /// Plate geometry, material, and contact resistance.
    pub plate: Plate,

    /// Wetted surface area of each zone.
    pub areas: Zones<Area>,

    /// Effective convective heat transfer coefficient of each zone.
    pub coefficients: Zones<HeatTransfer>,
}

impl ThermalScenario {
    /// Returns a copy of this scenario with different heat transfer coefficients.
    #[must_use]
    pub fn with_coefficients(&self, coefficients: Zones<HeatTransfer>) -> Self {
        Self {
            coefficients,
            ..*self
        }
    }
}
