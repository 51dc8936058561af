use crate::support::{
    constraint::{Constrained, NonNegative},
    units::ThermalResistance,
};
use uom::si::f64::{Length, ThermalConductivity};

/// Cold plate material, geometry, and its interface to the heat source.
///
/// Thickness and conductivity are checked when the resistance network is
/// built, so an invalid plate surfaces as a resistance error naming the
/// offending quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plate {
    /// Plate thickness between the heat source and the coolant-side walls.
    pub thickness: Length,

    /// Plate thermal conductivity.
    pub conductivity: ThermalConductivity,

    /// Resistance between the heat source and the plate surface.
    pub contact_resistance: Constrained<ThermalResistance, NonNegative>,
}
