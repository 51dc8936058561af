//! Per-zone thermal resistances between the plate surface and the coolant.
//!
//! Each zone is a series pair: conduction through the plate, then convection
//! into the coolant. The two zone paths act in parallel.

mod error;

pub use error::{Coefficient, Geometry, ResistanceError};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    units::ThermalResistance,
};
use uom::si::f64::{Area, HeatTransfer};

use super::{Plate, Zones};

/// Conduction and convection resistances for each zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathResistances {
    /// Plate conduction resistance, `thickness / (conductivity * area)`.
    pub conduction: Zones<ThermalResistance>,

    /// Convective resistance, `1 / (h * area)`.
    pub convection: Zones<ThermalResistance>,
}

impl PathResistances {
    /// Builds the resistance network for a plate with the given zone areas and coefficients.
    ///
    /// Geometry is checked before coefficients, and within each group the
    /// porous zone is checked first.
    ///
    /// # Errors
    ///
    /// Returns [`ResistanceError::InvalidGeometry`] if the thickness or an area
    /// is not strictly positive, and [`ResistanceError::InvalidCoefficient`] if
    /// the conductivity or a heat transfer coefficient is not strictly positive.
    pub fn new(
        plate: &Plate,
        areas: Zones<Area>,
        coefficients: Zones<HeatTransfer>,
    ) -> Result<Self, ResistanceError> {
        let thickness = StrictlyPositive::new(plate.thickness)
            .map_err(|source| ResistanceError::InvalidGeometry {
                what: Geometry::Thickness,
                source,
            })?
            .into_inner();

        let areas = areas.try_map(|zone, area| {
            StrictlyPositive::new(area)
                .map(Constrained::into_inner)
                .map_err(|source| ResistanceError::InvalidGeometry {
                    what: Geometry::Area(zone),
                    source,
                })
        })?;

        let conductivity = StrictlyPositive::new(plate.conductivity)
            .map_err(|source| ResistanceError::InvalidCoefficient {
                what: Coefficient::Conductivity,
                source,
            })?
            .into_inner();

        let coefficients = coefficients.try_map(|zone, h| {
            StrictlyPositive::new(h)
                .map(Constrained::into_inner)
                .map_err(|source| ResistanceError::InvalidCoefficient {
                    what: Coefficient::HeatTransfer(zone),
                    source,
                })
        })?;

        let conduction =
            areas.map(|_, area| -> ThermalResistance { thickness / (conductivity * area) });
        let convection = areas
            .zip(coefficients)
            .map(|_, (area, h)| -> ThermalResistance { (h * area).recip() });

        Ok(Self {
            conduction,
            convection,
        })
    }

    /// Returns the total resistance of each zone path, conduction plus convection.
    #[must_use]
    pub fn path(&self) -> Zones<ThermalResistance> {
        self.conduction
            .zip(self.convection)
            .map(|_, (conduction, convection)| conduction + convection)
    }

    /// Returns the equivalent resistance of the two zone paths in parallel.
    #[must_use]
    pub fn parallel(&self) -> ThermalResistance {
        let path = self.path();
        (path.porous.recip() + path.outlet.recip()).recip()
    }
}
