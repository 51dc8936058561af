use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

use crate::models::thermal::cold_plate::core::Zone;

/// Errors that can occur while building the resistance network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResistanceError {
    /// A plate thickness or zone area is not strictly positive.
    #[error("invalid geometry: {what} must be strictly positive")]
    InvalidGeometry {
        what: Geometry,
        #[source]
        source: ConstraintError,
    },

    /// A conductivity or heat transfer coefficient is not strictly positive.
    #[error("invalid coefficient: {what} must be strictly positive")]
    InvalidCoefficient {
        what: Coefficient,
        #[source]
        source: ConstraintError,
    },
}

/// Geometric quantities checked by the resistance network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Thickness,
    Area(Zone),
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Geometry::Thickness => f.write_str("plate thickness"),
            Geometry::Area(zone) => write!(f, "{zone} zone area"),
        }
    }
}

/// Transport coefficients checked by the resistance network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coefficient {
    Conductivity,
    HeatTransfer(Zone),
}

impl fmt::Display for Coefficient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coefficient::Conductivity => f.write_str("plate conductivity"),
            Coefficient::HeatTransfer(zone) => write!(f, "{zone} zone heat transfer coefficient"),
        }
    }
}
