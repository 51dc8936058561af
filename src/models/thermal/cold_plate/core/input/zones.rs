use std::fmt;

/// Identifies one of the two parallel heat-removal zones of the cold plate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Zone {
    /// The porous (finned) zone, first along the coolant path.
    Porous,

    /// The outlet zone, downstream of the porous zone.
    Outlet,
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Zone::Porous => f.write_str("porous"),
            Zone::Outlet => f.write_str("outlet"),
        }
    }
}

/// A value for each cold plate zone.
///
/// The coolant visits the zones in order: first [`Zone::Porous`], then
/// [`Zone::Outlet`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Zones<T> {
    /// Value for the porous zone.
    pub porous: T,

    /// Value for the outlet zone.
    pub outlet: T,
}

impl<T> Zones<T> {
    /// Creates a zone pair.
    pub fn new(porous: T, outlet: T) -> Self {
        Self { porous, outlet }
    }

    /// Returns the value for `zone`.
    pub fn get(&self, zone: Zone) -> &T {
        match zone {
            Zone::Porous => &self.porous,
            Zone::Outlet => &self.outlet,
        }
    }

    /// Applies `f` to each zone, in coolant order.
    pub fn map<U>(self, mut f: impl FnMut(Zone, T) -> U) -> Zones<U> {
        Zones {
            porous: f(Zone::Porous, self.porous),
            outlet: f(Zone::Outlet, self.outlet),
        }
    }

    /// Applies a fallible `f` to each zone, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`, porous zone first.
    pub fn try_map<U, E>(self, mut f: impl FnMut(Zone, T) -> Result<U, E>) -> Result<Zones<U>, E> {
        Ok(Zones {
            porous: f(Zone::Porous, self.porous)?,
            outlet: f(Zone::Outlet, self.outlet)?,
        })
    }

    /// Pairs each zone's value with the matching value from `other`.
    pub fn zip<U>(self, other: Zones<U>) -> Zones<(T, U)> {
        Zones {
            porous: (self.porous, other.porous),
            outlet: (self.outlet, other.outlet),
        }
    }
}

impl<T: Copy> Zones<T> {
    /// Returns the values as an array in coolant order.
    pub fn to_array(&self) -> [T; 2] {
        [self.porous, self.outlet]
    }
}
