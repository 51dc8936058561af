use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};
use uom::si::f64::{MassRate, SpecificHeatCapacity, ThermalConductance, ThermodynamicTemperature};

/// The single coolant stream that passes the porous zone, then the outlet zone.
///
/// Mass flow rate and specific heat are guaranteed to be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coolant {
    m_dot: MassRate,
    cp: SpecificHeatCapacity,
    inlet_temperature: ThermodynamicTemperature,
}

impl Coolant {
    /// Constructs a validated coolant stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the mass flow rate or specific heat is not strictly positive.
    pub fn new(
        m_dot: MassRate,
        cp: SpecificHeatCapacity,
        inlet_temperature: ThermodynamicTemperature,
    ) -> ConstraintResult<Self> {
        let m_dot = Constrained::<MassRate, StrictlyPositive>::new(m_dot)?;
        let cp = Constrained::<SpecificHeatCapacity, StrictlyPositive>::new(cp)?;
        Ok(Self::from_constrained(m_dot, cp, inlet_temperature))
    }

    /// Constructs a coolant stream from pre-validated values.
    #[must_use]
    pub fn from_constrained(
        m_dot: Constrained<MassRate, StrictlyPositive>,
        cp: Constrained<SpecificHeatCapacity, StrictlyPositive>,
        inlet_temperature: ThermodynamicTemperature,
    ) -> Self {
        Self {
            m_dot: m_dot.into_inner(),
            cp: cp.into_inner(),
            inlet_temperature,
        }
    }

    /// Returns the coolant mass flow rate.
    #[must_use]
    pub fn m_dot(&self) -> MassRate {
        self.m_dot
    }

    /// Returns the coolant specific heat.
    #[must_use]
    pub fn cp(&self) -> SpecificHeatCapacity {
        self.cp
    }

    /// Returns the coolant temperature entering the porous zone.
    #[must_use]
    pub fn inlet_temperature(&self) -> ThermodynamicTemperature {
        self.inlet_temperature
    }

    /// Returns the stream's capacitance rate, `m_dot * cp`.
    #[must_use]
    pub fn capacitance_rate(&self) -> ThermalConductance {
        self.m_dot * self.cp
    }
}
