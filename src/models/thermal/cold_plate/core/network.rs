//! Heat balance of the two-zone network at a trial operating point.
//!
//! Heat enters through the contact resistance, splits between the porous and
//! outlet zone paths, and is carried away by one coolant stream that passes
//! the porous zone first.

use crate::support::units::{TemperatureDifference, ThermalResistance};
use uom::si::f64::{
    Power, TemperatureInterval, ThermalConductance, ThermodynamicTemperature,
};

use super::{PathResistances, ThermalScenario, Zones};

/// Fixed quantities of the forward heat balance.
#[derive(Debug, Clone, Copy)]
pub(super) struct Network {
    pub heat_load: Power,
    pub inlet_temperature: ThermodynamicTemperature,
    pub capacitance_rate: ThermalConductance,
    pub contact_resistance: ThermalResistance,
    pub path_resistance: Zones<ThermalResistance>,
}

/// The two primary unknowns of the forward problem.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Unknowns {
    pub cpu_temperature: ThermodynamicTemperature,
    pub porous_heat: Power,
}

/// Temperatures and heat flows implied by a set of [`Unknowns`].
#[derive(Debug, Clone, Copy)]
pub(super) struct Balance {
    pub plate_temperature: ThermodynamicTemperature,

    /// Heat split assumed by the unknowns; always sums to the heat load.
    pub heat: Zones<Power>,

    /// Coolant bulk temperature leaving each zone.
    pub bulk_temperature: Zones<ThermodynamicTemperature>,

    /// Heat each path conducts given the plate and bulk temperatures.
    pub conducted_heat: Zones<Power>,
}

impl Network {
    pub(super) fn new(scenario: &ThermalScenario, resistances: &PathResistances) -> Self {
        Self {
            heat_load: scenario.heat_load,
            inlet_temperature: scenario.coolant.inlet_temperature(),
            capacitance_rate: scenario.coolant.capacitance_rate(),
            contact_resistance: scenario.plate.contact_resistance.into_inner(),
            path_resistance: resistances.path(),
        }
    }

    /// Evaluates plate, bulk, and conducted heat for the given unknowns.
    pub(super) fn balance(&self, unknowns: &Unknowns) -> Balance {
        let contact_drop: TemperatureInterval = self.heat_load * self.contact_resistance;
        let plate_temperature = unknowns.cpu_temperature - contact_drop;

        let heat = Zones::new(unknowns.porous_heat, self.heat_load - unknowns.porous_heat);

        let porous_rise: TemperatureInterval = heat.porous / self.capacitance_rate;
        let outlet_rise: TemperatureInterval = heat.outlet / self.capacitance_rate;
        let porous_bulk = self.inlet_temperature + porous_rise;
        let bulk_temperature = Zones::new(porous_bulk, porous_bulk + outlet_rise);

        let conducted_heat = bulk_temperature
            .zip(self.path_resistance)
            .map(|_, (bulk, r)| -> Power { plate_temperature.minus(bulk) / r });

        Balance {
            plate_temperature,
            heat,
            bulk_temperature,
            conducted_heat,
        }
    }

    /// Builds the starting point for the forward solve.
    ///
    /// The CPU temperature assumes all heat crosses the less resistive path
    /// from a coolant already at its outlet temperature. The heat split
    /// weights each path by its conductance.
    pub(super) fn initial_guess(&self) -> Unknowns {
        let coolant_rise: TemperatureInterval = self.heat_load / self.capacitance_rate;
        let outlet_guess = self.inlet_temperature + coolant_rise;

        let path = self.path_resistance;
        let min_path = if path.porous <= path.outlet {
            path.porous
        } else {
            path.outlet
        };
        let source_rise: TemperatureInterval =
            self.heat_load * (self.contact_resistance + min_path);

        let conductance = path.map(|_, r| -> ThermalConductance { r.recip() });
        let porous_weight = (conductance.porous / (conductance.porous + conductance.outlet)).value;

        Unknowns {
            cpu_temperature: outlet_guess + source_rise,
            porous_heat: self.heat_load * porous_weight,
        }
    }
}
