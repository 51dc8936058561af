//! Results types for cold plate solving.

use crate::support::units::ThermalResistance;
use uom::si::f64::{Power, TemperatureInterval, ThermodynamicTemperature};

use super::{
    PathResistances, ResistanceBreakdown, ThermalScenario, Zones,
    network::{Network, Unknowns},
};

/// Converged temperatures and heat flows for one operating point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermalSolution {
    /// Heat source temperature.
    pub cpu_temperature: ThermodynamicTemperature,

    /// Plate surface temperature under the contact resistance.
    pub plate_temperature: ThermodynamicTemperature,

    /// Heat removed through each zone.
    pub heat: Zones<Power>,

    /// Coolant bulk temperature leaving each zone.
    pub bulk_temperature: Zones<ThermodynamicTemperature>,

    /// Coolant-side wall temperature of each zone.
    pub wall_temperature: Zones<ThermodynamicTemperature>,

    /// Coolant temperature entering the porous zone.
    pub inlet_temperature: ThermodynamicTemperature,

    /// Coolant temperature leaving the plate.
    ///
    /// Equal to the outlet zone's bulk temperature.
    pub outlet_temperature: ThermodynamicTemperature,

    /// Total resistance of each zone path, conduction plus convection.
    pub path_resistance: Zones<ThermalResistance>,

    /// Per-zone conduction and convection resistances.
    pub resistances: PathResistances,

    /// Resistance between the heat source and the plate.
    pub contact_resistance: ThermalResistance,

    /// Newton iterations used by the forward solve.
    pub iters: usize,
}

impl ThermalSolution {
    /// Derives the full plate and coolant state from the solved unknowns.
    pub(super) fn assemble(
        scenario: &ThermalScenario,
        resistances: PathResistances,
        network: &Network,
        unknowns: &Unknowns,
        iters: usize,
    ) -> Self {
        let balance = network.balance(unknowns);
        let plate_temperature = balance.plate_temperature;

        let wall_temperature = balance
            .heat
            .zip(resistances.conduction)
            .map(|_, (heat, conduction)| {
                let drop: TemperatureInterval = heat * conduction;
                plate_temperature - drop
            });

        Self {
            cpu_temperature: unknowns.cpu_temperature,
            plate_temperature,
            heat: balance.heat,
            bulk_temperature: balance.bulk_temperature,
            wall_temperature,
            inlet_temperature: scenario.coolant.inlet_temperature(),
            outlet_temperature: balance.bulk_temperature.outlet,
            path_resistance: network.path_resistance,
            resistances,
            contact_resistance: network.contact_resistance,
            iters,
        }
    }

    /// Returns the total heat removed, which equals the scenario's heat load.
    #[must_use]
    pub fn heat_load(&self) -> Power {
        self.heat.porous + self.heat.outlet
    }

    /// Returns how the source-to-inlet resistance divides between contact and zone paths.
    ///
    /// Returns `None` when no heat flows, since the overall resistance is undefined.
    #[must_use]
    pub fn breakdown(&self) -> Option<ResistanceBreakdown> {
        ResistanceBreakdown::from_solution(self)
    }
}
