//! Derived performance metrics for a solved cold plate.

use crate::support::units::{TemperatureDifference, ThermalResistance, ThermalResistanceExt};
use uom::si::power::watt;

use super::ThermalSolution;

/// Division of the overall source-to-inlet resistance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResistanceBreakdown {
    /// `(T_cpu - T_in) / Q_total`.
    pub total: ThermalResistance,

    pub contact: ThermalResistance,

    /// Equivalent resistance of the two zone paths in parallel.
    pub parallel: ThermalResistance,

    /// Share of `total` due to the contact resistance.
    pub contact_fraction: f64,

    /// Share of `total` due to the parallel zone paths.
    pub parallel_fraction: f64,
}

impl ResistanceBreakdown {
    pub(super) fn from_solution(solution: &ThermalSolution) -> Option<Self> {
        let heat_load = solution.heat_load();
        if heat_load.get::<watt>() == 0.0 {
            return None;
        }

        let total: ThermalResistance = solution
            .cpu_temperature
            .minus(solution.inlet_temperature)
            / heat_load;
        let contact = solution.contact_resistance;
        let parallel = solution.resistances.parallel();

        let total_k_per_w = total.as_kelvin_per_watt();
        Some(Self {
            total,
            contact,
            parallel,
            contact_fraction: contact.as_kelvin_per_watt() / total_k_per_w,
            parallel_fraction: parallel.as_kelvin_per_watt() / total_k_per_w,
        })
    }
}
