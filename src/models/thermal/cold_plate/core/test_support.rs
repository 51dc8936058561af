use crate::support::{
    constraint::{Constrained, NonNegative},
    units::{ThermalResistance, ThermalResistanceExt},
};
use uom::si::{
    area::square_meter,
    f64::{
        Area, HeatTransfer, Length, MassRate, Power, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_rate::kilogram_per_second,
    power::watt,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
};

use super::{
    CalibrationScenario, CalibrationTarget, Coolant, Plate, SolveConfig, ThermalScenario, Zones,
    solve::solve,
};

/// Copper plate over a water loop, with coefficients that put the CPU near
/// 346.3 K and send about 240 W through the porous zone.
pub(super) fn golden() -> ThermalScenario {
    ThermalScenario {
        heat_load: Power::new::<watt>(250.0),
        coolant: Coolant::new(
            MassRate::new::<kilogram_per_second>(0.01),
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4181.72),
            ThermodynamicTemperature::new::<kelvin>(300.0),
        )
        .expect("golden coolant is valid"),
        plate: Plate {
            thickness: Length::new::<meter>(0.000_762),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(398.0),
            contact_resistance: contact_resistance(0.141_402_8),
        },
        areas: Zones::new(
            Area::new::<square_meter>(1.27e-4),
            Area::new::<square_meter>(2.91e-4),
        ),
        coefficients: coefficients(1.18e6, 6.99e3),
    }
}

/// Golden scenario with placeholder coefficients and targets it can reach.
pub(super) fn golden_calibration(cpu_temperature: f64, porous_heat: f64) -> CalibrationScenario {
    CalibrationScenario {
        scenario: golden().with_coefficients(coefficients(2.75e4, 1.5e3)),
        target: CalibrationTarget {
            cpu_temperature: ThermodynamicTemperature::new::<kelvin>(cpu_temperature),
            porous_heat: Power::new::<watt>(porous_heat),
        },
    }
}

/// Golden geometry at the given load and flow, targeting the forward solution
/// for `truth` and carrying placeholder coefficients.
pub(super) fn round_trip(
    heat_load: f64,
    m_dot: f64,
    truth: Zones<HeatTransfer>,
) -> CalibrationScenario {
    let base = golden();
    let scenario = ThermalScenario {
        heat_load: Power::new::<watt>(heat_load),
        coolant: Coolant::new(
            MassRate::new::<kilogram_per_second>(m_dot),
            base.coolant.cp(),
            base.coolant.inlet_temperature(),
        )
        .expect("round-trip coolant is valid"),
        coefficients: truth,
        ..base
    };
    let solution = solve(&scenario, &SolveConfig::default()).expect("truth scenario solves");

    CalibrationScenario {
        scenario: scenario.with_coefficients(coefficients(2.75e4, 1.5e3)),
        target: CalibrationTarget {
            cpu_temperature: solution.cpu_temperature,
            porous_heat: solution.heat.porous,
        },
    }
}

pub(super) fn coefficients(porous: f64, outlet: f64) -> Zones<HeatTransfer> {
    Zones::new(
        HeatTransfer::new::<watt_per_square_meter_kelvin>(porous),
        HeatTransfer::new::<watt_per_square_meter_kelvin>(outlet),
    )
}

pub(super) fn contact_resistance(k_per_w: f64) -> Constrained<ThermalResistance, NonNegative> {
    NonNegative::new(ThermalResistance::kelvin_per_watt(k_per_w))
        .expect("contact resistance is non-negative")
}
