//! Problem formulation for the forward heat balance.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Power, TemperatureInterval, ThermodynamicTemperature},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::models::thermal::cold_plate::core::network::{Balance, Network, Unknowns};

/// Headroom over the estimated rounding error of one residual evaluation.
const ROUNDING_MARGIN: f64 = 4.0;

/// Model adapter exposing the network heat balance to the Newton solver.
pub(super) struct ForwardModel<'a> {
    network: &'a Network,
}

impl<'a> ForwardModel<'a> {
    pub(super) fn new(network: &'a Network) -> Self {
        Self { network }
    }
}

impl Model for ForwardModel<'_> {
    type Input = Unknowns;
    type Output = Balance;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.network.balance(input))
    }
}

/// Equation problem for the forward heat balance.
///
/// Solver variables are the CPU temperature in kelvin and the porous zone heat
/// in watts. Each residual is the assumed zone heat minus the heat its path
/// conducts, divided by `max(|heat load|, 1 W)`.
pub(super) struct ForwardProblem {
    heat_scale: Power,
}

impl ForwardProblem {
    pub(super) fn new(heat_load: Power) -> Self {
        let floor = Power::new::<watt>(1.0);
        let magnitude = heat_load.abs();
        Self {
            heat_scale: if magnitude > floor { magnitude } else { floor },
        }
    }

    /// Smallest residual norm the heat balance resolves near `temperature`.
    ///
    /// Conducted heat divides a difference of absolute temperatures by a path
    /// resistance, so each path carries about `ε·|T|` of temperature rounding
    /// times its conductance. Low heat loads over large temperatures can sit
    /// below a fixed tolerance.
    pub(super) fn rounding_floor(
        &self,
        network: &Network,
        temperature: ThermodynamicTemperature,
    ) -> f64 {
        let magnitude = temperature.get::<kelvin>().abs();
        let rounding = TemperatureInterval::new::<delta_kelvin>(f64::EPSILON * magnitude);
        let noise = network.path_resistance.map(|_, r| -> Power { rounding / r });
        let norm = noise.porous.value.hypot(noise.outlet.value);
        ROUNDING_MARGIN * norm / self.heat_scale.value
    }

    /// Maps unknowns to solver variables.
    pub(super) fn variables(unknowns: &Unknowns) -> [f64; 2] {
        [
            unknowns.cpu_temperature.get::<kelvin>(),
            unknowns.porous_heat.get::<watt>(),
        ]
    }
}

impl EquationProblem<2> for ForwardProblem {
    type Input = Unknowns;
    type Output = Balance;
    type Error = Infallible;

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        Ok(Unknowns {
            cpu_temperature: ThermodynamicTemperature::new::<kelvin>(x[0]),
            porous_heat: Power::new::<watt>(x[1]),
        })
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 2], Self::Error> {
        let imbalance = output
            .heat
            .zip(output.conducted_heat)
            .map(|_, (assumed, conducted)| (assumed - conducted) / self.heat_scale);
        Ok([imbalance.porous.value, imbalance.outlet.value])
    }
}
