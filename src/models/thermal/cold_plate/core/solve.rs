//! Forward solve of the cold plate heat balance.
//!
//! Given fixed heat transfer coefficients, finds the CPU temperature and the
//! heat split between zones such that each zone path conducts exactly the heat
//! assigned to it.

mod config;
mod error;
mod problem;

pub use config::SolveConfig;
pub use error::SolveError;

use tracing::{debug, warn};
use uom::si::{power::watt, thermodynamic_temperature::kelvin};

use crate::support::newton::{self, Status};

use super::{
    PathResistances, ThermalScenario, ThermalSolution,
    network::{Network, Unknowns},
};

use problem::{ForwardModel, ForwardProblem};

/// Solves the forward heat balance for a scenario.
///
/// # Errors
///
/// Returns [`SolveError`] if the scenario is invalid, if the Newton solver
/// fails, or if it stops before the heat balance closes.
pub(super) fn solve(
    scenario: &ThermalScenario,
    config: &SolveConfig,
) -> Result<ThermalSolution, SolveError> {
    let resistances =
        PathResistances::new(&scenario.plate, scenario.areas, scenario.coefficients)?;

    let inlet = scenario.coolant.inlet_temperature();
    if !scenario.heat_load.get::<watt>().is_finite() {
        return Err(SolveError::InvalidOperatingPoint("heat load"));
    }
    if !inlet.get::<kelvin>().is_finite() {
        return Err(SolveError::InvalidOperatingPoint("inlet temperature"));
    }

    let network = Network::new(scenario, &resistances);
    let model = ForwardModel::new(&network);
    let problem = ForwardProblem::new(network.heat_load);
    let guess = network.initial_guess();
    let x0 = ForwardProblem::variables(&guess);
    let floor = problem.rounding_floor(&network, guess.cpu_temperature);

    let solution = newton::solve(&model, &problem, x0, &config.newton(floor))?;

    let Unknowns {
        cpu_temperature,
        porous_heat,
    } = solution.snapshot.input;

    if solution.status != Status::Converged {
        warn!(
            status = ?solution.status,
            residual = solution.residual,
            iters = solution.iters,
            "forward solve did not converge"
        );
        return Err(SolveError::NonConvergence {
            status: solution.status,
            residual: solution.residual,
            iters: solution.iters,
            cpu_temperature,
            porous_heat,
        });
    }

    debug!(
        iters = solution.iters,
        cpu_temperature_k = cpu_temperature.get::<kelvin>(),
        porous_heat_w = porous_heat.get::<watt>(),
        "forward solve converged"
    );

    Ok(ThermalSolution::assemble(
        scenario,
        resistances,
        &network,
        &solution.snapshot.input,
        solution.iters,
    ))
}
