use std::convert::Infallible;

use thiserror::Error;
use uom::si::f64::{Power, ThermodynamicTemperature};

use crate::support::newton;

use crate::models::thermal::cold_plate::core::ResistanceError;

/// Errors that can occur during a forward solve.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The resistance network could not be built from the scenario.
    #[error("invalid resistance network")]
    Resistance(#[from] ResistanceError),

    /// The heat load or inlet temperature is not a finite number.
    #[error("invalid operating point: {0} must be finite")]
    InvalidOperatingPoint(&'static str),

    /// The Newton solver stopped before the heat balance closed.
    #[error(
        "forward solve did not converge ({status:?}): residual={residual:e} after {iters} iterations"
    )]
    NonConvergence {
        status: newton::Status,

        /// Scaled residual norm at the last iterate.
        residual: f64,

        iters: usize,

        /// CPU temperature at the last iterate.
        cpu_temperature: ThermodynamicTemperature,

        /// Porous zone heat at the last iterate.
        porous_heat: Power,
    },

    /// The Newton solver failed outright.
    #[error("newton solver error")]
    Solver(#[from] newton::Error<Infallible, Infallible>),
}
