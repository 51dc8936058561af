//! Steady-state thermal model of a two-zone liquid cold plate.
//!
//! Heat from a CPU crosses a contact resistance into the plate, then leaves
//! through two parallel paths: a porous (finned) zone and an outlet zone. A
//! single coolant stream passes the porous zone first, so the outlet zone sees
//! coolant that has already been warmed.
//!
//! The forward problem finds the CPU temperature and heat split for known
//! heat transfer coefficients. The calibration problem finds the coefficients
//! that reproduce a measured or simulated CPU temperature and heat split.

mod calibrate;
mod input;
mod metrics;
mod network;
mod resistance;
mod results;
mod solve;
mod study;

#[cfg(test)]
mod test_support;

pub use calibrate::{Calibration, CalibrationConfig, CalibrationError, Parameterization};
pub use input::{
    CalibrationScenario, CalibrationTarget, Coolant, Plate, ThermalScenario, Zone, Zones,
};
pub use metrics::ResistanceBreakdown;
pub use resistance::{Coefficient, Geometry, PathResistances, ResistanceError};
pub use results::ThermalSolution;
pub use solve::{SolveConfig, SolveError};
pub use study::{Study, StudyError, StudyOutcome};

use uom::si::f64::HeatTransfer;

use calibrate::calibrate;
use solve::solve;

/// Entry point for solving and calibrating a cold plate.
pub struct ColdPlate;

impl ColdPlate {
    /// Solves the heat balance for a scenario with known coefficients.
    ///
    /// # Errors
    ///
    /// Returns a [`SolveError`] if the scenario is invalid or the solve does
    /// not converge.
    pub fn solve(
        scenario: &ThermalScenario,
        config: &SolveConfig,
    ) -> Result<ThermalSolution, SolveError> {
        solve(scenario, config)
    }

    /// Finds the zone coefficients that reproduce the calibration targets.
    ///
    /// # Errors
    ///
    /// Returns a [`CalibrationError`] if the guess is invalid, the search
    /// diverges or stalls, or the result fails verification.
    pub fn calibrate(
        study: &CalibrationScenario,
        initial_guess: Zones<HeatTransfer>,
        config: &CalibrationConfig,
    ) -> Result<Calibration, CalibrationError> {
        calibrate(study, initial_guess, config)
    }
}
