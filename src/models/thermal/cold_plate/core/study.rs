//! A single analysis or calibration run, selected by whether targets are present.

use thiserror::Error;

use super::{
    Calibration, CalibrationConfig, CalibrationError, CalibrationScenario, CalibrationTarget,
    SolveConfig, SolveError, ThermalScenario, ThermalSolution, calibrate::calibrate, solve::solve,
};

/// What to do with a scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Study {
    /// Solve the scenario with its own coefficients.
    Analysis(ThermalScenario),

    /// Calibrate coefficients to the targets, seeded by the scenario's coefficients.
    Calibration(CalibrationScenario),
}

/// Result of running a [`Study`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StudyOutcome {
    Analysis(ThermalSolution),
    Calibration(Calibration),
}

/// Errors that can occur while running a [`Study`].
#[derive(Debug, Error)]
pub enum StudyError {
    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Calibration(#[from] CalibrationError),
}

impl Study {
    /// Returns the scenario being studied.
    #[must_use]
    pub fn scenario(&self) -> &ThermalScenario {
        match self {
            Study::Analysis(scenario) => scenario,
            Study::Calibration(study) => &study.scenario,
        }
    }

    /// Returns the calibration targets, if any.
    #[must_use]
    pub fn target(&self) -> Option<&CalibrationTarget> {
        match self {
            Study::Analysis(_) => None,
            Study::Calibration(study) => Some(&study.target),
        }
    }

    /// Runs the study.
    ///
    /// `calibration` is only consulted for [`Study::Calibration`], and
    /// `forward` only for [`Study::Analysis`].
    ///
    /// # Errors
    ///
    /// Returns [`StudyError`] wrapping the failure of the underlying solve.
    pub fn run(
        &self,
        forward: &SolveConfig,
        calibration: &CalibrationConfig,
    ) -> Result<StudyOutcome, StudyError> {
        match self {
            Study::Analysis(scenario) => Ok(StudyOutcome::Analysis(solve(scenario, forward)?)),
            Study::Calibration(study) => Ok(StudyOutcome::Calibration(calibrate(
                study,
                study.scenario.coefficients,
                calibration,
            )?)),
        }
    }
}

impl StudyOutcome {
    /// Returns the forward solution, re-solved with calibrated coefficients if applicable.
    #[must_use]
    pub fn solution(&self) -> &ThermalSolution {
        match self {
            StudyOutcome::Analysis(solution) => solution,
            StudyOutcome::Calibration(calibration) => &calibration.solution,
        }
    }
}
