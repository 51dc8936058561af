//! Two-zone liquid cold plate models.
//!
//! This module provides [`twine_core::Model`] implementations for a cold plate.
//! The computational core is in the [`core`](self::core) module.

pub mod core;

use twine_core::Model;

use self::core::{
    Calibration, CalibrationConfig, CalibrationError, CalibrationScenario, ColdPlate, SolveConfig,
    SolveError, ThermalScenario, ThermalSolution,
};

/// Forward cold plate model: scenario in, solution out.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColdPlateModel {
    pub config: SolveConfig,
}

impl Model for ColdPlateModel {
    type Input = ThermalScenario;
    type Output = ThermalSolution;
    type Error = SolveError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        ColdPlate::solve(input, &self.config)
    }
}

/// Calibration cold plate model: scenario and targets in, coefficients out.
///
/// The scenario's coefficients seed the search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColdPlateCalibrationModel {
    pub config: CalibrationConfig,
}

impl Model for ColdPlateCalibrationModel {
    type Input = CalibrationScenario;
    type Output = Calibration;
    type Error = CalibrationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        ColdPlate::calibrate(input, input.scenario.coefficients, &self.config)
    }
}
