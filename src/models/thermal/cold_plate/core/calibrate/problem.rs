//! Problem formulation for coefficient calibration.

use thiserror::Error;
use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{HeatTransfer, Power, TemperatureInterval},
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::units::TemperatureDifference;

use crate::models::thermal::cold_plate::core::{
    CalibrationScenario, CalibrationTarget, SolveConfig, SolveError, ThermalScenario,
    ThermalSolution, Zone, Zones, solve::solve,
};

use super::{CalibrationConfig, Parameterization};

/// A forward solve that failed for a particular set of trial coefficients.
#[derive(Debug, Error)]
#[error("forward solve failed")]
pub(super) struct ForwardFailure {
    pub coefficients: Zones<HeatTransfer>,
    #[source]
    pub source: SolveError,
}

/// A trial coefficient outside the configured bounds.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{zone} zone coefficient out of bounds: {value:?}")]
pub(super) struct CoefficientOutOfDomain {
    pub zone: Zone,
    pub value: HeatTransfer,
}

/// Model adapter that runs a forward solve for trial coefficients.
pub(super) struct CalibrationModel<'a> {
    scenario: &'a ThermalScenario,
    config: &'a SolveConfig,
}

impl<'a> CalibrationModel<'a> {
    pub(super) fn new(scenario: &'a ThermalScenario, config: &'a SolveConfig) -> Self {
        Self { scenario, config }
    }
}

impl Model for CalibrationModel<'_> {
    type Input = Zones<HeatTransfer>;
    type Output = ThermalSolution;
    type Error = ForwardFailure;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let scenario = self.scenario.with_coefficients(*input);
        solve(&scenario, self.config).map_err(|source| ForwardFailure {
            coefficients: *input,
            source,
        })
    }
}

/// Equation problem matching the forward solution to the calibration targets.
///
/// Residuals are the CPU temperature error divided by
/// `max(|target - inlet|, 1 K)` and the porous heat error divided by
/// `max(|heat load|, 1 W)`.
pub(super) struct CalibrationProblem {
    target: CalibrationTarget,
    temperature_scale: TemperatureInterval,
    heat_scale: Power,
    parameterization: Parameterization,
    min_coefficient: HeatTransfer,
    max_coefficient: HeatTransfer,
}

impl CalibrationProblem {
    pub(super) fn new(study: &CalibrationScenario, config: &CalibrationConfig) -> Self {
        let rise = study
            .target
            .cpu_temperature
            .minus(study.scenario.coolant.inlet_temperature())
            .abs();
        let one_kelvin = TemperatureInterval::new::<delta_kelvin>(1.0);
        let load = study.scenario.heat_load.abs();
        let one_watt = Power::new::<watt>(1.0);

        Self {
            target: study.target,
            temperature_scale: if rise > one_kelvin { rise } else { one_kelvin },
            heat_scale: if load > one_watt { load } else { one_watt },
            parameterization: config.parameterization,
            min_coefficient: config.min_coefficient,
            max_coefficient: config.max_coefficient,
        }
    }

    /// Allowed target mismatch for the verification re-solve.
    ///
    /// Each tolerance is the larger of its absolute floor and
    /// `verification_tol` times the matching residual scale.
    pub(super) fn verification_tolerance(
        &self,
        config: &CalibrationConfig,
    ) -> (TemperatureInterval, Power) {
        let temperature = self.temperature_scale * config.verification_tol;
        let heat = self.heat_scale * config.verification_tol;
        (
            larger(temperature, config.temperature_tol),
            larger(heat, config.heat_tol),
        )
    }

    /// Maps coefficients to solver variables.
    pub(super) fn variables(&self, coefficients: Zones<HeatTransfer>) -> [f64; 2] {
        coefficients
            .map(|_, h| self.parameterization.encode(h))
            .to_array()
    }
}

impl EquationProblem<2> for CalibrationProblem {
    type Input = Zones<HeatTransfer>;
    type Output = ThermalSolution;
    type Error = CoefficientOutOfDomain;

    fn input(&self, x: &[f64; 2]) -> Result<Self::Input, Self::Error> {
        Zones::new(x[0], x[1]).try_map(|zone, x| {
            let value = self.parameterization.decode(x);
            if value >= self.min_coefficient && value <= self.max_coefficient {
                Ok(value)
            } else {
                Err(CoefficientOutOfDomain { zone, value })
            }
        })
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 2], Self::Error> {
        let temperature_error = output.cpu_temperature.minus(self.target.cpu_temperature);
        let heat_error = output.heat.porous - self.target.porous_heat;
        Ok([
            (temperature_error / self.temperature_scale).value,
            (heat_error / self.heat_scale).value,
        ])
    }
}

fn larger<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::ThermodynamicTemperature, heat_transfer::watt_per_square_meter_kelvin,
        thermodynamic_temperature::kelvin,
    };

    use crate::models::thermal::cold_plate::core::test_support::golden_calibration;

    #[test]
    fn bounds_are_checked_porous_first() {
        let problem = CalibrationProblem::new(
            &golden_calibration(346.3, 240.0),
            &CalibrationConfig::default(),
        );

        let err = problem
            .input(&[f64::INFINITY, f64::NEG_INFINITY])
            .unwrap_err();
        assert_eq!(err.zone, Zone::Porous);

        let err = problem
            .input(&[10.0_f64.ln(), (1e-3_f64).ln()])
            .unwrap_err();
        assert_eq!(err.zone, Zone::Outlet);
        assert!(err.value.get::<watt_per_square_meter_kelvin>() < 1e-2);
    }

    #[test]
    fn nan_variables_are_out_of_domain() {
        let problem = CalibrationProblem::new(
            &golden_calibration(346.3, 240.0),
            &CalibrationConfig::default(),
        );
        assert!(problem.input(&[f64::NAN, 1.0]).is_err());
    }

    #[test]
    fn verification_tolerance_scales_with_the_residuals() {
        let config = CalibrationConfig::default();

        // A 46.3 K rise keeps the absolute temperature floor; 250 W does not.
        let golden = CalibrationProblem::new(&golden_calibration(346.3, 240.0), &config);
        let (temperature, heat) = golden.verification_tolerance(&config);
        assert_eq!(temperature, config.temperature_tol);
        assert_relative_eq!(heat.get::<watt>(), 2.5e-6, max_relative = 1e-12);

        let mut study = golden_calibration(346.3, 240.0);
        study.scenario.heat_load = Power::new::<watt>(1e6);
        study.target.cpu_temperature = ThermodynamicTemperature::new::<kelvin>(1300.0);
        let loaded = CalibrationProblem::new(&study, &config);
        let (temperature, heat) = loaded.verification_tolerance(&config);
        assert_relative_eq!(
            temperature.get::<delta_kelvin>(),
            1e-5,
            max_relative = 1e-12
        );
        assert_relative_eq!(heat.get::<watt>(), 1e-2, max_relative = 1e-12);
    }

    #[test]
    fn temperature_scale_has_a_one_kelvin_floor() {
        let study = golden_calibration(300.2, 240.0);
        let problem = CalibrationProblem::new(&study, &CalibrationConfig::default());
        assert_eq!(problem.temperature_scale.get::<delta_kelvin>(), 1.0);
    }
}
