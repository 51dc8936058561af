//! Calibration of zone heat transfer coefficients against reference results.
//!
//! An outer Newton solve adjusts the two coefficients until the forward
//! solution reproduces a target CPU temperature and porous zone heat. Every
//! outer evaluation runs a complete inner forward solve on a fresh scenario.

mod config;
mod error;
mod problem;

pub use config::{CalibrationConfig, Parameterization};
pub use error::CalibrationError;

use tracing::{debug, warn};
use uom::si::{
    f64::{HeatTransfer, Power, TemperatureInterval},
    heat_transfer::watt_per_square_meter_kelvin,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    newton::{self, Status},
    units::TemperatureDifference,
};

use super::{CalibrationScenario, ThermalSolution, Zones, solve::solve};

use problem::{CalibrationModel, CalibrationProblem, CoefficientOutOfDomain, ForwardFailure};

/// Coefficients that reproduce the calibration targets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    /// Calibrated heat transfer coefficient of each zone.
    pub coefficients: Zones<HeatTransfer>,

    /// Forward solution re-solved with the calibrated coefficients.
    pub solution: ThermalSolution,

    /// Outer Newton iterations performed.
    pub iters: usize,

    /// Scaled residual norm at convergence.
    pub residual: f64,
}

/// Calibrates the zone coefficients of a scenario to its targets.
///
/// The scenario's own coefficients are ignored; `initial_guess` seeds the
/// search. A guess outside the configured bounds is reported as a
/// [`CalibrationError::Divergence`] at iteration zero.
///
/// # Errors
///
/// Returns [`CalibrationError`] if the guess is not positive, if a trial
/// leaves the coefficient bounds, if an inner forward solve fails, if the
/// outer solve does not converge, or if the calibrated coefficients fail
/// verification.
pub(super) fn calibrate(
    study: &CalibrationScenario,
    initial_guess: Zones<HeatTransfer>,
    config: &CalibrationConfig,
) -> Result<Calibration, CalibrationError> {
    config.validate().map_err(CalibrationError::InvalidConfig)?;

    let initial_guess = initial_guess.try_map(|zone, h| {
        StrictlyPositive::new(h)
            .map(Constrained::into_inner)
            .map_err(|source| CalibrationError::InvalidGuess { zone, source })
    })?;

    let model = CalibrationModel::new(&study.scenario, &config.forward);
    let problem = CalibrationProblem::new(study, config);
    let x0 = problem.variables(initial_guess);

    debug!(
        porous_w_per_m2_k = initial_guess.porous.get::<watt_per_square_meter_kelvin>(),
        outlet_w_per_m2_k = initial_guess.outlet.get::<watt_per_square_meter_kelvin>(),
        parameterization = ?config.parameterization,
        "starting calibration"
    );

    let solution = newton::solve(&model, &problem, x0, &config.newton())
        .map_err(from_newton)?;
    let coefficients = solution.snapshot.input;

    if solution.status != Status::Converged {
        warn!(
            status = ?solution.status,
            residual = solution.residual,
            iters = solution.iters,
            "calibration did not converge"
        );
        return Err(CalibrationError::NotConverged {
            status: solution.status,
            residual: solution.residual,
            iters: solution.iters,
            coefficients,
        });
    }

    let verified = verify(study, &problem, coefficients, solution.iters, config)?;

    debug!(
        iters = solution.iters,
        porous_w_per_m2_k = coefficients.porous.get::<watt_per_square_meter_kelvin>(),
        outlet_w_per_m2_k = coefficients.outlet.get::<watt_per_square_meter_kelvin>(),
        "calibration converged"
    );

    Ok(Calibration {
        coefficients,
        solution: verified,
        iters: solution.iters,
        residual: solution.residual,
    })
}

/// Re-solves with the calibrated coefficients and checks both targets.
fn verify(
    study: &CalibrationScenario,
    problem: &CalibrationProblem,
    coefficients: Zones<HeatTransfer>,
    iters: usize,
    config: &CalibrationConfig,
) -> Result<ThermalSolution, CalibrationError> {
    let solution = solve(
        &study.scenario.with_coefficients(coefficients),
        &config.forward,
    )
    .map_err(|source| CalibrationError::Forward {
        coefficients,
        iters,
        source,
    })?;

    let temperature_error: TemperatureInterval = solution
        .cpu_temperature
        .minus(study.target.cpu_temperature);
    let heat_error: Power = solution.heat.porous - study.target.porous_heat;

    let (temperature_tol, heat_tol) = problem.verification_tolerance(config);
    if temperature_error.abs() > temperature_tol || heat_error.abs() > heat_tol {
        warn!(
            temperature_error_k = temperature_error.get::<delta_kelvin>(),
            heat_error_w = heat_error.get::<watt>(),
            "calibrated coefficients failed verification"
        );
        return Err(CalibrationError::Verification {
            coefficients,
            temperature_error,
            heat_error,
        });
    }

    Ok(solution)
}

fn from_newton(err: newton::Error<ForwardFailure, CoefficientOutOfDomain>) -> CalibrationError {
    match err {
        newton::Error::Model {
            iter,
            source: ForwardFailure {
                coefficients,
                source,
            },
        } => CalibrationError::Forward {
            coefficients,
            iters: iter,
            source,
        },
        newton::Error::Problem {
            iter,
            source: CoefficientOutOfDomain { zone, value },
        } => {
            debug!(iter, %zone, "calibration trial left coefficient bounds");
            CalibrationError::Divergence {
                zone,
                value,
                iters: iter,
            }
        }
        newton::Error::NonFiniteResidual { iter, .. } => {
            CalibrationError::NonFiniteResidual { iters: iter }
        }
        newton::Error::SingularJacobian { iter } => {
            CalibrationError::SingularJacobian { iters: iter }
        }
        newton::Error::InvalidConfig(reason) => CalibrationError::InvalidConfig(reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::kelvin;

    use crate::models::thermal::cold_plate::core::{
        SolveConfig, SolveError, Zone,
        test_support::{coefficients, golden, golden_calibration, round_trip},
    };
    use crate::support::constraint::ConstraintError;

    fn placeholder() -> Zones<HeatTransfer> {
        coefficients(2.75e4, 1.5e3)
    }

    fn h(value: HeatTransfer) -> f64 {
        value.get::<watt_per_square_meter_kelvin>()
    }

    #[test]
    fn calibrates_golden_targets_in_log_space() {
        let study = golden_calibration(346.3, 240.0);

        let result = calibrate(&study, placeholder(), &CalibrationConfig::default()).unwrap();

        assert_relative_eq!(
            h(result.coefficients.porous),
            1.187_079e6,
            max_relative = 1e-5
        );
        assert_relative_eq!(h(result.coefficients.outlet), 7_005.81, max_relative = 1e-5);
        assert_relative_eq!(
            result.solution.cpu_temperature.get::<kelvin>(),
            346.3,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            result.solution.heat.porous.get::<watt>(),
            240.0,
            epsilon = 1e-6
        );
        assert!(result.residual <= 1e-9);
    }

    #[test]
    fn calibrates_golden_targets_in_linear_space() {
        let study = golden_calibration(346.3, 240.0);
        let config = CalibrationConfig {
            parameterization: Parameterization::Linear,
            ..CalibrationConfig::default()
        };

        let result = calibrate(&study, placeholder(), &config).unwrap();

        assert_relative_eq!(
            h(result.coefficients.porous),
            1.187_079e6,
            max_relative = 1e-5
        );
        assert_relative_eq!(h(result.coefficients.outlet), 7_005.81, max_relative = 1e-5);
    }

    #[test]
    fn recovers_coefficients_from_a_forward_solution() {
        let truth = solve(&golden(), &SolveConfig::default()).unwrap();
        let study = golden_calibration(
            truth.cpu_temperature.get::<kelvin>(),
            truth.heat.porous.get::<watt>(),
        );

        let result = calibrate(
            &study,
            coefficients(1.0e6, 5.0e3),
            &CalibrationConfig::default(),
        )
        .unwrap();

        assert_relative_eq!(h(result.coefficients.porous), 1.18e6, max_relative = 1e-2);
        assert_relative_eq!(h(result.coefficients.outlet), 6.99e3, max_relative = 1e-2);
    }

    #[test]
    fn recovers_coefficients_at_idle_load() {
        let truth = coefficients(1.18e6, 6.99e3);

        for heat_load in [1.0, 0.5] {
            let study = round_trip(heat_load, 0.01, truth);
            for parameterization in [Parameterization::Logarithmic, Parameterization::Linear] {
                let config = CalibrationConfig {
                    parameterization,
                    ..CalibrationConfig::default()
                };

                let result = calibrate(&study, coefficients(1.1e6, 7.5e3), &config).unwrap();

                assert_relative_eq!(h(result.coefficients.porous), 1.18e6, max_relative = 1e-6);
                assert_relative_eq!(h(result.coefficients.outlet), 6.99e3, max_relative = 1e-6);
            }
        }
    }

    #[test]
    fn verifies_large_loads_relative_to_their_scale() {
        let study = round_trip(1.0e6, 50.0, coefficients(1.18e6, 6.99e3));

        let result = calibrate(
            &study,
            coefficients(1.1e6, 7.5e3),
            &CalibrationConfig::default(),
        )
        .unwrap();

        assert_relative_eq!(h(result.coefficients.porous), 1.18e6, max_relative = 1e-6);
        assert_relative_eq!(h(result.coefficients.outlet), 6.99e3, max_relative = 1e-6);
    }

    #[test]
    fn unreachable_porous_heat_diverges_on_outlet_zone() {
        // More porous heat than the total load needs a negative outlet coefficient.
        let study = golden_calibration(346.3, 260.0);

        let err = calibrate(&study, placeholder(), &CalibrationConfig::default()).unwrap_err();

        let CalibrationError::Divergence { zone, value, .. } = err else {
            panic!("expected divergence, got {err:?}");
        };
        assert_eq!(zone, Zone::Outlet);
        assert!(h(value) < 1e-2);
    }

    #[test]
    fn unreachable_temperature_diverges_on_porous_zone() {
        // Too cool for the contact resistance and coolant rise to allow.
        let study = golden_calibration(320.0, 240.0);

        let err = calibrate(&study, placeholder(), &CalibrationConfig::default()).unwrap_err();

        let CalibrationError::Divergence { zone, value, .. } = err else {
            panic!("expected divergence, got {err:?}");
        };
        assert_eq!(zone, Zone::Porous);
        assert!(h(value) > 1e10);
    }

    #[test]
    fn loose_convergence_fails_verification() {
        let study = golden_calibration(346.3, 240.0);
        let config = CalibrationConfig {
            residual_tol: 1e-2,
            ..CalibrationConfig::default()
        };

        let err = calibrate(&study, placeholder(), &config).unwrap_err();

        assert!(
            matches!(err, CalibrationError::Verification { .. }),
            "expected verification failure, got {err:?}"
        );
    }

    #[test]
    fn rejects_non_positive_guess() {
        let study = golden_calibration(346.3, 240.0);

        let err = calibrate(
            &study,
            coefficients(2.75e4, 0.0),
            &CalibrationConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CalibrationError::InvalidGuess {
                zone: Zone::Outlet,
                source: ConstraintError::Zero,
            }
        ));
    }

    #[test]
    fn guess_outside_bounds_diverges_immediately() {
        let study = golden_calibration(346.3, 240.0);

        let err = calibrate(
            &study,
            coefficients(1e12, 1.5e3),
            &CalibrationConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            CalibrationError::Divergence {
                zone: Zone::Porous,
                iters: 0,
                ..
            }
        ));
    }

    #[test]
    fn exhausted_budget_is_not_converged() {
        let study = golden_calibration(346.3, 240.0);
        let config = CalibrationConfig {
            max_iters: 1,
            ..CalibrationConfig::default()
        };

        let err = calibrate(&study, placeholder(), &config).unwrap_err();

        let CalibrationError::NotConverged { status, iters, .. } = err else {
            panic!("expected non-convergence, got {err:?}");
        };
        assert_eq!(status, Status::MaxIters);
        assert_eq!(iters, 1);
    }

    #[test]
    fn inner_failures_carry_coefficients() {
        let study = golden_calibration(346.3, 240.0);
        let config = CalibrationConfig {
            forward: SolveConfig {
                max_iters: 0,
                ..SolveConfig::default()
            },
            ..CalibrationConfig::default()
        };

        let err = calibrate(&study, placeholder(), &config).unwrap_err();

        let CalibrationError::Forward {
            coefficients: trial,
            iters,
            source,
        } = err
        else {
            panic!("expected forward failure, got {err:?}");
        };
        assert_eq!(iters, 0);
        assert_relative_eq!(h(trial.porous), 2.75e4, max_relative = 1e-12);
        assert!(matches!(source, SolveError::NonConvergence { .. }));
    }

    #[test]
    fn rejects_invalid_config() {
        let study = golden_calibration(346.3, 240.0);
        let config = CalibrationConfig {
            fd_step: 0.0,
            ..CalibrationConfig::default()
        };

        let err = calibrate(&study, placeholder(), &config).unwrap_err();

        assert!(matches!(err, CalibrationError::InvalidConfig(_)));
    }
}
