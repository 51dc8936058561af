use uom::si::{
    f64::{HeatTransfer, Power, TemperatureInterval},
    heat_transfer::watt_per_square_meter_kelvin,
    power::watt,
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::newton;

use crate::models::thermal::cold_plate::core::SolveConfig;

/// How heat transfer coefficients map to calibration solver variables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Parameterization {
    /// Solve for `ln(h)`.
    ///
    /// Every trial coefficient is positive, and steps are relative, which
    /// suits coefficients that differ by orders of magnitude between zones.
    #[default]
    Logarithmic,

    /// Solve for `h` in W/(m²·K) directly.
    Linear,
}

impl Parameterization {
    /// Maps a coefficient to its solver variable.
    pub(super) fn encode(self, h: HeatTransfer) -> f64 {
        let value = h.get::<watt_per_square_meter_kelvin>();
        match self {
            Self::Logarithmic => value.ln(),
            Self::Linear => value,
        }
    }

    /// Maps a solver variable back to a coefficient.
    pub(super) fn decode(self, x: f64) -> HeatTransfer {
        let value = match self {
            Self::Logarithmic => x.exp(),
            Self::Linear => x,
        };
        HeatTransfer::new::<watt_per_square_meter_kelvin>(value)
    }
}

/// Solver configuration for coefficient calibration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationConfig {
    /// Maximum outer Newton iterations.
    pub max_iters: usize,

    /// Tolerance on the scaled residual norm.
    ///
    /// The temperature residual is divided by `max(|target - inlet|, 1 K)` and
    /// the heat residual by `max(|heat load|, 1 W)`.
    pub residual_tol: f64,

    /// Relative finite-difference step for the calibration Jacobian.
    pub fd_step: f64,

    /// Mapping from coefficients to solver variables.
    pub parameterization: Parameterization,

    /// Smallest coefficient a trial may reach before the calibration is
    /// declared divergent.
    pub min_coefficient: HeatTransfer,

    /// Largest coefficient a trial may reach before the calibration is
    /// declared divergent.
    pub max_coefficient: HeatTransfer,

    /// Relative target mismatch allowed when re-solving with the calibrated
    /// coefficients.
    ///
    /// Applied to the same scales as the residuals, so large heat loads and
    /// temperature rises are held to the same relative accuracy as small ones.
    pub verification_tol: f64,

    /// Absolute floor on the allowed CPU temperature mismatch.
    pub temperature_tol: TemperatureInterval,

    /// Absolute floor on the allowed porous heat mismatch.
    pub heat_tol: Power,

    /// Configuration of every inner forward solve.
    pub forward: SolveConfig,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            residual_tol: 1e-9,
            fd_step: 1e-6,
            parameterization: Parameterization::default(),
            min_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(1e-2),
            max_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(1e10),
            verification_tol: 1e-8,
            temperature_tol: TemperatureInterval::new::<delta_kelvin>(1e-6),
            heat_tol: Power::new::<watt>(1e-6),
            forward: SolveConfig {
                residual_tol: 1e-12,
                ..SolveConfig::default()
            },
        }
    }
}

impl CalibrationConfig {
    /// Converts this configuration into a Newton solver configuration.
    pub(super) fn newton(&self) -> newton::Config {
        newton::Config {
            max_iters: self.max_iters,
            residual_tol: self.residual_tol,
            fd_step: self.fd_step,
            ..newton::Config::default()
        }
    }

    /// Checks the settings the Newton solver does not see.
    pub(super) fn validate(&self) -> Result<(), &'static str> {
        let min = self.min_coefficient.get::<watt_per_square_meter_kelvin>();
        let max = self.max_coefficient.get::<watt_per_square_meter_kelvin>();
        if !(min > 0.0 && max > min && max.is_finite()) {
            return Err("coefficient bounds must satisfy 0 < min < max < inf");
        }
        let tolerances = [
            self.verification_tol,
            self.temperature_tol.get::<delta_kelvin>(),
            self.heat_tol.get::<watt>(),
        ];
        let valid = |tol: f64| tol >= 0.0 && tol.is_finite();
        if !tolerances.into_iter().all(valid) {
            return Err("verification tolerances must be non-negative and finite");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn parameterizations_invert() {
        let h = HeatTransfer::new::<watt_per_square_meter_kelvin>(7005.8);
        for p in [Parameterization::Logarithmic, Parameterization::Linear] {
            assert_relative_eq!(
                p.decode(p.encode(h)).get::<watt_per_square_meter_kelvin>(),
                7005.8,
                max_relative = 1e-14
            );
        }
        assert_relative_eq!(Parameterization::Logarithmic.encode(h), 7005.8_f64.ln());
    }

    #[test]
    fn default_is_valid_and_logarithmic() {
        let config = CalibrationConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.parameterization, Parameterization::Logarithmic);
    }

    #[test]
    fn rejects_negative_verification_tolerance() {
        let config = CalibrationConfig {
            verification_tol: -1e-8,
            ..CalibrationConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_inverted_bounds() {
        let config = CalibrationConfig {
            min_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(1e6),
            max_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(1e3),
            ..CalibrationConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
