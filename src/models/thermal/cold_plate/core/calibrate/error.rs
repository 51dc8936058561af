use thiserror::Error;
use uom::si::f64::{HeatTransfer, Power, TemperatureInterval};

use crate::support::{constraint::ConstraintError, newton::Status};

use crate::models::thermal::cold_plate::core::{SolveError, Zone, Zones};

/// Errors that can occur while calibrating heat transfer coefficients.
#[derive(Debug, Error)]
pub enum CalibrationError {
    /// An initial coefficient guess is not strictly positive.
    #[error("invalid initial guess: {zone} zone coefficient must be strictly positive")]
    InvalidGuess {
        zone: Zone,
        #[source]
        source: ConstraintError,
    },

    /// A trial coefficient left the configured bounds.
    ///
    /// Usually means no positive coefficients reproduce the targets. Together
    /// with [`NotConverged`](Self::NotConverged),
    /// [`SingularJacobian`](Self::SingularJacobian), and
    /// [`NonFiniteResidual`](Self::NonFiniteResidual) it covers every way the
    /// outer solve can fail to reach physical coefficients; the other variants
    /// report bad input or a failed inner solve.
    #[error("calibration diverged at iteration {iters}: {zone} zone coefficient reached {value:?}")]
    Divergence {
        zone: Zone,
        value: HeatTransfer,
        iters: usize,
    },

    /// An inner forward solve failed.
    #[error("forward solve failed at iteration {iters} for coefficients {coefficients:?}")]
    Forward {
        coefficients: Zones<HeatTransfer>,
        iters: usize,
        #[source]
        source: SolveError,
    },

    /// The outer solver stopped before the targets were matched.
    #[error(
        "calibration did not converge ({status:?}): residual={residual:e} after {iters} iterations"
    )]
    NotConverged {
        status: Status,
        residual: f64,
        iters: usize,

        /// Coefficients at the last iterate.
        coefficients: Zones<HeatTransfer>,
    },

    /// Re-solving with the calibrated coefficients misses the targets.
    #[error(
        "calibrated coefficients miss targets: cpu temperature off by {temperature_error:?}, porous heat off by {heat_error:?}"
    )]
    Verification {
        coefficients: Zones<HeatTransfer>,
        temperature_error: TemperatureInterval,
        heat_error: Power,
    },

    /// The calibration Jacobian could not be inverted.
    #[error("singular calibration jacobian at iteration {iters}")]
    SingularJacobian { iters: usize },

    /// A calibration residual evaluated to NaN or infinity.
    #[error("non-finite calibration residual at iteration {iters}")]
    NonFiniteResidual { iters: usize },

    /// The calibration configuration is out of range.
    #[error("invalid calibration configuration: {0}")]
    InvalidConfig(&'static str),
}
