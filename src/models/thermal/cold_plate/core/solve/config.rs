use crate::support::newton;

/// Solver configuration for the forward heat balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveConfig {
    /// Maximum Newton iterations.
    pub max_iters: usize,

    /// Tolerance on the residual norm.
    ///
    /// Residuals are heat imbalances divided by `max(|heat load|, 1 W)`, so
    /// this is a tolerance relative to the heat load. A tolerance below the
    /// rounding error of the heat balance is raised to that rounding error.
    pub residual_tol: f64,
}

impl Default for SolveConfig {
    fn default() -> Self {
        Self {
            max_iters: 50,
            residual_tol: 1e-9,
        }
    }
}

impl SolveConfig {
    /// Converts this configuration into a Newton solver configuration.
    ///
    /// The tolerance never drops below `rounding_floor`.
    pub(super) fn newton(&self, rounding_floor: f64) -> newton::Config {
        newton::Config {
            max_iters: self.max_iters,
            residual_tol: self.residual_tol.max(rounding_floor),
            ..newton::Config::default()
        }
    }
}
