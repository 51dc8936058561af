use super::Error;

/// Newton solver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum Newton iterations.
    pub max_iters: usize,

    /// Convergence threshold on the Euclidean residual norm.
    ///
    /// Problems are expected to scale their residuals so this is a relative
    /// tolerance.
    pub residual_tol: f64,

    /// Relative finite-difference step, applied as `fd_step * max(|x_j|, 1)`.
    pub fd_step: f64,

    /// Step-length reduction factor for the backtracking line search, in `(0, 1)`.
    pub line_search_factor: f64,

    /// Maximum step reductions before a Newton step is declared stalled.
    pub max_line_search_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 50,
            residual_tol: 1e-9,
            fd_step: 1e-7,
            line_search_factor: 0.5,
            max_line_search_iters: 30,
        }
    }
}

impl Config {
    /// Checks that every setting lies in its valid range.
    pub(super) fn validate<ModelError, ProblemError>(
        &self,
    ) -> Result<(), Error<ModelError, ProblemError>> {
        if !(self.residual_tol.is_finite() && self.residual_tol > 0.0) {
            return Err(Error::InvalidConfig(
                "residual_tol must be positive and finite",
            ));
        }
        if !(self.fd_step.is_finite() && self.fd_step > 0.0) {
            return Err(Error::InvalidConfig("fd_step must be positive and finite"));
        }
        if !(self.line_search_factor > 0.0 && self.line_search_factor < 1.0) {
            return Err(Error::InvalidConfig(
                "line_search_factor must lie strictly between 0 and 1",
            ));
        }
        Ok(())
    }
}
