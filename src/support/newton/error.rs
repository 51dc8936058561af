use thiserror::Error;

/// Errors that can occur during a Newton solve.
///
/// Model and problem failures are tagged with the iteration at which they
/// occurred. Trial points evaluated by the line search count toward the
/// iteration they would have become.
#[derive(Debug, Error)]
pub enum Error<ModelError, ProblemError> {
    /// The model failed to evaluate.
    #[error("model evaluation failed at iteration {iter}")]
    Model {
        iter: usize,
        #[source]
        source: ModelError,
    },

    /// The problem failed to map solver variables or compute residuals.
    #[error("problem evaluation failed at iteration {iter}")]
    Problem {
        iter: usize,
        #[source]
        source: ProblemError,
    },

    /// A residual evaluated to NaN or infinity.
    #[error("non-finite residual at iteration {iter}: {residuals:?}")]
    NonFiniteResidual { iter: usize, residuals: Vec<f64> },

    /// The finite-difference Jacobian could not be inverted.
    #[error("singular jacobian at iteration {iter}")]
    SingularJacobian { iter: usize },

    /// The solver configuration is out of range.
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(&'static str),
}
