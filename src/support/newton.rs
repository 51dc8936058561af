//! Newton's method for small nonlinear equation systems.
//!
//! The solver drives an [`EquationProblem`] to zero residual by repeatedly
//! calling its [`Model`]. The Jacobian is estimated with forward finite
//! differences, so neither the model nor the problem needs to supply
//! derivatives. Each Newton step is damped by a backtracking line search on
//! the residual norm. A trial point the model or problem rejects is treated
//! like one that fails to reduce the residual: the step is shortened. The
//! rejection is only reported if the shortest trial step also fails.
//!
//! The result shape mirrors the bracketing solvers in `twine-solvers`: the
//! caller always receives a [`Solution`] with a [`Status`], and decides what
//! an unconverged status means for its domain.
//!
//! [`EquationProblem`]: twine_core::EquationProblem
//! [`Model`]: twine_core::Model

mod config;
mod error;
mod jacobian;

pub use config::Config;
pub use error::Error;

use nalgebra::DVector;
use tracing::{debug, trace};
use twine_core::{EquationProblem, Model};

/// Outcome classification for a Newton solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual norm fell below the configured tolerance.
    Converged,

    /// The iteration budget ran out before the residual tolerance was met.
    MaxIters,

    /// The line search could not reduce the residual norm along the Newton direction.
    Stalled,
}

/// Model input and output at the final iterate.
#[derive(Debug, Clone)]
pub struct Snapshot<I, O> {
    /// Model input built from the final solver variables.
    pub input: I,

    /// Model output for `input`.
    pub output: O,
}

/// Final state of a Newton solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver variables.
    pub x: [f64; N],

    /// Residuals at `x`.
    pub residuals: [f64; N],

    /// Euclidean norm of `residuals`.
    pub residual: f64,

    /// Newton iterations performed.
    pub iters: usize,

    /// Why the solver stopped.
    pub status: Status,

    /// Model input and output evaluated at `x`.
    pub snapshot: Snapshot<I, O>,
}

/// Solves `problem` for zero residual starting from `x0`.
///
/// # Errors
///
/// Returns an [`Error`] if the configuration is invalid, if the model or
/// problem fails at the starting point, during Jacobian estimation, or at the
/// shortest line-search step, or if the estimated Jacobian is singular.
/// Running out of iterations is not an error; it is reported through
/// [`Solution::status`].
pub fn solve<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error<M::Error, P::Error>>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    config.validate()?;

    let mut current = evaluate(model, problem, x0, 0)?;

    for iter in 0..config.max_iters {
        debug!(iter, residual = current.residual, "newton iteration");

        if current.residual <= config.residual_tol {
            return Ok(current.into_solution(iter, Status::Converged));
        }

        let jacobian =
            jacobian::forward_difference(&current.x, &current.residuals, config.fd_step, |x| {
                evaluate(model, problem, *x, iter).map(|eval| eval.residuals)
            })?;

        let neg_residuals = -DVector::from_column_slice(&current.residuals);
        let step = jacobian
            .lu()
            .solve(&neg_residuals)
            .filter(|dx| dx.iter().all(|v| v.is_finite()))
            .ok_or(Error::SingularJacobian { iter })?;

        let mut alpha = 1.0;
        let mut accepted = None;
        let mut failure = None;
        for _ in 0..=config.max_line_search_iters {
            let trial_x: [f64; N] = std::array::from_fn(|i| current.x[i] + alpha * step[i]);
            match evaluate(model, problem, trial_x, iter + 1) {
                Ok(trial) if trial.residual < current.residual => {
                    accepted = Some(trial);
                    break;
                }
                Ok(trial) => {
                    trace!(
                        iter,
                        alpha,
                        residual = trial.residual,
                        "line search rejected step"
                    );
                    failure = None;
                }
                Err(err) => {
                    trace!(iter, alpha, "line search trial failed to evaluate");
                    failure = Some(err);
                }
            }
            alpha *= config.line_search_factor;
        }

        match (accepted, failure) {
            (Some(next), _) => current = next,
            (None, Some(err)) => return Err(err),
            (None, None) => {
                debug!(iter, residual = current.residual, "line search stalled");
                return Ok(current.into_solution(iter, Status::Stalled));
            }
        }
    }

    let status = if current.residual <= config.residual_tol {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(current.into_solution(config.max_iters, status))
}

/// A single model evaluation at solver variables `x`.
struct Evaluation<I, O, const N: usize> {
    x: [f64; N],
    residuals: [f64; N],
    residual: f64,
    input: I,
    output: O,
}

impl<I, O, const N: usize> Evaluation<I, O, N> {
    fn into_solution(self, iters: usize, status: Status) -> Solution<I, O, N> {
        Solution {
            x: self.x,
            residuals: self.residuals,
            residual: self.residual,
            iters,
            status,
            snapshot: Snapshot {
                input: self.input,
                output: self.output,
            },
        }
    }
}

fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
    iter: usize,
) -> Result<Evaluation<M::Input, M::Output, N>, Error<M::Error, P::Error>>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem
        .input(&x)
        .map_err(|source| Error::Problem { iter, source })?;
    let output = model
        .call(&input)
        .map_err(|source| Error::Model { iter, source })?;
    let residuals = problem
        .residuals(&input, &output)
        .map_err(|source| Error::Problem { iter, source })?;

    if residuals.iter().any(|r| !r.is_finite()) {
        return Err(Error::NonFiniteResidual {
            iter,
            residuals: residuals.to_vec(),
        });
    }

    let residual = residuals.iter().map(|r| r * r).sum::<f64>().sqrt();

    Ok(Evaluation {
        x,
        residuals,
        residual,
        input,
        output,
    })
}
