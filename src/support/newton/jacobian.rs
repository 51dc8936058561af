//! Finite-difference Jacobian estimation.

use nalgebra::DMatrix;

/// Estimates the Jacobian of `f` at `x` with forward differences.
///
/// `f_x` must be `f(x)`. Column `j` perturbs `x[j]` by `step * max(|x[j]|, 1)`.
pub(super) fn forward_difference<const N: usize, E>(
    x: &[f64; N],
    f_x: &[f64; N],
    step: f64,
    mut f: impl FnMut(&[f64; N]) -> Result<[f64; N], E>,
) -> Result<DMatrix<f64>, E> {
    let mut jac = DMatrix::zeros(N, N);

    for j in 0..N {
        let dx = step * x[j].abs().max(1.0);
        let mut perturbed = *x;
        perturbed[j] += dx;

        let f_perturbed = f(&perturbed)?;
        for i in 0..N {
            jac[(i, j)] = (f_perturbed[i] - f_x[i]) / dx;
        }
    }

    Ok(jac)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    #[test]
    fn linear_map_is_exact() {
        let f = |x: &[f64; 2]| -> Result<[f64; 2], Infallible> {
            Ok([2.0 * x[0] - x[1], 0.5 * x[1]])
        };
        let x = [3.0, -4.0];
        let jac = forward_difference(&x, &f(&x).unwrap(), 1e-7, f).unwrap();

        assert_relative_eq!(jac[(0, 0)], 2.0, max_relative = 1e-6);
        assert_relative_eq!(jac[(0, 1)], -1.0, max_relative = 1e-6);
        assert_relative_eq!(jac[(1, 0)], 0.0, epsilon = 1e-6);
        assert_relative_eq!(jac[(1, 1)], 0.5, max_relative = 1e-6);
    }

    #[test]
    fn step_scales_with_magnitude() {
        // x² at 1e4 has slope 2e4; an absolute step of 1e-7 would lose it to rounding.
        let f = |x: &[f64; 1]| -> Result<[f64; 1], Infallible> { Ok([x[0] * x[0]]) };
        let x = [1e4];
        let jac = forward_difference(&x, &f(&x).unwrap(), 1e-7, f).unwrap();

        assert_relative_eq!(jac[(0, 0)], 2e4, max_relative = 1e-5);
    }

    #[test]
    fn propagates_evaluation_errors() {
        let f = |_: &[f64; 1]| -> Result<[f64; 1], &'static str> { Err("boom") };
        let result = forward_difference(&[1.0], &[0.0], 1e-7, f);
        assert_eq!(result.unwrap_err(), "boom");
    }
}
