//! Checked physical domains for model inputs.
//!
//! A [`Constrained<T, C>`] can only be built from a value that passes the
//! marker `C`'s check, so code holding one never re-validates it.
//!
//! - [`StrictlyPositive`]: flow rates, specific heats, areas, conductivities,
//!   and heat transfer coefficients.
//! - [`NonNegative`]: contact resistance, which may be zero for an ideal
//!   interface.
//!
//! Both markers accept any `PartialOrd + Zero` type, which covers plain
//! floats and every [`uom`] quantity. NaN is always rejected.

mod non_negative;
mod strictly_positive;

use std::{cmp::Ordering, marker::PhantomData};

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A check run once, when a [`Constrained`] value is built.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// Result of building a value from constrained parts.
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use coldplate_models::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{area::square_meter, f64::Area};
///
/// let area = Constrained::<_, StrictlyPositive>::new(Area::new::<square_meter>(1.27e-4)).unwrap();
/// assert_eq!(area.into_inner().get::<square_meter>(), 1.27e-4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Compares `value` with zero, mapping NaN to [`ConstraintError::NotANumber`].
fn sign<T: PartialOrd + num_traits::Zero>(value: &T) -> Result<Ordering, ConstraintError> {
    value
        .partial_cmp(&T::zero())
        .ok_or(ConstraintError::NotANumber)
}
