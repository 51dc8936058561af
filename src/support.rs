//! Supporting utilities shared across models.
//!
//! - [`constraint`]: Type-level numeric constraints (`StrictlyPositive`, `NonNegative`).
//! - [`newton`]: Newton root-finding for small nonlinear equation systems.
//! - [`units`]: Extensions to [`uom`] for quantities it does not provide.

pub mod constraint;
pub mod newton;
pub mod units;
