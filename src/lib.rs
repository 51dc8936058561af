//! # Cold Plate Models
//!
//! Steady-state thermal models for liquid-cooled cold plates, built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's `core` module and moves to [`support`]
//! once more than one model needs it. The Newton solver in
//! [`support::newton`] followed that path: both the forward network solve and
//! the coefficient calibration drive it.

pub mod models;
pub mod support;
