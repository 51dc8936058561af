//! Thermal systems models.
//!
//! This module contains models for liquid-cooled thermal hardware.

pub mod cold_plate;
