//! Numeric constants.

pub use std::f32::consts::*;

/// Largest absolute difference between two components that still makes them
/// compare equal.
pub const TOLERANCE: f32 = 1e-4;

/// Factor converting degrees to radians.
pub const DEG_TO_RAD: f32 = PI / 180.0;

/// Factor converting radians to degrees.
pub const RAD_TO_DEG: f32 = 180.0 * FRAC_1_PI;
