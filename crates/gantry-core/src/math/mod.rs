// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Math helpers covering scalar tolerance, 3D vectors, quaternions, and dual
//! quaternions.
//!
//! All arithmetic is `f64`. Comparisons between computed values go through
//! [`epsilon_eq`] rather than `==`.

use std::f64::consts::TAU;

mod dual_quat;
mod quat;
mod scalar;
mod vec3;

pub use dual_quat::DualQuat;
pub use quat::Quat;
pub use scalar::{epsilon_eq, epsilon_eq_with, EPSILON};
pub use vec3::Vec3;

/// Clamps `value` to the inclusive `[min, max]` range.
///
/// NaN passes through unchanged.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Converts degrees to radians.
pub fn deg_to_rad(value: f64) -> f64 {
    value * (TAU / 360.0)
}

/// Converts radians to degrees.
pub fn rad_to_deg(value: f64) -> f64 {
    value * (360.0 / TAU)
}
