// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Shared tolerance predicate for geometric comparisons.
//!
//! Every tolerant comparison in the workspace (vector and quaternion
//! equality, degenerate-axis detection, SAT touching detection) funnels
//! through [`epsilon_eq`] so there is exactly one notion of "close enough".
//!
//! NaN contract: when the difference of the two inputs is NaN the values are
//! reported as equal. This keeps `NaN == NaN` comparisons of degenerate
//! vectors from cascading into spurious inequality; callers that need to
//! reject NaN must check `is_nan` themselves.

/// Absolute tolerance used by [`epsilon_eq`].
pub const EPSILON: f64 = 1e-6;

/// Returns `true` when `a` and `b` differ by at most [`EPSILON`].
///
/// # Examples
/// ```
/// use gantry_core::math::epsilon_eq;
/// assert!(epsilon_eq(0.25, 0.25 + 5e-7));
/// assert!(!epsilon_eq(0.25, 0.25 + 5e-5));
/// assert!(epsilon_eq(f64::NAN, 1.0));
/// ```
pub fn epsilon_eq(a: f64, b: f64) -> bool {
    epsilon_eq_with(a, b, EPSILON)
}

/// Returns `true` when `a` and `b` differ by at most `epsilon`.
///
/// A NaN difference counts as equal (see module docs).
pub fn epsilon_eq_with(a: f64, b: f64, epsilon: f64) -> bool {
    let difference = a - b;
    if difference.is_nan() {
        return true;
    }
    difference.abs() <= epsilon
}
