// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! gantry-core: rotation and transform algebra for contraption collision.
//!
//! Everything here is a `Copy` value type. No operation mutates an existing
//! instance, nothing allocates, and every routine is safe to call from any
//! number of threads at once.
//!
//! Equality on [`math::Vec3`], [`math::Quat`], and [`math::DualQuat`] is
//! tolerance based (see [`math::epsilon_eq`]) so that floating-point drift
//! accumulated over many ticks does not break comparisons.
#![forbid(unsafe_code)]

pub mod math;
