// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use gantry_core::math::Vec3;
use thiserror::Error;

use crate::types::body::BodyId;

/// Errors raised while constructing geometry from untrusted input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// Some component of `min` exceeds its counterpart in `max` (or is NaN).
    #[error("invalid AABB: min {min} exceeds max {max}")]
    InvertedBounds {
        /// Offending minimum corner.
        min: Vec3,
        /// Offending maximum corner.
        max: Vec3,
    },
}

/// Errors raised by [`crate::CollisionManager`] queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollisionError {
    /// The requested rotation would bring the mover near other bodies, and
    /// rotation blocking has no narrow-phase resolution yet.
    #[error("rotation blocking is not implemented: {mover} has {candidates} nearby candidate(s)")]
    RotationBlockingUnimplemented {
        /// The body attempting to rotate.
        mover: BodyId,
        /// Number of bodies overlapping the rotated footprint.
        candidates: usize,
    },
}
