// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use gantry_core::math::Vec3;

use crate::types::aabb::Aabb;
use crate::types::orientation::Orientation;

/// Opaque identifier the world layer assigns to a body.
///
/// Ordering is numeric and is what makes broad-phase output deterministic.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub u64);

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "body#{}", self.0)
    }
}

/// Everything the collision core needs to know about one body this tick.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BodySnapshot {
    id: BodyId,
    bounds: Aabb,
    orientation: Orientation,
    motion: Vec3,
}

impl BodySnapshot {
    /// Creates a snapshot.
    #[must_use]
    pub const fn new(id: BodyId, bounds: Aabb, orientation: Orientation, motion: Vec3) -> Self {
        Self {
            id,
            bounds,
            orientation,
            motion,
        }
    }

    /// Unrotated body with zero motion.
    #[must_use]
    pub const fn stationary(id: BodyId, bounds: Aabb) -> Self {
        Self::new(id, bounds, Orientation::IDENTITY, Vec3::ZERO)
    }

    /// Returns a copy moving with `motion`.
    #[must_use]
    pub const fn with_motion(self, motion: Vec3) -> Self {
        Self { motion, ..self }
    }

    /// Returns a copy rotated to `orientation`.
    #[must_use]
    pub const fn with_orientation(self, orientation: Orientation) -> Self {
        Self {
            orientation,
            ..self
        }
    }

    /// Body identifier.
    #[must_use]
    pub const fn id(&self) -> BodyId {
        self.id
    }

    /// World-space axis-aligned bounds at the current position.
    #[must_use]
    pub const fn bounds(&self) -> &Aabb {
        &self.bounds
    }

    /// Current orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Linear motion per tick.
    #[must_use]
    pub const fn motion(&self) -> Vec3 {
        self.motion
    }
}
