// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::ops::Add;

use gantry_core::math::Quat;

/// Body orientation as roll (about X), yaw (about the vertical Y), and
/// pitch (about Z), all in radians.
///
/// Fields are stored in the order the world layer reports them
/// (roll, yaw, pitch). The world is Y-up, so yaw fills the Y slot of
/// [`Quat::from_euler_angles`] and pitch its Z slot.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Orientation {
    roll: f64,
    yaw: f64,
    pitch: f64,
}

impl Orientation {
    /// No rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates an orientation from roll, yaw, and pitch in radians.
    #[must_use]
    pub const fn new(roll: f64, yaw: f64, pitch: f64) -> Self {
        Self { roll, yaw, pitch }
    }

    /// Rotation about X.
    #[must_use]
    pub const fn roll(&self) -> f64 {
        self.roll
    }

    /// Rotation about the vertical Y axis.
    #[must_use]
    pub const fn yaw(&self) -> f64 {
        self.yaw
    }

    /// Rotation about Z.
    #[must_use]
    pub const fn pitch(&self) -> f64 {
        self.pitch
    }

    /// `true` when all three angles are exactly zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_identity(&self) -> bool {
        self.roll == 0.0 && self.yaw == 0.0 && self.pitch == 0.0
    }

    /// Unit quaternion for this orientation.
    #[must_use]
    pub fn to_quat(&self) -> Quat {
        Quat::from_euler_angles(self.roll, self.yaw, self.pitch).normalized()
    }
}

/// Adds angles component-wise (an angular delta applied to a pose).
impl Add for Orientation {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.roll + rhs.roll,
            self.yaw + rhs.yaw,
            self.pitch + rhs.pitch,
        )
    }
}
