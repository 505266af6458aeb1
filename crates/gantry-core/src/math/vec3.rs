// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math::{clamp, epsilon_eq};

/// Immutable 3D vector of `f64` components.
///
/// * Components are world-space units and may represent points, offsets,
///   directions, or per-tick motion depending on the calling context.
/// * Equality is tolerant per component (see [`crate::math::epsilon_eq`])
///   with an exact-equality fallback, so `PartialEq` is not transitive and
///   `Vec3` intentionally does not implement `Eq` or `Hash`.
/// * Sign convention for [`Vec3::dot`]: positive means the two vectors form
///   an acute angle, negative an obtuse one.
#[derive(Debug, Copy, Clone, Default)]
pub struct Vec3 {
    data: [f64; 3],
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis (east).
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis (up).
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis (south).
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { data: [x, y, z] }
    }

    /// Returns the components as an array.
    pub const fn to_array(self) -> [f64; 3] {
        self.data
    }

    /// X component.
    pub const fn x(&self) -> f64 {
        self.data[0]
    }

    /// Y component.
    pub const fn y(&self) -> f64 {
        self.data[1]
    }

    /// Z component.
    pub const fn z(&self) -> f64 {
        self.data[2]
    }

    pub(crate) const fn component(&self, idx: usize) -> f64 {
        self.data[idx]
    }

    /// Offsets the vector by raw components.
    pub fn add_components(&self, x: f64, y: f64, z: f64) -> Self {
        Self::new(
            self.component(0) + x,
            self.component(1) + y,
            self.component(2) + z,
        )
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(
            self.component(0) * factor,
            self.component(1) * factor,
            self.component(2) * factor,
        )
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f64 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
    }

    /// Cross product `self × other`.
    pub fn cross(&self, other: &Self) -> Self {
        let ax = self.component(0);
        let ay = self.component(1);
        let az = self.component(2);
        let bx = other.component(0);
        let by = other.component(1);
        let bz = other.component(2);
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Vector length.
    pub fn length(&self) -> f64 {
        self.magnitude()
    }

    /// Vector magnitude; identical to [`Vec3::length`].
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Squared magnitude of the vector.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Only an exactly zero vector fails; it yields a NaN vector. Callers
    /// must screen zero vectors first (the SAT intersector does so through
    /// tolerant comparison against [`Vec3::ZERO`]).
    pub fn normalize(&self) -> Self {
        self.scale(1.0 / self.length())
    }

    /// Angle between two vectors in radians, in `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos` so rounding error on
    /// (anti)parallel inputs cannot produce NaN.
    pub fn angle(&self, other: &Self) -> f64 {
        let cosine = self.dot(other) / (self.length() * other.length());
        clamp(cosine, -1.0, 1.0).acos()
    }

    /// Component-wise tolerant comparison.
    pub fn epsilon_eq(&self, other: &Self) -> bool {
        epsilon_eq(self.component(0), other.component(0))
            && epsilon_eq(self.component(1), other.component(1))
            && epsilon_eq(self.component(2), other.component(2))
    }
}

impl PartialEq for Vec3 {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.epsilon_eq(other) || self.data == other.data
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x(), self.y(), self.z())
    }
}

/// Converts a 3-element `[f64; 3]` array into a `Vec3` interpreted as `(x, y, z)`.
///
/// # Examples
/// ```
/// use gantry_core::math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self { data: value }
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) + rhs.component(0),
            self.component(1) + rhs.component(1),
            self.component(2) + rhs.component(2),
        )
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) - rhs.component(0),
            self.component(1) - rhs.component(1),
            self.component(2) - rhs.component(2),
        )
    }
}

impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.scale(self)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = self.scale(rhs);
    }
}
