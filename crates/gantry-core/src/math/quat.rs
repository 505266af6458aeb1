// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::math::{deg_to_rad, epsilon_eq, Vec3, EPSILON};

/// Below this distance of `|q|²` from one, [`Quat::normalized`] takes the
/// Padé-approximant path instead of calling `sqrt`. Tuned so the first-order
/// correction agrees with the exact path to `f64` precision.
const PADE_THRESHOLD: f64 = 2.107342e-8;

/// Quaternion stored as `(w, x, y, z)`: scalar part first, then the vector
/// part.
///
/// * A quaternion used as a rotation must be unit length. The Euler-angle
///   constructor always yields (approximately) unit quaternions; call
///   [`Quat::normalized`] to correct accumulated drift.
/// * Angles are radians except for [`Quat::rotation_quaternion`], which
///   takes degrees.
/// * Equality is tolerant per component with an exact fallback.
#[derive(Debug, Copy, Clone)]
pub struct Quat {
    data: [f64; 4],
}

impl Quat {
    /// The zero quaternion. Not a rotation.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a quaternion from its scalar part `w` and vector part
    /// `(x, y, z)`.
    pub const fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { data: [w, x, y, z] }
    }

    /// Returns the identity rotation `(1, 0, 0, 0)`.
    pub const fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Creates a quaternion from a scalar part and a vector part.
    pub const fn from_scalar_vector(w: f64, vector: Vec3) -> Self {
        Self::new(w, vector.x(), vector.y(), vector.z())
    }

    /// Embeds `vector` as the pure quaternion `(0, vector)`.
    pub const fn pure(vector: Vec3) -> Self {
        Self::from_scalar_vector(0.0, vector)
    }

    /// Creates the real quaternion `(scalar, 0, 0, 0)`.
    pub const fn real(scalar: f64) -> Self {
        Self::new(scalar, 0.0, 0.0, 0.0)
    }

    /// Builds a rotation from roll (about X), pitch (about Y), and yaw (about
    /// Z), all in radians, using the half-angle formula.
    pub fn from_euler_angles(roll: f64, pitch: f64, yaw: f64) -> Self {
        let (sin_roll, cos_roll) = (0.5 * roll).sin_cos();
        let (sin_pitch, cos_pitch) = (0.5 * pitch).sin_cos();
        let (sin_yaw, cos_yaw) = (0.5 * yaw).sin_cos();

        let cpcy = cos_pitch * cos_yaw;
        let spsy = sin_pitch * sin_yaw;

        Self::new(
            cos_roll * cpcy + sin_roll * spsy,
            sin_roll * cpcy - cos_roll * spsy,
            cos_roll * sin_pitch * cos_yaw + sin_roll * cos_pitch * sin_yaw,
            cos_roll * cos_pitch * sin_yaw - sin_roll * sin_pitch * cos_yaw,
        )
    }

    /// Axis-angle constructor taking the angle in degrees.
    ///
    /// The angle is fed to `cos`/`sin` as-is rather than halved, so callers
    /// pass the full angle and get a quaternion that rotates by twice that
    /// amount; equivalently, passing `θ / 2` degrees yields a `θ` rotation.
    /// The axis is not normalised: pass a unit axis to get a unit quaternion.
    ///
    /// # Examples
    /// ```
    /// use gantry_core::math::{Quat, Vec3};
    /// // 45 "degrees" in gives a quarter turn about Z.
    /// let quarter = Quat::rotation_quaternion(Vec3::UNIT_Z, 45.0);
    /// assert_eq!(quarter.rotate(Vec3::UNIT_X), Vec3::UNIT_Y);
    /// ```
    pub fn rotation_quaternion(axis: Vec3, degrees: f64) -> Self {
        let radians = deg_to_rad(degrees);
        Self::from_scalar_vector(radians.cos(), axis.scale(radians.sin()))
    }

    /// Returns the components as `[w, x, y, z]`.
    pub const fn to_array(self) -> [f64; 4] {
        self.data
    }

    fn component(&self, idx: usize) -> f64 {
        self.data[idx]
    }

    /// Scalar part.
    pub const fn w(&self) -> f64 {
        self.data[0]
    }

    /// X component of the vector part.
    pub const fn x(&self) -> f64 {
        self.data[1]
    }

    /// Y component of the vector part.
    pub const fn y(&self) -> f64 {
        self.data[2]
    }

    /// Z component of the vector part.
    pub const fn z(&self) -> f64 {
        self.data[3]
    }

    /// Vector part as a [`Vec3`].
    pub const fn vector(&self) -> Vec3 {
        Vec3::new(self.data[1], self.data[2], self.data[3])
    }

    /// Hamilton product `self ⊗ other`.
    ///
    /// Non-commutative. With `v1`, `v2` the vector parts:
    /// `w = w1·w2 − v1·v2` and `v = w1·v2 + w2·v1 + v1 × v2`.
    ///
    /// # Examples
    /// ```
    /// use gantry_core::math::Quat;
    /// let a = Quat::new(0.0, 2.0, 1.0, 2.0);
    /// let b = Quat::new(0.0, 1.0, 1.0, 1.0);
    /// assert_eq!(a.multiply(&b), Quat::new(-5.0, -1.0, 0.0, 1.0));
    /// assert_ne!(a.multiply(&b), b.multiply(&a));
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let w1 = self.component(0);
        let x1 = self.component(1);
        let y1 = self.component(2);
        let z1 = self.component(3);

        let w2 = other.component(0);
        let x2 = other.component(1);
        let y2 = other.component(2);
        let z2 = other.component(3);

        Self::new(
            w1 * w2 - (x1 * x2 + y1 * y2 + z1 * z2),
            w1 * x2 + w2 * x1 + y1 * z2 - z1 * y2,
            w1 * y2 + w2 * y1 - x1 * z2 + z1 * x2,
            w1 * z2 + w2 * z1 + x1 * y2 - y1 * x2,
        )
    }

    /// Multiplies every component by `factor`.
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(
            self.component(0) * factor,
            self.component(1) * factor,
            self.component(2) * factor,
            self.component(3) * factor,
        )
    }

    /// Four-dimensional dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.component(0) * other.component(0)
            + self.component(1) * other.component(1)
            + self.component(2) * other.component(2)
            + self.component(3) * other.component(3)
    }

    /// Squared norm `w² + x² + y² + z²`.
    pub fn length_squared(&self) -> f64 {
        self.dot(self)
    }

    /// Norm of the quaternion.
    pub fn length(&self) -> f64 {
        self.magnitude()
    }

    /// Norm of the quaternion; identical to [`Quat::length`].
    pub fn magnitude(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Returns the unit quaternion with the same orientation.
    ///
    /// When `|q|²` is within the Padé threshold of one the first-order
    /// correction `q · 2 / (1 + |q|²)` is used; otherwise `q / sqrt(|q|²)`.
    /// Both paths agree to `f64` precision. A quaternion with norm at or
    /// below [`EPSILON`] has no orientation and yields the identity.
    pub fn normalized(&self) -> Self {
        let len_sq = self.length_squared();
        if (1.0 - len_sq).abs() < PADE_THRESHOLD {
            return self.scale(2.0 / (1.0 + len_sq));
        }
        if len_sq <= EPSILON * EPSILON {
            return Self::identity();
        }
        self.scale(1.0 / len_sq.sqrt())
    }

    /// Negates the vector part.
    pub fn conjugate(&self) -> Self {
        Self::new(
            self.component(0),
            -self.component(1),
            -self.component(2),
            -self.component(3),
        )
    }

    /// Multiplicative inverse `conjugate / |q|²`.
    ///
    /// Valid for any non-zero quaternion, unit or not. The zero quaternion
    /// has no inverse and yields non-finite components.
    pub fn inverse(&self) -> Self {
        self.conjugate().scale(1.0 / self.length_squared())
    }

    /// Rotates `vector` by this quaternion.
    ///
    /// The quaternion is normalised first, so slightly drifted rotations are
    /// still applied as rigid rotations. Computes `q ⊗ (0, v) ⊗ q⁻¹` and
    /// returns the vector part.
    pub fn rotate(&self, vector: Vec3) -> Vec3 {
        let q = self.normalized();
        q.multiply(&Self::pure(vector))
            .multiply(&q.inverse())
            .vector()
    }

    /// `true` when the vector part is exactly zero and the scalar part is not.
    #[allow(clippy::float_cmp)]
    pub fn is_real(&self) -> bool {
        self.w() != 0.0 && self.vector_is_zero()
    }

    /// `true` when the scalar part is exactly zero and the vector part is not.
    #[allow(clippy::float_cmp)]
    pub fn is_pure(&self) -> bool {
        self.w() == 0.0 && !self.vector_is_zero()
    }

    /// `true` when `|q|²` is within [`EPSILON`] of one.
    pub fn is_unit(&self) -> bool {
        epsilon_eq(self.length_squared(), 1.0)
    }

    #[allow(clippy::float_cmp)]
    fn vector_is_zero(&self) -> bool {
        self.x() == 0.0 && self.y() == 0.0 && self.z() == 0.0
    }

    /// Component-wise tolerant comparison.
    pub fn epsilon_eq(&self, other: &Self) -> bool {
        (0..4).all(|idx| epsilon_eq(self.component(idx), other.component(idx)))
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for Quat {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.epsilon_eq(other) || self.data == other.data
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}; {}, {}, {})",
            self.w(),
            self.x(),
            self.y(),
            self.z()
        )
    }
}

/// Converts a 4-element `[f64; 4]` array `(w, x, y, z)` into a `Quat`.
/// Components are taken verbatim; normalisation is not enforced.
impl From<[f64; 4]> for Quat {
    fn from(value: [f64; 4]) -> Self {
        Self { data: value }
    }
}

impl Add for Quat {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) + rhs.component(0),
            self.component(1) + rhs.component(1),
            self.component(2) + rhs.component(2),
            self.component(3) + rhs.component(3),
        )
    }
}

impl Sub for Quat {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.component(0) - rhs.component(0),
            self.component(1) - rhs.component(1),
            self.component(2) - rhs.component(2),
            self.component(3) - rhs.component(3),
        )
    }
}

impl Neg for Quat {
    type Output = Self;
    fn neg(self) -> Self {
        self.scale(-1.0)
    }
}

/// Hamilton product; same as [`Quat::multiply`].
impl Mul for Quat {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<f64> for Quat {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}
