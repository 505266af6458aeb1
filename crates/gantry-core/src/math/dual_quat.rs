// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;

use crate::math::{Quat, Vec3};

/// Rigid transform (rotation followed by translation) encoded as a dual
/// quaternion `real + ε·dual`.
///
/// `real` holds the unit rotation; `dual` holds `½ · (0, t) ⊗ real` for the
/// translation `t`. Transforming a point rotates it by `real` and then adds
/// `t`.
#[derive(Debug, Copy, Clone)]
pub struct DualQuat {
    real: Quat,
    dual: Quat,
}

impl DualQuat {
    /// Builds the transform "rotate by `rotation`, then translate by
    /// `translation`". The rotation is normalised first.
    pub fn new(rotation: Quat, translation: Vec3) -> Self {
        let real = rotation.normalized();
        let dual = Quat::pure(translation).multiply(&real).scale(0.5);
        Self { real, dual }
    }

    /// Builds a dual quaternion from raw parts without normalisation.
    pub const fn from_parts(real: Quat, dual: Quat) -> Self {
        Self { real, dual }
    }

    /// The identity transform.
    pub const fn identity() -> Self {
        Self {
            real: Quat::identity(),
            dual: Quat::ZERO,
        }
    }

    /// Pure translation by `translation`.
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(Quat::identity(), translation)
    }

    /// Real (rotation) part.
    pub const fn real(&self) -> Quat {
        self.real
    }

    /// Dual (translation-encoding) part.
    pub const fn dual(&self) -> Quat {
        self.dual
    }

    /// Composes two transforms: `self` is applied first, then `other`.
    ///
    /// # Examples
    /// ```
    /// use gantry_core::math::{DualQuat, Quat, Vec3};
    /// let shift = DualQuat::from_translation(Vec3::UNIT_X);
    /// let turn = DualQuat::new(Quat::rotation_quaternion(Vec3::UNIT_Z, 45.0), Vec3::ZERO);
    /// // Shift along X, then a quarter turn about Z, lands on +Y.
    /// assert_eq!(shift.multiply(&turn).translation(), Vec3::UNIT_Y);
    /// ```
    pub fn multiply(&self, other: &Self) -> Self {
        let real = other.real.multiply(&self.real);
        let dual = other.dual.multiply(&self.real) + other.real.multiply(&self.dual);
        Self { real, dual }
    }

    /// Conjugates both parts.
    pub fn conjugate(&self) -> Self {
        Self {
            real: self.real.conjugate(),
            dual: self.dual.conjugate(),
        }
    }

    /// Squared norm of the real part.
    ///
    /// Used as the divisor in [`DualQuat::normalize`].
    pub fn magnitude(&self) -> f64 {
        self.real.dot(&self.real)
    }

    /// Divides both parts by [`DualQuat::magnitude`].
    ///
    /// Exact when the real part is already unit length (the divisor is one)
    /// and for restoring unit length after small drift; it does not take a
    /// square root, so heavily denormalised inputs are only approximately
    /// corrected. The real-dual orthogonality constraint is not enforced.
    pub fn normalize(&self) -> Self {
        let factor = 1.0 / self.magnitude();
        Self {
            real: self.real.scale(factor),
            dual: self.dual.scale(factor),
        }
    }

    /// Rotation encoded in the real part.
    pub const fn rotation(&self) -> Quat {
        self.real
    }

    /// Translation encoded in the dual part: the vector part of
    /// `2 · dual ⊗ conj(real)`.
    pub fn translation(&self) -> Vec3 {
        self.dual
            .scale(2.0)
            .multiply(&self.real.conjugate())
            .vector()
    }

    /// Rotates `point` by the real part and then adds the translation.
    pub fn transform_point(&self, point: Vec3) -> Vec3 {
        self.real.rotate(point) + self.translation()
    }
}

impl Default for DualQuat {
    fn default() -> Self {
        Self::identity()
    }
}

impl PartialEq for DualQuat {
    fn eq(&self, other: &Self) -> bool {
        self.real == other.real && self.dual == other.dual
    }
}

impl fmt::Display for DualQuat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} + ε{}", self.real, self.dual)
    }
}
