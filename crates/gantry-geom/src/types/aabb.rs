// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use gantry_core::math::Vec3;

use crate::error::GeomError;

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Values are `f64` world units (one unit per block cell).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    min: Vec3,
    max: Vec3,
}

impl Aabb {
    /// Constructs an AABB from its minimum and maximum corners.
    ///
    /// # Panics
    /// Panics if any component of `min` is greater than its counterpart in `max`.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        assert!(ordered(min, max), "invalid AABB: min > max");
        Self { min, max }
    }

    /// Fallible constructor for bounds coming from the world layer.
    pub fn try_new(min: Vec3, max: Vec3) -> Result<Self, GeomError> {
        if ordered(min, max) {
            Ok(Self { min, max })
        } else {
            Err(GeomError::InvertedBounds { min, max })
        }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub const fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub const fn max(&self) -> Vec3 {
        self.max
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max).scale(0.5)
    }

    /// Builds an AABB centered at `center` with half-extents `hx, hy, hz`.
    ///
    /// Negative half-extents are treated by magnitude.
    #[must_use]
    pub fn from_center_half_extents(center: Vec3, hx: f64, hy: f64, hz: f64) -> Self {
        let he = Vec3::new(hx.abs(), hy.abs(), hz.abs());
        Self {
            min: center - he,
            max: center + he,
        }
    }

    /// Returns `true` if this AABB overlaps another (inclusive on faces).
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let a_min = self.min.to_array();
        let a_max = self.max.to_array();
        let b_min = other.min.to_array();
        let b_max = other.max.to_array();
        // Inclusive so that touching faces still reach the narrow phase.
        !(a_max[0] < b_min[0]
            || a_min[0] > b_max[0]
            || a_max[1] < b_min[1]
            || a_min[1] > b_max[1]
            || a_max[2] < b_min[2]
            || a_min[2] > b_max[2])
    }

    /// Inflates the box by a uniform margin `m` in all directions.
    #[must_use]
    pub fn inflate(&self, m: f64) -> Self {
        let delta = Vec3::new(m, m, m);
        Self {
            min: self.min - delta,
            max: self.max + delta,
        }
    }

    /// Moves the box by `delta` without changing its size.
    #[must_use]
    pub fn translated(&self, delta: Vec3) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Offsets of each face from the centre.
    #[must_use]
    pub fn extents(&self) -> Extents {
        let center = self.center();
        let hi = self.max - center;
        let lo = center - self.min;
        Extents {
            x_pos: hi.x(),
            x_neg: lo.x(),
            y_pos: hi.y(),
            y_neg: lo.y(),
            z_pos: hi.z(),
            z_neg: lo.z(),
        }
    }
}

/// Distances from an AABB's centre to each of its six faces.
///
/// All six values are non-negative for a valid box. Only used while turning
/// a box into oriented corners, where a corner offset picks `+pos` or
/// `-neg` per axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Extents {
    /// Distance to the `+x` face.
    pub x_pos: f64,
    /// Distance to the `-x` face.
    pub x_neg: f64,
    /// Distance to the `+y` face.
    pub y_pos: f64,
    /// Distance to the `-y` face.
    pub y_neg: f64,
    /// Distance to the `+z` face.
    pub z_pos: f64,
    /// Distance to the `-z` face.
    pub z_neg: f64,
}

impl Extents {
    /// Corner offsets from the centre in the fixed order
    /// `+++ ++- +-+ +-- -++ -+- --+ ---` (sign per x, y, z).
    #[must_use]
    pub fn corner_offsets(&self) -> [Vec3; 8] {
        let xs = [self.x_pos, -self.x_neg];
        let ys = [self.y_pos, -self.y_neg];
        let zs = [self.z_pos, -self.z_neg];
        let mut out = [Vec3::ZERO; 8];
        let mut idx = 0;
        for x in xs {
            for y in ys {
                for z in zs {
                    out[idx] = Vec3::new(x, y, z);
                    idx += 1;
                }
            }
        }
        out
    }
}

fn ordered(min: Vec3, max: Vec3) -> bool {
    let a = min.to_array();
    let b = max.to_array();
    a[0] <= b[0] && a[1] <= b[1] && a[2] <= b[2]
}
