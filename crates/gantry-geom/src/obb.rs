// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Oriented bounding boxes built fresh for every collision test.
//!
//! An [`Obb`] takes an axis-aligned box, rotates its eight corners about the
//! box centre, and carries three probe axes for the separating-axis test.
//! Which probe axes it carries is selected by [`AxisMode`].

use gantry_core::math::{DualQuat, Vec3};
use serde::{Deserialize, Serialize};

use crate::types::aabb::Aabb;
use crate::types::orientation::Orientation;

/// Canonical `right` axis (east).
pub const RIGHT: Vec3 = Vec3::UNIT_X;
/// Canonical `up` axis.
pub const UP: Vec3 = Vec3::UNIT_Y;
/// Canonical `forward` axis (north, `-Z`).
pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// Selects the probe axes an [`Obb`] contributes to the SAT.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisMode {
    /// The canonical world axes, regardless of the box's rotation. Only the
    /// vertices are rotated, so rotated boxes get approximate verdicts.
    #[default]
    WorldAligned,
    /// The canonical axes rotated by the box's own quaternion, which is the
    /// exact SAT formulation for boxes.
    Rotated,
}

/// Eight world-space corners plus three probe axes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Obb {
    center: Vec3,
    vertices: [Vec3; 8],
    axes: [Vec3; 3],
}

impl Obb {
    /// Builds the oriented box for `bounds` rotated by `orientation` about
    /// the bounds' centre.
    ///
    /// Vertices follow the corner order of
    /// [`Extents::corner_offsets`](crate::Extents::corner_offsets).
    #[must_use]
    pub fn new(bounds: &Aabb, orientation: Orientation, mode: AxisMode) -> Self {
        let center = bounds.center();
        let rotation = orientation.to_quat();
        let pose = DualQuat::new(rotation, center);
        let vertices = bounds
            .extents()
            .corner_offsets()
            .map(|offset| pose.transform_point(offset));
        let axes = match mode {
            AxisMode::WorldAligned => [RIGHT, UP, FORWARD],
            AxisMode::Rotated => [RIGHT, UP, FORWARD].map(|axis| rotation.rotate(axis)),
        };
        Self {
            center,
            vertices,
            axes,
        }
    }

    /// Box centre; the rotation pivot.
    #[must_use]
    pub const fn center(&self) -> Vec3 {
        self.center
    }

    /// World-space corners.
    #[must_use]
    pub const fn vertices(&self) -> &[Vec3; 8] {
        &self.vertices
    }

    /// Probe axes in `right, up, forward` order.
    #[must_use]
    pub const fn axes(&self) -> &[Vec3; 3] {
        &self.axes
    }

    /// Probe axis pointing right.
    #[must_use]
    pub const fn right(&self) -> Vec3 {
        self.axes[0]
    }

    /// Probe axis pointing up.
    #[must_use]
    pub const fn up(&self) -> Vec3 {
        self.axes[1]
    }

    /// Probe axis pointing forward.
    #[must_use]
    pub const fn forward(&self) -> Vec3 {
        self.axes[2]
    }

    /// Projects every vertex onto `axis` and returns the `(min, max)` interval.
    #[must_use]
    pub fn project(&self, axis: &Vec3) -> (f64, f64) {
        self.vertices
            .iter()
            .map(|v| v.dot(axis))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), d| {
                (lo.min(d), hi.max(d))
            })
    }
}
