// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Separating-axis test for pairs of [`Obb`]s.
//!
//! Candidate axes, in fixed order: A's three probe axes, B's three probe
//! axes, then the nine normalised crosses `A_i × B_j` (i outer, j inner).
//!
//! Per axis, both vertex sets are projected to intervals `[min, max]`. With
//! `union = max(maxA, maxB) - min(minA, minB)` and
//! `sum = (maxA - minA) + (maxB - minB)`:
//! - `union ≈ sum`: the intervals share an endpoint ([`CollisionState::Touching`]);
//! - `union < sum`: they overlap; the penetration depth is the shorter of
//!   the two pushes that separate them, `maxA - minB` (move A down the axis)
//!   and `maxB - minA` (move A up the axis);
//! - `union > sum`: there is a gap, and the axis separates the boxes.
//!
//! A cross product that is tolerantly zero (parallel edges) is degenerate:
//! it carries no separating information and is skipped.

use gantry_core::math::{epsilon_eq, Vec3};
use tracing::trace;

use crate::obb::{AxisMode, Obb};
use crate::types::aabb::Aabb;
use crate::types::orientation::Orientation;

/// Number of candidate axes for two boxes (3 + 3 + 3×3).
pub const AXIS_COUNT: usize = 15;

/// Per-axis classification, ordered by severity.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CollisionState {
    /// The projections are disjoint.
    NotIntersecting,
    /// The projections meet at an endpoint.
    Touching,
    /// The projections overlap with positive length.
    Intersecting,
}

/// Outcome of testing one candidate axis.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SeparationResult {
    axis: Option<Vec3>,
    state: CollisionState,
    overlap: f64,
    // Sign of the axis along which box A must move to resolve the overlap.
    push: f64,
}

impl SeparationResult {
    /// Result for a degenerate (zero-length) axis.
    #[must_use]
    pub const fn degenerate() -> Self {
        Self {
            axis: None,
            state: CollisionState::NotIntersecting,
            overlap: 0.0,
            push: 1.0,
        }
    }

    /// The tested axis; `None` when the axis was degenerate.
    #[must_use]
    pub const fn axis(&self) -> Option<Vec3> {
        self.axis
    }

    /// Classification on this axis.
    #[must_use]
    pub const fn state(&self) -> CollisionState {
        self.state
    }

    /// Penetration depth along the axis: the shortest move of box A that
    /// separates the projections. Zero unless [`CollisionState::Intersecting`].
    #[must_use]
    pub const fn overlap(&self) -> f64 {
        self.overlap
    }

    /// `true` for a real axis on which the projections are disjoint.
    #[must_use]
    pub const fn separates(&self) -> bool {
        self.axis.is_some() && matches!(self.state, CollisionState::NotIntersecting)
    }
}

/// Verdict for a pair of boxes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Intersection {
    analysis: SeparationResult,
    mtv: Option<Vec3>,
}

impl Intersection {
    /// The deciding axis: the separating axis when separated, otherwise the
    /// minimum-overlap axis.
    #[must_use]
    pub const fn analysis(&self) -> &SeparationResult {
        &self.analysis
    }

    /// Overall state.
    #[must_use]
    pub const fn state(&self) -> CollisionState {
        self.analysis.state
    }

    /// Deciding axis.
    #[must_use]
    pub const fn overlap_axis(&self) -> Option<Vec3> {
        self.analysis.axis
    }

    /// Overlap along [`Intersection::overlap_axis`].
    #[must_use]
    pub const fn overlap(&self) -> f64 {
        self.analysis.overlap
    }

    /// Minimum translation vector that moves box A out of box B.
    ///
    /// `None` exactly when a separating axis was found. A touching pair has
    /// a zero-length MTV.
    #[must_use]
    pub const fn mtv(&self) -> Option<Vec3> {
        self.mtv
    }

    /// `true` when some axis separates the boxes.
    #[must_use]
    pub const fn is_separated(&self) -> bool {
        self.mtv.is_none()
    }
}

/// The fifteen candidate axes for `a` against `b`, degenerate crosses as `None`.
#[must_use]
pub fn candidate_axes(a: &Obb, b: &Obb) -> [Option<Vec3>; AXIS_COUNT] {
    let mut out = [None; AXIS_COUNT];
    for (slot, axis) in out.iter_mut().zip(a.axes().iter().chain(b.axes().iter())) {
        *slot = Some(*axis);
    }
    let mut idx = 6;
    for a_axis in a.axes() {
        for b_axis in b.axes() {
            let cross = a_axis.cross(b_axis);
            out[idx] = if cross == Vec3::ZERO {
                None
            } else {
                Some(cross.normalize())
            };
            idx += 1;
        }
    }
    out
}

/// Projects both boxes onto `axis` and classifies the intervals.
#[must_use]
pub fn separation_on_axis(axis: Option<Vec3>, a: &Obb, b: &Obb) -> SeparationResult {
    let Some(axis) = axis else {
        return SeparationResult::degenerate();
    };
    let (min_a, max_a) = a.project(&axis);
    let (min_b, max_b) = b.project(&axis);

    let union = max_a.max(max_b) - min_a.min(min_b);
    let sum = (max_a - min_a) + (max_b - min_b);

    let down = max_a - min_b;
    let up = max_b - min_a;
    let push = if down <= up { -1.0 } else { 1.0 };

    let (state, overlap) = if epsilon_eq(union, sum) {
        (CollisionState::Touching, 0.0)
    } else if union < sum {
        (CollisionState::Intersecting, down.min(up))
    } else {
        (CollisionState::NotIntersecting, 0.0)
    };
    SeparationResult {
        axis: Some(axis),
        state,
        overlap,
        push,
    }
}

/// Runs the separating-axis test on two prepared boxes.
///
/// Stops at the first separating axis. Otherwise keeps the axis with the
/// smallest overlap (the earliest on ties) and orients the MTV so that
/// translating `a` by it leaves the two boxes touching along that axis.
#[must_use]
pub fn intersect_obbs(a: &Obb, b: &Obb) -> Intersection {
    let mut best: Option<SeparationResult> = None;
    for (idx, axis) in candidate_axes(a, b).into_iter().enumerate() {
        let result = separation_on_axis(axis, a, b);
        let Some(axis) = result.axis else {
            trace!(idx, "skipping degenerate axis");
            continue;
        };
        if result.state == CollisionState::NotIntersecting {
            trace!(idx, %axis, "separating axis found");
            return Intersection {
                analysis: result,
                mtv: None,
            };
        }
        if best.is_none_or(|kept| result.overlap < kept.overlap) {
            best = Some(result);
        }
    }

    let Some(analysis) = best else {
        return Intersection {
            analysis: SeparationResult::degenerate(),
            mtv: None,
        };
    };
    let mtv = analysis
        .axis
        .map(|axis| axis.scale(analysis.overlap * analysis.push));
    Intersection { analysis, mtv }
}

/// Builds both oriented boxes and runs the separating-axis test.
///
/// # Examples
/// ```
/// use gantry_core::math::Vec3;
/// use gantry_geom::{intersect, Aabb, AxisMode, CollisionState, Orientation};
///
/// let a = Aabb::from_center_half_extents(Vec3::ZERO, 0.5, 0.5, 0.5);
/// let b = Aabb::from_center_half_extents(Vec3::new(0.5, 0.0, 0.0), 0.5, 0.5, 0.5);
/// let hit = intersect(&a, Orientation::IDENTITY, &b, Orientation::IDENTITY, AxisMode::default());
/// assert_eq!(hit.state(), CollisionState::Intersecting);
/// assert!((hit.overlap() - 0.5).abs() < 1e-9);
/// assert_eq!(hit.mtv(), Some(Vec3::new(-0.5, 0.0, 0.0)));
/// ```
#[must_use]
pub fn intersect(
    extent_a: &Aabb,
    pose_a: Orientation,
    extent_b: &Aabb,
    pose_b: Orientation,
    mode: AxisMode,
) -> Intersection {
    let a = Obb::new(extent_a, pose_a, mode);
    let b = Obb::new(extent_b, pose_b, mode);
    intersect_obbs(&a, &b)
}
