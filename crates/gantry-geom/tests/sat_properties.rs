// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;

use gantry_core::math::Vec3;
use gantry_geom::{intersect, Aabb, AxisMode, CollisionState, Orientation};

fn center() -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(-3.0_f64..3.0).prop_map(Vec3::from)
}

fn half_extents() -> impl Strategy<Value = [f64; 3]> {
    prop::array::uniform3(0.1_f64..2.0)
}

fn pose() -> impl Strategy<Value = Orientation> {
    (-3.2_f64..3.2, -3.2_f64..3.2, -3.2_f64..3.2)
        .prop_map(|(roll, yaw, pitch)| Orientation::new(roll, yaw, pitch))
}

fn boxed(c: Vec3, h: [f64; 3]) -> Aabb {
    Aabb::from_center_half_extents(c, h[0], h[1], h[2])
}

/// Signed per-axis overlap of two AABBs; negative means a gap.
fn axis_overlaps(a: &Aabb, b: &Aabb) -> [f64; 3] {
    let (a_min, a_max) = (a.min().to_array(), a.max().to_array());
    let (b_min, b_max) = (b.min().to_array(), b.max().to_array());
    [0, 1, 2].map(|i| a_max[i].min(b_max[i]) - a_min[i].max(b_min[i]))
}

/// Shortest per-axis move of `a` that separates it from `b`.
fn axis_depths(a: &Aabb, b: &Aabb) -> [f64; 3] {
    let (a_min, a_max) = (a.min().to_array(), a.max().to_array());
    let (b_min, b_max) = (b.min().to_array(), b.max().to_array());
    [0, 1, 2].map(|i| (a_max[i] - b_min[i]).min(b_max[i] - a_min[i]))
}

proptest! {
    #[test]
    fn unrotated_boxes_match_interval_overlap(
        ca in center(), ha in half_extents(),
        cb in center(), hb in half_extents(),
    ) {
        let a = boxed(ca, ha);
        let b = boxed(cb, hb);
        let overlaps = axis_overlaps(&a, &b);
        let hit = intersect(&a, Orientation::IDENTITY, &b, Orientation::IDENTITY, AxisMode::WorldAligned);

        if overlaps.iter().any(|o| *o < -1e-3) {
            prop_assert!(hit.is_separated());
            prop_assert_eq!(hit.state(), CollisionState::NotIntersecting);
        } else if overlaps.iter().all(|o| *o > 1e-3) {
            prop_assert_eq!(hit.state(), CollisionState::Intersecting);
            let shallowest = axis_depths(&a, &b).into_iter().fold(f64::INFINITY, f64::min);
            prop_assert!((hit.overlap() - shallowest).abs() < 1e-9);
        }
    }

    #[test]
    fn applying_the_mtv_resolves_penetration(
        ca in center(), ha in half_extents(),
        cb in center(), hb in half_extents(),
        pa in pose(), pb in pose(),
    ) {
        let a = boxed(ca, ha);
        let b = boxed(cb, hb);
        let hit = intersect(&a, pa, &b, pb, AxisMode::Rotated);
        if let Some(mtv) = hit.mtv() {
            let moved = a.translated(mtv);
            let after = intersect(&moved, pa, &b, pb, AxisMode::Rotated);
            prop_assert_ne!(after.state(), CollisionState::Intersecting);
        }
    }

    #[test]
    fn rotated_separation_is_symmetric(
        ca in center(), ha in half_extents(),
        cb in center(), hb in half_extents(),
        pa in pose(), pb in pose(),
    ) {
        let a = boxed(ca, ha);
        let b = boxed(cb, hb);
        let ab = intersect(&a, pa, &b, pb, AxisMode::Rotated);
        let ba = intersect(&b, pb, &a, pa, AxisMode::Rotated);
        prop_assert_eq!(ab.is_separated(), ba.is_separated());
    }
}
